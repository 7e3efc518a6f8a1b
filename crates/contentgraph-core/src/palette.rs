//! ANSI styling for schema dumps.
//!
//! - Blue: type names
//! - Green: field names
//! - Dim: provenance and structural keywords

/// Terminal palette for rendered schema output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub field: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self::PLAIN
    }
}

impl Palette {
    pub const ANSI: Self = Self {
        name: "\x1b[34m",
        field: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const PLAIN: Self = Self {
        name: "",
        field: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ANSI } else { Self::PLAIN }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    pub fn name(&self, text: &str) -> String {
        self.paint(self.name, text)
    }

    pub fn field(&self, text: &str) -> String {
        self.paint(self.field, text)
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(self.dim, text)
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if style.is_empty() {
            return text.to_string();
        }
        format!("{style}{text}{}", self.reset)
    }
}
