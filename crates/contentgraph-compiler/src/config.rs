//! Compiler configuration.

use serde::Deserialize;

/// What the filter translator does with keys it cannot resolve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterMode {
    /// Drop unresolved keys and invalid values.
    #[default]
    Permissive,
    /// Reject them with a validation error.
    Strict,
}

/// Semantics of `TypeRegistry::register_many` when a name is already taken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BatchRegistration {
    /// Register in order; entries before the duplicate stay registered.
    #[default]
    Sequential,
    /// Validate the whole batch first; nothing is registered on failure.
    Atomic,
}

/// Configuration for a schema build.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompilerConfig {
    pub(crate) filter_mode: FilterMode,
    pub(crate) batch_registration: BatchRegistration,
    /// Data-object key naming the concrete type of a morph relation entry
    pub(crate) morph_discriminator: String,
    /// Data-object key naming the component of a dynamic-zone entry
    pub(crate) dynamic_zone_discriminator: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            filter_mode: FilterMode::default(),
            batch_registration: BatchRegistration::default(),
            morph_discriminator: "__type".to_string(),
            dynamic_zone_discriminator: "__component".to_string(),
        }
    }
}

impl CompilerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn filter_mode(mut self, mode: FilterMode) -> Self {
        self.filter_mode = mode;
        self
    }

    /// Shorthand for `filter_mode(FilterMode::Strict)`.
    pub fn strict(self, strict: bool) -> Self {
        self.filter_mode(if strict {
            FilterMode::Strict
        } else {
            FilterMode::Permissive
        })
    }

    pub fn batch_registration(mut self, mode: BatchRegistration) -> Self {
        self.batch_registration = mode;
        self
    }

    pub fn morph_discriminator(mut self, key: impl Into<String>) -> Self {
        self.morph_discriminator = key.into();
        self
    }

    pub fn dynamic_zone_discriminator(mut self, key: impl Into<String>) -> Self {
        self.dynamic_zone_discriminator = key.into();
        self
    }

    pub fn get_filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    pub fn get_batch_registration(&self) -> BatchRegistration {
        self.batch_registration
    }
}
