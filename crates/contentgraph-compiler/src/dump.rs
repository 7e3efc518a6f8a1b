//! Human-readable rendering of a registry, for debugging and snapshots.
//!
//! The syntax resembles a schema language, but this is not a wire format.

use std::fmt::Write;

use contentgraph_core::Palette;
use indexmap::IndexMap;

use crate::compile::CompiledSchema;
use crate::registry::{Entry, Provenance, TypeRegistry};
use crate::types::{Field, InputValue, TypeDefinition};

/// Renders registry entries in registration order.
pub struct Dumper<'a> {
    registry: &'a TypeRegistry,
    palette: Palette,
    provenance: bool,
    only: Option<Vec<String>>,
}

impl<'a> Dumper<'a> {
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self {
            registry,
            palette: Palette::PLAIN,
            provenance: false,
            only: None,
        }
    }

    pub fn colored(mut self, enabled: bool) -> Self {
        self.palette = Palette::new(enabled);
        self
    }

    /// Append `# kind origin` comments to each definition header.
    pub fn provenance(mut self, enabled: bool) -> Self {
        self.provenance = enabled;
        self
    }

    /// Restrict output to the given names, still in registration order.
    pub fn only<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn dump(&self) -> String {
        let blocks: Vec<String> = self
            .registry
            .iter()
            .filter(|(name, _)| match &self.only {
                Some(only) => only.iter().any(|n| n.as_str() == *name),
                None => true,
            })
            .map(|(name, entry)| self.render(name, entry))
            .collect();
        let mut out = blocks.join("\n\n");
        out.push('\n');
        out
    }

    fn render(&self, name: &str, entry: &Entry) -> String {
        let p = &self.palette;
        let mut out = String::new();
        let keyword = p.dim(entry.definition.keyword());
        let name = p.name(name);

        match &entry.definition {
            TypeDefinition::Scalar(_) => {
                write!(out, "{keyword} {name}").ok();
                self.render_provenance(&mut out, &entry.provenance);
            }
            TypeDefinition::Object(object) => {
                self.render_fields_block(&mut out, &keyword, &name, &entry.provenance, &object.fields);
            }
            TypeDefinition::Extension(ext) => {
                let name = p.name(&ext.extends);
                self.render_fields_block(&mut out, &keyword, &name, &entry.provenance, &ext.fields);
            }
            TypeDefinition::InputObject(input) => {
                write!(out, "{keyword} {name} {{").ok();
                self.render_provenance(&mut out, &entry.provenance);
                for (field, value) in &input.fields {
                    write!(out, "\n  {}: {}", p.field(field), value.ty).ok();
                }
                out.push_str("\n}");
            }
            TypeDefinition::Enum(e) => {
                write!(out, "{keyword} {name} {{").ok();
                self.render_provenance(&mut out, &entry.provenance);
                for value in &e.values {
                    write!(out, "\n  {}", value.name).ok();
                }
                out.push_str("\n}");
            }
            TypeDefinition::Union(union) => {
                write!(out, "{keyword} {name}").ok();
                if !union.members.is_empty() {
                    let members: Vec<String> =
                        union.members.iter().map(|m| p.name(&m.type_name)).collect();
                    write!(out, " = {}", members.join(" | ")).ok();
                }
                self.render_provenance(&mut out, &entry.provenance);
            }
        }
        out
    }

    fn render_fields_block(
        &self,
        out: &mut String,
        keyword: &str,
        name: &str,
        provenance: &Provenance,
        fields: &IndexMap<String, Field>,
    ) {
        write!(out, "{keyword} {name} {{").ok();
        self.render_provenance(out, provenance);
        for (field_name, field) in fields {
            write!(
                out,
                "\n  {}{}: {}",
                self.palette.field(field_name),
                render_args(&field.args),
                field.ty
            )
            .ok();
        }
        out.push_str("\n}");
    }

    fn render_provenance(&self, out: &mut String, provenance: &Provenance) {
        if !self.provenance {
            return;
        }
        let mut comment = format!("# {}", provenance.kind.as_str());
        if let Some(uid) = provenance.origin_uid() {
            write!(comment, " {uid}").ok();
        }
        if let Some(attribute) = &provenance.attribute {
            write!(comment, ":{attribute}").ok();
        }
        write!(out, "  {}", self.palette.dim(&comment)).ok();
    }
}

impl CompiledSchema {
    pub fn dumper(&self) -> Dumper<'_> {
        Dumper::new(&self.registry)
    }
}

fn render_args(args: &IndexMap<String, InputValue>) -> String {
    if args.is_empty() {
        return String::new();
    }
    let args: Vec<String> = args
        .iter()
        .map(|(name, value)| format!("{name}: {}", value.ty))
        .collect();
    format!("({})", args.join(", "))
}
