//! TypeScript interface builder.

use crate::builder::{CodeFragment, Renderable};

/// A field in a TypeScript interface.
#[derive(Debug, Clone)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    fn render(&self) -> String {
        format!("{}: {}", self.name, self.ty)
    }
}

/// Builder for TypeScript interfaces.
///
/// Fields are written one per line without trailing semicolons, the style
/// used by generated declaration files. Interfaces are always exported.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    fields: Vec<InterfaceField>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add fields from an iterator.
    pub fn fields(mut self, fields: impl IntoIterator<Item = InterfaceField>) -> Self {
        self.fields.extend(fields);
        self
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let header = format!("export interface {}", self.name);
        if self.fields.is_empty() {
            vec![CodeFragment::line(format!("{} {{}}", header))]
        } else {
            vec![CodeFragment::block(
                format!("{} {{", header),
                self.fields
                    .iter()
                    .map(|f| CodeFragment::Line(f.render()))
                    .collect(),
                Some("}".to_string()),
            )]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CodeBuilder;

    fn render(interface: &Interface) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(interface);
        builder.build()
    }

    #[test]
    fn test_empty_interface() {
        let i = Interface::new("GlobalComponents");
        assert_eq!(render(&i), "export interface GlobalComponents {}\n");
    }

    #[test]
    fn test_interface_with_fields() {
        let i = Interface::new("GlobalComponents").fields([
            InterfaceField::new("RouterLink", "typeof import('vue-router')['RouterLink']"),
            InterfaceField::new("RouterView", "typeof import('vue-router')['RouterView']"),
        ]);
        assert_eq!(
            render(&i),
            "export interface GlobalComponents {\n  RouterLink: typeof import('vue-router')['RouterLink']\n  RouterView: typeof import('vue-router')['RouterView']\n}\n"
        );
    }
}
