use serde::Deserialize;

use super::ParseContext;
use crate::Result;

/// A `[libraries."<package>"]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibraryConfig {
    /// Components exported by the package
    #[serde(default)]
    pub components: Vec<LibraryComponent>,
}

/// A component exported by a library.
///
/// Written either as a bare name (`"ElButton"`), used as both tag and export,
/// or as `{ tag = "ElBtn", export = "ElButton" }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LibraryComponent {
    Name(String),
    Aliased { tag: String, export: String },
}

impl LibraryComponent {
    /// Tag name registered globally.
    pub fn tag(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Aliased { tag, .. } => tag,
        }
    }

    /// Symbol imported from the package.
    pub fn export(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Aliased { export, .. } => export,
        }
    }
}

impl LibraryConfig {
    pub(crate) fn validate(&self, package: &str, ctx: &ParseContext) -> Result<()> {
        if package.trim().is_empty() {
            return Err(ctx
                .source_context()
                .validation_error("library package name cannot be empty", None));
        }

        for component in &self.components {
            ctx.validate_identifier(component.tag(), "component tag")?;
            ctx.validate_identifier(component.export(), "export name")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_name_is_tag_and_export() {
        let c: LibraryComponent = serde_json::from_str(r#""ElButton""#).unwrap();
        assert_eq!(c.tag(), "ElButton");
        assert_eq!(c.export(), "ElButton");
    }

    #[test]
    fn test_aliased_component() {
        let c: LibraryComponent =
            serde_json::from_str(r#"{ "tag": "ElBtn", "export": "ElButton" }"#).unwrap();
        assert_eq!(c.tag(), "ElBtn");
        assert_eq!(c.export(), "ElButton");
    }
}
