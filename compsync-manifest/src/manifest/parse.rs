//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{MANIFEST_FILE, Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE)
    }
}

impl Manifest {
    /// Parse a compsync.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a compsync.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    manifest.project.validate(&ctx.push("project"))?;

    for (i, dir) in manifest.dirs.iter().enumerate() {
        dir.validate(&ctx.push(format!("dirs[{}]", i)))?;
    }

    for (package, library) in &manifest.libraries {
        library.validate(package, &ctx.push("libraries").push(package.as_str()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::LibraryComponent;

    #[test]
    fn test_empty_manifest_uses_defaults() {
        let manifest = Manifest::from_str("").unwrap();
        assert!(manifest.is_empty());
        assert_eq!(manifest.project.output, PathBuf::from("components.d.ts"));
        assert_eq!(manifest.project.module, "@vue/runtime-core");
        assert_eq!(manifest.project.interface, "GlobalComponents");
    }

    #[test]
    fn test_full_manifest() {
        let manifest = Manifest::from_str(
            r#"
            [project]
            output = "types/components.d.ts"
            module = "vue"

            [[dirs]]
            path = "src/components"

            [[dirs]]
            path = "src/widgets"
            extensions = ["vue", "tsx"]
            deep = false
            directory_as_namespace = true
            prefix = "W"
            exclude = ["**/*.stories.vue"]

            [libraries."element-plus/es"]
            components = ["ElButton", { tag = "ElBtn", export = "ElButton" }]

            [libraries.vue-router]
            components = ["RouterLink", "RouterView"]
            "#,
        )
        .unwrap();

        assert_eq!(manifest.project.output, PathBuf::from("types/components.d.ts"));
        assert_eq!(manifest.project.module, "vue");

        assert_eq!(manifest.dirs.len(), 2);
        assert!(manifest.dirs[0].deep);
        assert_eq!(manifest.dirs[0].extensions, vec!["vue"]);
        assert!(!manifest.dirs[1].deep);
        assert!(manifest.dirs[1].directory_as_namespace);
        assert!(manifest.dirs[1].matches_extension("tsx"));
        assert_eq!(manifest.dirs[1].prefix, "W");

        let packages: Vec<_> = manifest.libraries.keys().map(String::as_str).collect();
        assert_eq!(packages, vec!["element-plus/es", "vue-router"]);
        assert_eq!(
            manifest.libraries["element-plus/es"].components[1],
            LibraryComponent::Aliased {
                tag: "ElBtn".to_string(),
                export: "ElButton".to_string()
            }
        );
        assert_eq!(manifest.library_component_count(), 4);
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = Manifest::from_str("[project]\nouptut = \"x.d.ts\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_library_tag() {
        let err = Manifest::from_str(
            r#"
            [libraries.ui]
            components = ["Good", "not-valid"]
            "#,
        )
        .unwrap_err();

        match *err {
            Error::InvalidIdentifier { name, context, span, .. } => {
                assert_eq!(name, "not-valid");
                assert_eq!(context, "component tag in 'libraries.ui'");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_extensions_rejected() {
        let err = Manifest::from_str(
            r#"
            [[dirs]]
            path = "src/components"
            extensions = []
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_dotted_extension_rejected() {
        let err = Manifest::from_str(
            r#"
            [[dirs]]
            path = "src/components"
            extensions = [".vue"]
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("without a leading dot"));
    }

    #[test]
    fn test_empty_path_rejected() {
        let err = Manifest::from_str("[[dirs]]\npath = \"\"\n").unwrap_err();
        assert_eq!(err.to_string(), "path in 'dirs[0]' cannot be empty");
    }

    #[test]
    fn test_invalid_glob_rejected() {
        let err = Manifest::from_str(
            r#"
            [[dirs]]
            path = "src/components"
            exclude = ["**/[broken"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::InvalidGlob { ref pattern, .. } if pattern == "**/[broken"));
    }

    #[test]
    fn test_invalid_interface_name() {
        let err = Manifest::from_str("[project]\ninterface = \"Global Components\"\n").unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }
}
