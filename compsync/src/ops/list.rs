//! List operation - resolve the registry without writing.

use compsync_codegen::Synchronizer;
use compsync_manifest::CompsyncToml;
use eyre::{Context, Result};

use crate::reports::ListReport;

/// Execute the list operation.
pub fn list(toml: &CompsyncToml) -> Result<ListReport> {
    let resolution = Synchronizer::from_toml(toml)
        .resolve()
        .wrap_err("Failed to scan components")?;

    Ok(ListReport {
        components: resolution.registry.entries().to_vec(),
        overrides: resolution.registry.overrides().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use compsync_codegen::{SourceKind, testing::ProjectFixture};
    use compsync_manifest::MANIFEST_FILE;

    use super::*;

    #[test]
    fn test_list_is_sorted() {
        let project = ProjectFixture::new().unwrap();
        project.components(&["src/components/Zeta.vue", "src/components/Alpha.vue"]);
        project.manifest(
            r#"
[[dirs]]
path = "src/components"

[libraries."element-plus/es"]
components = ["ElButton"]
"#,
        );
        let toml = CompsyncToml::open(project.path(MANIFEST_FILE)).unwrap();

        let report = list(&toml).unwrap();
        let tags: Vec<&str> = report.components.iter().map(|c| c.tag_name.as_str()).collect();

        assert_eq!(tags, ["Alpha", "ElButton", "Zeta"]);
        assert_eq!(report.components[1].kind, SourceKind::Library);
        assert!(report.overrides.is_empty());
    }
}
