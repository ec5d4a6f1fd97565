//! Starter compsync.toml written by `compsync init`.

use std::path::{Path, PathBuf};

use compsync_core::{FileRules, GeneratedFile, Overwrite};
use compsync_manifest::MANIFEST_FILE;

/// The starter manifest.
pub struct ManifestTemplate {
    pub components_dir: String,
    pub output: String,
    pub overwrite: Overwrite,
}

impl ManifestTemplate {
    pub fn new() -> Self {
        Self {
            components_dir: "src/components".to_string(),
            output: "components.d.ts".to_string(),
            overwrite: Overwrite::IfMissing,
        }
    }

    pub fn with_components_dir(mut self, dir: impl Into<String>) -> Self {
        self.components_dir = dir.into();
        self
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }
}

impl Default for ManifestTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratedFile for ManifestTemplate {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(MANIFEST_FILE)
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: self.overwrite,
        }
    }

    fn render(&self) -> String {
        format!(
            r#"[project]
output = {}
# module = "@vue/runtime-core"
# interface = "GlobalComponents"

[[dirs]]
path = {}
# extensions = ["vue"]
# deep = true
# directory_as_namespace = false
# prefix = ""
# exclude = ["**/*.stories.vue"]

# Components exported by UI libraries, keyed by import specifier:
#
# [libraries."element-plus/es"]
# components = ["ElButton", "ElDialog", {{ tag = "ElBtn", export = "ElButton" }}]

[libraries.vue-router]
components = ["RouterLink", "RouterView"]
"#,
            toml_string(&self.output),
            toml_string(&self.components_dir)
        )
    }
}

/// Basic TOML string with quotes and escapes.
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use compsync_core::WriteResult;
    use compsync_manifest::Manifest;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_template_parses() {
        let manifest = Manifest::from_str(&ManifestTemplate::new().render()).unwrap();
        assert_eq!(manifest.dirs.len(), 1);
        assert_eq!(manifest.dirs[0].path, PathBuf::from("src/components"));
        assert_eq!(manifest.library_component_count(), 2);
    }

    #[test]
    fn test_template_escapes_values() {
        let mut template = ManifestTemplate::new().with_components_dir(r"src\components");
        template.output = r#"types/"quoted".d.ts"#.to_string();

        let manifest = Manifest::from_str(&template.render()).unwrap();

        assert_eq!(manifest.dirs[0].path, PathBuf::from(r"src\components"));
        assert_eq!(
            manifest.project.output,
            PathBuf::from(r#"types/"quoted".d.ts"#)
        );
    }

    #[test]
    fn test_template_is_not_overwritten() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(MANIFEST_FILE), "# mine\n").unwrap();

        let result = ManifestTemplate::new().write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(
            std::fs::read_to_string(temp.path().join(MANIFEST_FILE)).unwrap(),
            "# mine\n"
        );
    }
}
