use std::path::PathBuf;

use compsync_core::is_identifier;
use serde::Deserialize;

use super::ParseContext;
use crate::Result;

/// `[project]` section: where and how the declaration file is written.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Declaration file path, relative to the project root
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Module whose global component interface is augmented
    #[serde(default = "default_module")]
    pub module: String,

    /// Name of the augmented interface
    #[serde(default = "default_interface")]
    pub interface: String,
}

fn default_output() -> PathBuf {
    PathBuf::from("components.d.ts")
}

fn default_module() -> String {
    "@vue/runtime-core".to_string()
}

fn default_interface() -> String {
    "GlobalComponents".to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            module: default_module(),
            interface: default_interface(),
        }
    }
}

impl ProjectConfig {
    pub(crate) fn validate(&self, ctx: &ParseContext) -> Result<()> {
        if self.output.as_os_str().is_empty() {
            return Err(ctx.source_context().validation_error(
                "project.output cannot be empty",
                ctx.find_key_span("output"),
            ));
        }

        if self.module.trim().is_empty() {
            return Err(ctx.source_context().validation_error(
                "project.module cannot be empty",
                ctx.find_key_span("module"),
            ));
        }

        if !is_identifier(&self.interface) {
            return Err(ctx.source_context().invalid_identifier_error(
                &self.interface,
                ctx.context_for("interface name"),
                ctx.find_string_span(&self.interface),
            ));
        }

        Ok(())
    }
}
