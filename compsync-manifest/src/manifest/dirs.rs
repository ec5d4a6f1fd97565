use std::path::PathBuf;

use compsync_core::is_identifier;
use globset::Glob;
use serde::Deserialize;

use super::ParseContext;
use crate::Result;

/// A `[[dirs]]` entry: one local component directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirConfig {
    /// Directory path, relative to the project root
    pub path: PathBuf,

    /// File extensions (without the dot) that count as components
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Recurse into subdirectories
    #[serde(default = "default_deep")]
    pub deep: bool,

    /// Prefix names with their subdirectory path
    #[serde(default)]
    pub directory_as_namespace: bool,

    /// Prepended to every tag name found in this directory
    #[serde(default)]
    pub prefix: String,

    /// Glob patterns, relative to `path`, of files to skip
    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    vec!["vue".to_string()]
}

fn default_deep() -> bool {
    true
}

impl DirConfig {
    /// Create a directory entry with default options.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            extensions: default_extensions(),
            deep: default_deep(),
            directory_as_namespace: false,
            prefix: String::new(),
            exclude: Vec::new(),
        }
    }

    /// Whether `ext` is one of this directory's component extensions.
    pub fn matches_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e == ext)
    }

    pub(crate) fn validate(&self, ctx: &ParseContext) -> Result<()> {
        let source = ctx.source_context();

        if self.path.as_os_str().is_empty() {
            return Err(source.validation_error(
                format!("{} cannot be empty", ctx.context_for("path")),
                ctx.find_key_span("path"),
            ));
        }

        if self.extensions.is_empty() {
            return Err(source.validation_error(
                format!("{} must list at least one extension", ctx.path_string()),
                ctx.find_key_span("extensions"),
            ));
        }

        for ext in &self.extensions {
            if ext.is_empty() || ext.starts_with('.') {
                return Err(source.validation_error(
                    format!("extension '{}' must be non-empty and written without a leading dot", ext),
                    ctx.find_string_span(ext),
                ));
            }
        }

        if !self.prefix.is_empty() && !is_identifier(&self.prefix) {
            return Err(source.invalid_identifier_error(
                &self.prefix,
                ctx.context_for("prefix"),
                ctx.find_string_span(&self.prefix),
            ));
        }

        for pattern in &self.exclude {
            if let Err(e) = Glob::new(pattern) {
                return Err(source.invalid_glob_error(pattern, e, ctx.find_string_span(pattern)));
            }
        }

        Ok(())
    }
}
