//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use compsync_core::is_identifier;
use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Holds the source text, filename and the current position in the manifest
/// (e.g. `libraries.element-plus/es`) so nested validation can produce
/// located errors.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "compsync.toml");
/// let lib = ctx.push("libraries").push("vue-router");
/// lib.validate_identifier("RouterLink", "component tag")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments, e.g. ["dirs[0]"]
    path: Vec<String>,
}

impl ParseContext {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: impl Into<String>) -> Self {
        let mut path = self.path.clone();
        path.push(segment.into());
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "component tag in 'libraries.vue-router'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a quoted string value in the source.
    pub fn find_string_span(&self, value: &str) -> Option<SourceSpan> {
        find_string_span(self.source.src(), value)
    }

    /// Find the span of a key, if it appears exactly once.
    pub fn find_key_span(&self, key: &str) -> Option<SourceSpan> {
        find_key_span(self.source.src(), key)
    }

    /// Validate that `name` can be emitted as a TypeScript property name.
    pub fn validate_identifier(&self, name: &str, kind: &str) -> Result<()> {
        if is_identifier(name) {
            return Ok(());
        }
        Err(self.source.invalid_identifier_error(
            name,
            self.context_for(kind),
            self.find_string_span(name),
        ))
    }
}

/// Find a string literal in the TOML source, returning the span inside the quotes.
pub(crate) fn find_string_span(src: &str, value: &str) -> Option<SourceSpan> {
    if value.is_empty() {
        return None;
    }

    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }

    None
}

/// Find `key =` at the start of a line.
///
/// Returns `None` when the key is absent or appears more than once, since
/// pointing at the wrong table is worse than no label.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut found = None;
    let mut offset = 0;

    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(key)
            && rest.trim_start().starts_with('=')
        {
            if found.is_some() {
                return None;
            }
            let start = offset + (line.len() - trimmed.len());
            found = Some(SourceSpan::from((start, key.len())));
        }
        offset += line.len();
    }

    found
}
