//! The sorted, deduplicated component registry.

use std::collections::BTreeMap;

use serde::Serialize;

/// Where a component was discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// A single-file component in a scanned directory
    Local,
    /// An export listed for a UI library
    Library,
}

/// One tag registered on the global component namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentEntry {
    /// Tag used in templates; unique within a registry
    pub tag_name: String,
    /// Import specifier (package name or `./`-relative path)
    pub source_module: String,
    /// Symbol exported by `source_module`
    pub export_name: String,
    pub kind: SourceKind,
}

impl ComponentEntry {
    /// Entry for a local single-file component (default export).
    pub fn local(tag_name: impl Into<String>, source_module: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            source_module: source_module.into(),
            export_name: "default".to_string(),
            kind: SourceKind::Local,
        }
    }

    /// Entry for a named library export.
    pub fn library(
        tag_name: impl Into<String>,
        package: impl Into<String>,
        export_name: impl Into<String>,
    ) -> Self {
        Self {
            tag_name: tag_name.into(),
            source_module: package.into(),
            export_name: export_name.into(),
            kind: SourceKind::Library,
        }
    }
}

/// A tag whose earlier entry was replaced by a later one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Override {
    pub tag_name: String,
    /// Module of the discarded entry
    pub replaced: String,
    /// Module of the entry that won
    pub winner: String,
}

/// Components ordered by tag name.
///
/// Built in one pass from entries in discovery order. Tags are compared
/// ordinally (byte-wise), and when a tag repeats the later entry replaces
/// the earlier one.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<ComponentEntry>,
    overrides: Vec<Override>,
}

impl Registry {
    /// Sort and deduplicate entries given in discovery order.
    pub fn build(entries: impl IntoIterator<Item = ComponentEntry>) -> Self {
        let mut by_tag: BTreeMap<String, ComponentEntry> = BTreeMap::new();
        let mut overrides = Vec::new();

        for mut entry in entries {
            let trimmed = entry.tag_name.trim();
            if trimmed.len() != entry.tag_name.len() {
                entry.tag_name = trimmed.to_string();
            }

            let winner = entry.source_module.clone();
            if let Some(previous) = by_tag.insert(entry.tag_name.clone(), entry) {
                tracing::warn!(
                    tag = %previous.tag_name,
                    replaced = %previous.source_module,
                    winner = %winner,
                    "component tag registered twice, keeping the later one"
                );
                overrides.push(Override {
                    tag_name: previous.tag_name,
                    replaced: previous.source_module,
                    winner,
                });
            }
        }

        Self {
            entries: by_tag.into_values().collect(),
            overrides,
        }
    }

    /// Entries sorted ascending by tag name.
    pub fn entries(&self) -> &[ComponentEntry] {
        &self.entries
    }

    /// Iterate over entries in tag order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentEntry> {
        self.entries.iter()
    }

    /// Look up an entry by tag name.
    pub fn get(&self, tag_name: &str) -> Option<&ComponentEntry> {
        self.entries
            .binary_search_by(|e| e.tag_name.as_str().cmp(tag_name))
            .ok()
            .map(|i| &self.entries[i])
    }

    /// Tags that were registered more than once.
    pub fn overrides(&self) -> &[Override] {
        &self.overrides
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no tags are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count entries of the given kind.
    pub fn count(&self, kind: SourceKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }
}
