//! Manifest types and parsing for compsync.toml files.

mod dirs;
mod file;
mod library;
mod parse;
mod project;
mod validate;

pub use dirs::DirConfig;
pub use file::{CompsyncToml, MANIFEST_FILE};
use indexmap::IndexMap;
pub use library::{LibraryComponent, LibraryConfig};
pub use project::ProjectConfig;
use serde::Deserialize;
pub use validate::ParseContext;

/// Root manifest for compsync.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Output settings
    #[serde(default)]
    pub project: ProjectConfig,

    /// Local component directories, scanned in order
    #[serde(default)]
    pub dirs: Vec<DirConfig>,

    /// UI libraries keyed by import specifier, in declaration order
    #[serde(default)]
    pub libraries: IndexMap<String, LibraryConfig>,
}

impl Manifest {
    /// Total number of components listed by libraries.
    pub fn library_component_count(&self) -> usize {
        self.libraries.values().map(|l| l.components.len()).sum()
    }

    /// Whether the manifest names nothing to scan.
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.libraries.is_empty()
    }
}
