//! The empty export marker.

use crate::builder::{CodeFragment, Renderable};

/// `export {}`: turns a declaration file into a module.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportMarker;

impl Renderable for ExportMarker {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line("export {}")]
    }
}
