//! Parsing and validation for `compsync.toml`.
//!
//! The manifest names the component directories to scan, the UI libraries
//! whose exports are registered globally, and where the declaration file is
//! written.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result};
pub use manifest::{
    CompsyncToml, DirConfig, LibraryComponent, LibraryConfig, MANIFEST_FILE, Manifest,
    ParseContext, ProjectConfig,
};
