//! Core utilities and types for compsync.
//!
//! This crate provides the file writing primitives and naming helpers
//! shared by the manifest parser, the code generator and the CLI.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, FileStatus, GeneratedFile, Overwrite, WriteResult, file_status};
// String utilities
pub use utils::{is_identifier, to_pascal_case, to_posix_path};
