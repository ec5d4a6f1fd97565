//! Component scanning and declaration generation for compsync.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`ast`] - TypeScript declaration syntax
//! - [`scanner`] - Component discovery in directories and library lists
//! - [`registry`] - Sorted, deduplicated component registry
//! - [`emitter`] - Rendering and writing the declaration file
//! - [`testing`] - Test utilities (feature-gated)
//!
//! The usual entry point is [`Synchronizer`], which runs
//! scanner -> registry -> emitter for one manifest.

pub mod ast;
pub mod builder;
pub mod declaration;
pub mod emitter;
mod error;
pub mod registry;
pub mod scanner;
mod sync;
mod template;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use declaration::{DeclarationFile, HEADER};
pub use emitter::Emitter;
pub use error::{Error, Result};
pub use registry::{ComponentEntry, Override, Registry, SourceKind};
pub use scanner::{ScanOutput, Scanner, SkippedFile};
pub use sync::{CheckOutcome, PreviewOutcome, Resolution, SyncOutcome, Synchronizer};
pub use template::ManifestTemplate;
