//! TypeScript declaration builders.
//!
//! Just enough TypeScript syntax to express a module augmentation:
//! side-effect imports, the empty export marker, `declare module` blocks,
//! interfaces and `typeof import(...)` type references.

mod exports;
mod imports;
mod interface;
mod module;
mod types;

pub use exports::ExportMarker;
pub use imports::Import;
pub use interface::{Interface, InterfaceField};
pub use module::ModuleDeclaration;
pub use types::{TypeofImport, string_literal};
