//! Core operations.
//!
//! This module contains the business logic for compsync commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod list;
pub mod sync;

pub use check::check;
pub use list::list;
pub use sync::sync;
