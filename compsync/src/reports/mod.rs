//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod list;
mod output;
mod summary;
mod sync;

pub use check::CheckReport;
pub use list::ListReport;
pub use output::{Report, TerminalOutput};
pub use summary::RegistrySummary;
pub use sync::{SyncReport, SyncResult};
