//! Sync command report data structures.

use std::path::PathBuf;

use compsync_core::WriteResult;

use super::{
    RegistrySummary,
    output::{Output, Report},
};

/// Report data from a sync run.
#[derive(Debug)]
pub struct SyncReport {
    /// Declaration file path.
    pub path: PathBuf,
    /// Registry counts and warnings.
    pub summary: RegistrySummary,
    /// Write outcome or dry-run content.
    pub result: SyncResult,
}

/// Result of a sync run.
#[derive(Debug)]
pub enum SyncResult {
    /// The file was written or left as it was.
    Written(WriteResult),
    /// Dry-run preview of the file content.
    Preview(String),
}

impl Report for SyncReport {
    fn render(&self, out: &mut dyn Output) {
        self.summary.render_warnings(out);

        let path = self.path.display().to_string();
        match &self.result {
            SyncResult::Written(WriteResult::Written) => out.key_value("Wrote", &path),
            SyncResult::Written(_) => out.key_value("Up to date", &path),
            SyncResult::Preview(content) => {
                out.divider(&path);
                out.preformatted(content.trim_end());
                out.divider("Summary");
            }
        }

        self.summary.render_counts(out);
    }
}
