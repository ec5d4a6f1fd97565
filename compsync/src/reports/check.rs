//! Check command report data structures.

use std::path::PathBuf;

use compsync_core::FileStatus;

use super::{
    RegistrySummary,
    output::{Output, Report},
};

/// Report data from comparing the declaration file with the components.
#[derive(Debug)]
pub struct CheckReport {
    /// Declaration file path.
    pub path: PathBuf,
    /// State of the file on disk.
    pub status: FileStatus,
    /// Registry counts and warnings.
    pub summary: RegistrySummary,
}

impl CheckReport {
    /// Whether the file on disk matches what sync would write.
    pub fn is_current(&self) -> bool {
        self.status == FileStatus::UpToDate
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        self.summary.render_warnings(out);

        let path = self.path.display();
        match self.status {
            FileStatus::UpToDate => out.preformatted(&format!("✓ {} is up to date", path)),
            FileStatus::Stale => {
                out.warning(&format!("{} is out of date, run `compsync sync`", path))
            }
            FileStatus::Missing => {
                out.warning(&format!("{} does not exist, run `compsync sync`", path))
            }
        }

        self.summary.render_counts(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    fn report(status: FileStatus) -> CheckReport {
        CheckReport {
            path: PathBuf::from("components.d.ts"),
            status,
            summary: RegistrySummary {
                local: 1,
                library: 0,
                overrides: Vec::new(),
                skipped: Vec::new(),
            },
        }
    }

    #[test]
    fn test_render_up_to_date() {
        let report = report(FileStatus::UpToDate);

        assert!(report.is_current());
        assert_eq!(
            RecordingOutput::render(&report),
            [
                "✓ components.d.ts is up to date",
                "Components: 1 (1 local, 0 library)"
            ]
        );
    }

    #[test]
    fn test_render_stale() {
        let report = report(FileStatus::Stale);

        assert!(!report.is_current());
        assert_eq!(
            RecordingOutput::render(&report)[0],
            "warning: components.d.ts is out of date, run `compsync sync`"
        );
    }
}
