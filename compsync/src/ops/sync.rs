//! Sync operation - regenerate the declaration file.

use compsync_codegen::Synchronizer;
use compsync_manifest::CompsyncToml;
use eyre::{Context, Result};

use crate::reports::{RegistrySummary, SyncReport, SyncResult};

/// Options for the sync operation.
pub struct SyncOptions {
    /// Render without writing.
    pub dry_run: bool,
}

/// Execute the sync operation.
pub fn sync(toml: &CompsyncToml, opts: SyncOptions) -> Result<SyncReport> {
    let synchronizer = Synchronizer::from_toml(toml);

    if opts.dry_run {
        let preview = synchronizer
            .preview()
            .wrap_err("Failed to render declaration file")?;

        return Ok(SyncReport {
            path: preview.path,
            summary: RegistrySummary::new(&preview.resolution),
            result: SyncResult::Preview(preview.content),
        });
    }

    let outcome = synchronizer
        .sync()
        .wrap_err("Failed to synchronize components")?;

    Ok(SyncReport {
        path: outcome.path,
        summary: RegistrySummary::new(&outcome.resolution),
        result: SyncResult::Written(outcome.write),
    })
}
