//! Check operation - compare the declaration file with the components.

use compsync_codegen::Synchronizer;
use compsync_manifest::CompsyncToml;
use eyre::{Context, Result};

use crate::reports::{CheckReport, RegistrySummary};

/// Execute the check operation. Never writes.
pub fn check(toml: &CompsyncToml) -> Result<CheckReport> {
    let outcome = Synchronizer::from_toml(toml)
        .check()
        .wrap_err("Failed to check declaration file")?;

    Ok(CheckReport {
        path: outcome.path,
        status: outcome.status,
        summary: RegistrySummary::new(&outcome.resolution),
    })
}
