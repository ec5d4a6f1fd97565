use std::path::PathBuf;

use clap::Args;
use compsync_manifest::{CompsyncToml, MANIFEST_FILE};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct SyncCommand {
    /// Path to compsync.toml
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Print the declaration file instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl SyncCommand {
    pub fn run(&self) -> Result<()> {
        let toml = CompsyncToml::open(&self.config).unwrap_or_exit();
        tracing::debug!(config = %self.config.display(), root = %toml.root().display(), "loaded manifest");

        let report = ops::sync(
            &toml,
            ops::sync::SyncOptions {
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
