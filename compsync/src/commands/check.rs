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
pub struct CheckCommand {
    /// Path to compsync.toml
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let toml = CompsyncToml::open(&self.config).unwrap_or_exit();
        tracing::debug!(config = %self.config.display(), root = %toml.root().display(), "loaded manifest");

        let report = ops::check(&toml)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_current() {
            std::process::exit(1);
        }

        Ok(())
    }
}
