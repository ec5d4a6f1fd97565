use std::path::PathBuf;

use clap::Args;
use compsync_manifest::{CompsyncToml, MANIFEST_FILE};
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Path to compsync.toml
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Print the registry as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let toml = CompsyncToml::open(&self.config).unwrap_or_exit();
        tracing::debug!(config = %self.config.display(), root = %toml.root().display(), "loaded manifest");
        let report = ops::list(&toml)?;

        if self.json {
            let json = serde_json::to_string_pretty(&report)
                .wrap_err("Failed to serialize component list")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
