use std::{
    io::IsTerminal,
    path::{Path, PathBuf},
};

use clap::Args;
use compsync_codegen::ManifestTemplate;
use compsync_core::{GeneratedFile, Overwrite, WriteResult};
use compsync_manifest::MANIFEST_FILE;
use dialoguer::{Confirm, theme::ColorfulTheme};
use eyre::{Context, Result};

#[derive(Args)]
pub struct InitCommand {
    /// Directory to create compsync.toml in
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Component directory to scan
    #[arg(long, default_value = "src/components")]
    pub dir: String,

    /// Overwrite an existing compsync.toml
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let target = self.output.join(MANIFEST_FILE);
        let overwrite = if self.force || (target.exists() && Self::confirm_overwrite(&target)?) {
            Overwrite::Always
        } else {
            Overwrite::IfMissing
        };

        let result = ManifestTemplate::new()
            .with_components_dir(&self.dir)
            .with_overwrite(overwrite)
            .write(&self.output)?;

        match result {
            WriteResult::Skipped => {
                println!("{} already exists (use --force to replace it)", target.display())
            }
            _ => println!("Created {}", target.display()),
        }

        Ok(())
    }

    fn confirm_overwrite(target: &Path) -> Result<bool> {
        if !std::io::stdin().is_terminal() {
            return Ok(false);
        }

        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} already exists. Overwrite it?", target.display()))
            .default(false)
            .interact()
            .wrap_err("Failed to read confirmation")
    }
}
