//! Scanner -> Registry -> Emitter for one manifest.

use std::path::{Path, PathBuf};

use compsync_core::{FileStatus, WriteResult};
use compsync_manifest::{CompsyncToml, Manifest};

use crate::{Emitter, Registry, Result, Scanner, SkippedFile};

/// Registry resolved from a scan, with the files that were left out.
#[derive(Debug)]
pub struct Resolution {
    pub registry: Registry,
    pub skipped: Vec<SkippedFile>,
}

/// Outcome of [`Synchronizer::sync`].
#[derive(Debug)]
pub struct SyncOutcome {
    pub path: PathBuf,
    pub write: WriteResult,
    pub resolution: Resolution,
}

/// Outcome of [`Synchronizer::check`].
#[derive(Debug)]
pub struct CheckOutcome {
    pub path: PathBuf,
    pub status: FileStatus,
    pub resolution: Resolution,
}

/// Outcome of [`Synchronizer::preview`].
#[derive(Debug)]
pub struct PreviewOutcome {
    pub path: PathBuf,
    pub content: String,
    pub resolution: Resolution,
}

/// Keeps one project's declaration file in sync with its components.
///
/// Every call rescans from scratch; nothing is cached between runs.
pub struct Synchronizer<'a> {
    root: PathBuf,
    manifest: &'a Manifest,
}

impl<'a> Synchronizer<'a> {
    pub fn new(root: impl Into<PathBuf>, manifest: &'a Manifest) -> Self {
        Self {
            root: root.into(),
            manifest,
        }
    }

    /// Synchronizer for an opened compsync.toml, rooted at its directory.
    pub fn from_toml(file: &'a CompsyncToml) -> Self {
        Self::new(file.root(), file.manifest())
    }

    /// Project root that directories and the output path are relative to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the declaration file.
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.manifest.project.output)
    }

    fn emitter(&self) -> Emitter<'a> {
        Emitter::new(self.output_path(), &self.manifest.project)
    }

    /// Scan and build the registry.
    pub fn resolve(&self) -> Result<Resolution> {
        if self.manifest.is_empty() {
            tracing::warn!("manifest lists no component directories or libraries");
        }

        let output = self.output_path();
        let import_base = output
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(self.root.as_path());
        let scan = Scanner::new(&self.root, self.manifest)
            .with_import_base(import_base)
            .scan()?;
        let registry = Registry::build(scan.entries);

        tracing::debug!(
            components = registry.len(),
            overrides = registry.overrides().len(),
            skipped = scan.skipped.len(),
            "registry resolved"
        );

        Ok(Resolution {
            registry,
            skipped: scan.skipped,
        })
    }

    /// Regenerate the declaration file, writing only when it changed.
    pub fn sync(&self) -> Result<SyncOutcome> {
        let resolution = self.resolve()?;
        let emitter = self.emitter();
        let write = emitter.emit(&resolution.registry)?;

        Ok(SyncOutcome {
            path: emitter.path().to_path_buf(),
            write,
            resolution,
        })
    }

    /// Report whether the declaration file is current, without writing.
    pub fn check(&self) -> Result<CheckOutcome> {
        let resolution = self.resolve()?;
        let emitter = self.emitter();
        let status = emitter.check(&resolution.registry)?;

        Ok(CheckOutcome {
            path: emitter.path().to_path_buf(),
            status,
            resolution,
        })
    }

    /// Render the declaration file without writing.
    pub fn preview(&self) -> Result<PreviewOutcome> {
        let resolution = self.resolve()?;
        let emitter = self.emitter();
        let content = emitter.render(&resolution.registry);

        Ok(PreviewOutcome {
            path: emitter.path().to_path_buf(),
            content,
            resolution,
        })
    }
}
