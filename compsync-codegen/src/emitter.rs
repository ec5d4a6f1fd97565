//! Writing the declaration file.

use std::path::{Path, PathBuf};

use compsync_core::{File, FileStatus, Overwrite, WriteResult};
use compsync_manifest::ProjectConfig;

use crate::{DeclarationFile, Error, Registry, Result};

/// Renders a registry and writes it to one target path.
pub struct Emitter<'a> {
    path: PathBuf,
    project: &'a ProjectConfig,
}

impl<'a> Emitter<'a> {
    pub fn new(path: impl Into<PathBuf>, project: &'a ProjectConfig) -> Self {
        Self {
            path: path.into(),
            project,
        }
    }

    /// Target path of the declaration file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render the declaration text without touching the filesystem.
    pub fn render(&self, registry: &Registry) -> String {
        DeclarationFile::for_project(self.project, registry).render()
    }

    /// Write the declaration file if its content changed.
    ///
    /// On failure any existing file is left as it was.
    pub fn emit(&self, registry: &Registry) -> Result<WriteResult> {
        let file = File::new(&self.path, self.render(registry)).with_overwrite(Overwrite::IfChanged);
        let result = file.write().map_err(|e| Error::io(&self.path, e))?;

        match result {
            WriteResult::Written => {
                tracing::info!(path = %self.path.display(), components = registry.len(), "declaration file written")
            }
            _ => tracing::debug!(path = %self.path.display(), "declaration file unchanged"),
        }

        Ok(result)
    }

    /// Compare the rendered text with the file on disk without writing.
    pub fn check(&self, registry: &Registry) -> Result<FileStatus> {
        File::new(&self.path, self.render(registry))
            .status()
            .map_err(|e| Error::io(&self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::ComponentEntry;

    fn registry() -> Registry {
        Registry::build([ComponentEntry::library("RouterView", "vue-router", "RouterView")])
    }

    #[test]
    fn test_emit_then_unchanged() {
        let temp = TempDir::new().unwrap();
        let project = ProjectConfig::default();
        let emitter = Emitter::new(temp.path().join("components.d.ts"), &project);

        assert_eq!(emitter.emit(&registry()).unwrap(), WriteResult::Written);
        let first = fs::read(emitter.path()).unwrap();

        assert_eq!(emitter.emit(&registry()).unwrap(), WriteResult::Unchanged);
        assert_eq!(fs::read(emitter.path()).unwrap(), first);
    }

    #[test]
    fn test_check_reports_status() {
        let temp = TempDir::new().unwrap();
        let project = ProjectConfig::default();
        let emitter = Emitter::new(temp.path().join("components.d.ts"), &project);

        assert_eq!(emitter.check(&registry()).unwrap(), FileStatus::Missing);
        emitter.emit(&Registry::default()).unwrap();
        assert_eq!(emitter.check(&registry()).unwrap(), FileStatus::Stale);
        emitter.emit(&registry()).unwrap();
        assert_eq!(emitter.check(&registry()).unwrap(), FileStatus::UpToDate);
    }

    #[test]
    fn test_unwritable_target_is_io_error() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("types");
        fs::write(&blocker, "a file where a directory should be").unwrap();

        let project = ProjectConfig::default();
        let emitter = Emitter::new(blocker.join("components.d.ts"), &project);
        let err = emitter.emit(&registry()).unwrap_err();

        assert!(matches!(err, Error::Io { .. }));
        assert_eq!(
            fs::read_to_string(&blocker).unwrap(),
            "a file where a directory should be"
        );
    }

    #[test]
    fn test_directory_at_target_is_io_error() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("components.d.ts");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep.txt"), "kept").unwrap();

        let project = ProjectConfig::default();
        let err = Emitter::new(&target, &project).emit(&registry()).unwrap_err();

        assert!(matches!(err, Error::Io { .. }));
        assert!(target.is_dir());
        assert_eq!(fs::read_to_string(target.join("keep.txt")).unwrap(), "kept");
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
    }
}
