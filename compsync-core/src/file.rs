use std::{
    fs, io,
    io::Write,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        File::new(&path, self.render())
            .with_rules(self.rules())
            .write()
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the rendered content
    Unchanged,
    /// File was skipped (already exists)
    Skipped,
}

/// State of a file on disk compared to the content we would write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// No file at the path
    Missing,
    /// File exists with different content
    Stale,
    /// File exists with identical content
    UpToDate,
}

/// Compare the file at `path` byte-for-byte against `content`.
pub fn file_status(path: &Path, content: &str) -> io::Result<FileStatus> {
    match fs::read(path) {
        Ok(existing) if existing == content.as_bytes() => Ok(FileStatus::UpToDate),
        Ok(_) => Ok(FileStatus::Stale),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(FileStatus::Missing),
        Err(e) => Err(e),
    }
}

/// Write `content` to a temporary sibling and move it over `path`.
///
/// The target is either fully replaced or left untouched.
fn write_file(path: &Path, content: &str) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    tmp.persist(path).map_err(|e| e.error)?;

    tracing::trace!(path = %path.display(), bytes = content.len(), "file persisted");
    Ok(())
}

/// A file to be generated
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: write if changed)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules.
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Shorthand for replacing only the overwrite behavior.
    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.rules.overwrite = overwrite;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Compare the on-disk file with this file's content.
    pub fn status(&self) -> io::Result<FileStatus> {
        file_status(&self.path, &self.content)
    }

    /// Write the file according to its rules
    pub fn write(&self) -> io::Result<WriteResult> {
        match self.rules.overwrite {
            Overwrite::Always => {
                write_file(&self.path, &self.content)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfChanged => match self.status()? {
                FileStatus::UpToDate => Ok(WriteResult::Unchanged),
                FileStatus::Missing | FileStatus::Stale => {
                    write_file(&self.path, &self.content)?;
                    Ok(WriteResult::Written)
                }
            },
            Overwrite::IfMissing => {
                if self.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&self.path, &self.content)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Always overwrite
    Always,
    /// Overwrite only when the content differs (generated declarations)
    #[default]
    IfChanged,
    /// Only create if file doesn't exist (config templates)
    IfMissing,
}
