use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// Default manifest file name.
pub const MANIFEST_FILE: &str = "compsync.toml";

/// Represents a compsync.toml file with both raw content and parsed manifest.
pub struct CompsyncToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl CompsyncToml {
    /// Open and parse a compsync.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Project root: the directory containing the manifest.
    pub fn root(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Absolute-or-relative path of the declaration file.
    pub fn output_path(&self) -> PathBuf {
        self.root().join(&self.manifest.project.output)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::Error;

    #[test]
    fn test_open_resolves_root_and_output() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(MANIFEST_FILE);
        fs::write(&path, "[project]\noutput = \"types/components.d.ts\"\n").unwrap();

        let file = CompsyncToml::open(&path).unwrap();

        assert_eq!(file.root(), temp.path());
        assert_eq!(
            file.output_path(),
            temp.path().join("types").join("components.d.ts")
        );
        assert!(file.content().contains("types/components.d.ts"));
    }

    #[test]
    fn test_bare_filename_root_is_cwd() {
        let file = CompsyncToml {
            path: PathBuf::from(MANIFEST_FILE),
            content: String::new(),
            manifest: Manifest::default(),
        };
        assert_eq!(file.root(), Path::new("."));
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = CompsyncToml::open(temp.path().join("missing.toml"));
        assert!(matches!(result.map(|_| ()).unwrap_err().as_ref(), Error::Io { .. }));
    }
}
