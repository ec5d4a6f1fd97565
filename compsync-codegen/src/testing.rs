//! Test utilities for component projects.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use compsync_manifest::{MANIFEST_FILE, Manifest};
use tempfile::TempDir;

/// A throwaway project directory with component files and a manifest.
pub struct ProjectFixture {
    dir: TempDir,
}

impl ProjectFixture {
    /// Create an empty project.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Path of `relative` inside the project.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Write a component (or any file), creating parent directories.
    pub fn file(&self, relative: &str, content: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create fixture directory");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        self
    }

    /// Write empty `.vue` components at the given paths.
    pub fn components(&self, relatives: &[&str]) -> &Self {
        for relative in relatives {
            self.file(relative, "<template><div /></template>\n");
        }
        self
    }

    /// Create an empty directory.
    pub fn dir(&self, relative: &str) -> &Self {
        fs::create_dir_all(self.path(relative)).expect("failed to create fixture directory");
        self
    }

    /// Write compsync.toml and return the parsed manifest.
    pub fn manifest(&self, toml: &str) -> Manifest {
        self.file(MANIFEST_FILE, toml);
        Manifest::from_str(toml).expect("fixture manifest should parse")
    }

    /// Read a file from the project.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("failed to read fixture file")
    }
}

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        if diff.is_empty() {
            diff.push_str("  (line endings differ)\n");
        }

        panic!("Content mismatch:\n{}", diff);
    }
}
