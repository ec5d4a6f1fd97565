//! Component discovery.
//!
//! Produces [`ComponentEntry`] values in discovery order: library exports in
//! manifest order first, then each `[[dirs]]` entry in manifest order, with
//! files inside a directory visited by file name.

use std::{
    fs, io,
    path::{Component, Path, PathBuf},
};

use compsync_core::{is_identifier, to_pascal_case, to_posix_path};
use compsync_manifest::{DirConfig, Manifest};
use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::{ComponentEntry, Error, Result};

/// A file that looked like a component but could not be registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    /// Path relative to the project root
    pub path: PathBuf,
    pub reason: String,
}

/// Everything a scan found.
#[derive(Debug, Default)]
pub struct ScanOutput {
    /// Components in discovery order (may contain repeated tags)
    pub entries: Vec<ComponentEntry>,
    pub skipped: Vec<SkippedFile>,
}

/// Walks component directories and library export lists.
pub struct Scanner<'a> {
    root: &'a Path,
    manifest: &'a Manifest,
    import_base: Option<PathBuf>,
}

impl<'a> Scanner<'a> {
    pub fn new(root: &'a Path, manifest: &'a Manifest) -> Self {
        Self {
            root,
            manifest,
            import_base: None,
        }
    }

    /// Directory that local import specifiers are relative to: the
    /// declaration file's directory. Defaults to the project root.
    pub fn with_import_base(mut self, dir: impl Into<PathBuf>) -> Self {
        self.import_base = Some(dir.into());
        self
    }

    /// Run the scan. Read-only.
    pub fn scan(&self) -> Result<ScanOutput> {
        let mut output = ScanOutput::default();
        let import_base = self.import_base.as_deref().unwrap_or(self.root);
        let import_base =
            std::path::absolute(import_base).map_err(|e| Error::io(import_base, e))?;

        for (package, library) in &self.manifest.libraries {
            for component in &library.components {
                tracing::debug!(tag = component.tag(), package = %package, "library component");
                output.entries.push(ComponentEntry::library(
                    component.tag(),
                    package,
                    component.export(),
                ));
            }
        }

        for dir in &self.manifest.dirs {
            self.scan_dir(dir, &import_base, &mut output)?;
        }

        Ok(output)
    }

    fn scan_dir(&self, dir: &DirConfig, import_base: &Path, output: &mut ScanOutput) -> Result<()> {
        let base = self.root.join(&dir.path);
        check_directory(&base)?;

        let excludes = build_excludes(&base, &dir.exclude)?;
        let base_name = base
            .canonicalize()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()));

        let mut walker = WalkDir::new(&base).min_depth(1).sort_by_file_name();
        if !dir.deep {
            walker = walker.max_depth(1);
        }

        let before = output.entries.len();
        for entry in walker {
            let entry = entry.map_err(|e| walk_error(&base, e))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let matches_ext = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| dir.matches_extension(e));
            if !matches_ext {
                continue;
            }

            let Ok(relative) = path.strip_prefix(&base) else {
                continue;
            };
            if excludes.is_match(relative) {
                tracing::debug!(path = %relative.display(), "excluded");
                continue;
            }

            let project_path = path.strip_prefix(self.root).unwrap_or(path);
            match component_name(relative, base_name.as_deref(), dir) {
                Ok(tag) => {
                    tracing::debug!(tag = %tag, path = %project_path.display(), "local component");
                    let file = std::path::absolute(path).map_err(|e| Error::io(path, e))?;
                    output
                        .entries
                        .push(ComponentEntry::local(tag, import_specifier(&file, import_base)));
                }
                Err(reason) => {
                    tracing::warn!(path = %project_path.display(), %reason, "skipping component");
                    output.skipped.push(SkippedFile {
                        path: project_path.to_path_buf(),
                        reason,
                    });
                }
            }
        }

        tracing::debug!(
            dir = %dir.path.display(),
            found = output.entries.len() - before,
            "scanned directory"
        );
        Ok(())
    }
}

fn check_directory(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(Error::configuration(path, "not a directory")),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(Error::configuration(path, "directory does not exist"))
        }
        Err(e) => Err(Error::io(path, e)),
    }
}

fn build_excludes(base: &Path, patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| {
            Error::configuration(base, format!("invalid exclude pattern '{}': {}", pattern, e))
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| Error::configuration(base, e.to_string()))
}

fn walk_error(base: &Path, err: walkdir::Error) -> Error {
    let path = err.path().unwrap_or(base).to_path_buf();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
    Error::io(path, source)
}

/// Derive the tag name for a component file.
///
/// `relative` is the file path relative to the scanned directory and
/// `base_name` the scanned directory's own name, used for a top-level
/// `index` file.
pub fn component_name(
    relative: &Path,
    base_name: Option<&str>,
    dir: &DirConfig,
) -> std::result::Result<String, String> {
    let stem = relative
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| "file name is not valid UTF-8".to_string())?;

    let mut segments: Vec<&str> = match relative.parent() {
        Some(parent) => parent
            .iter()
            .map(|s| s.to_str().ok_or_else(|| "path is not valid UTF-8".to_string()))
            .collect::<std::result::Result<_, _>>()?,
        None => Vec::new(),
    };

    if stem == "index" {
        if segments.is_empty() {
            let name = base_name.ok_or_else(|| "cannot name a top-level index file".to_string())?;
            segments.push(name);
        }
    } else {
        segments.push(stem);
    }

    let name = if dir.directory_as_namespace {
        segments.iter().map(|s| to_pascal_case(s)).collect::<String>()
    } else {
        segments.last().map(|s| to_pascal_case(s)).unwrap_or_default()
    };

    let tag = format!("{}{}", dir.prefix, name);
    if is_identifier(&tag) {
        Ok(tag)
    } else {
        Err(format!("'{}' is not a valid component name", tag))
    }
}

/// Import specifier for `file` as seen from a module in `from_dir`:
/// `./src/components/Foo.vue` or `../src/components/Foo.vue`.
///
/// Both paths must be absolute. Paths without a common root (different
/// Windows drives) fall back to the absolute file path.
fn import_specifier(file: &Path, from_dir: &Path) -> String {
    let file = normalize(file);
    let from_dir = normalize(from_dir);

    let common = file
        .components()
        .zip(from_dir.components())
        .take_while(|(a, b)| a == b)
        .count();
    if common == 0 {
        return file.to_string_lossy().replace('\\', "/");
    }

    let mut relative = PathBuf::new();
    for _ in from_dir.components().skip(common) {
        relative.push("..");
    }
    for component in file.components().skip(common) {
        relative.push(component);
    }

    let posix = to_posix_path(&relative);
    if posix.starts_with("../") {
        posix
    } else {
        format!("./{}", posix)
    }
}

/// Resolve `.` and `..` lexically.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(path: &str, dir: &DirConfig) -> std::result::Result<String, String> {
        component_name(Path::new(path), Some("components"), dir)
    }

    #[test]
    fn test_plain_file_name() {
        let dir = DirConfig::new("src/components");
        assert_eq!(name("Icons/IconBad.vue", &dir).unwrap(), "IconBad");
        assert_eq!(name("Loading/loading-dot.vue", &dir).unwrap(), "LoadingDot");
        assert_eq!(name("icon_copy.vue", &dir).unwrap(), "IconCopy");
    }

    #[test]
    fn test_index_takes_directory_name() {
        let dir = DirConfig::new("src/components");
        assert_eq!(name("Business/Feedback/index.vue", &dir).unwrap(), "Feedback");
        assert_eq!(name("Business/switch-chat/index.vue", &dir).unwrap(), "SwitchChat");
        assert_eq!(name("index.vue", &dir).unwrap(), "Components");
    }

    #[test]
    fn test_top_level_index_without_base_name() {
        let dir = DirConfig::new(".");
        assert!(component_name(Path::new("index.vue"), None, &dir).is_err());
    }

    #[test]
    fn test_directory_as_namespace() {
        let mut dir = DirConfig::new("src/components");
        dir.directory_as_namespace = true;
        assert_eq!(name("Business/Feedback/index.vue", &dir).unwrap(), "BusinessFeedback");
        assert_eq!(name("icons/icon-bad.vue", &dir).unwrap(), "IconsIconBad");
        assert_eq!(name("Root.vue", &dir).unwrap(), "Root");
    }

    #[test]
    fn test_prefix() {
        let mut dir = DirConfig::new("src/components");
        dir.prefix = "App".to_string();
        assert_eq!(name("Header.vue", &dir).unwrap(), "AppHeader");
    }

    #[test]
    fn test_invalid_name_is_rejected() {
        let dir = DirConfig::new("src/components");
        let err = name("404.vue", &dir).unwrap_err();
        assert_eq!(err, "'404' is not a valid component name");
    }

    #[test]
    fn test_import_specifier_from_project_root() {
        let root = std::path::absolute("project").unwrap();
        let file = root.join("src/components/Icons/IconBad.vue");
        assert_eq!(
            import_specifier(&file, &root),
            "./src/components/Icons/IconBad.vue"
        );
    }

    #[test]
    fn test_import_specifier_from_nested_output() {
        let root = std::path::absolute("project").unwrap();
        let file = root.join("src/components/Header.vue");
        assert_eq!(
            import_specifier(&file, &root.join("types")),
            "../src/components/Header.vue"
        );
        assert_eq!(
            import_specifier(&file, &root.join("src/types/generated")),
            "../../components/Header.vue"
        );
        assert_eq!(
            import_specifier(&file, &root.join("src/components")),
            "./Header.vue"
        );
    }

    #[test]
    fn test_import_specifier_normalizes_dots() {
        let root = std::path::absolute("project").unwrap();
        let file = root.join("./src/../src/components/Header.vue");
        assert_eq!(
            import_specifier(&file, &root.join("types/.")),
            "../src/components/Header.vue"
        );
    }
}
