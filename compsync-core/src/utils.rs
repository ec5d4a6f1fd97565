//! Shared naming and path helpers.

use std::path::{Component, Path};

/// Convert a file or directory name to PascalCase.
///
/// Splits on `-`, `_`, `.` and whitespace and upper-cases the first letter of
/// each part; the rest of each part is kept as written, so names that are
/// already PascalCase pass through unchanged.
///
/// `"loading-dot"` -> `"LoadingDot"`, `"IconBad"` -> `"IconBad"`
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| c == '-' || c == '_' || c == '.' || c.is_whitespace())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Whether `s` can be used as a bare TypeScript property name.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Render a relative path with forward slashes, as import specifiers expect.
pub fn to_posix_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
