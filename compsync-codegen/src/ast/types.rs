//! Type expressions.

use std::fmt;

/// Quote `s` as a single-quoted TypeScript string literal.
pub fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// `typeof import('<module>')['<export>']`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeofImport {
    module: String,
    export: String,
}

impl TypeofImport {
    pub fn new(module: impl Into<String>, export: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            export: export.into(),
        }
    }
}

impl fmt::Display for TypeofImport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "typeof import({})[{}]",
            string_literal(&self.module),
            string_literal(&self.export)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_literal_escapes() {
        assert_eq!(string_literal("vue"), "'vue'");
        assert_eq!(string_literal("it's"), r"'it\'s'");
        assert_eq!(string_literal(r"a\b"), r"'a\\b'");
    }

    #[test]
    fn test_typeof_import() {
        let ty = TypeofImport::new("./src/components/Icons/IconBad.vue", "default");
        assert_eq!(
            ty.to_string(),
            "typeof import('./src/components/Icons/IconBad.vue')['default']"
        );
    }
}
