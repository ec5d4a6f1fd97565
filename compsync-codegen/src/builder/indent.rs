//! Indentation configuration for code generation.

/// Indentation unit for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    width: usize,
}

impl Indent {
    /// 2-space indentation used for declaration files.
    pub const TYPESCRIPT: Self = Self { width: 2 };

    /// Number of spaces per level.
    pub fn width(&self) -> usize {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typescript_width() {
        assert_eq!(Indent::TYPESCRIPT.width(), 2);
    }
}
