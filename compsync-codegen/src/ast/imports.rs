//! TypeScript import builder.

use super::string_literal;
use crate::builder::{CodeFragment, Renderable};

/// A side-effect import (`import 'module'`).
///
/// Declaration files import the augmented module so TypeScript treats the
/// `declare module` block as an augmentation instead of a new module.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
}

impl Import {
    pub fn side_effect(from: impl Into<String>) -> Self {
        Self { from: from.into() }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "import {}",
            string_literal(&self.from)
        ))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CodeBuilder;

    #[test]
    fn test_side_effect_import() {
        let mut builder = CodeBuilder::typescript();
        builder.emit(&Import::side_effect("@vue/runtime-core"));
        assert_eq!(builder.build(), "import '@vue/runtime-core'\n");
    }
}
