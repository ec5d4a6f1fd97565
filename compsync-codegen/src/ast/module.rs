//! `declare module` blocks.

use super::string_literal;
use crate::builder::{CodeFragment, Renderable};

/// `declare module '<name>' { ... }`
#[derive(Debug, Clone)]
pub struct ModuleDeclaration {
    name: String,
    body: Vec<CodeFragment>,
}

impl ModuleDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: Vec::new(),
        }
    }

    /// Add a node to the module body.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.extend(node.to_fragments());
        self
    }
}

impl Renderable for ModuleDeclaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("declare module {} {{", string_literal(&self.name)),
            self.body.clone(),
            Some("}".to_string()),
        )]
    }
}
