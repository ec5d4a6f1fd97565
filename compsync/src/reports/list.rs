//! List command report data structures.

use compsync_codegen::{ComponentEntry, Override};
use serde::Serialize;

use super::output::{Output, Report};

/// The resolved registry. Serializes as the `list --json` output.
#[derive(Debug, Serialize)]
pub struct ListReport {
    /// Components sorted by tag name.
    pub components: Vec<ComponentEntry>,
    /// Tags declared by more than one source.
    pub overrides: Vec<Override>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.components.is_empty() {
            out.preformatted("No components found");
            return;
        }

        out.section(&format!("Components ({})", self.components.len()));
        for c in &self.components {
            out.list_item(&format!(
                "{} -> {} ['{}']",
                c.tag_name, c.source_module, c.export_name
            ));
        }

        if !self.overrides.is_empty() {
            out.newline();
            out.section("Overridden");
            for o in &self.overrides {
                out.list_item(&format!("{} (was {})", o.tag_name, o.replaced));
            }
        }
    }
}
