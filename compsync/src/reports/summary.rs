//! Registry counts and warnings shared by sync and check.

use compsync_codegen::{Override, Resolution, SkippedFile, SourceKind};

use super::output::Output;

/// What a scan produced, for reporting.
#[derive(Debug)]
pub struct RegistrySummary {
    /// Local component count.
    pub local: usize,
    /// Library component count.
    pub library: usize,
    /// Tags declared by more than one source.
    pub overrides: Vec<Override>,
    /// Component files left out of the registry.
    pub skipped: Vec<SkippedFile>,
}

impl RegistrySummary {
    pub fn new(resolution: &Resolution) -> Self {
        Self {
            local: resolution.registry.count(SourceKind::Local),
            library: resolution.registry.count(SourceKind::Library),
            overrides: resolution.registry.overrides().to_vec(),
            skipped: resolution.skipped.clone(),
        }
    }

    pub fn total(&self) -> usize {
        self.local + self.library
    }

    pub(super) fn render_warnings(&self, out: &mut dyn Output) {
        for o in &self.overrides {
            out.warning(&format!(
                "'{}' from {} replaced by {}",
                o.tag_name, o.replaced, o.winner
            ));
        }

        for skipped in &self.skipped {
            out.warning(&format!(
                "skipped {}: {}",
                skipped.path.display(),
                skipped.reason
            ));
        }
    }

    pub(super) fn render_counts(&self, out: &mut dyn Output) {
        out.key_value(
            "Components",
            &format!(
                "{} ({} local, {} library)",
                self.total(),
                self.local,
                self.library
            ),
        );
    }
}
