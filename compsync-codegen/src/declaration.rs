//! Rendering of the global component declaration file.

use compsync_manifest::ProjectConfig;

use crate::{
    Registry,
    ast::{ExportMarker, Import, Interface, InterfaceField, ModuleDeclaration, TypeofImport},
    builder::CodeBuilder,
};

/// Comment lines written at the top of every declaration file.
pub const HEADER: &[&str] = &[
    "// generated by compsync",
    "// We suggest you to commit this file into source control",
    "// Read more: https://github.com/vuejs/core/pull/3399",
];

/// The declaration file for one registry.
///
/// ```text
/// // generated by compsync
/// // We suggest you to commit this file into source control
/// // Read more: https://github.com/vuejs/core/pull/3399
/// import '@vue/runtime-core'
///
/// export {}
///
/// declare module '@vue/runtime-core' {
///   export interface GlobalComponents {
///     ElButton: typeof import('element-plus/es')['ElButton']
///   }
/// }
/// ```
pub struct DeclarationFile<'a> {
    module: &'a str,
    interface: &'a str,
    registry: &'a Registry,
}

impl<'a> DeclarationFile<'a> {
    pub fn new(module: &'a str, interface: &'a str, registry: &'a Registry) -> Self {
        Self {
            module,
            interface,
            registry,
        }
    }

    /// Use the module and interface names from `[project]`.
    pub fn for_project(project: &'a ProjectConfig, registry: &'a Registry) -> Self {
        Self::new(&project.module, &project.interface, registry)
    }

    fn interface(&self) -> Interface {
        Interface::new(self.interface).fields(self.registry.iter().map(|entry| {
            InterfaceField::new(
                &entry.tag_name,
                TypeofImport::new(&entry.source_module, &entry.export_name).to_string(),
            )
        }))
    }

    /// Render the full file text.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript().each(HEADER.iter(), |b, line| b.line(line));

        builder
            .emit(&Import::side_effect(self.module))
            .push_blank()
            .emit(&ExportMarker)
            .push_blank()
            .emit(&ModuleDeclaration::new(self.module).add(self.interface()));

        builder.build()
    }
}
