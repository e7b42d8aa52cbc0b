//! TypeScript export statement builder.

use typetags_codegen::CodeBuilder;

/// Builder for `export * from "..."` re-exports.
#[derive(Debug, Clone)]
pub struct Export {
    from: String,
}

impl Export {
    /// Re-export everything from another module.
    pub fn all(from: impl Into<String>) -> Self {
        Self { from: from.into() }
    }

    /// Render the export to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        builder.line(&format!("export * from \"{}\";", self.from))
    }

    /// Build the export as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::typescript()).build()
    }
}
