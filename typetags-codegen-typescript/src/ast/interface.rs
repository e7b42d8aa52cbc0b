//! TypeScript interface builder.

use typetags_codegen::CodeBuilder;

/// Builder for `export interface` declarations.
///
/// Fields carry a complete type expression; optionality in the source DSL is
/// projected into `| null` unions by the type mapper, never into `?:`.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    fields: Vec<(String, String)>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field with its full type expression.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push((name.into(), ty.into()));
        self
    }

    /// Render the interface to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        if self.fields.is_empty() {
            return builder.line(&format!("export interface {} {{}}", self.name));
        }
        builder.block_with_close(&format!("export interface {} {{", self.name), "}", |b| {
            b.each(&self.fields, |b, (name, ty)| {
                b.line(&format!("{}: {};", name, ty))
            })
        })
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::typescript()).build()
    }
}
