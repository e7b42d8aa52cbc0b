//! TypeScript type alias and union builders.

use typetags_codegen::CodeBuilder;

/// Builder for `export type Name = Ty;` aliases.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    ty: String,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// Render the type alias to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        builder.line(&format!("export type {} = {};", self.name, self.ty))
    }

    /// Build the type alias as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::typescript()).build()
    }
}

/// Builder for `export type Name = A | B;` unions.
#[derive(Debug, Clone)]
pub struct Union {
    name: String,
    variants: Vec<String>,
}

impl Union {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: Vec::new(),
        }
    }

    /// A union of double-quoted string literals, variants in given order.
    pub fn string_literals<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut union = Self::new(name);
        for value in values {
            union = union.variant(format!("\"{}\"", value.as_ref()));
        }
        union
    }

    /// Add a variant, taken verbatim.
    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variants.push(variant.into());
        self
    }

    /// Render the union to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        builder.line(&format!(
            "export type {} = {};",
            self.name,
            self.variants.join(" | ")
        ))
    }

    /// Build the union as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::typescript()).build()
    }
}
