//! Aggregating index artifact.

use typetags_codegen::CodeBuilder;

use crate::ast::Export;

/// `index.ts`: re-exports every other artifact, modules in given order.
pub struct IndexTs {
    modules: Vec<String>,
}

impl IndexTs {
    pub fn new<I, S>(modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            modules: modules.into_iter().map(Into::into).collect(),
        }
    }

    /// Index for the single-file layout.
    pub fn single() -> Self {
        Self::new(["./models"])
    }

    pub fn render(&self) -> String {
        self.modules
            .iter()
            .fold(CodeBuilder::typescript(), |b, module| {
                Export::all(module).render(b)
            })
            .build()
    }
}
