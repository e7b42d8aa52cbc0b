//! Enum union artifact.

use typetags_codegen::CodeBuilder;
use typetags_schema::EnumDef;

use crate::ast::Union;

/// `common/enums.ts`: one string-literal union per non-empty enum, in
/// declaration order.
pub struct EnumsTs<'a> {
    enums: Vec<&'a EnumDef>,
}

impl<'a> EnumsTs<'a> {
    pub fn new(enums: impl IntoIterator<Item = &'a EnumDef>) -> Self {
        Self {
            enums: enums.into_iter().collect(),
        }
    }

    pub fn render(&self) -> String {
        let builder = CodeBuilder::typescript()
            .line("// Generated by typetags. Enums for the whole schema.");
        self.enums
            .iter()
            .filter_map(|def| enum_union(def))
            .fold(builder, |b, union| union.render(b))
            .build()
    }
}

/// Union-of-string-literals for an enum. `None` when the enum has no
/// values: empty enums produce no declaration anywhere.
pub(crate) fn enum_union(def: &EnumDef) -> Option<Union> {
    if def.values.is_empty() {
        return None;
    }
    Some(Union::string_literals(&def.name, &def.values))
}
