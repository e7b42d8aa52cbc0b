//! Shared base alias artifact.

use typetags_codegen::CodeBuilder;

use crate::ast::TypeAlias;

/// The base aliases every generated artifact set relies on: the
/// date-as-string alias and the loose JSON value alias.
const BASE_ALIASES: [(&str, &str); 2] = [("DateTimeString", "string"), ("JsonValue", "any")];

/// `common/base.ts`: base aliases shared by every partition.
pub struct BaseTs;

impl BaseTs {
    pub fn render(&self) -> String {
        let builder = CodeBuilder::typescript().line("// Generated by typetags. Shared base aliases.");
        base_aliases(builder).build()
    }
}

/// Emit the base aliases into an existing builder, aggregated layouts
/// included.
pub(crate) fn base_aliases(builder: CodeBuilder) -> CodeBuilder {
    BASE_ALIASES.iter().fold(builder, |b, (name, ty)| {
        TypeAlias::new(*name, *ty).render(b)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_both_aliases() {
        let content = BaseTs.render();
        assert_eq!(
            content,
            "// Generated by typetags. Shared base aliases.\n\
             export type DateTimeString = string;\n\
             export type JsonValue = any;\n"
        );
    }
}
