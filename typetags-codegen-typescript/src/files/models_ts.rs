//! Aggregated single-file artifact.

use typetags_codegen::CodeBuilder;
use typetags_schema::{ModelDef, Schema};

use crate::{
    ast::Interface,
    files::{base_aliases, enum_union},
    type_mapper::TypeMapper,
};

/// `models.ts`: base aliases, enum unions, and every model interface in one
/// file, all in declaration order.
pub struct ModelsTs<'a> {
    schema: &'a Schema,
    mapper: &'a TypeMapper<'a>,
    flat: bool,
}

impl<'a> ModelsTs<'a> {
    pub fn new(schema: &'a Schema, mapper: &'a TypeMapper<'a>, flat: bool) -> Self {
        Self {
            schema,
            mapper,
            flat,
        }
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript()
            .line("// Generated by typetags from a Prisma schema. Do not edit.")
            .blank();
        builder = base_aliases(builder);

        let unions: Vec<_> = self.schema.enums.values().filter_map(enum_union).collect();
        if !unions.is_empty() {
            builder = unions
                .into_iter()
                .fold(builder.blank(), |b, union| union.render(b));
        }

        for model in self.schema.models.values() {
            builder = model_interfaces(builder.blank(), model, self.mapper, self.flat);
        }
        builder.build()
    }
}

/// Full interface for a model under the nested policy, plus its `Flat`
/// sibling (relation fields dropped, flat policy) when requested.
pub(crate) fn model_interfaces(
    builder: CodeBuilder,
    model: &ModelDef,
    mapper: &TypeMapper<'_>,
    flat: bool,
) -> CodeBuilder {
    let full = model
        .fields
        .iter()
        .fold(Interface::new(&model.name), |iface, field| {
            iface.field(&field.name, mapper.nested_type(field))
        });
    let builder = full.render(builder);

    if !flat {
        return builder;
    }

    let flat_iface = model
        .fields
        .iter()
        .filter(|field| !mapper.is_relation(field))
        .fold(
            Interface::new(format!("{}Flat", model.name)),
            |iface, field| iface.field(&field.name, mapper.flat_type(field)),
        );
    flat_iface.render(builder.blank())
}

#[cfg(test)]
mod tests {
    use typetags_schema::Schema;

    use super::*;

    #[test]
    fn sections_come_in_fixed_order() {
        let schema = Schema::parse(
            "model User {\n  id String\n  role Role\n}\nenum Role {\n  ADMIN\n}",
        );
        let mapper = TypeMapper::new(&schema);
        let content = ModelsTs::new(&schema, &mapper, false).render();

        let aliases = content.find("export type DateTimeString").unwrap();
        let enums = content.find("export type Role").unwrap();
        let models = content.find("export interface User").unwrap();
        assert!(aliases < enums && enums < models);
    }

    #[test]
    fn empty_model_renders_empty_interface() {
        let schema = Schema::parse("model Nothing {\n}");
        let mapper = TypeMapper::new(&schema);
        let content = ModelsTs::new(&schema, &mapper, false).render();
        assert!(content.contains("export interface Nothing {}"));
    }

    #[test]
    fn flat_variant_follows_full_interface() {
        let schema = Schema::parse("model Post {\n  id String\n  author User\n}\nmodel User {\n  id String\n}");
        let mapper = TypeMapper::new(&schema);
        let content = ModelsTs::new(&schema, &mapper, true).render();

        assert!(content.contains("export interface PostFlat"));
        let flat_section = content.split("PostFlat").nth(1).unwrap();
        let flat_body = flat_section.split('}').next().unwrap();
        assert!(flat_body.contains("id: string;"));
        assert!(!flat_body.contains("author"));
    }
}
