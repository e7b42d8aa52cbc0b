//! Per-partition artifact with resolved cross-partition imports.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use typetags_codegen::CodeBuilder;
use typetags_schema::ModelDef;

use crate::{
    ast::Import,
    files::model_interfaces,
    type_mapper::{FieldClass, TypeMapper},
};

/// `<partition>/models.ts`: this partition's models in source order, with
/// imports for the shared aliases, the schema-wide enums, and every model
/// referenced across a partition boundary.
pub struct SchemaModelsTs<'a> {
    partition: &'a str,
    models: &'a [&'a ModelDef],
    /// Schema-wide enum names, pre-sorted.
    enum_names: &'a [&'a str],
    /// Model name → owning partition, across the whole schema.
    model_partitions: &'a IndexMap<&'a str, &'a str>,
    mapper: &'a TypeMapper<'a>,
    flat: bool,
}

impl<'a> SchemaModelsTs<'a> {
    pub fn new(
        partition: &'a str,
        models: &'a [&'a ModelDef],
        enum_names: &'a [&'a str],
        model_partitions: &'a IndexMap<&'a str, &'a str>,
        mapper: &'a TypeMapper<'a>,
        flat: bool,
    ) -> Self {
        Self {
            partition,
            models,
            enum_names,
            model_partitions,
            mapper,
            flat,
        }
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript().line(&format!(
            "// Generated by typetags. Types for schema \"{}\".",
            self.partition
        ));

        builder = Import::new("../common/base")
            .named("DateTimeString")
            .named("JsonValue")
            .type_only()
            .render(builder);

        if !self.enum_names.is_empty() {
            builder = Import::new("../common/enums")
                .named_all(self.enum_names.iter().copied())
                .type_only()
                .render(builder);
        }

        for (source, names) in self.cross_partition_imports() {
            builder = Import::new(format!("../{source}/models"))
                .named_all(names)
                .type_only()
                .render(builder);
        }

        for model in self.models {
            builder = model_interfaces(builder.blank(), model, self.mapper, self.flat);
        }
        builder.build()
    }

    /// Relation targets living in other partitions, grouped by source
    /// partition. Sources keep discovery order; names within a source are
    /// deduplicated and sorted.
    fn cross_partition_imports(&self) -> IndexMap<&'a str, BTreeSet<&'a str>> {
        let mut imports: IndexMap<&'a str, BTreeSet<&'a str>> = IndexMap::new();
        for model in self.models {
            for field in &model.fields {
                let FieldClass::Relation(_) = self.mapper.classify(&field.type_name) else {
                    continue;
                };
                let Some((&target, &source)) =
                    self.model_partitions.get_key_value(field.type_name.as_str())
                else {
                    continue;
                };
                if source != self.partition {
                    imports.entry(source).or_default().insert(target);
                }
            }
        }
        imports
    }
}
