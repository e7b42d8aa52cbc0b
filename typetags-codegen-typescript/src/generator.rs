//! Generation pipeline: parsed schema in, artifact map out.

use indexmap::IndexMap;
use typetags_codegen::FileMap;
use typetags_schema::{ModelDef, Schema};

use crate::{
    files::{BaseTs, EnumsTs, IndexTs, ModelsTs, SchemaModelsTs},
    type_mapper::TypeMapper,
};

/// Output shape toggles. Nothing else is configurable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Partition output by `@@schema` instead of one aggregated file.
    pub split_by_schema: bool,
    /// Also emit relation-free `Flat` interfaces.
    pub generate_flat: bool,
    /// Emit an aggregating `index.ts`.
    pub generate_index: bool,
}

/// Bucket name for models without an explicit `@@schema`.
const DEFAULT_PARTITION: &str = "default";

/// TypeScript generator over a parsed schema.
///
/// Pure and sequential: the same schema and options always produce a
/// byte-identical [`FileMap`]. No I/O happens here.
pub struct Generator<'a> {
    schema: &'a Schema,
    mapper: TypeMapper<'a>,
    options: GenerateOptions,
}

impl<'a> Generator<'a> {
    pub fn new(schema: &'a Schema, options: GenerateOptions) -> Self {
        Self {
            schema,
            mapper: TypeMapper::new(schema),
            options,
        }
    }

    /// Produce the full artifact map.
    pub fn generate(&self) -> FileMap {
        if self.options.split_by_schema {
            self.generate_split()
        } else {
            self.generate_single()
        }
    }

    fn generate_single(&self) -> FileMap {
        let mut files = FileMap::new();
        files.insert(
            "models.ts",
            ModelsTs::new(self.schema, &self.mapper, self.options.generate_flat).render(),
        );
        if self.options.generate_index {
            files.insert("index.ts", IndexTs::single().render());
        }
        files
    }

    fn generate_split(&self) -> FileMap {
        let mut files = FileMap::new();

        files.insert("common/base.ts", BaseTs.render());
        files.insert(
            "common/enums.ts",
            EnumsTs::new(self.schema.enums.values()).render(),
        );

        // Bucket models by partition, buckets in discovery order, models in
        // source order within each bucket.
        let mut partitions: IndexMap<&str, Vec<&ModelDef>> = IndexMap::new();
        for model in self.schema.models.values() {
            partitions
                .entry(model.schema.as_deref().unwrap_or(DEFAULT_PARTITION))
                .or_default()
                .push(model);
        }

        // Model name → owning partition, for cross-partition import
        // resolution.
        let mut model_partitions: IndexMap<&str, &str> = IndexMap::new();
        for (&partition, models) in &partitions {
            for model in models {
                model_partitions.insert(model.name.as_str(), partition);
            }
        }

        let mut enum_names: Vec<&str> = self.schema.enums.keys().map(String::as_str).collect();
        enum_names.sort_unstable();

        for (&partition, models) in &partitions {
            let artifact = SchemaModelsTs::new(
                partition,
                models,
                &enum_names,
                &model_partitions,
                &self.mapper,
                self.options.generate_flat,
            );
            files.insert(format!("{partition}/models.ts"), artifact.render());
        }

        if self.options.generate_index {
            let mut names: Vec<&str> = partitions.keys().copied().collect();
            names.sort_unstable();
            let modules = ["./common/base".to_string(), "./common/enums".to_string()]
                .into_iter()
                .chain(names.into_iter().map(|name| format!("./{name}/models")));
            files.insert("index.ts", IndexTs::new(modules).render());
        }

        files
    }
}
