//! TypeScript type-declaration emitter for the typetags generator.
//!
//! Takes a parsed [`typetags_schema::Schema`] and produces declaration
//! artifacts as a [`typetags_codegen::FileMap`]:
//!
//! - single-file mode: one aggregated `models.ts` (plus an optional
//!   `index.ts`)
//! - split mode: `common/base.ts`, `common/enums.ts`, one
//!   `<partition>/models.ts` per `@@schema` partition with resolved
//!   cross-partition imports, and an optional aggregating `index.ts`
//!
//! # Usage
//!
//! ```
//! use typetags_codegen_typescript::{GenerateOptions, Generator};
//! use typetags_schema::Schema;
//!
//! let schema = Schema::parse("model User {\n  id String\n}");
//! let files = Generator::new(&schema, GenerateOptions::default()).generate();
//! assert!(files.get("models.ts").unwrap().contains("export interface User"));
//! ```

mod generator;
mod type_mapper;

pub mod ast;
pub mod files;

pub use generator::{GenerateOptions, Generator};
pub use type_mapper::{FieldClass, TypeMapper, scalar_type};
