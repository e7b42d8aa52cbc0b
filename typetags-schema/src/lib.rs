//! Prisma schema parsing for the typetags generator.
//!
//! This crate turns schema text into a [`Schema`]: ordered collections of
//! enum and model definitions. Parsing is deliberately lenient and total:
//! any input yields a `Schema`, malformed lines are dropped rather than
//! reported, and only the `@@schema` attribute is retained.
//!
//! The pipeline is strictly left-to-right:
//!
//! ```text
//! text → strip_line_comments → extract_blocks → Schema { enums, models }
//! ```
//!
//! No stage here performs I/O; [`SchemaFile`] is the small helper front-ends
//! use to load text before handing it to [`Schema::parse`].

mod ast;
mod block;
mod file;
mod parse;
mod strip;

pub use ast::{EnumDef, FieldDef, ModelDef, Schema};
pub use block::{Block, BlockKind, extract_blocks};
pub use file::{SchemaFile, SchemaFileError};
pub use strip::strip_line_comments;
