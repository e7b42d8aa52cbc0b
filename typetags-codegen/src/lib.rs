//! Shared code generation building blocks for the typetags generator.
//!
//! Language-agnostic pieces used by language-specific emitters:
//! [`CodeBuilder`] assembles indented text and [`FileMap`] holds the
//! generated path → content mapping that callers write to disk, package,
//! or preview.

mod code_builder;
mod file_map;

pub use code_builder::{CodeBuilder, Indent};
pub use file_map::FileMap;
