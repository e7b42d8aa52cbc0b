//! Parsed schema definitions.

use indexmap::IndexMap;

/// An `enum` declaration: a name and its values in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDef {
    pub name: String,
    /// May be empty; empty enums parse fine and are skipped at emission.
    pub values: Vec<String>,
}

/// A single model field with all type modifiers stripped off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    /// Base type name, never contains `?` or `[]`.
    pub type_name: String,
    pub is_optional: bool,
    pub is_list: bool,
    /// Original declaration line, kept for diagnostics only.
    pub raw_line: String,
}

/// A `model` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDef {
    pub name: String,
    /// Fields in declaration order, never reordered.
    pub fields: Vec<FieldDef>,
    /// Partition assigned via `@@schema("...")`, if any.
    pub schema: Option<String>,
}

/// A fully parsed schema document.
///
/// Both collections preserve declaration order. Re-declaring a name replaces
/// the previous entry entirely (last-write-wins, no merge). Every downstream
/// stage consumes a `Schema` read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    pub enums: IndexMap<String, EnumDef>,
    pub models: IndexMap<String, ModelDef>,
}

impl Schema {
    pub fn is_empty(&self) -> bool {
        self.enums.is_empty() && self.models.is_empty()
    }
}
