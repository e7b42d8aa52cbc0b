//! Declaration parsing: turning extracted blocks into schema definitions.

use crate::{
    ast::{EnumDef, FieldDef, ModelDef, Schema},
    block::{Block, BlockKind, extract_blocks},
    strip::strip_line_comments,
};

impl Schema {
    /// Parse schema text into enum and model definitions.
    ///
    /// Total over arbitrary input: malformed lines are dropped, never
    /// surfaced. The worst possible outcome is an empty definition.
    pub fn parse(text: &str) -> Self {
        let stripped = strip_line_comments(text);
        let mut schema = Schema::default();
        for block in extract_blocks(&stripped) {
            match block.kind {
                BlockKind::Enum => {
                    let def = parse_enum_block(&block);
                    schema.enums.insert(def.name.clone(), def);
                }
                BlockKind::Model => {
                    let def = parse_model_block(&block);
                    schema.models.insert(def.name.clone(), def);
                }
            }
        }
        schema
    }
}

fn parse_enum_block(block: &Block) -> EnumDef {
    let mut values = Vec::new();
    for raw in &block.body {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        // `@@schema` is legal on enums but carries nothing we keep.
        if line.starts_with("@@schema") {
            continue;
        }
        if line.starts_with('@') {
            continue;
        }
        if let Some(token) = line.split_whitespace().next() {
            values.push(token.to_string());
        }
    }
    EnumDef {
        name: block.name.clone(),
        values,
    }
}

fn parse_model_block(block: &Block) -> ModelDef {
    let mut fields = Vec::new();
    let mut schema_name = None;
    for raw in &block.body {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("@@schema") {
            // Last occurrence wins; a malformed attribute changes nothing.
            if let Some(name) = parse_schema_attribute(line) {
                schema_name = Some(name);
            }
            continue;
        }
        if line.starts_with('@') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let (Some(name), Some(type_token)) = (tokens.next(), tokens.next()) else {
            // Not a field declaration; drop it.
            continue;
        };
        fields.push(parse_field(name, type_token, line));
    }
    ModelDef {
        name: block.name.clone(),
        fields,
        schema: schema_name,
    }
}

/// Decompose a raw type token: a trailing `?` marks optionality, then a
/// trailing `[]` marks a list; whatever remains is the base type name.
fn parse_field(name: &str, type_token: &str, raw_line: &str) -> FieldDef {
    let (rest, is_optional) = match type_token.strip_suffix('?') {
        Some(rest) => (rest, true),
        None => (type_token, false),
    };
    let (base, is_list) = match rest.strip_suffix("[]") {
        Some(base) => (base, true),
        None => (rest, false),
    };
    FieldDef {
        name: name.to_string(),
        type_name: base.to_string(),
        is_optional,
        is_list,
        raw_line: raw_line.to_string(),
    }
}

/// Extract the partition name from `@@schema("name")`.
fn parse_schema_attribute(line: &str) -> Option<String> {
    let rest = line.strip_prefix("@@schema")?;
    let rest = rest.strip_prefix("(\"")?;
    let (name, tail) = rest.split_once('"')?;
    if name.is_empty() || !tail.starts_with(')') {
        return None;
    }
    Some(name.to_string())
}
