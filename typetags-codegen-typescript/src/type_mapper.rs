//! Field classification and TypeScript type projection.

use std::collections::HashSet;

use typetags_schema::{FieldDef, Schema};

/// Fixed scalar vocabulary and its TypeScript spellings.
///
/// `Int`, `Float`, `BigInt` and `Decimal` all collapse to `number`; that
/// many-to-one loss is intentional and must stay. `DateTime` and `Json` map
/// to the shared base aliases rather than raw TypeScript types.
const SCALAR_TYPES: [(&str, &str); 8] = [
    ("String", "string"),
    ("Int", "number"),
    ("Float", "number"),
    ("Boolean", "boolean"),
    ("DateTime", "DateTimeString"),
    ("Json", "JsonValue"),
    ("BigInt", "number"),
    ("Decimal", "number"),
];

/// Look up the TypeScript spelling of a scalar type name.
pub fn scalar_type(name: &str) -> Option<&'static str> {
    SCALAR_TYPES
        .iter()
        .find(|(scalar, _)| *scalar == name)
        .map(|(_, ts)| *ts)
}

/// How a field's base type resolves against the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldClass<'a> {
    /// Member of the fixed scalar vocabulary.
    Scalar(&'static str),
    /// Names a declared enum.
    Enum(&'a str),
    /// Names a declared model: a reference, not an inline value.
    Relation(&'a str),
    /// Undeclared; passed through or widened depending on policy.
    Unknown(&'a str),
}

/// Projects parsed fields to TypeScript type expressions under the nested
/// (relation-aware) and flat (relation-stripped) policies.
pub struct TypeMapper<'a> {
    model_names: HashSet<&'a str>,
    enum_names: HashSet<&'a str>,
}

impl<'a> TypeMapper<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            model_names: schema.models.keys().map(String::as_str).collect(),
            enum_names: schema.enums.keys().map(String::as_str).collect(),
        }
    }

    /// Classify a base type name. Scalars win over declared names, enums
    /// over models.
    pub fn classify<'b>(&self, type_name: &'b str) -> FieldClass<'b> {
        if let Some(ts) = scalar_type(type_name) {
            FieldClass::Scalar(ts)
        } else if self.enum_names.contains(type_name) {
            FieldClass::Enum(type_name)
        } else if self.model_names.contains(type_name) {
            FieldClass::Relation(type_name)
        } else {
            FieldClass::Unknown(type_name)
        }
    }

    /// True when the field references another declared model.
    pub fn is_relation(&self, field: &FieldDef) -> bool {
        matches!(self.classify(&field.type_name), FieldClass::Relation(_))
    }

    /// Relation-aware projection used by the full model interfaces.
    pub fn nested_type(&self, field: &FieldDef) -> String {
        let class = self.classify(&field.type_name);
        let relation = matches!(class, FieldClass::Relation(_));
        let base = match class {
            FieldClass::Scalar(ts) => ts,
            FieldClass::Enum(name) | FieldClass::Relation(name) | FieldClass::Unknown(name) => {
                name
            }
        };

        if field.is_list {
            // Optionality is ignored on lists; relation lists are nullable
            // as a whole.
            if relation {
                format!("{base}[] | null")
            } else {
                format!("{base}[]")
            }
        } else if relation || field.is_optional {
            // Relations are always nullable, optional or not.
            format!("{base} | null")
        } else {
            base.to_string()
        }
    }

    /// Relation-stripped projection for the `Flat` interfaces.
    ///
    /// Callers exclude relation-classified fields before projecting. The
    /// flat output must not reference relation-adjacent or undeclared
    /// identifiers, so anything that is not a scalar or declared enum
    /// widens to `any`.
    pub fn flat_type(&self, field: &FieldDef) -> String {
        let base = match self.classify(&field.type_name) {
            FieldClass::Scalar(ts) => ts,
            FieldClass::Enum(name) => name,
            FieldClass::Relation(_) | FieldClass::Unknown(_) => "any",
        };

        let mut ty = base.to_string();
        if field.is_list {
            ty.push_str("[]");
        }
        if field.is_optional {
            format!("{ty} | null")
        } else {
            ty
        }
    }
}
