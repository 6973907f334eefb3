use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};
use std::str::FromStr as _;

///
/// ColumnType
///
/// Storage-type vocabulary understood by the catalog. Anything that does not
/// parse into this enum is either a declared scalar type or unknown.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum ColumnType {
    #[display("bigint")]
    BigInt,
    #[display("binary")]
    Binary,
    #[display("blob")]
    Blob,
    #[display("boolean")]
    Boolean,
    #[display("float")]
    Float,
    #[display("integer")]
    Integer,
    #[display("json")]
    Json,
    #[display("json_array")]
    JsonArray,
    #[display("simple_array")]
    SimpleArray,
    #[display("smallint")]
    SmallInt,
    #[display("string")]
    String,
    #[display("text")]
    Text,
}

impl ColumnType {
    /// The base primitive this storage type maps to.
    #[must_use]
    pub const fn primitive(self) -> Primitive {
        match self {
            Self::Text | Self::String | Self::Blob | Self::Binary => Primitive::Str,
            Self::Integer | Self::BigInt | Self::SmallInt => Primitive::Int,
            Self::Float => Primitive::Float,
            Self::Boolean => Primitive::Bool,
            Self::Json | Self::JsonArray | Self::SimpleArray => Primitive::Array,
        }
    }
}

impl std::str::FromStr for ColumnType {
    type Err = UnknownColumnType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ty = match s {
            "bigint" => Self::BigInt,
            "binary" => Self::Binary,
            "blob" => Self::Blob,
            "boolean" => Self::Boolean,
            "float" => Self::Float,
            "integer" => Self::Integer,
            "json" => Self::Json,
            "json_array" => Self::JsonArray,
            "simple_array" => Self::SimpleArray,
            "smallint" => Self::SmallInt,
            "string" => Self::String,
            "text" => Self::Text,
            _ => return Err(UnknownColumnType),
        };

        Ok(ty)
    }
}

///
/// UnknownColumnType
///

#[derive(Debug, Eq, PartialEq)]
pub struct UnknownColumnType;

///
/// Primitive
///
/// Base target-language representation of a storage type. Each primitive is
/// paired 1:1 with a semantic tag (`FieldKind` in the runtime vocabulary).
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum Primitive {
    Array,
    Bool,
    Float,
    Int,
    Str,
}

impl Primitive {
    /// Semantic tag identifier rendered into generated definition lists.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Array => "Array",
            Self::Bool => "Bool",
            Self::Float => "Float",
            Self::Int => "Int",
            Self::Str => "Str",
        }
    }

    /// Rust type used for the entity storage slot.
    #[must_use]
    pub const fn slot_type(self) -> &'static str {
        match self {
            Self::Array => "Json",
            Self::Bool => "bool",
            Self::Float => "f64",
            Self::Int => "i64",
            Self::Str => "String",
        }
    }

    /// Rust type returned by the generated accessor.
    #[must_use]
    pub const fn accessor_type(self) -> &'static str {
        match self {
            Self::Array => "&Json",
            Self::Bool => "bool",
            Self::Float => "f64",
            Self::Int => "i64",
            Self::Str => "&str",
        }
    }

    // Copy primitives are returned by value, the rest by reference.
    #[must_use]
    pub const fn is_copy(self) -> bool {
        matches!(self, Self::Bool | Self::Float | Self::Int)
    }
}

/// Classify a storage type name into its base primitive, if it has one.
#[must_use]
pub fn primitive_of(source_type: &str) -> Option<Primitive> {
    ColumnType::from_str(source_type).ok().map(ColumnType::primitive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr as _;

    #[test]
    fn classification_table_is_exhaustive_over_base_types() {
        let rows = [
            ("text", Primitive::Str),
            ("string", Primitive::Str),
            ("blob", Primitive::Str),
            ("binary", Primitive::Str),
            ("integer", Primitive::Int),
            ("bigint", Primitive::Int),
            ("smallint", Primitive::Int),
            ("float", Primitive::Float),
            ("boolean", Primitive::Bool),
            ("json", Primitive::Array),
            ("json_array", Primitive::Array),
            ("simple_array", Primitive::Array),
        ];

        for (name, expected) in rows {
            assert_eq!(primitive_of(name), Some(expected), "{name}");
        }
    }

    #[test]
    fn unknown_types_are_not_base() {
        assert_eq!(primitive_of("uuid"), None);
        assert_eq!(primitive_of(""), None);
    }

    #[test]
    fn display_round_trips() {
        for name in ["bigint", "json_array", "simple_array", "smallint"] {
            let ty = ColumnType::from_str(name).expect("parse");
            assert_eq!(ty.to_string(), name);
        }
    }
}
