use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// FieldKind
///
/// Semantic tag of a base-typed field. Paired 1:1 with the schema layer's
/// primitive classification; generated definition lists reference these
/// variants by name.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum FieldKind {
    Array,
    Bool,
    Float,
    Int,
    Str,
}

impl FieldKind {
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Float | Self::Int)
    }
}
