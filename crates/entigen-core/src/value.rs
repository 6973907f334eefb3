///
/// Json
///
/// Slot type for array-kinded fields. Providers hand these through opaque;
/// the mapping layer owns (de)serialization.
///

pub type Json = serde_json::Value;
