use crate::error::RegistryError;
use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reserved namespace for synthesized scalar types. An implementation path
/// under this namespace marks its storage type as derived.
pub const GENERATED_NAMESPACE: &str = "entigen_types";

///
/// TypeKey
/// Resolvable identity of a type implementation, as a fully qualified path.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TypeKey(String);

impl TypeKey {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment, used as the short type name in generated source.
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.0.rsplit("::").next().unwrap_or(&self.0)
    }

    #[must_use]
    pub fn is_generated(&self) -> bool {
        self.0
            .strip_prefix(GENERATED_NAMESPACE)
            .is_some_and(|rest| rest.starts_with("::"))
    }
}

impl std::fmt::Display for TypeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical identity of the wrapper synthesized for a declared type name.
#[must_use]
pub fn generated_type_key(name: &str) -> TypeKey {
    TypeKey(format!(
        "{GENERATED_NAMESPACE}::{}",
        name.to_case(Case::Pascal)
    ))
}

/// File name of the source unit backing a declared type name.
#[must_use]
pub fn generated_unit_file(name: &str) -> String {
    format!("{}.rs", name.to_case(Case::Snake))
}

///
/// TypeMap
/// Externally owned mapping from storage type names to their implementing
/// type's identity. Resolution fails on names absent from it and from the
/// registry.
///

#[derive(Clone, Debug, Default)]
pub struct TypeMap(BTreeMap<String, TypeKey>);

impl TypeMap {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Map pre-populated with the built-in storage types.
    #[must_use]
    pub fn standard() -> Self {
        let mut map = Self::new();

        for name in ["text", "string", "blob", "binary"] {
            map.insert(name, TypeKey::new("::std::string::String"));
        }
        for name in ["integer", "bigint", "smallint"] {
            map.insert(name, TypeKey::new("i64"));
        }
        map.insert("float", TypeKey::new("f64"));
        map.insert("boolean", TypeKey::new("bool"));
        for name in ["json", "json_array", "simple_array"] {
            map.insert(name, TypeKey::new("::serde_json::Value"));
        }

        map
    }

    pub fn insert(&mut self, name: impl Into<String>, key: TypeKey) {
        self.0.insert(name.into(), key);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeKey> {
        self.0.get(name)
    }
}

///
/// TypeRegistry
/// Explicit process-wide table mapping declared type names to their
/// implementation identity. Owned by whatever orchestrates startup and
/// passed in wherever resolution or synthesis needs it.
///

#[derive(Clone, Debug, Default)]
pub struct TypeRegistry(BTreeMap<String, TypeKey>);

impl TypeRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeKey> {
        self.0.get(name)
    }

    /// Register a declared name. Duplicate registration is an error; the
    /// caller is expected to check [`Self::has`] first when skipping is the
    /// intended behavior.
    pub fn register(&mut self, name: impl Into<String>, key: TypeKey) -> Result<(), RegistryError> {
        let name = name.into();
        if self.0.contains_key(&name) {
            return Err(RegistryError::Duplicate { name });
        }
        self.0.insert(name, key);

        Ok(())
    }

    /// Rollback support for a failed synthesis pass. Not part of the normal
    /// lifecycle; registrations are otherwise permanent for the process.
    pub fn remove(&mut self, name: &str) -> Option<TypeKey> {
        self.0.remove(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
