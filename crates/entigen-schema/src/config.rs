use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

///
/// TypeEntry
/// One declared scalar type: the registration key and the storage type it
/// wraps.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TypeEntry {
    pub name: String,
    pub base_type: String,
}

impl TypeEntry {
    pub fn new(name: impl Into<String>, base_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_type: base_type.into(),
        }
    }
}

///
/// TypeConfig
/// Ordered custom-type configuration, read once per process. Iteration order
/// is configuration order.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TypeConfig {
    entries: Vec<TypeEntry>,
}

impl TypeConfig {
    #[must_use]
    pub fn new(entries: Vec<TypeEntry>) -> Self {
        Self { entries }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn entries(&self) -> &[TypeEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
