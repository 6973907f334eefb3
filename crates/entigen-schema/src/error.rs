use serde::Serialize;
use thiserror::Error as ThisError;

///
/// ErrorList
/// Flat collector for validation findings, reported together.
///

#[derive(Debug, Default, Serialize)]
pub struct ErrorList(Vec<String>);

impl ErrorList {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn add(&mut self, msg: impl Into<String>) {
        self.0.push(msg.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::fmt::Display for ErrorList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join("; "))
    }
}

/// Format a finding and push it onto an [`ErrorList`].
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}

///
/// ResolveError
/// Lookup failures during field-descriptor resolution. Always fatal to the
/// current generation call.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum ResolveError {
    #[error("unknown storage type '{name}'")]
    UnknownStorageType { name: String },

    #[error("declared type '{name}' is not registered")]
    UnknownCustomType { name: String },

    #[error("association '{field}' targets unknown entity '{entity}'")]
    UnknownTargetEntity { field: String, entity: String },

    #[error("entity '{entity}' has no column '{column}' referenced by an association")]
    UnknownReferencedColumn { entity: String, column: String },

    #[error("column '{column}' is declared more than once")]
    ColumnCollision { column: String },
}

///
/// RegistryError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum RegistryError {
    #[error("type '{name}' is already registered")]
    Duplicate { name: String },
}

///
/// ValidateError
///

#[derive(Debug, ThisError)]
pub enum ValidateError {
    #[error("metadata validation failed: {0}")]
    Invalid(ErrorList),
}

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("type configuration is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
