//! Environment-variable lookups with typed errors.
//!
//! Process-wide settings (config file location, log filters) are read once at
//! startup through these helpers and then passed around explicitly.

use std::env::{self, VarError};

use thiserror::Error;

/// Why an environment variable could not be used.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvVarError {
    /// The variable is set but is not valid UTF-8.
    #[error("Environment variable {0} is not valid unicode")]
    NotUnicode(String),
}

/// Reads an optional environment variable, trimming surrounding whitespace.
///
/// Returns `Ok(None)` when the variable is unset or blank, so `FOO= cargo run`
/// behaves like an unset `FOO`.
pub fn optional_env_var(name: &str) -> Result<Option<String>, EnvVarError> {
    match env::var(name) {
        Ok(value) => {
            let value = value.trim();
            Ok((!value.is_empty()).then(|| value.to_string()))
        }
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(EnvVarError::NotUnicode(name.to_string())),
    }
}
