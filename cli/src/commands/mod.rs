//! Command implementations

pub mod config;
pub mod target;
pub mod version;

use crate::domain::{ConfigError, ValidationError};

/// Machine-readable code for a failed command, used in JSON error objects.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(e) = err.downcast_ref::<ValidationError>() {
        return e.code();
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return "invalid_config";
    }
    "command_failed"
}
