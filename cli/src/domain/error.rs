//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Validation errors ─────────────────────────────────────────────────────────

/// Raised when a target resource cannot back the requested deployment target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("resource type '{actual}' does not match expected type '{expected}'")]
    ResourceTypeMismatch { actual: String, expected: String },

    #[error("{field} must not be empty")]
    EmptyIdentifier { field: &'static str },
}

impl ValidationError {
    /// Stable machine-readable code used by `--output json` error objects.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::ResourceTypeMismatch { .. } => "invalid_resource_type",
            Self::EmptyIdentifier { .. } => "invalid_target",
        }
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: '{value}' (must be non-empty and contain no whitespace)")]
    InvalidValue { key: String, value: String },
}
