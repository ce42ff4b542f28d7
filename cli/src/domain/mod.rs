//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod resource;
pub mod target;

pub use config::{AzdConfig, validate_config_key, validate_config_value};
pub use error::{ConfigError, ValidationError};
pub use resource::{
    AzureResourceType, TargetResource, validate_identifier, validate_resource_type,
};
pub use target::{ServiceHost, ServiceTarget, new_service_target};
