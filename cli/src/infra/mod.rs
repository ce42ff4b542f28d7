//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution, the `az`
//! CLI client, and config file access.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod az_cli;
pub mod command_runner;
pub mod config;

pub use az_cli::AzCli;
pub use command_runner::TokioCommandRunner;
pub use config::YamlConfigStore;
