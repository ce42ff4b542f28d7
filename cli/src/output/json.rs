//! JSON output helpers.
//!
//! Provides the error-object formatter used by all `--output json` code paths
//! when a command fails, plus the JSON renderer for successful results.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::services::target_check::TargetReport;
use crate::domain::config::AzdConfig;
use crate::domain::AzureResourceType;
use crate::output::human::hosts_for;

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails (should not happen in
/// practice — `serde_json` only fails on non-finite floats and maps with
/// non-string keys, neither of which appear here).
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Renders results as pretty-printed JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    fn print(value: &impl Serialize) -> Result<()> {
        let out = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
        println!("{out}");
        Ok(())
    }

    /// Render the CLI version information.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        Self::print(&serde_json::json!({ "version": version }))
    }

    /// Render a validated deployment target.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_target_report(&self, report: &TargetReport) -> Result<()> {
        Self::print(report)
    }

    /// Render the known resource types.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_resource_types(&self, types: &[AzureResourceType]) -> Result<()> {
        let items: Vec<_> = types
            .iter()
            .map(|t| {
                serde_json::json!({
                    "type": t.as_str(),
                    "display_name": t.display_name(),
                    "hosts": hosts_for(*t),
                })
            })
            .collect();
        Self::print(&items)
    }

    /// Render the current configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_config(&self, config: &AzdConfig, path: &Path) -> Result<()> {
        Self::print(&serde_json::json!({
            "path": path.display().to_string(),
            "config": config,
        }))
    }
}
