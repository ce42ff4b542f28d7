//! Human-readable terminal renderer.

use std::path::Path;

use owo_colors::OwoColorize as _;

use crate::application::services::target_check::TargetReport;
use crate::domain::config::{AzdConfig, CONFIG_ENV, VALID_CONFIG_KEYS};
use crate::domain::{AzureResourceType, ServiceHost};
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version information.
    pub fn render_version(&self, version: &str) {
        println!("azd {version}");
    }

    /// Render a validated deployment target.
    pub fn render_target_report(&self, report: &TargetReport) {
        if self.ctx.quiet {
            return;
        }
        println!();
        self.ctx.header(&format!(
            "{} ({})",
            report.resource.resource_name(),
            report.host
        ));
        for (label, value) in report_rows(report) {
            self.ctx.kv(&format!("{label:<13}"), &value);
        }
        if report.discovered {
            self.ctx.info("Type discovered with az resource list");
        }
        println!();
    }

    /// Render the known resource types and the hosts they can back.
    pub fn render_resource_types(&self, types: &[AzureResourceType]) {
        println!();
        println!("  {}", "Resource types".style(self.ctx.styles.header));
        println!();
        for t in types {
            println!(
                "  {:<28} {}{}",
                t.display_name(),
                t.as_str().style(self.ctx.styles.dim),
                hosts_label(*t)
            );
        }
        println!();
    }

    /// Render the current configuration.
    pub fn render_config(&self, config: &AzdConfig, path: &Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        for (key, value) in config_rows(config) {
            println!("  {:<24} {value}", format!("{key}:"));
        }
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        println!(
            "    {:<18} {}",
            format!("{CONFIG_ENV}:"),
            std::env::var(CONFIG_ENV).unwrap_or_else(|_| "(not set)".to_string())
        );
        println!(
            "    {:<18} {}",
            "NO_COLOR:",
            std::env::var("NO_COLOR").unwrap_or_else(|_| "(not set)".to_string())
        );
        println!();
    }
}

/// Labelled fields shown for a checked target, in display order.
#[must_use]
pub fn report_rows(report: &TargetReport) -> Vec<(&'static str, String)> {
    let resource = &report.resource;
    vec![
        ("Type:", resource.resource_type().to_string()),
        ("Kind:", report.type_display_name.to_string()),
        ("Subscription:", resource.subscription_id().to_string()),
        ("Group:", resource.resource_group().to_string()),
        ("Resource ID:", report.resource_id.clone()),
    ]
}

/// `"  [appservice, function]"` suffix for a type listing; empty when no
/// host deploys to `t`.
#[must_use]
pub fn hosts_label(t: AzureResourceType) -> String {
    let hosts: Vec<&str> = hosts_for(t).iter().map(|h| h.as_str()).collect();
    if hosts.is_empty() {
        return String::new();
    }
    format!("  [{}]", hosts.join(", "))
}

/// Every known setting with its value or `(not set)`.
#[must_use]
pub fn config_rows(config: &AzdConfig) -> Vec<(&'static str, &str)> {
    VALID_CONFIG_KEYS
        .iter()
        .map(|key| (*key, config.get(key).unwrap_or("(not set)")))
        .collect()
}

/// Hosts whose targets accept resources of type `t`.
#[must_use]
pub fn hosts_for(t: AzureResourceType) -> Vec<ServiceHost> {
    ServiceHost::ALL
        .iter()
        .copied()
        .filter(|h| h.required_resource_type() == t)
        .collect()
}
