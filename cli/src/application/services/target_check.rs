//! Application service — deployment target check use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! Resolves the target resource (discovering its type when not supplied),
//! then builds the host-specific service target so type validation runs
//! exactly as it does before a deploy.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::ports::{ProgressReporter, ResourceDiscovery};
use crate::domain::{
    AzdConfig, ServiceHost, TargetResource, new_service_target, validate_identifier,
    validate_resource_type,
};

/// Inputs for [`check_target`].
#[derive(Debug, Clone)]
pub struct TargetCheckRequest {
    pub host: ServiceHost,
    /// Falls back to `defaults.subscription` when `None`.
    pub subscription_id: Option<String>,
    pub resource_group: String,
    pub resource_name: String,
    /// Discovered through [`ResourceDiscovery`] when `None`.
    pub resource_type: Option<String>,
}

/// Outcome of a successful check.
#[derive(Debug, Clone, Serialize)]
pub struct TargetReport {
    pub host: ServiceHost,
    pub resource: TargetResource,
    pub resource_id: String,
    /// Display name of the matched type constant.
    pub type_display_name: &'static str,
    /// `true` when the type was looked up rather than supplied.
    pub discovered: bool,
}

/// Resolve and validate a deployment target.
///
/// # Errors
///
/// Returns an error if no subscription is available, discovery fails, an
/// identifier is blank, or the resource type does not match the host. The
/// last two are [`crate::domain::ValidationError`]s and can be recovered with
/// `downcast_ref`.
pub async fn check_target(
    discovery: &impl ResourceDiscovery,
    reporter: &impl ProgressReporter,
    config: &AzdConfig,
    request: TargetCheckRequest,
) -> Result<TargetReport> {
    let subscription_id = match request.subscription_id {
        Some(id) => id,
        None => config
            .get("defaults.subscription")
            .map(str::to_string)
            .context(
                "no subscription given. Pass --subscription or run: azd config set defaults.subscription <id>",
            )?,
    };

    validate_identifier("subscription", &subscription_id)?;
    validate_identifier("resource group", &request.resource_group)?;
    validate_identifier("resource name", &request.resource_name)?;

    let (resource_type, discovered) = match request.resource_type {
        Some(t) => (t, false),
        None => {
            reporter.step(&format!(
                "Looking up {} in {}",
                request.resource_name, request.resource_group
            ));
            let types = discovery
                .resource_types(&subscription_id, &request.resource_group, &request.resource_name)
                .await?;
            let count = types.len();
            let t = pick_resource_type(request.host, types)
                .with_context(|| format!("resource '{}' not found", request.resource_name))?;
            if count > 1 {
                reporter.warn(&format!(
                    "{count} resources named '{}' in {}; checking {t}",
                    request.resource_name, request.resource_group
                ));
            }
            tracing::debug!(resource = %request.resource_name, resource_type = %t, "discovered resource type");
            (t, true)
        }
    };

    let resource = TargetResource::new(
        subscription_id,
        request.resource_group,
        request.resource_name,
        resource_type,
    );

    let target = new_service_target(request.host, resource)?;
    let required = target.host().required_resource_type();

    reporter.success(&format!(
        "{} '{}' is a valid {} target",
        required.display_name(),
        target.resource().resource_name(),
        target.host()
    ));

    Ok(TargetReport {
        host: target.host(),
        resource_id: target.resource().resource_id(),
        resource: target.resource().clone(),
        type_display_name: required.display_name(),
        discovered,
    })
}

/// Choose among the types reported for one name: the first that the host
/// accepts, otherwise the first reported so validation names it.
fn pick_resource_type(host: ServiceHost, types: Vec<String>) -> Option<String> {
    let required = host.required_resource_type().as_str();
    let matching = types
        .iter()
        .position(|t| validate_resource_type(t, required).is_ok());
    types.into_iter().nth(matching.unwrap_or(0))
}
