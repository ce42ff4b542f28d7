//! Target resources and resource type validation.
//!
//! Pure functions only — no I/O, no async. Provisioning backends report
//! resource types with inconsistent casing, so every comparison against a
//! known type constant goes through [`validate_resource_type`].

use serde::Serialize;

use crate::domain::error::ValidationError;

// ── Resource type constants ──────────────────────────────────────────────────

/// Cloud resource types known to the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AzureResourceType {
    ResourceGroup,
    StorageAccount,
    KeyVault,
    PortalDashboard,
    AppInsightComponent,
    LogAnalyticsWorkspace,
    WebSite,
    StaticWebSite,
    ServicePlan,
    CosmosDb,
    ContainerApp,
    ContainerAppEnvironment,
    ContainerRegistry,
}

impl AzureResourceType {
    /// Every known type, in display order.
    pub const ALL: &'static [AzureResourceType] = &[
        Self::ResourceGroup,
        Self::StorageAccount,
        Self::KeyVault,
        Self::PortalDashboard,
        Self::AppInsightComponent,
        Self::LogAnalyticsWorkspace,
        Self::WebSite,
        Self::StaticWebSite,
        Self::ServicePlan,
        Self::CosmosDb,
        Self::ContainerApp,
        Self::ContainerAppEnvironment,
        Self::ContainerRegistry,
    ];

    /// Canonical type constant, e.g. `Microsoft.App/containerApps`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ResourceGroup => "Microsoft.Resources/resourceGroups",
            Self::StorageAccount => "Microsoft.Storage/storageAccounts",
            Self::KeyVault => "Microsoft.KeyVault/vaults",
            Self::PortalDashboard => "Microsoft.Portal/dashboards",
            Self::AppInsightComponent => "Microsoft.Insights/components",
            Self::LogAnalyticsWorkspace => "Microsoft.OperationalInsights/workspaces",
            Self::WebSite => "Microsoft.Web/sites",
            Self::StaticWebSite => "Microsoft.Web/staticSites",
            Self::ServicePlan => "Microsoft.Web/serverFarms",
            Self::CosmosDb => "Microsoft.DocumentDB/databaseAccounts",
            Self::ContainerApp => "Microsoft.App/containerApps",
            Self::ContainerAppEnvironment => "Microsoft.App/managedEnvironments",
            Self::ContainerRegistry => "Microsoft.ContainerRegistry/registries",
        }
    }

    /// Human-friendly name shown in progress and status output.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::ResourceGroup => "Resource group",
            Self::StorageAccount => "Storage account",
            Self::KeyVault => "Key vault",
            Self::PortalDashboard => "Portal dashboard",
            Self::AppInsightComponent => "Application Insights",
            Self::LogAnalyticsWorkspace => "Log Analytics workspace",
            Self::WebSite => "Web App",
            Self::StaticWebSite => "Static Web App",
            Self::ServicePlan => "App Service plan",
            Self::CosmosDb => "Azure Cosmos DB",
            Self::ContainerApp => "Container App",
            Self::ContainerAppEnvironment => "Container Apps Environment",
            Self::ContainerRegistry => "Container registry",
        }
    }

    /// Look up a known type by its reported string, ignoring case.
    ///
    /// Uses the same exact-match rule as [`validate_resource_type`]: no
    /// trimming and no prefix matching.
    #[must_use]
    pub fn from_type_str(resource_type: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| validate_resource_type(resource_type, t.as_str()).is_ok())
    }
}

impl std::fmt::Display for AzureResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Target resource ──────────────────────────────────────────────────────────

/// A deployed cloud resource identified as the destination of a deploy.
///
/// Fields are private: a `TargetResource` never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetResource {
    subscription_id: String,
    resource_group: String,
    resource_name: String,
    resource_type: String,
}

impl TargetResource {
    #[must_use]
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group: impl Into<String>,
        resource_name: impl Into<String>,
        resource_type: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group: resource_group.into(),
            resource_name: resource_name.into(),
            resource_type: resource_type.into(),
        }
    }

    #[must_use]
    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    #[must_use]
    pub fn resource_group(&self) -> &str {
        &self.resource_group
    }

    #[must_use]
    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    /// Type string exactly as reported by the provisioning backend.
    #[must_use]
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Fully qualified resource id, e.g.
    /// `/subscriptions/SUB/resourceGroups/RG/providers/Microsoft.App/containerApps/api`.
    #[must_use]
    pub fn resource_id(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/{}/{}",
            self.subscription_id, self.resource_group, self.resource_type, self.resource_name
        )
    }

    /// Check this resource against a known type constant.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ResourceTypeMismatch`] if the reported type
    /// does not match `expected`.
    pub fn validate_type(&self, expected: AzureResourceType) -> Result<(), ValidationError> {
        validate_resource_type(&self.resource_type, expected.as_str())
    }
}

// ── Validator ────────────────────────────────────────────────────────────────

/// Validate a reported resource type against an expected type constant.
///
/// Both sides are lowercased before an exact comparison. Whitespace is not
/// trimmed and no aliases are recognised.
///
/// # Errors
///
/// Returns [`ValidationError::ResourceTypeMismatch`] carrying both strings
/// when they differ.
pub fn validate_resource_type(resource_type: &str, expected: &str) -> Result<(), ValidationError> {
    if resource_type.to_lowercase() == expected.to_lowercase() {
        return Ok(());
    }
    Err(ValidationError::ResourceTypeMismatch {
        actual: resource_type.to_string(),
        expected: expected.to_string(),
    })
}

/// Reject an empty or whitespace-only subscription, group or resource name.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyIdentifier`] naming `field`.
pub fn validate_identifier(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyIdentifier { field });
    }
    Ok(())
}
