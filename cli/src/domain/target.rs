//! Service targets — deployment destinations built from a validated resource.
//!
//! Every kind-specific constructor checks the resource type exactly once on
//! entry. A target that exists is therefore known to sit on the right kind
//! of resource; nothing re-validates it afterwards.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::ValidationError;
use crate::domain::resource::{AzureResourceType, TargetResource};

/// The `host` a service deploys to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceHost {
    ContainerApp,
    AppService,
    Function,
    StaticWebApp,
}

impl ServiceHost {
    pub const ALL: &'static [ServiceHost] = &[
        Self::ContainerApp,
        Self::AppService,
        Self::Function,
        Self::StaticWebApp,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ContainerApp => "containerapp",
            Self::AppService => "appservice",
            Self::Function => "function",
            Self::StaticWebApp => "staticwebapp",
        }
    }

    /// Resource type a target of this host must be backed by.
    ///
    /// App Service and Functions both run on `Microsoft.Web/sites`.
    #[must_use]
    pub fn required_resource_type(self) -> AzureResourceType {
        match self {
            Self::ContainerApp => AzureResourceType::ContainerApp,
            Self::AppService | Self::Function => AzureResourceType::WebSite,
            Self::StaticWebApp => AzureResourceType::StaticWebSite,
        }
    }
}

impl fmt::Display for ServiceHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceHost {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|h| h.as_str()).collect();
                format!("unsupported host '{s}' (valid: {})", valid.join(", "))
            })
    }
}

/// A deployment destination bound to one target resource.
pub trait ServiceTarget: fmt::Debug + Send + Sync {
    /// Host kind of this target.
    fn host(&self) -> ServiceHost;
    /// The validated resource backing this target.
    fn resource(&self) -> &TargetResource;
}

macro_rules! service_target {
    ($(#[$doc:meta])* $name:ident, $host:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name {
            resource: TargetResource,
        }

        impl $name {
            /// Build the target, rejecting resources of the wrong type.
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError::ResourceTypeMismatch`] if the
            /// resource type does not match the host's required type.
            pub fn new(resource: TargetResource) -> Result<Self, ValidationError> {
                resource.validate_type($host.required_resource_type())?;
                Ok(Self { resource })
            }
        }

        impl ServiceTarget for $name {
            fn host(&self) -> ServiceHost {
                $host
            }

            fn resource(&self) -> &TargetResource {
                &self.resource
            }
        }
    };
}

service_target!(
    /// Deploys a container image to a Container App.
    ContainerAppTarget,
    ServiceHost::ContainerApp
);
service_target!(
    /// Deploys a zip package to an App Service web app.
    AppServiceTarget,
    ServiceHost::AppService
);
service_target!(
    /// Deploys a zip package to a Function App.
    FunctionAppTarget,
    ServiceHost::Function
);
service_target!(
    /// Uploads static content to a Static Web App.
    StaticWebAppTarget,
    ServiceHost::StaticWebApp
);

/// Construct the target for `host` from `resource`.
///
/// # Errors
///
/// Propagates the constructor's [`ValidationError`] unchanged.
pub fn new_service_target(
    host: ServiceHost,
    resource: TargetResource,
) -> Result<Box<dyn ServiceTarget>, ValidationError> {
    Ok(match host {
        ServiceHost::ContainerApp => Box::new(ContainerAppTarget::new(resource)?),
        ServiceHost::AppService => Box::new(AppServiceTarget::new(resource)?),
        ServiceHost::Function => Box::new(FunctionAppTarget::new(resource)?),
        ServiceHost::StaticWebApp => Box::new(StaticWebAppTarget::new(resource)?),
    })
}
