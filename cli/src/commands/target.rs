//! `azd target` — check deployment targets and list known resource types.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::app::AppContext;
use crate::application::services::config_service;
use crate::application::services::target_check::{TargetCheckRequest, check_target};
use crate::domain::{AzureResourceType, ServiceHost};

/// Target subcommands.
#[derive(Subcommand)]
pub enum TargetCommand {
    /// Check that a deployed resource can back a service host
    Check(CheckArgs),
    /// List known resource types
    Types,
}

/// Arguments for `azd target check`.
#[derive(Args)]
pub struct CheckArgs {
    /// Service host (containerapp, appservice, function, staticwebapp)
    #[arg(long)]
    pub host: ServiceHost,

    /// Resource name
    #[arg(short, long)]
    pub name: String,

    /// Resource group containing the resource
    #[arg(short = 'g', long)]
    pub resource_group: String,

    /// Subscription id (defaults to `defaults.subscription`)
    #[arg(short, long, env = "AZURE_SUBSCRIPTION_ID")]
    pub subscription: Option<String>,

    /// Resource type as reported by the backend; looked up with `az` when omitted
    #[arg(long = "type")]
    pub resource_type: Option<String>,
}

/// Run the target command.
pub async fn run(app: &AppContext, cmd: TargetCommand) -> Result<()> {
    match cmd {
        TargetCommand::Check(args) => check(app, args).await,
        TargetCommand::Types => app.renderer().render_resource_types(AzureResourceType::ALL),
    }
}

async fn check(app: &AppContext, args: CheckArgs) -> Result<()> {
    let config = config_service::load_config(&app.config_store)?;
    let request = TargetCheckRequest {
        host: args.host,
        subscription_id: args.subscription,
        resource_group: args.resource_group,
        resource_name: args.name,
        resource_type: args.resource_type,
    };

    let reporter = app.reporter();
    let report = match check_target(&app.az, &reporter, &config, request).await {
        Ok(report) => report,
        Err(e) => {
            reporter.fail("Target check failed");
            return Err(e);
        }
    };
    drop(reporter);

    app.renderer().render_target_report(&report)
}
