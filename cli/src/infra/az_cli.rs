//! `az` CLI client — implements `ResourceDiscovery` on top of a `CommandRunner`.

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, ResourceDiscovery};

/// Name of the Azure CLI executable.
pub const AZ_PROGRAM: &str = "az";

/// Thin wrapper over the Azure CLI.
///
/// Generic over the runner so tests can substitute canned process output.
pub struct AzCli<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> AzCli<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Arguments listing the types of every resource with the given name.
    #[must_use]
    pub fn resource_type_args<'a>(
        subscription_id: &'a str,
        resource_group: &'a str,
        resource_name: &'a str,
    ) -> [&'a str; 12] {
        [
            "resource",
            "list",
            "--subscription",
            subscription_id,
            "--resource-group",
            resource_group,
            "--name",
            resource_name,
            "--query",
            "[].type",
            "--output",
            "tsv",
        ]
    }
}

impl<R: CommandRunner> ResourceDiscovery for AzCli<R> {
    async fn resource_types(
        &self,
        subscription_id: &str,
        resource_group: &str,
        resource_name: &str,
    ) -> Result<Vec<String>> {
        let args = Self::resource_type_args(subscription_id, resource_group, resource_name);
        let output = self
            .runner
            .run(AZ_PROGRAM, &args)
            .await
            .context("failed to run az. Is the Azure CLI installed?")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("az resource list failed: {}", stderr.trim());
        }

        // one type per tsv line (`lines` drops `\r\n`); each type is kept as-is
        let stdout = String::from_utf8_lossy(&output.stdout);
        let types: Vec<String> = stdout
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        if types.is_empty() {
            anyhow::bail!(
                "resource '{resource_name}' not found in resource group '{resource_group}'"
            );
        }
        Ok(types)
    }
}
