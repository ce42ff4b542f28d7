//! Tests for `AzCli` resource discovery over a canned `CommandRunner`.

#![allow(clippy::expect_used)]

use azd_cli::application::ports::ResourceDiscovery;
use azd_cli::infra::AzCli;

use crate::helpers::{CannedRunner, MissingProgramRunner, err_output, ok_output};

#[tokio::test]
async fn test_resource_type_reads_tsv_output() {
    let az = AzCli::new(CannedRunner::new(ok_output(b"Microsoft.App/containerApps\n")));
    let t = az
        .resource_types("SUB_ID", "RG_ID", "res")
        .await
        .expect("lookup succeeds");
    assert_eq!(t, vec!["Microsoft.App/containerApps".to_string()]);
}

#[tokio::test]
async fn test_resource_type_keeps_backend_casing() {
    let az = AzCli::new(CannedRunner::new(ok_output(b"microsoft.app/containerapps\r\n")));
    let t = az.resource_types("s", "g", "n").await.expect("lookup succeeds");
    assert_eq!(t, vec!["microsoft.app/containerapps".to_string()]);
}

#[tokio::test]
async fn test_resource_type_passes_expected_args() {
    let runner = CannedRunner::new(ok_output(b"Microsoft.Web/sites\n"));
    let calls = runner.calls.clone();
    let az = AzCli::new(runner);
    az.resource_types("SUB_ID", "RG_ID", "res")
        .await
        .expect("lookup succeeds");

    let calls = calls.borrow();
    assert_eq!(calls.len(), 1);
    let (program, args) = &calls[0];
    assert_eq!(program, "az");
    assert_eq!(
        args,
        &[
            "resource",
            "list",
            "--subscription",
            "SUB_ID",
            "--resource-group",
            "RG_ID",
            "--name",
            "res",
            "--query",
            "[].type",
            "--output",
            "tsv",
        ]
    );
}

#[tokio::test]
async fn test_resource_types_lists_every_resource_with_the_name() {
    let az = AzCli::new(CannedRunner::new(ok_output(
        b"Microsoft.Insights/components\nMicrosoft.Web/sites\n",
    )));
    let types = az
        .resource_types("SUB_ID", "RG_ID", "api")
        .await
        .expect("lookup succeeds");
    assert_eq!(
        types,
        vec![
            "Microsoft.Insights/components".to_string(),
            "Microsoft.Web/sites".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_resource_type_empty_output_is_not_found() {
    let az = AzCli::new(CannedRunner::new(ok_output(b"\n")));
    let err = az
        .resource_types("SUB_ID", "RG_ID", "res")
        .await
        .expect_err("empty output");
    assert!(err.to_string().contains("not found"), "got: {err}");
}

#[tokio::test]
async fn test_resource_type_nonzero_exit_includes_stderr() {
    let az = AzCli::new(CannedRunner::new(err_output(
        1,
        b"ERROR: Please run 'az login' to setup account.\n",
    )));
    let err = az
        .resource_types("SUB_ID", "RG_ID", "res")
        .await
        .expect_err("az failed");
    let msg = err.to_string();
    assert!(msg.contains("az resource list failed"), "got: {msg}");
    assert!(msg.contains("az login"), "got: {msg}");
}

#[tokio::test]
async fn test_resource_type_missing_az_mentions_install() {
    let az = AzCli::new(MissingProgramRunner);
    let err = az
        .resource_types("SUB_ID", "RG_ID", "res")
        .await
        .expect_err("spawn failed");
    assert!(format!("{err:#}").contains("Azure CLI"), "got: {err:#}");
}
