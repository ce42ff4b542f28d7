//! Tests for the target check service with fake discovery and reporter.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use azd_cli::application::services::target_check::{TargetCheckRequest, check_target};
use azd_cli::domain::{AzdConfig, AzureResourceType, ServiceHost, ValidationError};

use crate::helpers::{FixedDiscovery, NoDiscovery, RecordingReporter};

fn request(host: ServiceHost, resource_type: Option<&str>) -> TargetCheckRequest {
    TargetCheckRequest {
        host,
        subscription_id: Some("SUB_ID".to_string()),
        resource_group: "RG_ID".to_string(),
        resource_name: "res".to_string(),
        resource_type: resource_type.map(str::to_string),
    }
}

#[tokio::test]
async fn test_container_app_type_accepted() {
    let reporter = RecordingReporter::default();
    let report = check_target(
        &NoDiscovery,
        &reporter,
        &AzdConfig::default(),
        request(ServiceHost::ContainerApp, Some("Microsoft.App/containerApps")),
    )
    .await
    .expect("valid target");

    assert_eq!(report.host, ServiceHost::ContainerApp);
    assert_eq!(report.type_display_name, "Container App");
    assert!(!report.discovered);
    assert_eq!(
        report.resource_id,
        "/subscriptions/SUB_ID/resourceGroups/RG_ID/providers/Microsoft.App/containerApps/res"
    );
}

#[tokio::test]
async fn test_lowercase_type_accepted_and_preserved() {
    let report = check_target(
        &NoDiscovery,
        &RecordingReporter::default(),
        &AzdConfig::default(),
        request(ServiceHost::ContainerApp, Some("microsoft.app/containerapps")),
    )
    .await
    .expect("lowercase accepted");

    assert_eq!(report.resource.resource_type(), "microsoft.app/containerapps");
}

#[tokio::test]
async fn test_bad_type_returns_validation_error() {
    let reporter = RecordingReporter::default();
    let err = check_target(
        &NoDiscovery,
        &reporter,
        &AzdConfig::default(),
        request(ServiceHost::ContainerApp, Some("BadType")),
    )
    .await
    .expect_err("BadType must fail");

    let validation = err
        .downcast_ref::<ValidationError>()
        .expect("error is a ValidationError");
    assert_eq!(
        validation,
        &ValidationError::ResourceTypeMismatch {
            actual: "BadType".to_string(),
            expected: "Microsoft.App/containerApps".to_string(),
        }
    );
    assert!(
        reporter.events.borrow().iter().all(|e| !e.starts_with("success")),
        "no success reported on failure"
    );
}

#[tokio::test]
async fn test_missing_type_is_discovered() {
    let discovery = FixedDiscovery::new("Microsoft.Web/sites");
    let reporter = RecordingReporter::default();
    let report = check_target(
        &discovery,
        &reporter,
        &AzdConfig::default(),
        request(ServiceHost::Function, None),
    )
    .await
    .expect("site backs a function app");

    assert!(report.discovered);
    assert_eq!(
        discovery.lookups.borrow().as_slice(),
        &[("SUB_ID".to_string(), "RG_ID".to_string(), "res".to_string())]
    );
    let events = reporter.events.borrow();
    assert!(events[0].starts_with("step: Looking up res"), "got: {events:?}");
    assert!(events.last().unwrap().starts_with("success:"), "got: {events:?}");
}

#[tokio::test]
async fn test_discovered_wrong_type_rejected() {
    let discovery = FixedDiscovery::new("Microsoft.Web/sites");
    let err = check_target(
        &discovery,
        &RecordingReporter::default(),
        &AzdConfig::default(),
        request(ServiceHost::StaticWebApp, None),
    )
    .await
    .expect_err("site cannot back a static web app");
    assert!(err.downcast_ref::<ValidationError>().is_some());
}

#[tokio::test]
async fn test_subscription_falls_back_to_config() {
    let mut config = AzdConfig::default();
    config
        .set("defaults.subscription", "CONFIG_SUB")
        .expect("valid setting");
    let mut req = request(ServiceHost::AppService, Some(AzureResourceType::WebSite.as_str()));
    req.subscription_id = None;

    let report = check_target(&NoDiscovery, &RecordingReporter::default(), &config, req)
        .await
        .expect("valid target");
    assert_eq!(report.resource.subscription_id(), "CONFIG_SUB");
}

#[tokio::test]
async fn test_missing_subscription_errors_with_hint() {
    let mut req = request(ServiceHost::AppService, Some("Microsoft.Web/sites"));
    req.subscription_id = None;

    let err = check_target(
        &NoDiscovery,
        &RecordingReporter::default(),
        &AzdConfig::default(),
        req,
    )
    .await
    .expect_err("no subscription anywhere");
    assert!(err.to_string().contains("defaults.subscription"), "got: {err}");
}

#[tokio::test]
async fn test_shared_name_picks_type_matching_host() {
    let discovery = FixedDiscovery::many(&["Microsoft.Insights/components", "Microsoft.Web/sites"]);
    let reporter = RecordingReporter::default();
    let report = check_target(
        &discovery,
        &reporter,
        &AzdConfig::default(),
        request(ServiceHost::AppService, None),
    )
    .await
    .expect("the site sharing the name backs the app service");

    assert_eq!(report.resource.resource_type(), "Microsoft.Web/sites");
    let events = reporter.events.borrow();
    assert!(
        events.iter().any(|e| e.starts_with("warn: 2 resources named 'res'")),
        "got: {events:?}"
    );
}

#[tokio::test]
async fn test_shared_name_without_match_reports_first_type() {
    let discovery = FixedDiscovery::many(&["Microsoft.Insights/components", "Microsoft.KeyVault/vaults"]);
    let err = check_target(
        &discovery,
        &RecordingReporter::default(),
        &AzdConfig::default(),
        request(ServiceHost::ContainerApp, None),
    )
    .await
    .expect_err("no container app shares the name");

    assert_eq!(
        err.downcast_ref::<ValidationError>(),
        Some(&ValidationError::ResourceTypeMismatch {
            actual: "Microsoft.Insights/components".to_string(),
            expected: "Microsoft.App/containerApps".to_string(),
        })
    );
}

#[tokio::test]
async fn test_single_discovered_type_does_not_warn() {
    let reporter = RecordingReporter::default();
    check_target(
        &FixedDiscovery::new("Microsoft.App/containerApps"),
        &reporter,
        &AzdConfig::default(),
        request(ServiceHost::ContainerApp, None),
    )
    .await
    .expect("valid target");
    assert!(reporter.events.borrow().iter().all(|e| !e.starts_with("warn:")));
}

#[tokio::test]
async fn test_blank_identifiers_rejected_before_discovery() {
    let cases = [
        ("subscription", Some(String::new()), "RG_ID", "res"),
        ("resource group", Some("SUB_ID".to_string()), "", "res"),
        ("resource name", Some("SUB_ID".to_string()), "RG_ID", " "),
    ];
    for (field, subscription_id, group, name) in cases {
        let discovery = FixedDiscovery::new("Microsoft.App/containerApps");
        let req = TargetCheckRequest {
            host: ServiceHost::ContainerApp,
            subscription_id,
            resource_group: group.to_string(),
            resource_name: name.to_string(),
            resource_type: None,
        };
        let err = check_target(&discovery, &RecordingReporter::default(), &AzdConfig::default(), req)
            .await
            .expect_err("blank identifier must fail");

        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::EmptyIdentifier { field })
        );
        assert!(discovery.lookups.borrow().is_empty(), "{field}: no lookup");
    }
}

#[tokio::test]
async fn test_blank_subscription_from_flag_does_not_fall_back() {
    let mut config = AzdConfig::default();
    config
        .set("defaults.subscription", "CONFIG_SUB")
        .expect("valid setting");
    let mut req = request(ServiceHost::ContainerApp, Some("Microsoft.App/containerApps"));
    req.subscription_id = Some(String::new());

    let err = check_target(&NoDiscovery, &RecordingReporter::default(), &config, req)
        .await
        .expect_err("explicit empty subscription is rejected");
    assert_eq!(err.to_string(), "subscription must not be empty");
}
