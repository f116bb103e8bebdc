//! LIFF view commands end to end through the route table, a mocked LINE API and a
//! scripted Firebase CLI.
#![cfg(unix)]

use crate::integration::test_utils::{channel_config, settings_for, FakeFirebase};
use clap::Parser;
use fliff::cli::{map_error, FliffCli, RunContext};
use fliff::error::{ApiError, ValidationError};
use httpmock::prelude::*;
use serde_json::json;

fn run(firebase: &FakeFirebase, server: &MockServer, args: &[&str]) -> Result<String, ApiError> {
    let cli = FliffCli::try_parse_from(args).unwrap();
    let settings = settings_for(&server.base_url(), firebase);
    let context = RunContext::with_store(settings, firebase.store()).unwrap();
    context.execute(&cli.command)
}

#[test]
fn test_add_creates_view_and_saves_name() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/liff/v1/apps")
            .header("authorization", "Bearer token-1")
            .json_body(json!({
                "view": {"type": "compact", "url": "https://example.com/coupon"},
                "description": "Coupon Page",
                "features": {"ble": true}
            }));
        then.status(200).json_body(json!({"liffId": "1650000000-cccc"}));
    });
    let firebase = FakeFirebase::new(&channel_config());

    let out = run(
        &firebase,
        &server,
        &[
            "fliff",
            "add",
            "--name",
            "Coupon Page",
            "--url",
            "https://example.com/coupon",
            "--type",
            "compact",
            "--ble",
        ],
    )
    .unwrap();

    mock.assert();
    assert!(out.contains("Created Coupon Page view with LIFF ID: 1650000000-cccc"));
    assert_eq!(
        firebase.writes(),
        vec!["functions:config:set views.coupon_page=1650000000-cccc"]
    );
}

#[test]
fn test_add_without_line_group_sends_nothing() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.any_request();
        then.status(500);
    });
    let firebase = FakeFirebase::new(&json!({"views": {}}));

    let err = run(
        &firebase,
        &server,
        &["fliff", "add", "--name", "x", "--url", "https://example.com"],
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ApiError::Validation(ValidationError::MissingConfigGroup(_))
    ));
    mock.assert_calls(0);
    assert!(firebase.writes().is_empty());
}

#[test]
fn test_add_persist_failure_lists_recovery_command() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/liff/v1/apps");
        then.status(200).json_body(json!({"liffId": "1650000000-dddd"}));
    });
    let firebase = FakeFirebase::new(&channel_config());
    firebase.fail_writes();

    let err = run(
        &firebase,
        &server,
        &["fliff", "add", "--name", "promo", "--url", "https://example.com/p"],
    )
    .unwrap_err();

    let message = map_error(&err);
    assert!(message.contains("Created promo view with LIFF ID: 1650000000-dddd"));
    assert!(message.contains("Failed to set Functions configuration"));
    assert!(message.contains("functions:config:set views.promo=1650000000-dddd"));
}

#[test]
fn test_update_by_name_puts_view() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/liff/v1/apps/1650000000-aaaa/view")
            .json_body(json!({
                "view": {"type": "full", "url": "https://example.com/v2"}
            }));
        then.status(200);
    });
    let firebase = FakeFirebase::new(&channel_config());

    let out = run(
        &firebase,
        &server,
        &[
            "fliff",
            "update",
            "--name",
            "Home",
            "--url",
            "https://example.com/v2",
            "--type",
            "full",
        ],
    )
    .unwrap();

    mock.assert();
    assert!(out.contains("Updated LIFF ID: 1650000000-aaaa"));
    assert!(firebase.writes().is_empty());
}

#[test]
fn test_delete_by_id_unsets_every_name() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE).path("/liff/v1/apps/1650000000-aaaa");
        then.status(200);
    });
    let mut config = channel_config();
    config["views"]["home_alias"] = json!("1650000000-aaaa");
    let firebase = FakeFirebase::new(&config);

    let out = run(&firebase, &server, &["fliff", "delete", "--id", "1650000000-aaaa"]).unwrap();

    mock.assert();
    assert!(out.contains("Deleted view with LIFF ID: 1650000000-aaaa"));
    let mut writes = firebase.writes();
    writes.sort();
    assert_eq!(
        writes,
        vec![
            "functions:config:unset views.home",
            "functions:config:unset views.home_alias"
        ]
    );
}

#[test]
fn test_delete_of_missing_view_still_cleans_configuration() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/liff/v1/apps/1650000000-aaaa");
        then.status(404).json_body(json!({"message": "The LIFF app not found"}));
    });
    let firebase = FakeFirebase::new(&channel_config());

    let out = run(&firebase, &server, &["fliff", "delete", "--name", "home"]).unwrap();

    assert!(out.contains("The LIFF app not found"));
    assert_eq!(firebase.writes(), vec!["functions:config:unset views.home"]);
}

#[test]
fn test_delete_server_error_is_not_tolerated() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/liff/v1/apps/1650000000-aaaa");
        then.status(500).json_body(json!({"message": "Internal error"}));
    });
    let firebase = FakeFirebase::new(&channel_config());

    let err = run(&firebase, &server, &["fliff", "delete", "--name", "home"]).unwrap_err();

    assert!(matches!(err, ApiError::Transport { status: Some(500), .. }));
    assert!(firebase.writes().is_empty());
}

#[test]
fn test_get_lists_views_with_names() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/liff/v1/apps")
            .header("authorization", "Bearer token-1");
        then.status(200).json_body(json!({
            "apps": [
                {
                    "liffId": "1650000000-aaaa",
                    "view": {"type": "tall", "url": "https://example.com/home"},
                    "description": "home"
                },
                {
                    "liffId": "1650000000-zzzz",
                    "view": {"type": "full", "url": "https://example.com/orphan"}
                }
            ]
        }));
    });
    let firebase = FakeFirebase::new(&channel_config());

    let out = run(&firebase, &server, &["fliff", "get"]).unwrap();
    assert!(out.contains("1650000000-aaaa"));
    assert!(out.contains("https://example.com/orphan"));

    let out = run(&firebase, &server, &["fliff", "get", "--name", "home", "--detail"]).unwrap();
    let apps: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(apps.as_array().unwrap().len(), 1);
    assert_eq!(apps[0]["liffId"], "1650000000-aaaa");
}

#[test]
fn test_get_with_no_views_is_not_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/liff/v1/apps");
        then.status(404).json_body(json!({"message": "no LIFF app"}));
    });
    let firebase = FakeFirebase::new(&channel_config());

    let out = run(&firebase, &server, &["fliff", "get"]).unwrap();
    assert!(out.contains("no LIFF app"));
}
