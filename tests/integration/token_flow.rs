//! Channel token and credential commands through the route table.
#![cfg(unix)]

use crate::integration::test_utils::{channel_config, settings_for, FakeFirebase};
use clap::Parser;
use fliff::cli::{FliffCli, RunContext};
use fliff::error::{ApiError, ValidationError};
use httpmock::prelude::*;
use serde_json::json;

fn run(firebase: &FakeFirebase, server: &MockServer, args: &[&str]) -> Result<String, ApiError> {
    let cli = FliffCli::try_parse_from(args).unwrap();
    let settings = settings_for(&server.base_url(), firebase);
    let context = RunContext::with_store(settings, firebase.store()).unwrap();
    context.execute(&cli.command)
}

fn issue_mock(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(POST)
            .path("/v2/oauth/accessToken")
            .body("grant_type=client_credentials&client_id=1650000000&client_secret=s3cret");
        then.status(200).json_body(json!({
            "access_token": "issued-token",
            "expires_in": 2592000,
            "token_type": "Bearer"
        }));
    })
}

#[test]
fn test_issue_and_save() {
    let server = MockServer::start();
    let mock = issue_mock(&server);
    let firebase = FakeFirebase::new(&channel_config());

    let out = run(&firebase, &server, &["fliff", "token", "--issue", "--save"]).unwrap();

    mock.assert();
    assert!(out.contains("\"access_token\": \"issued-token\""));
    assert!(out.contains("The access token is saved on Firebase Functions Configuration."));
    assert_eq!(
        firebase.writes(),
        vec!["functions:config:set line.access_token=issued-token"]
    );
}

#[test]
fn test_issue_without_save_writes_nothing() {
    let server = MockServer::start();
    issue_mock(&server);
    let firebase = FakeFirebase::new(&channel_config());

    let out = run(&firebase, &server, &["fliff", "token", "--issue"]).unwrap();

    assert!(out.contains("fliff token --issue --save"));
    assert!(firebase.writes().is_empty());
}

#[test]
fn test_issue_requires_channel_secret() {
    let server = MockServer::start();
    let mock = issue_mock(&server);
    let firebase = FakeFirebase::new(&json!({"line": {"channel_id": "1650000000"}}));

    let err = run(&firebase, &server, &["fliff", "token", "--issue"]).unwrap_err();

    assert!(matches!(
        err,
        ApiError::Validation(ValidationError::MissingCredential("channel_secret"))
    ));
    mock.assert_calls(0);
}

#[test]
fn test_revoke_does_not_touch_configuration() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v2/oauth/revoke")
            .body("access_token=old-token");
        then.status(200);
    });
    let firebase = FakeFirebase::new(&channel_config());

    let out = run(&firebase, &server, &["fliff", "token", "--revoke", "old-token"]).unwrap();

    mock.assert();
    assert!(out.contains("The token is revoked."));
    assert!(firebase.calls().is_empty());
}

#[test]
fn test_config_writes_credentials_in_one_call() {
    let server = MockServer::start();
    let firebase = FakeFirebase::new(&json!({}));

    let out = run(
        &firebase,
        &server,
        &["fliff", "config", "--id", "1650000000", "--secret", "s3cret"],
    )
    .unwrap();

    assert!(out.contains("Firebase Functions configured"));
    assert_eq!(
        firebase.writes(),
        vec!["functions:config:set line.channel_id=1650000000 line.channel_secret=s3cret"]
    );
}
