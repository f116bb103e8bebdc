//! Both binaries run as processes against httpmock and a scripted Firebase CLI.
#![cfg(unix)]

use crate::integration::test_utils::{channel_config, write_file, FakeFirebase};
use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::str::contains;
use serde_json::json;
use tempfile::TempDir;

/// Command for `bin` with settings isolated to `home` and pointed at the fakes.
fn command(bin: &str, home: &TempDir, firebase: &FakeFirebase, server: &MockServer) -> Command {
    let program = match bin {
        "fliff" => assert_cmd::cargo::cargo_bin!("fliff"),
        _ => assert_cmd::cargo::cargo_bin!("richmenu"),
    };
    let mut cmd = Command::new(program);
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("FLIFF_FIREBASE__COMMAND", firebase.command())
        .env("FLIFF_LINE__API_BASE_URL", server.base_url())
        .env("FLIFF_LINE__DATA_API_BASE_URL", server.base_url())
        .env_remove("FLIFF_LOG")
        .arg("--workspace")
        .arg(home.path());
    cmd
}

#[test]
fn test_fliff_get_not_found_succeeds() {
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET)
            .path("/liff/v1/apps")
            .header("authorization", "Bearer token-1");
        then.status(404).json_body(json!({"message": "no LIFF app"}));
    });
    let firebase = FakeFirebase::new(&channel_config());
    let home = TempDir::new().unwrap();

    command("fliff", &home, &firebase, &server)
        .arg("get")
        .assert()
        .success()
        .stdout(contains("no LIFF app"));

    list.assert();
    assert_eq!(firebase.calls(), vec!["functions:config:get"]);
}

#[test]
fn test_fliff_get_with_empty_list_succeeds() {
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET).path("/liff/v1/apps");
        then.status(200).json_body(json!({"apps": []}));
    });
    let firebase = FakeFirebase::new(&channel_config());
    let home = TempDir::new().unwrap();

    command("fliff", &home, &firebase, &server)
        .arg("get")
        .assert()
        .success()
        .stdout(contains("LIFF view not found"));

    list.assert();
    assert!(firebase.writes().is_empty());
}

#[test]
fn test_richmenu_get_with_empty_list_succeeds() {
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET).path("/v2/bot/richmenu/list");
        then.status(200).json_body(json!({"richmenus": []}));
    });
    let firebase = FakeFirebase::new(&channel_config());
    let home = TempDir::new().unwrap();

    command("richmenu", &home, &firebase, &server)
        .arg("get")
        .assert()
        .success()
        .stdout(contains("RichMenu not found"));

    list.assert();
}

#[test]
fn test_richmenu_add_with_missing_image_fails_offline() {
    let server = MockServer::start();
    let any = server.mock(|when, then| {
        when.any_request();
        then.status(500);
    });
    let firebase = FakeFirebase::new(&channel_config());
    let home = TempDir::new().unwrap();
    let data = write_file(home.path(), "menu.json", br#"{"size":{"width":2500,"height":843}}"#);
    let image = home.path().join("missing.png");

    command("richmenu", &home, &firebase, &server)
        .args(["add", "--name", "lunch", "--data"])
        .arg(&data)
        .arg("--image")
        .arg(&image)
        .assert()
        .failure()
        .stderr(contains("Image file must exist"));

    any.assert_calls(0);
    assert!(firebase.calls().is_empty());
}

#[test]
fn test_richmenu_delete_with_unknown_name_sends_no_delete() {
    let server = MockServer::start();
    let delete = server.mock(|when, then| {
        when.method(DELETE);
        then.status(200);
    });
    let firebase = FakeFirebase::new(&channel_config());
    let home = TempDir::new().unwrap();

    command("richmenu", &home, &firebase, &server)
        .args(["delete", "--name", "ghost"])
        .assert()
        .failure()
        .stderr(contains("Failed to retrieve ID using name 'ghost'"));

    delete.assert_calls(0);
    assert!(firebase.writes().is_empty());
}

#[test]
fn test_fliff_token_revoke_leaves_configuration_alone() {
    let server = MockServer::start();
    let revoke = server.mock(|when, then| {
        when.method(POST)
            .path("/v2/oauth/revoke")
            .body("access_token=stale-token");
        then.status(200);
    });
    let firebase = FakeFirebase::new(&channel_config());
    let home = TempDir::new().unwrap();

    command("fliff", &home, &firebase, &server)
        .args(["token", "--revoke", "stale-token"])
        .assert()
        .success()
        .stdout(contains("revoked"));

    revoke.assert();
    assert!(firebase.writes().is_empty());
}

#[test]
fn test_expired_login_prints_reauth_hint() {
    let server = MockServer::start();
    let firebase = FakeFirebase::new(&channel_config());
    firebase.expire_login();
    let home = TempDir::new().unwrap();

    command("fliff", &home, &firebase, &server)
        .arg("get")
        .assert()
        .failure()
        .stderr(contains("firebase login --reauth"));
}

#[test]
fn test_version_needs_no_firebase() {
    let server = MockServer::start();
    let firebase = FakeFirebase::new(&json!({}));
    let home = TempDir::new().unwrap();

    command("richmenu", &home, &firebase, &server)
        .arg("version")
        .assert()
        .success()
        .stdout(contains("richmenu version: "));
    assert!(firebase.calls().is_empty());
}
