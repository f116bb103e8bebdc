//! Functions configuration store driven through a scripted Firebase CLI.
#![cfg(unix)]

use crate::integration::test_utils::{channel_config, FakeFirebase};
use fliff::error::ConfigStoreError;
use fliff::functions_config::{FunctionsConfig, RICHMENU_GROUP, VIEW_GROUP};
use serde_json::json;

#[tokio::test]
async fn test_load_reads_groups_from_cli_output() {
    let firebase = FakeFirebase::new(&channel_config());
    let record = firebase.store().load().await.unwrap();

    assert!(record.has_group(VIEW_GROUP));
    assert_eq!(
        record.id_by_name(RICHMENU_GROUP, "Main").as_deref(),
        Some("richmenu-111")
    );
    let creds = record.credentials().unwrap();
    assert_eq!(creds.channel_id.as_deref(), Some("1650000000"));
    assert_eq!(firebase.calls(), vec!["functions:config:get"]);
}

#[tokio::test]
async fn test_empty_configuration_has_no_groups() {
    let firebase = FakeFirebase::new(&json!({}));
    let record = firebase.store().load().await.unwrap();
    assert!(!record.has_group("line"));
}

#[tokio::test]
async fn test_expired_login_is_classified() {
    let firebase = FakeFirebase::new(&channel_config());
    firebase.expire_login();

    let err = firebase.store().load().await.unwrap_err();
    assert!(matches!(err, ConfigStoreError::AuthenticationExpired(_)));
    let hint = err.hint().unwrap().join("\n");
    assert!(hint.contains("firebase login --reauth"));
}

#[tokio::test]
async fn test_other_get_failures_point_at_project_setup() {
    let firebase = FakeFirebase::new(&channel_config());
    firebase.forget_project();

    let err = firebase.store().load().await.unwrap_err();
    assert!(matches!(err, ConfigStoreError::UnknownProject(_)));
    assert!(err.hint().unwrap().iter().any(|h| h.contains("firebase use --add")));
}

#[tokio::test]
async fn test_set_many_is_one_invocation_with_project() {
    let firebase = FakeFirebase::new(&json!({}));
    let store = FunctionsConfig::firebase(&firebase.firebase_config(Some("my-bot")));

    let values = store
        .set_many(&[
            ("line.channel_id".to_string(), "1650".to_string()),
            ("line.channel_secret".to_string(), "s".to_string()),
        ])
        .await
        .unwrap();

    assert_eq!(values, vec!["1650", "s"]);
    assert_eq!(
        firebase.writes(),
        vec!["functions:config:set line.channel_id=1650 line.channel_secret=s --project my-bot"]
    );
}

#[tokio::test]
async fn test_unset_all_runs_every_key() {
    let firebase = FakeFirebase::new(&json!({}));
    let store = firebase.store();

    let names = vec!["views.home".to_string(), "views.start".to_string()];
    let unset = store.unset_all(&names).await.unwrap();

    assert_eq!(unset, names);
    let mut writes = firebase.writes();
    writes.sort();
    assert_eq!(
        writes,
        vec![
            "functions:config:unset views.home",
            "functions:config:unset views.start"
        ]
    );
}

#[tokio::test]
async fn test_write_failure_names_the_command() {
    let firebase = FakeFirebase::new(&json!({}));
    firebase.fail_writes();

    let err = firebase.store().set("views.home", "1").await.unwrap_err();
    match err {
        ConfigStoreError::WriteFailed { command, detail } => {
            assert!(command.ends_with("functions:config:set views.home=1"));
            assert!(detail.contains("403"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_program_is_reported() {
    let store = FunctionsConfig::firebase(&fliff::config::FirebaseConfig {
        command: "/nonexistent/firebase-cli".to_string(),
        project: None,
    });
    let err = store.load().await.unwrap_err();
    assert!(matches!(err, ConfigStoreError::CommandUnavailable { .. }));
}

#[tokio::test]
async fn test_lookup_without_cached_record_loads_once() {
    let firebase = FakeFirebase::new(&channel_config());
    let store = firebase.store();

    let names = store
        .get_names_by_id(VIEW_GROUP, "1650000000-aaaa", None)
        .await
        .unwrap();
    assert_eq!(names, vec!["home"]);
    assert_eq!(firebase.calls().len(), 1);
}
