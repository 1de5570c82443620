#![cfg(feature = "harness")]

//! Integration tests for the async harness

use ssrfixture::fixtures::register_builtin;
use ssrfixture::{FixtureRegistry, Harness};

fn demo_registry() -> FixtureRegistry {
    let mut registry = FixtureRegistry::new();
    register_builtin(&mut registry);
    registry
}

#[tokio::test]
async fn test_invoke_through_harness() {
    let harness = Harness::spawn(demo_registry());

    let html = harness
        .invoke("demo", serde_json::json!({ "content": "Hello world!" }))
        .await
        .expect("Failed to invoke fixture");
    assert_eq!(html, "<div>Hello world!</div>");

    harness.close().await.unwrap();
}

#[tokio::test]
async fn test_invoke_errors_come_back_as_results() {
    let harness = Harness::spawn(demo_registry());

    let err = harness
        .invoke("missing", serde_json::json!({}))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Unknown fixture: missing");

    harness.close().await.unwrap();
}

#[tokio::test]
async fn test_names_lists_registered_fixtures() {
    let harness = Harness::spawn(demo_registry());

    let names = harness.names().await.expect("Failed to list fixtures");
    assert_eq!(names, vec!["demo".to_string()]);

    harness.close().await.unwrap();
}

#[tokio::test]
async fn test_clones_share_the_worker() {
    let harness = Harness::spawn(demo_registry());
    let clone = harness.clone();

    let (a, b) = tokio::join!(
        harness.invoke("demo", serde_json::json!({ "content": "a" })),
        clone.invoke("demo", serde_json::json!({ "content": "b" })),
    );
    assert_eq!(a.unwrap(), "<div>a</div>");
    assert_eq!(b.unwrap(), "<div>b</div>");

    harness.close().await.unwrap();
}

#[tokio::test]
async fn test_invoke_after_close_fails() {
    let harness = Harness::spawn(demo_registry());
    let survivor = harness.clone();
    harness.close().await.expect("Failed to close harness");

    let err = survivor
        .invoke("demo", serde_json::json!({ "content": "late" }))
        .await
        .unwrap_err();
    assert!(
        err.to_string().contains("canceled"),
        "unexpected error: {}",
        err
    );
}
