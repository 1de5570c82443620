//! Integration tests for the line-oriented worker protocol
//!
//! Drives `run_worker` the way an external peer would: compose job lines,
//! feed them through an in-memory pipe, and parse the reply lines back.

use ssrfixture::fixtures::register_builtin;
use ssrfixture::{run_worker, FixtureRegistry, Reply};

fn serve_lines(lines: &[serde_json::Value]) -> Vec<String> {
    let mut registry = FixtureRegistry::new();
    register_builtin(&mut registry);

    let input = lines
        .iter()
        .map(|job| job.to_string())
        .collect::<Vec<_>>()
        .join("\n");

    let mut output = Vec::new();
    run_worker(&registry, input.as_bytes(), &mut output).expect("Failed to run worker");

    String::from_utf8(output)
        .expect("worker output is not UTF-8")
        .lines()
        .map(|line| line.to_string())
        .collect()
}

#[test]
fn test_protocol_round_trip() {
    let lines = serve_lines(&[
        serde_json::json!({ "id": 1, "fixture": "demo", "props": { "content": "first" } }),
        serde_json::json!({ "id": 2, "fixture": "demo", "props": { "content": "second" } }),
        serde_json::json!({ "id": 3, "fixture": "demo", "props": { "content": "third" } }),
    ]);
    assert_eq!(lines.len(), 3);

    let replies: Vec<Reply> = lines
        .iter()
        .map(|line| serde_json::from_str(line).expect("reply line is not valid JSON"))
        .collect();

    assert_eq!(replies[0].id, 1);
    assert_eq!(replies[0].value, "<div>first</div>");
    assert_eq!(replies[1].id, 2);
    assert_eq!(replies[1].value, "<div>second</div>");
    assert_eq!(replies[2].id, 3);
    assert_eq!(replies[2].value, "<div>third</div>");
    assert!(replies.iter().all(|r| !r.is_error));
}

#[test]
fn test_error_replies_keep_the_stream_alive() {
    let lines = serve_lines(&[
        serde_json::json!({ "id": 10, "fixture": "missing", "props": {} }),
        serde_json::json!({ "id": 11, "fixture": "demo", "props": { "content": "still here" } }),
    ]);
    assert_eq!(lines.len(), 2);

    let first: Reply = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(first.id, 10);
    assert!(first.is_error);
    assert_eq!(first.value, "Unknown fixture: missing");

    let second: Reply = serde_json::from_str(&lines[1]).unwrap();
    assert_eq!(second.id, 11);
    assert!(!second.is_error);
    assert_eq!(second.value, "<div>still here</div>");
}

#[test]
fn test_each_reply_is_one_json_object_per_line() {
    let lines = serve_lines(&[
        serde_json::json!({ "id": 1, "fixture": "demo", "props": { "content": "a" } }),
        serde_json::json!({ "id": 2, "fixture": "nope", "props": {} }),
    ]);
    assert_eq!(lines.len(), 2);

    for line in &lines {
        let value: serde_json::Value =
            serde_json::from_str(line).expect("reply line is not valid JSON");
        let obj = value.as_object().expect("reply is not a JSON object");
        assert!(obj.contains_key("id"));
        assert!(obj.contains_key("value"));
        assert!(obj.contains_key("is_error"));
    }
}

#[test]
fn test_unknown_prop_fields_are_ignored() {
    let lines = serve_lines(&[serde_json::json!({
        "id": 5,
        "fixture": "demo",
        "props": { "content": "x", "mode": "loose", "retries": 3 }
    })]);

    let reply: Reply = serde_json::from_str(&lines[0]).unwrap();
    assert!(!reply.is_error);
    assert_eq!(reply.value, "<div>x</div>");
}
