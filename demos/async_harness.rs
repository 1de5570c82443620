//! Driving fixtures through the async harness

use ssrfixture::fixtures::register_builtin;
use ssrfixture::{FixtureRegistry, Harness};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = FixtureRegistry::new();
    register_builtin(&mut registry);

    // The harness thread takes ownership of the registry
    let harness = Harness::spawn(registry);
    println!("fixtures: {:?}", harness.names().await?);

    let html = harness
        .invoke("demo", serde_json::json!({ "content": "Hello world!" }))
        .await?;
    println!("demo -> {}", html);

    // Handles are cheap to clone and share the same worker
    let clone = harness.clone();
    let html = clone
        .invoke("demo", serde_json::json!({ "content": "from a clone" }))
        .await?;
    println!("clone -> {}", html);

    harness.close().await?;
    Ok(())
}
