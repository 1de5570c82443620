//! Basic example demonstrating fixture rendering

use ssrfixture::fixtures::register_builtin;
use ssrfixture::{FixtureRegistry, RenderConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("SSR Fixture Host - Render Example\n");

    // Configure the renderer
    let config = RenderConfig::default();
    println!("Creating registry with config:");
    println!("  Doctype: {}", config.doctype);
    println!("  Max depth: {}\n", config.max_depth);

    let mut registry = FixtureRegistry::with_config(config);
    register_builtin(&mut registry);
    println!("Registered fixtures: {:?}\n", registry.names());

    // Render the demo fixture
    let html = registry.invoke("demo", serde_json::json!({ "content": "Hello world!" }))?;
    println!("demo -> {}", html);

    // Markup-significant characters are escaped on the way out
    let html = registry.invoke(
        "demo",
        serde_json::json!({ "content": "Fish & \"Chips\" <deluxe>" }),
    )?;
    println!("escaped -> {}", html);

    Ok(())
}
