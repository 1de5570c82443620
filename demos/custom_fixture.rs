//! Registering a custom component as a fixture

use serde::{Deserialize, Serialize};
use ssrfixture::{Component, Element, FixtureRegistry, Node};

#[derive(Debug, Serialize, Deserialize)]
struct GreetingProps {
    name: String,
    excited: bool,
}

struct Greeting;

impl Component for Greeting {
    type Props = GreetingProps;

    fn render(&self, props: &Self::Props) -> Node {
        let punct = if props.excited { "!" } else { "." };
        Element::new("p")
            .attr("class", "greeting")
            .text(format!("Hello, {}{}", props.name, punct))
            .into()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = FixtureRegistry::new();
    registry.register("greeting", Greeting);

    let html = registry.invoke(
        "greeting",
        serde_json::json!({ "name": "Ada", "excited": true }),
    )?;
    println!("{}", html);

    let html = registry.invoke(
        "greeting",
        serde_json::json!({ "name": "Grace", "excited": false }),
    )?;
    println!("{}", html);

    Ok(())
}
