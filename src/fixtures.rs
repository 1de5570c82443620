//! Built-in fixtures.
//!
//! The demo fixture is the canonical round-trip: a one-field props record,
//! a component wrapping the content in a `<div>`, and a render entry point
//! an external harness can call. It is registered in the default registry
//! under the well-known name [`DEMO_FIXTURE`]; harnesses that cannot link
//! against this crate reach it by that name over the worker protocol
//! instead of looking up an ambient global.

use serde::{Deserialize, Serialize};

use crate::component::{render_with, Component};
use crate::markup::{Element, Node};
use crate::registry::FixtureRegistry;
use crate::renderer::HtmlRenderer;
use crate::Result;

/// Well-known registry name of the demo fixture.
pub const DEMO_FIXTURE: &str = "demo";

/// Props for [`DemoComponent`]: one required text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoProps {
    /// Text placed inside the container element.
    pub content: String,
}

/// A static component that wraps its content in a container element.
pub struct DemoComponent;

impl Component for DemoComponent {
    type Props = DemoProps;

    fn render(&self, props: &DemoProps) -> Node {
        Element::new("div").text(&props.content).into()
    }
}

/// Render the demo component to markup with the default renderer.
///
/// Pure pass-through: `{content: "hello"}` yields `<div>hello</div>`, and
/// calling twice with the same props yields identical output.
pub fn render_demo(props: &DemoProps) -> Result<String> {
    let renderer = HtmlRenderer::default();
    render_with(&DemoComponent, props, &renderer)
}

/// Register the built-in fixtures on a registry.
pub fn register_builtin(registry: &mut FixtureRegistry) {
    registry.register(DEMO_FIXTURE, DemoComponent);
}
