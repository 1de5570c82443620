//! The component seam: typed props in, a markup description out.

use crate::markup::Node;
use crate::renderer::RenderToString;
use crate::Result;

/// A server-renderable component.
///
/// A component is a pure function from a props record to a markup node tree.
/// It performs no I/O and holds no state of its own; per-call data travels
/// through `Props`, which is constructed by the caller, read once, and
/// discarded.
pub trait Component {
    /// The input data record supplied to this component.
    type Props;

    /// Build the component description for the given props.
    fn render(&self, props: &Self::Props) -> Node;
}

/// Render a component through a render-to-string collaborator.
///
/// This is the pass-through entry point: construct the description, hand it
/// to the renderer, return the text. Renderer failures propagate unmodified.
pub fn render_with<C, R>(component: &C, props: &C::Props, renderer: &R) -> Result<String>
where
    C: Component,
    R: RenderToString + ?Sized,
{
    renderer.render_to_string(&component.render(props))
}
