//! Render-to-string collaborators.
//!
//! The [`RenderToString`] trait is the seam between component descriptions
//! and their textual form: component description in, markup text out. The
//! built-in [`HtmlRenderer`] covers the fixtures shipped here; harnesses with
//! their own serialization rules can plug in another implementation.

use crate::markup::{escape_into, is_valid_name, is_void, Element, Node};
use crate::{Error, RenderConfig, Result};

/// Core trait for render-to-string implementations.
///
/// Implementations must be pure with respect to the node tree: the same
/// input yields the same output, and rendering has no side effects.
pub trait RenderToString {
    /// Serialize a component description to markup text.
    fn render_to_string(&self, node: &Node) -> Result<String>;
}

/// The default markup serializer.
///
/// Output semantics:
/// - text and attribute values are escaped (`&`, `<`, `>`, `"`, `'`)
/// - void elements self-close (`<br/>`) and reject children
/// - attributes render in insertion order
/// - fragments concatenate their children with no wrapper
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    config: RenderConfig,
}

impl HtmlRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn write_element(&self, out: &mut String, element: &Element, depth: usize) -> Result<()> {
        let tag = element.tag();
        if !is_valid_name(tag) {
            return Err(Error::RenderError(format!("Invalid tag name: {:?}", tag)));
        }

        out.push('<');
        out.push_str(tag);
        for (name, value) in element.attrs() {
            if !is_valid_name(name) {
                return Err(Error::RenderError(format!(
                    "Invalid attribute name {:?} on <{}>",
                    name, tag
                )));
            }
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_into(out, value);
            out.push('"');
        }

        if is_void(tag) {
            if !element.child_nodes().is_empty() {
                return Err(Error::RenderError(format!(
                    "<{}> is a void element and cannot have children",
                    tag
                )));
            }
            out.push_str("/>");
            return Ok(());
        }

        out.push('>');
        for child in element.child_nodes() {
            self.write_node(out, child, depth + 1)?;
        }
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
        Ok(())
    }

    fn write_node(&self, out: &mut String, node: &Node, depth: usize) -> Result<()> {
        if depth > self.config.max_depth {
            return Err(Error::RenderError(format!(
                "Markup nesting exceeds {} levels",
                self.config.max_depth
            )));
        }

        match node {
            Node::Text(content) => {
                escape_into(out, content);
                Ok(())
            }
            Node::Raw(markup) => {
                out.push_str(markup);
                Ok(())
            }
            Node::Fragment(children) => {
                // Fragments add no wrapper but still consume a nesting level,
                // so fragment chains cannot recurse past the guard.
                for child in children {
                    self.write_node(out, child, depth + 1)?;
                }
                Ok(())
            }
            Node::Element(element) => self.write_element(out, element, depth),
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl RenderToString for HtmlRenderer {
    fn render_to_string(&self, node: &Node) -> Result<String> {
        let mut out = String::new();
        if self.config.doctype {
            out.push_str("<!doctype html>");
        }
        self.write_node(&mut out, node, 0)?;
        Ok(out)
    }
}
