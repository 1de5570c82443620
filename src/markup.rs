//! Markup node tree: the component description handed to renderers.
//!
//! A [`Node`] is a plain owned tree. Components build nodes; a renderer
//! serializes them. Escaping happens at serialization time, so a `Text` node
//! always stores the raw string exactly as supplied by the caller.

/// A single node in a component description.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An element with a tag name, attributes, and children
    Element(Element),
    /// Character data; escaped when serialized
    Text(String),
    /// Pre-rendered markup inserted verbatim (no escaping)
    Raw(String),
    /// A sequence of nodes serialized without a wrapper element
    Fragment(Vec<Node>),
}

impl Node {
    /// Create a text node. The content is stored raw and escaped on render.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Create a raw markup node that bypasses escaping.
    ///
    /// The caller is responsible for the well-formedness of the content;
    /// this is the counterpart of injecting pre-rendered HTML.
    pub fn raw(markup: impl Into<String>) -> Self {
        Node::Raw(markup.into())
    }

    /// Group nodes without introducing a wrapper element.
    pub fn fragment(children: Vec<Node>) -> Self {
        Node::Fragment(children)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(content: &str) -> Self {
        Node::text(content)
    }
}

impl From<String> for Node {
    fn from(content: String) -> Self {
        Node::Text(content)
    }
}

/// An element node under construction or inspection.
///
/// Built in fluent style:
///
/// ```
/// use ssrfixture::{Element, Node};
///
/// let node: Node = Element::new("div")
///     .attr("class", "greeting")
///     .child("hello")
///     .into();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute. Attributes render in insertion order; setting the
    /// same name again replaces the earlier value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.attrs.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.attrs.push((name, value));
        }
        self
    }

    /// Append a child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append every node from an iterator as children.
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Convenience for appending a text child.
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::text(content))
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }
}

/// Escape character data for embedding in markup.
///
/// The table matches what the fixture's upstream renderer emits for text and
/// attribute values: `&`, `<`, `>`, `"`, and `'` become entities, everything
/// else passes through untouched.
pub(crate) fn escape_into(out: &mut String, content: &str) {
    for ch in content.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
}

/// Elements that never take children and self-close when serialized.
pub(crate) fn is_void(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Tag and attribute names: ASCII letter first, then letters, digits,
/// hyphens, or underscores. Anything else would produce broken markup.
pub(crate) fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
