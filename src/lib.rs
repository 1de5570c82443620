//! SSR Fixture Host
//!
//! A small server-side-rendering fixture host for Rust: components render to
//! a markup tree, the tree renders to an HTML string, and fixtures are
//! published to test harnesses through an explicit registry instead of
//! ambient globals.
//!
//! # Features
//!
//! - **Explicit registration**: fixtures are plain functions and components
//!   registered by name; nothing is installed into process-wide state
//! - **Harness surfaces**: an in-process async [`Harness`], a line-oriented
//!   JSON worker protocol, and a CLI, all driving the same registry
//! - **Testable output**: rendering is pure, so equal props always produce
//!   equal markup
//!
//! # Example
//!
//! ```
//! use ssrfixture::fixtures::register_builtin;
//! use ssrfixture::FixtureRegistry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut registry = FixtureRegistry::new();
//! register_builtin(&mut registry);
//!
//! let html = registry.invoke("demo", serde_json::json!({ "content": "hello" }))?;
//! assert_eq!(html, "<div>hello</div>");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod markup;
pub use markup::{Element, Node};

pub mod renderer;
pub use renderer::{HtmlRenderer, RenderToString};

pub mod component;
pub use component::{render_with, Component};

pub mod fixtures;
pub use fixtures::{render_demo, DemoComponent, DemoProps, DEMO_FIXTURE};

pub mod registry;
pub use registry::FixtureRegistry;

// Line-oriented JSON protocol for out-of-process harnesses
pub mod worker;
pub use worker::{run_worker, Job, Reply};

// Markup inspection helpers for tests (fragment parsing + digests)
#[cfg(feature = "snapshot")]
pub mod snapshot;
#[cfg(feature = "snapshot")]
pub use snapshot::Snapshot;

// Async-friendly fixture host (simple worker-backed abstraction)
#[cfg(feature = "harness")]
pub mod harness;

// Re-export the Harness type at the crate root for ergonomic examples
#[cfg(feature = "harness")]
pub use harness::Harness;

/// Configuration for string rendering
///
/// The defaults produce bare fragments, which is what fixture assertions
/// compare against. Enable `doctype` when the output should stand alone as a
/// document.
///
/// # Examples
///
/// ```
/// let cfg = ssrfixture::RenderConfig::default();
/// assert!(!cfg.doctype);
/// ```
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Prefix output with `<!doctype html>`
    pub doctype: bool,
    /// Maximum tree depth before rendering fails
    pub max_depth: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            doctype: false,
            max_depth: 1024,
        }
    }
}

/// Create a renderer with the default backend
pub fn new_renderer(config: RenderConfig) -> impl RenderToString {
    HtmlRenderer::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert!(!config.doctype);
        assert_eq!(config.max_depth, 1024);
    }

    #[test]
    fn test_factory_renders_demo_markup() {
        let renderer = new_renderer(RenderConfig::default());
        let props = DemoProps {
            content: "hello".to_string(),
        };
        let html = render_with(&DemoComponent, &props, &renderer).unwrap();
        assert_eq!(html, "<div>hello</div>");
    }
}
