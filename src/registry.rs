//! Explicit fixture registration and invocation.
//!
//! The registry is the dependency-injected replacement for publishing render
//! functions under ambient global names: a host hands fixtures to the
//! registry by name, then invokes them with JSON props. After setup the
//! registry is only ever read, so it can be shared or moved onto a worker
//! thread freely.

use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::component::{render_with, Component};
use crate::renderer::{HtmlRenderer, RenderToString};
use crate::{Error, RenderConfig, Result};

type EntryFn = Box<dyn Fn(serde_json::Value) -> Result<String> + Send + Sync>;

/// A named collection of render entry points sharing one renderer.
pub struct FixtureRegistry {
    entries: HashMap<String, EntryFn>,
    renderer: Arc<dyn RenderToString + Send + Sync>,
}

impl FixtureRegistry {
    /// Create a registry backed by the default [`HtmlRenderer`].
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    /// Create a registry backed by an [`HtmlRenderer`] with the given config.
    pub fn with_config(config: RenderConfig) -> Self {
        Self::with_renderer(HtmlRenderer::new(config))
    }

    /// Create a registry backed by a caller-supplied render collaborator.
    pub fn with_renderer<R>(renderer: R) -> Self
    where
        R: RenderToString + Send + Sync + 'static,
    {
        Self {
            entries: HashMap::new(),
            renderer: Arc::new(renderer),
        }
    }

    /// Register a typed component under a name.
    ///
    /// Props arrive as JSON at invocation time and are deserialized before
    /// the component renders. Registering the same name again replaces the
    /// earlier entry.
    pub fn register<C>(&mut self, name: &str, component: C)
    where
        C: Component + Send + Sync + 'static,
        C::Props: DeserializeOwned,
    {
        let renderer = Arc::clone(&self.renderer);
        let fixture = name.to_string();
        self.register_fn(name, move |props| {
            let props: C::Props = serde_json::from_value(props)
                .map_err(|e| Error::PropsError(format!("{}: {}", fixture, e)))?;
            render_with(&component, &props, renderer.as_ref())
        });
    }

    /// Register a raw entry point: JSON props in, markup text out.
    ///
    /// Escape hatch for fixtures that bypass the component seam entirely.
    pub fn register_fn<F>(&mut self, name: &str, entry: F)
    where
        F: Fn(serde_json::Value) -> Result<String> + Send + Sync + 'static,
    {
        log::debug!("registering fixture {:?}", name);
        self.entries.insert(name.to_string(), Box::new(entry));
    }

    /// Invoke a registered fixture with JSON props.
    pub fn invoke(&self, name: &str, props: serde_json::Value) -> Result<String> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| Error::UnknownFixture(name.to_string()))?;
        entry(props)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered fixture names, sorted for deterministic output.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FixtureRegistry {
    fn default() -> Self {
        Self::new()
    }
}
