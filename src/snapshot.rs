//! Snapshot helpers for harness assertions.
//!
//! A [`Snapshot`] wraps rendered markup and answers the questions test
//! harnesses actually ask: what text ended up inside, what does a given
//! element contain, and has the output changed since the golden was taken.

use scraper::{Html, Selector};
use sha2::{Digest, Sha256};

use crate::{Error, Result};

/// Rendered markup captured for inspection.
#[derive(Debug, Clone)]
pub struct Snapshot {
    html: String,
}

impl Snapshot {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// The markup exactly as rendered.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// All text content of the markup, in document order, entities decoded.
    pub fn text(&self) -> String {
        let fragment = Html::parse_fragment(&self.html);
        fragment.root_element().text().collect()
    }

    /// Text content of the first element matching a CSS selector, if any.
    pub fn select_text(&self, selector: &str) -> Result<Option<String>> {
        let selector = Selector::parse(selector)
            .map_err(|e| Error::Other(format!("Invalid selector {:?}: {:?}", selector, e)))?;
        let fragment = Html::parse_fragment(&self.html);
        Ok(fragment
            .select(&selector)
            .next()
            .map(|element| element.text().collect()))
    }

    /// Hex SHA-256 of the markup bytes.
    ///
    /// Equal markup has equal digests, so goldens can be stored
    /// content-addressed instead of as full documents.
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(self.html.as_bytes()))
    }
}
