//! Resolved content and the render notification payload.

use serde::Serialize;

/// Markup produced by the resolver for one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedContent {
    pub markup: String,
    /// Location the markup came from; `None` for the inline fallback.
    pub source: Option<String>,
    /// `false` both for the not-found page and the inline fallback.
    pub found: bool,
}

impl ResolvedContent {
    pub fn found(markup: String, source: &str) -> Self {
        Self {
            markup,
            source: Some(source.to_string()),
            found: true,
        }
    }

    pub fn not_found(markup: String, source: Option<&str>) -> Self {
        Self {
            markup,
            source: source.map(String::from),
            found: false,
        }
    }
}

/// Detail carried by the "page rendered" notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageRendered {
    pub path: String,
}
