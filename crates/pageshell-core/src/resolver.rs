//! Content resolution: logical path to markup.
//!
//! Candidates are tried in a fixed order and the first one that fetches
//! wins. Every fetch error means "not here". When nothing matches, the
//! not-found fragment is used, and when that is missing too an inline
//! message is built, so resolution itself never fails.

use log::{debug, warn};

use crate::config::{NOT_FOUND_PAGE, PAGES_DIR};
use crate::error::FetchError;
use crate::models::{LogicalPath, ResolvedContent};

/// Source of content fragments, addressed by site-relative location.
#[allow(async_fn_in_trait)]
pub trait ContentFetcher {
    /// Fetch the body of `location` (e.g. `pages/about.html`).
    async fn fetch_text(&self, location: &str) -> Result<String, FetchError>;
}

/// Resolves logical paths against the `pages/` naming convention.
pub struct ContentResolver<F> {
    fetcher: F,
}

impl<F: ContentFetcher> ContentResolver<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Candidate locations for `path`, in resolution order.
    ///
    /// 1. `pages/<slug>.html`
    /// 2. `pages/<slug>/index.html`
    /// 3. `pages<path>.html`
    ///
    /// The third form only differs from the first for root, where it would
    /// name `pages/.html`, so root stops after the slug-based forms and
    /// duplicates are dropped.
    pub fn candidates(path: &LogicalPath) -> Vec<String> {
        let slug = path.slug();
        let mut candidates = vec![
            format!("{}/{}.html", PAGES_DIR, slug),
            format!("{}/{}/index.html", PAGES_DIR, slug),
        ];

        if !path.is_root() {
            let literal = format!("{}{}.html", PAGES_DIR, path.path());
            if !candidates.contains(&literal) {
                candidates.push(literal);
            }
        }

        candidates
    }

    /// Resolve `path` to markup. Never fails.
    pub async fn resolve(&self, path: &LogicalPath) -> ResolvedContent {
        for candidate in Self::candidates(path) {
            match self.fetcher.fetch_text(&candidate).await {
                Ok(markup) => {
                    debug!("resolved {} from {}", path.path(), candidate);
                    return ResolvedContent::found(markup, &candidate);
                }
                Err(e) => debug!("candidate {} unavailable: {}", candidate, e),
            }
        }

        match self.fetcher.fetch_text(NOT_FOUND_PAGE).await {
            Ok(markup) => ResolvedContent::not_found(markup, Some(NOT_FOUND_PAGE)),
            Err(e) => {
                warn!(
                    "no content for {} and {} unavailable ({}), using inline message",
                    path.path(),
                    NOT_FOUND_PAGE,
                    e
                );
                ResolvedContent::not_found(inline_not_found(path.slug()), None)
            }
        }
    }
}

/// Minimal not-found markup naming the requested slug.
pub fn inline_not_found(slug: &str) -> String {
    format!(
        r#"<section class="not-found"><h1>404</h1><p>Page <code>{}</code> not found.</p></section>"#,
        ammonia::clean_text(slug)
    )
}
