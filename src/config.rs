//! Site configuration.
//!
//! Routing conventions (resource names, the forced-path parameter, scroll
//! policy) live in [`pageshell_core::config`]; this module holds what only
//! the browser shell needs.

use log::LevelFilter;

// =============================================================================
// Site Metadata
// =============================================================================

/// Site name shown in the header. Doubles as the default document title.
pub const SITE_NAME: &str = pageshell_core::config::DEFAULT_TITLE;

/// Footer line.
pub const SITE_FOOTER: &str = "Served as static files.";

/// Primary navigation: `(href, label)`.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about", "About"),
    ("/news", "News"),
    ("/contact", "Contact"),
];

// =============================================================================
// Network Configuration
// =============================================================================

/// Prefix joined to resource locations such as `pages/about.html`.
pub const SITE_BASE: &str = "/";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Keep fetched fragments in sessionStorage for the tab session.
pub const PAGE_CACHE_ENABLED: bool = true;

/// Session cache configuration.
pub mod cache {
    /// Key prefix for cached page fragments (followed by the location).
    pub const PAGE_KEY_PREFIX: &str = "page:";
}

// =============================================================================
// Logging
// =============================================================================

/// Most verbose level forwarded to the browser console.
pub const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};
