//! Routing configuration.
//!
//! Centralizes the naming conventions shared by the engine and the web shell.

// =============================================================================
// Content Resources
// =============================================================================

/// Directory holding the content fragments (relative to the site root).
pub const PAGES_DIR: &str = "pages";

/// Slug reserved for the root path.
pub const HOME_SLUG: &str = "home";

/// Fragment served when no candidate exists.
pub const NOT_FOUND_PAGE: &str = "pages/404.html";

// =============================================================================
// Forced-Path Redirect
// =============================================================================

/// Query parameter carrying the real path through the host's index fallback.
pub const FORCED_PATH_PARAM: &str = "p";

/// Longer spelling of [`FORCED_PATH_PARAM`], also accepted on entry.
pub const FORCED_PATH_PARAM_ALT: &str = "path";

/// Entry document name. Pathnames starting with it count as a root load.
pub const INDEX_DOCUMENT: &str = "/index.html";

// =============================================================================
// Rendering
// =============================================================================

/// Document title used when a fragment carries no title metadata.
pub const DEFAULT_TITLE: &str = "pageshell";

/// `name` of the `<meta>` element whose `content` is the page title.
pub const TITLE_META_NAME: &str = "title";

/// Markup shown in the content area while a fragment is being resolved.
pub const LOADING_MARKUP: &str = r#"<p class="loading" aria-busy="true">Loading…</p>"#;

/// Name of the DOM event emitted after each completed render.
pub const PAGE_RENDERED_EVENT: &str = "pageRendered";

/// Scroll retry policy for fragment targets that appear after injection.
pub mod scroll {
    /// Maximum number of retries after the first missed attempt.
    pub const RETRY_ATTEMPTS: u32 = 20;
    /// Delay between retries in milliseconds.
    pub const RETRY_INTERVAL_MS: u32 = 100;
}
