//! Logical paths and navigation requests.

use std::fmt;

use crate::config::HOME_SLUG;

/// A normalized site path plus an optional fragment identifier.
///
/// The path always starts with `/` and never ends with one, except for the
/// root itself. The fragment is kept apart because it only drives
/// scrolling, never resource resolution.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LogicalPath {
    path: String,
    fragment: Option<String>,
}

impl LogicalPath {
    /// The site root (`/`) without fragment.
    pub fn root() -> Self {
        Self {
            path: "/".to_string(),
            fragment: None,
        }
    }

    /// Canonicalize a path string.
    ///
    /// Empty input maps to `/`, trailing slashes are stripped (except for
    /// root) and a missing leading slash is added. Idempotent.
    pub fn normalize(path: &str) -> String {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            "/".to_string()
        } else if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{}", trimmed)
        }
    }

    /// Build from a path and fragment, normalizing the path.
    ///
    /// An empty fragment counts as none.
    pub fn new(path: &str, fragment: Option<&str>) -> Self {
        Self {
            path: Self::normalize(path),
            fragment: fragment.filter(|f| !f.is_empty()).map(String::from),
        }
    }

    /// Parse an href-like string such as `/docs/intro/?x=1#setup`.
    ///
    /// The query string is dropped; it plays no part in resolution.
    pub fn parse(href: &str) -> Self {
        let (rest, fragment) = match href.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (href, None),
        };
        let path = rest.split_once('?').map_or(rest, |(path, _)| path);
        Self::new(path, fragment)
    }

    /// Normalized path without fragment.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Fragment identifier without the leading `#`.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.path == "/"
    }

    /// Same page, regardless of fragment.
    pub fn same_page(&self, other: &LogicalPath) -> bool {
        self.path == other.path
    }

    /// Resource slug: `home` for root, otherwise the path without its
    /// leading slash.
    pub fn slug(&self) -> &str {
        if self.is_root() {
            HOME_SLUG
        } else {
            &self.path[1..]
        }
    }

    /// Address-bar form: path plus `#fragment` when present.
    pub fn to_url(&self) -> String {
        match &self.fragment {
            Some(fragment) => format!("{}#{}", self.path, fragment),
            None => self.path.clone(),
        }
    }
}

impl Default for LogicalPath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for LogicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url())
    }
}

/// What triggered a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOrigin {
    InitialLoad,
    LinkClick,
    HistoryPop,
}

/// How a render updates browser history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryMode {
    /// Append a new entry (user navigation).
    Push,
    /// Overwrite the current entry (initial and redirected loads).
    Replace,
    /// Leave history alone; the entry already exists (back/forward).
    Keep,
}

/// One navigation, consumed by a single render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    pub path: LogicalPath,
    pub origin: NavOrigin,
    pub history: HistoryMode,
}

impl NavigationRequest {
    pub fn initial(path: LogicalPath) -> Self {
        Self {
            path,
            origin: NavOrigin::InitialLoad,
            history: HistoryMode::Replace,
        }
    }

    pub fn link(path: LogicalPath) -> Self {
        Self {
            path,
            origin: NavOrigin::LinkClick,
            history: HistoryMode::Push,
        }
    }

    pub fn pop(path: LogicalPath) -> Self {
        Self {
            path,
            origin: NavOrigin::HistoryPop,
            history: HistoryMode::Keep,
        }
    }
}

/// Whether a navigation link points at the current page.
///
/// Only internal hrefs (starting with `/`) can be current; fragments and
/// query strings are ignored, trailing slashes are normalized away.
pub fn is_current_link(href: &str, current: &LogicalPath) -> bool {
    href.starts_with('/') && !href.starts_with("//") && LogicalPath::parse(href).same_page(current)
}
