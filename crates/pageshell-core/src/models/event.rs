//! Browser navigation inputs, expressed as plain values.

/// Snapshot of the visible address.
///
/// Mirrors `window.location`: `search` keeps its leading `?` and `hash` its
/// leading `#` when non-empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Address {
    pub pathname: String,
    pub search: String,
    pub hash: String,
}

impl Address {
    /// Split a same-origin URL such as `/about?x=1#team`.
    pub fn parse(url: &str) -> Self {
        let (rest, hash) = match url.find('#') {
            Some(i) => (&url[..i], &url[i..]),
            None => (url, ""),
        };
        let (pathname, search) = match rest.find('?') {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (rest, ""),
        };
        Self {
            pathname: if pathname.is_empty() { "/" } else { pathname }.to_string(),
            search: search.to_string(),
            hash: hash.to_string(),
        }
    }

    /// Path and hash without the query string.
    pub fn path_and_hash(&self) -> String {
        format!("{}{}", self.pathname, self.hash)
    }

    /// Full same-origin URL.
    pub fn to_url(&self) -> String {
        format!("{}{}{}", self.pathname, self.search, self.hash)
    }
}

/// An activated anchor, as seen by the click listener.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkActivation {
    /// Raw `href` attribute (not the resolved URL).
    pub href: String,
    /// `target` attribute, if any.
    pub target: Option<String>,
    /// Whether the anchor carries a `download` attribute.
    pub download: bool,
    /// Mouse button (`0` = primary).
    pub button: i16,
    /// Ctrl, Meta, Shift or Alt held.
    pub modified: bool,
}

impl LinkActivation {
    /// Plain primary-button click on `href`.
    pub fn click(href: &str) -> Self {
        Self {
            href: href.to_string(),
            ..Self::default()
        }
    }
}

/// Navigation events dispatched into [`crate::Navigator::handle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// Document loaded (possibly through the host's index fallback).
    InitialLoad,
    /// An anchor was activated.
    LinkActivated(LinkActivation),
    /// Back/forward moved to an existing history entry.
    HistoryPopped,
    /// Only the fragment of the address changed.
    FragmentChanged,
}
