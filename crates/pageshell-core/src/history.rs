//! Address bar and history synchronization.
//!
//! The static host answers unknown deep links with the entry document, so a
//! direct load of `/about#team` is bounced to `/?p=%2Fabout%23team`. The
//! second load reads the forced path back, renders it, and replaces the
//! entry with the clean address. Neither step leaves an extra history entry.

use log::{info, warn};

use crate::config::{FORCED_PATH_PARAM, FORCED_PATH_PARAM_ALT, INDEX_DOCUMENT};
use crate::models::{Address, HistoryMode, LogicalPath};
use crate::url::{decode_component, encode_component, query_param};

/// How an address change is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressMode {
    /// `history.pushState`
    Push,
    /// `history.replaceState`
    Replace,
    /// `location.replace`: reloads the document at the new address.
    Redirect,
}

/// Access to the browser's address and history.
pub trait NavigationContext {
    fn current_address(&self) -> Address;
    fn set_address(&self, url: &str, mode: AddressMode);
}

/// What an entry load should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryDecision {
    /// Plain load of the entry document.
    Direct(LogicalPath),
    /// Load carrying the forced-path parameter.
    Forced(LogicalPath),
    /// Deep link delivered through the host fallback; bounce to this URL.
    Redirect(String),
}

/// Decode the forced-path parameter of `address`, if present.
///
/// A value that fails to decode is used as-is.
pub fn forced_path(address: &Address) -> Option<LogicalPath> {
    let raw = query_param(&address.search, FORCED_PATH_PARAM)
        .or_else(|| query_param(&address.search, FORCED_PATH_PARAM_ALT))
        .filter(|value| !value.is_empty())?;

    let decoded = decode_component(raw).unwrap_or_else(|e| {
        warn!("malformed forced path {:?} ({}), using it raw", raw, e);
        raw.to_string()
    });
    Some(LogicalPath::parse(&decoded))
}

/// Decide how to treat the address the document was loaded at.
pub fn inspect_entry(address: &Address) -> EntryDecision {
    if let Some(path) = forced_path(address) {
        return EntryDecision::Forced(path);
    }

    let is_entry = address.pathname == "/" || address.pathname.starts_with(INDEX_DOCUMENT);
    if !is_entry {
        return EntryDecision::Redirect(redirect_url(address));
    }

    let fragment = address.hash.trim_start_matches('#');
    EntryDecision::Direct(LogicalPath::new("/", Some(fragment)))
}

/// Logical path shown by `address`.
///
/// The browser reports the pathname and hash percent-encoded, while logical
/// paths hold the decoded text. Parts that fail to decode are kept as-is.
pub fn address_path(address: &Address) -> LogicalPath {
    let decode = |part: &str| decode_component(part).unwrap_or_else(|_| part.to_string());
    let fragment = decode(address.hash.trim_start_matches('#'));
    LogicalPath::new(&decode(&address.pathname), Some(fragment.as_str()))
}

/// Entry URL carrying `address`'s path and hash in the forced-path parameter.
pub fn redirect_url(address: &Address) -> String {
    format!(
        "/?{}={}",
        FORCED_PATH_PARAM,
        encode_component(&address.path_and_hash())
    )
}

/// Keeps the visible address in step with the rendered path.
pub struct HistorySync<C> {
    context: C,
}

impl<C: NavigationContext> HistorySync<C> {
    pub fn new(context: C) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn current_address(&self) -> Address {
        self.context.current_address()
    }

    /// Forced path of the current address, if any.
    pub fn detect_forced_path(&self) -> Option<LogicalPath> {
        forced_path(&self.context.current_address())
    }

    pub fn inspect_entry(&self) -> EntryDecision {
        inspect_entry(&self.context.current_address())
    }

    /// Reload the document at `url` without leaving a history entry.
    pub fn redirect(&self, url: &str) {
        info!("redirecting deep link to {}", url);
        self.context.set_address(url, AddressMode::Redirect);
    }

    /// Reflect `path` in the address bar.
    ///
    /// A push onto the address already shown becomes a replace, so
    /// activating the current page's link adds no entry.
    pub fn reconcile(&self, path: &LogicalPath, mode: HistoryMode) {
        let url = path.to_url();
        match mode {
            HistoryMode::Keep => {}
            HistoryMode::Replace => self.context.set_address(&url, AddressMode::Replace),
            HistoryMode::Push => {
                let current = self.context.current_address();
                if current.search.is_empty() && address_path(&current) == *path {
                    self.context.set_address(&url, AddressMode::Replace);
                } else {
                    self.context.set_address(&url, AddressMode::Push);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeContext;

    #[test]
    fn test_forced_path_decoding() {
        let path = forced_path(&Address::parse("/?p=%2Fabout%23team")).unwrap();
        assert_eq!(path.path(), "/about");
        assert_eq!(path.fragment(), Some("team"));

        let path = forced_path(&Address::parse("/?path=%2Fdocs%2F")).unwrap();
        assert_eq!(path.to_url(), "/docs");
    }

    #[test]
    fn test_forced_path_absent() {
        assert_eq!(forced_path(&Address::parse("/")), None);
        assert_eq!(forced_path(&Address::parse("/?q=1")), None);
        assert_eq!(forced_path(&Address::parse("/?p=")), None);
    }

    #[test]
    fn test_malformed_forced_path_used_raw() {
        let path = forced_path(&Address::parse("/?p=/100%-done")).unwrap();
        assert_eq!(path.path(), "/100%-done");
    }

    #[test]
    fn test_inspect_entry() {
        assert_eq!(
            inspect_entry(&Address::parse("/about")),
            EntryDecision::Redirect("/?p=%2Fabout".to_string())
        );
        assert_eq!(
            inspect_entry(&Address::parse("/about/team#lead")),
            EntryDecision::Redirect("/?p=%2Fabout%2Fteam%23lead".to_string())
        );
        assert_eq!(
            inspect_entry(&Address::parse("/")),
            EntryDecision::Direct(LogicalPath::root())
        );
        assert_eq!(
            inspect_entry(&Address::parse("/index.html#top")),
            EntryDecision::Direct(LogicalPath::new("/", Some("top")))
        );
        assert_eq!(
            inspect_entry(&Address::parse("/?p=%2Fnews")),
            EntryDecision::Forced(LogicalPath::parse("/news"))
        );
    }

    #[test]
    fn test_reconcile_modes() {
        let history = HistorySync::new(FakeContext::at("/?p=%2Fabout"));

        history.reconcile(&LogicalPath::parse("/about"), HistoryMode::Replace);
        assert_eq!(history.context().entries(), vec!["/about"]);

        history.reconcile(&LogicalPath::parse("/news"), HistoryMode::Push);
        assert_eq!(history.context().entries(), vec!["/about", "/news"]);

        history.reconcile(&LogicalPath::parse("/about"), HistoryMode::Keep);
        assert_eq!(history.context().current_url(), "/news");
    }

    #[test]
    fn test_push_onto_same_address_replaces() {
        let history = HistorySync::new(FakeContext::at("/about"));

        history.reconcile(&LogicalPath::parse("/about"), HistoryMode::Push);
        assert_eq!(history.context().entries(), vec!["/about"]);

        history.reconcile(&LogicalPath::parse("/about#team"), HistoryMode::Push);
        assert_eq!(history.context().entries(), vec!["/about", "/about#team"]);
    }

    #[test]
    fn test_address_path_decodes() {
        let path = address_path(&Address::parse("/caf%C3%A9#r%C3%A9sum%C3%A9"));
        assert_eq!(path.path(), "/café");
        assert_eq!(path.fragment(), Some("résumé"));

        let path = address_path(&Address::parse("/100%-done/"));
        assert_eq!(path, LogicalPath::parse("/100%-done"));
    }

    #[test]
    fn test_push_onto_encoded_address_replaces() {
        let history = HistorySync::new(FakeContext::at("/caf%C3%A9"));

        history.reconcile(&LogicalPath::parse("/café"), HistoryMode::Push);
        assert_eq!(history.context().entries(), vec!["/café"]);

        history.reconcile(&LogicalPath::parse("/menu"), HistoryMode::Push);
        assert_eq!(history.context().entries(), vec!["/café", "/menu"]);
    }

    #[test]
    fn test_redirect_does_not_push() {
        let history = HistorySync::new(FakeContext::at("/about"));
        history.redirect("/?p=%2Fabout");

        assert_eq!(history.context().redirects(), vec!["/?p=%2Fabout"]);
        assert_eq!(history.context().entries(), vec!["/?p=%2Fabout"]);
    }
}
