//! Session cache for fetched page fragments.
//!
//! Uses sessionStorage, so entries live as long as the tab: back/forward
//! and repeat visits skip the network, while a new visit sees fresh
//! content. Only successful fetches are stored. Markup is stored as-is.

use log::debug;

use super::dom;
use crate::config::cache::PAGE_KEY_PREFIX;

fn page_key(location: &str) -> String {
    format!("{}{}", PAGE_KEY_PREFIX, location)
}

/// Cached markup for a fragment location.
pub fn get_page(location: &str) -> Option<String> {
    let storage = dom::session_storage()?;
    storage.get_item(&page_key(location)).ok()?
}

/// Remember the markup of a fragment location.
///
/// A missing or full storage only costs a refetch, so failures are logged
/// and otherwise dropped.
pub fn set_page(location: &str, markup: &str) {
    let Some(storage) = dom::session_storage() else {
        return;
    };
    if storage.set_item(&page_key(location), markup).is_err() {
        debug!("could not cache {}", location);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_key() {
        assert_eq!(page_key("pages/about.html"), "page:pages/about.html");
    }
}
