//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use log::warn;
use pageshell_core::config::PAGE_RENDERED_EVENT;
use pageshell_core::url::decode_component;
use pageshell_core::{Address, AddressMode, LogicalPath, NavigationContext, PageRendered};
use wasm_bindgen::JsValue;
use web_sys::{
    CustomEvent, CustomEventInit, Document, ScrollBehavior, ScrollIntoViewOptions, Storage, Window,
};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document object.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

pub fn set_title(title: &str) {
    if let Some(document) = document() {
        document.set_title(title);
    }
}

/// Smoothly scroll the element with the given id into view.
///
/// Fragments arrive percent-encoded from `location.hash`, so the decoded
/// form is tried when the raw id does not match.
///
/// Returns `true` if the element was found.
pub fn scroll_into_view(fragment: &str) -> bool {
    let Some(document) = document() else {
        return false;
    };

    let element = document.get_element_by_id(fragment).or_else(|| {
        decode_component(fragment)
            .ok()
            .and_then(|id| document.get_element_by_id(&id))
    });

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}

/// Dispatch the "page rendered" event on `document`.
///
/// `event.detail.path` carries the rendered logical path.
pub fn dispatch_page_rendered(path: &LogicalPath) {
    let Some(document) = document() else {
        return;
    };

    let detail = PageRendered {
        path: path.path().to_string(),
    };
    let detail = serde_wasm_bindgen::to_value(&detail).unwrap_or(JsValue::NULL);

    let init = CustomEventInit::new();
    init.set_detail(&detail);
    match CustomEvent::new_with_event_init_dict(PAGE_RENDERED_EVENT, &init) {
        Ok(event) => {
            let _ = document.dispatch_event(&event);
        }
        Err(e) => warn!("failed to create {} event: {:?}", PAGE_RENDERED_EVENT, e),
    }
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Address bar and session history of the current window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserContext;

impl NavigationContext for BrowserContext {
    fn current_address(&self) -> Address {
        let Some(window) = window() else {
            return Address::parse("/");
        };
        let location = window.location();
        Address {
            pathname: location.pathname().unwrap_or_else(|_| "/".to_string()),
            search: location.search().unwrap_or_default(),
            hash: location.hash().unwrap_or_default(),
        }
    }

    fn set_address(&self, url: &str, mode: AddressMode) {
        let Some(window) = window() else {
            return;
        };

        let result = match mode {
            AddressMode::Redirect => window.location().replace(url),
            AddressMode::Push => window
                .history()
                .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(url))),
            AddressMode::Replace => window
                .history()
                .and_then(|h| h.replace_state_with_url(&JsValue::NULL, "", Some(url))),
        };

        if let Err(e) = result {
            warn!("failed to set address {} ({:?}): {:?}", url, mode, e);
        }
    }
}
