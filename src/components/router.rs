//! Application router component.
//!
//! Connects the navigation engine to the browser.
//!
//! # Architecture
//!
//! - **Shell never re-renders on navigation**: header, nav and footer stay
//!   mounted; only the content area's markup changes
//! - **One entry point**: clicks, `popstate` and `hashchange` become
//!   [`NavEvent`]s handled by a shared [`Navigator`]
//! - **Deep links**: the initial load goes through the forced-path redirect
//!   before anything is fetched

use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use pageshell_core::{LogicalPath, NavEvent, Navigator};
#[cfg(target_arch = "wasm32")]
use pageshell_core::{LinkActivation, LinkDecision};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::spawn_local;

use crate::components::shell::{Shell, ShellSurface};
use crate::utils::{BrowserContext, BrowserFetcher};

/// Navigator wired to the live browser.
pub type SiteNavigator = Navigator<BrowserContext, BrowserFetcher, ShellSurface>;

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Owns the content and active-path signals, builds the navigator around
/// them, installs the browser listeners once and dispatches the initial
/// load.
#[component]
pub fn PageRouter() -> impl IntoView {
    let content = RwSignal::new(String::new());
    let active = RwSignal::new(LogicalPath::root());
    let surface = ShellSurface::new(content, active);

    let navigator: Rc<SiteNavigator> =
        Rc::new(Navigator::new(BrowserContext, BrowserFetcher, surface));

    #[cfg(target_arch = "wasm32")]
    install_listeners(&navigator);

    dispatch(&navigator, NavEvent::InitialLoad);

    view! { <Shell content=content active=active /> }
}

/// Handle `event` on the UI event loop.
fn dispatch(navigator: &Rc<SiteNavigator>, event: NavEvent) {
    let navigator = Rc::clone(navigator);
    spawn_local(async move {
        let outcome = navigator.handle(event).await;
        debug!("navigation outcome: {:?}", outcome);
    });
}

// ============================================================================
// Browser Listeners
// ============================================================================

/// Register click, popstate and hashchange listeners.
///
/// The closures are leaked with `forget()`: the listeners live as long as
/// the page.
#[cfg(target_arch = "wasm32")]
fn install_listeners(navigator: &Rc<SiteNavigator>) {
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };

    // Delegated on document so links inside injected content are caught too.
    let nav = Rc::clone(navigator);
    let on_click = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
        if event.default_prevented() {
            return;
        }
        let Some(link) = link_activation(&event) else {
            return;
        };
        if let LinkDecision::Navigate(_) = nav.classify(&link) {
            event.prevent_default();
            dispatch(&nav, NavEvent::LinkActivated(link));
        }
    }) as Box<dyn Fn(web_sys::MouseEvent)>);

    if let Some(document) = window.document() {
        let _ = document
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    }
    on_click.forget();

    let nav = Rc::clone(navigator);
    let on_popstate = Closure::wrap(Box::new(move || {
        dispatch(&nav, NavEvent::HistoryPopped);
    }) as Box<dyn Fn()>);
    let _ = window
        .add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
    on_popstate.forget();

    let nav = Rc::clone(navigator);
    let on_hashchange = Closure::wrap(Box::new(move || {
        dispatch(&nav, NavEvent::FragmentChanged);
    }) as Box<dyn Fn()>);
    let _ = window
        .add_event_listener_with_callback("hashchange", on_hashchange.as_ref().unchecked_ref());
    on_hashchange.forget();
}

/// Describe the anchor a click landed on, if any.
#[cfg(target_arch = "wasm32")]
fn link_activation(event: &web_sys::MouseEvent) -> Option<LinkActivation> {
    use wasm_bindgen::JsCast;

    let target = event.target()?.dyn_into::<web_sys::Element>().ok()?;
    let anchor = target.closest("a[href]").ok()??;

    Some(LinkActivation {
        href: anchor.get_attribute("href")?,
        target: anchor.get_attribute("target"),
        download: anchor.has_attribute("download"),
        button: event.button(),
        modified: event.ctrl_key() || event.meta_key() || event.shift_key() || event.alt_key(),
    })
}
