//! Persistent page shell.
//!
//! Header, navigation and footer are rendered once. The content area takes
//! its markup from a signal the navigator writes through [`ShellSurface`].

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use pageshell_core::config::LOADING_MARKUP;
use pageshell_core::{ContentSurface, LogicalPath, is_current_link};

use crate::config::{NAV_LINKS, SITE_FOOTER, SITE_NAME};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/shell.module.css");

/// Id of the content area element.
pub const CONTENT_ID: &str = "content";

// ============================================================================
// Content Surface
// ============================================================================

/// The shell as seen by the renderer.
///
/// Markup and the active path go through signals; title, scrolling and the
/// render notification go straight to the DOM.
#[derive(Clone, Copy)]
pub struct ShellSurface {
    content: RwSignal<String>,
    active: RwSignal<LogicalPath>,
}

impl ShellSurface {
    pub fn new(content: RwSignal<String>, active: RwSignal<LogicalPath>) -> Self {
        Self { content, active }
    }
}

impl ContentSurface for ShellSurface {
    fn show_loading(&self) {
        self.content.set(LOADING_MARKUP.to_string());
    }

    fn set_markup(&self, markup: &str) {
        self.content.set(markup.to_string());
    }

    fn set_title(&self, title: &str) {
        dom::set_title(title);
    }

    fn mark_active(&self, path: &LogicalPath) {
        self.active.set(path.clone());
    }

    fn scroll_into_view(&self, fragment: &str) -> bool {
        dom::scroll_into_view(fragment)
    }

    fn notify_rendered(&self, path: &LogicalPath) {
        dom::dispatch_page_rendered(path);
    }

    async fn pause(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}

// ============================================================================
// Components
// ============================================================================

/// Page shell: header with navigation, content area, footer.
#[component]
pub fn Shell(content: RwSignal<String>, active: RwSignal<LogicalPath>) -> impl IntoView {
    let links = NAV_LINKS
        .iter()
        .map(|(href, label)| view! { <NavLink href=*href label=*label active=active /> })
        .collect_view();

    view! {
        <div class=css::shell>
            <header class=css::header>
                <a class=css::brand href="/">{SITE_NAME}</a>
                <nav class=css::nav>{links}</nav>
            </header>
            <main id=CONTENT_ID class=css::content inner_html=move || content.get() />
            <footer class=css::footer>{SITE_FOOTER}</footer>
        </div>
    }
}

/// Navigation link that tracks whether it points at the current page.
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
    active: RwSignal<LogicalPath>,
) -> impl IntoView {
    let is_current = Memo::new(move |_| is_current_link(href, &active.get()));

    view! {
        <a
            href=href
            class=css::link
            class:active=move || is_current.get()
            aria-current=move || is_current.get().then_some("page")
        >
            {label}
        </a>
    }
}
