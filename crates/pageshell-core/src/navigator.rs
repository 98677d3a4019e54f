//! Navigation interception.
//!
//! Browser events arrive as [`NavEvent`]s and go through
//! [`Navigator::handle`], which decides between redirecting, rendering,
//! scrolling or leaving the browser's default behavior alone.

use log::debug;

use crate::history::{EntryDecision, NavigationContext, address_path};
use crate::models::{LinkActivation, LogicalPath, NavEvent, NavigationRequest};
use crate::renderer::{ContentSurface, RenderOutcome, Renderer};
use crate::resolver::ContentFetcher;

/// Why a link activation is left to the browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// New tab/window: `target`, modifier keys or a non-primary button.
    NewContext,
    Download,
    /// Not an internal absolute path (other origin, scheme, relative).
    External,
    /// Only the fragment changes; default anchor scrolling applies.
    FragmentOnly,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkDecision {
    Navigate(LogicalPath),
    Ignore(IgnoreReason),
}

/// Decide whether a link activation is handled in-page.
pub fn classify_link(link: &LinkActivation, current: &LogicalPath) -> LinkDecision {
    let new_context = link.modified
        || link.button != 0
        || link
            .target
            .as_deref()
            .is_some_and(|t| !t.is_empty() && !t.eq_ignore_ascii_case("_self"));
    if new_context {
        return LinkDecision::Ignore(IgnoreReason::NewContext);
    }
    if link.download {
        return LinkDecision::Ignore(IgnoreReason::Download);
    }

    let href = link.href.trim();
    if href.starts_with('#') {
        return LinkDecision::Ignore(IgnoreReason::FragmentOnly);
    }
    if !href.starts_with('/') || href.starts_with("//") {
        return LinkDecision::Ignore(IgnoreReason::External);
    }

    let target = LogicalPath::parse(href);
    if target.same_page(current) && target.fragment().is_some() {
        return LinkDecision::Ignore(IgnoreReason::FragmentOnly);
    }
    LinkDecision::Navigate(target)
}

/// Result of [`Navigator::handle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    Rendered(RenderOutcome),
    /// The document is being reloaded at this address.
    Redirected(String),
    Ignored(IgnoreReason),
    /// Nothing to do (fragment-only history step, empty hash).
    Unchanged,
    /// Fragment change handled by scrolling alone.
    Scrolled { found: bool },
}

pub struct Navigator<C, F, S> {
    renderer: Renderer<C, F, S>,
}

impl<C, F, S> Navigator<C, F, S>
where
    C: NavigationContext,
    F: ContentFetcher,
    S: ContentSurface,
{
    pub fn new(context: C, fetcher: F, surface: S) -> Self {
        Self {
            renderer: Renderer::new(context, fetcher, surface),
        }
    }

    pub fn renderer(&self) -> &Renderer<C, F, S> {
        &self.renderer
    }

    /// Path currently shown in the address bar.
    fn address_path(&self) -> LogicalPath {
        address_path(&self.renderer.history().current_address())
    }

    /// Classify a link against the current address.
    ///
    /// Event listeners call this synchronously to decide whether to
    /// suppress the browser's default navigation.
    pub fn classify(&self, link: &LinkActivation) -> LinkDecision {
        classify_link(link, &self.address_path())
    }

    pub async fn handle(&self, event: NavEvent) -> NavOutcome {
        match event {
            NavEvent::InitialLoad => self.on_initial_load().await,
            NavEvent::LinkActivated(link) => match self.classify(&link) {
                LinkDecision::Navigate(path) => {
                    let outcome = self.renderer.render(NavigationRequest::link(path)).await;
                    NavOutcome::Rendered(outcome)
                }
                LinkDecision::Ignore(reason) => {
                    debug!("leaving {} to the browser: {:?}", link.href, reason);
                    NavOutcome::Ignored(reason)
                }
            },
            NavEvent::HistoryPopped => self.on_history_popped().await,
            NavEvent::FragmentChanged => self.on_fragment_changed().await,
        }
    }

    async fn on_initial_load(&self) -> NavOutcome {
        let path = match self.renderer.history().inspect_entry() {
            EntryDecision::Redirect(url) => {
                self.renderer.history().redirect(&url);
                return NavOutcome::Redirected(url);
            }
            EntryDecision::Forced(path) | EntryDecision::Direct(path) => path,
        };
        let outcome = self.renderer.render(NavigationRequest::initial(path)).await;
        NavOutcome::Rendered(outcome)
    }

    async fn on_history_popped(&self) -> NavOutcome {
        let path = self.address_path();
        if self
            .renderer
            .rendered_path()
            .is_some_and(|rendered| rendered.same_page(&path))
        {
            // A link render may still be resolving; the address has moved
            // back to the page on screen, so that render must not commit.
            if !self.renderer.is_loading() {
                self.renderer.invalidate();
                return NavOutcome::Unchanged;
            }
            debug!("popped back to {} while another page was loading", path);
        }
        let outcome = self.renderer.render(NavigationRequest::pop(path)).await;
        NavOutcome::Rendered(outcome)
    }

    async fn on_fragment_changed(&self) -> NavOutcome {
        let address = self.renderer.history().current_address();
        let fragment = address.hash.trim_start_matches('#');
        if fragment.is_empty() {
            return NavOutcome::Unchanged;
        }
        let found = self.renderer.scroll_to_fragment(fragment).await;
        NavOutcome::Scrolled { found }
    }
}
