//! One render cycle: resolve, inject, sync history, update nav, scroll.
//!
//! Renders are not cancelled when a newer navigation starts. Each request
//! takes a generation number instead; a resolution that completes after a
//! newer request began is discarded, so the last *requested* page wins.

use std::cell::{Cell, RefCell};

use log::{debug, info};

use crate::config::{DEFAULT_TITLE, scroll};
use crate::history::{HistorySync, NavigationContext};
use crate::models::{LogicalPath, NavigationRequest};
use crate::resolver::{ContentFetcher, ContentResolver};
use crate::title::extract_title;

/// The persistent shell's content area and page chrome.
#[allow(async_fn_in_trait)]
pub trait ContentSurface {
    /// Put the transient loading indicator into the content area.
    fn show_loading(&self);
    /// Replace the content area's markup.
    fn set_markup(&self, markup: &str);
    fn set_title(&self, title: &str);
    /// Recompute the "current page" state of every navigation link.
    fn mark_active(&self, path: &LogicalPath);
    /// Smoothly scroll the element with id `fragment` into view.
    ///
    /// Returns `false` when no such element exists (yet).
    fn scroll_into_view(&self, fragment: &str) -> bool;
    /// Emit the "page rendered" notification for external listeners.
    fn notify_rendered(&self, path: &LogicalPath);
    /// Yield to the page for `ms` milliseconds.
    async fn pause(&self, ms: u32);
}

/// Result of [`Renderer::render`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered {
        /// Whether a real page (not the not-found fallback) was shown.
        found: bool,
        /// `None` without fragment, else whether its target was scrolled to.
        scrolled: Option<bool>,
    },
    /// A newer request started before this one resolved; nothing was written.
    Superseded,
}

pub struct Renderer<C, F, S> {
    history: HistorySync<C>,
    resolver: ContentResolver<F>,
    surface: S,
    generation: Cell<u64>,
    /// The loading indicator is in the content area.
    loading: Cell<bool>,
    rendered: RefCell<Option<LogicalPath>>,
}

impl<C, F, S> Renderer<C, F, S>
where
    C: NavigationContext,
    F: ContentFetcher,
    S: ContentSurface,
{
    pub fn new(context: C, fetcher: F, surface: S) -> Self {
        Self {
            history: HistorySync::new(context),
            resolver: ContentResolver::new(fetcher),
            surface,
            generation: Cell::new(0),
            loading: Cell::new(false),
            rendered: RefCell::new(None),
        }
    }

    pub fn history(&self) -> &HistorySync<C> {
        &self.history
    }

    pub fn resolver(&self) -> &ContentResolver<F> {
        &self.resolver
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Path of the last completed render.
    pub fn rendered_path(&self) -> Option<LogicalPath> {
        self.rendered.borrow().clone()
    }

    fn begin(&self) -> u64 {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        generation
    }

    /// Discard every render and scroll retry still in flight.
    pub fn invalidate(&self) {
        self.begin();
    }

    /// Whether the content area shows a loading indicator no completed
    /// render has replaced yet.
    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }

    /// Run one render cycle for `request`.
    pub async fn render(&self, request: NavigationRequest) -> RenderOutcome {
        let generation = self.begin();
        let path = request.path;

        self.surface.show_loading();
        self.loading.set(true);
        let content = self.resolver.resolve(&path).await;

        if !self.is_current(generation) {
            debug!("discarding stale render of {} (generation {})", path, generation);
            return RenderOutcome::Superseded;
        }

        self.surface.set_markup(&content.markup);
        self.loading.set(false);
        let title = extract_title(&content.markup).unwrap_or_else(|| DEFAULT_TITLE.to_string());
        self.surface.set_title(&title);
        self.history.reconcile(&path, request.history);
        self.surface.mark_active(&path);
        *self.rendered.borrow_mut() = Some(path.clone());

        let first_attempt = path.fragment().map(|f| self.surface.scroll_into_view(f));
        self.surface.notify_rendered(&path);
        info!(
            "rendered {} ({:?}, found: {})",
            path, request.origin, content.found
        );

        let scrolled = match (path.fragment(), first_attempt) {
            (Some(fragment), Some(false)) => Some(self.retry_scroll(fragment, generation).await),
            _ => first_attempt,
        };

        RenderOutcome::Rendered {
            found: content.found,
            scrolled,
        }
    }

    /// Scroll to `fragment` on the current page, waiting for it to appear.
    pub async fn scroll_to_fragment(&self, fragment: &str) -> bool {
        if self.surface.scroll_into_view(fragment) {
            return true;
        }
        self.retry_scroll(fragment, self.generation.get()).await
    }

    /// Bounded retry for targets that show up after injection. Stops early
    /// once a newer render starts.
    async fn retry_scroll(&self, fragment: &str, generation: u64) -> bool {
        for _ in 0..scroll::RETRY_ATTEMPTS {
            self.surface.pause(scroll::RETRY_INTERVAL_MS).await;
            if !self.is_current(generation) {
                return false;
            }
            if self.surface.scroll_into_view(fragment) {
                return true;
            }
        }
        debug!("#{} never appeared, giving up", fragment);
        false
    }
}
