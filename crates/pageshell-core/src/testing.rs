//! In-memory fakes for the engine's browser seams.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::error::FetchError;
use crate::history::{AddressMode, NavigationContext};
use crate::models::{Address, LogicalPath};
use crate::renderer::ContentSurface;
use crate::resolver::ContentFetcher;

/// Future that returns `Pending` a fixed number of times before completing.
pub struct Yield(u32);

impl Future for Yield {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 == 0 {
            Poll::Ready(())
        } else {
            self.0 -= 1;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

// ============================================================================
// FakeContext
// ============================================================================

/// History stack with a cursor, like a browser tab.
pub struct FakeContext {
    entries: RefCell<Vec<String>>,
    index: Cell<usize>,
    redirects: RefCell<Vec<String>>,
}

impl FakeContext {
    pub fn at(url: &str) -> Self {
        Self {
            entries: RefCell::new(vec![url.to_string()]),
            index: Cell::new(0),
            redirects: RefCell::new(Vec::new()),
        }
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    pub fn current_url(&self) -> String {
        self.entries.borrow()[self.index.get()].clone()
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }

    /// Browser back button.
    pub fn back(&self) {
        self.index.set(self.index.get().saturating_sub(1));
    }

    /// Browser forward button.
    pub fn forward(&self) {
        let last = self.entries.borrow().len() - 1;
        self.index.set((self.index.get() + 1).min(last));
    }

    /// Same-document fragment navigation (anchor click on `#id`).
    pub fn follow_fragment(&self, hash: &str) {
        let address = Address::parse(&self.current_url());
        let url = format!("{}{}#{}", address.pathname, address.search, hash);
        self.set_address(&url, AddressMode::Push);
    }
}

impl NavigationContext for FakeContext {
    fn current_address(&self) -> Address {
        Address::parse(&self.current_url())
    }

    fn set_address(&self, url: &str, mode: AddressMode) {
        let mut entries = self.entries.borrow_mut();
        let index = self.index.get();
        match mode {
            AddressMode::Push => {
                entries.truncate(index + 1);
                entries.push(url.to_string());
                self.index.set(index + 1);
            }
            AddressMode::Replace => entries[index] = url.to_string(),
            AddressMode::Redirect => {
                entries[index] = url.to_string();
                self.redirects.borrow_mut().push(url.to_string());
            }
        }
    }
}

// ============================================================================
// FakeFetcher
// ============================================================================

/// Serves fragments from a map and records every request.
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, String>,
    failures: HashMap<String, FetchError>,
    delays: HashMap<String, u32>,
    requests: RefCell<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, location: &str, markup: &str) -> Self {
        self.pages.insert(location.to_string(), markup.to_string());
        self
    }

    pub fn with_failure(mut self, location: &str, error: FetchError) -> Self {
        self.failures.insert(location.to_string(), error);
        self
    }

    /// Suspend `polls` times before answering requests for `location`.
    pub fn with_delay(mut self, location: &str, polls: u32) -> Self {
        self.delays.insert(location.to_string(), polls);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl ContentFetcher for FakeFetcher {
    async fn fetch_text(&self, location: &str) -> Result<String, FetchError> {
        self.requests.borrow_mut().push(location.to_string());
        Yield(self.delays.get(location).copied().unwrap_or(0)).await;

        if let Some(error) = self.failures.get(location) {
            return Err(error.clone());
        }
        self.pages
            .get(location)
            .cloned()
            .ok_or(FetchError::HttpError(404))
    }
}

// ============================================================================
// RecordingSurface
// ============================================================================

/// Content area that records what the renderer did to it.
///
/// Elements listed with [`RecordingSurface::with_late_element`] only become
/// scrollable after the given number of pauses, like content that mutates
/// after injection.
#[derive(Default)]
pub struct RecordingSurface {
    pub markup: RefCell<String>,
    pub title: RefCell<String>,
    pub active: RefCell<Option<LogicalPath>>,
    pub loading_shown: Cell<u32>,
    pub scrolled: RefCell<Vec<String>>,
    pub rendered: RefCell<Vec<String>>,
    pub pauses: Cell<u32>,
    elements: RefCell<HashSet<String>>,
    late_elements: RefCell<HashMap<String, u32>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(self, id: &str) -> Self {
        self.elements.borrow_mut().insert(id.to_string());
        self
    }

    pub fn with_late_element(self, id: &str, after_pauses: u32) -> Self {
        self.late_elements
            .borrow_mut()
            .insert(id.to_string(), after_pauses);
        self
    }
}

impl ContentSurface for RecordingSurface {
    fn show_loading(&self) {
        self.loading_shown.set(self.loading_shown.get() + 1);
    }

    fn set_markup(&self, markup: &str) {
        *self.markup.borrow_mut() = markup.to_string();
    }

    fn set_title(&self, title: &str) {
        *self.title.borrow_mut() = title.to_string();
    }

    fn mark_active(&self, path: &LogicalPath) {
        *self.active.borrow_mut() = Some(path.clone());
    }

    fn scroll_into_view(&self, fragment: &str) -> bool {
        let present = self.elements.borrow().contains(fragment)
            || self
                .late_elements
                .borrow()
                .get(fragment)
                .is_some_and(|after| self.pauses.get() >= *after);
        if present {
            self.scrolled.borrow_mut().push(fragment.to_string());
        }
        present
    }

    fn notify_rendered(&self, path: &LogicalPath) {
        self.rendered.borrow_mut().push(path.path().to_string());
    }

    async fn pause(&self, _ms: u32) {
        self.pauses.set(self.pauses.get() + 1);
        Yield(1).await;
    }
}
