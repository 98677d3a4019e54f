//! Navigation engine for a static multi-page site.
//!
//! The engine maps logical paths to static content fragments, keeps the
//! address bar and history consistent, and tracks the rendered state.
//! Browser globals are never touched directly: the web shell injects
//! implementations of [`NavigationContext`], [`ContentFetcher`] and
//! [`ContentSurface`].
//!
//! - [`LogicalPath`] - Path normalization and fragment handling
//! - [`ContentResolver`] - Candidate resolution with not-found fallbacks
//! - [`HistorySync`] - Address reconciliation and the forced-path redirect
//! - [`Renderer`] - One render cycle, guarded against stale completions
//! - [`Navigator`] - Single `handle(event)` entry point for browser events

pub mod config;
pub mod error;
pub mod history;
pub mod models;
pub mod navigator;
pub mod renderer;
pub mod resolver;
pub mod title;
pub mod url;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{DecodeError, FetchError};
pub use history::{AddressMode, EntryDecision, HistorySync, NavigationContext};
pub use models::{
    Address, HistoryMode, LinkActivation, LogicalPath, NavEvent, NavOrigin, NavigationRequest,
    PageRendered, ResolvedContent, is_current_link,
};
pub use navigator::{IgnoreReason, LinkDecision, NavOutcome, Navigator, classify_link};
pub use renderer::{ContentSurface, RenderOutcome, Renderer};
pub use resolver::{ContentFetcher, ContentResolver};
