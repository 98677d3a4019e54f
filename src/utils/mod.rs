//! Browser-side implementations of the engine's seams.
//!
//! Provides:
//! - [`BrowserContext`] - Address and history over `window.location`/`window.history`
//! - [`BrowserFetcher`] - Fragment fetching with timeout and session cache
//! - [`logger`] - `log` records forwarded to the browser console

pub mod cache;
pub mod dom;
mod fetch;
pub mod logger;

pub use dom::BrowserContext;
pub use fetch::BrowserFetcher;
