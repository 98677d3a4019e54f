//! Data models for the navigation engine.
//!
//! - [`LogicalPath`], [`NavigationRequest`] - What to render and how history changes
//! - [`ResolvedContent`], [`PageRendered`] - Resolver output and render notification
//! - [`Address`], [`LinkActivation`], [`NavEvent`] - Browser inputs as plain values

mod content;
mod event;
mod route;

pub use content::{PageRendered, ResolvedContent};
pub use event::{Address, LinkActivation, NavEvent};
pub use route::{HistoryMode, LogicalPath, NavOrigin, NavigationRequest, is_current_link};
