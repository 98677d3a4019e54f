//! UI components built with Leptos.
//!
//! - [`router`] - Navigation engine wiring and browser event listeners (main entry point)
//! - [`shell`] - Persistent page shell and the content surface it exposes

pub mod router;
pub mod shell;

pub use router::PageRouter;
