//! Browser utilities.
//!
//! Provides:
//! - [`dom`] - Window, document, scrolling and file downloads
//! - [`WindowListener`] - Window event subscriptions released on unmount
//! - [`ViewportObserver`] - Scoped viewport resize notifications

pub mod dom;
mod listener;

pub use listener::{ViewportObserver, WindowListener};
