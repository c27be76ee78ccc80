//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing (main entry point)
//! - [`Shell`] - Sidebar, mobile menu and content container
//! - [`charts`] - SVG charts
//! - [`widgets`] - Stat cards, badges, page headers and list toolbars
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod charts;
pub mod icons;
pub mod router;
mod shell;
pub mod widgets;

pub use router::AppRouter;
pub use shell::Shell;
