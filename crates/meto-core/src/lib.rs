//! Platform-independent core of the Meto admin dashboard.
//!
//! Everything here is pure and runs on the host as well as in the browser:
//!
//! - [`models`] - Records, closed status enumerations, stat cards, chart points
//! - [`data`] - [`DataSource`] loading and validating the embedded sample data
//! - [`filter`] - Free-text + key filtering shared by the list pages
//! - [`nav`] - Routes and the sidebar navigation model
//! - [`layout`] - Responsive sidebar state transitions
//! - [`chart`] - SVG geometry for line, area, bar and pie charts
//! - [`analytics`] - Time ranges, top products and report export
//! - [`format`] - Display formatting helpers

pub mod analytics;
pub mod chart;
mod choice;
pub mod data;
pub mod error;
pub mod filter;
pub mod format;
pub mod layout;
pub mod models;
pub mod nav;

pub use choice::Choice;
pub use data::{DataSource, Dataset, TomlDataSource};
pub use error::{DataError, ParseChoiceError, ReportError};
pub use filter::{Filterable, KeyFilter, ListQuery};
pub use layout::{LayoutMode, LayoutState, SidebarOffset};
pub use nav::{NAV_ITEMS, NavItem, Route};
