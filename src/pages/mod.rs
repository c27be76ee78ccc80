//! Top-level views, one per route.
//!
//! Each page receives its slice of the [`Dataset`](meto_core::Dataset)
//! from the router. List pages keep their filter state locally, so it
//! resets when the page is left.

mod analytics;
mod customers;
mod dashboard;
mod not_found;
mod orders;
mod products;
mod settings;
mod table;

pub use analytics::Analytics;
pub use customers::Customers;
pub use dashboard::Dashboard;
pub use not_found::NotFound;
pub use orders::Orders;
pub use products::Products;
pub use settings::Settings;
