//! Data models for the dashboard.
//!
//! Contains domain types for:
//! - [`Order`], [`Product`], [`Customer`], [`Transaction`] - Immutable sample records
//! - [`OrderStatus`], [`ProductStatus`], [`CustomerStatus`] - Closed status sets with badge tones
//! - [`StatCard`], [`Trend`] - Aggregate statistic cards
//! - [`ChartPoint`], [`CategoryShare`] - Chart series
//! - [`Preferences`], [`Theme`], [`Accent`] - In-memory settings state

mod icon;
mod preferences;
mod records;
mod series;
mod stats;
mod status;

pub use icon::IconKey;
pub use preferences::{Accent, Preferences, Theme};
pub use records::{Customer, Order, Product, Transaction};
pub use series::{CategoryShare, ChartPoint};
pub use stats::{StatCard, Trend};
pub use status::{CustomerStatus, OrderStatus, ProductCategory, ProductStatus, StatusBadge, Tone};
