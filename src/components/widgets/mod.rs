//! Building blocks shared by the page views.
//!
//! - [`Badge`], [`PaymentStatus`] - Status pills and glyphs
//! - [`StatGrid`] - Stat cards with trend indicator
//! - [`PageHeader`] - Title row with actions
//! - [`Toolbar`], [`SearchInput`], [`KeySelect`] - List filter controls

mod badge;
mod page_header;
mod stat_card;
mod tone;
mod toolbar;

pub use badge::{Badge, PaymentStatus};
pub use page_header::PageHeader;
pub use stat_card::StatGrid;
pub use tone::tone_class;
pub use toolbar::{KeySelect, SearchInput, Toolbar};

stylance::import_crate_style!(pub css, "src/components/widgets/widgets.module.css");
