//! SVG charts drawn from `meto_core::chart` geometry.
//!
//! - [`CartesianChart`] - Area, line and bar series
//! - [`PieChart`] - Pie or donut with legend

mod cartesian;
mod pie;

pub use cartesian::{CartesianChart, SeriesKind};
pub use pie::PieChart;
