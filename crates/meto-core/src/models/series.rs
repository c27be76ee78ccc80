use serde::{Deserialize, Serialize};

use super::status::ProductCategory;

/// A single labelled value in a line, area or bar series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// A category's share of sales, rendered as a pie slice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: ProductCategory,
    /// Percentage points.
    pub value: f64,
    /// CSS colour of the slice.
    pub color: String,
}
