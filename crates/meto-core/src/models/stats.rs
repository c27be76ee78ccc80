use serde::{Deserialize, Serialize};

use super::icon::IconKey;
use super::status::Tone;

/// Direction of a stat card's change figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// Aggregate statistic shown at the top of a page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    /// Signed change figure, e.g. `+12.5%` or `-2.1%`.
    pub change: String,
    pub icon: IconKey,
    pub tone: Tone,
}

impl StatCard {
    /// Trend derived from the sign of the change figure.
    pub fn trend(&self) -> Trend {
        if self.change.trim_start().starts_with('-') {
            Trend::Down
        } else {
            Trend::Up
        }
    }
}
