//! Error types for the core crate.
//!
//! - [`DataError`] - Sample data failed to parse or validate
//! - [`ParseChoiceError`] - Unknown value for a closed enumeration
//! - [`ReportError`] - Analytics report could not be encoded

use thiserror::Error;

/// Errors raised while loading a [`Dataset`](crate::Dataset).
#[derive(Debug, Error)]
pub enum DataError {
    /// A TOML document did not match the expected shape.
    #[error("failed to parse {dataset} data: {source}")]
    Parse {
        dataset: &'static str,
        #[source]
        source: toml::de::Error,
    },

    /// Two records in the same collection share an id.
    #[error("duplicate {collection} id `{id}`")]
    DuplicateId {
        collection: &'static str,
        id: String,
    },

    /// An order was declared with zero items.
    #[error("order `{id}` has no items")]
    EmptyOrder { id: String },

    /// A chart series is empty or holds a negative or non-finite value.
    #[error("chart series `{series}` is invalid: {reason}")]
    InvalidSeries {
        series: &'static str,
        reason: &'static str,
    },
}

/// A string did not name any variant of a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`")]
pub struct ParseChoiceError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseChoiceError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Errors raised while exporting an analytics report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}
