//! Sample data source.
//!
//! Each page receives its slice of a [`Dataset`] at construction instead of
//! reading module-level arrays, so a fetching implementation of
//! [`DataSource`] can replace [`TomlDataSource`] without touching views.
//!
//! The bundled data is five TOML documents embedded at compile time.

use std::collections::HashSet;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::DataError;
use crate::models::{CategoryShare, ChartPoint, Customer, Order, Product, StatCard, Transaction};

/// Monthly points the analytics revenue series must provide (one year).
pub const ANALYTICS_REVENUE_MONTHS: usize = 12;

/// Overview page data.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DashboardData {
    pub stats: Vec<StatCard>,
    pub revenue: Vec<ChartPoint>,
    pub categories: Vec<CategoryShare>,
    pub transactions: Vec<Transaction>,
}

/// Stat cards plus records for a list page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ListData<T> {
    pub stats: Vec<StatCard>,
    pub records: Vec<T>,
}

/// Analytics page data.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AnalyticsData {
    pub stats: Vec<StatCard>,
    /// Monthly revenue, oldest first.
    pub revenue: Vec<ChartPoint>,
    pub sales: Vec<CategoryShare>,
    /// Daily active users.
    pub activity: Vec<ChartPoint>,
}

/// Everything the views display.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub dashboard: DashboardData,
    pub orders: ListData<Order>,
    pub products: ListData<Product>,
    pub customers: ListData<Customer>,
    pub analytics: AnalyticsData,
}

/// Provider of the dashboard's data.
pub trait DataSource {
    fn load(&self) -> Result<Dataset, DataError>;
}

/// TOML documents, one per page.
#[derive(Clone, Copy, Debug)]
pub struct TomlDataSource<'a> {
    pub dashboard: &'a str,
    pub orders: &'a str,
    pub products: &'a str,
    pub customers: &'a str,
    pub analytics: &'a str,
}

impl TomlDataSource<'static> {
    /// The sample data compiled into the binary.
    pub const fn embedded() -> Self {
        Self {
            dashboard: include_str!("../assets/data/dashboard.toml"),
            orders: include_str!("../assets/data/orders.toml"),
            products: include_str!("../assets/data/products.toml"),
            customers: include_str!("../assets/data/customers.toml"),
            analytics: include_str!("../assets/data/analytics.toml"),
        }
    }
}

impl DataSource for TomlDataSource<'_> {
    fn load(&self) -> Result<Dataset, DataError> {
        let dataset = Dataset {
            dashboard: parse("dashboard", self.dashboard)?,
            orders: parse("orders", self.orders)?,
            products: parse("products", self.products)?,
            customers: parse("customers", self.customers)?,
            analytics: parse("analytics", self.analytics)?,
        };
        dataset.validate()?;
        Ok(dataset)
    }
}

fn parse<T: DeserializeOwned>(dataset: &'static str, source: &str) -> Result<T, DataError> {
    toml::from_str(source).map_err(|source| DataError::Parse { dataset, source })
}

impl Dataset {
    /// Check the invariants the views rely on.
    pub fn validate(&self) -> Result<(), DataError> {
        unique_ids("order", self.orders.records.iter().map(|o| o.id.as_str()))?;
        unique_ids("product", self.products.records.iter().map(|p| p.id.as_str()))?;
        unique_ids("customer", self.customers.records.iter().map(|c| c.id.as_str()))?;
        unique_ids(
            "transaction",
            self.dashboard.transactions.iter().map(|t| t.id.as_str()),
        )?;

        if let Some(order) = self.orders.records.iter().find(|o| o.items == 0) {
            return Err(DataError::EmptyOrder {
                id: order.id.clone(),
            });
        }

        series("dashboard revenue", self.dashboard.revenue.iter().map(|p| p.value))?;
        series("dashboard categories", self.dashboard.categories.iter().map(|c| c.value))?;
        series("analytics revenue", self.analytics.revenue.iter().map(|p| p.value))?;
        series("analytics sales", self.analytics.sales.iter().map(|c| c.value))?;
        series("analytics activity", self.analytics.activity.iter().map(|p| p.value))?;

        if self.analytics.revenue.len() != ANALYTICS_REVENUE_MONTHS {
            return Err(DataError::InvalidSeries {
                series: "analytics revenue",
                reason: "expected twelve monthly points",
            });
        }

        Ok(())
    }
}

fn unique_ids<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), DataError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DataError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn series(name: &'static str, mut values: impl Iterator<Item = f64>) -> Result<(), DataError> {
    let mut any = false;
    let valid = values.all(|v| {
        any = true;
        v.is_finite() && v >= 0.0
    });

    if !any {
        return Err(DataError::InvalidSeries {
            series: name,
            reason: "no points",
        });
    }
    if !valid {
        return Err(DataError::InvalidSeries {
            series: name,
            reason: "values must be finite and non-negative",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_orders(orders: &str) -> TomlDataSource<'_> {
        TomlDataSource {
            orders,
            ..TomlDataSource::embedded()
        }
    }

    #[test]
    fn test_embedded_data_loads() {
        let dataset = TomlDataSource::embedded().load().unwrap();
        assert_eq!(dataset.orders.records.len(), 8);
        assert_eq!(dataset.products.records.len(), 5);
        assert_eq!(dataset.customers.records.len(), 5);
        assert_eq!(dataset.dashboard.transactions.len(), 5);
        assert_eq!(dataset.analytics.revenue.len(), ANALYTICS_REVENUE_MONTHS);
    }

    #[test]
    fn test_parse_error_names_dataset() {
        let err = with_orders("stats = 3").load().unwrap_err();
        assert!(matches!(err, DataError::Parse { dataset: "orders", .. }));
        assert!(err.to_string().starts_with("failed to parse orders data"));
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let source = r##"
stats = []

[[records]]
id = "#ORD-1"
customer = "A"
product = "B"
amount = "$1.00"
status = "shipped"
date = "2024-03-20"
items = 1
"##;
        let err = with_orders(source).load().unwrap_err();
        assert!(matches!(err, DataError::Parse { dataset: "orders", .. }));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let source = r##"
stats = []

[[records]]
id = "#ORD-1"
customer = "A"
product = "B"
amount = "$1.00"
status = "pending"
date = "2024-03-20"
items = 1

[[records]]
id = "#ORD-1"
customer = "C"
product = "D"
amount = "$2.00"
status = "failed"
date = "2024-03-21"
items = 2
"##;
        let err = with_orders(source).load().unwrap_err();
        assert!(matches!(
            err,
            DataError::DuplicateId { collection: "order", ref id } if id == "#ORD-1"
        ));
    }

    #[test]
    fn test_empty_order_is_rejected() {
        let source = r##"
stats = []

[[records]]
id = "#ORD-9"
customer = "A"
product = "B"
amount = "$0.00"
status = "pending"
date = "2024-03-20"
items = 0
"##;
        let err = with_orders(source).load().unwrap_err();
        assert!(matches!(err, DataError::EmptyOrder { ref id } if id == "#ORD-9"));
    }

    #[test]
    fn test_series_validation() {
        assert!(series("s", [1.0, 0.0].into_iter()).is_ok());
        assert!(matches!(
            series("s", std::iter::empty()),
            Err(DataError::InvalidSeries { reason: "no points", .. })
        ));
        assert!(series("s", [1.0, -1.0].into_iter()).is_err());
        assert!(series("s", [f64::INFINITY].into_iter()).is_err());
    }
}
