//! Analytics page derivations: time ranges, top products and report export.

use serde::Serialize;

use crate::choice::{Choice, choice_enum};
use crate::data::AnalyticsData;
use crate::error::ReportError;
use crate::models::{CategoryShare, ChartPoint, Product, ProductCategory, StatCard};

choice_enum! {
    /// Window of the revenue chart.
    #[derive(Default)]
    pub enum TimeRange("time range") {
        LastMonth => ("1m", "Last Month"),
        LastQuarter => ("3m", "Last 3 Months"),
        #[default]
        LastHalfYear => ("6m", "Last 6 Months"),
        LastYear => ("1y", "Last Year"),
    }
}

impl TimeRange {
    /// Number of monthly points covered.
    pub fn months(self) -> usize {
        match self {
            Self::LastMonth => 1,
            Self::LastQuarter => 3,
            Self::LastHalfYear => 6,
            Self::LastYear => 12,
        }
    }

    /// The trailing points of a monthly series that fall in this range.
    pub fn window(self, series: &[ChartPoint]) -> &[ChartPoint] {
        let start = series.len().saturating_sub(self.months());
        &series[start..]
    }
}

/// Best-selling product row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TopProduct {
    pub id: String,
    pub name: String,
    pub category: ProductCategory,
    pub revenue: String,
    pub sales: u32,
    /// Percentage of all units sold.
    pub sales_share: f64,
}

/// The `limit` products with the most sales, best first. Ties keep
/// catalogue order.
pub fn top_products(products: &[Product], limit: usize) -> Vec<TopProduct> {
    let total: u64 = products.iter().map(|p| u64::from(p.sales)).sum();
    let mut ranked: Vec<&Product> = products.iter().collect();
    ranked.sort_by(|a, b| b.sales.cmp(&a.sales));

    ranked
        .into_iter()
        .take(limit)
        .map(|p| TopProduct {
            id: p.id.clone(),
            name: p.name.clone(),
            category: p.category,
            revenue: p.revenue.clone(),
            sales: p.sales,
            sales_share: if total == 0 {
                0.0
            } else {
                f64::from(p.sales) * 100.0 / total as f64
            },
        })
        .collect()
}

/// Snapshot of the analytics page for download.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub range: &'static str,
    pub range_label: &'static str,
    pub stats: Vec<StatCard>,
    pub revenue: Vec<ChartPoint>,
    pub sales_distribution: Vec<CategoryShare>,
    pub user_activity: Vec<ChartPoint>,
    pub top_products: Vec<TopProduct>,
}

/// Rows in the top products panel.
pub const TOP_PRODUCTS_LIMIT: usize = 5;

impl AnalyticsReport {
    pub fn build(data: &AnalyticsData, products: &[Product], range: TimeRange) -> Self {
        Self {
            range: range.value(),
            range_label: range.label(),
            stats: data.stats.clone(),
            revenue: range.window(&data.revenue).to_vec(),
            sales_distribution: data.sales.clone(),
            user_activity: data.activity.clone(),
            top_products: top_products(products, TOP_PRODUCTS_LIMIT),
        }
    }

    /// Download file name, e.g. `meto-analytics-6m.json`.
    pub fn file_name(&self, prefix: &str) -> String {
        format!("{}-{}.json", prefix, self.range)
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductStatus;

    fn months(n: usize) -> Vec<ChartPoint> {
        (1..=n)
            .map(|i| ChartPoint::new(format!("M{}", i), i as f64 * 1000.0))
            .collect()
    }

    fn product(id: &str, sales: u32) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            category: ProductCategory::Electronics,
            price: "$1.00".to_string(),
            stock: 1,
            status: ProductStatus::InStock,
            sales,
            revenue: "$1.00".to_string(),
        }
    }

    #[test]
    fn test_time_range_windows() {
        let series = months(12);
        assert_eq!(TimeRange::LastMonth.window(&series).len(), 1);
        assert_eq!(TimeRange::LastMonth.window(&series)[0].label, "M12");
        assert_eq!(TimeRange::LastQuarter.window(&series)[0].label, "M10");
        assert_eq!(TimeRange::LastHalfYear.window(&series).len(), 6);
        assert_eq!(TimeRange::LastYear.window(&series).len(), 12);
    }

    #[test]
    fn test_short_series_is_not_padded() {
        let series = months(4);
        assert_eq!(TimeRange::LastYear.window(&series).len(), 4);
        assert!(TimeRange::LastMonth.window(&[]).is_empty());
    }

    #[test]
    fn test_every_range_changes_the_window() {
        let series = months(12);
        let lengths: Vec<usize> = TimeRange::ALL
            .iter()
            .map(|r| r.window(&series).len())
            .collect();
        assert_eq!(lengths, vec![1, 3, 6, 12]);
    }

    #[test]
    fn test_default_range() {
        assert_eq!(TimeRange::default(), TimeRange::LastHalfYear);
        assert_eq!("1y".parse::<TimeRange>(), Ok(TimeRange::LastYear));
    }

    #[test]
    fn test_top_products_ranking() {
        let products = vec![product("a", 10), product("b", 30), product("c", 10), product("d", 50)];
        let top = top_products(&products, 3);
        let ids: Vec<&str> = top.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["d", "b", "a"]);
        assert_eq!(top[0].sales_share, 50.0);
    }

    #[test]
    fn test_top_products_without_sales() {
        let top = top_products(&[product("a", 0)], 5);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].sales_share, 0.0);
    }
}
