//! End-to-end checks against the embedded sample data.

use meto_core::analytics::{AnalyticsReport, TimeRange, top_products};
use meto_core::models::{CustomerStatus, OrderStatus, ProductCategory, Trend};
use meto_core::{DataSource, Dataset, KeyFilter, ListQuery, TomlDataSource};

fn dataset() -> Dataset {
    TomlDataSource::embedded()
        .load()
        .expect("embedded data should load")
}

fn ids<'a, T>(rows: &[&'a T], id: impl Fn(&'a T) -> &'a str) -> Vec<&'a str> {
    rows.iter().map(|r| id(*r)).collect()
}

#[test]
fn test_order_search_by_customer() {
    let data = dataset();
    let query = ListQuery::new("mike", KeyFilter::All);
    let rows = query.apply(&data.orders.records);
    assert_eq!(ids(&rows, |o| o.id.as_str()), vec!["#ORD-003"]);
}

#[test]
fn test_order_status_filter() {
    let data = dataset();
    let query = ListQuery::new("", KeyFilter::Only(OrderStatus::Completed));
    let rows = query.apply(&data.orders.records);
    assert_eq!(
        ids(&rows, |o| o.id.as_str()),
        vec!["#ORD-001", "#ORD-003", "#ORD-005", "#ORD-007", "#ORD-008"]
    );
}

#[test]
fn test_order_search_without_match() {
    let data = dataset();
    let query = ListQuery::<OrderStatus>::new("nonexistent", KeyFilter::All);
    assert!(query.apply(&data.orders.records).is_empty());
}

#[test]
fn test_order_select_values() {
    let data = dataset();
    let filter: KeyFilter<OrderStatus> = "pending".parse().unwrap();
    let rows = ListQuery::new("", filter).apply(&data.orders.records);
    assert_eq!(ids(&rows, |o| o.id.as_str()), vec!["#ORD-002", "#ORD-006"]);

    let all: KeyFilter<OrderStatus> = "all".parse().unwrap();
    assert_eq!(ListQuery::new("", all).apply(&data.orders.records).len(), 8);
}

#[test]
fn test_search_is_case_insensitive() {
    let data = dataset();
    let upper = ListQuery::<CustomerStatus>::new("JOHN", KeyFilter::All);
    let lower = ListQuery::<CustomerStatus>::new("john", KeyFilter::All);
    let a = upper.apply(&data.customers.records);
    let b = lower.apply(&data.customers.records);
    assert_eq!(a, b);
    // John Doe and Mike Johnson
    assert_eq!(ids(&a, |c| c.id.as_str()), vec!["#CST-001", "#CST-003"]);
}

#[test]
fn test_customer_search_by_phone_and_status() {
    let data = dataset();
    let rows = ListQuery::<CustomerStatus>::new("567 894", KeyFilter::All)
        .apply(&data.customers.records);
    assert_eq!(ids(&rows, |c| c.id.as_str()), vec!["#CST-005"]);

    let active = ListQuery::new("", KeyFilter::Only(CustomerStatus::Active))
        .apply(&data.customers.records);
    assert_eq!(active.len(), 3);
}

#[test]
fn test_product_category_filter() {
    let data = dataset();
    let electronics = ListQuery::new("", KeyFilter::Only(ProductCategory::Electronics))
        .apply(&data.products.records);
    assert_eq!(electronics.len(), 5);

    let fashion = ListQuery::new("", KeyFilter::Only(ProductCategory::Fashion))
        .apply(&data.products.records);
    assert!(fashion.is_empty());

    let airpods = ListQuery::<ProductCategory>::new("airpods", KeyFilter::All)
        .apply(&data.products.records);
    assert_eq!(ids(&airpods, |p| p.id.as_str()), vec!["#PRD-003"]);
}

#[test]
fn test_stat_card_trends() {
    let data = dataset();
    let trends: Vec<Trend> = data.dashboard.stats.iter().map(|s| s.trend()).collect();
    assert_eq!(trends, vec![Trend::Up, Trend::Up, Trend::Down, Trend::Down]);
}

#[test]
fn test_category_shares_sum_to_whole() {
    let data = dataset();
    let dashboard: f64 = data.dashboard.categories.iter().map(|c| c.value).sum();
    let analytics: f64 = data.analytics.sales.iter().map(|c| c.value).sum();
    assert_eq!(dashboard, 100.0);
    assert_eq!(analytics, 100.0);
}

#[test]
fn test_top_products_from_catalogue() {
    let data = dataset();
    let top = top_products(&data.products.records, 3);
    let names: Vec<&str> = top.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["AirPods Pro", "iPhone 13 Pro", "Apple Watch Series 8"]);
}

#[test]
fn test_report_follows_time_range() {
    let data = dataset();
    let report = AnalyticsReport::build(&data.analytics, &data.products.records, TimeRange::LastQuarter);
    let months: Vec<&str> = report.revenue.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(months, vec!["Apr", "May", "Jun"]);
    assert_eq!(report.file_name("meto-analytics"), "meto-analytics-3m.json");

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["range"], "3m");
    assert_eq!(json["range_label"], "Last 3 Months");
    assert_eq!(json["top_products"].as_array().map(Vec::len), Some(5));
    assert_eq!(json["sales_distribution"][0]["category"], "Electronics");
}
