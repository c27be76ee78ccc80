//! List filtering shared by the Orders, Products and Customers pages.
//!
//! A record passes a [`ListQuery`] when
//!
//! - the query text is a case-insensitive substring of at least one of the
//!   record's [`search_fields`](Filterable::search_fields), and
//! - the key filter is [`KeyFilter::All`] or equals the record's
//!   [`filter_key`](Filterable::filter_key).
//!
//! An empty query text matches every record. Results keep input order.

use std::str::FromStr;

use crate::choice::Choice;

/// Select value that disables the key filter.
pub const ALL_SENTINEL: &str = "all";

/// A record that can be narrowed by free text and an equality key.
pub trait Filterable {
    /// Status or category the select control filters on.
    type Key: Choice;

    /// Fields searched by the free-text query.
    fn search_fields(&self) -> Vec<&str>;

    fn filter_key(&self) -> Self::Key;
}

/// Equality filter on a record's key, or no filter at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyFilter<K> {
    #[default]
    All,
    Only(K),
}

impl<K: Choice> KeyFilter<K> {
    /// Whether a record with `key` passes this filter.
    pub fn admits(&self, key: K) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == key,
        }
    }

    /// Value for the select control (`"all"` or the key's wire value).
    pub fn select_value(&self) -> &'static str {
        match self {
            Self::All => ALL_SENTINEL,
            Self::Only(key) => key.value(),
        }
    }
}

impl<K> FromStr for KeyFilter<K>
where
    K: Choice + FromStr,
{
    type Err = K::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_SENTINEL {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Free-text query plus key filter for one list page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery<K> {
    pub text: String,
    pub key: KeyFilter<K>,
}

impl<K> Default for ListQuery<K> {
    fn default() -> Self {
        Self {
            text: String::new(),
            key: KeyFilter::All,
        }
    }
}

impl<K: Choice> ListQuery<K> {
    pub fn new(text: impl Into<String>, key: KeyFilter<K>) -> Self {
        Self {
            text: text.into(),
            key,
        }
    }

    /// Whether a single record passes the query.
    pub fn matches<T>(&self, record: &T) -> bool
    where
        T: Filterable<Key = K>,
    {
        let needle = self.text.to_lowercase();
        self.matches_folded(record, &needle)
    }

    /// Records passing the query, in input order.
    pub fn apply<'a, T>(&self, records: &'a [T]) -> Vec<&'a T>
    where
        T: Filterable<Key = K>,
    {
        let needle = self.text.to_lowercase();
        records
            .iter()
            .filter(|record| self.matches_folded(*record, &needle))
            .collect()
    }

    fn matches_folded<T>(&self, record: &T, needle: &str) -> bool
    where
        T: Filterable<Key = K>,
    {
        self.key.admits(record.filter_key()) && matches_text(record, needle)
    }
}

/// Case-insensitive substring test over a record's search fields.
/// `needle` must already be lowercase.
fn matches_text<T: Filterable>(record: &T, needle: &str) -> bool {
    needle.is_empty()
        || record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, CustomerStatus, Order, OrderStatus};

    fn order(id: &str, customer: &str, product: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            customer: customer.to_string(),
            product: product.to_string(),
            amount: "$1.00".to_string(),
            status,
            date: "2024-03-20".to_string(),
            items: 1,
        }
    }

    fn orders() -> Vec<Order> {
        vec![
            order("#ORD-1", "John Doe", "iPhone 13 Pro", OrderStatus::Completed),
            order("#ORD-2", "Jane Smith", "MacBook Air", OrderStatus::Pending),
            order("#ORD-3", "Johnny Cash", "AirPods", OrderStatus::Failed),
            order("#ORD-4", "Ann Lee", "iPad", OrderStatus::Completed),
        ]
    }

    fn ids(result: &[&Order]) -> Vec<String> {
        result.iter().map(|o| o.id.clone()).collect()
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let records = orders();
        let query = ListQuery::<OrderStatus>::default();
        assert_eq!(query.apply(&records).len(), records.len());
    }

    #[test]
    fn test_empty_query_with_key_filter() {
        let records = orders();
        let query = ListQuery::new("", KeyFilter::Only(OrderStatus::Completed));
        assert_eq!(ids(&query.apply(&records)), vec!["#ORD-1", "#ORD-4"]);
    }

    #[test]
    fn test_text_is_case_insensitive() {
        let records = orders();
        let upper = ListQuery::new("JOHN", KeyFilter::All);
        let lower = ListQuery::new("john", KeyFilter::All);
        assert_eq!(ids(&upper.apply(&records)), ids(&lower.apply(&records)));
        assert_eq!(ids(&upper.apply(&records)), vec!["#ORD-1", "#ORD-3"]);
    }

    #[test]
    fn test_text_searches_every_field() {
        let records = orders();
        assert_eq!(
            ids(&ListQuery::new("ord-2", KeyFilter::All).apply(&records)),
            vec!["#ORD-2"]
        );
        assert_eq!(
            ids(&ListQuery::new("airpods", KeyFilter::All).apply(&records)),
            vec!["#ORD-3"]
        );
    }

    #[test]
    fn test_text_and_key_combine() {
        let records = orders();
        let query = ListQuery::new("john", KeyFilter::Only(OrderStatus::Failed));
        assert_eq!(ids(&query.apply(&records)), vec!["#ORD-3"]);
    }

    #[test]
    fn test_no_match() {
        let records = orders();
        let query = ListQuery::new("nonexistent", KeyFilter::All);
        assert!(query.apply(&records).is_empty());
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let records = orders();
        let query = ListQuery::new("a", KeyFilter::Only(OrderStatus::Completed));
        let once: Vec<Order> = query.apply(&records).into_iter().cloned().collect();
        let twice: Vec<Order> = query.apply(&once).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_result_keeps_input_order() {
        let records = orders();
        let query = ListQuery::new("o", KeyFilter::All);
        let result = ids(&query.apply(&records));
        let mut sorted = result.clone();
        sorted.sort_by_key(|id| records.iter().position(|o| &o.id == id));
        assert_eq!(result, sorted);
    }

    #[test]
    fn test_customer_phone_search() {
        let customer = Customer {
            id: "#CST-1".to_string(),
            name: "Tom Brown".to_string(),
            email: "tom@example.com".to_string(),
            phone: "+1 234 567 894".to_string(),
            location: "Phoenix, USA".to_string(),
            orders: 3,
            total_spent: "$234.56".to_string(),
            status: CustomerStatus::Blocked,
            last_order: "2024-03-10".to_string(),
        };
        assert!(ListQuery::new("567 894", KeyFilter::All).matches(&customer));
        assert!(!ListQuery::new("phoenix", KeyFilter::All).matches(&customer));
        assert!(
            !ListQuery::new("", KeyFilter::Only(CustomerStatus::Active)).matches(&customer)
        );
    }

    #[test]
    fn test_key_filter_from_select() {
        assert_eq!("all".parse::<KeyFilter<OrderStatus>>(), Ok(KeyFilter::All));
        assert_eq!(
            "pending".parse::<KeyFilter<OrderStatus>>(),
            Ok(KeyFilter::Only(OrderStatus::Pending))
        );
        assert!("refunded".parse::<KeyFilter<OrderStatus>>().is_err());
    }

    #[test]
    fn test_key_filter_select_value() {
        assert_eq!(KeyFilter::<OrderStatus>::All.select_value(), "all");
        assert_eq!(
            KeyFilter::Only(OrderStatus::Failed).select_value(),
            "failed"
        );
    }
}
