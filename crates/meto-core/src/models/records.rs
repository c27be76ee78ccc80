//! Sample records shown by the list pages and the dashboard.
//!
//! Money amounts are kept as pre-formatted strings; nothing in the
//! dashboard computes with them.

use serde::{Deserialize, Serialize};

use super::status::{CustomerStatus, OrderStatus, ProductCategory, ProductStatus};
use crate::choice::Choice;
use crate::filter::Filterable;

/// A customer order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub product: String,
    pub amount: String,
    pub status: OrderStatus,
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
    pub items: u32,
}

/// A catalogue product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: ProductCategory,
    pub price: String,
    pub stock: u32,
    pub status: ProductStatus,
    pub sales: u32,
    pub revenue: String,
}

/// A customer account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub orders: u32,
    pub total_spent: String,
    pub status: CustomerStatus,
    pub last_order: String,
}

/// A recent payment listed on the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub customer: String,
    pub amount: String,
    pub status: OrderStatus,
    pub date: String,
}

impl Filterable for Order {
    type Key = OrderStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.customer.as_str(), self.product.as_str()]
    }

    fn filter_key(&self) -> OrderStatus {
        self.status
    }
}

impl Filterable for Product {
    type Key = ProductCategory;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category.label()]
    }

    fn filter_key(&self) -> ProductCategory {
        self.category
    }
}

impl Filterable for Customer {
    type Key = CustomerStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.phone.as_str()]
    }

    fn filter_key(&self) -> CustomerStatus {
        self.status
    }
}
