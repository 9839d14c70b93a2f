//! Row types for the generated dataset.
//!
//! Field order matches the column order of both sinks, so the CSV headers
//! and the SQLite insert statements are derived from the same definitions.

use chrono::NaiveDate;
use serde::Serialize;

/// A customer reference row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub customer_id: i64,
    pub name: String,
    pub city: &'static str,
    pub segment: &'static str,
}

/// A product reference row. `list_price` is rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub product_id: i64,
    pub name: String,
    pub category: &'static str,
    pub list_price: f64,
}

/// An order header row. `order_date` serializes as YYYY-MM-DD.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub order_id: i64,
    pub customer_id: i64,
    pub order_date: NaiveDate,
    pub channel: &'static str,
    pub region: &'static str,
}

/// An order line row. `order_item_id` is unique across the whole run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    pub order_item_id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub qty: i64,
    pub unit_price: f64,
    pub discount: f64,
}
