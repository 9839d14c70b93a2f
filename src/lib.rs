//! Deterministic synthetic sales dataset generator.
//!
//! Generates FK-consistent customers, products, orders, and order items
//! from a single seeded random stream, then hands the in-memory dataset to
//! a swappable sink (CSV files or a SQLite database).
//!
//! # Example
//!
//! ```rust
//! use salesgen::{GenConfig, Generator};
//!
//! let config = GenConfig {
//!     orders: 10,
//!     ..GenConfig::default()
//! };
//! let data = Generator::new(config).generate();
//!
//! assert_eq!(data.orders.len(), 10);
//! ```

pub mod domain;
pub mod generator;
pub mod sampling;
pub mod sink;

pub use domain::{Customer, Order, OrderItem, Product};
pub use generator::{Dataset, GenConfig, Generator};
pub use sink::{CsvSink, Sink, SqliteSink, WriteSummary};
