//! Relational adapter: a normalized SQLite schema with foreign keys and
//! the secondary indexes downstream analytical queries lean on.

use super::{row_progress, Sink, WriteSummary};
use crate::generator::Dataset;
use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::path::PathBuf;
use std::time::Instant;

/// Destructive reset: children dropped first, then the tables are recreated.
const SCHEMA_SQL: &str = "\
DROP TABLE IF EXISTS order_items;
DROP TABLE IF EXISTS orders;
DROP TABLE IF EXISTS products;
DROP TABLE IF EXISTS customers;
CREATE TABLE customers (
    customer_id INTEGER PRIMARY KEY,
    name        TEXT NOT NULL,
    city        TEXT NOT NULL,
    segment     TEXT NOT NULL
);
CREATE TABLE products (
    product_id INTEGER PRIMARY KEY,
    name       TEXT NOT NULL,
    category   TEXT NOT NULL,
    list_price REAL NOT NULL
);
CREATE TABLE orders (
    order_id    INTEGER PRIMARY KEY,
    customer_id INTEGER NOT NULL,
    order_date  TEXT NOT NULL,          -- ISO date (YYYY-MM-DD)
    channel     TEXT NOT NULL,
    region      TEXT NOT NULL,
    FOREIGN KEY (customer_id) REFERENCES customers(customer_id)
);
CREATE TABLE order_items (
    order_item_id INTEGER PRIMARY KEY,
    order_id      INTEGER NOT NULL,
    product_id    INTEGER NOT NULL,
    qty           INTEGER NOT NULL,
    unit_price    REAL NOT NULL,
    discount      REAL NOT NULL,        -- 0.0 to 0.5
    FOREIGN KEY (order_id) REFERENCES orders(order_id),
    FOREIGN KEY (product_id) REFERENCES products(product_id)
);
CREATE INDEX idx_orders_date ON orders(order_date);
CREATE INDEX idx_orders_region ON orders(region);
CREATE INDEX idx_products_category ON products(category);
CREATE INDEX idx_order_items_order ON order_items(order_id);
";

/// Writes the dataset into a single SQLite database file, recreating the
/// schema on every run.
pub struct SqliteSink {
    path: PathBuf,
    progress: bool,
}

impl SqliteSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            progress: false,
        }
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }
}

impl Sink for SqliteSink {
    fn write(&mut self, data: &Dataset) -> Result<WriteSummary> {
        let start = Instant::now();

        let mut conn = Connection::open(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))?;
        // Must be set per connection, outside any transaction.
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA_SQL).context("failed to create schema")?;

        let pb = row_progress(data.total_rows() as u64, self.progress);

        // Insert in dependency order inside one committed transaction.
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare("INSERT INTO customers VALUES (?1, ?2, ?3, ?4)")?;
            for c in &data.customers {
                stmt.execute(params![c.customer_id, c.name, c.city, c.segment])?;
                if let Some(pb) = &pb {
                    pb.inc(1);
                }
            }

            let mut stmt = tx.prepare("INSERT INTO products VALUES (?1, ?2, ?3, ?4)")?;
            for p in &data.products {
                stmt.execute(params![p.product_id, p.name, p.category, p.list_price])?;
                if let Some(pb) = &pb {
                    pb.inc(1);
                }
            }

            let mut stmt = tx.prepare("INSERT INTO orders VALUES (?1, ?2, ?3, ?4, ?5)")?;
            for o in &data.orders {
                stmt.execute(params![
                    o.order_id,
                    o.customer_id,
                    o.order_date.to_string(),
                    o.channel,
                    o.region
                ])?;
                if let Some(pb) = &pb {
                    pb.inc(1);
                }
            }

            let mut stmt = tx.prepare("INSERT INTO order_items VALUES (?1, ?2, ?3, ?4, ?5, ?6)")?;
            for i in &data.order_items {
                stmt.execute(params![
                    i.order_item_id,
                    i.order_id,
                    i.product_id,
                    i.qty,
                    i.unit_price,
                    i.discount
                ])?;
                if let Some(pb) = &pb {
                    pb.inc(1);
                }
            }
        }
        tx.commit().context("failed to commit inserts")?;

        if let Some(pb) = pb {
            pb.finish_and_clear();
        }

        Ok(WriteSummary {
            artifacts: vec![self.path.clone()],
            rows_written: data.total_rows(),
            elapsed_secs: start.elapsed().as_secs_f64(),
        })
    }
}
