//! Flat-file adapter: one CSV file per entity.
//!
//! Headers come from the row types' field names, so they always match the
//! relational schema's column order.

use super::{row_progress, Sink, WriteSummary};
use crate::generator::Dataset;
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub const CUSTOMERS_CSV: &str = "customers.csv";
pub const PRODUCTS_CSV: &str = "products.csv";
pub const ORDERS_CSV: &str = "orders.csv";
pub const ORDER_ITEMS_CSV: &str = "order_items.csv";

/// Writes the dataset as four CSV files inside a directory, overwriting
/// files of the same names.
pub struct CsvSink {
    dir: PathBuf,
    progress: bool,
}

impl CsvSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            progress: false,
        }
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    fn write_table<S: Serialize>(
        &self,
        path: &Path,
        rows: &[S],
        pb: Option<&ProgressBar>,
    ) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("failed to create {}", path.display()))?;

        for row in rows {
            writer.serialize(row)?;
            if let Some(pb) = pb {
                pb.inc(1);
            }
        }

        writer
            .flush()
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

impl Sink for CsvSink {
    fn write(&mut self, data: &Dataset) -> Result<WriteSummary> {
        let start = Instant::now();

        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create {}", self.dir.display()))?;

        let pb = row_progress(data.total_rows() as u64, self.progress);

        let customers = self.dir.join(CUSTOMERS_CSV);
        let products = self.dir.join(PRODUCTS_CSV);
        let orders = self.dir.join(ORDERS_CSV);
        let order_items = self.dir.join(ORDER_ITEMS_CSV);

        self.write_table(&customers, &data.customers, pb.as_ref())?;
        self.write_table(&products, &data.products, pb.as_ref())?;
        self.write_table(&orders, &data.orders, pb.as_ref())?;
        self.write_table(&order_items, &data.order_items, pb.as_ref())?;

        if let Some(pb) = pb {
            pb.finish_and_clear();
        }

        Ok(WriteSummary {
            artifacts: vec![customers, products, orders, order_items],
            rows_written: data.total_rows(),
            elapsed_secs: start.elapsed().as_secs_f64(),
        })
    }
}
