//! Output adapters for generated datasets.
//!
//! A sink consumes a complete [`Dataset`] and persists all four row sets;
//! generation never knows which sink it is feeding.

pub mod csv;
pub mod sqlite;

use crate::generator::Dataset;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

pub use self::csv::CsvSink;
pub use self::sqlite::SqliteSink;

/// A destination that can persist a complete dataset.
pub trait Sink {
    /// Write all four row sets, replacing any previous output.
    fn write(&mut self, data: &Dataset) -> Result<WriteSummary>;
}

/// Outcome of a sink write.
#[derive(Debug, Clone)]
pub struct WriteSummary {
    /// Files produced or replaced, in creation order.
    pub artifacts: Vec<PathBuf>,
    pub rows_written: usize,
    pub elapsed_secs: f64,
}

/// Progress bar over a known row count, when enabled.
pub(crate) fn row_progress(total: u64, enabled: bool) -> Option<ProgressBar> {
    if !enabled {
        return None;
    }
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows")
            .unwrap()
            .progress_chars("=>-"),
    );
    Some(pb)
}
