use super::GenArgs;
use crate::generator::Generator;
use crate::sink::{Sink, SqliteSink};
use serde::Serialize;
use std::path::PathBuf;

/// JSON run summary for the db subcommand
#[derive(Serialize)]
struct DbJsonOutput {
    database: String,
    seed: u64,
    customers: usize,
    products: usize,
    orders: usize,
    order_items: usize,
    elapsed_secs: f64,
}

pub fn run(output: PathBuf, args: GenArgs, progress: bool, json: bool) -> anyhow::Result<()> {
    let config = args.to_config();
    let data = Generator::new(config).generate();

    let summary = SqliteSink::new(&output)
        .with_progress(progress)
        .write(&data)?;

    if json {
        let output_json = DbJsonOutput {
            database: output.display().to_string(),
            seed: config.seed,
            customers: data.customers.len(),
            products: data.products.len(),
            orders: data.orders.len(),
            order_items: data.order_items.len(),
            elapsed_secs: summary.elapsed_secs,
        };
        println!("{}", serde_json::to_string_pretty(&output_json)?);
        return Ok(());
    }

    println!("✓ Created and seeded {}", output.display());
    println!("\nStatistics:");
    println!("  Customers: {}", data.customers.len());
    println!("  Products: {}", data.products.len());
    println!("  Orders: {}", data.orders.len());
    println!("  Order items: {}", data.order_items.len());
    println!("  Rows inserted: {}", summary.rows_written);
    println!("  Elapsed time: {:.3}s", summary.elapsed_secs);

    Ok(())
}
