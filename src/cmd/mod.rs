mod csv;
mod db;

use crate::generator::GenConfig;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "salesgen")]
#[command(version)]
#[command(
    about = "Generate deterministic synthetic sales data for analytics fixtures",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Generation parameters shared by both sinks. Defaults reproduce the
/// stock fixture.
#[derive(Args, Debug)]
pub struct GenArgs {
    /// Number of customers
    #[arg(long, default_value_t = 200)]
    pub customers: usize,

    /// Number of products
    #[arg(long, default_value_t = 60)]
    pub products: usize,

    /// Number of orders
    #[arg(long, default_value_t = 2000)]
    pub orders: usize,

    /// Maximum line items per order (capped at the product count)
    #[arg(long, default_value_t = 5)]
    pub max_items: usize,

    /// Size of the trailing order-date window, in days
    #[arg(long, default_value_t = 365)]
    pub days_back: u32,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

impl GenArgs {
    pub fn to_config(&self) -> GenConfig {
        GenConfig {
            customers: self.customers,
            products: self.products,
            orders: self.orders,
            max_items_per_order: self.max_items,
            days_back: self.days_back,
            seed: self.seed,
            ..GenConfig::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the dataset as four CSV files
    Csv {
        /// Output directory for the CSV files
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        #[command(flatten)]
        args: GenArgs,

        /// Show progress while writing rows
        #[arg(short, long)]
        progress: bool,

        /// Output the run summary as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Write the dataset into a SQLite database
    Db {
        /// Output database file (schema is dropped and recreated)
        #[arg(short, long, default_value = "sales.db")]
        output: PathBuf,

        #[command(flatten)]
        args: GenArgs,

        /// Show progress while inserting rows
        #[arg(short, long)]
        progress: bool,

        /// Output the run summary as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Csv {
            output,
            args,
            progress,
            json,
        } => csv::run(output, args, progress, json),
        Commands::Db {
            output,
            args,
            progress,
            json,
        } => db::run(output, args, progress, json),
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "salesgen", &mut io::stdout());
            Ok(())
        }
    }
}
