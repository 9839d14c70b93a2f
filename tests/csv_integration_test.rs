//! Integration tests for the flat-file sink.

use chrono::NaiveDate;
use salesgen::generator::{GenConfig, Generator};
use salesgen::sink::csv::{CUSTOMERS_CSV, ORDERS_CSV, ORDER_ITEMS_CSV, PRODUCTS_CSV};
use salesgen::sink::{CsvSink, Sink};
use std::path::Path;
use tempfile::TempDir;

fn fixed_config() -> GenConfig {
    GenConfig {
        customers: 5,
        products: 3,
        orders: 10,
        max_items_per_order: 2,
        days_back: 30,
        seed: 42,
        end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
    }
}

fn write_into(dir: &Path) -> salesgen::WriteSummary {
    let data = Generator::new(fixed_config()).generate();
    CsvSink::new(dir).write(&data).unwrap()
}

#[test]
fn test_creates_four_files_with_headers() {
    let temp_dir = TempDir::new().unwrap();
    let summary = write_into(temp_dir.path());

    assert_eq!(summary.artifacts.len(), 4);

    let expected = [
        (CUSTOMERS_CSV, "customer_id,name,city,segment"),
        (PRODUCTS_CSV, "product_id,name,category,list_price"),
        (ORDERS_CSV, "order_id,customer_id,order_date,channel,region"),
        (
            ORDER_ITEMS_CSV,
            "order_item_id,order_id,product_id,qty,unit_price,discount",
        ),
    ];
    for (name, header) in expected {
        let content = std::fs::read_to_string(temp_dir.path().join(name)).unwrap();
        assert_eq!(content.lines().next().unwrap(), header, "{name}");
    }
}

#[test]
fn test_row_counts_match_dataset() {
    let temp_dir = TempDir::new().unwrap();
    let data = Generator::new(fixed_config()).generate();
    CsvSink::new(temp_dir.path()).write(&data).unwrap();

    let lines = |name: &str| {
        std::fs::read_to_string(temp_dir.path().join(name))
            .unwrap()
            .lines()
            .count()
    };
    assert_eq!(lines(CUSTOMERS_CSV), data.customers.len() + 1);
    assert_eq!(lines(PRODUCTS_CSV), data.products.len() + 1);
    assert_eq!(lines(ORDERS_CSV), data.orders.len() + 1);
    assert_eq!(lines(ORDER_ITEMS_CSV), data.order_items.len() + 1);
}

#[test]
fn test_dates_are_iso_formatted() {
    let temp_dir = TempDir::new().unwrap();
    write_into(temp_dir.path());

    let content = std::fs::read_to_string(temp_dir.path().join(ORDERS_CSV)).unwrap();
    for line in content.lines().skip(1) {
        let date = line.split(',').nth(2).unwrap();
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    }
}

#[test]
fn test_two_runs_are_byte_identical() {
    let dir_a = TempDir::new().unwrap();
    let dir_b = TempDir::new().unwrap();
    write_into(dir_a.path());
    write_into(dir_b.path());

    for name in [CUSTOMERS_CSV, PRODUCTS_CSV, ORDERS_CSV, ORDER_ITEMS_CSV] {
        let a = std::fs::read(dir_a.path().join(name)).unwrap();
        let b = std::fs::read(dir_b.path().join(name)).unwrap();
        assert_eq!(a, b, "{name} differs between runs");
    }
}

#[test]
fn test_rerun_overwrites_previous_output() {
    let temp_dir = TempDir::new().unwrap();

    let big = GenConfig {
        orders: 50,
        ..fixed_config()
    };
    let data = Generator::new(big).generate();
    CsvSink::new(temp_dir.path()).write(&data).unwrap();

    write_into(temp_dir.path());

    let content = std::fs::read_to_string(temp_dir.path().join(ORDERS_CSV)).unwrap();
    assert_eq!(content.lines().count(), 11);
}

#[test]
fn test_creates_missing_output_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("fixtures").join("sales");
    write_into(&nested);

    assert!(nested.join(CUSTOMERS_CSV).exists());
}
