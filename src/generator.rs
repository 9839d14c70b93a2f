//! Dataset generator producing FK-consistent customers, products, orders,
//! and order items from a single seeded random stream.

use crate::domain::{Customer, Order, OrderItem, Product};
use crate::sampling::{round2, Sampler};
use chrono::{Days, Local, NaiveDate};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generation parameters.
///
/// `Default` mirrors the stock fixture: 200 customers, 60 products,
/// 2000 orders, up to 5 items per order, a 365-day trailing window,
/// seed 42.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenConfig {
    pub customers: usize,
    pub products: usize,
    pub orders: usize,
    pub max_items_per_order: usize,
    /// Size of the trailing order-date window, in days.
    pub days_back: u32,
    pub seed: u64,
    /// Last day of the order-date window. Defaults to today; pin it to get
    /// identical output across calendar days.
    pub end_date: NaiveDate,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            customers: 200,
            products: 60,
            orders: 2000,
            max_items_per_order: 5,
            days_back: 365,
            seed: 42,
            end_date: Local::now().date_naive(),
        }
    }
}

/// Complete in-memory dataset, ready for any sink.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
}

impl Dataset {
    pub fn total_rows(&self) -> usize {
        self.customers.len() + self.products.len() + self.orders.len() + self.order_items.len()
    }
}

/// Owns the random stream and the order-item id counter for one run, so
/// concurrent or repeated runs never share state.
pub struct Generator {
    config: GenConfig,
    sampler: Sampler<ChaCha8Rng>,
    next_item_id: i64,
}

impl Generator {
    pub fn new(config: GenConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            config,
            sampler: Sampler::new(rng),
            next_item_id: 1,
        }
    }

    /// Generate the full dataset: reference rows first, then transactions.
    pub fn generate(&mut self) -> Dataset {
        let customers = self.generate_customers();
        let products = self.generate_products();
        let (orders, order_items) = self.generate_transactions(&products);

        Dataset {
            customers,
            products,
            orders,
            order_items,
        }
    }

    fn generate_customers(&mut self) -> Vec<Customer> {
        (1..=self.config.customers as i64)
            .map(|id| Customer {
                customer_id: id,
                name: format!("Customer {:04}", id),
                city: self.sampler.city(),
                segment: self.sampler.segment(),
            })
            .collect()
    }

    fn generate_products(&mut self) -> Vec<Product> {
        (1..=self.config.products as i64)
            .map(|id| {
                let (category, (min, max)) = self.sampler.category();
                Product {
                    product_id: id,
                    name: format!("Product {:03}", id),
                    category,
                    list_price: self.sampler.price(min, max),
                }
            })
            .collect()
    }

    fn generate_transactions(&mut self, products: &[Product]) -> (Vec<Order>, Vec<OrderItem>) {
        let window_start = self.config.end_date - Days::new(u64::from(self.config.days_back));
        let mut orders = Vec::with_capacity(self.config.orders);
        let mut items = Vec::new();

        for order_id in 1..=self.config.orders as i64 {
            let customer_id = self.sampler.int_range(1, self.config.customers as i64);
            let offset = self.sampler.int_range(0, i64::from(self.config.days_back));
            let order_date = window_start + Days::new(offset as u64);

            orders.push(Order {
                order_id,
                customer_id,
                order_date,
                channel: self.sampler.channel(),
                region: self.sampler.region(),
            });

            // An order cannot contain more distinct products than exist.
            let max_items = self.config.max_items_per_order.min(products.len());
            if max_items == 0 {
                continue;
            }
            let item_count = self.sampler.int_range(1, max_items as i64) as usize;

            for product_id in self.sampler.distinct_ids(products.len() as i64, item_count) {
                let list_price = products[(product_id - 1) as usize].list_price;
                items.push(OrderItem {
                    order_item_id: self.next_item_id,
                    order_id,
                    product_id,
                    qty: self.sampler.int_range(1, 6),
                    unit_price: round2(list_price * self.sampler.price_variation()),
                    discount: self.sampler.discount(),
                });
                self.next_item_id += 1;
            }
        }

        (orders, items)
    }
}
