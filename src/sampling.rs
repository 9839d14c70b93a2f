//! Deterministic sampling over the fixed categorical domains.
//!
//! All randomness flows through [`Sampler`], which wraps the run's single
//! seeded RNG so that identical seeds yield identical draw sequences.

use rand::Rng;
use rand::RngExt;

/// Cities customers are placed in
pub const CITIES: &[&str] = &[
    "Hyderabad",
    "Bengaluru",
    "Chennai",
    "Delhi",
    "Mumbai",
    "Pune",
];

/// Customer segments
pub const SEGMENTS: &[&str] = &["Consumer", "SMB", "Enterprise"];

/// Sales channels
pub const CHANNELS: &[&str] = &["Online", "Retail", "Partner"];

/// Sales regions
pub const REGIONS: &[&str] = &["South", "North", "West", "East"];

/// Discrete discount levels applied to order lines
pub const DISCOUNTS: &[f64] = &[0.0, 0.05, 0.10, 0.15, 0.20];

/// Product categories paired with their list-price range
pub const CATEGORIES: &[(&str, (f64, f64))] = &[
    ("Electronics", (3000.0, 40000.0)),
    ("Accessories", (200.0, 5000.0)),
    ("Home", (500.0, 15000.0)),
    ("Books", (150.0, 1500.0)),
];

/// Look up the list-price bounds for a category name.
pub fn price_bounds(category: &str) -> Option<(f64, f64)> {
    CATEGORIES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, bounds)| *bounds)
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Uniform draws from the fixed domains, backed by a deterministic RNG.
pub struct Sampler<R: Rng> {
    rng: R,
}

impl<R: Rng> Sampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn city(&mut self) -> &'static str {
        CITIES[self.rng.random_range(0..CITIES.len())]
    }

    pub fn segment(&mut self) -> &'static str {
        SEGMENTS[self.rng.random_range(0..SEGMENTS.len())]
    }

    pub fn channel(&mut self) -> &'static str {
        CHANNELS[self.rng.random_range(0..CHANNELS.len())]
    }

    pub fn region(&mut self) -> &'static str {
        REGIONS[self.rng.random_range(0..REGIONS.len())]
    }

    pub fn discount(&mut self) -> f64 {
        DISCOUNTS[self.rng.random_range(0..DISCOUNTS.len())]
    }

    /// Pick a category together with its list-price bounds.
    pub fn category(&mut self) -> (&'static str, (f64, f64)) {
        CATEGORIES[self.rng.random_range(0..CATEGORIES.len())]
    }

    /// Uniform integer in `[min, max]` inclusive.
    pub fn int_range(&mut self, min: i64, max: i64) -> i64 {
        self.rng.random_range(min..=max)
    }

    /// Uniform price in `[min, max)`, rounded to 2 decimals.
    pub fn price(&mut self, min: f64, max: f64) -> f64 {
        round2(self.rng.random_range(min..max))
    }

    /// Multiplicative variation applied to a list price.
    pub fn price_variation(&mut self) -> f64 {
        self.rng.random_range(0.85..1.05)
    }

    /// Draw `k` distinct ids from `1..=pool` without replacement, in draw
    /// order. `k` greater than `pool` is clamped to `pool`.
    pub fn distinct_ids(&mut self, pool: i64, k: usize) -> Vec<i64> {
        let mut ids: Vec<i64> = (1..=pool).collect();
        let k = k.min(ids.len());
        // Partial Fisher-Yates: only the first k slots are settled.
        for i in 0..k {
            let j = self.rng.random_range(i..ids.len());
            ids.swap(i, j);
        }
        ids.truncate(k);
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sampler(seed: u64) -> Sampler<ChaCha8Rng> {
        Sampler::new(ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn test_deterministic_draws() {
        let mut a = sampler(42);
        let mut b = sampler(42);

        assert_eq!(a.city(), b.city());
        assert_eq!(a.category(), b.category());
        assert_eq!(a.price(10.0, 100.0), b.price(10.0, 100.0));
        assert_eq!(a.distinct_ids(60, 5), b.distinct_ids(60, 5));
    }

    #[test]
    fn test_price_precision() {
        let mut s = sampler(42);
        for _ in 0..100 {
            let price = s.price(150.0, 1500.0);
            assert_eq!(price, round2(price));
            assert!(price >= 150.0);
            assert!(price <= 1500.0);
        }
    }

    #[test]
    fn test_distinct_ids_no_duplicates() {
        let mut s = sampler(42);
        for _ in 0..50 {
            let ids = s.distinct_ids(10, 6);
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), ids.len());
            assert!(ids.iter().all(|&id| (1..=10).contains(&id)));
        }
    }

    #[test]
    fn test_distinct_ids_clamped_to_pool() {
        let mut s = sampler(42);
        let ids = s.distinct_ids(3, 10);
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_price_bounds_lookup() {
        assert_eq!(price_bounds("Electronics"), Some((3000.0, 40000.0)));
        assert_eq!(price_bounds("Books"), Some((150.0, 1500.0)));
        assert_eq!(price_bounds("Garden"), None);
    }
}
