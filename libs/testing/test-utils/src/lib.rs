//! Shared test utilities for the catalog crates
//!
//! - `TestCatalog`: a temporary items document seeded with a deterministic
//!   catalog, removed when dropped
//! - `TestDataBuilder`: deterministic names and create payloads
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestCatalog, TestDataBuilder};
//!
//! let catalog = TestCatalog::new();
//! let builder = TestDataBuilder::from_test_name("my_test");
//!
//! let path = catalog.path();
//! let payload = builder.item("main");
//! ```

use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Number of items in [`sample_items`].
pub const SAMPLE_SIZE: usize = 30;

const SAMPLE: [(i64, &str, &str, &str); SAMPLE_SIZE] = [
    (1, "Laptop Pro", "Electronics", "1399"),
    (2, "Laptop Air", "Electronics", "399.99"),
    (3, "Wireless Mouse", "Electronics", "24.5"),
    (4, "Mechanical Keyboard", "Electronics", "89"),
    (5, "USB-C Hub", "Electronics", "45"),
    (6, "Laptop Stand", "Accessories", "35"),
    (7, "Desk Lamp", "Home", "29.9"),
    (8, "Office Chair", "Furniture", "249"),
    (9, "Standing Desk", "Furniture", "520"),
    (10, "Bookshelf", "Furniture", "120"),
    (11, "Coffee Maker", "Kitchen", "79"),
    (12, "Blender", "Kitchen", "59.95"),
    (13, "Toaster", "Kitchen", "25"),
    (14, "Chef Knife", "Kitchen", "65"),
    (15, "Water Bottle", "Sports", "15"),
    (16, "Yoga Mat", "Sports", "22"),
    (17, "Dumbbell Set", "Sports", "150"),
    (18, "Running Shoes", "Sports", "110"),
    (19, "Backpack", "Accessories", "55"),
    (20, "Sunglasses", "Accessories", "140"),
    (21, "Wrist Watch", "Accessories", "3999"),
    (22, "Novel", "Books", "12.5"),
    (23, "Cookbook", "Books", "28"),
    (24, "Notebook", "Stationery", "4.5"),
    (25, "Fountain Pen", "Stationery", "48"),
    (26, "Monitor 27in", "Electronics", "299"),
    (27, "Headphones", "Electronics", "199"),
    (28, "Webcam", "Electronics", "69"),
    (29, "Plant Pot", "Home", "18"),
    (30, "Throw Blanket", "Home", "42"),
];

/// Deterministic catalog used by the seeded fixtures.
///
/// Three items match `laptop` (two by name in Electronics, one stand in
/// Accessories) and three prices contain `399`: 1399, 399.99 and 3999.
pub fn sample_items() -> Vec<Value> {
    SAMPLE
        .iter()
        .map(|(id, name, category, price)| {
            let price: Value = serde_json::from_str(price).expect("sample price is a JSON number");
            json!({
                "id": id,
                "name": name,
                "category": category,
                "price": price,
            })
        })
        .collect()
}

/// Temporary items document with automatic cleanup.
///
/// The directory (and the document in it) is removed when the value is
/// dropped, so keep it alive for the duration of the test.
pub struct TestCatalog {
    dir: TempDir,
    path: PathBuf,
}

impl TestCatalog {
    /// Seeded with [`sample_items`].
    pub fn new() -> Self {
        Self::with_items(&sample_items())
    }

    /// An empty array document.
    pub fn empty() -> Self {
        Self::with_items(&[])
    }

    pub fn with_items(items: &[Value]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir for test catalog");
        let path = dir.path().join("items.json");
        let catalog = Self { dir, path };
        catalog.write_items(items);

        tracing::debug!(path = %catalog.path.display(), items = items.len(), "Test catalog seeded");
        catalog
    }

    /// Path of the items document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of a file that does not exist inside the catalog directory.
    pub fn missing_path(&self) -> PathBuf {
        self.dir.path().join("missing.json")
    }

    /// Current document contents, parsed.
    pub fn read_items(&self) -> Vec<Value> {
        let raw = std::fs::read_to_string(&self.path).expect("Failed to read test catalog");
        serde_json::from_str(&raw).expect("Test catalog is not a JSON array")
    }

    /// Replaces the document contents.
    pub fn write_items(&self, items: &[Value]) {
        let raw = serde_json::to_string_pretty(items).expect("Failed to encode test catalog");
        std::fs::write(&self.path, raw).expect("Failed to write test catalog");
    }

    /// Overwrites the document with arbitrary text.
    pub fn write_raw(&self, contents: &str) {
        std::fs::write(&self.path, contents).expect("Failed to write test catalog");
    }
}

impl Default for TestCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_item");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name for testing
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(12345);
    /// assert_eq!(builder.name("item", "main"), "test-item-12345-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Whole-number price in `1..=1000` derived from the seed.
    pub fn price(&self) -> u64 {
        self.seed % 1000 + 1
    }

    /// Create payload with a unique name, a fixed category and a seeded price.
    pub fn item(&self, suffix: &str) -> Value {
        json!({
            "name": self.name("item", suffix),
            "category": "Test Category",
            "price": self.price(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.item("a"), builder2.item("a"));
        assert_eq!(builder1.name("item", "test"), builder2.name("item", "test"));
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.name("item", "x"), builder2.name("item", "x"));
    }

    #[test]
    fn test_sample_items_have_unique_ids() {
        let items = sample_items();
        let mut ids: Vec<i64> = items.iter().map(|i| i["id"].as_i64().unwrap()).collect();
        ids.dedup();
        assert_eq!(ids.len(), SAMPLE_SIZE);
    }

    #[test]
    fn test_catalog_round_trips_document() {
        let catalog = TestCatalog::new();
        assert_eq!(catalog.read_items().len(), SAMPLE_SIZE);

        catalog.write_items(&[json!({ "id": 1 })]);
        assert_eq!(catalog.read_items(), vec![json!({ "id": 1 })]);
        assert!(!catalog.missing_path().exists());
    }
}
