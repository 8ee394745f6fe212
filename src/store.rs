// =============================================================================
// STORE MODULE
// =============================================================================
// This module holds the product catalog.
//
// LEARNING NOTES:
// - The catalog lives in memory for the lifetime of the process
// - Handlers talk to a `ProductRepository` trait, not to the Vec directly,
//   so another backing store can be swapped in without touching them
// - tokio's RwLock lets many readers list products at once while a create
//   takes exclusive access
// =============================================================================

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{NewProduct, Product, STATUS_AVAILABLE, STATUS_OUT_OF_STOCK};

// -----------------------------------------------------------------------------
// REPOSITORY TRAIT
// -----------------------------------------------------------------------------
/// Read and append access to the product collection.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Snapshot of every product, in creation order.
    async fn list(&self) -> Vec<Product>;

    /// Store a new product, assigning `id = count + 1`.
    async fn append(&self, product: NewProduct) -> Product;

    /// Number of stored products.
    async fn len(&self) -> usize;
}

// -----------------------------------------------------------------------------
// IN-MEMORY STORE
// -----------------------------------------------------------------------------
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductStore {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductStore {
    /// Catalog pre-filled with `products`, kept in the given order.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    /// Catalog pre-filled with the built-in seed data.
    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }

    /// Catalog loaded from a JSON array of products on disk.
    ///
    /// The ids must be exactly `1..=n` in file order, otherwise `append`
    /// would later hand out an id that is already taken.
    pub async fn from_json_file(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;

        let products: Vec<Product> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse seed file {}", path.display()))?;

        check_sequential_ids(&products)
            .with_context(|| format!("Invalid seed file {}", path.display()))?;

        Ok(Self::with_products(products))
    }
}

fn check_sequential_ids(products: &[Product]) -> Result<()> {
    for (position, product) in products.iter().enumerate() {
        let expected = position as u64 + 1;
        if product.id != expected {
            bail!(
                "product {:?} has id {} but position {} requires id {}",
                product.name,
                product.id,
                position + 1,
                expected
            );
        }
    }
    Ok(())
}

#[async_trait]
impl ProductRepository for InMemoryProductStore {
    async fn list(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    async fn append(&self, product: NewProduct) -> Product {
        // Id assignment and push happen under one write lock, so two
        // concurrent creates can never observe the same length.
        let mut products = self.products.write().await;

        let id = products.len() as u64 + 1;
        let product = Product::from_new(id, product);
        products.push(product.clone());

        tracing::info!(product_id = id, name = %product.name, "Created product");
        product
    }

    async fn len(&self) -> usize {
        self.products.read().await.len()
    }
}

// =============================================================================
// SEED DATA
// =============================================================================
// The catalog every fresh process starts with: 20 products, 18 available.
//
// (id, name, price, stock, category, business type, sub-category, vendor)
const SEED: [(u64, &str, f64, i64, &str, &str, &str, &str); 20] = [
    (1, "Wireless Headphones", 129.99, 45, "Electronics", "Retail", "Audio", "TechHub"),
    (2, "Bluetooth Speaker", 59.5, 80, "Electronics", "Retail", "Audio", "SoundWave"),
    (3, "Smart Watch", 199.0, 25, "Electronics", "Retail", "Wearables", "TechHub"),
    (4, "Running Shoes", 89.95, 60, "Sports", "Retail", "Footwear", "PeakGear"),
    (5, "Yoga Mat", 24.99, 150, "Sports", "Wholesale", "Fitness", "FlexFit"),
    (6, "Cordless Drill", 149.0, 0, "Tools", "Manufacturer", "Power Tools", "BuildPro"),
    (7, "Chef Knife Set", 79.0, 35, "Home & Kitchen", "Retail", "Cutlery", "KitchenCraft"),
    (8, "Espresso Machine", 349.0, 12, "Home & Kitchen", "Retail", "Appliances", "KitchenCraft"),
    (9, "Mountain Bike Helmet", 64.0, 40, "Sports", "Retail", "Cycling", "PeakGear"),
    (10, "Noise Cancelling Headphones", 279.0, 18, "Electronics", "Retail", "Audio", "SoundWave"),
    (11, "LED Desk Lamp", 34.5, 95, "Home & Kitchen", "Wholesale", "Lighting", "BrightHome"),
    (12, "Car Phone Mount", 19.99, 200, "Automotive", "Wholesale", "Accessories", "DriveLine"),
    (13, "Tire Inflator", 45.0, 55, "Automotive", "Manufacturer", "Maintenance", "DriveLine"),
    (14, "Hiking Backpack", 110.0, 30, "Sports", "Retail", "Outdoor", "PeakGear"),
    (15, "Cast Iron Skillet", 39.0, 70, "Home & Kitchen", "Manufacturer", "Cookware", "KitchenCraft"),
    (16, "Portable Charger", 29.99, 0, "Electronics", "Wholesale", "Accessories", "TechHub"),
    (17, "Resistance Bands", 15.5, 120, "Sports", "Wholesale", "Fitness", "FlexFit"),
    (18, "Socket Wrench Set", 69.99, 22, "Tools", "Manufacturer", "Hand Tools", "BuildPro"),
    (19, "Trail Running Shoes", 119.0, 28, "Sports", "Retail", "Footwear", "PeakGear"),
    (20, "Smart Light Bulbs", 49.99, 65, "Home & Kitchen", "Retail", "Lighting", "BrightHome"),
];

/// The built-in seed catalog. Products with no stock are "Out of Stock".
pub fn seed_products() -> Vec<Product> {
    SEED.iter()
        .map(
            |&(id, name, price, stock, category, business_type, sub_category, vendor)| Product {
                id,
                name: name.to_string(),
                price,
                stock,
                category: category.to_string(),
                business_type: business_type.to_string(),
                sub_category: sub_category.to_string(),
                status: if stock > 0 {
                    STATUS_AVAILABLE
                } else {
                    STATUS_OUT_OF_STOCK
                }
                .to_string(),
                vendor: vendor.to_string(),
                vendor_image: Some(format!("/vendors/{}.png", vendor.to_lowercase())),
                image: Some(format!("/products/{id}.jpg")),
                extra: Default::default(),
            },
        )
        .collect()
}
