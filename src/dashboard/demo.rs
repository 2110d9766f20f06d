//! Demo data
//!
//! Static values shown when the backend cannot be reached, plus the
//! placeholder counters that are never computed from real data.

use crate::models::{Category, Product};

/// Product count shown when the count request fails
pub const FALLBACK_PRODUCT_COUNT: u64 = 156;

/// Placeholder for today's sales, in dollars
pub const PLACEHOLDER_TODAYS_SALES: f64 = 2340.50;

/// Placeholder number of low-stock items
pub const PLACEHOLDER_LOW_STOCK: u32 = 12;

/// Placeholder number of out-of-stock items
pub const PLACEHOLDER_OUT_OF_STOCK: u32 = 3;

fn sample(id: u64, sku: &str, name: &str, category: &str, unit_price: f64, stock: i64) -> Product {
    Product {
        id,
        sku: sku.to_string(),
        name: name.to_string(),
        description: None,
        unit_price: Some(unit_price),
        cost_price: None,
        stock: Some(stock),
        min_stock_level: None,
        max_stock_level: None,
        reorder_point: None,
        category: Some(Category::new(category)),
        is_active: true,
    }
}

/// The sample catalog substituted for the product list in demo mode
pub fn sample_products() -> Vec<Product> {
    vec![
        sample(1, "LAPTOP001", "Gaming Laptop Pro", "Electronics", 1299.99, 14),
        sample(2, "MOUSE001", "Wireless Gaming Mouse", "Electronics", 89.99, 49),
        sample(3, "SHIRT001", "Cotton T-Shirt", "Clothing", 24.99, 95),
        sample(4, "PHONE001", "iPhone 14 Pro", "Electronics", 999.99, 17),
        sample(5, "TABLET001", "iPad Pro 12.9\"", "Electronics", 1099.99, 8),
        sample(6, "HEADPHONE001", "AirPods Pro", "Electronics", 249.99, 3),
        sample(7, "JEANS001", "Mens Denim Jeans", "Clothing", 79.99, 0),
        sample(8, "SHOES001", "Running Shoes", "Sports", 129.99, 25),
        sample(9, "BOOK001", "Programming in Java", "Books", 49.99, 42),
        sample(10, "PLANT001", "Monstera Deliciosa", "Home & Garden", 39.99, 18),
    ]
}

/// Id for a product created while offline: one past the highest known id
pub fn next_local_id(products: &[Product]) -> u64 {
    products.iter().map(|p| p.id).max().map_or(1, |max| max + 1)
}
