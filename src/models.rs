//! Inventory Data Model
//!
//! Wire types exchanged with the inventory backend and the form values
//! posted by the add-product modal.

use serde::{Deserialize, Serialize};

/// Product category as embedded in a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A product as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub unit_price: Option<f64>,
    #[serde(default)]
    pub cost_price: Option<f64>,
    /// Units on hand; absent means none
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default)]
    pub min_stock_level: Option<i32>,
    #[serde(default)]
    pub max_stock_level: Option<i32>,
    #[serde(default)]
    pub reorder_point: Option<i32>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Product {
    /// Stock level with a missing value read as zero
    pub fn stock_level(&self) -> i64 {
        self.stock.unwrap_or(0)
    }

    pub fn stock_status(&self) -> StockStatus {
        StockStatus::from_level(self.stock_level())
    }

    pub fn category_name(&self) -> &str {
        self.category.as_ref().map(|c| c.name.as_str()).unwrap_or("N/A")
    }
}

/// Stock classification shown as a badge in the product table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

/// Below this many units a product is considered low on stock
pub const LOW_STOCK_THRESHOLD: i64 = 10;

impl StockStatus {
    pub fn from_level(stock: i64) -> Self {
        if stock == 0 {
            StockStatus::OutOfStock
        } else if stock < LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    /// Bootstrap contextual color for the badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            StockStatus::InStock => "success",
            StockStatus::LowStock => "warning",
            StockStatus::OutOfStock => "danger",
        }
    }
}

/// Body of `GET /products` and `GET /products/search`.
///
/// The list endpoint answers with a paginated envelope, the search endpoint
/// with a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProductListResponse {
    List(Vec<Product>),
    Page {
        #[serde(default)]
        content: Option<Vec<Product>>,
    },
}

impl ProductListResponse {
    pub fn into_products(self) -> Vec<Product> {
        match self {
            ProductListResponse::List(products) => products,
            ProductListResponse::Page { content } => content.unwrap_or_default(),
        }
    }
}

/// Request body for `POST /products`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub description: String,
    pub unit_price: Option<f64>,
    pub cost_price: Option<f64>,
    pub min_stock_level: i32,
    pub max_stock_level: i32,
    pub reorder_point: i32,
}

pub const DEFAULT_MIN_STOCK_LEVEL: i32 = 0;
pub const DEFAULT_MAX_STOCK_LEVEL: i32 = 1000;
pub const DEFAULT_REORDER_POINT: i32 = 10;

impl NewProduct {
    /// Turn into a locally numbered product, used when the backend cannot
    /// be reached.
    pub fn into_demo_product(self, id: u64) -> Product {
        Product {
            id,
            sku: self.sku,
            name: self.name,
            description: Some(self.description),
            unit_price: self.unit_price,
            cost_price: self.cost_price,
            stock: Some(0),
            min_stock_level: Some(self.min_stock_level),
            max_stock_level: Some(self.max_stock_level),
            reorder_point: Some(self.reorder_point),
            category: Some(Category::new("General")),
            is_active: true,
        }
    }
}

/// Raw values of the add-product form, as submitted by the browser
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub unit_price: String,
    #[serde(default)]
    pub cost_price: String,
    #[serde(default)]
    pub min_stock_level: String,
    #[serde(default)]
    pub max_stock_level: String,
    #[serde(default)]
    pub reorder_point: String,
}

impl ProductForm {
    /// Parse form values. Unparseable prices become `None`, unparseable
    /// stock levels fall back to their defaults.
    pub fn to_new_product(&self) -> NewProduct {
        NewProduct {
            sku: self.sku.trim().to_string(),
            name: self.name.trim().to_string(),
            description: self.description.clone(),
            unit_price: parse_price(&self.unit_price),
            cost_price: parse_price(&self.cost_price),
            min_stock_level: parse_level(&self.min_stock_level, DEFAULT_MIN_STOCK_LEVEL),
            max_stock_level: parse_level(&self.max_stock_level, DEFAULT_MAX_STOCK_LEVEL),
            reorder_point: parse_level(&self.reorder_point, DEFAULT_REORDER_POINT),
        }
    }
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

// A zero level counts as missing, so it takes the default as well.
fn parse_level(raw: &str, default: i32) -> i32 {
    match raw.trim().parse::<i32>() {
        Ok(v) if v != 0 => v,
        _ => default,
    }
}
