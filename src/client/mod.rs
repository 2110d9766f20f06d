//! Inventory Backend Client
//!
//! The dashboard talks to the inventory REST backend through the
//! [`InventoryApi`] trait:
//!
//! - `GET /products/count` - number of active products
//! - `GET /products` / `GET /products/search?searchTerm=...` - product list
//! - `POST /products` - create a product
//! - `DELETE /products/{id}` - delete a product

mod http;

pub use http::{HttpInventoryClient, InventoryClientConfig};

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewProduct, Product};

/// Operations the dashboard needs from the inventory backend
#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// Total number of active products
    async fn product_count(&self) -> Result<u64, ClientError>;

    /// All products, or only those matching a non-empty search term
    async fn list_products(&self, search: Option<&str>) -> Result<Vec<Product>, ClientError>;

    /// Create a product
    async fn create_product(&self, product: &NewProduct) -> Result<(), ClientError>;

    /// Delete a product by id
    async fn delete_product(&self, id: u64) -> Result<(), ClientError>;
}

/// Errors that can occur when talking to the inventory backend
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Inventory backend unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
}

impl ClientError {
    /// True when the backend never produced a usable answer: it could not
    /// be reached, timed out, or sent a body we cannot read. The dashboard
    /// falls back to demo data in exactly these cases.
    pub fn is_transport(&self) -> bool {
        !matches!(self, ClientError::Api { .. })
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory backend used by controller and router tests.

    use super::*;
    use std::sync::Mutex;

    /// How the fake backend answers
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum Mode {
        Online,
        Offline,
        Rejecting,
    }

    pub struct FakeInventory {
        pub mode: Mutex<Mode>,
        pub products: Mutex<Vec<Product>>,
        pub searches: Mutex<Vec<Option<String>>>,
        pub created: Mutex<Vec<NewProduct>>,
    }

    impl FakeInventory {
        pub fn new(mode: Mode, products: Vec<Product>) -> Self {
            Self {
                mode: Mutex::new(mode),
                products: Mutex::new(products),
                searches: Mutex::new(Vec::new()),
                created: Mutex::new(Vec::new()),
            }
        }

        pub fn set_mode(&self, mode: Mode) {
            *self.mode.lock().unwrap() = mode;
        }

        fn check(&self) -> Result<(), ClientError> {
            match *self.mode.lock().unwrap() {
                Mode::Online => Ok(()),
                Mode::Offline => Err(ClientError::Unavailable),
                Mode::Rejecting => Err(ClientError::Api {
                    status: 400,
                    message: "SKU already exists".to_string(),
                }),
            }
        }
    }

    #[async_trait]
    impl InventoryApi for FakeInventory {
        async fn product_count(&self) -> Result<u64, ClientError> {
            self.check()?;
            Ok(self.products.lock().unwrap().len() as u64)
        }

        async fn list_products(&self, search: Option<&str>) -> Result<Vec<Product>, ClientError> {
            self.searches.lock().unwrap().push(search.map(str::to_string));
            self.check()?;
            let products = self.products.lock().unwrap();
            Ok(match search {
                Some(term) => products
                    .iter()
                    .filter(|p| p.name.to_lowercase().contains(&term.to_lowercase()))
                    .cloned()
                    .collect(),
                None => products.clone(),
            })
        }

        async fn create_product(&self, product: &NewProduct) -> Result<(), ClientError> {
            self.check()?;
            self.created.lock().unwrap().push(product.clone());
            let mut products = self.products.lock().unwrap();
            let id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
            let mut created = product.clone().into_demo_product(id);
            created.category = None;
            products.push(created);
            Ok(())
        }

        async fn delete_product(&self, id: u64) -> Result<(), ClientError> {
            self.check()?;
            self.products.lock().unwrap().retain(|p| p.id != id);
            Ok(())
        }
    }
}
