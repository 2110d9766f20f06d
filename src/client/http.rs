//! reqwest implementation of [`InventoryApi`].

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

use super::{ClientError, InventoryApi};
use crate::models::{NewProduct, Product, ProductListResponse};

/// Configuration for the inventory backend client
#[derive(Debug, Clone)]
pub struct InventoryClientConfig {
    /// Base URL of the backend API (e.g., "http://localhost:8080/api")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for InventoryClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            request_timeout_ms: 5000,
        }
    }
}

/// HTTP client for the inventory backend
pub struct HttpInventoryClient {
    client: Client,
    base_url: String,
}

impl HttpInventoryClient {
    pub fn new(config: InventoryClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL for listing products, switching to the search endpoint when a
    /// non-empty term is given
    pub fn products_url(&self, search: Option<&str>) -> String {
        match search.filter(|term| !term.is_empty()) {
            Some(term) => format!(
                "{}/products/search?searchTerm={}",
                self.base_url,
                urlencoding::encode(term)
            ),
            None => format!("{}/products", self.base_url),
        }
    }

    /// Fail with the response body as message unless the status is 2xx
    async fn ensure_success(response: Response) -> Result<Response, ClientError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

fn classify(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Timeout
    } else if e.is_connect() {
        ClientError::Unavailable
    } else if e.is_decode() {
        ClientError::Decode(e.to_string())
    } else {
        ClientError::Request(e)
    }
}

#[async_trait]
impl InventoryApi for HttpInventoryClient {
    async fn product_count(&self) -> Result<u64, ClientError> {
        let url = format!("{}/products/count", self.base_url);
        tracing::debug!(%url, "Fetching product count");

        let response = self.client.get(&url).send().await.map_err(classify)?;
        let response = Self::ensure_success(response).await?;

        response.json::<u64>().await.map_err(classify)
    }

    async fn list_products(&self, search: Option<&str>) -> Result<Vec<Product>, ClientError> {
        let url = self.products_url(search);
        tracing::debug!(%url, "Fetching products");

        let response = self.client.get(&url).send().await.map_err(classify)?;
        let response = Self::ensure_success(response).await?;

        let body: ProductListResponse = response.json().await.map_err(classify)?;
        Ok(body.into_products())
    }

    async fn create_product(&self, product: &NewProduct) -> Result<(), ClientError> {
        let url = format!("{}/products", self.base_url);
        tracing::debug!(%url, sku = %product.sku, "Creating product");

        let response = self
            .client
            .post(&url)
            .json(product)
            .send()
            .await
            .map_err(classify)?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn delete_product(&self, id: u64) -> Result<(), ClientError> {
        let url = format!("{}/products/{}", self.base_url, id);
        tracing::debug!(%url, "Deleting product");

        let response = self.client.delete(&url).send().await.map_err(classify)?;

        Self::ensure_success(response).await?;
        Ok(())
    }
}
