//! # HTTP Catalog Client
//!
//! `HttpCatalog` talks to a DummyJSON-compatible REST API.
//!
//! ## Endpoints
//! ```text
//! ┌──────────────────────────────┬──────────────────────────────────────────┐
//! │ Method                       │ Request                                  │
//! ├──────────────────────────────┼──────────────────────────────────────────┤
//! │ product(id)                  │ GET /products/{id}                       │
//! │ products(limit, skip)        │ GET /products?limit={limit}&skip={skip}  │
//! │ products_by_category(slug)   │ GET /products/category/{slug, encoded}   │
//! │ search(query)                │ GET /products/search?q={query}           │
//! │ categories()                 │ GET /products/categories                 │
//! └──────────────────────────────┴──────────────────────────────────────────┘
//! ```
//!
//! ## Failure Mapping
//! ```text
//! send() fails            → CatalogError::Transport
//! status not 2xx          → CatalogError::Status
//! body read fails         → CatalogError::Transport
//! body isn't expected JSON → CatalogError::Decode
//! ```

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

use storefront_core::ProductId;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{parse_categories, CatalogProduct, Category, ProductsResponse};

/// Public catalog used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Page size of the product listing.
pub const DEFAULT_PAGE_SIZE: u32 = 30;

// =============================================================================
// Configuration
// =============================================================================

/// Catalog client configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = CatalogConfig::new("http://localhost:8080")
///     .timeout(Duration::from_secs(3));
/// ```
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL without a trailing slash, e.g. `"https://dummyjson.com"`.
    pub base_url: String,

    /// Whole-request timeout.
    /// Default: 10 seconds
    pub timeout: Duration,
}

impl CatalogConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        CatalogConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig::new(DEFAULT_BASE_URL)
    }
}

// =============================================================================
// Client
// =============================================================================

/// HTTP client for the product catalog.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    config: CatalogConfig,
    http: Client,
}

impl HttpCatalog {
    /// Builds a client from the given configuration.
    ///
    /// ## Errors
    /// `CatalogError::Config` if the base URL doesn't parse or the TLS
    /// backend can't be initialised.
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        Url::parse(&config.base_url)
            .map_err(|e| CatalogError::Config(format!("invalid base URL '{}': {e}", config.base_url)))?;

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("storefront/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CatalogError::Config(e.to_string()))?;

        Ok(HttpCatalog { config, http })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Fetches a single product.
    pub async fn product(&self, id: ProductId) -> CatalogResult<CatalogProduct> {
        self.get_json(self.url(&format!("/products/{id}"), &[])?, &[])
            .await
    }

    /// Fetches one page of the product listing.
    pub async fn products(&self, limit: u32, skip: u32) -> CatalogResult<ProductsResponse> {
        self.get_json(
            self.url("/products", &[])?,
            &[("limit", limit.to_string()), ("skip", skip.to_string())],
        )
        .await
    }

    /// Fetches the products of one category.
    ///
    /// The slug is sent as one percent-encoded path segment.
    pub async fn products_by_category(&self, slug: &str) -> CatalogResult<ProductsResponse> {
        self.get_json(self.url("/products/category", &[slug])?, &[])
            .await
    }

    /// Full-text product search on the catalog side.
    pub async fn search(&self, query: &str) -> CatalogResult<ProductsResponse> {
        self.get_json(self.url("/products/search", &[])?, &[("q", query.to_string())])
            .await
    }

    /// Lists product categories.
    ///
    /// See [`parse_categories`] for the accepted body shapes.
    pub async fn categories(&self) -> CatalogResult<Vec<Category>> {
        let body: Value = self
            .get_json(self.url("/products/categories", &[])?, &[])
            .await?;
        Ok(parse_categories(body))
    }

    /// Absolute URL for an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// `endpoint(path)` with `segments` appended, each encoded as a single
    /// path segment (`/` becomes `%2F`).
    fn url(&self, path: &str, segments: &[&str]) -> CatalogResult<Url> {
        let endpoint = self.endpoint(path);
        let mut url = Url::parse(&endpoint)
            .map_err(|e| CatalogError::Config(format!("invalid catalog URL '{endpoint}': {e}")))?;

        if !segments.is_empty() {
            url.path_segments_mut()
                .map_err(|()| CatalogError::Config(format!("catalog URL '{endpoint}' has no path")))?
                .extend(segments);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> CatalogResult<T> {
        debug!(url = %url, ?query, "Catalog request");

        let response = self
            .http
            .get(url.clone())
            .query(query)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "Catalog request failed");
                CatalogError::transport(url.as_str(), e)
            })?;

        let status = response.status();
        debug!(url = %url, status = status.as_u16(), "Catalog response");

        if !status.is_success() {
            error!(url = %url, status = status.as_u16(), "Catalog returned an error status");
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: url.into(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CatalogError::transport(url.as_str(), e))?;

        serde_json::from_slice(&bytes).map_err(|e| {
            error!(url = %url, error = %e, "Catalog response could not be decoded");
            CatalogError::decode(url.as_str(), e)
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use storefront_core::Money;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serves exactly one HTTP response and hands back the request line.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();

            request.lines().next().unwrap_or_default().to_string()
        });

        (base, handle)
    }

    fn client(base: &str) -> HttpCatalog {
        HttpCatalog::new(CatalogConfig::new(base).timeout(Duration::from_secs(5))).unwrap()
    }

    #[test]
    fn test_config_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let catalog = client("https://dummyjson.com/");
        assert_eq!(
            catalog.endpoint("/products/42"),
            "https://dummyjson.com/products/42"
        );
    }

    #[tokio::test]
    async fn test_fetch_product() {
        let (base, request) = serve_once(
            "200 OK",
            r#"{"id": 42, "title": "Shirt", "price": 19.99, "discountPercentage": 10, "thumbnail": "t.png"}"#,
        )
        .await;

        let details = client(&base).fetch_product(ProductId::new(42)).await.unwrap();

        assert_eq!(details.title, "Shirt");
        assert_eq!(details.price, Money::new(1999, 2));
        assert_eq!(request.await.unwrap(), "GET /products/42 HTTP/1.1");
    }

    #[tokio::test]
    async fn test_products_sends_paging() {
        let (base, request) =
            serve_once("200 OK", r#"{"products": [], "total": 0, "skip": 30, "limit": 30}"#).await;

        let page = client(&base).products(30, 30).await.unwrap();

        assert!(page.products.is_empty());
        assert_eq!(page.skip, 30);
        assert_eq!(
            request.await.unwrap(),
            "GET /products?limit=30&skip=30 HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn test_search_encodes_query() {
        let (base, request) =
            serve_once("200 OK", r#"{"products": [], "total": 0, "skip": 0, "limit": 0}"#).await;

        client(&base).search("red shoes&co").await.unwrap();

        assert_eq!(
            request.await.unwrap(),
            "GET /products/search?q=red+shoes%26co HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn test_category_slug_is_one_encoded_segment() {
        let (base, request) =
            serve_once("200 OK", r#"{"products": [], "total": 0, "skip": 0, "limit": 0}"#).await;
        client(&base).products_by_category("home decoration").await.unwrap();
        assert_eq!(
            request.await.unwrap(),
            "GET /products/category/home%20decoration HTTP/1.1"
        );

        let (base, request) =
            serve_once("200 OK", r#"{"products": [], "total": 0, "skip": 0, "limit": 0}"#).await;
        client(&base).products_by_category("../carts?x=1").await.unwrap();
        assert_eq!(
            request.await.unwrap(),
            "GET /products/category/..%2Fcarts%3Fx=1 HTTP/1.1"
        );
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let err = HttpCatalog::new(CatalogConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[tokio::test]
    async fn test_categories() {
        let (base, _request) = serve_once("200 OK", r#"["beauty", "groceries"]"#).await;

        let categories = client(&base).categories().await.unwrap();
        let slugs: Vec<_> = categories.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["beauty", "groceries"]);
    }

    #[tokio::test]
    async fn test_error_status() {
        let (base, _request) =
            serve_once("404 Not Found", r#"{"message": "Product with id '99' not found"}"#).await;

        let err = client(&base).product(ProductId::new(99)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_undecodable_body() {
        let (base, _request) = serve_once("200 OK", "<html>maintenance</html>").await;

        let err = client(&base).product(ProductId::new(1)).await.unwrap_err();
        assert!(matches!(err, CatalogError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport() {
        // Bind then drop to get a port nothing listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = client(&base).product(ProductId::new(1)).await.unwrap_err();
        assert!(matches!(err, CatalogError::Transport { .. }));
    }
}
