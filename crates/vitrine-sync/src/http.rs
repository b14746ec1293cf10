//! HTTP implementation of the cart endpoints.

use crate::api::{AddToCartRequest, CartApi};
use crate::error::{ApiError, ErrorBody};
use async_trait::async_trait;
use http::StatusCode;
use serde::de::DeserializeOwned;
use vitrine_cart::{CartLine, CartSnapshot, LineKey};

/// The cart endpoint routes, relative to a configurable root.
#[derive(Debug, Clone)]
pub struct StoreRoutes {
    root: String,
}

impl Default for StoreRoutes {
    fn default() -> Self {
        Self {
            root: "/".to_string(),
        }
    }
}

impl StoreRoutes {
    /// Routes under a different root, e.g. `https://shop.example.com/`.
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        let mut root = root.into();
        if !root.ends_with('/') {
            root.push('/');
        }
        self.root = root;
        self
    }

    /// Cart read endpoint.
    pub fn cart_url(&self) -> String {
        format!("{}cart.js", self.root)
    }

    /// Line quantity-change endpoint.
    pub fn change_url(&self) -> String {
        format!("{}cart/change.js", self.root)
    }

    /// Cart attribute/note update endpoint.
    pub fn update_url(&self) -> String {
        format!("{}cart/update.js", self.root)
    }

    /// Add-to-cart endpoint.
    pub fn add_url(&self) -> String {
        format!("{}cart/add.js", self.root)
    }
}

/// `reqwest`-backed [`CartApi`].
///
/// Requests are single-shot: a failure surfaces as an [`ApiError`] and
/// retrying is the shopper's decision, not the client's.
pub struct HttpCartApi {
    client: reqwest::Client,
    routes: StoreRoutes,
}

impl HttpCartApi {
    pub fn new(routes: StoreRoutes) -> Self {
        Self {
            client: reqwest::Client::new(),
            routes,
        }
    }

    /// Use an externally configured client (proxies, timeouts).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Headers the storefront endpoints expect on mutating requests.
    fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .post(url)
            .header(http::header::ACCEPT, "application/json")
            .header("X-Requested-With", "XMLHttpRequest")
    }
}

/// Decode a response, mapping non-success statuses to
/// [`ApiError::Application`] via the `{status, description}` error body.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(application_error(status, &body));
    }
    serde_json::from_str(&body).map_err(|error| ApiError::Decode(error.to_string()))
}

/// Parse the endpoint's error body; an unparseable body falls back to
/// the HTTP status line.
fn application_error(status: StatusCode, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(body) if !body.description.is_empty() => ApiError::from_error_body(body),
        _ => ApiError::Application {
            status: status.as_u16(),
            description: status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string(),
        },
    }
}

#[async_trait]
impl CartApi for HttpCartApi {
    async fn fetch_cart(&self) -> Result<CartSnapshot, ApiError> {
        let url = self.routes.cart_url();
        tracing::debug!(%url, "fetching cart");
        let response = self
            .client
            .get(&url)
            .header(http::header::ACCEPT, "application/json")
            .send()
            .await?;
        decode(response).await
    }

    async fn change_line(&self, key: &LineKey, quantity: u32) -> Result<CartSnapshot, ApiError> {
        let url = self.routes.change_url();
        tracing::debug!(%url, key = %key, quantity, "changing line quantity");
        let response = self
            .post(&url)
            .json(&serde_json::json!({ "id": key, "quantity": quantity }))
            .send()
            .await?;
        decode(response).await
    }

    async fn update_note(&self, note: &str) -> Result<CartSnapshot, ApiError> {
        let url = self.routes.update_url();
        tracing::debug!(%url, "updating cart note");
        let response = self
            .post(&url)
            .json(&serde_json::json!({ "note": note }))
            .send()
            .await?;
        decode(response).await
    }

    async fn add_to_cart(&self, request: &AddToCartRequest) -> Result<CartLine, ApiError> {
        let url = self.routes.add_url();
        tracing::debug!(%url, id = %request.id, quantity = request.quantity, "adding to cart");
        // The add endpoint takes a form body, unlike the JSON mutators.
        let response = self.post(&url).form(request).send().await?;
        decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_routes() {
        let routes = StoreRoutes::default();
        assert_eq!(routes.cart_url(), "/cart.js");
        assert_eq!(routes.change_url(), "/cart/change.js");
        assert_eq!(routes.update_url(), "/cart/update.js");
        assert_eq!(routes.add_url(), "/cart/add.js");
    }

    #[test]
    fn test_with_root_normalizes_trailing_slash() {
        let routes = StoreRoutes::default().with_root("https://shop.example.com");
        assert_eq!(routes.cart_url(), "https://shop.example.com/cart.js");
        assert_eq!(
            routes.change_url(),
            "https://shop.example.com/cart/change.js"
        );
    }

    #[test]
    fn test_application_error_prefers_body_description() {
        let error = application_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"status": 422, "description": "Out of stock"}"#,
        );
        assert_eq!(error.description(), "Out of stock");
    }

    #[test]
    fn test_application_error_falls_back_to_status_line() {
        let error = application_error(StatusCode::NOT_FOUND, "<html>gone</html>");
        match error {
            ApiError::Application {
                status,
                description,
            } => {
                assert_eq!(status, 404);
                assert_eq!(description, "Not Found");
            }
            other => panic!("expected application error, got {other:?}"),
        }
    }
}
