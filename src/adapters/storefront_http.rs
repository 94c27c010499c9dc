//! Storefront API client implementation using reqwest.

use std::time::Duration;

use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{
    AdminLoginRequest, ApiConfig, AppError, AuthResponse, AuthSession, Cart, Category,
    CompatibilityVerdict, LoginRequest, NamedConfiguration, NewReview, NewTicket, Product,
    ProductFilter, PromoApplied, RegisterRequest, Review, ReviewStats, SaveConfigurationRequest,
    SelectionMap, SupportTicket,
};
use crate::ports::{
    AuthClient, CartClient, CatalogClient, ConfiguratorClient, ProductQuery, ReviewClient,
    SupportClient,
};

const DEFAULT_STATUS_MESSAGE: &str = "Storefront API request failed";

/// HTTP transport for the storefront backend.
///
/// One request per call; nothing is retried.
#[derive(Clone)]
pub struct HttpStorefrontClient {
    api: ApiConfig,
    client: Client,
}

impl std::fmt::Debug for HttpStorefrontClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpStorefrontClient")
            .field("base_url", &self.api.base_url)
            .field("timeout_secs", &self.api.timeout_secs)
            .finish()
    }
}

impl HttpStorefrontClient {
    pub fn new(api: &ApiConfig) -> Result<Self, AppError> {
        api.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api: api.clone(), client })
    }

    pub fn base_url(&self) -> &Url {
        &self.api.base_url
    }

    fn url(&self, path: &str, query: &[(String, String)]) -> Result<Url, AppError> {
        let mut url = self.api.endpoint(path)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }

    fn request(
        &self,
        method: Method,
        url: Url,
        session: Option<&AuthSession>,
    ) -> RequestBuilder {
        let builder = self.client.request(method, url).header(ACCEPT, "application/json");
        match session {
            Some(session) => builder.header(AUTHORIZATION, format!("Bearer {}", session.token())),
            None => builder,
        }
    }

    /// Send and return the raw body of a successful response.
    fn execute(&self, builder: RequestBuilder) -> Result<String, AppError> {
        let request = builder
            .build()
            .map_err(|e| AppError::Transport(format!("invalid request: {}", e)))?;
        let method = request.method().clone();
        let url = request.url().clone();
        tracing::debug!(%method, %url, "storefront request");

        let response = self.client.execute(request).map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "storefront request failed");
            AppError::Transport(e.to_string())
        })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            return Ok(body_text);
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });
        tracing::warn!(%method, %url, status = status.as_u16(), %message, "storefront API error");

        Err(AppError::Http { status: status.as_u16(), message })
    }

    fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, AppError> {
        let body = self.execute(builder)?;
        serde_json::from_str(&body).map_err(|e| AppError::Decode(e.to_string()))
    }

    fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
        session: Option<&AuthSession>,
    ) -> Result<T, AppError> {
        let url = self.url(path, query)?;
        self.fetch(self.request(Method::GET, url, session))
    }

    fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        session: Option<&AuthSession>,
    ) -> Result<T, AppError> {
        let url = self.url(path, &[])?;
        self.fetch(self.request(Method::POST, url, session).json(body))
    }

    /// Call an endpoint whose success body is only an acknowledgement message.
    fn call(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        session: &AuthSession,
    ) -> Result<(), AppError> {
        let url = self.url(path, query)?;
        self.execute(self.request(method, url, Some(session))).map(|_| ())
    }
}

/// FastAPI reports failures as `{"detail": "..."}`.
fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(detail) = parsed.get("detail") {
        return match detail {
            serde_json::Value::String(msg) => Some(msg.clone()),
            other => Some(other.to_string()),
        };
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

fn encode_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes()).collect::<String>().replace('+', "%20")
}

fn pair(key: &str, value: impl ToString) -> (String, String) {
    (key.to_string(), value.to_string())
}

#[derive(Debug, Deserialize)]
struct CategoriesResponse {
    categories: Vec<Category>,
}

impl CatalogClient for HttpStorefrontClient {
    fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, AppError> {
        self.get("products", &query.to_pairs(), None)
    }

    fn get_product(&self, product_id: &str) -> Result<Product, AppError> {
        self.get(&format!("products/{}", encode_segment(product_id)), &[], None)
    }

    fn active_filters(&self) -> Result<Vec<ProductFilter>, AppError> {
        self.get("product-filters", &[], None)
    }
}

impl ConfiguratorClient for HttpStorefrontClient {
    fn categories(&self) -> Result<Vec<Category>, AppError> {
        let response: CategoriesResponse = self.get("configurator/categories", &[], None)?;
        Ok(response.categories)
    }

    fn validate(
        &self,
        session: Option<&AuthSession>,
        selection: &SelectionMap,
    ) -> Result<CompatibilityVerdict, AppError> {
        self.post_json("configurator/validate", selection, session)
    }

    fn save(
        &self,
        session: &AuthSession,
        name: &str,
        selection: &SelectionMap,
    ) -> Result<NamedConfiguration, AppError> {
        let body = SaveConfigurationRequest { name, components: selection };
        self.post_json("configurator/save", &body, Some(session))
    }

    fn my_configurations(
        &self,
        session: &AuthSession,
    ) -> Result<Vec<NamedConfiguration>, AppError> {
        self.get("configurator/my-configs", &[], Some(session))
    }
}

impl AuthClient for HttpStorefrontClient {
    fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AppError> {
        self.post_json("login", request, None)
    }

    fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AppError> {
        self.post_json("register", request, None)
    }

    fn admin_login(&self, request: &AdminLoginRequest) -> Result<AuthResponse, AppError> {
        self.post_json("admin/login", request, None)
    }
}

impl CartClient for HttpStorefrontClient {
    fn cart(&self, session: &AuthSession) -> Result<Cart, AppError> {
        self.get("cart", &[], Some(session))
    }

    fn add_item(
        &self,
        session: &AuthSession,
        product_id: &str,
        quantity: u32,
    ) -> Result<(), AppError> {
        let query = [pair("product_id", product_id), pair("quantity", quantity)];
        self.call(Method::POST, "cart/add", &query, session)
    }

    fn remove_item(&self, session: &AuthSession, product_id: &str) -> Result<(), AppError> {
        let path = format!("cart/remove/{}", encode_segment(product_id));
        self.call(Method::DELETE, &path, &[], session)
    }

    fn update_quantity(
        &self,
        session: &AuthSession,
        product_id: &str,
        quantity: u32,
    ) -> Result<(), AppError> {
        let path = format!("cart/update/{}", encode_segment(product_id));
        self.call(Method::PUT, &path, &[pair("quantity", quantity)], session)
    }

    fn apply_promo(&self, session: &AuthSession, code: &str) -> Result<PromoApplied, AppError> {
        let url = self.url("cart/apply-promo", &[pair("code", code)])?;
        self.fetch(self.request(Method::POST, url, Some(session)))
    }
}

impl ReviewClient for HttpStorefrontClient {
    fn reviews(&self, product_id: &str) -> Result<Vec<Review>, AppError> {
        self.get(&format!("reviews/{}", encode_segment(product_id)), &[], None)
    }

    fn review_stats(&self, product_id: &str) -> Result<ReviewStats, AppError> {
        self.get(&format!("reviews/{}/stats", encode_segment(product_id)), &[], None)
    }

    fn add_review(&self, session: &AuthSession, review: &NewReview) -> Result<(), AppError> {
        let url = self.url("reviews", &[])?;
        self.execute(self.request(Method::POST, url, Some(session)).json(review)).map(|_| ())
    }
}

impl SupportClient for HttpStorefrontClient {
    fn tickets(&self, session: &AuthSession) -> Result<Vec<SupportTicket>, AppError> {
        self.get("support/tickets", &[], Some(session))
    }

    fn create_ticket(&self, session: &AuthSession, ticket: &NewTicket) -> Result<(), AppError> {
        let url = self.url("support/tickets", &[])?;
        self.execute(self.request(Method::POST, url, Some(session)).json(ticket)).map(|_| ())
    }
}
