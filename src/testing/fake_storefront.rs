use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use serde_json::Map;

use crate::domain::{
    AdminLoginRequest, AppError, AuthResponse, AuthSession, AuthUser, Cart, CartItem, Category,
    CompatibilityVerdict, LoginRequest, NamedConfiguration, NewReview, NewTicket, Product,
    ProductFilter, PromoApplied, RegisterRequest, Review, ReviewStats, SelectionMap, StockStatus,
    SupportTicket,
};
use crate::ports::{
    AuthClient, CartClient, CatalogClient, ConfiguratorClient, ProductQuery, ReviewClient,
    SupportClient,
};

/// Every backend interaction the fake saw, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    ListProducts(ProductQuery),
    GetProduct(String),
    ActiveFilters,
    Categories,
    Validate(SelectionMap),
    Save { name: String, selection: SelectionMap },
    MyConfigurations,
    Login(String),
    Register(String),
    AdminLogin,
    Cart,
    AddItem { product_id: String, quantity: u32 },
    RemoveItem(String),
    UpdateQuantity { product_id: String, quantity: u32 },
    ApplyPromo(String),
    Reviews(String),
    ReviewStats(String),
    AddReview(NewReview),
    Tickets,
    CreateTicket(NewTicket),
}

/// In-memory storefront backend recording calls instead of issuing requests.
#[derive(Clone, Default)]
pub struct FakeStorefront {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    products: Vec<Product>,
    failing_categories: HashSet<Category>,
    verdict: Option<CompatibilityVerdict>,
    fail_validation: bool,
    fail_save: bool,
    cart: Cart,
}

impl FakeStorefront {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn failing_category(mut self, category: Category) -> Self {
        self.failing_categories.insert(category);
        self
    }

    pub fn with_verdict(mut self, verdict: CompatibilityVerdict) -> Self {
        self.verdict = Some(verdict);
        self
    }

    pub fn failing_validation(mut self) -> Self {
        self.fail_validation = true;
        self
    }

    pub fn failing_save(mut self) -> Self {
        self.fail_save = true;
        self
    }

    pub fn with_cart(mut self, cart: Cart) -> Self {
        self.cart = cart;
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn auth_response(&self, email: &str) -> AuthResponse {
        AuthResponse {
            access_token: format!("token-{email}"),
            token_type: "bearer".to_string(),
            user: AuthUser {
                id: "u1".to_string(),
                username: email.split('@').next().unwrap_or(email).to_string(),
                email: email.to_string(),
                is_admin: false,
            },
        }
    }
}

/// Minimal in-stock product for tests.
pub fn product(id: &str, category: Category, price: f64) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Produit {id}"),
        category,
        brand: "Test".to_string(),
        price,
        description: String::new(),
        stock_quantity: 5,
        stock_status: StockStatus::InStock,
        specifications: Map::new(),
        compatibility_requirements: Map::new(),
    }
}

fn server_error() -> AppError {
    AppError::Http { status: 500, message: "Internal Server Error".to_string() }
}

impl CatalogClient for FakeStorefront {
    fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, AppError> {
        self.record(RecordedCall::ListProducts(query.clone()));
        if query.category.is_some_and(|c| self.failing_categories.contains(&c)) {
            return Err(AppError::Transport("connection reset".to_string()));
        }
        let search = query.search.as_deref().map(str::to_lowercase);
        Ok(self
            .products
            .iter()
            .filter(|p| query.category.is_none_or(|c| p.category == c))
            .filter(|p| {
                search.as_deref().is_none_or(|s| {
                    p.name.to_lowercase().contains(s) || p.brand.to_lowercase().contains(s)
                })
            })
            .cloned()
            .collect())
    }

    fn get_product(&self, product_id: &str) -> Result<Product, AppError> {
        self.record(RecordedCall::GetProduct(product_id.to_string()));
        self.products.iter().find(|p| p.id == product_id).cloned().ok_or_else(|| AppError::Http {
            status: 404,
            message: "Product not found".to_string(),
        })
    }

    fn active_filters(&self) -> Result<Vec<ProductFilter>, AppError> {
        self.record(RecordedCall::ActiveFilters);
        Ok(Vec::new())
    }
}

impl ConfiguratorClient for FakeStorefront {
    fn categories(&self) -> Result<Vec<Category>, AppError> {
        self.record(RecordedCall::Categories);
        Ok(Category::ALL.to_vec())
    }

    fn validate(
        &self,
        _session: Option<&AuthSession>,
        selection: &SelectionMap,
    ) -> Result<CompatibilityVerdict, AppError> {
        self.record(RecordedCall::Validate(selection.clone()));
        if self.fail_validation {
            return Err(server_error());
        }
        Ok(self.verdict.clone().unwrap_or(CompatibilityVerdict {
            compatible: true,
            issues: Vec::new(),
            total_price: None,
        }))
    }

    fn save(
        &self,
        _session: &AuthSession,
        name: &str,
        selection: &SelectionMap,
    ) -> Result<NamedConfiguration, AppError> {
        self.record(RecordedCall::Save { name: name.to_string(), selection: selection.clone() });
        if self.fail_save {
            return Err(server_error());
        }
        Ok(NamedConfiguration {
            id: "cfg-1".to_string(),
            user_id: "u1".to_string(),
            name: name.to_string(),
            components: selection.clone(),
            total_price: 0.0,
            compatibility_status: true,
            compatibility_issues: Vec::new(),
            created_at: None,
        })
    }

    fn my_configurations(
        &self,
        _session: &AuthSession,
    ) -> Result<Vec<NamedConfiguration>, AppError> {
        self.record(RecordedCall::MyConfigurations);
        Ok(Vec::new())
    }
}

impl AuthClient for FakeStorefront {
    fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AppError> {
        self.record(RecordedCall::Login(request.email.clone()));
        Ok(self.auth_response(&request.email))
    }

    fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AppError> {
        self.record(RecordedCall::Register(request.email.clone()));
        Ok(self.auth_response(&request.email))
    }

    fn admin_login(&self, _request: &AdminLoginRequest) -> Result<AuthResponse, AppError> {
        self.record(RecordedCall::AdminLogin);
        let mut response = self.auth_response("admin@infotech.ma");
        response.user.is_admin = true;
        Ok(response)
    }
}

impl CartClient for FakeStorefront {
    fn cart(&self, _session: &AuthSession) -> Result<Cart, AppError> {
        self.record(RecordedCall::Cart);
        Ok(self.cart.clone())
    }

    fn add_item(
        &self,
        _session: &AuthSession,
        product_id: &str,
        quantity: u32,
    ) -> Result<(), AppError> {
        self.record(RecordedCall::AddItem { product_id: product_id.to_string(), quantity });
        Ok(())
    }

    fn remove_item(&self, _session: &AuthSession, product_id: &str) -> Result<(), AppError> {
        self.record(RecordedCall::RemoveItem(product_id.to_string()));
        Ok(())
    }

    fn update_quantity(
        &self,
        _session: &AuthSession,
        product_id: &str,
        quantity: u32,
    ) -> Result<(), AppError> {
        self.record(RecordedCall::UpdateQuantity { product_id: product_id.to_string(), quantity });
        Ok(())
    }

    fn apply_promo(&self, _session: &AuthSession, code: &str) -> Result<PromoApplied, AppError> {
        self.record(RecordedCall::ApplyPromo(code.to_string()));
        Ok(PromoApplied {
            message: "Promo code applied".to_string(),
            discount: self.cart.total * 0.1,
        })
    }
}

impl ReviewClient for FakeStorefront {
    fn reviews(&self, product_id: &str) -> Result<Vec<Review>, AppError> {
        self.record(RecordedCall::Reviews(product_id.to_string()));
        Ok(Vec::new())
    }

    fn review_stats(&self, product_id: &str) -> Result<ReviewStats, AppError> {
        self.record(RecordedCall::ReviewStats(product_id.to_string()));
        Ok(ReviewStats::default())
    }

    fn add_review(&self, _session: &AuthSession, review: &NewReview) -> Result<(), AppError> {
        self.record(RecordedCall::AddReview(review.clone()));
        Ok(())
    }
}

impl SupportClient for FakeStorefront {
    fn tickets(&self, _session: &AuthSession) -> Result<Vec<SupportTicket>, AppError> {
        self.record(RecordedCall::Tickets);
        Ok(Vec::new())
    }

    fn create_ticket(&self, _session: &AuthSession, ticket: &NewTicket) -> Result<(), AppError> {
        self.record(RecordedCall::CreateTicket(ticket.clone()));
        Ok(())
    }
}

/// One-line cart fixture.
pub fn cart_with(product_id: &str, quantity: u32, price: f64) -> Cart {
    let item = CartItem { product_id: product_id.to_string(), quantity, price };
    Cart { total: item.subtotal(), items: vec![item], ..Cart::default() }
}
