//! Storefront route table and a small observable router.

use std::fmt;

/// A storefront page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    AdminLogin,
    Products,
    ProductDetail(String),
    Configurator,
    Cart,
    Admin,
    Support,
    NotFound(String),
}

impl Route {
    /// Resolve a path. The query string and a trailing slash are ignored.
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match path {
            "/" => Route::Home,
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/admin-login" => Route::AdminLogin,
            "/products" => Route::Products,
            "/configurator" => Route::Configurator,
            "/cart" => Route::Cart,
            "/admin" => Route::Admin,
            "/support" => Route::Support,
            _ => match path.strip_prefix("/product/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Route::ProductDetail(id.to_string()),
                _ => Route::NotFound(path.to_string()),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::AdminLogin => "/admin-login".to_string(),
            Route::Products => "/products".to_string(),
            Route::ProductDetail(id) => format!("/product/{id}"),
            Route::Configurator => "/configurator".to_string(),
            Route::Cart => "/cart".to_string(),
            Route::Admin => "/admin".to_string(),
            Route::Support => "/support".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Pages that only make sense with a logged-in user.
    pub fn requires_session(&self) -> bool {
        matches!(self, Route::Cart | Route::Support | Route::Admin)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Accueil",
            Route::Login => "Connexion",
            Route::Register => "Inscription",
            Route::AdminLogin => "Connexion administrateur",
            Route::Products => "Produits",
            Route::ProductDetail(_) => "Détail du produit",
            Route::Configurator => "Configurateur PC",
            Route::Cart => "Panier",
            Route::Admin => "Administration",
            Route::Support => "Support",
            Route::NotFound(_) => "Page non trouvée",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Handle returned by [`Router::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

type Listener = Box<dyn FnMut(&Route)>;

/// Owns the current route and notifies subscribers on every navigation.
pub struct Router {
    current: Route,
    history: Vec<Route>,
    next_id: usize,
    subscribers: Vec<(SubscriptionId, Listener)>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

impl Router {
    pub fn new(initial: Route) -> Self {
        Self { current: initial, history: Vec::new(), next_id: 0, subscribers: Vec::new() }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Route) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Move to `path` and notify every subscriber, in subscription order.
    pub fn navigate(&mut self, path: &str) -> &Route {
        let route = Route::parse(path);
        tracing::debug!(%route, "navigate");
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
        self.notify();
        &self.current
    }

    /// Return to the previous route, if any.
    pub fn back(&mut self) -> Option<&Route> {
        let previous = self.history.pop()?;
        self.current = previous;
        self.notify();
        Some(&self.current)
    }

    fn notify(&mut self) {
        let current = &self.current;
        for (_, listener) in self.subscribers.iter_mut() {
            listener(current);
        }
    }
}
