//! Authenticated identity, created by login and torn down by logout.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Response of `/login`, `/register` and `/admin/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: AuthUser,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminLoginRequest {
    pub password: String,
}

/// A logged-in session. Passed by reference to every operation that needs a bearer credential.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthSession {
    token: String,
    user: Option<AuthUser>,
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSession")
            .field("token", &"[REDACTED]")
            .field("user", &self.user)
            .finish()
    }
}

impl AuthSession {
    /// Session from a token obtained elsewhere (e.g. `INFOTECH_TOKEN`); identity unknown.
    pub fn from_token(token: impl Into<String>) -> Self {
        Self { token: token.into(), user: None }
    }

    pub fn login(response: AuthResponse) -> Self {
        Self { token: response.access_token, user: Some(response.user) }
    }

    /// End the session. Consumes it so the credential cannot be reused.
    pub fn logout(self) -> Option<AuthUser> {
        self.user
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.is_admin)
    }
}
