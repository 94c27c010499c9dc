use crate::domain::{AdminLoginRequest, AppError, AuthResponse, LoginRequest, RegisterRequest};

/// Port for account operations. Each call yields the token + identity used to build an `AuthSession`.
pub trait AuthClient {
    fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AppError>;

    fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AppError>;

    fn admin_login(&self, request: &AdminLoginRequest) -> Result<AuthResponse, AppError>;
}
