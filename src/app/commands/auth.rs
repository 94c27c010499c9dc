//! Account commands. Each successful call produces a fresh `AuthSession`.

use crate::domain::{AdminLoginRequest, AppError, AuthSession, LoginRequest, RegisterRequest};
use crate::ports::AuthClient;

fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::invalid_input(format!("{field} must not be empty")));
    }
    Ok(())
}

fn check_email(email: &str) -> Result<(), AppError> {
    require("email", email)?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(AppError::invalid_input(format!("'{email}' is not a valid email address"))),
    }
}

fn credentials_error(err: AppError) -> AppError {
    match err.status() {
        Some(401) => AppError::invalid_input("Email ou mot de passe incorrect"),
        _ => err,
    }
}

pub fn login<C>(client: &C, email: &str, password: &str) -> Result<AuthSession, AppError>
where
    C: AuthClient + ?Sized,
{
    check_email(email)?;
    require("password", password)?;
    let request = LoginRequest { email: email.trim().to_string(), password: password.to_string() };
    let response = client.login(&request).map_err(credentials_error)?;
    tracing::info!(user = %response.user.username, "logged in");
    Ok(AuthSession::login(response))
}

pub fn register<C>(
    client: &C,
    email: &str,
    username: &str,
    password: &str,
) -> Result<AuthSession, AppError>
where
    C: AuthClient + ?Sized,
{
    check_email(email)?;
    require("username", username)?;
    require("password", password)?;
    let request = RegisterRequest {
        email: email.trim().to_string(),
        username: username.trim().to_string(),
        password: password.to_string(),
    };
    let response = client.register(&request).map_err(|err| match err.status() {
        Some(400) => AppError::invalid_input("Cet email est déjà utilisé"),
        _ => err,
    })?;
    Ok(AuthSession::login(response))
}

pub fn admin_login<C>(client: &C, password: &str) -> Result<AuthSession, AppError>
where
    C: AuthClient + ?Sized,
{
    require("password", password)?;
    let request = AdminLoginRequest { password: password.to_string() };
    let response = client.admin_login(&request).map_err(credentials_error)?;
    Ok(AuthSession::login(response))
}
