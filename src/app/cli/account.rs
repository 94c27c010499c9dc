use super::Context;
use crate::app::commands::auth;
use crate::domain::client_config::TOKEN_ENV;
use crate::domain::{AppError, AuthSession};

pub fn run_login(ctx: &mut Context, email: &str, password: &str) -> Result<(), AppError> {
    let session = auth::login(ctx.client(), email, password)?;
    announce(ctx, session);
    Ok(())
}

pub fn run_register(
    ctx: &mut Context,
    email: &str,
    username: &str,
    password: &str,
) -> Result<(), AppError> {
    let session = auth::register(ctx.client(), email, username, password)?;
    announce(ctx, session);
    Ok(())
}

pub fn run_admin_login(ctx: &mut Context, password: &str) -> Result<(), AppError> {
    let session = auth::admin_login(ctx.client(), password)?;
    announce(ctx, session);
    Ok(())
}

fn announce(ctx: &mut Context, session: AuthSession) {
    if let Some(user) = session.user() {
        let role = if user.is_admin { " (administrateur)" } else { "" };
        println!("✅ Connecté en tant que {}{}", user.username, role);
    }
    println!("{}={}", TOKEN_ENV, session.token());
    ctx.login(session);
}
