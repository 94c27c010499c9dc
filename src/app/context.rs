use crate::domain::{AppError, AuthSession, AuthUser};

/// Application context holding the storefront client and the current session.
///
/// The session is owned here and lent to operations; nothing reads it from globals.
pub struct AppContext<C> {
    client: C,
    session: Option<AuthSession>,
}

impl<C> AppContext<C> {
    pub fn new(client: C) -> Self {
        Self { client, session: None }
    }

    pub fn with_session(client: C, session: Option<AuthSession>) -> Self {
        Self { client, session }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn session(&self) -> Option<&AuthSession> {
        self.session.as_ref()
    }

    /// The session, or `Unauthenticated` when nobody is logged in.
    pub fn require_session(&self) -> Result<&AuthSession, AppError> {
        self.session.as_ref().ok_or(AppError::Unauthenticated)
    }

    /// Replace the current session with a freshly authenticated one.
    pub fn login(&mut self, session: AuthSession) {
        self.session = Some(session);
    }

    /// Drop the session, returning the user it belonged to when known.
    pub fn logout(&mut self) -> Option<AuthUser> {
        self.session.take().and_then(AuthSession::logout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::commands::auth;
    use crate::testing::FakeStorefront;

    #[test]
    fn session_lifecycle() {
        let mut ctx = AppContext::new(FakeStorefront::new());
        assert!(matches!(ctx.require_session(), Err(AppError::Unauthenticated)));

        let session = auth::login(ctx.client(), "sara@example.ma", "pw").unwrap();
        ctx.login(session);
        assert_eq!(ctx.require_session().unwrap().token(), "token-sara@example.ma");

        let user = ctx.logout().unwrap();
        assert_eq!(user.email, "sara@example.ma");
        assert!(ctx.session().is_none());
        assert!(ctx.logout().is_none());
    }
}
