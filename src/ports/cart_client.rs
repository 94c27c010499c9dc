use crate::domain::{AppError, AuthSession, Cart, PromoApplied};

/// Port for the authenticated user's cart.
pub trait CartClient {
    fn cart(&self, session: &AuthSession) -> Result<Cart, AppError>;

    fn add_item(&self, session: &AuthSession, product_id: &str, quantity: u32)
    -> Result<(), AppError>;

    fn remove_item(&self, session: &AuthSession, product_id: &str) -> Result<(), AppError>;

    fn update_quantity(
        &self,
        session: &AuthSession,
        product_id: &str,
        quantity: u32,
    ) -> Result<(), AppError>;

    fn apply_promo(&self, session: &AuthSession, code: &str) -> Result<PromoApplied, AppError>;
}
