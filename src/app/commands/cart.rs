//! Cart actions with the local checks the storefront performs before calling the API.

use crate::domain::{AppError, AuthSession, Cart, CartItem, Product, PromoApplied};
use crate::ports::{CartClient, CatalogClient};

/// A cart line joined with its product details when they could be fetched.
#[derive(Debug, Clone)]
pub struct CartLine {
    pub item: CartItem,
    pub product: Option<Product>,
}

impl CartLine {
    pub fn display_name(&self) -> &str {
        self.product.as_ref().map_or("Produit indisponible", |product| product.name.as_str())
    }
}

/// Add `quantity` units of a product. Products that are not in stock are refused locally.
pub fn add_to_cart<C>(
    client: &C,
    session: &AuthSession,
    product_id: &str,
    quantity: u32,
) -> Result<(), AppError>
where
    C: CatalogClient + CartClient + ?Sized,
{
    if quantity == 0 {
        return Err(AppError::invalid_input("quantity must be greater than 0"));
    }
    let product = client.get_product(product_id)?;
    if !product.stock_status.is_available() {
        return Err(AppError::invalid_input(format!(
            "{} : {}",
            product.name,
            product.stock_status.label()
        )));
    }
    client.add_item(session, product_id, quantity)
}

/// Set a line's quantity; zero removes the line.
pub fn set_quantity<C>(
    client: &C,
    session: &AuthSession,
    product_id: &str,
    quantity: u32,
) -> Result<(), AppError>
where
    C: CartClient + ?Sized,
{
    if quantity == 0 {
        return client.remove_item(session, product_id);
    }
    client.update_quantity(session, product_id, quantity).map_err(|err| match err.status() {
        Some(400) => AppError::invalid_input("Stock insuffisant pour cette quantité"),
        _ => err,
    })
}

pub fn apply_promo<C>(client: &C, session: &AuthSession, code: &str) -> Result<PromoApplied, AppError>
where
    C: CartClient + ?Sized,
{
    let code = code.trim();
    if code.is_empty() {
        return Err(AppError::invalid_input("promo code must not be empty"));
    }
    client.apply_promo(session, code).map_err(|err| match err.status() {
        Some(404) => AppError::invalid_input("Code promo invalide"),
        _ => err,
    })
}

/// Join each cart item with its product. A product that fails to load is shown as unavailable.
pub fn cart_lines<C>(client: &C, cart: &Cart) -> Vec<CartLine>
where
    C: CatalogClient + ?Sized,
{
    cart.items
        .iter()
        .map(|item| {
            let product = match client.get_product(&item.product_id) {
                Ok(product) => Some(product),
                Err(error) => {
                    tracing::warn!(product_id = %item.product_id, %error, "Erreur lors du chargement du produit");
                    None
                }
            };
            CartLine { item: item.clone(), product }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, StockStatus};
    use crate::testing::{FakeStorefront, RecordedCall, cart_with, product};

    fn session() -> AuthSession {
        AuthSession::from_token("t")
    }

    #[test]
    fn adds_in_stock_product() {
        let fake = FakeStorefront::new().with_products(vec![product("c1", Category::Cpu, 449.99)]);

        add_to_cart(&fake, &session(), "c1", 1).unwrap();

        assert_eq!(
            fake.calls().last(),
            Some(&RecordedCall::AddItem { product_id: "c1".into(), quantity: 1 })
        );
    }

    #[test]
    fn refuses_out_of_stock_product() {
        let mut gpu = product("g1", Category::Gpu, 899.0);
        gpu.stock_status = StockStatus::ComingSoon;
        let fake = FakeStorefront::new().with_products(vec![gpu]);

        let err = add_to_cart(&fake, &session(), "g1", 1).unwrap_err();

        assert!(err.to_string().contains("Bientôt disponible"));
        assert!(!fake.calls().iter().any(|c| matches!(c, RecordedCall::AddItem { .. })));
    }

    #[test]
    fn zero_quantity_removes_line() {
        let fake = FakeStorefront::new();
        set_quantity(&fake, &session(), "c1", 0).unwrap();
        assert_eq!(fake.calls(), vec![RecordedCall::RemoveItem("c1".into())]);
    }

    #[test]
    fn positive_quantity_updates_line() {
        let fake = FakeStorefront::new();
        set_quantity(&fake, &session(), "c1", 3).unwrap();
        assert_eq!(
            fake.calls(),
            vec![RecordedCall::UpdateQuantity { product_id: "c1".into(), quantity: 3 }]
        );
    }

    #[test]
    fn blank_promo_code_issues_no_request() {
        let fake = FakeStorefront::new();
        assert!(apply_promo(&fake, &session(), "  ").is_err());
        assert!(fake.calls().is_empty());
    }

    #[test]
    fn promo_code_is_trimmed() {
        let fake = FakeStorefront::new().with_cart(cart_with("c1", 1, 500.0));
        let applied = apply_promo(&fake, &session(), " GAMING10 ").unwrap();
        assert_eq!(applied.discount, 50.0);
        assert_eq!(fake.calls(), vec![RecordedCall::ApplyPromo("GAMING10".into())]);
    }

    #[test]
    fn missing_product_shows_as_unavailable() {
        let fake = FakeStorefront::new().with_products(vec![product("c1", Category::Cpu, 10.0)]);
        let mut cart = cart_with("c1", 1, 10.0);
        cart.items.push(CartItem { product_id: "gone".into(), quantity: 2, price: 5.0 });

        let lines = cart_lines(&fake, &cart);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].display_name(), "Produit c1");
        assert_eq!(lines[1].display_name(), "Produit indisponible");
    }
}
