use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: String,
    pub quantity: u32,
    pub price: f64,
}

impl CartItem {
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// The caller's cart as stored by the backend (`GET /cart`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub promo_code: Option<String>,
    #[serde(default)]
    pub discount: f64,
}

impl Cart {
    /// Number of units across all lines (the header badge count).
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Total after the promo discount, never below zero.
    pub fn amount_due(&self) -> f64 {
        (self.total - self.discount).max(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Response of `POST /cart/apply-promo`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PromoApplied {
    #[serde(default)]
    pub message: String,
    pub discount: f64,
}
