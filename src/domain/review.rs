//! Product reviews and rating statistics.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::AppError;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub product_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub username: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Aggregates served by `GET /reviews/{product_id}/stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewStats {
    pub average_rating: f64,
    pub total_reviews: u32,
    #[serde(default)]
    pub rating_distribution: BTreeMap<String, u32>,
}

impl ReviewStats {
    /// Number of reviews that gave exactly `stars`.
    pub fn count_for(&self, stars: u8) -> u32 {
        self.rating_distribution.get(&stars.to_string()).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewReview {
    pub product_id: String,
    pub rating: u8,
    pub comment: String,
}

impl NewReview {
    pub fn new(
        product_id: impl Into<String>,
        rating: u8,
        comment: impl Into<String>,
    ) -> Result<Self, AppError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(AppError::invalid_input(format!(
                "rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
            )));
        }
        Ok(Self { product_id: product_id.into(), rating, comment: comment.into() })
    }
}

/// Five-character star bar, e.g. `★★★☆☆` for 3.
pub fn stars(rating: f64) -> String {
    let filled = rating.round().clamp(0.0, f64::from(MAX_RATING)) as usize;
    let empty = usize::from(MAX_RATING) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}
