use crate::domain::{AppError, AuthSession, NewReview, Review, ReviewStats};

/// Port for product reviews.
pub trait ReviewClient {
    fn reviews(&self, product_id: &str) -> Result<Vec<Review>, AppError>;

    fn review_stats(&self, product_id: &str) -> Result<ReviewStats, AppError>;

    /// Post a review. The backend answers 400 when the user already reviewed the product.
    fn add_review(&self, session: &AuthSession, review: &NewReview) -> Result<(), AppError>;
}
