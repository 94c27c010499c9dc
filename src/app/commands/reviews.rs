use crate::domain::{AppError, AuthSession, NewReview};
use crate::ports::ReviewClient;

/// Post a review after checking the rating locally.
pub fn add_review<C>(
    client: &C,
    session: &AuthSession,
    product_id: &str,
    rating: u8,
    comment: &str,
) -> Result<NewReview, AppError>
where
    C: ReviewClient + ?Sized,
{
    let review = NewReview::new(product_id, rating, comment.trim())?;
    client.add_review(session, &review).map_err(|err| match err.status() {
        Some(400) => AppError::invalid_input("Vous avez déjà laissé un avis pour ce produit"),
        _ => err,
    })?;
    Ok(review)
}
