//! Catalog browsing: product lists with dynamic filters, and product pages.

use crate::domain::{AppError, FilterKind, Product, ProductFilter, Review, ReviewStats};
use crate::ports::{CatalogClient, ProductQuery, ReviewClient};

/// Everything shown on a product page. Review data is optional decoration.
#[derive(Debug, Clone)]
pub struct ProductPage {
    pub product: Product,
    pub reviews: Vec<Review>,
    pub stats: Option<ReviewStats>,
}

pub fn product_page<C>(client: &C, product_id: &str) -> Result<ProductPage, AppError>
where
    C: CatalogClient + ReviewClient + ?Sized,
{
    let product = client.get_product(product_id)?;

    let reviews = client.reviews(product_id).unwrap_or_else(|error| {
        tracing::warn!(%product_id, %error, "Erreur lors du chargement des avis");
        Vec::new()
    });
    let stats = match client.review_stats(product_id) {
        Ok(stats) => Some(stats),
        Err(error) => {
            tracing::warn!(%product_id, %error, "Erreur lors du chargement des statistiques");
            None
        }
    };

    Ok(ProductPage { product, reviews, stats })
}

/// Translate `name=value` pairs into `filter_<name>` query parameters.
///
/// Names are matched case-insensitively against the active filters; values are
/// checked against the filter kind (`min:max` numbers for ranges, `true`/`false`
/// for booleans, one of the listed values for selects when values are listed).
pub fn filter_params(
    active: &[ProductFilter],
    requested: &[(String, String)],
) -> Result<Vec<(String, String)>, AppError> {
    requested
        .iter()
        .map(|(name, value)| {
            let filter = active
                .iter()
                .find(|filter| filter.name.eq_ignore_ascii_case(name.trim()))
                .ok_or_else(|| {
                    let known =
                        active.iter().map(|f| f.name.as_str()).collect::<Vec<_>>().join(", ");
                    AppError::invalid_input(format!("unknown filter '{name}'. Available: {known}"))
                })?;
            let value = value.trim();
            check_filter_value(filter, value)?;
            Ok((filter.param_name(), value.to_string()))
        })
        .collect()
}

fn check_filter_value(filter: &ProductFilter, value: &str) -> Result<(), AppError> {
    let invalid = |reason: &str| {
        AppError::invalid_input(format!("invalid value '{value}' for filter '{}': {reason}", filter.name))
    };
    match filter.kind {
        FilterKind::Range => {
            let bounds: Vec<&str> = match value.split_once(':') {
                Some((min, max)) => vec![min, max],
                None => vec![value],
            };
            if bounds.iter().all(|b| b.is_empty()) {
                return Err(invalid("expected min:max"));
            }
            for bound in bounds.into_iter().filter(|b| !b.is_empty()) {
                bound.trim().parse::<f64>().map_err(|_| invalid("bounds must be numbers"))?;
            }
            Ok(())
        }
        FilterKind::Boolean => match value.to_ascii_lowercase().as_str() {
            "true" | "false" => Ok(()),
            _ => Err(invalid("expected true or false")),
        },
        FilterKind::Select => {
            if filter.values.is_empty() || filter.values.iter().any(|v| v == value) {
                Ok(())
            } else {
                Err(invalid(&format!("expected one of {}", filter.values.join(", "))))
            }
        }
    }
}

/// Fetch products, resolving dynamic filters first when any are requested.
pub fn browse<C>(
    client: &C,
    mut query: ProductQuery,
    requested_filters: &[(String, String)],
) -> Result<Vec<Product>, AppError>
where
    C: CatalogClient + ?Sized,
{
    if !requested_filters.is_empty() {
        let active = client.active_filters()?;
        query.filters = filter_params(&active, requested_filters)?;
    }
    client.list_products(&query)
}
