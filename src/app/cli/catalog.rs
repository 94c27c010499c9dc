use super::{Context, format_price};
use crate::app::commands::catalog::{browse, product_page};
use crate::domain::review::{MAX_RATING, MIN_RATING, stars};
use crate::domain::{AppError, Category, Product, Review};
use crate::ports::{CatalogClient, ProductQuery};

pub fn run_products(
    ctx: &Context,
    category: Option<Category>,
    search: Option<String>,
    filters: &[(String, String)],
) -> Result<(), AppError> {
    let query = ProductQuery { category, search, filters: Vec::new() };
    let products = browse(ctx.client(), query, filters)?;

    if products.is_empty() {
        println!("Aucun produit trouvé");
        return Ok(());
    }
    for product in &products {
        print_product_line(product);
    }
    println!("\n{} produit(s)", products.len());
    Ok(())
}

pub fn run_product(ctx: &Context, id: &str) -> Result<(), AppError> {
    let page = product_page(ctx.client(), id)?;
    let product = &page.product;

    println!("{} ({})", product.name, product.id);
    println!("  Marque:    {}", product.brand);
    println!("  Catégorie: {}", product.category.label());
    println!("  Prix:      {}", format_price(product.price));
    println!("  Stock:     {}", product.stock_badge());
    if !product.description.is_empty() {
        println!("\n{}", product.description);
    }

    if !product.specifications.is_empty() {
        println!("\nCaractéristiques:");
        for key in product.specifications.keys() {
            if let Some(value) = product.spec(key) {
                println!("  • {key}: {value}");
            }
        }
    }

    if let Some(stats) = page.stats.as_ref().filter(|stats| stats.total_reviews > 0) {
        println!(
            "\nAvis: {} {:.1}/5 ({} avis)",
            stars(stats.average_rating),
            stats.average_rating,
            stats.total_reviews
        );
        for rating in (MIN_RATING..=MAX_RATING).rev() {
            println!("  {rating}★ {}", stats.count_for(rating));
        }
    }
    print_reviews(&page.reviews);
    Ok(())
}

pub fn run_filters(ctx: &Context) -> Result<(), AppError> {
    let filters = ctx.client().active_filters()?;
    if filters.is_empty() {
        println!("Aucun filtre actif");
        return Ok(());
    }
    for filter in &filters {
        let values =
            if filter.values.is_empty() { String::new() } else { format!(" [{}]", filter.values.join(", ")) };
        println!("  {} ({:?}) -> {}{}", filter.name, filter.kind, filter.param_name(), values);
    }
    Ok(())
}

pub(super) fn print_product_line(product: &Product) {
    println!(
        "  {:<12} {:<40} {:>14}  {}",
        product.id,
        product.name,
        format_price(product.price),
        product.stock_status.label()
    );
}

pub(super) fn print_reviews(reviews: &[Review]) {
    if reviews.is_empty() {
        println!("\nAucun avis pour ce produit");
        return;
    }
    println!();
    for review in reviews {
        let date = review.created_at.map(|at| at.format("%d/%m/%Y").to_string()).unwrap_or_default();
        println!("  {} {} {}", stars(f64::from(review.rating)), review.username, date);
        if !review.comment.is_empty() {
            println!("    {}", review.comment);
        }
    }
}
