use clap::Subcommand;

use super::Context;
use super::catalog::print_reviews;
use crate::app::commands::reviews::add_review;
use crate::domain::AppError;
use crate::domain::review::{MAX_RATING, MIN_RATING, stars};
use crate::ports::ReviewClient;

#[derive(Subcommand)]
pub enum ReviewCommands {
    /// List a product's reviews
    #[clap(visible_alias = "ls")]
    List { product_id: String },
    /// Rating summary for a product
    Stats { product_id: String },
    /// Review a product (1 to 5 stars)
    Add {
        product_id: String,
        #[arg(short, long)]
        rating: u8,
        #[arg(short, long, default_value = "")]
        comment: String,
    },
}

pub fn run_reviews(ctx: &Context, command: ReviewCommands) -> Result<(), AppError> {
    match command {
        ReviewCommands::List { product_id } => {
            let reviews = ctx.client().reviews(&product_id)?;
            print_reviews(&reviews);
        }
        ReviewCommands::Stats { product_id } => {
            let stats = ctx.client().review_stats(&product_id)?;
            println!(
                "{} {:.1}/5 ({} avis)",
                stars(stats.average_rating),
                stats.average_rating,
                stats.total_reviews
            );
            for rating in (MIN_RATING..=MAX_RATING).rev() {
                println!("  {rating}★ {}", stats.count_for(rating));
            }
        }
        ReviewCommands::Add { product_id, rating, comment } => {
            let session = ctx.require_session()?;
            add_review(ctx.client(), session, &product_id, rating, &comment)?;
            println!("✅ Avis publié");
        }
    }
    Ok(())
}
