use clap::Subcommand;

use super::{Context, format_price};
use crate::app::commands::cart::{add_to_cart, apply_promo, cart_lines, set_quantity};
use crate::domain::AppError;
use crate::ports::CartClient;

#[derive(Subcommand)]
pub enum CartCommands {
    /// Show the cart
    Show,
    /// Add a product
    Add {
        product_id: String,
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product
    #[clap(visible_alias = "rm")]
    Remove { product_id: String },
    /// Change a product's quantity (0 removes it)
    Update { product_id: String, quantity: u32 },
    /// Apply a promo code
    Promo { code: String },
}

pub fn run_cart(ctx: &Context, command: CartCommands) -> Result<(), AppError> {
    let session = ctx.require_session()?;
    match command {
        CartCommands::Show => {
            let cart = ctx.client().cart(session)?;
            if cart.is_empty() {
                println!("Votre panier est vide");
                return Ok(());
            }
            for line in cart_lines(ctx.client(), &cart) {
                println!(
                    "  {:<40} {:>3} x {:>12} = {:>14}",
                    line.display_name(),
                    line.item.quantity,
                    format_price(line.item.price),
                    format_price(line.item.subtotal())
                );
            }
            println!("\nArticles: {}", cart.item_count());
            println!("Sous-total: {}", format_price(cart.total));
            if let Some(code) = &cart.promo_code {
                println!("Réduction ({}): -{}", code, format_price(cart.discount));
            }
            println!("Total: {}", format_price(cart.amount_due()));
        }
        CartCommands::Add { product_id, quantity } => {
            add_to_cart(ctx.client(), session, &product_id, quantity)?;
            println!("✅ Produit ajouté au panier");
        }
        CartCommands::Remove { product_id } => {
            ctx.client().remove_item(session, &product_id)?;
            println!("✅ Produit retiré du panier");
        }
        CartCommands::Update { product_id, quantity } => {
            set_quantity(ctx.client(), session, &product_id, quantity)?;
            if quantity == 0 {
                println!("✅ Produit retiré du panier");
            } else {
                println!("✅ Quantité mise à jour");
            }
        }
        CartCommands::Promo { code } => {
            let applied = apply_promo(ctx.client(), session, &code)?;
            println!("✅ {} (-{})", applied.message, format_price(applied.discount));
        }
    }
    Ok(())
}
