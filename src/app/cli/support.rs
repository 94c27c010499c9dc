use clap::Subcommand;

use super::Context;
use crate::app::commands::support::open_ticket;
use crate::domain::{AppError, TicketCategory, TicketPriority};
use crate::ports::SupportClient;

#[derive(Subcommand)]
pub enum SupportCommands {
    /// List your tickets
    #[clap(visible_alias = "ls")]
    List,
    /// Open a ticket
    Create {
        #[arg(short, long)]
        subject: String,
        #[arg(short, long)]
        message: String,
        /// low, medium, high or urgent
        #[arg(short, long, default_value = "medium")]
        priority: TicketPriority,
        /// general, order, technical or billing
        #[arg(short, long, default_value = "general")]
        category: TicketCategory,
    },
}

pub fn run_support(ctx: &Context, command: SupportCommands) -> Result<(), AppError> {
    let session = ctx.require_session()?;
    match command {
        SupportCommands::List => {
            let tickets = ctx.client().tickets(session)?;
            if tickets.is_empty() {
                println!("Aucun ticket");
                return Ok(());
            }
            for ticket in &tickets {
                println!(
                    "  [{}] {} ({}, {}, priorité {})",
                    ticket.status.label(),
                    ticket.subject,
                    ticket.id,
                    ticket.category.label(),
                    ticket.priority.label()
                );
                if let Some(response) = &ticket.admin_response {
                    println!("    Réponse: {response}");
                }
            }
        }
        SupportCommands::Create { subject, message, priority, category } => {
            open_ticket(ctx.client(), session, &subject, &message, priority, category)?;
            println!("✅ Ticket créé");
        }
    }
    Ok(())
}
