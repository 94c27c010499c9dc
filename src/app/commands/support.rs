use crate::domain::{AppError, AuthSession, NewTicket, TicketCategory, TicketPriority};
use crate::ports::SupportClient;

pub fn open_ticket<C>(
    client: &C,
    session: &AuthSession,
    subject: &str,
    message: &str,
    priority: TicketPriority,
    category: TicketCategory,
) -> Result<NewTicket, AppError>
where
    C: SupportClient + ?Sized,
{
    let ticket = NewTicket::new(subject.trim(), message.trim(), priority, category)?;
    client.create_ticket(session, &ticket)?;
    tracing::info!(subject = %ticket.subject, "support ticket created");
    Ok(ticket)
}
