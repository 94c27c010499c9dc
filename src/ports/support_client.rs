use crate::domain::{AppError, AuthSession, NewTicket, SupportTicket};

/// Port for customer support tickets.
pub trait SupportClient {
    fn tickets(&self, session: &AuthSession) -> Result<Vec<SupportTicket>, AppError>;

    fn create_ticket(&self, session: &AuthSession, ticket: &NewTicket) -> Result<(), AppError>;
}
