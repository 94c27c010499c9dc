//! Customer support tickets.

use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    pub fn label(&self) -> &'static str {
        match self {
            TicketPriority::Low => "Faible",
            TicketPriority::Medium => "Moyenne",
            TicketPriority::High => "Élevée",
            TicketPriority::Urgent => "Urgent",
        }
    }
}

impl FromStr for TicketPriority {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(TicketPriority::Low),
            "medium" => Ok(TicketPriority::Medium),
            "high" => Ok(TicketPriority::High),
            "urgent" => Ok(TicketPriority::Urgent),
            _ => Err(AppError::invalid_input(format!(
                "unknown priority '{s}': expected low, medium, high or urgent"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketCategory {
    #[default]
    General,
    Order,
    Technical,
    Billing,
}

impl TicketCategory {
    pub fn label(&self) -> &'static str {
        match self {
            TicketCategory::General => "Général",
            TicketCategory::Order => "Commande",
            TicketCategory::Technical => "Technique",
            TicketCategory::Billing => "Facturation",
        }
    }
}

impl FromStr for TicketCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" => Ok(TicketCategory::General),
            "order" => Ok(TicketCategory::Order),
            "technical" => Ok(TicketCategory::Technical),
            "billing" => Ok(TicketCategory::Billing),
            _ => Err(AppError::invalid_input(format!(
                "unknown ticket category '{s}': expected general, order, technical or billing"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Ouvert",
            TicketStatus::InProgress => "En cours",
            TicketStatus::Resolved => "Résolu",
            TicketStatus::Closed => "Fermé",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportTicket {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub priority: TicketPriority,
    #[serde(default)]
    pub category: TicketCategory,
    #[serde(default)]
    pub status: TicketStatus,
    #[serde(default)]
    pub admin_response: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTicket {
    pub subject: String,
    pub message: String,
    pub priority: TicketPriority,
    pub category: TicketCategory,
}

impl NewTicket {
    pub fn new(
        subject: impl Into<String>,
        message: impl Into<String>,
        priority: TicketPriority,
        category: TicketCategory,
    ) -> Result<Self, AppError> {
        let subject = subject.into();
        let message = message.into();
        if subject.trim().is_empty() {
            return Err(AppError::invalid_input("ticket subject must not be empty"));
        }
        if message.trim().is_empty() {
            return Err(AppError::invalid_input("ticket message must not be empty"));
        }
        Ok(Self { subject, message, priority, category })
    }
}
