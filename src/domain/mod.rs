pub mod cart;
pub mod catalog;
pub mod category;
pub mod client_config;
pub mod error;
pub mod named_configuration;
pub mod notice;
pub mod product;
pub mod review;
pub mod selection;
pub mod session;
pub mod support;
pub mod verdict;

pub use cart::{Cart, CartItem, PromoApplied};
pub use catalog::{Catalog, total_price};
pub use category::Category;
pub use client_config::{ApiConfig, ClientConfig};
pub use error::AppError;
pub use named_configuration::{NamedConfiguration, SaveConfigurationRequest};
pub use notice::Notice;
pub use product::{FilterKind, Product, ProductFilter, StockStatus};
pub use review::{NewReview, Review, ReviewStats};
pub use selection::SelectionMap;
pub use session::{AdminLoginRequest, AuthResponse, AuthSession, AuthUser, LoginRequest, RegisterRequest};
pub use support::{NewTicket, SupportTicket, TicketCategory, TicketPriority, TicketStatus};
pub use verdict::{CompatibilityVerdict, ValidatedVerdict};
