pub mod cli;
pub mod commands;
pub mod config;
mod context;
pub mod router;

pub use context::AppContext;
pub use router::{Route, Router};
