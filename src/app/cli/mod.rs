//! CLI Adapter.

mod account;
mod cart;
mod catalog;
mod configurator;
mod open;
mod reviews;
mod support;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::adapters::HttpStorefrontClient;
use crate::app::AppContext;
use crate::app::config::{load_client_config, session_from};
use crate::domain::{AppError, Category};

type Context = AppContext<HttpStorefrontClient>;

#[derive(Parser)]
#[command(name = "infotech")]
#[command(version)]
#[command(about = "INFOTECH.MA storefront client: catalog, cart and PC configurator", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./infotech.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Bearer token (defaults to $INFOTECH_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    #[clap(visible_alias = "ls")]
    Products {
        /// Restrict to one category (CPU, GPU, ...)
        #[arg(short, long)]
        category: Option<Category>,
        /// Free-text search on name and brand
        #[arg(short, long)]
        search: Option<String>,
        /// Dynamic filter as NAME=VALUE (ranges as min:max)
        #[arg(short, long = "filter", value_parser = parse_key_value)]
        filters: Vec<(String, String)>,
    },
    /// Show one product with its reviews
    Product { id: String },
    /// List the shop's active product filters
    Filters,
    /// Log in and print a bearer token
    Login {
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Create an account and print a bearer token
    Register {
        email: String,
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Log in as administrator and print a bearer token
    AdminLogin {
        #[arg(short, long)]
        password: String,
    },
    /// Shopping cart
    Cart {
        #[command(subcommand)]
        command: cart::CartCommands,
    },
    /// Product reviews
    Reviews {
        #[command(subcommand)]
        command: reviews::ReviewCommands,
    },
    /// Customer support tickets
    Support {
        #[command(subcommand)]
        command: support::SupportCommands,
    },
    /// PC configurator
    #[clap(visible_alias = "pc")]
    Configurator {
        #[command(subcommand)]
        command: configurator::ConfiguratorCommands,
    },
    /// Render the storefront page behind a path such as /product/<id>
    Open { path: String },
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    let result: Result<i32, AppError> =
        context(cli.config.as_deref(), cli.token.as_deref()).and_then(|mut ctx| match cli.command {
            Commands::Products { category, search, filters } => {
                catalog::run_products(&ctx, category, search, &filters).map(|_| 0)
            }
            Commands::Product { id } => catalog::run_product(&ctx, &id).map(|_| 0),
            Commands::Filters => catalog::run_filters(&ctx).map(|_| 0),
            Commands::Login { email, password } => {
                account::run_login(&mut ctx, &email, &password).map(|_| 0)
            }
            Commands::Register { email, username, password } => {
                account::run_register(&mut ctx, &email, &username, &password).map(|_| 0)
            }
            Commands::AdminLogin { password } => {
                account::run_admin_login(&mut ctx, &password).map(|_| 0)
            }
            Commands::Cart { command } => cart::run_cart(&ctx, command).map(|_| 0),
            Commands::Reviews { command } => reviews::run_reviews(&ctx, command).map(|_| 0),
            Commands::Support { command } => support::run_support(&ctx, command).map(|_| 0),
            Commands::Configurator { command } => configurator::run_configurator(&ctx, command),
            Commands::Open { path } => open::run_open(&ctx, &path),
        });

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "infotech=warn".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn context(config: Option<&Path>, token: Option<&str>) -> Result<Context, AppError> {
    let config = load_client_config(config)?;
    let client = HttpStorefrontClient::new(&config.api)?;
    tracing::debug!(base_url = %client.base_url(), "storefront client ready");
    let session = session_from(token, |key| std::env::var(key).ok());
    Ok(AppContext::with_session(client, session))
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

fn format_price(amount: f64) -> String {
    format!("{amount:.2} MAD")
}
