use clap::Subcommand;

use super::{Context, format_price};
use crate::app::commands::configurator::ConfiguratorSession;
use crate::domain::{AppError, Category, Notice, ValidatedVerdict};
use crate::ports::ConfiguratorClient;

#[derive(Subcommand)]
pub enum ConfiguratorCommands {
    /// Categories offered by the configurator
    Categories,
    /// Assemble a build, optionally validating and saving it
    Build {
        /// Component as CATEGORY=PRODUCT_ID; repeat per category (last one wins)
        #[arg(short, long = "pick", value_parser = parse_pick)]
        picks: Vec<(Category, String)>,
        /// Ask the compatibility engine about the build
        #[arg(long)]
        validate: bool,
        /// Save the build under this name (requires a token)
        #[arg(long)]
        save: Option<String>,
    },
    /// Configurations you saved
    Mine,
}

pub fn run_configurator(ctx: &Context, command: ConfiguratorCommands) -> Result<i32, AppError> {
    match command {
        ConfiguratorCommands::Categories => {
            for category in ctx.client().categories()? {
                println!("  {:<12} {}", category.as_str(), category.label());
            }
            Ok(0)
        }
        ConfiguratorCommands::Build { picks, validate, save } => {
            run_build(ctx, picks, validate, save)
        }
        ConfiguratorCommands::Mine => {
            let session = ctx.require_session()?;
            let configurations = ctx.client().my_configurations(session)?;
            if configurations.is_empty() {
                println!("Aucune configuration sauvegardée");
                return Ok(0);
            }
            for config in &configurations {
                let status = if config.compatibility_status { "✅" } else { "⚠️ " };
                let date = config
                    .created_at
                    .map(|at| at.format("%d/%m/%Y").to_string())
                    .unwrap_or_default();
                println!(
                    "{} {} ({}) {} {}",
                    status,
                    config.name,
                    config.id,
                    format_price(config.total_price),
                    date
                );
                for (category, product_id) in config.components.iter() {
                    println!("    {:<22} {}", category.label(), product_id);
                }
                for issue in &config.compatibility_issues {
                    println!("    ⚠️  {issue}");
                }
            }
            Ok(0)
        }
    }
}

fn run_build(
    ctx: &Context,
    picks: Vec<(Category, String)>,
    validate: bool,
    save: Option<String>,
) -> Result<i32, AppError> {
    let mut session = ConfiguratorSession::new();

    if !picks.is_empty() {
        for (category, error) in session.load_catalog(ctx.client()) {
            eprintln!("⚠️  {}: {}", category.label(), error);
        }
    }

    for (category, product_id) in picks {
        check_pick(&session, category, &product_id)?;
        session.select(category, product_id);
    }

    print_build(&session);

    let mut failed = false;
    if validate {
        match session.validate(ctx.client(), ctx.session()) {
            Ok(verdict) => print_verdict(verdict),
            Err(notice) => failed |= report(notice),
        }
    }

    if let Some(name) = save {
        session.set_config_name(name);
        match session.save(ctx.client(), ctx.session()) {
            Ok(saved) => println!("✅ {} ({})", Notice::Saved, saved.id),
            Err(notice) => failed |= report(notice),
        }
    }

    Ok(if failed { 1 } else { 0 })
}

/// Only in-stock products of a loaded category can be picked. Picks in a
/// category that failed to load are let through and priced at 0.
fn check_pick(session: &ConfiguratorSession, category: Category, product_id: &str) -> Result<(), AppError> {
    let catalog = session.catalog();
    if !catalog.is_loaded(category) {
        return Ok(());
    }
    match catalog.find(category, product_id) {
        None => Err(AppError::invalid_input(format!(
            "no product '{}' in {}",
            product_id,
            category.label()
        ))),
        Some(product) if !product.stock_status.is_available() => Err(AppError::invalid_input(
            format!("{} : {}", product.name, product.stock_status.label()),
        )),
        Some(_) => Ok(()),
    }
}

fn print_build(session: &ConfiguratorSession) {
    if session.selection().is_empty() {
        println!("Aucun composant sélectionné");
        return;
    }
    for category in session.categories() {
        let Some(product_id) = session.selection().get(*category) else {
            continue;
        };
        match session.selected_product(*category) {
            Some(product) => println!(
                "  {:<22} {} - {} - {}",
                category.label(),
                product.name,
                product.brand,
                format_price(product.price)
            ),
            None => println!("  {:<22} {} (indisponible)", category.label(), product_id),
        }
    }
    let missing = session.selection().missing();
    if !missing.is_empty() {
        let labels: Vec<&str> = missing.iter().map(|category| category.label()).collect();
        println!("Non sélectionné: {}", labels.join(", "));
    }
    println!("Prix total: {}", format_price(session.total_price()));
}

fn print_verdict(validated: &ValidatedVerdict) {
    let verdict = &validated.verdict;
    if verdict.compatible {
        println!("✅ Configuration compatible");
    } else {
        println!("⚠️  Problèmes de compatibilité:");
    }
    for issue in &verdict.issues {
        println!("  • {issue}");
    }
}

fn report(notice: Notice) -> bool {
    if notice.is_failure() {
        println!("❌ {notice}");
    } else {
        println!("✅ {notice}");
    }
    notice.is_failure()
}

fn parse_pick(raw: &str) -> Result<(Category, String), String> {
    let (category, product_id) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=PRODUCT_ID, got '{raw}'"))?;
    let category: Category = category.parse().map_err(|e: AppError| e.to_string())?;
    let product_id = product_id.trim();
    if product_id.is_empty() {
        return Err(format!("missing product id in '{raw}'"));
    }
    Ok((category, product_id.to_string()))
}
