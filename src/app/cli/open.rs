use super::{Context, cart, catalog, support};
use crate::app::commands::configurator::ConfiguratorSession;
use crate::app::{Route, Router};
use crate::domain::AppError;

/// Navigate to `path` and render the page it resolves to.
pub fn run_open(ctx: &Context, path: &str) -> Result<i32, AppError> {
    let mut router = Router::default();
    router.subscribe(|route| println!("== {} ({}) ==", route.title(), route));
    let route = router.navigate(path).clone();

    if route.requires_session() {
        ctx.require_session()?;
    }

    match route {
        Route::Home => {
            for page in [Route::Products, Route::Configurator, Route::Cart, Route::Support] {
                println!("  {:<14} {}", page.path(), page.title());
            }
        }
        Route::Login => println!("infotech login <email> --password <mot de passe>"),
        Route::Register => println!("infotech register <email> <username> --password <mot de passe>"),
        Route::AdminLogin => println!("infotech admin-login --password <mot de passe>"),
        Route::Products => catalog::run_products(ctx, None, None, &[])?,
        Route::ProductDetail(id) => catalog::run_product(ctx, &id)?,
        Route::Configurator => render_configurator(ctx),
        Route::Cart => cart::run_cart(ctx, cart::CartCommands::Show)?,
        Route::Support => support::run_support(ctx, support::SupportCommands::List)?,
        Route::Admin => println!("L'administration se fait depuis l'interface web"),
        Route::NotFound(_) => {
            println!("Page non trouvée");
            return Ok(1);
        }
    }
    Ok(0)
}

fn render_configurator(ctx: &Context) {
    let mut session = ConfiguratorSession::new();
    let failures = session.load_catalog(ctx.client());

    for category in session.categories() {
        println!("{}", category.label());
        match session.catalog().products(*category) {
            Some([]) => println!("  Aucun produit"),
            Some(products) => products.iter().for_each(catalog::print_product_line),
            None => {
                let reason = failures
                    .iter()
                    .find(|(failed, _)| failed == category)
                    .map(|(_, error)| error.to_string())
                    .unwrap_or_default();
                println!("  Erreur lors du chargement des produits: {reason}");
            }
        }
    }
}
