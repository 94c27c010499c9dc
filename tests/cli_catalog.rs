mod common;

use common::{TestContext, product_json};
use mockito::Matcher;
use predicates::prelude::*;

#[test]
fn products_lists_category() {
    let mut ctx = TestContext::new();
    let body = format!("[{}]", product_json("g1", "GPU", 899.0, "in_stock"));
    let mock = ctx.mock_category("GPU", &body);

    ctx.cli()
        .args(["products", "--category", "gpu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Produit g1"))
        .stdout(predicate::str::contains("899.00 MAD"))
        .stdout(predicate::str::contains("1 produit(s)"));

    mock.assert();
}

#[test]
fn products_resolves_dynamic_filters() {
    let mut ctx = TestContext::new();
    let _filters = ctx
        .server()
        .mock("GET", "/api/product-filters")
        .with_status(200)
        .with_body(r#"[{"id":"f1","name":"Prix Max","type":"range","values":[],"field":"price"}]"#)
        .create();
    let products = ctx
        .server()
        .mock("GET", "/api/products")
        .match_query(Matcher::UrlEncoded("filter_prix_max".into(), "0:500".into()))
        .with_status(200)
        .with_body("[]")
        .create();

    ctx.cli()
        .args(["products", "--filter", "prix max=0:500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Aucun produit trouvé"));

    products.assert();
}

#[test]
fn unknown_filter_is_reported() {
    let mut ctx = TestContext::new();
    let _filters = ctx
        .server()
        .mock("GET", "/api/product-filters")
        .with_status(200)
        .with_body(r#"[{"id":"f1","name":"Marque","type":"select","values":["AMD"],"field":"brand"}]"#)
        .create();

    ctx.cli()
        .args(["products", "-f", "Couleur=rouge"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown filter 'Couleur'"));
}

#[test]
fn invalid_category_is_rejected_by_the_parser() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["products", "--category", "fan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid category 'fan'"));
}

#[test]
fn product_page_shows_details_without_reviews() {
    let mut ctx = TestContext::new();
    let _product = ctx
        .server()
        .mock("GET", "/api/products/c1")
        .with_status(200)
        .with_body(product_json("c1", "CPU", 449.99, "coming_soon"))
        .create();
    let _reviews = ctx.server().mock("GET", "/api/reviews/c1").with_status(500).create();
    let _stats = ctx.server().mock("GET", "/api/reviews/c1/stats").with_status(500).create();

    ctx.cli()
        .args(["product", "c1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Produit c1 (c1)"))
        .stdout(predicate::str::contains("Processeur"))
        .stdout(predicate::str::contains("Aucun avis pour ce produit"));
}

#[test]
fn missing_product_surfaces_backend_detail() {
    let mut ctx = TestContext::new();
    let _product = ctx
        .server()
        .mock("GET", "/api/products/nope")
        .with_status(404)
        .with_body(r#"{"detail": "Product not found"}"#)
        .create();

    ctx.cli()
        .args(["product", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: API error (404): Product not found"));
}

#[test]
fn config_file_sets_base_url() {
    let mut ctx = TestContext::new();
    let url = ctx.api_url();
    ctx.write_config(&format!("[api]\nbase_url = \"{url}\"\ntimeout_secs = 5\n"));
    let mock = ctx.mock_category("RAM", "[]");

    ctx.cli()
        .env_remove("INFOTECH_API_URL")
        .args(["products", "-c", "RAM"])
        .assert()
        .success();

    mock.assert();
}

#[test]
fn malformed_config_is_reported() {
    let ctx = TestContext::new();
    ctx.write_config("[api]\nunknown = 1\n");

    ctx.cli().args(["filters"]).assert().failure().stderr(predicate::str::contains("infotech.toml"));
}

#[test]
fn missing_explicit_config_is_reported() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--config", "absent.toml", "filters"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}
