mod common;

use common::{TestContext, product_json};
use mockito::Matcher;
use predicates::prelude::*;

#[test]
fn cart_requires_token() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["cart", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Authentication required"));
}

#[test]
fn show_lists_lines_and_amount_due() {
    let mut ctx = TestContext::new();
    let _cart = ctx
        .server()
        .mock("GET", "/api/cart")
        .match_header("authorization", "Bearer tok")
        .with_status(200)
        .with_body(
            r#"{"id":"k1","user_id":"u1","items":[{"product_id":"c1","quantity":2,"price":100.0}],
                "total":200.0,"promo_code":"GAMING10","discount":20.0}"#,
        )
        .create();
    let _product = ctx
        .server()
        .mock("GET", "/api/products/c1")
        .with_status(200)
        .with_body(product_json("c1", "CPU", 100.0, "in_stock"))
        .create();

    ctx.cli_with_token("tok")
        .args(["cart", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Produit c1"))
        .stdout(predicate::str::contains("Réduction (GAMING10): -20.00 MAD"))
        .stdout(predicate::str::contains("Total: 180.00 MAD"));
}

#[test]
fn out_of_stock_product_is_not_added() {
    let mut ctx = TestContext::new();
    let _product = ctx
        .server()
        .mock("GET", "/api/products/g1")
        .with_status(200)
        .with_body(product_json("g1", "GPU", 899.0, "out_of_stock"))
        .create();
    let add = ctx.server().mock("POST", "/api/cart/add").expect(0).create();

    ctx.cli_with_token("tok")
        .args(["cart", "add", "g1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Rupture de stock"));

    add.assert();
}

#[test]
fn update_to_zero_removes_line() {
    let mut ctx = TestContext::new();
    let remove = ctx
        .server()
        .mock("DELETE", "/api/cart/remove/c1")
        .with_status(200)
        .with_body(r#"{"message":"Item removed from cart"}"#)
        .create();

    ctx.cli_with_token("tok")
        .args(["cart", "update", "c1", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Produit retiré du panier"));

    remove.assert();
}

#[test]
fn invalid_promo_code_is_reported() {
    let mut ctx = TestContext::new();
    let _promo = ctx
        .server()
        .mock("POST", "/api/cart/apply-promo")
        .match_query(Matcher::UrlEncoded("code".into(), "NOPE".into()))
        .with_status(404)
        .with_body(r#"{"detail":"Invalid promo code"}"#)
        .create();

    ctx.cli_with_token("tok")
        .args(["cart", "promo", "NOPE"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Code promo invalide"));
}
