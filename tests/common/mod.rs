//! Shared testing utilities for `infotech` CLI tests.

use assert_cmd::Command;
use mockito::{Matcher, Mock, ServerGuard};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(dead_code)]
pub const CATEGORIES: [&str; 8] =
    ["CPU", "MOTHERBOARD", "RAM", "GPU", "STORAGE", "PSU", "CASE", "COOLING"];

/// Isolated working directory plus a mock storefront backend.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    server: ServerGuard,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let server = mockito::Server::new();
        Self { root, server }
    }

    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    pub fn server(&mut self) -> &mut ServerGuard {
        &mut self.server
    }

    pub fn api_url(&self) -> String {
        format!("{}/api", self.server.url())
    }

    /// Command for the compiled binary pointed at the mock backend, without a token.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("infotech").expect("Failed to locate infotech binary");
        cmd.current_dir(self.work_dir())
            .env("INFOTECH_API_URL", self.api_url())
            .env_remove("INFOTECH_TOKEN")
            .env("RUST_LOG", "off");
        cmd
    }

    /// Same as [`cli`](Self::cli) with a bearer token.
    pub fn cli_with_token(&self, token: &str) -> Command {
        let mut cmd = self.cli();
        cmd.env("INFOTECH_TOKEN", token);
        cmd
    }

    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.work_dir().join("infotech.toml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Serve `body` for `GET /api/products?category=<category>`.
    pub fn mock_category(&mut self, category: &str, body: &str) -> Mock {
        self.server
            .mock("GET", "/api/products")
            .match_query(Matcher::UrlEncoded("category".into(), category.into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }

    /// Serve every category, using `bodies` where given and `[]` otherwise.
    pub fn mock_catalog(&mut self, bodies: &[(&str, &str)]) -> Vec<Mock> {
        CATEGORIES
            .iter()
            .map(|category| {
                let body = bodies
                    .iter()
                    .find(|(name, _)| name == category)
                    .map(|(_, body)| *body)
                    .unwrap_or("[]");
                self.mock_category(category, body)
            })
            .collect()
    }
}

#[allow(dead_code)]
pub fn product_json(id: &str, category: &str, price: f64, stock_status: &str) -> String {
    format!(
        r#"{{"id":"{id}","name":"Produit {id}","category":"{category}","brand":"Test",
            "price":{price},"description":"","stock_quantity":3,"stock_status":"{stock_status}",
            "specifications":{{}},"compatibility_requirements":{{}}}}"#
    )
}
