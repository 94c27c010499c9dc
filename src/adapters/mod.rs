pub mod storefront_http;

pub use storefront_http::HttpStorefrontClient;
