mod fake_storefront;

#[allow(unused_imports)]
pub use fake_storefront::{FakeStorefront, RecordedCall, cart_with, product};
