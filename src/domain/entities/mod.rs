//! Domain entity definitions.

mod cart;
mod price;
mod product;
mod review;
mod variant;

pub use cart::Cart;
pub use price::{Price, Shipping};
pub use product::Product;
pub use review::{Rating, Review};
pub use variant::{LOW_STOCK_THRESHOLD, StockStatus, Variant, VariantId};
