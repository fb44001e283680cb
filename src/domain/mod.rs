//! Domain layer with core storefront entities and error types.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;

pub use entities::{Cart, Price, Product, Rating, Review, Shipping, StockStatus, Variant, VariantId};
pub use errors::{CatalogError, RatingError, ReviewError, ReviewField, ValidationErrors};
