//! Domain error types.

mod catalog_error;
mod rating_error;
mod review_error;

pub use catalog_error::CatalogError;
pub use rating_error::RatingError;
pub use review_error::{ReviewError, ReviewField, ValidationErrors};
