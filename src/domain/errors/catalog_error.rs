//! Catalog construction errors.

use thiserror::Error;

/// Catalog error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A product must offer at least one variant.
    #[error("product \"{product}\" has no variants")]
    NoVariants {
        /// Product title.
        product: String,
    },
}
