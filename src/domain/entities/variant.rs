//! Product variant entity.

use serde::{Deserialize, Serialize};

/// Quantity above which a variant is considered comfortably in stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Unique identifier for a purchasable variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(pub u32);

impl std::fmt::Display for VariantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VariantId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Stock classification derived from a variant's quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    /// More than [`LOW_STOCK_THRESHOLD`] units left.
    InStock,
    /// Between one and [`LOW_STOCK_THRESHOLD`] units left.
    AlmostSoldOut,
    /// Nothing left; adding to the cart is disabled.
    OutOfStock,
}

impl StockStatus {
    /// Classifies a stock quantity.
    #[must_use]
    pub const fn from_quantity(quantity: u32) -> Self {
        if quantity > LOW_STOCK_THRESHOLD {
            Self::InStock
        } else if quantity > 0 {
            Self::AlmostSoldOut
        } else {
            Self::OutOfStock
        }
    }

    /// Returns the label shown under the product.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InStock => "In stock",
            Self::AlmostSoldOut => "Almost sold out",
            Self::OutOfStock => "Out of stock",
        }
    }

    /// Returns whether the variant can be added to the cart.
    #[must_use]
    pub const fn is_purchasable(self) -> bool {
        !matches!(self, Self::OutOfStock)
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One purchasable configuration of the product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    id: VariantId,
    color: String,
    image_path: String,
    stock_quantity: u32,
}

impl Variant {
    /// Creates a new variant.
    #[must_use]
    pub fn new(
        id: impl Into<VariantId>,
        color: impl Into<String>,
        image_path: impl Into<String>,
        stock_quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            color: color.into(),
            image_path: image_path.into(),
            stock_quantity,
        }
    }

    /// Returns the variant ID.
    #[must_use]
    pub const fn id(&self) -> VariantId {
        self.id
    }

    /// Returns the swatch colour name.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the image path.
    #[must_use]
    pub fn image_path(&self) -> &str {
        &self.image_path
    }

    /// Returns the units left in stock.
    #[must_use]
    pub const fn stock_quantity(&self) -> u32 {
        self.stock_quantity
    }

    /// Returns the stock classification.
    #[must_use]
    pub const fn stock_status(&self) -> StockStatus {
        StockStatus::from_quantity(self.stock_quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(11, StockStatus::InStock ; "above_threshold")]
    #[test_case(10, StockStatus::AlmostSoldOut ; "at_threshold")]
    #[test_case(1, StockStatus::AlmostSoldOut ; "last_unit")]
    #[test_case(0, StockStatus::OutOfStock ; "empty")]
    fn test_stock_classification(quantity: u32, expected: StockStatus) {
        assert_eq!(StockStatus::from_quantity(quantity), expected);
    }

    #[test]
    fn test_out_of_stock_is_not_purchasable() {
        assert!(!StockStatus::OutOfStock.is_purchasable());
        assert!(StockStatus::AlmostSoldOut.is_purchasable());
        assert!(StockStatus::InStock.is_purchasable());
    }

    #[test]
    fn test_variant_accessors() {
        let variant = Variant::new(7u32, "black", "./assets/black.jpg", 3);
        assert_eq!(variant.id(), VariantId(7));
        assert_eq!(variant.color(), "black");
        assert_eq!(variant.image_path(), "./assets/black.jpg");
        assert_eq!(variant.stock_status(), StockStatus::AlmostSoldOut);
    }
}
