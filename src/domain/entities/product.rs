//! Product entity.

use serde::{Deserialize, Serialize};

use super::variant::Variant;

/// A product with its purchasable variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    brand: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    details: Vec<String>,
    #[serde(default)]
    sizes: Vec<u32>,
    #[serde(default)]
    on_sale: bool,
    variants: Vec<Variant>,
}

impl Product {
    /// Creates a product without variants.
    #[must_use]
    pub fn new(brand: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            name: name.into(),
            description: String::new(),
            details: Vec::new(),
            sizes: Vec::new(),
            on_sale: false,
            variants: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the detail bullet points.
    #[must_use]
    pub fn with_details<I, S>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.details = details.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the available sizes.
    #[must_use]
    pub fn with_sizes(mut self, sizes: impl Into<Vec<u32>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    /// Marks the product as on sale.
    #[must_use]
    pub const fn with_sale(mut self, on_sale: bool) -> Self {
        self.on_sale = on_sale;
        self
    }

    /// Appends a variant.
    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    /// The leather boots shipped as the default catalog.
    #[must_use]
    pub fn boots() -> Self {
        Self::new("Vue Mastery", "Boots")
            .with_description(
                "Black leather boots. Shiny, new and beautiful. They will protect your feet well.",
            )
            .with_details(["Black leather", "Wasserdicht", "Gender-neutral"])
            .with_sizes([9, 10, 11])
            .with_sale(false)
            .with_variant(Variant::new(1u32, "black", "./assets/black_leather_boots.jpg", 11))
            .with_variant(Variant::new(2u32, "brown", "./assets/brown_leather_boots.jpg", 11))
    }

    /// Returns the brand.
    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Returns the product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the detail bullet points.
    #[must_use]
    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// Returns the available sizes.
    #[must_use]
    pub fn sizes(&self) -> &[u32] {
        &self.sizes
    }

    /// Returns whether the product is on sale.
    #[must_use]
    pub const fn on_sale(&self) -> bool {
        self.on_sale
    }

    /// Returns the variants in display order.
    #[must_use]
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }
}

impl Default for Product {
    fn default() -> Self {
        Self::boots()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::VariantId;

    #[test]
    fn test_default_catalog() {
        let product = Product::default();
        assert_eq!(product.brand(), "Vue Mastery");
        assert_eq!(product.name(), "Boots");
        assert_eq!(product.sizes(), &[9, 10, 11]);
        assert_eq!(product.details().len(), 3);
        assert!(!product.on_sale());

        let ids: Vec<_> = product.variants().iter().map(Variant::id).collect();
        assert_eq!(ids, vec![VariantId(1), VariantId(2)]);
    }

    #[test]
    fn test_deserialize_from_toml() {
        let product: Product = toml::from_str(
            r#"
            brand = "Acme"
            name = "Socks"

            [[variants]]
            id = 5
            color = "green"
            image_path = "socks.png"
            stock_quantity = 0
            "#,
        )
        .unwrap();

        assert_eq!(product.brand(), "Acme");
        assert!(product.details().is_empty());
        assert_eq!(product.variants()[0].id(), VariantId(5));
    }
}
