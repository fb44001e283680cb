//! Catalog view state: variant selection and the values derived from it.

use tracing::{debug, info};

use crate::domain::entities::{Cart, Price, Product, Shipping, StockStatus, Variant, VariantId};
use crate::domain::errors::CatalogError;

/// Flat shipping fee charged to non-premium customers.
pub const DEFAULT_SHIPPING_FEE: Price = Price::from_cents(299);

/// Cart change requested by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    /// Append the selected variant.
    Add(VariantId),
    /// Drop the most recently added entry. The ID names the variant that was
    /// selected when the action fired; it does not pick which entry goes.
    Remove(VariantId),
    /// Empty the cart.
    Reset,
}

impl CartAction {
    /// Applies the action to the root cart.
    pub fn apply_to(self, cart: &mut Cart) {
        match self {
            Self::Add(id) => {
                cart.add_entry(id);
                info!(variant = %id, items = cart.len(), "Added to cart");
            }
            Self::Remove(selected) => match cart.remove_last() {
                Some(removed) => {
                    info!(%selected, %removed, items = cart.len(), "Removed from cart");
                }
                None => debug!(%selected, "Remove on empty cart ignored"),
            },
            Self::Reset => {
                cart.reset();
                info!("Cart reset");
            }
        }
    }
}

/// Selection state for one product and its presentation values.
#[derive(Debug, Clone)]
pub struct CatalogState {
    product: Product,
    selected: usize,
    premium: bool,
    shipping_fee: Price,
}

impl CatalogState {
    /// Creates catalog state with the first variant selected.
    ///
    /// # Errors
    /// Returns [`CatalogError::NoVariants`] if the product has no variants.
    pub fn new(product: Product, premium: bool) -> Result<Self, CatalogError> {
        if product.variants().is_empty() {
            return Err(CatalogError::NoVariants {
                product: format!("{} {}", product.brand(), product.name()),
            });
        }

        Ok(Self {
            product,
            selected: 0,
            premium,
            shipping_fee: DEFAULT_SHIPPING_FEE,
        })
    }

    /// Overrides the flat shipping fee.
    #[must_use]
    pub const fn with_shipping_fee(mut self, fee: Price) -> Self {
        self.shipping_fee = fee;
        self
    }

    /// Returns the displayed product.
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    /// Returns the index of the selected variant.
    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    /// Returns the selected variant.
    #[must_use]
    pub fn selected_variant(&self) -> &Variant {
        &self.product.variants()[self.selected]
    }

    /// Selects the variant at `index`. Out of range indices are ignored.
    ///
    /// Returns whether the selection changed.
    pub fn select_variant(&mut self, index: usize) -> bool {
        if index >= self.product.variants().len() || index == self.selected {
            return false;
        }
        self.selected = index;
        debug!(index, variant = %self.selected_variant().id(), "Variant selected");
        true
    }

    /// Selects the next variant, wrapping around.
    pub fn select_next(&mut self) -> bool {
        let len = self.product.variants().len();
        self.select_variant((self.selected + 1) % len)
    }

    /// Selects the previous variant, wrapping around.
    pub fn select_previous(&mut self) -> bool {
        let len = self.product.variants().len();
        self.select_variant((self.selected + len - 1) % len)
    }

    /// Returns `"{brand} {product}"`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} {}", self.product.brand(), self.product.name())
    }

    /// Returns the image path of the selected variant.
    #[must_use]
    pub fn image(&self) -> &str {
        self.selected_variant().image_path()
    }

    /// Returns the shipping charge for the current customer.
    #[must_use]
    pub const fn shipping(&self) -> Shipping {
        Shipping::for_customer(self.premium, self.shipping_fee)
    }

    /// Returns the stock classification of the selected variant.
    #[must_use]
    pub fn stock_status(&self) -> StockStatus {
        self.selected_variant().stock_status()
    }

    /// Returns whether the add to cart action is enabled.
    #[must_use]
    pub fn can_add_to_cart(&self) -> bool {
        self.stock_status().is_purchasable()
    }

    /// Returns the sale banner, empty when the product is not on sale.
    #[must_use]
    pub fn sale_banner(&self) -> String {
        if self.product.on_sale() {
            format!("{} are currently on Sale!", self.title())
        } else {
            String::new()
        }
    }

    /// Requests adding the selected variant. `None` while out of stock.
    #[must_use]
    pub fn add_to_cart(&self) -> Option<CartAction> {
        if self.can_add_to_cart() {
            Some(CartAction::Add(self.selected_variant().id()))
        } else {
            debug!(variant = %self.selected_variant().id(), "Add to cart disabled: out of stock");
            None
        }
    }

    /// Returns the remove intent for the selected variant.
    #[must_use]
    pub fn remove_from_cart(&self) -> CartAction {
        CartAction::Remove(self.selected_variant().id())
    }

    /// Returns the reset intent.
    #[must_use]
    pub const fn reset_cart(&self) -> CartAction {
        CartAction::Reset
    }
}
