//! Price and shipping value objects.

use serde::{Deserialize, Serialize};

/// Monetary amount stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u32);

impl Price {
    /// Creates a price from an amount in cents.
    #[must_use]
    pub const fn from_cents(cents: u32) -> Self {
        Self(cents)
    }

}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Shipping cost shown for the selected variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shipping {
    /// Premium customers ship for free.
    Free,
    /// Flat fee for everyone else.
    Flat(Price),
}

impl Shipping {
    /// Picks the shipping cost for a customer tier.
    #[must_use]
    pub const fn for_customer(premium: bool, flat_fee: Price) -> Self {
        if premium { Self::Free } else { Self::Flat(flat_fee) }
    }
}

impl std::fmt::Display for Shipping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Free => f.write_str("Free"),
            Self::Flat(price) => write!(f, "{price}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_display_pads_cents() {
        assert_eq!(Price::from_cents(299).to_string(), "2.99");
        assert_eq!(Price::from_cents(1005).to_string(), "10.05");
        assert_eq!(Price::from_cents(0).to_string(), "0.00");
    }

    #[test]
    fn test_shipping_for_customer() {
        let fee = Price::from_cents(299);
        assert_eq!(Shipping::for_customer(true, fee), Shipping::Free);
        assert_eq!(Shipping::for_customer(false, fee), Shipping::Flat(fee));
        assert_eq!(Shipping::Free.to_string(), "Free");
        assert_eq!(Shipping::Flat(fee).to_string(), "2.99");
    }
}
