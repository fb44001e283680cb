//! Product review entity.

use serde::{Deserialize, Serialize};

use crate::domain::errors::RatingError;

/// Star rating between [`Rating::MIN`] and [`Rating::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest rating.
    pub const MIN: u8 = 1;
    /// Highest rating.
    pub const MAX: u8 = 5;

    /// Creates a rating, rejecting values outside the allowed range.
    ///
    /// # Errors
    /// Returns [`RatingError::OutOfRange`] when `value` is not in `1..=5`.
    pub const fn new(value: u8) -> Result<Self, RatingError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(RatingError::OutOfRange { value })
        }
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Every selectable rating, highest first, the order the selector offers them.
    #[must_use]
    pub fn choices() -> impl DoubleEndedIterator<Item = Self> {
        (Self::MIN..=Self::MAX).rev().map(Self)
    }

    /// Returns `★★★☆☆` style stars.
    #[must_use]
    pub fn stars(self) -> String {
        let filled = usize::from(self.0);
        let empty = usize::from(Self::MAX - self.0);
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A submitted review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    reviewer_name: String,
    text: String,
    rating: Rating,
}

impl Review {
    /// Creates a review from already validated parts.
    #[must_use]
    pub fn new(reviewer_name: impl Into<String>, text: impl Into<String>, rating: Rating) -> Self {
        Self {
            reviewer_name: reviewer_name.into(),
            text: text.into(),
            rating,
        }
    }

    /// Returns the reviewer name.
    #[must_use]
    pub fn reviewer_name(&self) -> &str {
        &self.reviewer_name
    }

    /// Returns the review text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the rating.
    #[must_use]
    pub const fn rating(&self) -> Rating {
        self.rating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert_eq!(Rating::new(1).unwrap().value(), 1);
        assert_eq!(Rating::new(5).unwrap().value(), 5);
        assert!(matches!(
            Rating::new(6),
            Err(RatingError::OutOfRange { value: 6 })
        ));
    }

    #[test]
    fn test_choices_highest_first() {
        let values: Vec<u8> = Rating::choices().map(Rating::value).collect();
        assert_eq!(values, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_stars() {
        assert_eq!(Rating::new(3).unwrap().stars(), "★★★☆☆");
        assert_eq!(Rating::new(5).unwrap().stars(), "★★★★★");
    }
}
