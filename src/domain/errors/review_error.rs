//! Review submission errors.

use std::fmt;

use thiserror::Error;

/// A review form field that must be filled before submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewField {
    /// Reviewer name.
    Name,
    /// Free-text review.
    Review,
    /// Star rating.
    Rating,
}

impl ReviewField {
    /// All fields in validation order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Review, Self::Rating];

    /// Message shown when the field is missing.
    #[must_use]
    pub const fn required_message(self) -> &'static str {
        match self {
            Self::Name => "Name required.",
            Self::Review => "Review required.",
            Self::Rating => "Rating required.",
        }
    }
}

/// Ordered set of validation messages, unique by text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    messages: Vec<String>,
}

impl ValidationErrors {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Appends `message` unless an identical one is already present.
    /// Returns whether it was added.
    pub fn insert(&mut self, message: impl Into<String>) -> bool {
        let message = message.into();
        if self.contains(&message) {
            return false;
        }
        self.messages.push(message);
        true
    }

    /// Returns whether `message` is present.
    #[must_use]
    pub fn contains(&self, message: &str) -> bool {
        self.messages.iter().any(|m| m == message)
    }

    /// Removes every message.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Returns the number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns whether there are no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterates over messages in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages.join(" "))
    }
}

/// Review submission error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    /// One or more required fields are missing.
    #[error("please correct the following error(s): {0}")]
    Invalid(ValidationErrors),
}

impl ReviewError {
    /// Returns the accumulated validation messages.
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        match self {
            Self::Invalid(errors) => errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_deduplicates_by_text() {
        let mut errors = ValidationErrors::new();
        assert!(errors.insert("Name required."));
        assert!(!errors.insert("Name required."));
        assert!(errors.insert("Rating required."));

        let messages: Vec<_> = errors.iter().collect();
        assert_eq!(messages, vec!["Name required.", "Rating required."]);
    }

    #[test]
    fn test_required_messages() {
        let messages: Vec<_> = ReviewField::ALL
            .iter()
            .map(|f| f.required_message())
            .collect();
        assert_eq!(
            messages,
            vec!["Name required.", "Review required.", "Rating required."]
        );
    }

    #[test]
    fn test_error_display_lists_messages() {
        let mut errors = ValidationErrors::new();
        errors.insert("Name required.");
        errors.insert("Review required.");
        let err = ReviewError::Invalid(errors);
        assert_eq!(
            err.to_string(),
            "please correct the following error(s): Name required. Review required."
        );
    }
}
