//! Review form state and submission.

use tracing::{debug, info};

use crate::application::services::{BusEvent, EventBus};
use crate::domain::entities::{Rating, Review};
use crate::domain::errors::{ReviewError, ReviewField, ValidationErrors};

/// Lifecycle of the review form.
///
/// A successful submit publishes the review and lands back on `Empty` in the
/// same call, so there is no observable "submitted" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Nothing entered and no pending errors.
    Empty,
    /// At least one field entered since the last submit attempt.
    Filled,
    /// The last submit attempt was rejected, and either nothing was edited
    /// since or every field was cleared again while messages are pending.
    ValidationFailed,
}

/// Collects a reviewer name, review text and rating and publishes the result.
#[derive(Debug)]
pub struct ReviewFormState {
    name: String,
    review: String,
    rating: Option<Rating>,
    errors: ValidationErrors,
    last_submit_failed: bool,
    bus: EventBus,
}

impl ReviewFormState {
    /// Creates an empty form that publishes on `bus`.
    #[must_use]
    pub fn new(bus: EventBus) -> Self {
        Self {
            name: String::new(),
            review: String::new(),
            rating: None,
            errors: ValidationErrors::new(),
            last_submit_failed: false,
            bus,
        }
    }

    /// Returns the reviewer name entered so far.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the review text entered so far.
    #[must_use]
    pub fn review(&self) -> &str {
        &self.review
    }

    /// Returns the chosen rating, if any.
    #[must_use]
    pub const fn rating(&self) -> Option<Rating> {
        self.rating
    }

    /// Returns messages accumulated by failed submits.
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Sets the reviewer name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.last_submit_failed = false;
    }

    /// Sets the review text.
    pub fn set_review(&mut self, review: impl Into<String>) {
        self.review = review.into();
        self.last_submit_failed = false;
    }

    /// Sets or clears the rating.
    pub fn set_rating(&mut self, rating: Option<Rating>) {
        self.rating = rating;
        self.last_submit_failed = false;
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> FormState {
        let nothing_entered = self.missing_fields().count() == ReviewField::ALL.len();
        if self.last_submit_failed || (nothing_entered && !self.errors.is_empty()) {
            FormState::ValidationFailed
        } else if nothing_entered {
            FormState::Empty
        } else {
            FormState::Filled
        }
    }

    fn is_present(&self, field: ReviewField) -> bool {
        match field {
            ReviewField::Name => !self.name.is_empty(),
            ReviewField::Review => !self.review.is_empty(),
            ReviewField::Rating => self.rating.is_some(),
        }
    }

    /// Iterates over unfilled fields in validation order.
    pub fn missing_fields(&self) -> impl Iterator<Item = ReviewField> + '_ {
        ReviewField::ALL
            .into_iter()
            .filter(|&field| !self.is_present(field))
    }

    /// Submits the form.
    ///
    /// With every field filled, publishes the review on the bus, empties the
    /// form and clears all errors. Otherwise records one message per missing
    /// field, keeping messages from earlier attempts.
    ///
    /// # Errors
    /// Returns [`ReviewError::Invalid`] with the accumulated messages when a
    /// field is missing.
    pub fn submit(&mut self) -> Result<Review, ReviewError> {
        let Some(rating) = self.rating.filter(|_| self.missing_fields().next().is_none()) else {
            let missing: Vec<ReviewField> = self.missing_fields().collect();
            for field in &missing {
                self.errors.insert(field.required_message());
            }
            self.last_submit_failed = true;
            debug!(?missing, errors = self.errors.len(), "Review rejected");
            return Err(ReviewError::Invalid(self.errors.clone()));
        };

        let review = Review::new(
            std::mem::take(&mut self.name),
            std::mem::take(&mut self.review),
            rating,
        );
        self.rating = None;
        self.errors.clear();
        self.last_submit_failed = false;

        let delivered = self.bus.publish(BusEvent::ReviewSubmitted(review.clone()));
        info!(
            reviewer = %review.reviewer_name(),
            rating = %review.rating(),
            delivered,
            "Review submitted"
        );
        Ok(review)
    }
}
