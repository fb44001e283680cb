//! Append-only list of reviews received from the event bus.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::application::services::{BusEvent, EventBus, Subscription, Topic};
use crate::domain::entities::Review;

/// Reviews delivered on [`Topic::ReviewSubmitted`] while this feed exists.
///
/// The feed subscribes when created and unsubscribes when dropped. Reviews are
/// kept in arrival order without deduplication.
#[derive(Debug)]
pub struct ReviewFeed {
    reviews: Arc<Mutex<Vec<Review>>>,
    _subscription: Subscription,
}

impl ReviewFeed {
    /// Creates an empty feed subscribed to `bus`.
    #[must_use]
    pub fn new(bus: &EventBus) -> Self {
        let reviews = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&reviews);
        let subscription = bus.subscribe(Topic::ReviewSubmitted, move |event| {
            let BusEvent::ReviewSubmitted(review) = event;
            let mut reviews = sink.lock();
            reviews.push(review.clone());
            debug!(count = reviews.len(), "Review appended to feed");
        });

        Self {
            reviews,
            _subscription: subscription,
        }
    }

    /// Returns a snapshot of the reviews in arrival order.
    #[must_use]
    pub fn reviews(&self) -> Vec<Review> {
        self.reviews.lock().clone()
    }

    /// Returns the number of reviews received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reviews.lock().len()
    }

    /// Returns whether no review has arrived yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reviews.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Rating;

    fn publish(bus: &EventBus, name: &str) {
        bus.publish(BusEvent::ReviewSubmitted(Review::new(
            name,
            "fine",
            Rating::new(3).unwrap(),
        )));
    }

    fn names(feed: &ReviewFeed) -> Vec<String> {
        feed.reviews()
            .iter()
            .map(|r| r.reviewer_name().to_string())
            .collect()
    }

    #[test]
    fn test_appends_in_arrival_order() {
        let bus = EventBus::new();
        let feed = ReviewFeed::new(&bus);
        assert!(feed.is_empty());

        publish(&bus, "first");
        publish(&bus, "second");
        publish(&bus, "first");

        assert_eq!(names(&feed), vec!["first", "second", "first"]);
    }

    #[test]
    fn test_no_replay_for_new_feed() {
        let bus = EventBus::new();
        let early = ReviewFeed::new(&bus);
        publish(&bus, "before");

        let late = ReviewFeed::new(&bus);
        assert!(late.is_empty());
        assert_eq!(early.len(), 1);

        publish(&bus, "after");
        assert_eq!(names(&late), vec!["after"]);
        assert_eq!(names(&early), vec!["before", "after"]);
    }

    #[test]
    fn test_drop_unsubscribes_feed() {
        let bus = EventBus::new();
        let feed = ReviewFeed::new(&bus);
        assert_eq!(bus.subscriber_count(Topic::ReviewSubmitted), 1);

        drop(feed);
        assert_eq!(bus.subscriber_count(Topic::ReviewSubmitted), 0);
    }
}
