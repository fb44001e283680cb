//! In-process publish/subscribe service.
//!
//! The bus is created once by the application root and handed to every
//! component that publishes or listens. Delivery is synchronous: `publish`
//! returns only after every subscriber of the event's topic has run, in the
//! order they subscribed. Late subscribers never see earlier events.
//!
//! Each `subscribe` call returns a [`Subscription`] guard; dropping it removes
//! the handler, so a component's subscription lives exactly as long as the
//! component that holds the guard.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::domain::entities::Review;

/// Channel an event is published on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// A review passed validation and was submitted.
    ReviewSubmitted,
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReviewSubmitted => f.write_str("review-submitted"),
        }
    }
}

/// Events carried by the bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusEvent {
    /// Payload for [`Topic::ReviewSubmitted`].
    ReviewSubmitted(Review),
}

impl BusEvent {
    /// Returns the topic this event is delivered on.
    #[must_use]
    pub const fn topic(&self) -> Topic {
        match self {
            Self::ReviewSubmitted(_) => Topic::ReviewSubmitted,
        }
    }
}

type Handler = Arc<dyn Fn(&BusEvent) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SubscriptionId(u64);

struct Subscriber {
    id: SubscriptionId,
    topic: Topic,
    handler: Handler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    subscribers: Vec<Subscriber>,
}

impl Registry {
    fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() != before
    }
}

/// Shared handle to the publish/subscribe service.
///
/// Cloning yields another handle to the same bus.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Arc<Mutex<Registry>>,
}

impl EventBus {
    /// Creates a bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `topic`.
    ///
    /// The handler stays registered until the returned guard is dropped or
    /// [`Subscription::unsubscribe`] is called.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, topic: Topic, handler: F) -> Subscription
    where
        F: Fn(&BusEvent) + Send + Sync + 'static,
    {
        let mut registry = self.registry.lock();
        let id = SubscriptionId(registry.next_id);
        registry.next_id += 1;
        registry.subscribers.push(Subscriber {
            id,
            topic,
            handler: Arc::new(handler),
        });
        debug!(%topic, subscription = id.0, "Subscribed to event bus");

        Subscription {
            id,
            topic,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Delivers `event` to every current subscriber of its topic.
    ///
    /// Returns the number of handlers that received it. Handlers run on the
    /// caller's stack against a snapshot of the subscriber list, so they may
    /// publish or subscribe themselves. A panicking handler unwinds into the
    /// caller and the remaining handlers are skipped.
    pub fn publish(&self, event: BusEvent) -> usize {
        let topic = event.topic();
        let handlers: Vec<Handler> = self
            .registry
            .lock()
            .subscribers
            .iter()
            .filter(|s| s.topic == topic)
            .map(|s| Arc::clone(&s.handler))
            .collect();

        trace!(%topic, subscribers = handlers.len(), "Publishing event");
        for handler in &handlers {
            handler(&event);
        }
        handlers.len()
    }

    /// Returns the number of subscribers currently registered for `topic`.
    #[must_use]
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.registry
            .lock()
            .subscribers
            .iter()
            .filter(|s| s.topic == topic)
            .count()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registry = self.registry.lock();
        f.debug_struct("EventBus")
            .field("subscribers", &registry.subscribers.len())
            .finish()
    }
}

/// Guard that keeps a handler registered on an [`EventBus`].
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    topic: Topic,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Returns whether the handler is still registered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.lock().subscribers.iter().any(|s| s.id == self.id))
    }

    /// Removes the handler now.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let removed = registry.lock().remove(self.id);
        if removed {
            debug!(topic = %self.topic, subscription = self.id.0, "Unsubscribed from event bus");
        }
    }
}
