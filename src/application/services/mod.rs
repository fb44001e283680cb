//! Application services.

/// Publish/subscribe event bus.
pub mod event_bus;

pub use event_bus::{BusEvent, EventBus, Subscription, Topic};
