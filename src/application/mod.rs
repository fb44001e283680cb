//! Application layer with view state and shared services.

/// Shared services.
pub mod services;
/// Component view state.
pub mod state;

pub use services::{BusEvent, EventBus, Subscription, Topic};
pub use state::{
    CartAction, CatalogState, FormState, ProductTab, ProductTabsState, ReviewFeed, ReviewFormState,
};
