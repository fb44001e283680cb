//! Storefront - a single-product terminal shop.
//!
//! This crate renders one product with colour variants, a cart counter and a
//! review board whose form and list talk through an in-process event bus.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing view-model state and the event bus.
pub mod application;
/// Domain layer containing entities and error types.
pub mod domain;
/// Infrastructure layer containing configuration storage.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "storefront";
