//! UI screens.

mod app;
mod storefront_screen;

pub use app::App;
pub use storefront_screen::{Focus, StorefrontScreen, StorefrontScreenState};
