//! View state for the storefront components.

mod catalog_state;
mod product_tabs_state;
mod review_feed;
mod review_form_state;

pub use catalog_state::{CartAction, CatalogState, DEFAULT_SHIPPING_FEE};
pub use product_tabs_state::{ProductTab, ProductTabsState};
pub use review_feed::ReviewFeed;
pub use review_form_state::{FormState, ReviewFormState};
