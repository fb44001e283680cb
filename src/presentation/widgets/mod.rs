//! Reusable widgets.

mod header_bar;
mod input;
mod product_panel;
mod range_slider;
mod review_form;
mod review_list;
mod status_bar;
mod tab_strip;

pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use input::TextInput;
pub use product_panel::{CatalogButton, ProductPanel, ProductPanelState};
pub use range_slider::{RangeSlider, RangeSliderState};
pub use review_form::{FormField, FormKeyResult, ReviewFormView, ReviewFormWidget};
pub use review_list::{EMPTY_MESSAGE, ReviewList};
pub use status_bar::{StatusBar, StatusLevel, StatusMessage};
pub use tab_strip::{TabStrip, TabStripState};
