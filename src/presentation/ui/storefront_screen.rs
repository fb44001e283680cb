//! Storefront screen: product, cart, review tabs and slider in one layout.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    widgets::{Block, Borders, StatefulWidget, Widget},
};
use tracing::debug;

use crate::application::{
    CartAction, CatalogState, EventBus, ProductTab, ProductTabsState, ReviewFeed, ReviewFormState,
};
use crate::domain::entities::Cart;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    CatalogButton, FormField, FormKeyResult, HeaderBar, HeaderBarStyle, ProductPanel,
    ProductPanelState, RangeSlider, RangeSliderState, ReviewFormView, ReviewFormWidget, ReviewList,
    StatusBar, StatusMessage, TabStrip, TabStripState,
};

/// Panel that receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Product panel.
    #[default]
    Catalog,
    /// Tab strip.
    Tabs,
    /// Review form.
    Form,
    /// Range slider.
    Slider,
}

impl Focus {
    const ORDER: [Self; 4] = [Self::Catalog, Self::Tabs, Self::Form, Self::Slider];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|&f| f == self).unwrap_or(0)
    }
}

const CATALOG_HINTS: &[(&str, &str)] = &[
    ("←/→", "color"),
    ("a", "add"),
    ("r", "remove"),
    ("x", "reset"),
    ("Tab", "focus"),
    ("q", "quit"),
];
const TABS_HINTS: &[(&str, &str)] = &[
    ("←/→", "switch tab"),
    ("Enter", "write review"),
    ("Tab", "focus"),
    ("q", "quit"),
];
const FORM_HINTS: &[(&str, &str)] = &[
    ("↑/↓", "field"),
    ("←/→", "rating"),
    ("Enter", "next/submit"),
    ("Esc", "back"),
];
const SLIDER_HINTS: &[(&str, &str)] = &[("←/→", "±1"), ("PgUp/PgDn", "±10"), ("q", "quit")];

/// Root view state. Owns the cart the catalog's actions are applied to.
#[derive(Debug)]
pub struct StorefrontScreenState {
    catalog: CatalogState,
    cart: Cart,
    tabs: ProductTabsState,
    feed: ReviewFeed,
    form: ReviewFormView,
    slider: RangeSliderState,
    focus: Focus,
    status: Option<StatusMessage>,
    theme: Theme,
    product_areas: ProductPanelState,
    tab_areas: TabStripState,
}

impl StorefrontScreenState {
    /// Builds the screen. The review feed subscribes to `bus` here and the
    /// form publishes on it.
    #[must_use]
    pub fn new(catalog: CatalogState, bus: &EventBus, theme: Theme) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            tabs: ProductTabsState::new(),
            feed: ReviewFeed::new(bus),
            form: ReviewFormView::new(ReviewFormState::new(bus.clone())),
            slider: RangeSliderState::new(),
            focus: Focus::default(),
            status: None,
            theme,
            product_areas: ProductPanelState::default(),
            tab_areas: TabStripState::default(),
        }
    }

    /// Returns the focused panel.
    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns the cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Returns the catalog state.
    #[must_use]
    pub const fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    /// Returns the tab state.
    #[must_use]
    pub const fn tabs(&self) -> &ProductTabsState {
        &self.tabs
    }

    /// Returns the review feed.
    #[must_use]
    pub const fn feed(&self) -> &ReviewFeed {
        &self.feed
    }

    /// Returns the slider state.
    #[must_use]
    pub const fn slider(&self) -> &RangeSliderState {
        &self.slider
    }

    /// Returns the current status message.
    #[must_use]
    pub const fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    fn focus_available(&self, focus: Focus) -> bool {
        focus != Focus::Form || self.tabs.selected() == ProductTab::MakeAReview
    }

    fn cycle_focus(&mut self, forward: bool) {
        let len = Focus::ORDER.len();
        let mut index = self.focus.position();
        loop {
            index = if forward { (index + 1) % len } else { (index + len - 1) % len };
            let candidate = Focus::ORDER[index];
            if self.focus_available(candidate) {
                self.focus = candidate;
                break;
            }
        }
        debug!(focus = ?self.focus, "Focus changed");
    }

    fn select_tab(&mut self, tab: ProductTab) {
        self.tabs.select(tab);
        if !self.focus_available(self.focus) {
            self.focus = Focus::Tabs;
        }
    }

    fn apply_cart_action(&mut self, action: Option<CartAction>) {
        let Some(action) = action else {
            self.status = Some(StatusMessage::error("Out of stock"));
            return;
        };
        action.apply_to(&mut self.cart);
        let message = match action {
            CartAction::Add(id) => format!("Added variant {id}"),
            CartAction::Remove(_) => "Removed last item".to_string(),
            CartAction::Reset => "Cart emptied".to_string(),
        };
        self.status = Some(StatusMessage::info(message));
    }

    fn press_button(&mut self, button: CatalogButton) {
        let action = match button {
            CatalogButton::AddToCart => self.catalog.add_to_cart(),
            CatalogButton::RemoveItem => Some(self.catalog.remove_from_cart()),
            CatalogButton::ResetCart => Some(self.catalog.reset_cart()),
        };
        self.apply_cart_action(action);
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_force_quit_event(&key) {
            return EventResult::Exit;
        }
        if EventHandler::is_focus_next_event(&key) {
            self.cycle_focus(true);
            return EventResult::Continue;
        }
        if EventHandler::is_focus_previous_event(&key) {
            self.cycle_focus(false);
            return EventResult::Continue;
        }

        if self.focus == Focus::Form {
            self.handle_form_key(key);
            return EventResult::Continue;
        }

        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        match self.focus {
            Focus::Catalog => self.handle_catalog_key(key),
            Focus::Tabs => self.handle_tabs_key(key),
            Focus::Slider => self.handle_slider_key(key),
            Focus::Form => {}
        }
        EventResult::Continue
    }

    fn handle_catalog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.catalog.select_previous();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.catalog.select_next();
            }
            KeyCode::Char(c) => {
                if let Some(button) = CatalogButton::ALL.into_iter().find(|b| b.key_hint() == c) {
                    self.press_button(button);
                }
            }
            _ => {}
        }
    }

    fn handle_tabs_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Right => {
                self.tabs.next();
            }
            _ if EventHandler::is_submit_event(&key)
                && self.tabs.selected() == ProductTab::MakeAReview =>
            {
                self.form.focus_field(FormField::Name);
                self.focus = Focus::Form;
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match self.form.handle_key(key) {
            FormKeyResult::Submitted(review) => {
                self.status = Some(StatusMessage::success(format!(
                    "Thanks for your review, {}!",
                    review.reviewer_name()
                )));
            }
            FormKeyResult::Rejected(err) => {
                self.status = Some(StatusMessage::error(format!(
                    "{} field(s) need attention",
                    err.errors().len()
                )));
            }
            FormKeyResult::Leave => self.focus = Focus::Tabs,
            FormKeyResult::Consumed | FormKeyResult::Ignored => {}
        }
    }

    fn handle_slider_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.slider.decrement(1),
            KeyCode::Right => self.slider.increment(1),
            KeyCode::PageDown => self.slider.decrement(10),
            KeyCode::PageUp => self.slider.increment(10),
            KeyCode::Home => self.slider.set(RangeSliderState::MIN),
            KeyCode::End => self.slider.set(RangeSliderState::MAX),
            _ => {}
        }
    }

    /// Handles pointer input. Hovering a swatch selects its variant.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                if let Some(index) = self.product_areas.swatch_at(position) {
                    self.catalog.select_variant(index);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.product_areas.swatch_at(position) {
                    self.catalog.select_variant(index);
                    self.focus = Focus::Catalog;
                } else if let Some(button) = self.product_areas.button_at(position) {
                    self.focus = Focus::Catalog;
                    self.press_button(button);
                } else if let Some(tab) = self.tab_areas.tab_at(position) {
                    self.select_tab(tab);
                    if self.focus != Focus::Form {
                        self.focus = Focus::Tabs;
                    }
                }
            }
            _ => {}
        }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.focus {
            Focus::Catalog => CATALOG_HINTS,
            Focus::Tabs => TABS_HINTS,
            Focus::Form => FORM_HINTS,
            Focus::Slider => SLIDER_HINTS,
        }
    }
}

/// Renders [`StorefrontScreenState`].
pub struct StorefrontScreen;

impl StorefrontScreen {
    /// Creates the renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StorefrontScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl StatefulWidget for StorefrontScreen {
    type State = StorefrontScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [header_area, body_area, slider_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

        HeaderBar::new(crate::NAME, crate::VERSION)
            .cart_items(state.cart.len())
            .style(HeaderBarStyle::from_theme(&state.theme))
            .render(header_area, buf);

        let [product_area, tabs_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(body_area);

        ProductPanel::new(&state.catalog, &state.theme)
            .focused(state.focus == Focus::Catalog)
            .render(product_area, buf, &mut state.product_areas);

        let tabs_block = Block::default()
            .borders(Borders::ALL)
            .border_style(
                state
                    .theme
                    .border(matches!(state.focus, Focus::Tabs | Focus::Form)),
            )
            .title(" Reviews ");
        let tabs_inner = tabs_block.inner(tabs_area);
        tabs_block.render(tabs_area, buf);

        let [strip_area, _, content_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(tabs_inner);

        TabStrip::new(state.tabs.selected(), &state.theme).render(
            strip_area,
            buf,
            &mut state.tab_areas,
        );

        match state.tabs.selected() {
            ProductTab::Reviews => {
                let reviews = state.feed.reviews();
                ReviewList::new(&reviews, &state.theme).render(content_area, buf);
            }
            ProductTab::MakeAReview => {
                ReviewFormWidget::new(&state.form, &state.theme)
                    .focused(state.focus == Focus::Form)
                    .render(content_area, buf);
            }
        }

        RangeSlider::new(&state.slider, &state.theme)
            .focused(state.focus == Focus::Slider)
            .render(slider_area, buf);

        StatusBar::new(state.hints())
            .message(state.status.as_ref())
            .render(status_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Product, VariantId};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn chars(state: &mut StorefrontScreenState, text: &str) {
        for c in text.chars() {
            state.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn screen() -> StorefrontScreenState {
        let catalog = CatalogState::new(Product::boots(), true).unwrap();
        StorefrontScreenState::new(catalog, &EventBus::new(), Theme::default())
    }

    fn render(state: &mut StorefrontScreenState) -> Buffer {
        let area = Rect::new(0, 0, 120, 32);
        let mut buf = Buffer::empty(area);
        StorefrontScreen::new().render(area, &mut buf, state);
        buf
    }

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| (area.left()..area.right()).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_cart_keys() {
        let mut state = screen();
        state.handle_key(key(KeyCode::Char('a')));
        state.handle_key(key(KeyCode::Right));
        state.handle_key(key(KeyCode::Char('a')));
        assert_eq!(state.cart().entries(), &[VariantId(1), VariantId(2)]);

        state.handle_key(key(KeyCode::Char('r')));
        assert_eq!(state.cart().entries(), &[VariantId(1)]);

        state.handle_key(key(KeyCode::Char('x')));
        assert!(state.cart().is_empty());
    }

    #[test]
    fn test_quit_keys_outside_form() {
        let mut state = screen();
        assert_eq!(state.handle_key(key(KeyCode::Char('q'))), EventResult::Exit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(state.handle_key(ctrl_c), EventResult::Exit);
    }

    #[test]
    fn test_focus_skips_form_on_reviews_tab() {
        let mut state = screen();
        state.handle_key(key(KeyCode::Tab));
        assert_eq!(state.focus(), Focus::Tabs);
        state.handle_key(key(KeyCode::Tab));
        assert_eq!(state.focus(), Focus::Slider);
        state.handle_key(key(KeyCode::BackTab));
        assert_eq!(state.focus(), Focus::Tabs);
    }

    #[test]
    fn test_review_round_trip_through_bus() {
        let mut state = screen();
        state.handle_key(key(KeyCode::Tab));
        state.handle_key(key(KeyCode::Right));
        assert_eq!(state.tabs().selected(), ProductTab::MakeAReview);
        state.handle_key(key(KeyCode::Enter));
        assert_eq!(state.focus(), Focus::Form);

        // 'q' is text while the form has focus.
        chars(&mut state, "Quinn");
        state.handle_key(key(KeyCode::Down));
        chars(&mut state, "quite good");
        state.handle_key(key(KeyCode::Down));
        chars(&mut state, "4");
        state.handle_key(key(KeyCode::Down));
        assert_eq!(state.handle_key(key(KeyCode::Enter)), EventResult::Continue);

        let reviews = state.feed().reviews();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].reviewer_name(), "Quinn");
        assert_eq!(reviews[0].text(), "quite good");
        assert_eq!(reviews[0].rating().value(), 4);
        assert!(state.status().is_some());

        state.handle_key(key(KeyCode::Esc));
        assert_eq!(state.focus(), Focus::Tabs);
        state.handle_key(key(KeyCode::Left));
        let text = buffer_text(&render(&mut state));
        assert!(text.contains("Quinn"));
        assert!(text.contains("Rating: 4"));
    }

    #[test]
    fn test_entering_form_starts_at_name_field() {
        let mut state = screen();
        state.handle_key(key(KeyCode::Tab));
        state.handle_key(key(KeyCode::Right));
        state.handle_key(key(KeyCode::Enter));
        state.handle_key(key(KeyCode::Down));
        state.handle_key(key(KeyCode::Down));
        assert_eq!(state.form.field(), FormField::Rating);

        state.handle_key(key(KeyCode::Esc));
        assert_eq!(state.focus(), Focus::Tabs);
        state.handle_key(key(KeyCode::Enter));

        assert_eq!(state.focus(), Focus::Form);
        assert_eq!(state.form.field(), FormField::Name);
    }

    #[test]
    fn test_empty_reviews_message_rendered() {
        let mut state = screen();
        let text = buffer_text(&render(&mut state));
        assert!(text.contains("There are no reviews yet."));
        assert!(text.contains("Cart(0)"));
    }

    #[test]
    fn test_mouse_hover_selects_swatch() {
        let mut state = screen();
        render(&mut state);

        let area = Rect::new(0, 0, 120, 32);
        let second = area
            .positions()
            .find(|&p| state.product_areas.swatch_at(p) == Some(1))
            .expect("second swatch rendered");
        state.handle_mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: second.x,
            row: second.y,
            modifiers: KeyModifiers::NONE,
        });

        assert_eq!(state.catalog().selected_index(), 1);
        assert_eq!(state.catalog().image(), "./assets/brown_leather_boots.jpg");
    }

    #[test]
    fn test_mouse_click_on_tab() {
        let mut state = screen();
        render(&mut state);
        let click = |column, row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };

        // Tab strip starts inside the right-hand panel border.
        let strip_x = 60 + 1 + 13;
        state.handle_mouse(click(strip_x, 2));
        assert_eq!(state.tabs().selected(), ProductTab::MakeAReview);
        assert_eq!(state.focus(), Focus::Tabs);
    }

    #[test]
    fn test_slider_keys() {
        let mut state = screen();
        state.handle_key(key(KeyCode::BackTab));
        assert_eq!(state.focus(), Focus::Slider);
        state.handle_key(key(KeyCode::Right));
        state.handle_key(key(KeyCode::PageUp));
        assert_eq!(state.slider().value(), 56);
    }
}
