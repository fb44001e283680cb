//! Top bar with the app name and cart counter.

use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Styles used by [`HeaderBar`].
pub struct HeaderBarStyle {
    /// Bar background.
    pub background: Style,
    /// Application name.
    pub app_name: Style,
    /// Version label.
    pub version: Style,
    /// Cart counter with items.
    pub cart: Style,
    /// Cart counter when empty.
    pub cart_empty: Style,
}

impl HeaderBarStyle {
    /// Derives styles from `theme`.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            app_name: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            cart: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            ..Self::default()
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            version: Style::default().fg(Color::DarkGray),
            cart: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            cart_empty: Style::default().bg(Color::DarkGray).fg(Color::White),
        }
    }
}

/// Top bar with the app name on the left and the cart counter on the right.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    version: &'a str,
    cart_items: usize,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    /// Creates a header bar.
    #[must_use]
    pub fn new(app_name: &'a str, version: &'a str) -> Self {
        Self {
            app_name,
            version,
            cart_items: 0,
            style: HeaderBarStyle::default(),
        }
    }

    /// Sets cart item count.
    #[must_use]
    pub const fn cart_items(mut self, count: usize) -> Self {
        self.cart_items = count;
        self
    }

    /// Sets style.
    #[must_use]
    pub fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    fn cart_label(&self) -> String {
        format!(" Cart({}) ", self.cart_items)
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let name = format!(" {} ", self.app_name.to_uppercase());
        let version = format!(" v{} ", self.version);
        let left_width = u16::try_from(name.width() + 1 + version.width()).unwrap_or(u16::MAX);
        let left_line = Line::from(vec![
            Span::styled(name, self.style.app_name),
            Span::raw(" "),
            Span::styled(version, self.style.version),
        ]);
        let left_area = Rect::new(area.x, area.y, left_width.min(area.width), 1);
        Paragraph::new(left_line).render(left_area, buf);

        let cart = self.cart_label();
        let cart_width = u16::try_from(cart.width()).unwrap_or(u16::MAX);
        if cart_width < area.width.saturating_sub(left_width) {
            let cart_style = if self.cart_items == 0 {
                self.style.cart_empty
            } else {
                self.style.cart
            };
            let right_area = Rect::new(area.right() - cart_width, area.y, cart_width, 1);
            Paragraph::new(Line::from(Span::styled(cart, cart_style))).render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer) -> String {
        (0..buf.area.width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_renders_cart_count_on_the_right() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        HeaderBar::new("storefront", "0.1.0")
            .cart_items(3)
            .render(area, &mut buf);

        let text = row(&buf);
        assert!(text.starts_with(" STOREFRONT "));
        assert!(text.trim_end().ends_with("Cart(3)"));
    }

    #[test]
    fn test_cart_hidden_when_too_narrow() {
        let area = Rect::new(0, 0, 22, 1);
        let mut buf = Buffer::empty(area);
        HeaderBar::new("storefront", "0.1.0").render(area, &mut buf);
        assert!(!row(&buf).contains("Cart"));
    }
}
