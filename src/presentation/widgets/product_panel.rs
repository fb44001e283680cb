//! Product panel: image, description, swatches, stock and cart buttons.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};

use crate::application::CatalogState;
use crate::domain::entities::StockStatus;
use crate::presentation::theme::{Theme, swatch_color};

const SWATCH_WIDTH: u16 = 4;
const SWATCH_GAP: u16 = 1;
const BUTTON_GAP: u16 = 1;

/// Buttons under the product description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogButton {
    /// Adds the selected variant.
    AddToCart,
    /// Removes the last cart entry.
    RemoveItem,
    /// Empties the cart.
    ResetCart,
}

impl CatalogButton {
    /// Buttons in display order.
    pub const ALL: [Self; 3] = [Self::AddToCart, Self::RemoveItem, Self::ResetCart];

    /// Returns the button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AddToCart => "[ Add to Cart ]",
            Self::RemoveItem => "[ Remove Item ]",
            Self::ResetCart => "[ Reset Cart ]",
        }
    }

    /// Returns the shortcut key.
    #[must_use]
    pub const fn key_hint(self) -> char {
        match self {
            Self::AddToCart => 'a',
            Self::RemoveItem => 'r',
            Self::ResetCart => 'x',
        }
    }
}

/// Screen regions recorded during the last render, used for mouse hit tests.
#[derive(Debug, Clone, Default)]
pub struct ProductPanelState {
    swatches: Vec<Rect>,
    buttons: Vec<(CatalogButton, Rect)>,
}

impl ProductPanelState {
    /// Returns the index of the swatch under `position`.
    #[must_use]
    pub fn swatch_at(&self, position: Position) -> Option<usize> {
        self.swatches.iter().position(|area| area.contains(position))
    }

    /// Returns the button under `position`.
    #[must_use]
    pub fn button_at(&self, position: Position) -> Option<CatalogButton> {
        self.buttons
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(button, _)| *button)
    }
}

/// Product details, swatches and cart buttons.
pub struct ProductPanel<'a> {
    catalog: &'a CatalogState,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> ProductPanel<'a> {
    /// Creates a panel for `catalog`.
    #[must_use]
    pub const fn new(catalog: &'a CatalogState, theme: &'a Theme) -> Self {
        Self {
            catalog,
            theme,
            focused: false,
        }
    }

    /// Sets focus state.
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn stock_line(&self) -> Line<'static> {
        let status = self.catalog.stock_status();
        let style = match status {
            StockStatus::InStock => Style::default().fg(Color::Green),
            StockStatus::AlmostSoldOut => Style::default().fg(Color::Yellow),
            StockStatus::OutOfStock => Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::CROSSED_OUT),
        };
        Line::from(Span::styled(status.label(), style))
    }

    fn swatch_line(&self) -> Line<'static> {
        let selected = self.catalog.selected_index();
        let mut spans = Vec::new();
        for (index, variant) in self.catalog.product().variants().iter().enumerate() {
            let color = swatch_color(variant.color());
            let (body, style) = if index == selected {
                ("▐██▌", Style::default().fg(color).add_modifier(Modifier::BOLD))
            } else {
                (" ██ ", Style::default().fg(color))
            };
            spans.push(Span::styled(body, style));
            spans.push(Span::raw(" ".repeat(usize::from(SWATCH_GAP))));
        }
        spans.push(Span::styled(
            self.catalog.selected_variant().color().to_string(),
            self.theme.dimmed_style,
        ));
        Line::from(spans)
    }

    fn button_line(&self) -> Line<'static> {
        let spans: Vec<Span<'static>> = CatalogButton::ALL
            .iter()
            .flat_map(|&button| {
                let enabled = button != CatalogButton::AddToCart || self.catalog.can_add_to_cart();
                let style = if enabled {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                } else {
                    self.theme.dimmed_style.add_modifier(Modifier::CROSSED_OUT)
                };
                [
                    Span::styled(button.label(), style),
                    Span::raw(" ".repeat(usize::from(BUTTON_GAP))),
                ]
            })
            .collect();
        Line::from(spans)
    }
}

impl StatefulWidget for ProductPanel<'_> {
    type State = ProductPanelState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border(self.focused))
            .title(" Product ");
        let inner = block.inner(area);
        block.render(area, buf);

        let product = self.catalog.product();
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Image: ", self.theme.dimmed_style),
                Span::raw(self.catalog.image().to_string()),
            ]),
            Line::default(),
            Line::from(Span::styled(self.catalog.title(), self.theme.title_style)),
            Line::from(product.description().to_string()),
            Line::default(),
            Line::from(format!("Shipping: {}", self.catalog.shipping())),
        ];
        lines.extend(
            product
                .details()
                .iter()
                .map(|detail| Line::from(format!("  • {detail}"))),
        );
        lines.push(Line::from("Available sizes:"));
        let sizes: Vec<String> = product.sizes().iter().map(ToString::to_string).collect();
        lines.push(Line::from(format!("  {}", sizes.join("  "))));
        lines.push(Line::default());

        let swatch_row = lines.len();
        lines.push(self.swatch_line());
        lines.push(self.stock_line());
        let banner = self.catalog.sale_banner();
        if !banner.is_empty() {
            lines.push(Line::from(Span::styled(banner, self.theme.title_style)));
        }
        lines.push(Line::default());
        let button_row = lines.len();
        lines.push(self.button_line());

        Paragraph::new(lines).render(inner, buf);

        state.swatches = (0..product.variants().len())
            .filter_map(|index| {
                let offset = u16::try_from(index).ok()? * (SWATCH_WIDTH + SWATCH_GAP);
                row_rect(inner, swatch_row, offset, SWATCH_WIDTH)
            })
            .collect();

        let mut offset = 0u16;
        state.buttons.clear();
        for button in CatalogButton::ALL {
            let width = u16::try_from(button.label().len()).unwrap_or(u16::MAX);
            if let Some(rect) = row_rect(inner, button_row, offset, width) {
                state.buttons.push((button, rect));
            }
            offset = offset.saturating_add(width + BUTTON_GAP);
        }
    }
}

/// Rect for `width` columns starting `offset` columns into `row` of `inner`,
/// clipped to `inner`. `None` when nothing of it is visible.
fn row_rect(inner: Rect, row: usize, offset: u16, width: u16) -> Option<Rect> {
    let row = u16::try_from(row).ok()?;
    if row >= inner.height || offset >= inner.width {
        return None;
    }
    let rect = Rect::new(inner.x + offset, inner.y + row, width, 1);
    Some(rect.intersection(inner))
}
