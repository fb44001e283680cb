//! Tab titles for the review panel.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::application::ProductTab;
use crate::presentation::theme::Theme;

const DIVIDER: &str = "│";

/// Title regions from the last render.
#[derive(Debug, Clone, Default)]
pub struct TabStripState {
    areas: Vec<(ProductTab, Rect)>,
}

impl TabStripState {
    /// Returns the tab under `position`.
    #[must_use]
    pub fn tab_at(&self, position: Position) -> Option<ProductTab> {
        self.areas
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(tab, _)| *tab)
    }
}

/// Tab titles separated by a divider.
pub struct TabStrip<'a> {
    selected: ProductTab,
    theme: &'a Theme,
}

impl<'a> TabStrip<'a> {
    /// Creates a strip highlighting `selected`.
    #[must_use]
    pub const fn new(selected: ProductTab, theme: &'a Theme) -> Self {
        Self { selected, theme }
    }
}

impl StatefulWidget for TabStrip<'_> {
    type State = TabStripState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.areas.clear();
        let mut spans = Vec::new();
        let mut x = area.x;

        for (index, tab) in ProductTab::ALL.into_iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(DIVIDER, self.theme.dimmed_style));
                x = x.saturating_add(1);
            }
            let title = format!(" {} ", tab.title());
            let width = u16::try_from(title.width()).unwrap_or(u16::MAX);
            let style = if tab == self.selected {
                self.theme.selection_style
            } else {
                Style::default()
            };
            spans.push(Span::styled(title, style));

            let rect = Rect::new(x, area.y, width, area.height.min(1)).intersection(area);
            if !rect.is_empty() {
                state.areas.push((tab, rect));
            }
            x = x.saturating_add(width);
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_title_areas() {
        let theme = Theme::default();
        let area = Rect::new(2, 1, 40, 1);
        let mut buf = Buffer::empty(area);
        let mut state = TabStripState::default();
        TabStrip::new(ProductTab::Reviews, &theme).render(area, &mut buf, &mut state);

        assert_eq!(state.tab_at(Position::new(3, 1)), Some(ProductTab::Reviews));
        // " Reviews " is 9 wide, then the divider, then " Make a Review ".
        assert_eq!(state.tab_at(Position::new(11, 1)), None);
        assert_eq!(state.tab_at(Position::new(13, 1)), Some(ProductTab::MakeAReview));
        assert_eq!(state.tab_at(Position::new(3, 0)), None);
    }

    #[test]
    fn test_selected_tab_highlighted() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        let mut state = TabStripState::default();
        TabStrip::new(ProductTab::MakeAReview, &theme).render(area, &mut buf, &mut state);

        assert_eq!(buf[(12, 0)].bg, theme.accent);
        assert_ne!(buf[(2, 0)].bg, theme.accent);
    }
}
