//! Submitted reviews, oldest first.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::domain::entities::Review;
use crate::presentation::theme::Theme;

/// Shown when no review has been submitted.
pub const EMPTY_MESSAGE: &str = "There are no reviews yet.";

/// Submitted reviews, newest at the bottom.
pub struct ReviewList<'a> {
    reviews: &'a [Review],
    theme: &'a Theme,
}

impl<'a> ReviewList<'a> {
    /// Creates a list over `reviews`.
    #[must_use]
    pub const fn new(reviews: &'a [Review], theme: &'a Theme) -> Self {
        Self { reviews, theme }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        if self.reviews.is_empty() {
            return vec![Line::from(Span::styled(EMPTY_MESSAGE, self.theme.dimmed_style))];
        }

        let mut lines = Vec::with_capacity(self.reviews.len() * 4);
        for review in self.reviews {
            lines.push(Line::from(Span::styled(
                review.reviewer_name(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(vec![
                Span::raw(format!("Rating: {} ", review.rating())),
                Span::styled(review.rating().stars(), Style::default().fg(Color::Yellow)),
            ]));
            lines.push(Line::from(review.text()));
            lines.push(Line::default());
        }
        lines
    }
}

impl Widget for ReviewList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        // Keep the newest review in view.
        let overflow = lines.len().saturating_sub(usize::from(area.height));
        let scroll = u16::try_from(overflow).unwrap_or(u16::MAX);
        Paragraph::new(lines).scroll((scroll, 0)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Rating;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_empty_state_message() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        ReviewList::new(&[], &theme).render(area, &mut buf);
        assert!(row(&buf, 0).starts_with(EMPTY_MESSAGE));
    }

    #[test]
    fn test_reviews_in_arrival_order() {
        let theme = Theme::default();
        let reviews = vec![
            Review::new("Ada", "Comfy", Rating::new(5).unwrap()),
            Review::new("Grace", "Tight", Rating::new(2).unwrap()),
        ];
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);
        ReviewList::new(&reviews, &theme).render(area, &mut buf);

        assert!(row(&buf, 0).starts_with("Ada"));
        assert!(row(&buf, 1).starts_with("Rating: 5"));
        assert!(row(&buf, 2).starts_with("Comfy"));
        assert!(row(&buf, 4).starts_with("Grace"));
    }

    #[test]
    fn test_scrolls_to_newest() {
        let theme = Theme::default();
        let reviews: Vec<_> = (1..=3)
            .map(|i| Review::new(format!("r{i}"), "ok", Rating::new(3).unwrap()))
            .collect();
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        ReviewList::new(&reviews, &theme).render(area, &mut buf);

        assert!(row(&buf, 0).starts_with("r3"));
    }
}
