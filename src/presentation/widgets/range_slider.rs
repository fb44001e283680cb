//! Standalone 0-100 slider.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Gauge, Widget},
};

use crate::presentation::theme::Theme;

/// Integer slider value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSliderState {
    value: u8,
}

impl RangeSliderState {
    /// Lowest value.
    pub const MIN: u8 = 0;
    /// Highest value.
    pub const MAX: u8 = 100;
    /// Initial value.
    pub const DEFAULT: u8 = 45;

    /// Creates a slider at [`Self::DEFAULT`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: Self::DEFAULT,
        }
    }

    /// Returns the value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Sets the value, clamped to the slider bounds.
    pub fn set(&mut self, value: u8) {
        self.value = value.min(Self::MAX);
    }

    /// Raises the value by `step`, stopping at [`Self::MAX`].
    pub fn increment(&mut self, step: u8) {
        self.set(self.value.saturating_add(step));
    }

    /// Lowers the value by `step`, stopping at [`Self::MIN`].
    pub fn decrement(&mut self, step: u8) {
        self.set(self.value.saturating_sub(step));
    }
}

impl Default for RangeSliderState {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a [`RangeSliderState`] as a gauge.
pub struct RangeSlider<'a> {
    state: &'a RangeSliderState,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> RangeSlider<'a> {
    /// Creates a slider widget.
    #[must_use]
    pub const fn new(state: &'a RangeSliderState, theme: &'a Theme) -> Self {
        Self {
            state,
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
}

impl Widget for RangeSlider<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border(self.focused))
            .title(" Range ");

        Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(self.theme.accent))
            .percent(u16::from(self.state.value()))
            .label(self.state.value().to_string())
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_default() {
        assert_eq!(RangeSliderState::new().value(), 45);
    }

    #[test]
    fn test_saturates_at_bounds() {
        let mut slider = RangeSliderState::new();
        slider.increment(200);
        assert_eq!(slider.value(), 100);
        slider.decrement(150);
        assert_eq!(slider.value(), 0);
        slider.set(250);
        assert_eq!(slider.value(), 100);
    }

    #[test]
    fn test_step() {
        let mut slider = RangeSliderState::new();
        slider.increment(1);
        slider.increment(10);
        slider.decrement(1);
        assert_eq!(slider.value(), 55);
    }
}
