//! Colour theme derived from the configured accent.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// Styles shared by the storefront widgets.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Accent colour.
    pub accent: Color,
    /// Panel titles.
    pub title_style: Style,
    /// Border of the focused panel.
    pub focused_border: Style,
    /// Border of other panels.
    pub unfocused_border: Style,
    /// Selected entries.
    pub selection_style: Style,
    /// Secondary text.
    pub dimmed_style: Style,
    /// Validation messages.
    pub error_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Yellow")
    }
}

impl Theme {
    /// Creates a theme from an accent colour name or hex code.
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    /// Creates a theme around `accent`.
    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        Self {
            accent,
            title_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            focused_border: Style::default().fg(accent),
            unfocused_border: Style::default().fg(Color::DarkGray),
            selection_style: Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
            dimmed_style: Style::default().fg(Color::DarkGray),
            error_style: Style::default().fg(Color::Red),
        }
    }

    /// Border style for a panel.
    #[must_use]
    pub const fn border(&self, focused: bool) -> Style {
        if focused {
            self.focused_border
        } else {
            self.unfocused_border
        }
    }
}

/// Maps a variant colour name to a terminal colour.
#[must_use]
pub fn swatch_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "brown" => Color::Rgb(139, 69, 19),
        "black" => Color::Rgb(30, 30, 30),
        _ => parse_color(name),
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Some((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        _ => Color::Yellow,
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim_start_matches('#');
    if !s.is_ascii() {
        return None;
    }

    let channel = |hex: &str| u8::from_str_radix(hex, 16).ok();
    match s.len() {
        6 => Some((channel(&s[0..2])?, channel(&s[2..4])?, channel(&s[4..6])?)),
        3 => Some((
            channel(&s[0..1].repeat(2))?,
            channel(&s[1..2].repeat(2))?,
            channel(&s[2..3].repeat(2))?,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("#FF0000"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("Orange"), Color::Indexed(208));
        assert_eq!(parse_color("Invalid"), Color::Yellow);
    }

    #[test]
    fn test_swatch_color_knows_brown() {
        assert_eq!(swatch_color("brown"), Color::Rgb(139, 69, 19));
        assert_eq!(swatch_color("green"), Color::Green);
    }

    #[test]
    fn test_border_follows_focus() {
        let theme = Theme::new("Cyan");
        assert_eq!(theme.border(true).fg, Some(Color::Cyan));
        assert_eq!(theme.border(false).fg, Some(Color::DarkGray));
    }
}
