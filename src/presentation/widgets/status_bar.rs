//! Status bar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Informational.
    Info,
    /// Success.
    Success,
    /// Error.
    Error,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }
}

/// Last action message shown at the bottom of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Message text.
    pub text: String,
    /// Severity.
    pub level: StatusLevel,
}

impl StatusMessage {
    /// Creates an informational message.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: StatusLevel::Info,
        }
    }

    /// Creates a success message.
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: StatusLevel::Success,
        }
    }

    /// Creates an error message.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: StatusLevel::Error,
        }
    }
}

/// Key hints on the left, the latest message on the right.
pub struct StatusBar<'a> {
    hints: &'a [(&'a str, &'a str)],
    message: Option<&'a StatusMessage>,
}

impl<'a> StatusBar<'a> {
    /// Creates a status bar with key hints.
    #[must_use]
    pub const fn new(hints: &'a [(&'a str, &'a str)]) -> Self {
        Self {
            hints,
            message: None,
        }
    }

    /// Sets the status message.
    #[must_use]
    pub const fn message(mut self, message: Option<&'a StatusMessage>) -> Self {
        self.message = message;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key_style = Style::default().fg(Color::Black).bg(Color::DarkGray);
        let label_style = Style::default().fg(Color::DarkGray);

        let mut spans = Vec::new();
        for (key, label) in self.hints {
            spans.push(Span::styled(format!(" {key} "), key_style));
            spans.push(Span::styled(format!(" {label}  "), label_style));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);

        if let Some(message) = self.message {
            let style = Style::default()
                .fg(message.level.color())
                .add_modifier(Modifier::BOLD);
            let width = u16::try_from(message.text.width()).unwrap_or(u16::MAX);
            let width = width.min(area.width);
            let right = Rect::new(area.right() - width, area.y, width, area.height.min(1));
            Paragraph::new(Span::styled(message.text.as_str(), style)).render(right, buf);
        }
    }
}
