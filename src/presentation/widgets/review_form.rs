//! Review form: text inputs, rating selector and error list.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::input::TextInput;
use crate::application::ReviewFormState;
use crate::domain::entities::{Rating, Review};
use crate::domain::errors::ReviewError;
use crate::presentation::theme::Theme;

const ERROR_HEADING: &str = "Please correct the following error(s):";

/// Focusable rows of the form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Reviewer name input.
    #[default]
    Name,
    /// Review text input.
    Review,
    /// Star rating selector.
    Rating,
    /// Submit button.
    Submit,
}

impl FormField {
    const ORDER: [Self; 4] = [Self::Name, Self::Review, Self::Rating, Self::Submit];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|&f| f == self).unwrap_or(0)
    }

    /// Returns the field below, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Returns the field above, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Outcome of a key press inside the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormKeyResult {
    /// The key edited or navigated the form.
    Consumed,
    /// A review was published.
    Submitted(Review),
    /// Submit was rejected; messages are shown above the form.
    Rejected(ReviewError),
    /// The user asked to leave the form.
    Leave,
    /// The key has no meaning here.
    Ignored,
}

/// Input widgets bound to a [`ReviewFormState`].
#[derive(Debug)]
pub struct ReviewFormView {
    form: ReviewFormState,
    name_input: TextInput,
    review_input: TextInput,
    field: FormField,
}

impl ReviewFormView {
    /// Wraps `form` with focus on the name field.
    #[must_use]
    pub fn new(form: ReviewFormState) -> Self {
        Self {
            form,
            name_input: TextInput::new(" Name ").placeholder("name"),
            review_input: TextInput::new(" Review ").placeholder("what did you think?"),
            field: FormField::default(),
        }
    }

    /// Returns the bound form.
    #[must_use]
    pub const fn form(&self) -> &ReviewFormState {
        &self.form
    }

    /// Returns the focused field.
    #[must_use]
    pub const fn field(&self) -> FormField {
        self.field
    }

    /// Moves focus to `field`.
    pub fn focus_field(&mut self, field: FormField) {
        self.field = field;
    }

    fn active_input(&mut self) -> Option<&mut TextInput> {
        match self.field {
            FormField::Name => Some(&mut self.name_input),
            FormField::Review => Some(&mut self.review_input),
            FormField::Rating | FormField::Submit => None,
        }
    }

    fn sync_text(&mut self) {
        match self.field {
            FormField::Name => self.form.set_name(self.name_input.value()),
            FormField::Review => self.form.set_review(self.review_input.value()),
            FormField::Rating | FormField::Submit => {}
        }
    }

    fn step_rating(&mut self, towards_lower: bool) {
        let choices: Vec<Rating> = Rating::choices().collect();
        let next = match self.form.rating() {
            None => choices[0],
            Some(current) => {
                let index = choices.iter().position(|&r| r == current).unwrap_or(0);
                let index = if towards_lower {
                    (index + 1).min(choices.len() - 1)
                } else {
                    index.saturating_sub(1)
                };
                choices[index]
            }
        };
        self.form.set_rating(Some(next));
    }

    /// Submits the bound form, clearing the inputs on success.
    pub fn submit(&mut self) -> FormKeyResult {
        match self.form.submit() {
            Ok(review) => {
                self.name_input.clear();
                self.review_input.clear();
                self.field = FormField::Name;
                FormKeyResult::Submitted(review)
            }
            Err(err) => FormKeyResult::Rejected(err),
        }
    }

    /// Handles a key press while the form has focus.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormKeyResult {
        match key.code {
            KeyCode::Esc => return FormKeyResult::Leave,
            KeyCode::Up => {
                self.field = self.field.previous();
                return FormKeyResult::Consumed;
            }
            KeyCode::Down => {
                self.field = self.field.next();
                return FormKeyResult::Consumed;
            }
            KeyCode::Enter if self.field == FormField::Submit => return self.submit(),
            KeyCode::Enter => {
                self.field = self.field.next();
                return FormKeyResult::Consumed;
            }
            _ => {}
        }

        if self.field == FormField::Rating {
            return self.handle_rating_key(key);
        }

        let Some(input) = self.active_input() else {
            return FormKeyResult::Ignored;
        };
        match key.code {
            KeyCode::Char(c) => input.input_char(c),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_start(),
            KeyCode::End => input.move_end(),
            _ => return FormKeyResult::Ignored,
        }
        self.sync_text();
        FormKeyResult::Consumed
    }

    fn handle_rating_key(&mut self, key: KeyEvent) -> FormKeyResult {
        match key.code {
            KeyCode::Left => self.step_rating(false),
            KeyCode::Right => self.step_rating(true),
            KeyCode::Backspace | KeyCode::Delete => self.form.set_rating(None),
            KeyCode::Char(c) => {
                let Some(rating) = c
                    .to_digit(10)
                    .and_then(|d| u8::try_from(d).ok())
                    .and_then(|d| Rating::new(d).ok())
                else {
                    return FormKeyResult::Ignored;
                };
                self.form.set_rating(Some(rating));
            }
            _ => return FormKeyResult::Ignored,
        }
        FormKeyResult::Consumed
    }
}

/// Renders a [`ReviewFormView`].
pub struct ReviewFormWidget<'a> {
    view: &'a ReviewFormView,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> ReviewFormWidget<'a> {
    /// Creates the widget.
    #[must_use]
    pub const fn new(view: &'a ReviewFormView, theme: &'a Theme) -> Self {
        Self {
            view,
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

    fn is_active(&self, field: FormField) -> bool {
        self.focused && self.view.field == field
    }

    fn error_lines(&self) -> Vec<Line<'a>> {
        let errors = self.view.form.errors();
        if errors.is_empty() {
            return Vec::new();
        }
        let mut lines = vec![Line::from(Span::styled(
            ERROR_HEADING,
            self.theme.error_style.add_modifier(Modifier::BOLD),
        ))];
        lines.extend(
            errors
                .iter()
                .map(|message| Line::from(Span::styled(format!("  • {message}"), self.theme.error_style))),
        );
        lines
    }

    fn rating_line(&self) -> Line<'static> {
        let marker = if self.is_active(FormField::Rating) { "▶ " } else { "  " };
        let mut spans = vec![Span::raw(marker), Span::raw("Rating: ")];
        let current = self.view.form.rating();
        for choice in Rating::choices() {
            let style = if Some(choice) == current {
                self.theme.selection_style
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {choice} "), style));
        }
        if let Some(rating) = current {
            spans.push(Span::styled(
                format!("  {}", rating.stars()),
                Style::default().fg(Color::Yellow),
            ));
        }
        Line::from(spans)
    }

    fn submit_line(&self) -> Line<'static> {
        let style = if self.is_active(FormField::Submit) {
            self.theme.selection_style
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        Line::from(vec![Span::raw("  "), Span::styled("[ Submit ]", style)])
    }
}

impl Widget for ReviewFormWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let errors = self.error_lines();
        let error_height = u16::try_from(errors.len()).unwrap_or(u16::MAX);

        let [errors_area, name_area, review_area, rating_area, submit_area] = Layout::vertical([
            Constraint::Length(error_height),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .areas(area);

        Paragraph::new(errors).render(errors_area, buf);

        let mut name_input = self.view.name_input.clone();
        name_input.set_focused(self.is_active(FormField::Name));
        (&name_input).render(name_area, buf);

        let mut review_input = self.view.review_input.clone();
        review_input.set_focused(self.is_active(FormField::Review));
        (&review_input).render(review_area, buf);

        Paragraph::new(self.rating_line()).render(rating_area, buf);

        let [_, submit_row] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(submit_area);
        Paragraph::new(self.submit_line()).render(submit_row, buf);
    }
}
