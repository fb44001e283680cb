//! Main application orchestrator.

use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream};
use crossterm::execute;
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, info};

use crate::application::{CatalogState, EventBus, Topic};
use crate::infrastructure::AppConfig;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{StorefrontScreen, StorefrontScreenState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

/// Root container. Owns the event bus and the storefront screen.
pub struct App {
    state: AppState,
    bus: EventBus,
    screen: StorefrontScreenState,
    mouse_capture: bool,
}

impl App {
    /// # Errors
    /// Returns error if the configured product has no variants.
    pub fn new(config: &AppConfig) -> color_eyre::Result<Self> {
        let bus = EventBus::new();
        let catalog = CatalogState::new(config.product.clone(), config.premium)?
            .with_shipping_fee(config.shipping_fee());
        let theme = Theme::new(&config.theme.accent_color);
        let screen = StorefrontScreenState::new(catalog, &bus, theme);

        info!(
            product = %screen.catalog().title(),
            premium = config.premium,
            review_subscribers = bus.subscriber_count(Topic::ReviewSubmitted),
            "Storefront ready"
        );

        Ok(Self {
            state: AppState::Running,
            bus,
            screen,
            mouse_capture: config.mouse,
        })
    }

    /// Returns the screen state.
    #[must_use]
    pub const fn screen(&self) -> &StorefrontScreenState {
        &self.screen
    }

    /// Returns the shared event bus.
    #[must_use]
    pub const fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Runs the event loop until the user quits.
    ///
    /// Mouse capture is enabled for the duration of the loop when configured.
    /// The terminal itself is restored by the caller.
    ///
    /// # Errors
    /// Returns error if drawing to the terminal or toggling mouse capture fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        if self.mouse_capture {
            execute!(stdout(), EnableMouseCapture)?;
        }

        let result = self.run_event_loop(terminal).await;

        if self.mouse_capture {
            execute!(stdout(), DisableMouseCapture)?;
        }
        result?;

        info!(cart_items = self.screen.cart().len(), "Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            let Some(event) = terminal_events.next().await else {
                break;
            };
            if self.handle_terminal_event(event?) == EventResult::Exit {
                self.state = AppState::Exiting;
            }
            terminal.draw(|frame| self.render(frame))?;
        }

        Ok(())
    }

    /// Routes one terminal event to the screen.
    pub fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if EventHandler::is_press(&key) => self.screen.handle_key(key),
            Event::Mouse(mouse) => {
                self.screen.handle_mouse(mouse);
                EventResult::Continue
            }
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                EventResult::Continue
            }
            _ => EventResult::Continue,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        frame.render_stateful_widget(StorefrontScreen::new(), frame.area(), &mut self.screen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Product, Variant, VariantId};
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_new_subscribes_feed() {
        let app = App::new(&AppConfig::default()).unwrap();
        assert_eq!(app.bus().subscriber_count(Topic::ReviewSubmitted), 1);
        assert_eq!(app.screen().catalog().title(), "Vue Mastery Boots");
    }

    #[test]
    fn test_mouse_capture_follows_config() {
        let app = App::new(&AppConfig::default()).unwrap();
        assert!(app.mouse_capture);

        let config = AppConfig {
            mouse: false,
            ..AppConfig::default()
        };
        let app = App::new(&config).unwrap();
        assert!(!app.mouse_capture);
    }

    #[test]
    fn test_new_rejects_product_without_variants() {
        let config = AppConfig {
            product: Product::new("Vue Mastery", "Boots"),
            ..AppConfig::default()
        };
        assert!(App::new(&config).is_err());
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = App::new(&AppConfig::default()).unwrap();
        let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;

        app.handle_terminal_event(Event::Key(release));
        assert!(app.screen().cart().is_empty());

        app.handle_terminal_event(press(KeyCode::Char('a')));
        assert_eq!(app.screen().cart().entries(), &[VariantId(1)]);
    }

    #[test]
    fn test_out_of_stock_add_is_dropped() {
        let config = AppConfig {
            product: Product::new("Vue Mastery", "Boots").with_variant(Variant::new(
                VariantId(7),
                "black",
                "./assets/black.jpg",
                0,
            )),
            ..AppConfig::default()
        };
        let mut app = App::new(&config).unwrap();
        app.handle_terminal_event(press(KeyCode::Char('a')));
        assert!(app.screen().cart().is_empty());
    }

    #[test]
    fn test_quit_event_exits() {
        let mut app = App::new(&AppConfig::default()).unwrap();
        assert_eq!(app.handle_terminal_event(press(KeyCode::Char('q'))), EventResult::Exit);
        assert_eq!(
            app.handle_terminal_event(Event::Resize(80, 24)),
            EventResult::Continue
        );
    }
}
