//! Input handling: turns crossterm events into app events for the current screen.

use crate::ui::app::Screen;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    /// Ctrl+C
    ForceQuit,
    ToggleTheme,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    /// Save or unsave the selected suggestion
    ToggleFavorite,
    ShowSaved,
    Back,
    Resize(u16, u16),
    /// Nothing happened before the poll timed out, or the input is unbound
    None,
}

pub struct EventHandler {
    timeout: Duration,
}

impl EventHandler {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn next_event(&self, screen: Screen) -> std::io::Result<AppEvent> {
        if !crossterm::event::poll(self.timeout)? {
            return Ok(AppEvent::None);
        }
        Ok(match crossterm::event::read()? {
            Event::Key(key) => map_key(screen, key),
            Event::Resize(width, height) => AppEvent::Resize(width, height),
            _ => AppEvent::None,
        })
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(50))
    }
}

pub fn map_key(screen: Screen, key: KeyEvent) -> AppEvent {
    if key.kind != KeyEventKind::Press {
        return AppEvent::None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return AppEvent::ForceQuit;
    }

    match (screen, key.code) {
        (_, KeyCode::Char('q')) => AppEvent::Quit,
        (_, KeyCode::Char('t') | KeyCode::Char('T')) => AppEvent::ToggleTheme,
        (_, KeyCode::Up | KeyCode::Char('k')) => AppEvent::Up,
        (_, KeyCode::Down | KeyCode::Char('j')) => AppEvent::Down,
        (_, KeyCode::PageUp) => AppEvent::PageUp,
        (_, KeyCode::PageDown) => AppEvent::PageDown,
        (_, KeyCode::Home | KeyCode::Char('g')) => AppEvent::Home,

        (Screen::Suggestions, KeyCode::Enter | KeyCode::Char(' ')) => AppEvent::ToggleFavorite,
        (Screen::Suggestions, KeyCode::Char('s') | KeyCode::Tab) => AppEvent::ShowSaved,
        (Screen::Suggestions, KeyCode::Esc) => AppEvent::Quit,

        (Screen::Saved, KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('s') | KeyCode::Tab) => {
            AppEvent::Back
        }
        _ => AppEvent::None,
    }
}
