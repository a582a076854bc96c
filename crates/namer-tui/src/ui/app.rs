use super::{
    footer::render_footer,
    header::render_header,
    saved::{self, render_saved},
    suggestions::{render_suggestions, RowKind, SuggestionRow, Viewport},
};
use crate::events::{AppEvent, EventHandler};
use anyhow::Result;
use namer_core::{
    generator::WordPairSource,
    theme::{Element, Theme},
    Namer, NamerEvent,
};
use ratatui::{
    prelude::{Backend, Constraint, Direction, Frame, Layout, Rect, Terminal},
    widgets::{Block, Borders},
};
use std::{cell::Cell, rc::Rc};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Suggestions,
    Saved,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Suggestions => "Startup Name Generator",
            Self::Saved => "Saved Suggestions",
        }
    }
}

pub struct App<S> {
    should_quit: bool,
    theme: Theme,
    screen: Screen,
    namer: Namer<S>,
    /// Set by the namer observer and by navigation; cleared after a draw.
    dirty: Rc<Cell<bool>>,
    viewport: Viewport,
    saved_offset: usize,
    /// Visible suggestion rows, resolved against the feed before each draw.
    rows: Vec<SuggestionRow>,
    body_height: usize,
}

impl<S: WordPairSource> App<S> {
    pub fn new(mut namer: Namer<S>, theme: Theme) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        namer.subscribe(move |event| {
            flag.set(true);
            match event {
                NamerEvent::FeedExtended { len } => debug!(len, "more suggestions generated"),
                NamerEvent::FavoriteAdded(pair) => info!(name = %pair, "saved"),
                NamerEvent::FavoriteRemoved(pair) => info!(name = %pair, "removed from saved"),
            }
        });

        Self {
            should_quit: false,
            theme,
            screen: Screen::Suggestions,
            namer,
            dirty,
            viewport: Viewport::default(),
            saved_offset: 0,
            rows: Vec::new(),
            body_height: 0,
        }
    }

    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &EventHandler,
    ) -> Result<()> {
        while !self.should_quit {
            if self.dirty.get() {
                self.draw(terminal)?;
            }
            let event = events.next_event(self.screen)?;
            self.handle_event(event)?;
        }
        Ok(())
    }

    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.prepare(terminal.size()?)?;
        terminal.draw(|frame| self.render(frame))?;
        self.dirty.set(false);
        Ok(())
    }

    /// Pulls the visible suggestions from the feed, growing it as needed.
    fn prepare(&mut self, area: Rect) -> Result<()> {
        let [_, body, _] = split(area);
        self.body_height = body.height.saturating_sub(2) as usize;

        self.viewport.scroll_into_view(self.body_height);
        self.saved_offset = self.saved_offset.min(saved::max_offset(
            self.namer.favorites().len(),
            self.body_height,
        ));

        self.rows.clear();
        if self.screen != Screen::Suggestions {
            return Ok(());
        }
        let visible: Vec<RowKind> = self.viewport.visible_rows(self.body_height).collect();
        for row in visible {
            let resolved = match row {
                RowKind::Separator => SuggestionRow::Separator,
                RowKind::Item(index) => {
                    let pair = self.namer.item_at(index)?.clone();
                    SuggestionRow::Item {
                        saved: self.namer.is_favorite(&pair),
                        selected: index == self.viewport.selected,
                        pair,
                    }
                }
            };
            self.rows.push(resolved);
        }
        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.size();
        frame.render_widget(
            Block::new()
                .borders(Borders::NONE)
                .style(self.theme.ratatui_style(Element::Background)),
            area,
        );

        let [header, body, footer] = split(area);
        render_header(
            frame,
            header,
            &self.theme,
            self.screen,
            self.namer.favorites().len(),
            self.namer.suggestion_count(),
        );

        match self.screen {
            Screen::Suggestions => render_suggestions(frame, body, &self.theme, &self.rows),
            Screen::Saved => render_saved(
                frame,
                body,
                &self.theme,
                self.namer.favorites(),
                self.saved_offset,
            ),
        }

        render_footer(
            frame,
            footer,
            &self.theme,
            self.screen,
            self.selected_is_saved(),
        );
    }

    fn selected_is_saved(&self) -> bool {
        self.rows.iter().any(|row| {
            matches!(
                row,
                SuggestionRow::Item {
                    selected: true,
                    saved: true,
                    ..
                }
            )
        })
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        let page = Viewport::page(self.body_height);
        match (self.screen, event) {
            (_, AppEvent::None) => return Ok(()),
            (_, AppEvent::Quit | AppEvent::ForceQuit) => self.should_quit = true,
            (_, AppEvent::ToggleTheme) => {
                self.theme.toggle();
                debug!(variant = ?self.theme.variant(), "theme toggled");
            }
            (_, AppEvent::Resize(width, height)) => debug!(width, height, "terminal resized"),

            (Screen::Suggestions, AppEvent::Up) => self.viewport.up(1),
            (Screen::Suggestions, AppEvent::Down) => self.viewport.down(1),
            (Screen::Suggestions, AppEvent::PageUp) => self.viewport.up(page),
            (Screen::Suggestions, AppEvent::PageDown) => self.viewport.down(page),
            (Screen::Suggestions, AppEvent::Home) => self.viewport.home(),
            (Screen::Suggestions, AppEvent::ToggleFavorite) => {
                let pair = self.namer.item_at(self.viewport.selected)?.clone();
                self.namer.toggle_favorite(&pair)?;
            }
            (Screen::Suggestions, AppEvent::ShowSaved) => {
                self.screen = Screen::Saved;
                self.saved_offset = 0;
            }

            (Screen::Saved, AppEvent::Up) => self.saved_offset = self.saved_offset.saturating_sub(1),
            (Screen::Saved, AppEvent::Down) => self.saved_offset += 1,
            (Screen::Saved, AppEvent::PageUp) => {
                self.saved_offset = self.saved_offset.saturating_sub(page * 2)
            }
            (Screen::Saved, AppEvent::PageDown) => self.saved_offset += page * 2,
            (Screen::Saved, AppEvent::Home) => self.saved_offset = 0,
            (Screen::Saved, AppEvent::Back) => self.screen = Screen::Suggestions,

            _ => return Ok(()),
        }
        self.dirty.set(true);
        Ok(())
    }
}

/// Header, body, footer.
fn split(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use namer_core::{generator::RandomWordPairs, NamerError};
    use ratatui::backend::TestBackend;

    fn app() -> App<RandomWordPairs> {
        App::new(Namer::new(RandomWordPairs::seeded(9)), Theme::default())
    }

    fn terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(width, height)).unwrap()
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_first_draw_fills_one_batch() {
        let mut app = app();
        let mut terminal = terminal(70, 16);
        app.draw(&mut terminal).unwrap();

        // 8 body rows show items 0..=3, all inside the first batch
        assert_eq!(app.body_height, 8);
        assert_eq!(app.namer.suggestion_count(), 10);
        assert!(!app.dirty.get());

        let text = screen_text(&terminal);
        assert!(text.contains("Startup Name Generator"));
        let first = app.namer.item_at(0).unwrap().as_pascal_case();
        assert!(text.contains(&first));
        assert!(text.contains("[Enter] Save"));
    }

    #[test]
    fn test_scrolling_past_batch_grows_feed() {
        let mut app = app();
        let mut terminal = terminal(70, 16);
        app.draw(&mut terminal).unwrap();

        for _ in 0..10 {
            app.handle_event(AppEvent::Down).unwrap();
        }
        app.draw(&mut terminal).unwrap();
        assert_eq!(app.viewport.selected, 10);
        assert_eq!(app.namer.suggestion_count(), 20);
    }

    #[test]
    fn test_toggle_marks_selected_and_redraws() {
        let mut app = app();
        let mut terminal = terminal(70, 16);
        app.draw(&mut terminal).unwrap();

        app.handle_event(AppEvent::ToggleFavorite).unwrap();
        assert!(app.dirty.get());
        let pair = app.namer.item_at(0).unwrap().clone();
        assert!(app.namer.is_favorite(&pair));

        app.draw(&mut terminal).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Remove from saved"));
        assert!(text.contains("1 saved"));

        app.handle_event(AppEvent::ToggleFavorite).unwrap();
        assert!(!app.namer.is_favorite(&pair));
    }

    #[test]
    fn test_saved_screen_lists_favorites() {
        let mut app = app();
        let mut terminal = terminal(70, 16);
        app.draw(&mut terminal).unwrap();

        app.handle_event(AppEvent::ShowSaved).unwrap();
        app.draw(&mut terminal).unwrap();
        assert!(screen_text(&terminal).contains("No saved names yet"));

        app.handle_event(AppEvent::Back).unwrap();
        app.handle_event(AppEvent::Down).unwrap();
        app.handle_event(AppEvent::ToggleFavorite).unwrap();
        let saved = app.namer.item_at(1).unwrap().as_pascal_case();

        app.handle_event(AppEvent::ShowSaved).unwrap();
        app.draw(&mut terminal).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Saved Suggestions"));
        assert!(text.contains(&saved));
    }

    #[test]
    fn test_exhausted_generator_stops_the_app() {
        let source = RandomWordPairs::seeded(1).with_max_syllables(0);
        let mut app = App::new(Namer::new(source), Theme::default());
        let mut terminal = terminal(70, 16);

        let err = app.draw(&mut terminal).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<NamerError>(),
            Some(NamerError::GeneratorExhausted { .. })
        ));
        assert!(app.handle_event(AppEvent::ToggleFavorite).is_err());
        assert_eq!(app.namer.suggestion_count(), 0);
        assert!(app.namer.favorites().is_empty());
    }

    #[test]
    fn test_quit_and_unbound_events() {
        let mut app = app();
        app.handle_event(AppEvent::None).unwrap();
        assert!(!app.should_quit);
        app.handle_event(AppEvent::ToggleFavorite).unwrap();
        app.handle_event(AppEvent::Quit).unwrap();
        assert!(app.should_quit);
    }
}
