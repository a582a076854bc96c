use namer_core::{
    theme::{Element, Theme},
    WordPair,
};
use ratatui::{
    prelude::{Frame, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

const SAVED_ICON: &str = "♥";
const UNSAVED_ICON: &str = "♡";

/// Suggestions and dividers alternate: even rows are items, odd rows dividers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Item(usize),
    Separator,
}

pub fn row_kind(row: usize) -> RowKind {
    if row % 2 == 1 {
        RowKind::Separator
    } else {
        RowKind::Item(row / 2)
    }
}

/// Cursor and scroll position over the endless list, in row units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub selected: usize,
    pub offset: usize,
}

impl Viewport {
    pub fn up(&mut self, items: usize) {
        self.selected = self.selected.saturating_sub(items);
    }

    /// There is no bottom; the feed grows to meet the cursor.
    pub fn down(&mut self, items: usize) {
        self.selected = self.selected.saturating_add(items);
    }

    pub fn home(&mut self) {
        *self = Self::default();
    }

    /// Moves `offset` so the selected item's row is inside a window of
    /// `height` rows.
    pub fn scroll_into_view(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        let row = self.selected * 2;
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + height {
            self.offset = row + 1 - height;
        }
    }

    pub fn visible_rows(&self, height: usize) -> impl Iterator<Item = RowKind> {
        (self.offset..self.offset + height).map(row_kind)
    }

    /// Items per page, counting their dividers.
    pub fn page(height: usize) -> usize {
        (height / 2).max(1)
    }
}

/// A visible row, resolved against the feed before drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionRow {
    Item {
        pair: WordPair,
        saved: bool,
        selected: bool,
    },
    Separator,
}

pub fn render_suggestions(frame: &mut Frame, area: Rect, theme: &Theme, rows: &[SuggestionRow]) {
    let block = Block::new()
        .borders(Borders::ALL)
        .border_style(theme.ratatui_style(Element::Border))
        .style(theme.ratatui_style(Element::Text));
    let inner = block.inner(area);
    let width = inner.width as usize;

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| match row {
            SuggestionRow::Item {
                pair,
                saved,
                selected,
            } => ListItem::new(item_line(pair, *saved, *selected, width, theme)),
            SuggestionRow::Separator => ListItem::new(Line::from(Span::styled(
                "─".repeat(width),
                theme.ratatui_style(Element::Separator),
            ))),
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn item_line(
    pair: &WordPair,
    saved: bool,
    selected: bool,
    width: usize,
    theme: &Theme,
) -> Line<'static> {
    let text_style = if selected {
        theme.ratatui_style(Element::Selected)
    } else {
        theme.ratatui_style(Element::Text)
    };
    let (icon, icon_style) = if saved {
        (SAVED_ICON, theme.ratatui_style(Element::Favorite))
    } else {
        (UNSAVED_ICON, theme.ratatui_style(Element::Hint))
    };
    let icon_style = if selected {
        icon_style.bg(theme.colors().selection)
    } else {
        icon_style
    };

    // " Name ... ♥ "
    let name_width = width.saturating_sub(3);
    let name = format!(" {:<w$}", pair.as_pascal_case(), w = name_width.saturating_sub(1));
    Line::from(vec![
        Span::styled(name, text_style),
        Span::styled(format!(" {icon} "), icon_style),
    ])
}
