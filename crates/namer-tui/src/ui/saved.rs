use super::suggestions::{row_kind, RowKind};
use namer_core::{
    theme::{Element, Theme},
    WordPair,
};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

const EMPTY_MESSAGE: &str = "No saved names yet. Press Enter on a suggestion to save it.";

/// Rows needed for `count` saved names with a divider between each pair.
pub fn row_count(count: usize) -> usize {
    (count * 2).saturating_sub(1)
}

/// Largest useful scroll offset for the saved list.
pub fn max_offset(count: usize, height: usize) -> usize {
    row_count(count).saturating_sub(height)
}

pub fn render_saved(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    favorites: &[WordPair],
    offset: usize,
) {
    let block = Block::new()
        .borders(Borders::ALL)
        .border_style(theme.ratatui_style(Element::Border))
        .style(theme.ratatui_style(Element::Text));
    let inner = block.inner(area);

    if favorites.is_empty() {
        let message = Paragraph::new(EMPTY_MESSAGE)
            .alignment(Alignment::Center)
            .style(theme.ratatui_style(Element::Hint))
            .block(block);
        frame.render_widget(message, area);
        return;
    }

    let height = inner.height as usize;
    let width = inner.width as usize;
    let last_row = row_count(favorites.len());
    let items: Vec<ListItem> = (offset..(offset + height).min(last_row))
        .map(|row| match row_kind(row) {
            RowKind::Item(index) => ListItem::new(Line::from(Span::styled(
                format!(" {}", favorites[index].as_pascal_case()),
                theme.ratatui_style(Element::Text),
            ))),
            RowKind::Separator => ListItem::new(Line::from(Span::styled(
                "─".repeat(width),
                theme.ratatui_style(Element::Separator),
            ))),
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
