use crate::ui::app::Screen;
use namer_core::theme::{Element, Theme};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// `selected_saved` picks the Enter hint on the suggestions screen.
pub fn render_footer(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    screen: Screen,
    selected_saved: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.ratatui_style(Element::Border))
        .style(theme.ratatui_style(Element::Text));
    let inner = block.inner(area);

    let enter_label = if selected_saved {
        " Remove from saved"
    } else {
        " Save"
    };
    let hints = match screen {
        Screen::Suggestions => vec![
            ("[Enter]", enter_label),
            ("[S]", "aved"),
            ("[T]", "heme"),
            ("[Q]", "uit"),
        ],
        Screen::Saved => vec![("[Esc]", " Back"), ("[T]", "heme"), ("[Q]", "uit")],
    };

    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::raw(*key));
        spans.push(Span::styled(*label, theme.ratatui_style(Element::Hint)));
    }

    let footer = Paragraph::new(Line::from(spans).alignment(Alignment::Center))
        .style(theme.ratatui_style(Element::Text));

    frame.render_widget(block, area);
    frame.render_widget(footer, inner);
}
