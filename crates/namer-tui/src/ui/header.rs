use crate::ui::app::Screen;
use namer_core::theme::{Element, Theme};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Paragraph},
};

pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    screen: Screen,
    saved: usize,
    generated: usize,
) {
    let title = Title::from(Span::styled(
        format!(" {} ", screen.title()),
        theme.ratatui_style(Element::Title),
    ))
    .alignment(Alignment::Left);

    let status = Line::from(vec![
        Span::styled("♥ ", theme.ratatui_style(Element::Favorite)),
        Span::styled(format!("{saved} saved"), theme.ratatui_style(Element::Text)),
        Span::styled(" · ", theme.ratatui_style(Element::Hint)),
        Span::styled(
            format!("{generated} generated"),
            theme.ratatui_style(Element::Text),
        ),
    ]);

    let header = Paragraph::new(status).alignment(Alignment::Left).block(
        Block::new()
            .borders(Borders::ALL)
            .border_style(theme.ratatui_style(Element::Border))
            .title(title)
            .style(theme.ratatui_style(Element::Text)),
    );

    frame.render_widget(header, area);
}
