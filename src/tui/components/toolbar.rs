// Toolbar component
//
// The fixed bar at the top of the screen. Its principal (centered) slot
// holds the compact title, whose color is alpha-blended toward the
// background by the cross-fade's current opacity. At opacity 0 the title
// renders as pure background, i.e. invisible.

use crate::tui::theme::{blend, Theme};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Style for the compact title at the given opacity
pub fn title_style(theme: &Theme, opacity: f32) -> Style {
    Style::default()
        .fg(blend(theme.title, theme.background, opacity))
        .add_modifier(Modifier::BOLD)
}

/// Render the toolbar with the compact title in the principal slot
pub fn render(f: &mut Frame, area: Rect, title: &str, opacity: f32, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_top(Line::from(" ? ").right_aligned());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let compact = Paragraph::new(title.to_string())
        .alignment(Alignment::Center)
        .style(title_style(theme, opacity));
    f.render_widget(compact, inner);
}
