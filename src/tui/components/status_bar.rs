// Status bar component
//
// Key hints on the left, theme name and the most recent captured log line on
// the right. Adapts the hint set to the terminal width.

use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let hints = if area.width < 80 {
        " ↑/↓ scroll │ t theme │ q quit"
    } else {
        " ↑/↓ scroll │ PgUp/PgDn page │ t theme │ / search │ m menu │ q quit"
    };

    let block = Block::default().borders(Borders::TOP);
    let inner = block.inner(area);

    let left = Paragraph::new(hints)
        .style(Style::default().fg(app.theme.status_bar))
        .block(block);
    f.render_widget(left, area);

    let right_text = match app.log_buffer.latest() {
        Some(entry) => format!(
            "{}: {} │ {} ",
            entry.level.as_str(),
            entry.message,
            app.theme_kind.name()
        ),
        None => format!("{} ", app.theme_kind.name()),
    };

    let right = Paragraph::new(right_text)
        .alignment(Alignment::Right)
        .style(Style::default().fg(app.theme.status_bar));
    f.render_widget(right, inner);
}
