//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a fixed duration. The
//! stub action buttons (search, menu) and the help key use it. Renders just
//! below the toolbar at the right edge.

use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// A toast notification that auto-dismisses
pub struct Toast {
    pub message: String,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            duration: Duration::from_secs(2),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Render below the toolbar at the right edge, on top of the content
    pub fn render(&self, f: &mut Frame, area: Rect, top_inset: u16, theme: &Theme) {
        let width = (self.message.width() as u16 + 4).min(area.width.saturating_sub(2));
        let height = 3;

        let x = area.right().saturating_sub(width + 1);
        let y = (area.y + top_inset).min(area.bottom().saturating_sub(height));
        let toast_area = Rect::new(x, y, width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.highlight))
            .style(Style::default().bg(theme.background));

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground))
            .block(block);

        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_toast_is_not_expired() {
        let toast = Toast::new("hello");
        assert!(!toast.is_expired());
    }
}
