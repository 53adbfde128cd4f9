// Header component
//
// The large title plus stub action buttons, rendered as the first rows of
// the scrollable content so it scrolls away under the toolbar. The render
// pass measures this block's laid-out position each frame; the header itself
// draws nothing for the measurement.

use crate::tui::theme::Theme;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Number of content rows the header occupies
pub const ROWS: usize = 4;

/// Action button icons shown at the header's trailing edge
const BUTTONS: &str = "🔍  ☰";

/// Build the header rows for the given content width.
pub fn lines(title: &str, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let width = width as usize;

    // Title row: large title on the left, action buttons on the right
    let title_text = format!(" {}", title);
    let buttons_text = format!("{} ", BUTTONS);
    let used = title_text.width() + buttons_text.width();
    let gap = width.saturating_sub(used);

    let title_row = Line::from(vec![
        Span::styled(
            title_text,
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(gap)),
        Span::styled(buttons_text, Style::default().fg(theme.accent)),
    ]);

    // Underline rule matching the title width
    let rule = "─".repeat((title.width() + 2).min(width));
    let rule_row = Line::from(Span::styled(rule, Style::default().fg(theme.accent)));

    vec![Line::default(), title_row, rule_row, Line::default()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_has_a_fixed_row_count() {
        let theme = Theme::dark();
        let lines = lines("Library", &theme, 80);
        assert_eq!(lines.len(), ROWS);
    }

    #[test]
    fn title_row_contains_title_and_buttons() {
        let theme = Theme::dark();
        let lines = lines("Library", &theme, 80);
        let row: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(row.contains("Library"));
        assert!(row.contains('🔍'));
        assert!(row.contains('☰'));
    }

    #[test]
    fn rule_does_not_exceed_the_content_width() {
        let theme = Theme::dark();
        let lines = lines("A very long header title indeed", &theme, 10);
        let rule: String = lines[2].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(rule.chars().count() <= 10);
    }

    #[test]
    fn narrow_width_does_not_panic() {
        let theme = Theme::dark();
        let _ = lines("Library", &theme, 3);
        let _ = lines("Library", &theme, 0);
    }
}
