// List rows
//
// Plain display strings; content is incidental scaffolding for the header
// effect. Rows after the header scroll with it as one surface.

use crate::tui::theme::Theme;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Build one row per item
pub fn lines(items: &[String], theme: &Theme) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled("  • ", Style::default().fg(theme.muted)),
                Span::styled(item.clone(), Style::default().fg(theme.foreground)),
            ])
        })
        .collect()
}

/// Generate the demo row labels
pub fn demo_items(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Entry {i}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_row_per_item() {
        let theme = Theme::dark();
        let items = demo_items(7);
        assert_eq!(lines(&items, &theme).len(), 7);
    }

    #[test]
    fn demo_items_are_numbered_from_one() {
        let items = demo_items(3);
        assert_eq!(items, vec!["Entry 1", "Entry 2", "Entry 3"]);
    }

    #[test]
    fn empty_list_renders_no_rows() {
        let theme = Theme::dark();
        assert!(lines(&[], &theme).is_empty());
    }
}
