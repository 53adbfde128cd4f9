// Frame rendering
//
// Layout: toolbar on top, scrollable content (header rows + list rows) in
// the middle, status bar at the bottom. The content surface is where the
// measurement happens: the header's top edge in screen coordinates is the
// content origin minus the scroll offset, and the toolbar height is the top
// inset. The measurement feeds the detector before the toolbar is drawn so
// the compact title reflects this frame's crossing.

use crate::detect::ScrollMeasurement;
use crate::tui::app::App;
use crate::tui::components::{header, list, status_bar, toolbar};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};
use std::time::Instant;

pub fn draw(f: &mut Frame, app: &mut App) {
    // Theme background for the whole frame
    let bg = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.config.toolbar_height),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(f.area());
    let (toolbar_area, content_area, status_area) = (chunks[0], chunks[1], chunks[2]);

    // Build the content surface and clamp the scroll to it
    let mut rows: Vec<Line> = header::lines(&app.config.title, &app.theme, content_area.width);
    rows.extend(list::lines(&app.items, &app.theme));
    app.scroll
        .update_dimensions(rows.len(), content_area.height as usize);

    // Measure the header position for this layout pass
    let offset = app.scroll.offset();
    let measurement = ScrollMeasurement::new(
        content_area.y as i32 - offset as i32,
        app.config.toolbar_height as i32,
    );
    app.observe_header(measurement);

    // Visible slice of the content
    let (start, end) = app.scroll.visible_range();
    let visible: Vec<Line> = rows[start..end].to_vec();
    f.render_widget(Paragraph::new(visible), content_area);

    let opacity = app.title_opacity(Instant::now());
    toolbar::render(f, toolbar_area, &app.config.title, opacity, &app.theme);

    status_bar::render(f, status_area, app);

    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), app.config.toolbar_height, &app.theme);
    }
}
