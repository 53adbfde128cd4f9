// TUI module - terminal lifecycle and event loop
//
// Handles terminal setup/teardown, the render loop, and input routing. The
// loop waits on polled crossterm input and a tick interval; the tick drives
// the cross-fade and toast expiry, so the screen keeps animating between
// key presses.

pub mod app;
pub mod components;
pub mod input;
pub mod scroll;
pub mod theme;
pub mod ui;

use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI: set up the terminal, run the event loop, restore on exit.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config, log_buffer);
    let result = run_event_loop(&mut terminal, &mut app).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop: draw, then wait for input or the next tick.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval =
        tokio::time::interval(Duration::from_millis(app.config.tick_rate_ms.max(10)));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick: fade progression and toast expiry
            _ = tick_interval.tick() => {
                app.tick();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    match key_event.kind {
        KeyEventKind::Press => {
            let key = key_event.code;
            if !app.key_pressed(key) {
                return;
            }

            match key {
                KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
                KeyCode::Up | KeyCode::Char('k') => app.scroll.scroll_up(),
                KeyCode::Down | KeyCode::Char('j') => app.scroll.scroll_down(),
                KeyCode::PageUp => app.scroll.page_up(),
                KeyCode::PageDown => app.scroll.page_down(),
                KeyCode::Home | KeyCode::Char('g') => app.scroll.scroll_to_top(),
                KeyCode::End | KeyCode::Char('G') => app.scroll.scroll_to_bottom(),
                KeyCode::Char('t') => app.next_theme(),
                // Stub actions: the buttons exist, the features do not
                KeyCode::Char('/') => app.show_toast("Search is not implemented"),
                KeyCode::Char('m') => app.show_toast("Menu is not implemented"),
                KeyCode::Char('?') => {
                    app.show_toast("↑/↓ scroll · PgUp/PgDn page · g/G ends · t theme · q quit")
                }
                _ => {}
            }
        }
        KeyEventKind::Release => {
            app.key_released(key_event.code);
        }
        _ => {}
    }
}

/// Handle mouse input: the wheel scrolls the content
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    match mouse_event.kind {
        MouseEventKind::ScrollUp => app.scroll.scroll_up(),
        MouseEventKind::ScrollDown => app.scroll.scroll_down(),
        _ => {}
    }
}
