// TUI application state
//
// Owns the scroll state, the boundary detector, the shared title state and
// the cross-fade, and wires them together: detector edge -> title state
// write -> fade retarget. The fade lives behind an Rc so the subscription
// closure and the render path share it; everything runs on the render
// thread, so there is exactly one writer and strictly ordered updates.

use crate::anim::Fade;
use crate::config::Config;
use crate::detect::{BoundaryDetector, ScrollMeasurement};
use crate::logging::LogBuffer;
use crate::state::TitleState;
use crate::tui::components::{list, Toast};
use crate::tui::input::InputHandler;
use crate::tui::scroll::ScrollState;
use crate::tui::theme::{Theme, ThemeKind};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Main application state for the TUI
pub struct App {
    pub config: Config,
    pub theme_kind: ThemeKind,
    pub theme: Theme,

    /// List row labels (display strings only)
    pub items: Vec<String>,

    /// Scroll state for the content surface (header rows + list rows)
    pub scroll: ScrollState,

    /// Edge-triggered boundary detector fed by the render pass
    detector: BoundaryDetector,

    /// Shared observable flag: is the compact toolbar title showing
    title_state: TitleState,

    /// Cross-fade for the compact title's opacity
    fade: Rc<RefCell<Fade>>,

    pub toast: Option<Toast>,

    input: InputHandler,

    pub log_buffer: LogBuffer,

    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, log_buffer: LogBuffer) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme);
        let items = list::demo_items(config.items);

        let fade = Rc::new(RefCell::new(Fade::new(
            0.0,
            Duration::from_millis(config.fade_ms),
        )));

        // Store listener: a boundary crossing retargets the fade. An
        // idempotent write never reaches this closure, so the animation
        // cannot restart mid-flight.
        let mut title_state = TitleState::new();
        let fade_handle = Rc::clone(&fade);
        title_state.subscribe(move |showing| {
            let target = if showing { 1.0 } else { 0.0 };
            fade_handle.borrow_mut().retarget(target, Instant::now());
        });

        Self {
            theme: theme_kind.theme(),
            theme_kind,
            items,
            scroll: ScrollState::new(),
            detector: BoundaryDetector::new(),
            title_state,
            fade,
            toast: None,
            input: InputHandler::with_default_config(),
            log_buffer,
            should_quit: false,
            config,
        }
    }

    /// Feed one frame's header measurement through the detector.
    /// Only a boundary crossing mutates the shared state.
    pub fn observe_header(&mut self, measurement: ScrollMeasurement) {
        if let Some(under) = self.detector.observe(measurement) {
            tracing::debug!(
                header_top = measurement.header_top,
                top_inset = measurement.top_inset,
                "header {} the toolbar",
                if under { "slid under" } else { "came out from" }
            );
            self.title_state.set_showing_scrolled_title(under);
        }
    }

    pub fn showing_scrolled_title(&self) -> bool {
        self.title_state.showing_scrolled_title()
    }

    /// Compact title opacity at `now`
    pub fn title_opacity(&self, now: Instant) -> f32 {
        self.fade.borrow().value_at(now)
    }

    /// Total content rows: header block plus list rows
    pub fn content_rows(&self) -> usize {
        crate::tui::components::header::ROWS + self.items.len()
    }

    pub fn next_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
        tracing::info!("theme: {}", self.theme_kind.name());
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Per-tick housekeeping
    pub fn tick(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    pub fn key_pressed(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input.key_pressed(key)
    }

    pub fn key_released(&mut self, key: crossterm::event::KeyCode) {
        self.input.key_released(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Config::default(), LogBuffer::new())
    }

    /// Measurement as the render pass computes it: the header's top edge is
    /// the content origin (== toolbar height) minus the scroll offset.
    fn measure(app: &App, offset: usize) -> ScrollMeasurement {
        let inset = app.config.toolbar_height as i32;
        ScrollMeasurement::new(inset - offset as i32, inset)
    }

    #[test]
    fn starts_collapsed_and_transparent() {
        let app = app();
        assert!(!app.showing_scrolled_title());
        assert_eq!(app.title_opacity(Instant::now()), 0.0);
    }

    #[test]
    fn scrolling_under_the_toolbar_shows_the_compact_title() {
        let mut app = app();
        let m = measure(&app, 2);
        app.observe_header(m);
        assert!(app.showing_scrolled_title());

        // Fade settles at fully opaque
        let later = Instant::now() + Duration::from_secs(5);
        assert_eq!(app.title_opacity(later), 1.0);
    }

    #[test]
    fn scrolling_back_to_the_top_hides_it_again() {
        let mut app = app();
        app.observe_header(measure(&app, 3));
        app.observe_header(measure(&app, 0));
        assert!(!app.showing_scrolled_title());

        let later = Instant::now() + Duration::from_secs(5);
        assert_eq!(app.title_opacity(later), 0.0);
    }

    #[test]
    fn repeated_frames_on_the_same_side_do_not_restart_the_fade() {
        let mut app = app();
        app.observe_header(measure(&app, 2));
        let settled = Instant::now() + Duration::from_secs(5);
        assert_eq!(app.title_opacity(settled), 1.0);

        // Further frames while still under: opacity stays settled
        for _ in 0..20 {
            app.observe_header(measure(&app, 2));
        }
        assert_eq!(app.title_opacity(settled), 1.0);
    }

    #[test]
    fn oscillation_toggles_once_per_crossing() {
        let mut app = app();
        let mut flips = 0;
        let mut last = app.showing_scrolled_title();
        for offset in [0usize, 1, 0, 1, 1, 0, 0] {
            app.observe_header(measure(&app, offset));
            if app.showing_scrolled_title() != last {
                flips += 1;
                last = app.showing_scrolled_title();
            }
        }
        assert_eq!(flips, 4);
    }

    #[test]
    fn content_rows_include_the_header_block() {
        let mut config = Config::default();
        config.items = 10;
        let app = App::new(config, LogBuffer::new());
        assert_eq!(
            app.content_rows(),
            crate::tui::components::header::ROWS + 10
        );
    }

    #[test]
    fn theme_cycling_updates_the_palette() {
        let mut app = app();
        let before = app.theme_kind;
        app.next_theme();
        assert_ne!(app.theme_kind, before);
    }

    #[test]
    fn expired_toast_is_cleared_on_tick() {
        let mut app = app();
        app.show_toast("hi");
        assert!(app.toast.is_some());
        // Fresh toast survives a tick
        app.tick();
        assert!(app.toast.is_some());
    }
}
