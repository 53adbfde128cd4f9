// Input handling with per-key behaviors
//
// Navigation keys repeat while held (after an initial delay) so scrolling
// feels continuous on terminals that only send Press events. Action keys
// trigger once per press with a debounce.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Debounce window for once-per-press keys on terminals without Release events
const ACTION_DEBOUNCE: Duration = Duration::from_millis(150);

/// How a key behaves when pressed and held
#[derive(Debug, Clone, Copy)]
pub enum KeyBehavior {
    /// Trigger once per press (Enter, quit, theme, stubs)
    Once,

    /// Trigger on press, then repeat while held
    Repeatable {
        initial_delay: Duration,
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    /// Line scrolling (arrow keys, j/k)
    pub fn navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(400),
            repeat_interval: Duration::from_millis(40),
        }
    }

    /// Page scrolling (PageUp/PageDown)
    pub fn paging() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(300),
            repeat_interval: Duration::from_millis(80),
        }
    }
}

#[derive(Debug, Default)]
struct KeyState {
    is_pressed: bool,
    press_started: Option<Instant>,
    last_triggered: Option<Instant>,
}

/// Tracks key states and decides when a press should fire its action
pub struct InputHandler {
    states: HashMap<KeyCode, KeyState>,
    behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            behaviors: HashMap::new(),
        }
    }

    pub fn configure(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.behaviors.insert(*key, behavior);
        }
    }

    /// Returns true if the action for this key should fire now
    pub fn key_pressed(&mut self, key: KeyCode) -> bool {
        let now = Instant::now();
        let behavior = self
            .behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::Once);
        let state = self.states.entry(key).or_default();

        if !state.is_pressed {
            state.is_pressed = true;
            state.press_started = Some(now);
            state.last_triggered = Some(now);
            return true;
        }

        match behavior {
            KeyBehavior::Once => {
                // Terminals without Release events keep re-sending Press
                match state.last_triggered {
                    Some(last) if now.duration_since(last) < ACTION_DEBOUNCE => false,
                    _ => {
                        state.last_triggered = Some(now);
                        true
                    }
                }
            }
            KeyBehavior::Repeatable {
                initial_delay,
                repeat_interval,
            } => {
                let (Some(started), Some(last)) = (state.press_started, state.last_triggered)
                else {
                    return false;
                };
                if now.duration_since(started) >= initial_delay
                    && now.duration_since(last) >= repeat_interval
                {
                    state.last_triggered = Some(now);
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn key_released(&mut self, key: KeyCode) {
        if let Some(state) = self.states.get_mut(&key) {
            *state = KeyState::default();
        }
    }

    /// Key map for this screen
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        handler.configure(
            &[
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::Char('j'),
                KeyCode::Char('k'),
            ],
            KeyBehavior::navigation(),
        );

        handler.configure(&[KeyCode::PageUp, KeyCode::PageDown], KeyBehavior::paging());

        handler.configure(
            &[
                KeyCode::Home,
                KeyCode::End,
                KeyCode::Char('g'),
                KeyCode::Char('G'),
                KeyCode::Char('q'),
                KeyCode::Char('Q'),
                KeyCode::Char('t'),
                KeyCode::Char('/'),
                KeyCode::Char('m'),
                KeyCode::Char('?'),
            ],
            KeyBehavior::Once,
        );

        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}
