// Shared title state
//
// Single source of truth for whether the compact toolbar title should be
// visible. One writer (the boundary detector's change path), any number of
// read-only observers. Listeners run synchronously on the writing thread, so
// writes and the re-renders they cause are strictly ordered.

/// Observer callback invoked with the new value on each effective write.
pub type TitleListener = Box<dyn FnMut(bool)>;

/// Store for the `showing_scrolled_title` flag.
///
/// The value is a pure function of the last boundary crossing; it carries no
/// history. Writing the current value back is a no-op: listeners are not
/// re-notified, which is what keeps an idempotent write from restarting the
/// cross-fade.
pub struct TitleState {
    showing_scrolled_title: bool,
    listeners: Vec<TitleListener>,
}

impl TitleState {
    pub fn new() -> Self {
        Self {
            showing_scrolled_title: false,
            listeners: Vec::new(),
        }
    }

    /// Current value. Reads never mutate.
    pub fn showing_scrolled_title(&self) -> bool {
        self.showing_scrolled_title
    }

    /// Register an observer. Called synchronously on every effective write.
    pub fn subscribe(&mut self, listener: impl FnMut(bool) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Sole mutation path; called from the detector's change handling.
    pub fn set_showing_scrolled_title(&mut self, value: bool) {
        if value == self.showing_scrolled_title {
            return;
        }
        self.showing_scrolled_title = value;
        for listener in &mut self.listeners {
            listener(value);
        }
    }
}

impl Default for TitleState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn starts_collapsed() {
        let state = TitleState::new();
        assert!(!state.showing_scrolled_title());
    }

    #[test]
    fn listeners_run_on_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut state = TitleState::new();
        state.subscribe(move |v| sink.borrow_mut().push(v));

        state.set_showing_scrolled_title(true);
        state.set_showing_scrolled_title(false);
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn idempotent_write_does_not_notify() {
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);

        let mut state = TitleState::new();
        state.subscribe(move |_| *sink.borrow_mut() += 1);

        state.set_showing_scrolled_title(true);
        state.set_showing_scrolled_title(true);
        state.set_showing_scrolled_title(true);
        assert_eq!(*count.borrow(), 1);
        assert!(state.showing_scrolled_title());
    }

    #[test]
    fn writing_the_default_back_is_silent() {
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);

        let mut state = TitleState::new();
        state.subscribe(move |_| *sink.borrow_mut() += 1);

        state.set_showing_scrolled_title(false);
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn all_listeners_are_notified_in_subscription_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let a = Rc::clone(&order);
        let b = Rc::clone(&order);

        let mut state = TitleState::new();
        state.subscribe(move |_| a.borrow_mut().push("first"));
        state.subscribe(move |_| b.borrow_mut().push("second"));

        state.set_showing_scrolled_title(true);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }
}
