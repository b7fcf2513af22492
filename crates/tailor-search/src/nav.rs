//! Suggestion list navigation.
//!
//! [`SuggestionNav`] is the open/closed and highlight state of a suggestion
//! dropdown. It knows nothing about the suggestions themselves: each event
//! comes with a [`NavContext`] carrying the visible count and whether the
//! input is empty, and the returned [`NavOutcome`] tells the owner what to do.
//!
//! # State Machine
//!
//! ```text
//! Closed ──focus/change (count > 0)──▶ Open { None }
//! Open { None } ──Down──▶ Open { Some(0) }      ──Up──▶ Open { Some(count - 1) }
//! Open { Some(i) } ──Down──▶ Open { Some((i + 1) % count) }
//! Open { Some(i) } ──Enter──▶ Closed, Commit(i)
//! Open { None } / Closed ──Enter──▶ Closed, Submit
//! any ──Escape (value non-empty)──▶ Closed, Clear
//! Open ──Escape (value empty) / click outside / blur expired──▶ Closed
//! ```

use tracing::trace;

/// Keys the search input reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    /// Anything else; text keys arrive as input changes instead.
    Other,
}

/// Dropdown state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Closed,
    Open { highlight: Option<usize> },
}

impl NavState {
    /// Whether the list is shown.
    pub fn is_open(&self) -> bool {
        matches!(self, NavState::Open { .. })
    }

    /// The highlighted row, if the list is open and a row is highlighted.
    pub fn highlight(&self) -> Option<usize> {
        match self {
            NavState::Open { highlight } => *highlight,
            NavState::Closed => None,
        }
    }
}

/// Input to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    Focus,
    /// The input text changed.
    Changed,
    Key(Key),
    ClickOutside,
    /// The blur grace period ran out with the input still unfocused.
    BlurExpired,
}

/// What the owner should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Nothing changed.
    Ignored,
    Opened,
    Closed,
    Highlighted(usize),
    /// Commit the suggestion at this index.
    Commit(usize),
    /// Submit the raw input value.
    Submit,
    /// Clear the input value.
    Clear,
}

/// Facts about the component at the time of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavContext {
    /// Number of visible suggestions.
    pub count: usize,
    /// Whether the input value is empty.
    pub value_empty: bool,
}

impl NavContext {
    /// Describes the list as the host currently shows it.
    pub fn new(count: usize, value_empty: bool) -> Self {
        Self { count, value_empty }
    }
}

/// Keyboard and pointer navigation over a suggestion list.
///
/// # Example
///
/// ```rust
/// use tailor_search::{Key, NavContext, NavEvent, NavOutcome, SuggestionNav};
///
/// let mut nav = SuggestionNav::new();
/// let ctx = NavContext::new(3, false);
///
/// assert_eq!(nav.handle(NavEvent::Focus, ctx), NavOutcome::Opened);
/// assert_eq!(nav.handle(NavEvent::Key(Key::ArrowUp), ctx), NavOutcome::Highlighted(2));
/// assert_eq!(nav.handle(NavEvent::Key(Key::ArrowDown), ctx), NavOutcome::Highlighted(0));
/// assert_eq!(nav.handle(NavEvent::Key(Key::Enter), ctx), NavOutcome::Commit(0));
/// assert!(!nav.state().is_open());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionNav {
    state: NavState,
}

impl SuggestionNav {
    /// Creates a closed navigator.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state.
    pub fn state(&self) -> NavState {
        self.state
    }

    /// Whether the list is shown.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// The highlighted row, if any.
    pub fn highlight(&self) -> Option<usize> {
        self.state.highlight()
    }

    /// Applies an event and returns what the owner should do.
    pub fn handle(&mut self, event: NavEvent, ctx: NavContext) -> NavOutcome {
        match event {
            NavEvent::Focus | NavEvent::Changed => self.open_fresh(ctx.count),
            NavEvent::Key(key) => self.key(key, ctx),
            NavEvent::ClickOutside | NavEvent::BlurExpired => self.close(),
        }
    }

    /// Reconciles the state with a new suggestion count.
    ///
    /// An empty list closes the dropdown; a highlight past the end is
    /// cleared. Returns true if the state changed.
    pub fn sync(&mut self, count: usize) -> bool {
        let next = match self.state {
            NavState::Open { .. } if count == 0 => NavState::Closed,
            NavState::Open {
                highlight: Some(i),
            } if i >= count => NavState::Open { highlight: None },
            other => other,
        };
        let changed = next != self.state;
        self.state = next;
        changed
    }

    fn open_fresh(&mut self, count: usize) -> NavOutcome {
        if count == 0 {
            return self.close();
        }
        self.state = NavState::Open { highlight: None };
        NavOutcome::Opened
    }

    /// Closes the dropdown, as after a click on a suggestion.
    pub fn close(&mut self) -> NavOutcome {
        if self.state.is_open() {
            self.state = NavState::Closed;
            NavOutcome::Closed
        } else {
            NavOutcome::Ignored
        }
    }

    fn key(&mut self, key: Key, ctx: NavContext) -> NavOutcome {
        match key {
            Key::ArrowDown | Key::ArrowUp => self.step(key == Key::ArrowDown, ctx.count),
            Key::Enter => {
                let outcome = match self.state {
                    NavState::Open {
                        highlight: Some(i),
                    } if i < ctx.count => NavOutcome::Commit(i),
                    NavState::Open {
                        highlight: Some(i),
                    } => {
                        trace!(index = i, count = ctx.count, "stale highlight, submitting");
                        NavOutcome::Submit
                    }
                    _ => NavOutcome::Submit,
                };
                self.state = NavState::Closed;
                outcome
            }
            Key::Escape => {
                if !ctx.value_empty {
                    self.state = NavState::Closed;
                    NavOutcome::Clear
                } else {
                    self.close()
                }
            }
            Key::Other => NavOutcome::Ignored,
        }
    }

    fn step(&mut self, down: bool, count: usize) -> NavOutcome {
        if count == 0 {
            return self.close();
        }
        let current = self.state.highlight().filter(|&i| i < count);
        let next = match (current, down) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        };
        self.state = NavState::Open {
            highlight: Some(next),
        };
        NavOutcome::Highlighted(next)
    }
}
