//! Search-as-you-type controller.
//!
//! [`SearchBar`] wires a [`DebouncedCallback`], a [`SuggestionNav`] and an
//! outside-click [`Subscription`] into the behaviour of a search input with
//! a suggestion dropdown. It owns no rendering and no data source: the host
//! feeds it input events and suggestion lists, renders from its accessors,
//! and calls [`SearchBar::tick`] when [`SearchBar::next_deadline`] passes.
//!
//! When the input is empty the dropdown shows recent searches instead of
//! suggestions.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Instant;

use tracing::{debug, trace};

use crate::config::SearchConfig;
use crate::debounce::DebouncedCallback;
use crate::nav::{Key, NavContext, NavEvent, NavOutcome, SuggestionNav};
use crate::subscription::{EventBus, PointerEvent, Rect, Subscription};

type Callback = Box<dyn FnMut(&str)>;

/// State shared with the outside-click listener.
#[derive(Debug, Default)]
struct Shared {
    nav: SuggestionNav,
    bounds: Option<Rect>,
}

/// Builder for [`SearchBar`].
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use std::time::{Duration, Instant};
/// use tailor_search::{SearchBar, SearchConfig};
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// let mut bar = SearchBar::builder()
///     .config(SearchConfig::default())
///     .on_change(move |v| sink.borrow_mut().push(v.to_string()))
///     .build();
///
/// let t0 = Instant::now();
/// bar.focus();
/// bar.input("a", t0);
/// bar.input("ab", t0 + Duration::from_millis(50));
/// bar.input("abc", t0 + Duration::from_millis(100));
/// bar.tick(t0 + Duration::from_millis(400));
///
/// assert_eq!(*seen.borrow(), vec!["abc".to_string()]);
/// ```
#[derive(Default)]
pub struct SearchBarBuilder {
    config: Option<SearchConfig>,
    value: String,
    recent: Vec<String>,
    on_change: Option<Callback>,
    on_submit: Option<Callback>,
    on_select: Option<Callback>,
    on_clear: Option<Box<dyn FnMut()>>,
}

impl SearchBarBuilder {
    /// Timing and list limits. Defaults to [`SearchConfig::default`].
    pub fn config(mut self, config: SearchConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Initial input value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Recent searches, most recent first.
    pub fn recent<I, S>(mut self, recent: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recent = recent.into_iter().map(Into::into).collect();
        self
    }

    /// Called with the settled value after the debounce delay.
    pub fn on_change(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Called when Enter is pressed without a highlighted suggestion.
    pub fn on_submit(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_submit = Some(Box::new(f));
        self
    }

    /// Called with the committed suggestion.
    pub fn on_select(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }

    /// Called when Escape clears the input.
    pub fn on_clear(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_clear = Some(Box::new(f));
        self
    }

    /// Builds the search bar. It starts unfocused, closed and unmounted.
    pub fn build(self) -> SearchBar {
        let config = self.config.unwrap_or_default();
        let mut on_change = self.on_change;
        let change = DebouncedCallback::new(config.debounce, move |value: String| {
            if let Some(f) = on_change.as_mut() {
                f(&value);
            }
        });
        let mut recent = self.recent;
        recent.truncate(config.max_recent);

        SearchBar {
            config,
            value: self.value,
            focused: false,
            suggestions: Vec::new(),
            recent,
            blur_deadline: None,
            shared: Rc::new(RefCell::new(Shared::default())),
            change,
            on_submit: self.on_submit,
            on_select: self.on_select,
            on_clear: self.on_clear,
            outside_click: None,
        }
    }
}

/// A search input with debounced change notifications and a keyboard
/// navigable suggestion list.
pub struct SearchBar {
    config: SearchConfig,
    value: String,
    focused: bool,
    suggestions: Vec<String>,
    recent: Vec<String>,
    blur_deadline: Option<Instant>,
    shared: Rc<RefCell<Shared>>,
    change: DebouncedCallback<String>,
    on_submit: Option<Callback>,
    on_select: Option<Callback>,
    on_clear: Option<Box<dyn FnMut()>>,
    outside_click: Option<Subscription>,
}

impl SearchBar {
    /// Starts a [`SearchBarBuilder`].
    pub fn builder() -> SearchBarBuilder {
        SearchBarBuilder::default()
    }

    /// A search bar without callbacks.
    pub fn new(config: SearchConfig) -> Self {
        Self::builder().config(config).build()
    }

    /// The configuration the bar was built with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The current input text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the input has focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the dropdown is shown.
    pub fn is_open(&self) -> bool {
        self.shared.borrow().nav.is_open()
    }

    /// The highlighted row of [`visible`](Self::visible), if any.
    pub fn highlight(&self) -> Option<usize> {
        self.shared.borrow().nav.highlight()
    }

    /// The list the dropdown shows: recent searches while the input is
    /// empty, suggestions otherwise.
    pub fn visible(&self) -> &[String] {
        if self.value.is_empty() {
            &self.recent
        } else {
            &self.suggestions
        }
    }

    /// The latest suggestions, truncated to `max_suggestions`.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Recent searches, most recent first.
    pub fn recent_searches(&self) -> &[String] {
        &self.recent
    }

    /// Whether a debounced change is waiting to fire.
    pub fn is_change_pending(&self) -> bool {
        self.change.is_pending()
    }

    /// The earliest instant at which [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.change.deadline(), self.blur_deadline) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn ctx(&self) -> NavContext {
        NavContext::new(self.visible().len(), self.value.is_empty())
    }

    fn nav(&self, event: NavEvent) -> NavOutcome {
        let ctx = self.ctx();
        self.shared.borrow_mut().nav.handle(event, ctx)
    }

    /// The input text changed.
    pub fn input(&mut self, value: impl Into<String>, now: Instant) {
        self.value = value.into();
        self.change.push(self.value.clone(), now);
        self.nav(NavEvent::Changed);
    }

    /// The input gained focus. Opens the list if there is anything to show.
    pub fn focus(&mut self) {
        self.focused = true;
        self.blur_deadline = None;
        self.nav(NavEvent::Focus);
    }

    /// The input lost focus. The list closes after the grace period unless
    /// focus returns first.
    pub fn blur(&mut self, now: Instant) {
        self.focused = false;
        self.blur_deadline = Some(now + self.config.blur_grace);
    }

    /// Handles a key press and returns what the state machine decided.
    pub fn key(&mut self, key: Key) -> NavOutcome {
        let outcome = self.nav(NavEvent::Key(key));
        match outcome {
            NavOutcome::Commit(index) => self.commit(index),
            NavOutcome::Submit => self.submit(),
            NavOutcome::Clear => self.clear(),
            NavOutcome::Ignored
            | NavOutcome::Opened
            | NavOutcome::Closed
            | NavOutcome::Highlighted(_) => {}
        }
        outcome
    }

    /// A suggestion was clicked. Returns false if the index is out of range.
    pub fn click_suggestion(&mut self, index: usize) -> bool {
        if index >= self.visible().len() {
            trace!(index, "click on missing suggestion");
            return false;
        }
        self.shared.borrow_mut().nav.close();
        self.commit(index);
        true
    }

    /// Replaces the suggestion list, keeping at most `max_suggestions`.
    pub fn set_suggestions(&mut self, mut suggestions: Vec<String>) {
        suggestions.truncate(self.config.max_suggestions);
        self.suggestions = suggestions;
        let count = self.visible().len();
        let opens = self.focused && !self.value.is_empty() && count > 0 && !self.is_open();
        if opens {
            self.nav(NavEvent::Changed);
        } else {
            self.shared.borrow_mut().nav.sync(count);
        }
    }

    /// Sets the component's bounding box for outside-click detection.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.shared.borrow_mut().bounds = Some(bounds);
    }

    /// Starts listening for pointer presses outside the bounds.
    ///
    /// Replaces any previous registration. The listener is removed on
    /// [`unmount`](Self::unmount) or when the search bar is dropped.
    pub fn mount(&mut self, pointer: &EventBus<PointerEvent>) {
        let shared: Weak<RefCell<Shared>> = Rc::downgrade(&self.shared);
        let subscription = pointer.subscribe(move |event: &PointerEvent| {
            let Some(shared) = shared.upgrade() else {
                return;
            };
            let mut shared = shared.borrow_mut();
            let outside = shared
                .bounds
                .is_some_and(|bounds| !bounds.contains(event.position));
            if outside {
                shared
                    .nav
                    .handle(NavEvent::ClickOutside, NavContext::new(0, true));
            }
        });
        self.outside_click = Some(subscription);
    }

    /// Tears the bar down: removes the outside-click listener and drops any
    /// pending change and blur deadline, so no callback fires afterwards.
    pub fn unmount(&mut self) {
        self.change.cancel();
        self.blur_deadline = None;
        if let Some(mut subscription) = self.outside_click.take() {
            subscription.unsubscribe();
        }
    }

    /// Whether an outside-click listener is registered.
    pub fn is_mounted(&self) -> bool {
        self.outside_click
            .as_ref()
            .is_some_and(Subscription::is_active)
    }

    /// Fires due deadlines: the debounced change and the blur grace.
    pub fn tick(&mut self, now: Instant) {
        self.change.tick(now);
        if let Some(deadline) = self.blur_deadline {
            if now >= deadline {
                self.blur_deadline = None;
                if !self.focused {
                    self.nav(NavEvent::BlurExpired);
                }
            }
        }
    }

    fn commit(&mut self, index: usize) {
        let Some(choice) = self.visible().get(index).cloned() else {
            return;
        };
        debug!(choice = %choice, "suggestion committed");
        self.value = choice.clone();
        self.remember(&choice);
        if let Some(f) = self.on_select.as_mut() {
            f(&choice);
        }
        self.change.emit_now(choice);
    }

    fn submit(&mut self) {
        self.change.flush();
        let value = self.value.clone();
        if !value.is_empty() {
            self.remember(&value);
        }
        if let Some(f) = self.on_submit.as_mut() {
            f(&value);
        }
    }

    fn clear(&mut self) {
        self.value.clear();
        if let Some(f) = self.on_clear.as_mut() {
            f();
        }
        self.change.emit_now(String::new());
    }

    fn remember(&mut self, value: &str) {
        if self.config.max_recent == 0 {
            return;
        }
        self.recent.retain(|existing| existing != value);
        self.recent.insert(0, value.to_string());
        self.recent.truncate(self.config.max_recent);
    }
}

impl fmt::Debug for SearchBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchBar")
            .field("value", &self.value)
            .field("focused", &self.focused)
            .field("nav", &self.shared.borrow().nav)
            .field("suggestions", &self.suggestions.len())
            .field("recent", &self.recent.len())
            .finish_non_exhaustive()
    }
}

impl Drop for SearchBar {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[derive(Default)]
    struct Log {
        calls: RefCell<Vec<String>>,
    }

    fn bar_with_log() -> (SearchBar, Rc<Log>) {
        let log = Rc::new(Log::default());
        let (a, b, c, d) = (log.clone(), log.clone(), log.clone(), log.clone());
        let bar = SearchBar::builder()
            .on_change(move |v| a.calls.borrow_mut().push(format!("change:{v}")))
            .on_submit(move |v| b.calls.borrow_mut().push(format!("submit:{v}")))
            .on_select(move |v| c.calls.borrow_mut().push(format!("select:{v}")))
            .on_clear(move || d.calls.borrow_mut().push("clear".to_string()))
            .build();
        (bar, log)
    }

    fn suggestions() -> Vec<String> {
        vec!["apple".into(), "apricot".into(), "avocado".into()]
    }

    #[test]
    fn test_typing_opens_when_suggestions_arrive() {
        let (mut bar, _log) = bar_with_log();
        let t0 = Instant::now();
        bar.focus();
        bar.input("ap", t0);
        assert!(!bar.is_open());
        bar.set_suggestions(suggestions());
        assert!(bar.is_open());
        assert_eq!(bar.highlight(), None);
    }

    #[test]
    fn test_commit_fires_select_and_change_immediately() {
        let (mut bar, log) = bar_with_log();
        let t0 = Instant::now();
        bar.focus();
        bar.input("ap", t0);
        bar.set_suggestions(suggestions());
        bar.key(Key::ArrowDown);
        bar.key(Key::ArrowDown);
        assert_eq!(bar.key(Key::Enter), NavOutcome::Commit(1));
        assert_eq!(bar.value(), "apricot");
        assert!(!bar.is_change_pending());
        bar.tick(t0 + ms(1000));
        assert_eq!(
            *log.calls.borrow(),
            vec!["select:apricot".to_string(), "change:apricot".to_string()]
        );
        assert_eq!(bar.recent_searches(), &["apricot".to_string()]);
    }

    #[test]
    fn test_escape_clears_and_notifies() {
        let (mut bar, log) = bar_with_log();
        let t0 = Instant::now();
        bar.focus();
        bar.input("ap", t0);
        assert_eq!(bar.key(Key::Escape), NavOutcome::Clear);
        assert_eq!(bar.value(), "");
        bar.tick(t0 + ms(1000));
        assert_eq!(
            *log.calls.borrow(),
            vec!["clear".to_string(), "change:".to_string()]
        );
    }

    #[test]
    fn test_escape_when_empty_and_closed_is_noop() {
        let (mut bar, log) = bar_with_log();
        assert_eq!(bar.key(Key::Escape), NavOutcome::Ignored);
        assert_eq!(bar.key(Key::Escape), NavOutcome::Ignored);
        assert!(log.calls.borrow().is_empty());
    }

    #[test]
    fn test_submit_records_recent_without_duplicates() {
        let config = SearchConfig::default().with_max_recent(2);
        let mut bar = SearchBar::new(config);
        let t0 = Instant::now();
        for term in ["rust", "yaml", "rust", "toml"] {
            bar.input(term, t0);
            bar.key(Key::Enter);
        }
        assert_eq!(
            bar.recent_searches(),
            &["toml".to_string(), "rust".to_string()]
        );
    }

    #[test]
    fn test_submit_flushes_pending_change() {
        let (mut bar, log) = bar_with_log();
        let t0 = Instant::now();
        bar.input("rust", t0);
        bar.key(Key::Enter);
        assert_eq!(
            *log.calls.borrow(),
            vec!["change:rust".to_string(), "submit:rust".to_string()]
        );
    }

    #[test]
    fn test_empty_input_shows_recent() {
        let mut bar = SearchBar::builder().recent(["one", "two"]).build();
        bar.set_suggestions(suggestions());
        bar.focus();
        assert!(bar.is_open());
        assert_eq!(bar.visible(), &["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn test_suggestions_truncated() {
        let mut bar = SearchBar::new(SearchConfig::default().with_max_suggestions(2));
        bar.set_suggestions(suggestions());
        assert_eq!(bar.suggestions().len(), 2);
    }

    #[test]
    fn test_blur_grace_then_close() {
        let (mut bar, _log) = bar_with_log();
        let t0 = Instant::now();
        bar.focus();
        bar.input("ap", t0);
        bar.set_suggestions(suggestions());
        bar.blur(t0);
        bar.tick(t0 + ms(100));
        assert!(bar.is_open());
        bar.tick(t0 + ms(150));
        assert!(!bar.is_open());
    }

    #[test]
    fn test_refocus_cancels_blur_close() {
        let (mut bar, _log) = bar_with_log();
        let t0 = Instant::now();
        bar.focus();
        bar.input("ap", t0);
        bar.set_suggestions(suggestions());
        bar.blur(t0);
        bar.focus();
        bar.tick(t0 + ms(500));
        assert!(bar.is_open());
    }

    #[test]
    fn test_click_suggestion_during_blur_grace() {
        let (mut bar, log) = bar_with_log();
        let t0 = Instant::now();
        bar.focus();
        bar.input("av", t0);
        bar.set_suggestions(suggestions());
        bar.blur(t0);
        assert!(bar.click_suggestion(2));
        assert_eq!(bar.value(), "avocado");
        assert!(!bar.is_open());
        assert!(log.calls.borrow().contains(&"select:avocado".to_string()));
        assert!(!bar.click_suggestion(7));
    }

    #[test]
    fn test_next_deadline_is_earliest() {
        let mut bar = SearchBar::new(SearchConfig::default());
        let t0 = Instant::now();
        assert_eq!(bar.next_deadline(), None);
        bar.input("a", t0);
        bar.blur(t0);
        assert_eq!(bar.next_deadline(), Some(t0 + ms(150)));
    }
}
