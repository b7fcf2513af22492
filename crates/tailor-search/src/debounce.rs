//! Debounced value delivery.
//!
//! [`Debouncer`] holds at most one pending value and one deadline. Every
//! push replaces both, so a burst of pushes shorter than the delay settles
//! into a single delivery of the last value.
//!
//! Time is passed in by the caller. The debouncer never sleeps or spawns
//! anything; the caller's event loop calls [`Debouncer::poll`] (or
//! [`DebouncedCallback::tick`]) whenever it wakes, typically at
//! [`Debouncer::deadline`].
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use tailor_search::Debouncer;
//!
//! let start = Instant::now();
//! let mut debouncer = Debouncer::new(Duration::from_millis(300));
//! debouncer.push("a", start);
//! debouncer.push("ab", start + Duration::from_millis(50));
//! debouncer.push("abc", start + Duration::from_millis(100));
//!
//! assert_eq!(debouncer.poll(start + Duration::from_millis(399)), None);
//! assert_eq!(debouncer.poll(start + Duration::from_millis(400)), Some("abc"));
//! assert_eq!(debouncer.poll(start + Duration::from_millis(500)), None);
//! ```

use std::fmt;
use std::time::{Duration, Instant};

use tracing::trace;

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Coalesces rapid pushes into one value per quiet period.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    /// Creates a debouncer. A zero delay delivers on the next poll.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// The quiet period applied to each push.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Changes the delay. Applies from the next push.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Replaces any pending value and restarts the quiet period at `now`.
    pub fn push(&mut self, value: T, now: Instant) {
        if self.pending.is_some() {
            trace!("debounce restarted");
        }
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
    }

    /// Returns the pending value once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = matches!(&self.pending, Some(pending) if now >= pending.deadline);
        if due {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// Drops the pending value without delivering it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Returns the pending value immediately, ignoring the deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// When the pending value becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Whether a value is waiting for its deadline.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The value that would be delivered next.
    pub fn peek(&self) -> Option<&T> {
        self.pending.as_ref().map(|p| &p.value)
    }
}

/// A [`Debouncer`] bound to the callback it feeds.
///
/// Dropping it discards any pending value, so the callback can never run
/// after its owner is gone.
pub struct DebouncedCallback<T> {
    debouncer: Debouncer<T>,
    callback: Box<dyn FnMut(T)>,
}

impl<T> DebouncedCallback<T> {
    /// Creates a debounced callback with the given quiet period.
    pub fn new(delay: Duration, callback: impl FnMut(T) + 'static) -> Self {
        Self {
            debouncer: Debouncer::new(delay),
            callback: Box::new(callback),
        }
    }

    /// Schedules `value`, replacing any pending one and restarting the
    /// quiet period at `now`.
    pub fn push(&mut self, value: T, now: Instant) {
        self.debouncer.push(value, now);
    }

    /// Invokes the callback if the pending value is due. Returns whether it
    /// ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(value) => {
                (self.callback)(value);
                true
            }
            None => false,
        }
    }

    /// Cancels any pending value and invokes the callback with `value` now.
    pub fn emit_now(&mut self, value: T) {
        self.debouncer.cancel();
        (self.callback)(value);
    }

    /// Invokes the callback with the pending value, if any, without waiting.
    pub fn flush(&mut self) -> bool {
        match self.debouncer.flush() {
            Some(value) => {
                (self.callback)(value);
                true
            }
            None => false,
        }
    }

    /// Discards the pending value; the callback does not run for it.
    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }

    /// When the pending value becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Whether a value is waiting for its deadline.
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Changes the quiet period. Applies from the next push.
    pub fn set_delay(&mut self, delay: Duration) {
        self.debouncer.set_delay(delay);
    }
}

impl<T: fmt::Debug> fmt::Debug for DebouncedCallback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebouncedCallback")
            .field("debouncer", &self.debouncer)
            .finish_non_exhaustive()
    }
}

impl<T> Drop for DebouncedCallback<T> {
    fn drop(&mut self) {
        if self.debouncer.cancel().is_some() {
            trace!("pending debounced value discarded on drop");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl FnMut(String) + 'static) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        (calls, move |v: String| sink.borrow_mut().push(v))
    }

    #[test]
    fn test_single_push_fires_after_delay() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(ms(100));
        d.push(1, t0);
        assert_eq!(d.deadline(), Some(t0 + ms(100)));
        assert_eq!(d.poll(t0 + ms(99)), None);
        assert_eq!(d.poll(t0 + ms(100)), Some(1));
        assert!(!d.is_pending());
    }

    #[test]
    fn test_zero_delay_fires_on_next_poll() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(Duration::ZERO);
        d.push("x", t0);
        assert_eq!(d.poll(t0), Some("x"));
    }

    #[test]
    fn test_cancel_discards() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(ms(10));
        d.push(5, t0);
        assert_eq!(d.cancel(), Some(5));
        assert_eq!(d.poll(t0 + ms(50)), None);
    }

    #[test]
    fn test_flush_ignores_deadline() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(ms(1000));
        d.push(5, t0);
        assert_eq!(d.peek(), Some(&5));
        assert_eq!(d.flush(), Some(5));
        assert_eq!(d.flush(), None);
    }

    #[test]
    fn test_callback_burst_fires_once() {
        let t0 = Instant::now();
        let (calls, sink) = recorder();
        let mut cb = DebouncedCallback::new(ms(300), sink);
        cb.push("a".to_string(), t0);
        cb.push("ab".to_string(), t0 + ms(50));
        cb.push("abc".to_string(), t0 + ms(100));

        assert!(!cb.tick(t0 + ms(300)));
        assert!(cb.tick(t0 + ms(400)));
        assert!(!cb.tick(t0 + ms(800)));
        assert_eq!(*calls.borrow(), vec!["abc".to_string()]);
    }

    #[test]
    fn test_emit_now_cancels_pending() {
        let t0 = Instant::now();
        let (calls, sink) = recorder();
        let mut cb = DebouncedCallback::new(ms(300), sink);
        cb.push("ap".to_string(), t0);
        cb.emit_now("apple".to_string());
        assert!(!cb.tick(t0 + ms(1000)));
        assert_eq!(*calls.borrow(), vec!["apple".to_string()]);
    }

    #[test]
    fn test_drop_never_fires() {
        let t0 = Instant::now();
        let (calls, sink) = recorder();
        let mut cb = DebouncedCallback::new(ms(300), sink);
        cb.push("late".to_string(), t0);
        drop(cb);
        assert!(calls.borrow().is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn burst_delivers_last_value_once(
            gaps in prop::collection::vec(0u64..300, 1..20),
            delay in 1u64..1000,
        ) {
            let delay = Duration::from_millis(delay);
            let t0 = Instant::now();
            let mut debouncer = Debouncer::new(delay);
            let mut delivered = Vec::new();
            let mut now = t0;

            for (i, gap) in gaps.iter().enumerate() {
                // Gaps shorter than the delay keep the burst alive.
                let gap = Duration::from_millis(*gap).min(delay - Duration::from_millis(1));
                now += gap;
                if let Some(v) = debouncer.poll(now) {
                    delivered.push(v);
                }
                debouncer.push(i, now);
            }

            let last = gaps.len() - 1;
            if let Some(v) = debouncer.poll(now + delay) {
                delivered.push(v);
            }
            prop_assert_eq!(delivered, vec![last]);
        }
    }
}
