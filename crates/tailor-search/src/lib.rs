//! Interaction logic for search-as-you-type inputs.
//!
//! - [`Debouncer`] / [`DebouncedCallback`]: one notification per burst of input
//! - [`SuggestionNav`]: the open/highlight state machine of a suggestion list
//! - [`EventBus`] / [`Subscription`]: listeners released when their guard drops
//! - [`SearchBar`]: the three composed, plus recent searches and blur grace
//!
//! Nothing here touches a clock or a thread. Every time-dependent call takes
//! an [`Instant`](std::time::Instant) and the host loop decides when to call
//! `tick`.

mod config;
mod debounce;
mod error;
mod nav;
mod searchbar;
mod subscription;

pub use config::{
    SearchConfig, DEFAULT_BLUR_GRACE_MS, DEFAULT_DEBOUNCE_MS, DEFAULT_MAX_RECENT,
    DEFAULT_MAX_SUGGESTIONS,
};
pub use debounce::{DebouncedCallback, Debouncer};
pub use error::ConfigError;
pub use nav::{Key, NavContext, NavEvent, NavOutcome, NavState, SuggestionNav};
pub use searchbar::{SearchBar, SearchBarBuilder};
pub use subscription::{
    EventBus, ListenerId, ListenerRegistry, Point, PointerEvent, Rect, Subscription,
};
