//! Timing and sizing knobs for the search bar.
//!
//! # Environment Variables
//!
//! | Variable | Type | Default | Description |
//! |----------|------|---------|-------------|
//! | `TAILOR_DEBOUNCE_MS` | u64 | 300 | Quiet period before `on_change` fires |
//! | `TAILOR_BLUR_GRACE_MS` | u64 | 150 | Delay before a blur closes the list |
//! | `TAILOR_MAX_SUGGESTIONS` | usize | 8 | Suggestions kept from the provider |
//! | `TAILOR_MAX_RECENT` | usize | 5 | Recent searches remembered |
//!
//! Unparseable values are ignored and the default is kept.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, trace};

use crate::error::ConfigError;

/// Default quiet period before a change is delivered, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
/// Default delay between blur and closing the list, in milliseconds.
pub const DEFAULT_BLUR_GRACE_MS: u64 = 150;
/// Default cap on shown suggestions.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 8;
/// Default number of remembered searches.
pub const DEFAULT_MAX_RECENT: usize = 5;

/// Search bar configuration.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use tailor_search::SearchConfig;
///
/// let config = SearchConfig::default().with_debounce(Duration::from_millis(200));
/// assert_eq!(config.debounce, Duration::from_millis(200));
/// assert_eq!(config.max_suggestions, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before `on_change` fires.
    pub debounce: Duration,
    /// How long the list stays open after the input loses focus.
    pub blur_grace: Duration,
    /// Maximum number of suggestions shown.
    pub max_suggestions: usize,
    /// Maximum number of recent searches remembered.
    pub max_recent: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            blur_grace: Duration::from_millis(DEFAULT_BLUR_GRACE_MS),
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            max_recent: DEFAULT_MAX_RECENT,
        }
    }
}

/// File form: durations in milliseconds, every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    debounce_ms: Option<u64>,
    blur_grace_ms: Option<u64>,
    max_suggestions: Option<usize>,
    max_recent: Option<usize>,
}

impl SearchConfig {
    /// Sets the debounce delay. Zero delivers on the next tick.
    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Sets how long the list stays open after the input loses focus.
    #[must_use]
    pub fn with_blur_grace(mut self, blur_grace: Duration) -> Self {
        self.blur_grace = blur_grace;
        self
    }

    /// Sets the suggestion cap. A cap of 0 is raised to 1, the smallest
    /// cap every config source accepts.
    #[must_use]
    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = match check_max_suggestions(max) {
            Ok(max) => max,
            Err(_) => {
                trace!(max, "suggestion cap raised to 1");
                1
            }
        };
        self
    }

    /// Sets how many recent searches are kept. Zero disables them.
    #[must_use]
    pub fn with_max_recent(mut self, max: usize) -> Self {
        self.max_recent = max;
        self
    }

    /// Loads defaults overridden by `TAILOR_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = env_parse::<u64>("TAILOR_DEBOUNCE_MS") {
            config.debounce = Duration::from_millis(ms);
        }
        if let Some(ms) = env_parse::<u64>("TAILOR_BLUR_GRACE_MS") {
            config.blur_grace = Duration::from_millis(ms);
        }
        if let Some(max) = env_parse::<usize>("TAILOR_MAX_SUGGESTIONS") {
            match check_max_suggestions(max) {
                Ok(max) => config.max_suggestions = max,
                Err(e) => trace!(variable = "TAILOR_MAX_SUGGESTIONS", %e, "ignoring value"),
            }
        }
        if let Some(max) = env_parse::<usize>("TAILOR_MAX_RECENT") {
            config.max_recent = max;
        }

        debug!(?config, "search config from environment");
        config
    }

    /// Parses a YAML document, filling missing fields with defaults.
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use tailor_search::SearchConfig;
    ///
    /// let config = SearchConfig::from_yaml("debounce_ms: 250\nmax_recent: 10\n").unwrap();
    /// assert_eq!(config.debounce, Duration::from_millis(250));
    /// assert_eq!(config.max_recent, 10);
    /// assert_eq!(config.max_suggestions, 8);
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let file: ConfigFile = serde_yaml::from_str(source)?;
        let mut config = Self::default();
        if let Some(ms) = file.debounce_ms {
            config.debounce = Duration::from_millis(ms);
        }
        if let Some(ms) = file.blur_grace_ms {
            config.blur_grace = Duration::from_millis(ms);
        }
        if let Some(max) = file.max_suggestions {
            config.max_suggestions = check_max_suggestions(max)?;
        }
        if let Some(max) = file.max_recent {
            config.max_recent = max;
        }
        Ok(config)
    }
}

/// The suggestion cap must be at least 1; every config source applies this.
fn check_max_suggestions(max: usize) -> Result<usize, ConfigError> {
    if max == 0 {
        return Err(ConfigError::Invalid {
            field: "max_suggestions",
            message: "must be at least 1".to_string(),
        });
    }
    Ok(max)
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            trace!(variable = name, value = %raw, "ignoring unparseable value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "TAILOR_DEBOUNCE_MS",
        "TAILOR_BLUR_GRACE_MS",
        "TAILOR_MAX_SUGGESTIONS",
        "TAILOR_MAX_RECENT",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.debounce, Duration::from_millis(300));
        assert_eq!(config.blur_grace, Duration::from_millis(150));
        assert_eq!(config.max_suggestions, 8);
        assert_eq!(config.max_recent, 5);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("TAILOR_DEBOUNCE_MS", "120");
        std::env::set_var("TAILOR_MAX_RECENT", "3");
        let config = SearchConfig::from_env();
        clear_env();

        assert_eq!(config.debounce, Duration::from_millis(120));
        assert_eq!(config.max_recent, 3);
        assert_eq!(config.blur_grace, Duration::from_millis(150));
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_garbage() {
        clear_env();
        std::env::set_var("TAILOR_BLUR_GRACE_MS", "soon");
        let config = SearchConfig::from_env();
        clear_env();

        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn test_from_yaml_empty_document() {
        assert_eq!(SearchConfig::from_yaml("").unwrap(), SearchConfig::default());
    }

    #[test]
    fn test_from_yaml_unknown_field() {
        let err = SearchConfig::from_yaml("debounce: 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_builder_raises_zero_suggestions() {
        let config = SearchConfig::default().with_max_suggestions(0);
        assert_eq!(config.max_suggestions, 1);
        assert_eq!(SearchConfig::default().with_max_suggestions(3).max_suggestions, 3);
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_zero_suggestions() {
        clear_env();
        std::env::set_var("TAILOR_MAX_SUGGESTIONS", "0");
        let config = SearchConfig::from_env();
        clear_env();

        assert_eq!(config.max_suggestions, DEFAULT_MAX_SUGGESTIONS);
    }

    #[test]
    fn test_from_yaml_zero_suggestions() {
        let err = SearchConfig::from_yaml("max_suggestions: 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "max_suggestions",
                ..
            }
        ));
    }
}
