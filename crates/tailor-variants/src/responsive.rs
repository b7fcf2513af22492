//! Breakpoint-prefixed class generation.
//!
//! A [`BreakpointOverrides`] map assigns partial props per breakpoint. The
//! generator looks every override up through the table's axis value→token
//! mapping and prefixes each token with `"<breakpoint>:"`.
//!
//! Output always follows the canonical breakpoint order `sm, md, lg, xl,
//! 2xl`, whatever order the overrides were inserted in. Compound rules and
//! defaults do not take part: an override only says what changes at that
//! breakpoint.
//!
//! Keyword values such as `auto-fill` are ordinary table entries that map to
//! literal tokens; nothing is interpolated.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::assignment::PropAssignment;
use crate::table::VariantTable;
use crate::tokens::{ClassList, IntoTokens};
use crate::value::VariantValue;

/// A named viewport-width threshold.
///
/// The derived ordering is the canonical breakpoint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    /// `sm:`, 640px and up.
    Sm,
    /// `md:`, 768px and up.
    Md,
    /// `lg:`, 1024px and up.
    Lg,
    /// `xl:`, 1280px and up.
    Xl,
    /// `2xl:`, 1536px and up.
    Xxl,
}

impl Breakpoint {
    /// Every breakpoint in canonical order.
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    /// The class prefix name (`sm`, ..., `2xl`).
    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        }
    }

    /// Parses a breakpoint name.
    ///
    /// Accepts `xxl` as an alias for `2xl`, since the latter is not a valid
    /// identifier in most templating and config languages.
    ///
    /// ```rust
    /// use tailor_variants::Breakpoint;
    ///
    /// assert_eq!(Breakpoint::parse("md"), Some(Breakpoint::Md));
    /// assert_eq!(Breakpoint::parse("2xl"), Some(Breakpoint::Xxl));
    /// assert_eq!(Breakpoint::parse("xxl"), Some(Breakpoint::Xxl));
    /// assert_eq!(Breakpoint::parse("tablet"), None);
    /// ```
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "sm" => Some(Breakpoint::Sm),
            "md" => Some(Breakpoint::Md),
            "lg" => Some(Breakpoint::Lg),
            "xl" => Some(Breakpoint::Xl),
            "2xl" | "xxl" => Some(Breakpoint::Xxl),
            _ => None,
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by [`Breakpoint::from_str`] for unknown names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown breakpoint '{0}'")]
pub struct UnknownBreakpoint(pub String);

impl FromStr for Breakpoint {
    type Err = UnknownBreakpoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Breakpoint::parse(s).ok_or_else(|| UnknownBreakpoint(s.to_string()))
    }
}

/// Partial assignments keyed by breakpoint.
///
/// # Example
///
/// ```rust
/// use tailor_variants::{Breakpoint, BreakpointOverrides, PropAssignment};
///
/// let overrides = BreakpointOverrides::new()
///     .at(Breakpoint::Lg, PropAssignment::new().set("columns", 4))
///     .at(Breakpoint::Sm, PropAssignment::new().set("columns", 2));
///
/// let order: Vec<Breakpoint> = overrides.iter().map(|(bp, _)| bp).collect();
/// assert_eq!(order, vec![Breakpoint::Sm, Breakpoint::Lg]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakpointOverrides {
    entries: BTreeMap<Breakpoint, PropAssignment>,
}

impl BreakpointOverrides {
    /// Creates an empty override map.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Sets the override for a breakpoint, replacing any previous one.
    pub fn at(mut self, breakpoint: Breakpoint, assignment: PropAssignment) -> Self {
        self.entries.insert(breakpoint, assignment);
        self
    }

    /// Sets one axis value at a breakpoint, keeping other axes there.
    pub fn set(
        mut self,
        breakpoint: Breakpoint,
        axis: &str,
        value: impl Into<VariantValue>,
    ) -> Self {
        self.insert(breakpoint, axis, value);
        self
    }

    /// Sets one axis value at a breakpoint in place.
    pub fn insert(&mut self, breakpoint: Breakpoint, axis: &str, value: impl Into<VariantValue>) {
        self.entries
            .entry(breakpoint)
            .or_default()
            .insert(axis, value);
    }

    /// Builds overrides from string-keyed pairs, ignoring unknown breakpoints.
    ///
    /// ```rust
    /// use tailor_variants::{BreakpointOverrides, PropAssignment};
    ///
    /// let overrides = BreakpointOverrides::from_pairs([
    ///     ("lg", PropAssignment::new().set("columns", 4)),
    ///     ("tablet", PropAssignment::new().set("columns", 3)),
    /// ]);
    /// assert_eq!(overrides.len(), 1);
    /// ```
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, PropAssignment)>,
        K: AsRef<str>,
    {
        let mut overrides = BreakpointOverrides::new();
        for (name, assignment) in pairs {
            match Breakpoint::parse(name.as_ref()) {
                Some(breakpoint) => {
                    overrides.entries.insert(breakpoint, assignment);
                }
                None => trace!(breakpoint = name.as_ref(), "ignoring unknown breakpoint"),
            }
        }
        overrides
    }

    /// Returns the override at a breakpoint.
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&PropAssignment> {
        self.entries.get(&breakpoint)
    }

    /// Iterates in canonical breakpoint order.
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &PropAssignment)> {
        self.entries.iter().map(|(bp, assignment)| (*bp, assignment))
    }

    /// Number of breakpoints with an entry, empty entries included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no breakpoint has an entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A base assignment plus per-breakpoint overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Responsive {
    pub base: PropAssignment,
    pub overrides: BreakpointOverrides,
}

impl Responsive {
    /// Creates a responsive assignment with no overrides.
    pub fn new(base: PropAssignment) -> Self {
        Self {
            base,
            overrides: BreakpointOverrides::new(),
        }
    }

    /// Replaces the overrides.
    pub fn with_overrides(mut self, overrides: BreakpointOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

impl VariantTable {
    /// Generates breakpoint-prefixed tokens for the overrides.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tailor_variants::{Breakpoint, BreakpointOverrides, VariantAxis, VariantTable};
    ///
    /// let grid = VariantTable::builder()
    ///     .axis(VariantAxis::new("columns").value(2, "grid-cols-2").value(4, "grid-cols-4"))
    ///     .build()
    ///     .unwrap();
    ///
    /// let overrides = BreakpointOverrides::new()
    ///     .set(Breakpoint::Lg, "columns", 4)
    ///     .set(Breakpoint::Sm, "columns", 2);
    ///
    /// assert_eq!(grid.responsive(&overrides).tokens(), &["sm:grid-cols-2", "lg:grid-cols-4"]);
    /// ```
    pub fn responsive(&self, overrides: &BreakpointOverrides) -> ClassList {
        let mut classes = ClassList::new();
        for (breakpoint, assignment) in overrides.iter() {
            for axis in &self.axes {
                let Some(value) = assignment.get(axis.name()) else {
                    continue;
                };
                match axis.tokens_for(value) {
                    Some(tokens) => {
                        for token in tokens {
                            classes.push(format!("{}:{}", breakpoint.as_str(), token));
                        }
                    }
                    None => trace!(
                        breakpoint = breakpoint.as_str(),
                        axis = axis.name(),
                        %value,
                        "undeclared axis value in breakpoint override"
                    ),
                }
            }
        }
        classes
    }

    /// Resolves the base assignment, then appends responsive tokens and
    /// caller extras.
    pub fn resolve_responsive(&self, responsive: &Responsive, extra: impl IntoTokens) -> ClassList {
        let mut classes = self.resolve(&responsive.base);
        classes.extend_from_slice(self.responsive(&responsive.overrides).tokens());
        classes.push(extra);
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{CompoundRule, VariantAxis};

    fn grid() -> VariantTable {
        VariantTable::builder()
            .base("grid")
            .axis(
                VariantAxis::new("columns")
                    .value(1, "grid-cols-1")
                    .value(2, "grid-cols-2")
                    .value(4, "grid-cols-4")
                    .value("auto-fill", "grid-cols-[repeat(auto-fill,minmax(0,1fr))]"),
            )
            .axis(VariantAxis::new("gap").value("sm", "gap-2").value("lg", "gap-6"))
            .compound(CompoundRule::new("never-responsive").when("gap", "lg"))
            .default_value("columns", 1)
            .build()
            .unwrap()
    }

    #[test]
    fn responsive_follows_canonical_order() {
        let overrides = BreakpointOverrides::new()
            .set(Breakpoint::Xxl, "columns", 4)
            .set(Breakpoint::Lg, "columns", 4)
            .set(Breakpoint::Sm, "columns", 2);
        assert_eq!(
            grid().responsive(&overrides).tokens(),
            &["sm:grid-cols-2", "lg:grid-cols-4", "2xl:grid-cols-4"]
        );
    }

    #[test]
    fn responsive_groups_axes_in_declaration_order() {
        let overrides = BreakpointOverrides::new()
            .at(
                Breakpoint::Md,
                PropAssignment::new().set("gap", "lg").set("columns", 2),
            );
        assert_eq!(
            grid().responsive(&overrides).tokens(),
            &["md:grid-cols-2", "md:gap-6"]
        );
    }

    #[test]
    fn responsive_keyword_value_is_literal() {
        let overrides = BreakpointOverrides::new().set(Breakpoint::Md, "columns", "auto-fill");
        assert_eq!(
            grid().responsive(&overrides).tokens(),
            &["md:grid-cols-[repeat(auto-fill,minmax(0,1fr))]"]
        );
    }

    #[test]
    fn responsive_skips_compounds_and_defaults() {
        let overrides = BreakpointOverrides::new().set(Breakpoint::Lg, "gap", "lg");
        let classes = grid().responsive(&overrides);
        assert_eq!(classes.tokens(), &["lg:gap-6"]);
    }

    #[test]
    fn responsive_empty_entry_contributes_nothing() {
        let overrides = BreakpointOverrides::new().at(Breakpoint::Md, PropAssignment::new());
        assert!(grid().responsive(&overrides).is_empty());
    }

    #[test]
    fn responsive_unknown_value_contributes_nothing() {
        let overrides = BreakpointOverrides::new()
            .set(Breakpoint::Sm, "columns", 7)
            .set(Breakpoint::Md, "columns", 2);
        assert_eq!(grid().responsive(&overrides).tokens(), &["md:grid-cols-2"]);
    }

    #[test]
    fn from_pairs_ignores_unknown_breakpoints() {
        let overrides = BreakpointOverrides::from_pairs([
            ("lg", PropAssignment::new().set("columns", 4)),
            ("phone", PropAssignment::new().set("columns", 1)),
            ("sm", PropAssignment::new().set("columns", 2)),
        ]);
        assert_eq!(
            grid().responsive(&overrides).tokens(),
            &["sm:grid-cols-2", "lg:grid-cols-4"]
        );
    }

    #[test]
    fn resolve_responsive_combines_base_overrides_extras() {
        let responsive = Responsive::new(PropAssignment::new().set("gap", "sm"))
            .with_overrides(BreakpointOverrides::new().set(Breakpoint::Md, "columns", 2));
        let classes = grid().resolve_responsive(&responsive, "mx-auto");
        assert_eq!(
            classes.tokens(),
            &["grid", "grid-cols-1", "gap-2", "md:grid-cols-2", "mx-auto"]
        );
    }

    #[test]
    fn breakpoint_from_str() {
        assert_eq!("xl".parse::<Breakpoint>(), Ok(Breakpoint::Xl));
        assert_eq!(
            "huge".parse::<Breakpoint>(),
            Err(UnknownBreakpoint("huge".to_string()))
        );
        assert_eq!(Breakpoint::Xxl.to_string(), "2xl");
    }
}
