//! Variant resolution.
//!
//! Resolution turns a [`VariantTable`] and a [`PropAssignment`] into the
//! ordered token list for one render:
//!
//! 1. base tokens
//! 2. per-axis tokens, in axis declaration order
//! 3. compound rule tokens, in rule declaration order
//! 4. caller extras
//!
//! The resolver knows nothing about which tokens conflict. Run the result
//! through a [`TokenMerger`] when later tokens should replace earlier ones.
//!
//! Unknown values are never errors: an axis whose assigned value is not
//! declared contributes its fallback tokens if it has any, and nothing
//! otherwise.

use tracing::trace;

use crate::assignment::PropAssignment;
use crate::merge::TokenMerger;
use crate::table::VariantTable;
use crate::tokens::{ClassList, IntoTokens};

impl VariantTable {
    /// Resolves the tokens for one render.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tailor_variants::{PropAssignment, VariantAxis, VariantTable};
    ///
    /// let table = VariantTable::builder()
    ///     .axis(VariantAxis::new("size").value("sm", "h-8").value("md", "h-9").value("lg", "h-10"))
    ///     .default_value("size", "md")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(table.resolve(&PropAssignment::new()).to_string(), "h-9");
    /// ```
    pub fn resolve(&self, assignment: &PropAssignment) -> ClassList {
        self.resolve_with(assignment, None::<&str>)
    }

    /// Resolves the tokens for one render and appends caller extras last.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tailor_variants::{PropAssignment, VariantAxis, VariantTable};
    ///
    /// let table = VariantTable::builder()
    ///     .axis(VariantAxis::new("size").value("sm", "h-8").value("md", "h-9").value("lg", "h-10"))
    ///     .default_value("size", "md")
    ///     .build()
    ///     .unwrap();
    ///
    /// let classes = table.resolve_with(&PropAssignment::new().set("size", "lg"), "custom");
    /// assert_eq!(classes.tokens(), &["h-10", "custom"]);
    /// ```
    pub fn resolve_with(&self, assignment: &PropAssignment, extra: impl IntoTokens) -> ClassList {
        let resolved = self.resolved_assignment(assignment);
        let mut classes = ClassList::new();
        classes.extend_from_slice(&self.base);

        for axis in &self.axes {
            let Some(value) = resolved.get(axis.name()) else {
                continue;
            };
            match axis.tokens_for(value) {
                Some(tokens) => classes.extend_from_slice(tokens),
                None => {
                    trace!(axis = axis.name(), %value, "undeclared axis value");
                    if let Some(fallback) = axis.fallback_tokens() {
                        classes.extend_from_slice(fallback);
                    }
                }
            }
        }

        for rule in &self.compounds {
            if rule.matches(&resolved) {
                classes.extend_from_slice(rule.tokens());
            }
        }

        classes.push(extra);
        classes
    }

    /// Returns the assignment after applying axis defaults.
    ///
    /// Only axes the table declares are kept, in axis declaration order.
    pub fn resolved_assignment(&self, assignment: &PropAssignment) -> PropAssignment {
        let mut resolved = PropAssignment::new();
        for axis in &self.axes {
            if let Some(value) = assignment.get(axis.name()).or(axis.default()) {
                resolved.insert(axis.name(), value.clone());
            }
        }
        for (name, _) in assignment.iter() {
            if self.axis(name).is_none() {
                trace!(axis = name, "assignment names an axis the table does not declare");
            }
        }
        resolved
    }

    /// Resolves, merges conflicting tokens and returns the class string.
    ///
    /// Compound and extra tokens come later in the resolved list, so they
    /// win over per-axis tokens of the same conflict group.
    pub fn class_name(
        &self,
        assignment: &PropAssignment,
        extra: impl IntoTokens,
        merger: &TokenMerger,
    ) -> String {
        merger.merge(self.resolve_with(assignment, extra)).join()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::table::{CompoundRule, VariantAxis};
    use proptest::prelude::*;

    const SIZES: &[&str] = &["sm", "md", "lg"];
    const TONES: &[&str] = &["neutral", "danger"];

    fn table() -> VariantTable {
        VariantTable::builder()
            .base("base")
            .axis(
                VariantAxis::new("size")
                    .value("sm", "size-sm")
                    .value("md", "size-md")
                    .value("lg", "size-lg"),
            )
            .axis(
                VariantAxis::new("tone")
                    .value("neutral", "tone-neutral")
                    .value("danger", "tone-danger"),
            )
            .compound(CompoundRule::new("both").when("size", "lg").when("tone", "danger"))
            .default_value("size", "md")
            .build()
            .unwrap()
    }

    fn any_value() -> impl Strategy<Value = Option<String>> {
        prop::option::of(prop_oneof![
            prop::sample::select(SIZES).prop_map(str::to_string),
            prop::sample::select(TONES).prop_map(str::to_string),
            "[a-z]{1,6}",
        ])
    }

    fn assignment(size: &Option<String>, tone: &Option<String>) -> PropAssignment {
        let mut props = PropAssignment::new();
        if let Some(size) = size {
            props.insert("size", size.as_str());
        }
        if let Some(tone) = tone {
            props.insert("tone", tone.as_str());
        }
        props
    }

    proptest! {
        #[test]
        fn resolve_is_deterministic(size in any_value(), tone in any_value()) {
            let table = table();
            let props = assignment(&size, &tone);
            prop_assert_eq!(table.resolve(&props), table.resolve(&props));
        }

        #[test]
        fn undeclared_values_contribute_nothing(garbage in "[A-Z]{1,8}") {
            let table = table();
            let props = PropAssignment::new().set("tone", garbage.as_str());
            let classes = table.resolve(&props);
            prop_assert!(classes.iter().all(|t| !t.starts_with("tone-")));
        }

        #[test]
        fn compound_applies_iff_all_conditions_hold(size in any_value(), tone in any_value()) {
            let table = table();
            let props = assignment(&size, &tone);
            let classes = table.resolve(&props);
            let expected = size.as_deref() == Some("lg") && tone.as_deref() == Some("danger");
            prop_assert_eq!(classes.contains("both"), expected);
        }

        #[test]
        fn base_always_first(size in any_value(), tone in any_value()) {
            let table = table();
            let classes = table.resolve(&assignment(&size, &tone));
            prop_assert_eq!(classes.tokens().first().map(String::as_str), Some("base"));
        }
    }
}
