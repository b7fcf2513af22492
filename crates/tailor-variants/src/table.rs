//! Variant tables: base tokens, axes and compound rules.
//!
//! A [`VariantTable`] is the declarative description of one component's
//! appearance. It is built once through [`VariantTableBuilder`], validated
//! at construction, and then resolved many times per second.

use tracing::debug;

use crate::assignment::PropAssignment;
use crate::error::TableError;
use crate::tokens::IntoTokens;
use crate::value::{Variant, VariantValue};

/// One named dimension of visual variation.
///
/// Values keep their declaration order. Declaring the same value twice
/// replaces its tokens.
///
/// # Example
///
/// ```rust
/// use tailor_variants::{VariantAxis, VariantValue};
///
/// let size = VariantAxis::new("size")
///     .value("sm", "h-8 px-3")
///     .value("md", "h-9 px-4")
///     .default_value("md");
///
/// assert_eq!(size.tokens_for(&VariantValue::from("sm")), Some(&["h-8".to_string(), "px-3".to_string()][..]));
/// assert_eq!(size.default(), Some(&VariantValue::from("md")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantAxis {
    name: String,
    values: Vec<(VariantValue, Vec<String>)>,
    default: Option<VariantValue>,
    fallback: Option<Vec<String>>,
}

impl VariantAxis {
    /// Creates an axis with no values.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            values: Vec::new(),
            default: None,
            fallback: None,
        }
    }

    /// Builds an axis covering every value of a typed enum.
    ///
    /// ```rust
    /// use tailor_variants::{Variant, VariantAxis, VariantValue};
    ///
    /// #[derive(Clone, Copy)]
    /// enum Align { Start, End }
    ///
    /// impl Variant for Align {
    ///     const AXIS: &'static str = "align";
    ///     const ALL: &'static [Self] = &[Align::Start, Align::End];
    ///     fn value(&self) -> VariantValue {
    ///         match self {
    ///             Align::Start => "start".into(),
    ///             Align::End => "end".into(),
    ///         }
    ///     }
    /// }
    ///
    /// let axis = VariantAxis::typed(|a: Align| match a {
    ///     Align::Start => "text-left",
    ///     Align::End => "text-right",
    /// });
    /// assert_eq!(axis.name(), "align");
    /// assert_eq!(axis.len(), 2);
    /// ```
    pub fn typed<V, F, T>(tokens: F) -> Self
    where
        V: Variant,
        F: Fn(V) -> T,
        T: IntoTokens,
    {
        let mut axis = VariantAxis::new(V::AXIS);
        for value in V::ALL {
            axis = axis.value(value.value(), tokens(*value));
        }
        axis
    }

    /// Adds a value and its tokens.
    pub fn value(mut self, value: impl Into<VariantValue>, tokens: impl IntoTokens) -> Self {
        let value = value.into();
        let tokens = tokens.into_tokens();
        match self.values.iter_mut().find(|(v, _)| *v == value) {
            Some(entry) => entry.1 = tokens,
            None => self.values.push((value, tokens)),
        }
        self
    }

    /// Sets the value used when a render leaves this axis unset.
    pub fn default_value(mut self, value: impl Into<VariantValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Sets a typed default value.
    pub fn default_variant<V: Variant>(self, value: V) -> Self {
        self.default_value(value.value())
    }

    /// Sets tokens applied when an assigned value is not declared.
    ///
    /// Without a fallback, undeclared values contribute nothing.
    pub fn fallback(mut self, tokens: impl IntoTokens) -> Self {
        self.fallback = Some(tokens.into_tokens());
        self
    }

    /// The axis name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The default value, if any.
    pub fn default(&self) -> Option<&VariantValue> {
        self.default.as_ref()
    }

    /// The fallback tokens, if any.
    pub fn fallback_tokens(&self) -> Option<&[String]> {
        self.fallback.as_deref()
    }

    /// Looks up the tokens declared for a value.
    ///
    /// This is the strict table lookup: it ignores the fallback.
    pub fn tokens_for(&self, value: &VariantValue) -> Option<&[String]> {
        self.values
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, tokens)| tokens.as_slice())
    }

    /// Whether the value is declared on this axis.
    pub fn has_value(&self, value: &VariantValue) -> bool {
        self.tokens_for(value).is_some()
    }

    /// Iterates over the declared values in order.
    pub fn values(&self) -> impl Iterator<Item = &VariantValue> {
        self.values.iter().map(|(v, _)| v)
    }

    /// Number of declared values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the axis declares no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Extra tokens applied when every condition holds for the resolved assignment.
///
/// A condition may accept one value or any of several.
///
/// # Example
///
/// ```rust
/// use tailor_variants::{CompoundRule, PropAssignment};
///
/// let rule = CompoundRule::new("px-2")
///     .when("variant", "ghost")
///     .when_any("size", ["sm", "md"]);
///
/// let props = PropAssignment::new().set("variant", "ghost").set("size", "md");
/// assert!(rule.matches(&props));
///
/// let props = PropAssignment::new().set("variant", "ghost").set("size", "lg");
/// assert!(!rule.matches(&props));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundRule {
    conditions: Vec<(String, Vec<VariantValue>)>,
    tokens: Vec<String>,
}

impl CompoundRule {
    /// Creates a rule contributing the given tokens, with no conditions yet.
    pub fn new(tokens: impl IntoTokens) -> Self {
        Self {
            conditions: Vec::new(),
            tokens: tokens.into_tokens(),
        }
    }

    /// Requires an axis to have exactly this value.
    pub fn when(self, axis: &str, value: impl Into<VariantValue>) -> Self {
        self.when_any(axis, [value.into()])
    }

    /// Requires an axis to have one of these values.
    ///
    /// An empty list is rejected when the table is built.
    pub fn when_any<I, V>(mut self, axis: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<VariantValue>,
    {
        let values: Vec<VariantValue> = values.into_iter().map(Into::into).collect();
        match self.conditions.iter_mut().find(|(name, _)| name == axis) {
            Some(entry) => entry.1 = values,
            None => self.conditions.push((axis.to_string(), values)),
        }
        self
    }

    /// Requires a typed axis value.
    pub fn when_variant<V: Variant>(self, value: V) -> Self {
        self.when(V::AXIS, value.value())
    }

    /// Whether every condition is satisfied by the assignment.
    ///
    /// A rule with no conditions never matches; tables reject such rules.
    pub fn matches(&self, resolved: &PropAssignment) -> bool {
        !self.conditions.is_empty()
            && self.conditions.iter().all(|(axis, accepted)| {
                resolved
                    .get(axis)
                    .map(|value| accepted.contains(value))
                    .unwrap_or(false)
            })
    }

    /// The conditions as `(axis, accepted values)` pairs.
    pub fn conditions(&self) -> impl Iterator<Item = (&str, &[VariantValue])> {
        self.conditions
            .iter()
            .map(|(axis, values)| (axis.as_str(), values.as_slice()))
    }

    /// The tokens this rule contributes.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// A validated component table.
///
/// Construct through [`VariantTable::builder`]. See the `resolve` and
/// `responsive` methods for how tokens are produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VariantTable {
    pub(crate) base: Vec<String>,
    pub(crate) axes: Vec<VariantAxis>,
    pub(crate) compounds: Vec<CompoundRule>,
}

impl VariantTable {
    /// Starts building a table.
    pub fn builder() -> VariantTableBuilder {
        VariantTableBuilder::default()
    }

    /// Tokens applied on every render.
    pub fn base(&self) -> &[String] {
        &self.base
    }

    /// Axes in declaration order.
    pub fn axes(&self) -> &[VariantAxis] {
        &self.axes
    }

    /// Looks up an axis by name.
    pub fn axis(&self, name: &str) -> Option<&VariantAxis> {
        self.axes.iter().find(|axis| axis.name == name)
    }

    /// Compound rules in declaration order.
    pub fn compounds(&self) -> &[CompoundRule] {
        &self.compounds
    }
}

/// Fluent builder for [`VariantTable`].
///
/// # Example
///
/// ```rust
/// use tailor_variants::{CompoundRule, PropAssignment, VariantAxis, VariantTable};
///
/// let badge = VariantTable::builder()
///     .base("inline-flex items-center rounded-md")
///     .axis(
///         VariantAxis::new("variant")
///             .value("default", "bg-primary text-primary-foreground")
///             .value("outline", "border text-foreground"),
///     )
///     .axis(VariantAxis::new("size").value("sm", "px-2 text-xs").value("md", "px-2.5 text-sm"))
///     .axis(VariantAxis::new("interactive").value(true, "cursor-pointer"))
///     .compound(CompoundRule::new("hover:bg-accent").when("variant", "outline").when("interactive", true))
///     .default_value("variant", "default")
///     .default_value("size", "md")
///     .build()
///     .unwrap();
///
/// let classes = badge.resolve(&PropAssignment::new().set("size", "sm"));
/// assert_eq!(
///     classes.to_string(),
///     "inline-flex items-center rounded-md bg-primary text-primary-foreground px-2 text-xs"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct VariantTableBuilder {
    base: Vec<String>,
    axes: Vec<VariantAxis>,
    compounds: Vec<CompoundRule>,
    defaults: Vec<(String, VariantValue)>,
}

impl VariantTableBuilder {
    /// Appends base tokens.
    pub fn base(mut self, tokens: impl IntoTokens) -> Self {
        self.base.extend(tokens.into_tokens());
        self
    }

    /// Adds an axis. Axes resolve in the order they are added.
    pub fn axis(mut self, axis: VariantAxis) -> Self {
        self.axes.push(axis);
        self
    }

    /// Adds a compound rule. Rules apply in the order they are added.
    pub fn compound(mut self, rule: CompoundRule) -> Self {
        self.compounds.push(rule);
        self
    }

    /// Sets the default of an axis by name.
    ///
    /// Overrides any default given on the axis itself.
    pub fn default_value(mut self, axis: &str, value: impl Into<VariantValue>) -> Self {
        self.defaults.push((axis.to_string(), value.into()));
        self
    }

    /// Sets a typed default.
    pub fn default_variant<V: Variant>(self, value: V) -> Self {
        self.default_value(V::AXIS, value.value())
    }

    /// Validates and returns the table.
    ///
    /// # Errors
    ///
    /// - [`TableError::DuplicateAxis`] when two axes share a name
    /// - [`TableError::UnknownAxis`] when a default or compound rule names a missing axis
    /// - [`TableError::UnknownValue`] when a compound rule requires an undeclared value
    /// - [`TableError::InvalidDefault`] when a default is not declared on its axis
    /// - [`TableError::EmptyCompound`] when a compound rule has no conditions
    pub fn build(self) -> Result<VariantTable, TableError> {
        let VariantTableBuilder {
            base,
            mut axes,
            compounds,
            defaults,
        } = self;

        for (i, axis) in axes.iter().enumerate() {
            if axes[..i].iter().any(|earlier| earlier.name == axis.name) {
                return Err(TableError::DuplicateAxis {
                    axis: axis.name.clone(),
                });
            }
        }

        for (name, value) in defaults {
            let axis = axes
                .iter_mut()
                .find(|axis| axis.name == name)
                .ok_or_else(|| TableError::UnknownAxis {
                    axis: name.clone(),
                    context: format!("default for '{}'", name),
                })?;
            axis.default = Some(value);
        }

        for axis in &axes {
            if let Some(default) = &axis.default {
                if !axis.has_value(default) {
                    return Err(TableError::InvalidDefault {
                        axis: axis.name.clone(),
                        value: default.clone(),
                    });
                }
            }
        }

        for (index, rule) in compounds.iter().enumerate() {
            if rule.conditions.is_empty() {
                return Err(TableError::EmptyCompound { index });
            }
            for (axis_name, accepted) in &rule.conditions {
                if accepted.is_empty() {
                    return Err(TableError::EmptyCondition {
                        index,
                        axis: axis_name.clone(),
                    });
                }
                let context = format!("compound rule #{}", index);
                let axis = axes
                    .iter()
                    .find(|axis| &axis.name == axis_name)
                    .ok_or_else(|| TableError::UnknownAxis {
                        axis: axis_name.clone(),
                        context: context.clone(),
                    })?;
                if let Some(value) = accepted.iter().find(|v| !axis.has_value(v)) {
                    return Err(TableError::UnknownValue {
                        axis: axis_name.clone(),
                        value: value.clone(),
                        context,
                    });
                }
            }
        }

        debug!(
            axes = axes.len(),
            compounds = compounds.len(),
            "built variant table"
        );

        Ok(VariantTable {
            base,
            axes,
            compounds,
        })
    }
}
