//! Per-render axis assignments.

use crate::value::{Variant, VariantValue};

/// The caller-supplied axis values for one render.
///
/// Axes missing from the assignment fall back to the table defaults at
/// resolve time. Setting an axis twice keeps the later value.
///
/// # Example
///
/// ```rust
/// use tailor_variants::{PropAssignment, VariantValue};
///
/// let props = PropAssignment::new()
///     .set("variant", "ghost")
///     .set("size", "sm")
///     .set("interactive", true);
///
/// assert_eq!(props.get("size"), Some(&VariantValue::from("sm")));
/// assert_eq!(props.get("interactive"), Some(&VariantValue::Bool(true)));
/// assert_eq!(props.get("tone"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropAssignment {
    entries: Vec<(String, VariantValue)>,
}

impl PropAssignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets an axis value, returning the updated assignment for chaining.
    pub fn set(mut self, axis: &str, value: impl Into<VariantValue>) -> Self {
        self.insert(axis, value);
        self
    }

    /// Sets a typed axis value, returning the updated assignment for chaining.
    pub fn with<V: Variant>(self, value: V) -> Self {
        self.set(V::AXIS, value.value())
    }

    /// Sets an axis value in place.
    pub fn insert(&mut self, axis: &str, value: impl Into<VariantValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| name == axis) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((axis.to_string(), value)),
        }
    }

    /// Removes an axis, returning its value if it was set.
    pub fn remove(&mut self, axis: &str) -> Option<VariantValue> {
        let index = self.entries.iter().position(|(name, _)| name == axis)?;
        Some(self.entries.remove(index).1)
    }

    /// Returns the value assigned to an axis.
    pub fn get(&self, axis: &str) -> Option<&VariantValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == axis)
            .map(|(_, value)| value)
    }

    /// Whether the axis has a value.
    pub fn contains(&self, axis: &str) -> bool {
        self.get(axis).is_some()
    }

    /// Iterates over `(axis, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariantValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of assigned axes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no axis is assigned.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for PropAssignment
where
    K: AsRef<str>,
    V: Into<VariantValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut assignment = PropAssignment::new();
        for (axis, value) in iter {
            assignment.insert(axis.as_ref(), value);
        }
        assignment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_existing() {
        let props = PropAssignment::new().set("size", "sm").set("size", "lg");
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("size"), Some(&VariantValue::from("lg")));
    }

    #[test]
    fn test_remove() {
        let mut props = PropAssignment::new().set("size", "sm");
        assert_eq!(props.remove("size"), Some(VariantValue::from("sm")));
        assert_eq!(props.remove("size"), None);
        assert!(props.is_empty());
    }

    #[test]
    fn test_from_iterator_keeps_order() {
        let props: PropAssignment = vec![("b", 1), ("a", 2)].into_iter().collect();
        let axes: Vec<&str> = props.iter().map(|(axis, _)| axis).collect();
        assert_eq!(axes, vec!["b", "a"]);
    }
}
