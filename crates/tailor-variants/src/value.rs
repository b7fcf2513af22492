//! Axis values and the typed [`Variant`] trait.
//!
//! Every variant axis maps a finite set of values to style tokens. Values are
//! kept in a closed sum type, [`VariantValue`], so string, numeric and boolean
//! axes share one lookup path.
//!
//! Typed enums describe their axis through [`Variant`], which the
//! `#[derive(Variant)]` macro implements for fieldless enums.

use std::fmt;

/// A single value on a variant axis.
///
/// Ordering places booleans first, then integers, then strings. Nothing
/// relies on the ordering beyond determinism.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VariantValue {
    /// Boolean axis such as `interactive` or `disabled`.
    Bool(bool),
    /// Numeric axis such as grid `columns`.
    Int(i64),
    /// Named value such as `primary` or `lg`.
    Str(String),
}

impl VariantValue {
    /// Parses a textual value.
    ///
    /// `true`/`false` become booleans, decimal integers become numbers and
    /// anything else stays a string. Used by the sheet format and the
    /// template layer, where everything arrives as text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tailor_variants::VariantValue;
    ///
    /// assert_eq!(VariantValue::parse("true"), VariantValue::Bool(true));
    /// assert_eq!(VariantValue::parse("12"), VariantValue::Int(12));
    /// assert_eq!(VariantValue::parse("auto-fill"), VariantValue::from("auto-fill"));
    /// ```
    pub fn parse(s: &str) -> Self {
        match s {
            "true" => VariantValue::Bool(true),
            "false" => VariantValue::Bool(false),
            _ => match s.parse::<i64>() {
                Ok(n) => VariantValue::Int(n),
                Err(_) => VariantValue::Str(s.to_string()),
            },
        }
    }

    /// Returns the string payload, if this is a named value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            VariantValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric payload, if this is an integer value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            VariantValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean payload, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            VariantValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for VariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantValue::Bool(b) => write!(f, "{}", b),
            VariantValue::Int(n) => write!(f, "{}", n),
            VariantValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for VariantValue {
    fn from(s: &str) -> Self {
        VariantValue::Str(s.to_string())
    }
}

impl From<String> for VariantValue {
    fn from(s: String) -> Self {
        VariantValue::Str(s)
    }
}

impl From<&String> for VariantValue {
    fn from(s: &String) -> Self {
        VariantValue::Str(s.clone())
    }
}

impl From<bool> for VariantValue {
    fn from(b: bool) -> Self {
        VariantValue::Bool(b)
    }
}

macro_rules! int_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for VariantValue {
                fn from(n: $t) -> Self {
                    VariantValue::Int(n as i64)
                }
            }
        )*
    };
}

int_value!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for VariantValue {
    fn from(n: usize) -> Self {
        VariantValue::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

/// A strongly-typed value on a named axis.
///
/// Implementors are closed enums: [`ALL`](Variant::ALL) lists every value,
/// which lets table construction cover the whole axis and lets assignments
/// be built without stringly-typed keys.
///
/// Usually derived:
///
/// ```rust,ignore
/// use tailor::Variant;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Variant)]
/// #[variant(axis = "size")]
/// enum Size { Sm, Md, Lg }
/// ```
///
/// Manual implementation:
///
/// ```rust
/// use tailor_variants::{Variant, VariantValue};
///
/// #[derive(Debug, Clone, Copy)]
/// enum Tone { Neutral, Danger }
///
/// impl Variant for Tone {
///     const AXIS: &'static str = "tone";
///     const ALL: &'static [Self] = &[Tone::Neutral, Tone::Danger];
///
///     fn value(&self) -> VariantValue {
///         match self {
///             Tone::Neutral => "neutral".into(),
///             Tone::Danger => "danger".into(),
///         }
///     }
/// }
///
/// assert_eq!(Tone::Danger.value(), VariantValue::from("danger"));
/// ```
pub trait Variant: Copy + 'static {
    /// The axis this type assigns.
    const AXIS: &'static str;

    /// Every value of the type, in declaration order.
    const ALL: &'static [Self];

    /// The untyped value stored in tables and assignments.
    fn value(&self) -> VariantValue;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert_eq!(VariantValue::parse("true"), VariantValue::Bool(true));
        assert_eq!(VariantValue::parse("false"), VariantValue::Bool(false));
        // Only the exact lowercase spellings are booleans
        assert_eq!(VariantValue::parse("True"), VariantValue::from("True"));
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(VariantValue::parse("4"), VariantValue::Int(4));
        assert_eq!(VariantValue::parse("-2"), VariantValue::Int(-2));
    }

    #[test]
    fn test_parse_string() {
        assert_eq!(VariantValue::parse("2xl"), VariantValue::from("2xl"));
        assert_eq!(VariantValue::parse(""), VariantValue::from(""));
    }

    #[test]
    fn test_display() {
        assert_eq!(VariantValue::Bool(true).to_string(), "true");
        assert_eq!(VariantValue::Int(12).to_string(), "12");
        assert_eq!(VariantValue::from("auto-fit").to_string(), "auto-fit");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(VariantValue::from("lg").as_str(), Some("lg"));
        assert_eq!(VariantValue::Int(3).as_int(), Some(3));
        assert_eq!(VariantValue::Bool(false).as_bool(), Some(false));
        assert_eq!(VariantValue::Int(3).as_str(), None);
    }

    #[test]
    fn test_from_integers() {
        assert_eq!(VariantValue::from(4u8), VariantValue::Int(4));
        assert_eq!(VariantValue::from(4usize), VariantValue::Int(4));
        assert_eq!(VariantValue::from(-1i32), VariantValue::Int(-1));
    }
}
