//! Style token lists.

use std::fmt;

/// Splits a class string into tokens.
///
/// Any run of whitespace separates tokens; leading and trailing whitespace
/// is ignored, so an empty or blank string yields no tokens.
///
/// # Example
///
/// ```rust
/// use tailor_variants::split_tokens;
///
/// let tokens: Vec<&str> = split_tokens("  px-4\tpy-2 \n").collect();
/// assert_eq!(tokens, vec!["px-4", "py-2"]);
/// ```
pub fn split_tokens(s: &str) -> impl Iterator<Item = &str> {
    s.split_whitespace()
}

/// Anything that can be turned into an ordered list of style tokens.
///
/// Strings are split on whitespace, so `"h-9 px-4"` and `["h-9", "px-4"]`
/// are equivalent.
pub trait IntoTokens {
    /// Converts into owned tokens, preserving order.
    fn into_tokens(self) -> Vec<String>;
}

impl IntoTokens for &str {
    fn into_tokens(self) -> Vec<String> {
        split_tokens(self).map(str::to_string).collect()
    }
}

impl IntoTokens for String {
    fn into_tokens(self) -> Vec<String> {
        self.as_str().into_tokens()
    }
}

impl IntoTokens for &String {
    fn into_tokens(self) -> Vec<String> {
        self.as_str().into_tokens()
    }
}

impl IntoTokens for &[&str] {
    fn into_tokens(self) -> Vec<String> {
        self.iter().flat_map(|s| s.into_tokens()).collect()
    }
}

impl<const N: usize> IntoTokens for [&str; N] {
    fn into_tokens(self) -> Vec<String> {
        self.as_slice().into_tokens()
    }
}

impl IntoTokens for Vec<&str> {
    fn into_tokens(self) -> Vec<String> {
        self.as_slice().into_tokens()
    }
}

impl IntoTokens for Vec<String> {
    fn into_tokens(self) -> Vec<String> {
        self.iter().flat_map(|s| s.into_tokens()).collect()
    }
}

impl IntoTokens for ClassList {
    fn into_tokens(self) -> Vec<String> {
        self.tokens
    }
}

impl IntoTokens for &ClassList {
    fn into_tokens(self) -> Vec<String> {
        self.tokens.clone()
    }
}

impl<T: IntoTokens> IntoTokens for Option<T> {
    fn into_tokens(self) -> Vec<String> {
        self.map(IntoTokens::into_tokens).unwrap_or_default()
    }
}

/// An ordered list of style tokens produced for one render.
///
/// Displays as the space-joined class string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Appends tokens, splitting strings on whitespace.
    pub fn push<T: IntoTokens>(&mut self, tokens: T) {
        self.tokens.extend(tokens.into_tokens());
    }

    /// Appends tokens that are already split.
    pub fn extend_from_slice(&mut self, tokens: &[String]) {
        self.tokens.extend_from_slice(tokens);
    }

    /// Returns the tokens in order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Iterates over the tokens as string slices.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the list holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether the exact token is present.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Returns the space-joined class string.
    pub fn join(&self) -> String {
        self.tokens.join(" ")
    }

    /// Consumes the list and returns the owned tokens.
    pub fn into_vec(self) -> Vec<String> {
        self.tokens
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join())
    }
}

impl From<&str> for ClassList {
    fn from(s: &str) -> Self {
        Self {
            tokens: s.into_tokens(),
        }
    }
}

impl From<Vec<String>> for ClassList {
    fn from(tokens: Vec<String>) -> Self {
        Self {
            tokens: tokens.into_tokens(),
        }
    }
}

impl<'a> FromIterator<&'a str> for ClassList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = ClassList::new();
        for item in iter {
            list.push(item);
        }
        list
    }
}

impl FromIterator<String> for ClassList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut list = ClassList::new();
        for item in iter {
            list.push(item);
        }
        list
    }
}

impl IntoIterator for ClassList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a ClassList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
