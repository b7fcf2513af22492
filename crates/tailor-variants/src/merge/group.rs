//! Conflict groups and token anatomy.

use serde::Deserialize;

/// How a conflict group recognises its tokens.
///
/// Matching is done on the token's base, after modifiers (`md:`, `hover:`),
/// the important marker and a leading negative sign are stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// The base equals this token, e.g. `flex`.
    Exact(String),
    /// The base starts with this prefix and the rest is one of the values,
    /// e.g. `text-` with `sm`, `lg`.
    Values { prefix: String, values: Vec<String> },
    /// The base starts with this prefix and the rest is numeric or an
    /// arbitrary bracketed value, e.g. `border-2`, `z-[5]`.
    Numeric(String),
    /// The base starts with this prefix, e.g. `bg-`.
    Prefix(String),
}

impl Matcher {
    /// Returns the match rank: higher ranks win when several groups match.
    pub(crate) fn rank(&self, base: &str) -> Option<(u8, usize)> {
        match self {
            Matcher::Exact(token) => (base == token).then_some((3, token.len())),
            Matcher::Values { prefix, values } => base
                .strip_prefix(prefix.as_str())
                .filter(|rest| values.iter().any(|v| v == rest))
                .map(|_| (2, prefix.len())),
            Matcher::Numeric(prefix) => base
                .strip_prefix(prefix.as_str())
                .filter(|rest| is_numeric_value(rest))
                .map(|_| (2, prefix.len())),
            Matcher::Prefix(prefix) => base
                .strip_prefix(prefix.as_str())
                .filter(|rest| !rest.is_empty())
                .map(|_| (1, prefix.len())),
        }
    }
}

fn is_numeric_value(rest: &str) -> bool {
    if rest.starts_with('[') && rest.ends_with(']') {
        return rest.len() > 2;
    }
    !rest.is_empty()
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '/')
        && rest.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// A named set of tokens that set the same visual property.
///
/// Within one merge, only the last token of a group survives for each
/// modifier combination. A group can also override other groups: a later
/// `p-4` removes an earlier `px-2` when `p` overrides `px`.
///
/// # Example
///
/// ```rust
/// use tailor_variants::ConflictGroup;
///
/// let padding = ConflictGroup::new("p").prefix("p-").overrides(["px", "py"]);
/// assert_eq!(padding.name(), "p");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictGroup {
    name: String,
    matchers: Vec<Matcher>,
    overrides: Vec<String>,
}

impl ConflictGroup {
    /// Creates an empty group.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            matchers: Vec::new(),
            overrides: Vec::new(),
        }
    }

    /// Adds exact tokens.
    pub fn exact<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.matchers.extend(
            tokens
                .into_iter()
                .map(|t| Matcher::Exact(t.as_ref().to_string())),
        );
        self
    }

    /// Adds a bare prefix.
    pub fn prefix(mut self, prefix: &str) -> Self {
        self.matchers.push(Matcher::Prefix(prefix.to_string()));
        self
    }

    /// Adds a prefix restricted to numeric and bracketed values.
    pub fn numeric(mut self, prefix: &str) -> Self {
        self.matchers.push(Matcher::Numeric(prefix.to_string()));
        self
    }

    /// Adds a prefix restricted to a list of values.
    pub fn values<I, S>(mut self, prefix: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.matchers.push(Matcher::Values {
            prefix: prefix.to_string(),
            values: values.into_iter().map(|v| v.as_ref().to_string()).collect(),
        });
        self
    }

    /// Declares groups that a later token of this group replaces.
    pub fn overrides<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.overrides
            .extend(groups.into_iter().map(|g| g.as_ref().to_string()));
        self
    }

    /// The group name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The matchers in declaration order.
    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    /// Names of groups this group overrides.
    pub fn overridden(&self) -> &[String] {
        &self.overrides
    }

    pub(crate) fn rank(&self, base: &str) -> Option<(u8, usize)> {
        self.matchers.iter().filter_map(|m| m.rank(base)).max()
    }
}

/// Serialized form of a conflict group, as found in the `merge` section of
/// a table sheet.
///
/// ```yaml
/// merge:
///   - name: elevation
///     exact: [shadow]
///     values: { "shadow-": [sm, md, lg] }
///     overrides: [shadow-color]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupDef {
    pub name: String,
    #[serde(default)]
    pub exact: Vec<String>,
    #[serde(default)]
    pub prefix: Vec<String>,
    #[serde(default)]
    pub numeric: Vec<String>,
    #[serde(default)]
    pub values: std::collections::BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub overrides: Vec<String>,
}

impl From<GroupDef> for ConflictGroup {
    fn from(def: GroupDef) -> Self {
        let mut group = ConflictGroup::new(&def.name).exact(def.exact);
        for prefix in &def.prefix {
            group = group.prefix(prefix);
        }
        for prefix in &def.numeric {
            group = group.numeric(prefix);
        }
        for (prefix, values) in def.values {
            group = group.values(&prefix, values);
        }
        group.overrides(def.overrides)
    }
}

/// A token split into its modifier key and base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TokenParts<'a> {
    /// Normalised modifier key: sorted modifiers plus the important marker.
    pub modifiers: String,
    /// The utility itself, without modifiers, `!` or leading `-`.
    pub base: &'a str,
}

/// Splits `md:hover:!-mt-2` into modifiers `hover:md:!` and base `mt-2`.
///
/// Colons inside brackets belong to arbitrary values and do not split.
/// Modifier order is normalised so `hover:md:` and `md:hover:` conflict;
/// arbitrary `[...]` modifiers keep their position since their order can
/// matter.
pub(crate) fn parse_token(token: &str) -> TokenParts<'_> {
    let mut depth = 0usize;
    let mut split_points = Vec::new();
    for (i, c) in token.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => split_points.push(i),
            _ => {}
        }
    }

    let (modifier_part, rest) = match split_points.last() {
        Some(&last) => (&token[..last], &token[last + 1..]),
        None => ("", token),
    };

    let mut modifiers: Vec<&str> = Vec::new();
    if !modifier_part.is_empty() {
        let mut start = 0;
        for &point in &split_points {
            modifiers.push(&modifier_part[start..point]);
            start = point + 1;
        }
    }
    let modifiers = normalise_modifiers(modifiers);

    let (important, rest) = match rest.strip_prefix('!') {
        Some(stripped) => (true, stripped),
        None => match rest.strip_suffix('!') {
            Some(stripped) => (true, stripped),
            None => (false, rest),
        },
    };
    let base = rest.strip_prefix('-').unwrap_or(rest);

    let mut key = modifiers.join(":");
    if !key.is_empty() {
        key.push(':');
    }
    if important {
        key.push('!');
    }

    TokenParts {
        modifiers: key,
        base,
    }
}

fn normalise_modifiers(modifiers: Vec<&str>) -> Vec<&str> {
    let mut result = Vec::with_capacity(modifiers.len());
    let mut run: Vec<&str> = Vec::new();
    for modifier in modifiers {
        if modifier.starts_with('[') {
            run.sort_unstable();
            result.append(&mut run);
            result.push(modifier);
        } else {
            run.push(modifier);
        }
    }
    run.sort_unstable();
    result.append(&mut run);
    result
}
