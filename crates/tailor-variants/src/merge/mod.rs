//! Last-wins merging of conflicting utility tokens.
//!
//! The resolver only concatenates tokens. Deciding that `px-5` replaces an
//! earlier `px-3` needs knowledge of which utilities set the same property;
//! that knowledge lives here, in one table of [`ConflictGroup`]s, instead of
//! being repeated in every component.
//!
//! # Algorithm
//!
//! Tokens are walked from last to first. Each token is split into a modifier
//! key (`md:`, `hover:`, `!`) and a base, the base is classified into at most
//! one group, and the token is kept unless a later token already claimed the
//! same `(modifiers, group)` slot. Keeping a token also claims the slots of
//! every group it overrides. Tokens outside all groups are only deduplicated
//! against identical tokens. Kept tokens retain their original order.
//!
//! When several groups match a base, exact matches beat value-restricted
//! prefixes, which beat bare prefixes; among equals the longest prefix wins.
//! This is what lets `text-sm` (font size) and `text-red-500` (color)
//! coexist.

mod group;
mod tailwind;

pub use group::{ConflictGroup, GroupDef, Matcher};

use std::collections::HashSet;

use tracing::trace;

use crate::tokens::{ClassList, IntoTokens};
use group::parse_token;

/// Merges token lists so the last token of each conflict group wins.
///
/// # Example
///
/// ```rust
/// use tailor_variants::TokenMerger;
///
/// let merger = TokenMerger::tailwind();
/// let merged = merger.merge("px-2 py-1 bg-red-500 hover:bg-red-600 p-3 bg-blue-500");
/// assert_eq!(merged.to_string(), "hover:bg-red-600 p-3 bg-blue-500");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenMerger {
    groups: Vec<ConflictGroup>,
}

impl TokenMerger {
    /// Creates a merger without groups: only exact duplicates are removed.
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Creates a merger with the built-in utility-class groups.
    pub fn tailwind() -> Self {
        tailwind::DEFAULT_MERGER.clone()
    }

    /// Starts building a merger from scratch.
    pub fn builder() -> TokenMergerBuilder {
        TokenMergerBuilder::default()
    }

    /// Adds a group, replacing any existing group with the same name.
    pub fn add_group(&mut self, group: ConflictGroup) {
        match self.groups.iter_mut().find(|g| g.name() == group.name()) {
            Some(existing) => *existing = group,
            None => self.groups.push(group),
        }
    }

    /// Returns the registered groups.
    pub fn groups(&self) -> &[ConflictGroup] {
        &self.groups
    }

    /// Returns the name of the group a token belongs to, if any.
    ///
    /// ```rust
    /// use tailor_variants::TokenMerger;
    ///
    /// let merger = TokenMerger::tailwind();
    /// assert_eq!(merger.group_of("md:text-lg"), Some("font-size"));
    /// assert_eq!(merger.group_of("text-red-500"), Some("text-color"));
    /// assert_eq!(merger.group_of("my-custom-class"), None);
    /// ```
    pub fn group_of(&self, token: &str) -> Option<&str> {
        let parts = parse_token(token);
        self.classify(parts.base).map(ConflictGroup::name)
    }

    fn classify(&self, base: &str) -> Option<&ConflictGroup> {
        let mut best: Option<((u8, usize), &ConflictGroup)> = None;
        for group in &self.groups {
            if let Some(rank) = group.rank(base) {
                if best.map(|(r, _)| rank > r).unwrap_or(true) {
                    best = Some((rank, group));
                }
            }
        }
        best.map(|(_, group)| group)
    }

    /// Merges tokens, keeping the last token of each conflict slot.
    pub fn merge(&self, tokens: impl IntoTokens) -> ClassList {
        let tokens = tokens.into_tokens();
        let mut claimed: HashSet<(String, String)> = HashSet::new();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());

        for token in tokens.iter().rev() {
            if !seen.insert(token.as_str()) {
                continue;
            }
            let parts = parse_token(token);
            let Some(group) = self.classify(parts.base) else {
                kept.push(token);
                continue;
            };
            let slot = (parts.modifiers.clone(), group.name().to_string());
            if claimed.contains(&slot) {
                trace!(token = token.as_str(), group = group.name(), "dropped by later token");
                continue;
            }
            claimed.insert(slot);
            for overridden in group.overridden() {
                claimed.insert((parts.modifiers.clone(), overridden.clone()));
            }
            kept.push(token);
        }

        kept.into_iter().rev().collect()
    }
}

/// Builder for [`TokenMerger`].
///
/// # Example
///
/// ```rust
/// use tailor_variants::{ConflictGroup, TokenMerger};
///
/// let merger = TokenMerger::builder()
///     .group(ConflictGroup::new("tone").prefix("tone-"))
///     .build();
/// assert_eq!(merger.merge("tone-a x tone-b").to_string(), "x tone-b");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenMergerBuilder {
    merger: TokenMerger,
}

impl TokenMergerBuilder {
    /// Starts from the built-in utility-class groups instead of nothing.
    pub fn tailwind(mut self) -> Self {
        for group in TokenMerger::tailwind().groups {
            self.merger.add_group(group);
        }
        self
    }

    /// Adds a group, replacing a group of the same name.
    pub fn group(mut self, group: ConflictGroup) -> Self {
        self.merger.add_group(group);
        self
    }

    /// Returns the merger.
    pub fn build(self) -> TokenMerger {
        self.merger
    }
}
