mod cell;

pub use cell::PatternCell;

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::compile::NameRegistry;
use crate::matcher::{Matches, PatternMatch};

/// A compiled expression: the rendered text, the engine matcher and the
/// registry of group names, all fixed at compile time.
///
/// Cloning is cheap; the engine handle and the registry are shared.
#[derive(Debug, Clone)]
pub struct Pattern {
    rendered: Arc<str>,
    regex: Regex,
    anchored: Regex,
    names: Arc<NameRegistry>,
}

impl Pattern {
    pub(crate) fn from_parts(
        rendered: String,
        regex: Regex,
        anchored: Regex,
        names: NameRegistry,
    ) -> Self {
        Self {
            rendered: rendered.into(),
            regex,
            anchored,
            names: Arc::new(names),
        }
    }

    /// The rendered pattern text.
    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    /// The underlying engine matcher, for callers that want to drive
    /// `regex` directly. Group ordinals agree with [`Pattern::names`].
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn names(&self) -> &NameRegistry {
        &self.names
    }

    pub fn shared_names(&self) -> Arc<NameRegistry> {
        Arc::clone(&self.names)
    }

    pub fn ordinal_of(&self, name: &str) -> Option<usize> {
        self.names.ordinal_of(name)
    }

    pub fn group_count(&self) -> usize {
        self.names.group_count()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Matches only at the start of `text`. `None` when there is no match
    /// there, even if one exists further in.
    pub fn match_prefix<'p, 't>(&'p self, text: &'t str) -> Option<PatternMatch<'p, 't>> {
        self.anchored
            .captures(text)
            .map(|captures| PatternMatch::new(self, captures))
    }

    /// Leftmost match anywhere in `text`.
    pub fn search<'p, 't>(&'p self, text: &'t str) -> Option<PatternMatch<'p, 't>> {
        self.regex
            .captures(text)
            .map(|captures| PatternMatch::new(self, captures))
    }

    /// Every non-overlapping match, left to right.
    pub fn all_matches<'p, 't>(&'p self, text: &'t str) -> Matches<'p, 't> {
        Matches::new(self, text)
    }

    pub fn into_parts(self) -> (Regex, Arc<NameRegistry>) {
        (self.regex, self.names)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}
