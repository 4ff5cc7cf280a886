use std::ops::Range;

use regex::Captures;

use super::{LookupError, LookupResult};
use crate::pattern::Pattern;

/// Reference to a capture group, by name or by ordinal. Ordinal 0 is the
/// whole match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupRef<'a> {
    Name(&'a str),
    Ordinal(usize),
}

impl<'a> From<&'a str> for GroupRef<'a> {
    fn from(name: &'a str) -> Self {
        GroupRef::Name(name)
    }
}

impl<'a> From<&'a String> for GroupRef<'a> {
    fn from(name: &'a String) -> Self {
        GroupRef::Name(name.as_str())
    }
}

impl From<usize> for GroupRef<'_> {
    fn from(ordinal: usize) -> Self {
        GroupRef::Ordinal(ordinal)
    }
}

/// One successful match. Borrows the pattern for name lookups and the
/// searched text for the captured slices.
#[derive(Debug)]
pub struct PatternMatch<'p, 't> {
    pattern: &'p Pattern,
    captures: Captures<'t>,
}

impl<'p, 't> PatternMatch<'p, 't> {
    pub(crate) fn new(pattern: &'p Pattern, captures: Captures<'t>) -> Self {
        Self { pattern, captures }
    }

    pub fn pattern(&self) -> &'p Pattern {
        self.pattern
    }

    /// Text captured by a group. `Ok(None)` means the group did not take part
    /// in the match; a group that matched nothing yields `Ok(Some(""))`.
    pub fn get<'k>(&self, key: impl Into<GroupRef<'k>>) -> LookupResult<Option<&'t str>> {
        let ordinal = self.resolve(key.into())?;
        Ok(self.captures.get(ordinal).map(|m| m.as_str()))
    }

    /// Byte offsets of a group within the searched text.
    pub fn range_for<'k>(
        &self,
        key: impl Into<GroupRef<'k>>,
    ) -> LookupResult<Option<Range<usize>>> {
        let ordinal = self.resolve(key.into())?;
        Ok(self.captures.get(ordinal).map(|m| m.range()))
    }

    pub fn full_text(&self) -> &'t str {
        self.captures.get(0).map_or("", |m| m.as_str())
    }

    pub fn range(&self) -> Range<usize> {
        self.captures.get(0).map_or(0..0, |m| m.range())
    }

    pub fn start(&self) -> usize {
        self.range().start
    }

    pub fn end(&self) -> usize {
        self.range().end
    }

    /// Named groups in pattern order with their captured text.
    pub fn named(&self) -> impl Iterator<Item = (&'p str, Option<&'t str>)> + '_ {
        let pattern: &'p Pattern = self.pattern;
        pattern.names().iter().map(move |(name, ordinal)| {
            (name, self.captures.get(ordinal).map(|m| m.as_str()))
        })
    }

    /// Every capturing group from ordinal 1 upward.
    pub fn groups(&self) -> impl Iterator<Item = Option<&'t str>> + '_ {
        (1..self.captures.len())
            .map(move |ordinal| self.captures.get(ordinal).map(|m| m.as_str()))
    }

    fn resolve(&self, key: GroupRef<'_>) -> LookupResult<usize> {
        match key {
            GroupRef::Name(name) => {
                self.pattern
                    .ordinal_of(name)
                    .ok_or_else(|| LookupError::UnknownName {
                        name: name.to_string(),
                        pattern: self.pattern.as_str().to_string(),
                    })
            }
            GroupRef::Ordinal(ordinal) if ordinal < self.captures.len() => Ok(ordinal),
            GroupRef::Ordinal(ordinal) => Err(LookupError::OrdinalOutOfRange {
                ordinal,
                group_count: self.captures.len() - 1,
            }),
        }
    }
}
