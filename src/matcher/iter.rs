use std::iter::FusedIterator;

use super::PatternMatch;
use crate::pattern::Pattern;

/// Lazy scan for non-overlapping matches.
///
/// After each match the scan resumes at its end, or one character past it
/// when the match was empty, so the iterator always makes progress and ends
/// once the scan position passes the end of the text. Cloning gives an
/// independent scan from the same position.
#[derive(Debug, Clone)]
pub struct Matches<'p, 't> {
    pattern: &'p Pattern,
    text: &'t str,
    pos: usize,
}

impl<'p, 't> Matches<'p, 't> {
    pub(crate) fn new(pattern: &'p Pattern, text: &'t str) -> Self {
        Self {
            pattern,
            text,
            pos: 0,
        }
    }

    fn finish(&mut self) {
        self.pos = self.text.len() + 1;
    }
}

impl<'p, 't> Iterator for Matches<'p, 't> {
    type Item = PatternMatch<'p, 't>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos > self.text.len() {
            return None;
        }

        let Some(captures) = self.pattern.regex().captures_at(self.text, self.pos) else {
            self.finish();
            return None;
        };
        let Some(whole) = captures.get(0) else {
            self.finish();
            return None;
        };

        self.pos = if whole.is_empty() {
            step_past(self.text, whole.end())
        } else {
            whole.end()
        };

        Some(PatternMatch::new(self.pattern, captures))
    }
}

impl FusedIterator for Matches<'_, '_> {}

// Index of the character after `at`, or one past the end when `at` is the end.
fn step_past(text: &str, at: usize) -> usize {
    match text[at..].chars().next() {
        Some(c) => at + c.len_utf8(),
        None => text.len() + 1,
    }
}
