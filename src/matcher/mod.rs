mod error;
mod iter;
mod result;

pub use error::{LookupError, LookupResult};
pub use iter::Matches;
pub use result::{GroupRef, PatternMatch};

use crate::pattern::Pattern;

/// Start-anchored match; see [`Pattern::match_prefix`].
pub fn match_prefix<'p, 't>(
    pattern: &'p Pattern,
    text: &'t str,
) -> Option<PatternMatch<'p, 't>> {
    pattern.match_prefix(text)
}

pub fn search<'p, 't>(pattern: &'p Pattern, text: &'t str) -> Option<PatternMatch<'p, 't>> {
    pattern.search(text)
}

pub fn all_matches<'p, 't>(pattern: &'p Pattern, text: &'t str) -> Matches<'p, 't> {
    pattern.all_matches(text)
}
