//! Build regular expressions out of small, named, composable pieces.
//!
//! Expressions are plain values assembled with the combinators in [`expr`].
//! [`compile()`] renders a tree into `regex` syntax once, keeping track of which
//! ordinal each named group receives, and the resulting [`Pattern`] hands out
//! [`PatternMatch`] values that look captures up by name or ordinal.
//!
//! ```
//! use regex_compose::{compile, concat, exactly, literal, named, shorthand::digit};
//!
//! let phone = concat(
//!     concat(named(exactly(digit(), 3), "area")?, literal("-")),
//!     named(exactly(digit(), 3), "exch")?,
//! );
//! let pattern = compile(&phone)?;
//! let found = pattern.search("call 555-123").expect("should match");
//! assert_eq!(found.get("area")?, Some("555"));
//! assert_eq!(found.get("exch")?, Some("123"));
//! # Ok::<(), regex_compose::PatternError>(())
//! ```

pub mod compile;
pub mod errors;
pub mod expr;
pub mod matcher;
pub mod pattern;

pub use compile::{
    CompileError, CompileFlags, CompileOptions, CompileOptionsBuilder, NameRegistry,
    OptionsError, compile, compile_with,
};
pub use errors::{PatternError, PatternResult};
pub use expr::{
    AnchorKind, CharClass, ConfigError, Expr, all, altern, alternation, anchor, any, at_least,
    capture, char_class, char_class_negated, concat, end, exactly, group, literal, many, named,
    one_or_more, optional, repeat, repeat_lazy, sequence, shorthand, start,
};
pub use matcher::{GroupRef, LookupError, Matches, PatternMatch};
pub use pattern::{Pattern, PatternCell};
