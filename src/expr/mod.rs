mod build;
mod class;
mod error;
mod node;
pub mod shorthand;

pub use build::{
    all, altern, alternation, anchor, any, at_least, capture, char_class, char_class_negated,
    concat, end, exactly, group, literal, many, named, one_or_more, optional, repeat, repeat_lazy,
    sequence, start,
};
pub use class::{CharClass, ClassRange};
pub use error::{ConfigError, ConfigResult};
pub use node::{AnchorKind, Expr, Group, Repetition};
