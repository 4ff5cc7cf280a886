use super::node::{AnchorKind, Expr, Group, Repetition};
use super::{CharClass, ConfigError, ConfigResult};

pub fn literal(text: impl Into<String>) -> Expr {
    Expr::Literal(text.into())
}

pub fn char_class(spec: &str) -> ConfigResult<Expr> {
    CharClass::parse(spec).map(Expr::Class)
}

pub fn char_class_negated(spec: &str) -> ConfigResult<Expr> {
    CharClass::parse(spec).map(|class| Expr::Class(class.negate()))
}

pub fn any() -> Expr {
    Expr::Any
}

pub fn anchor(kind: AnchorKind) -> Expr {
    Expr::Anchor(kind)
}

pub fn start() -> Expr {
    Expr::Anchor(AnchorKind::Start)
}

pub fn end() -> Expr {
    Expr::Anchor(AnchorKind::End)
}

/// Concatenates two expressions, splicing either side in when it is already a
/// sequence so that the result is never a sequence of sequences.
pub fn concat(a: impl Into<Expr>, b: impl Into<Expr>) -> Expr {
    let mut children = Vec::new();
    push_sequence_child(&mut children, a.into());
    push_sequence_child(&mut children, b.into());
    Expr::Sequence(children)
}

pub fn sequence<I>(items: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    let mut children = Vec::new();
    for item in items {
        push_sequence_child(&mut children, item.into());
    }
    if children.len() == 1
        && let Some(only) = children.pop()
    {
        return only;
    }
    Expr::Sequence(children)
}

/// Alternative between two expressions; the left side has priority.
pub fn altern(a: impl Into<Expr>, b: impl Into<Expr>) -> Expr {
    let mut children = Vec::new();
    push_alternation_child(&mut children, a.into());
    push_alternation_child(&mut children, b.into());
    Expr::Alternation(children)
}

pub fn alternation<I>(items: I) -> ConfigResult<Expr>
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    let mut children = Vec::new();
    for item in items {
        push_alternation_child(&mut children, item.into());
    }
    match children.len() {
        0 => Err(ConfigError::EmptyAlternation),
        1 => Ok(children.remove(0)),
        _ => Ok(Expr::Alternation(children)),
    }
}

fn push_sequence_child(children: &mut Vec<Expr>, expr: Expr) {
    match expr {
        Expr::Sequence(inner) => children.extend(inner),
        other => children.push(other),
    }
}

fn push_alternation_child(children: &mut Vec<Expr>, expr: Expr) {
    match expr {
        Expr::Alternation(inner) => children.extend(inner),
        other => children.push(other),
    }
}

pub fn repeat(e: impl Into<Expr>, min: u32, max: Option<u32>) -> ConfigResult<Expr> {
    build_repetition(e.into(), min, max, true)
}

pub fn repeat_lazy(e: impl Into<Expr>, min: u32, max: Option<u32>) -> ConfigResult<Expr> {
    build_repetition(e.into(), min, max, false)
}

fn build_repetition(inner: Expr, min: u32, max: Option<u32>, greedy: bool) -> ConfigResult<Expr> {
    if let Some(max) = max
        && min > max
    {
        return Err(ConfigError::RepeatBounds { min, max });
    }
    Ok(Expr::Repetition(Repetition {
        inner: Box::new(inner),
        min,
        max,
        greedy,
    }))
}

// The convenience forms below have statically valid bounds.
fn repetition(inner: Expr, min: u32, max: Option<u32>) -> Expr {
    Expr::Repetition(Repetition {
        inner: Box::new(inner),
        min,
        max,
        greedy: true,
    })
}

pub fn many(e: impl Into<Expr>) -> Expr {
    repetition(e.into(), 0, None)
}

pub fn one_or_more(e: impl Into<Expr>) -> Expr {
    repetition(e.into(), 1, None)
}

pub fn optional(e: impl Into<Expr>) -> Expr {
    repetition(e.into(), 0, Some(1))
}

pub fn exactly(e: impl Into<Expr>, n: u32) -> Expr {
    repetition(e.into(), n, Some(n))
}

pub fn at_least(e: impl Into<Expr>, n: u32) -> Expr {
    repetition(e.into(), n, None)
}

pub fn capture(e: impl Into<Expr>) -> Expr {
    Expr::Group(Group::capturing(e.into()))
}

pub fn named(e: impl Into<Expr>, name: &str) -> ConfigResult<Expr> {
    validate_group_name(name)?;
    Ok(Expr::Group(Group::named(e.into(), name.to_string())))
}

pub fn group(e: impl Into<Expr>) -> Expr {
    Expr::Group(Group::non_capturing(e.into()))
}

/// `e` anchored at both ends of the input.
pub fn all(e: impl Into<Expr>) -> Expr {
    sequence([start(), e.into(), end()])
}

fn validate_group_name(name: &str) -> ConfigResult<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidGroupName {
            name: name.to_string(),
        })
    }
}

impl Expr {
    pub fn then(self, other: impl Into<Expr>) -> Expr {
        concat(self, other)
    }

    pub fn or(self, other: impl Into<Expr>) -> Expr {
        altern(self, other)
    }

    pub fn repeat(self, min: u32, max: Option<u32>) -> ConfigResult<Expr> {
        repeat(self, min, max)
    }

    pub fn many(self) -> Expr {
        many(self)
    }

    pub fn one_or_more(self) -> Expr {
        one_or_more(self)
    }

    pub fn optional(self) -> Expr {
        optional(self)
    }

    pub fn capture(self) -> Expr {
        capture(self)
    }

    pub fn named(self, name: &str) -> ConfigResult<Expr> {
        named(self, name)
    }

    pub fn group(self) -> Expr {
        group(self)
    }

    /// Makes a repetition prefer the fewest iterations. Other nodes are
    /// returned unchanged.
    pub fn lazy(self) -> Expr {
        match self {
            Expr::Repetition(rep) => Expr::Repetition(Repetition {
                greedy: false,
                ..rep
            }),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concat_flattens_both_sides() {
        let left = concat("a", "b");
        let right = concat("c", "d");
        match concat(left, right) {
            Expr::Sequence(children) => assert_eq!(children.len(), 4),
            other => panic!("expected sequence, got {other:?}"),
        }
    }

    #[test]
    fn concat_nesting_order_does_not_change_tree() {
        let left_nested = concat(concat("a", "b"), "c");
        let right_nested = concat("a", concat("b", "c"));
        assert_eq!(left_nested, right_nested);
    }

    #[test]
    fn altern_flattens_but_keeps_priority_order() {
        let tree = altern(altern("a", "b"), "c");
        assert_eq!(
            tree,
            Expr::Alternation(vec![literal("a"), literal("b"), literal("c")])
        );
    }

    #[test]
    fn altern_does_not_splice_sequences() {
        let tree = altern(concat("a", "b"), "c");
        match tree {
            Expr::Alternation(children) => {
                assert!(matches!(children[0], Expr::Sequence(_)));
                assert_eq!(children.len(), 2);
            }
            other => panic!("expected alternation, got {other:?}"),
        }
    }

    #[test]
    fn repeat_rejects_inverted_bounds() {
        let err = repeat("a", 3, Some(2)).expect_err("min > max should fail");
        assert_eq!(err, ConfigError::RepeatBounds { min: 3, max: 2 });
        assert!(repeat("a", 2, Some(2)).is_ok());
        assert!(repeat("a", 5, None).is_ok());
    }

    #[test]
    fn named_validates_group_names() {
        assert!(named("a", "area_code").is_ok());
        assert!(named("a", "_x1").is_ok());
        for bad in ["", "1st", "has-dash", "sp ace", "ünï"] {
            assert!(
                matches!(named("a", bad), Err(ConfigError::InvalidGroupName { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn sequence_and_alternation_collapse_single_items() {
        assert_eq!(sequence(["x"]), literal("x"));
        assert_eq!(alternation(["x"]), Ok(literal("x")));
        assert_eq!(
            alternation(Vec::<Expr>::new()),
            Err(ConfigError::EmptyAlternation)
        );
    }

    #[test]
    fn all_wraps_in_anchors() {
        assert_eq!(
            all(concat("a", "b")),
            Expr::Sequence(vec![start(), literal("a"), literal("b"), end()])
        );
    }

    #[test]
    fn lazy_only_affects_repetitions() {
        match many("a").lazy() {
            Expr::Repetition(rep) => assert!(!rep.is_greedy()),
            other => panic!("expected repetition, got {other:?}"),
        }
        assert_eq!(literal("a").lazy(), literal("a"));
    }

    #[test]
    fn combinators_do_not_mutate_shared_subtrees() {
        let shared = concat("a", "b");
        let extended = concat(shared.clone(), "c");
        assert_eq!(shared, Expr::Sequence(vec![literal("a"), literal("b")]));
        assert_ne!(shared, extended);
    }
}
