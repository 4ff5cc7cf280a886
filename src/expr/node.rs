use super::CharClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorKind {
    Start,
    End,
}

/// One unit of pattern structure. Values are never mutated once built;
/// combinators always produce new nodes, so sub-trees can be reused freely.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Literal(String),
    Class(CharClass),
    Any,
    Anchor(AnchorKind),
    Sequence(Vec<Expr>),
    Alternation(Vec<Expr>),
    Repetition(Repetition),
    Group(Group),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Repetition {
    pub(crate) inner: Box<Expr>,
    pub(crate) min: u32,
    pub(crate) max: Option<u32>,
    pub(crate) greedy: bool,
}

impl Repetition {
    pub fn inner(&self) -> &Expr {
        &self.inner
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    /// `None` means unbounded.
    pub fn max(&self) -> Option<u32> {
        self.max
    }

    pub fn is_greedy(&self) -> bool {
        self.greedy
    }
}

/// Grouped sub-expression. The only constructors keep `name` and
/// `capturing` consistent: a named group is always capturing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Group {
    inner: Box<Expr>,
    capturing: bool,
    name: Option<String>,
}

impl Group {
    pub(crate) fn capturing(inner: Expr) -> Self {
        Self {
            inner: Box::new(inner),
            capturing: true,
            name: None,
        }
    }

    pub(crate) fn named(inner: Expr, name: String) -> Self {
        Self {
            inner: Box::new(inner),
            capturing: true,
            name: Some(name),
        }
    }

    pub(crate) fn non_capturing(inner: Expr) -> Self {
        Self {
            inner: Box::new(inner),
            capturing: false,
            name: None,
        }
    }

    pub fn inner(&self) -> &Expr {
        &self.inner
    }

    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Expr {
    pub fn is_single_char_literal(&self) -> bool {
        match self {
            Expr::Literal(text) => {
                let mut chars = text.chars();
                chars.next().is_some() && chars.next().is_none()
            }
            _ => false,
        }
    }

    /// Number of capturing groups anywhere in this tree.
    pub fn capture_count(&self) -> usize {
        match self {
            Expr::Literal(_) | Expr::Class(_) | Expr::Any | Expr::Anchor(_) => 0,
            Expr::Sequence(children) | Expr::Alternation(children) => {
                children.iter().map(Expr::capture_count).sum()
            }
            Expr::Repetition(rep) => rep.inner.capture_count(),
            Expr::Group(group) => usize::from(group.capturing) + group.inner.capture_count(),
        }
    }
}

impl From<CharClass> for Expr {
    fn from(class: CharClass) -> Self {
        Expr::Class(class)
    }
}

impl From<&str> for Expr {
    fn from(text: &str) -> Self {
        Expr::Literal(text.to_string())
    }
}

impl From<char> for Expr {
    fn from(c: char) -> Self {
        Expr::Literal(c.to_string())
    }
}
