use regex::escape;

use super::{CompileResult, NameRegistry};
use crate::expr::{AnchorKind, CharClass, Expr, Group, Repetition};

/// Output of a single render pass: the pattern text and the registry built
/// while walking the same tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub names: NameRegistry,
}

/// Renders `expr` into `regex` syntax.
///
/// Grouping follows the engine's precedence (repetition, then concatenation,
/// then alternation): `(?:...)` is inserted only where leaving it out would
/// change how the engine parses the text.
#[tracing::instrument(level = "trace", skip_all)]
pub fn render(expr: &Expr) -> CompileResult<Rendered> {
    let mut renderer = Renderer {
        out: String::new(),
        names: NameRegistry::new(),
    };
    renderer.node(expr)?;
    Ok(Rendered {
        text: renderer.out,
        names: renderer.names,
    })
}

struct Renderer {
    out: String,
    names: NameRegistry,
}

impl Renderer {
    fn node(&mut self, expr: &Expr) -> CompileResult<()> {
        match expr {
            Expr::Literal(text) => self.out.push_str(&escape(text)),
            Expr::Class(class) => self.class(class),
            Expr::Any => self.out.push('.'),
            Expr::Anchor(AnchorKind::Start) => self.out.push('^'),
            Expr::Anchor(AnchorKind::End) => self.out.push('$'),
            Expr::Sequence(children) => {
                for child in children {
                    if matches!(child, Expr::Alternation(_)) {
                        self.wrapped(child)?;
                    } else {
                        self.node(child)?;
                    }
                }
            }
            Expr::Alternation(children) => {
                for (idx, child) in children.iter().enumerate() {
                    if idx > 0 {
                        self.out.push('|');
                    }
                    self.node(child)?;
                }
            }
            Expr::Repetition(rep) => self.repetition(rep)?,
            Expr::Group(group) => self.group(group)?,
        }
        Ok(())
    }

    fn wrapped(&mut self, expr: &Expr) -> CompileResult<()> {
        self.out.push_str("(?:");
        self.node(expr)?;
        self.out.push(')');
        Ok(())
    }

    fn repetition(&mut self, rep: &Repetition) -> CompileResult<()> {
        if repetition_target_needs_group(rep.inner()) {
            self.wrapped(rep.inner())?;
        } else {
            self.node(rep.inner())?;
        }

        match rep.max() {
            Some(max) if max == rep.min() => {
                self.out.push_str(&format!("{{{}}}", rep.min()));
            }
            Some(max) => self.out.push_str(&format!("{{{},{}}}", rep.min(), max)),
            None => self.out.push_str(&format!("{{{},}}", rep.min())),
        }

        if !rep.is_greedy() {
            self.out.push('?');
        }
        Ok(())
    }

    fn group(&mut self, group: &Group) -> CompileResult<()> {
        if !group.is_capturing() {
            return self.wrapped(group.inner());
        }

        // Ordinal is taken when the group opens, as the engine counts it.
        self.names.open_group(group.name())?;
        match group.name() {
            Some(name) => {
                self.out.push_str("(?P<");
                self.out.push_str(name);
                self.out.push('>');
            }
            None => self.out.push('('),
        }
        self.node(group.inner())?;
        self.out.push(')');
        Ok(())
    }

    fn class(&mut self, class: &CharClass) {
        self.out.push('[');
        if class.is_negated() {
            self.out.push('^');
        }
        for range in class.ranges() {
            self.class_char(range.start());
            if !range.is_single() {
                self.out.push('-');
                self.class_char(range.end());
            }
        }
        self.out.push(']');
    }

    fn class_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.out.push_str(&escape(c.encode_utf8(&mut buf)));
    }
}

/// Whether a repetition operand must be grouped to stay a single atom.
/// Nested repetitions are grouped as well so the outer bound and any lazy
/// marker attach to the inner repetition as a whole.
fn repetition_target_needs_group(inner: &Expr) -> bool {
    match inner {
        Expr::Literal(_) => !inner.is_single_char_literal(),
        Expr::Sequence(_) | Expr::Alternation(_) | Expr::Repetition(_) => true,
        Expr::Class(_) | Expr::Any | Expr::Anchor(_) | Expr::Group(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{altern, capture, char_class, concat, group, literal, many, named, optional};

    fn text(expr: &Expr) -> String {
        render(expr).expect("render should succeed").text
    }

    #[test]
    fn literals_are_escaped() {
        assert_eq!(text(&literal("a.b*c")), r"a\.b\*c");
        assert_eq!(text(&literal("(x)")), r"\(x\)");
    }

    #[test]
    fn class_members_are_escaped() {
        let class = char_class("\\]\\-^a-z").expect("class should parse");
        assert_eq!(text(&class), r"[\]\-\^a-z]");
    }

    #[test]
    fn braces_are_always_explicit() {
        assert_eq!(text(&many("a")), "a{0,}");
        assert_eq!(text(&optional("a")), "a{0,1}");
        assert_eq!(
            text(&crate::expr::repeat("a", 3, Some(3)).unwrap()),
            "a{3}"
        );
        assert_eq!(text(&many("a").lazy()), "a{0,}?");
    }

    #[test]
    fn alternation_inside_sequence_is_grouped() {
        let expr = concat(altern("a", "b"), "c");
        assert_eq!(text(&expr), "(?:a|b)c");
    }

    #[test]
    fn groups_are_not_double_wrapped() {
        assert_eq!(text(&group(altern("a", "b"))), "(?:a|b)");
        assert_eq!(text(&capture(altern("a", "b"))), "(a|b)");
        assert_eq!(text(&many(capture(concat("a", "b")))), "(ab){0,}");
    }

    #[test]
    fn registry_is_built_in_render_order() {
        let expr = concat(
            capture(named("x", "outer").unwrap()),
            named(capture("y"), "second").unwrap(),
        );
        let rendered = render(&expr).expect("render should succeed");
        assert_eq!(rendered.text, "((?P<outer>x))(?P<second>(y))");
        assert_eq!(rendered.names.ordinal_of("outer"), Some(2));
        assert_eq!(rendered.names.ordinal_of("second"), Some(3));
        assert_eq!(rendered.names.group_count(), 4);
    }
}
