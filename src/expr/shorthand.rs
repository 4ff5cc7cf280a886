//! Named character classes for the common cases. All of them are ASCII
//! classes built from the same [`CharClass`] primitive as user classes.

use super::{CharClass, Expr};

const DIGIT: &[(char, char)] = &[('0', '9')];
const SPACE: &[(char, char)] = &[('\t', '\r'), (' ', ' ')];
const WORD: &[(char, char)] = &[('0', '9'), ('A', 'Z'), ('_', '_'), ('a', 'z')];
const ALPHA: &[(char, char)] = &[('A', 'Z'), ('a', 'z')];
const ALNUM: &[(char, char)] = &[('0', '9'), ('A', 'Z'), ('a', 'z')];
const LOWER: &[(char, char)] = &[('a', 'z')];
const UPPER: &[(char, char)] = &[('A', 'Z')];
const HEX_DIGIT: &[(char, char)] = &[('0', '9'), ('A', 'F'), ('a', 'f')];
const NEWLINE: &[(char, char)] = &[('\n', '\n'), ('\r', '\r')];

fn class(ranges: &[(char, char)], negated: bool) -> Expr {
    Expr::Class(CharClass::from_static(ranges, negated))
}

pub fn digit() -> Expr {
    class(DIGIT, false)
}

pub fn non_digit() -> Expr {
    class(DIGIT, true)
}

/// Tab, line feed, vertical tab, form feed, carriage return and space.
pub fn space() -> Expr {
    class(SPACE, false)
}

pub fn non_space() -> Expr {
    class(SPACE, true)
}

pub fn word() -> Expr {
    class(WORD, false)
}

pub fn non_word() -> Expr {
    class(WORD, true)
}

pub fn alpha() -> Expr {
    class(ALPHA, false)
}

pub fn alnum() -> Expr {
    class(ALNUM, false)
}

pub fn lower() -> Expr {
    class(LOWER, false)
}

pub fn upper() -> Expr {
    class(UPPER, false)
}

pub fn hex_digit() -> Expr {
    class(HEX_DIGIT, false)
}

pub fn newline() -> Expr {
    class(NEWLINE, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(expr: &Expr, c: char) -> bool {
        match expr {
            Expr::Class(class) => class.matches(c),
            other => panic!("expected class, got {other:?}"),
        }
    }

    #[test]
    fn shorthand_membership() {
        assert!(member(&digit(), '7'));
        assert!(!member(&non_digit(), '7'));
        assert!(member(&space(), '\t'));
        assert!(member(&space(), ' '));
        assert!(!member(&space(), 'x'));
        assert!(member(&word(), '_'));
        assert!(!member(&non_word(), 'q'));
        assert!(member(&hex_digit(), 'F'));
        assert!(!member(&hex_digit(), 'g'));
        assert!(member(&upper(), 'Q'));
        assert!(!member(&lower(), 'Q'));
        assert!(member(&alnum(), '3'));
        assert!(!member(&alpha(), '3'));
        assert!(member(&newline(), '\n'));
    }
}
