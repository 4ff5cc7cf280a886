use smallvec::SmallVec;

use super::{ConfigError, ConfigResult};

/// Inclusive range of characters inside a bracketed class. A single member is
/// a range whose bounds are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassRange {
    start: char,
    end: char,
}

impl ClassRange {
    pub fn single(c: char) -> Self {
        Self { start: c, end: c }
    }

    pub fn start(&self) -> char {
        self.start
    }

    pub fn end(&self) -> char {
        self.end
    }

    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, c: char) -> bool {
        self.start <= c && c <= self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharClass {
    ranges: SmallVec<[ClassRange; 4]>,
    negated: bool,
}

impl CharClass {
    /// Parses a class body such as `a-z0-9_`.
    ///
    /// An item is either one character or `x-y`. A `-` in first or last
    /// position is taken literally and `\` escapes the following character.
    pub fn parse(spec: &str) -> ConfigResult<Self> {
        let tokens = tokenize(spec)?;
        let mut ranges = SmallVec::new();
        let mut idx = 0usize;

        while idx < tokens.len() {
            let (start, _) = tokens[idx];

            if idx + 2 < tokens.len() && tokens[idx + 1] == ('-', false) {
                let (end, _) = tokens[idx + 2];
                if end < start {
                    return Err(ConfigError::ReversedRange {
                        spec: spec.to_string(),
                        start,
                        end,
                    });
                }
                ranges.push(ClassRange { start, end });
                idx += 3;
                continue;
            }

            ranges.push(ClassRange::single(start));
            idx += 1;
        }

        if ranges.is_empty() {
            return Err(ConfigError::EmptyClass {
                spec: spec.to_string(),
            });
        }

        Ok(Self {
            ranges,
            negated: false,
        })
    }

    pub fn from_ranges<I>(ranges: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut out: SmallVec<[ClassRange; 4]> = SmallVec::new();
        for (start, end) in ranges {
            if end < start {
                return Err(ConfigError::ReversedRange {
                    spec: format!("{start}-{end}"),
                    start,
                    end,
                });
            }
            out.push(ClassRange { start, end });
        }

        if out.is_empty() {
            return Err(ConfigError::EmptyClass {
                spec: String::new(),
            });
        }

        Ok(Self {
            ranges: out,
            negated: false,
        })
    }

    // Only for the fixed tables in `shorthand`, whose bounds are known to be ordered.
    pub(crate) fn from_static(ranges: &[(char, char)], negated: bool) -> Self {
        debug_assert!(!ranges.is_empty());
        debug_assert!(ranges.iter().all(|(s, e)| s <= e));
        Self {
            ranges: ranges
                .iter()
                .map(|&(start, end)| ClassRange { start, end })
                .collect(),
            negated,
        }
    }

    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    pub fn ranges(&self) -> &[ClassRange] {
        &self.ranges
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Membership test following the class semantics, without the engine.
    pub fn matches(&self, c: char) -> bool {
        self.ranges.iter().any(|r| r.contains(c)) != self.negated
    }
}

fn tokenize(spec: &str) -> ConfigResult<Vec<(char, bool)>> {
    let mut tokens = Vec::with_capacity(spec.len());
    let mut chars = spec.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(escaped) => tokens.push((escaped, true)),
                None => {
                    return Err(ConfigError::DanglingEscape {
                        spec: spec.to_string(),
                    });
                }
            }
        } else {
            tokens.push((c, false));
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(class: &CharClass) -> Vec<(char, char)> {
        class.ranges().iter().map(|r| (r.start(), r.end())).collect()
    }

    #[test]
    fn parses_ranges_and_singles() {
        let class = CharClass::parse("a-z0-9_").expect("class should parse");
        assert_eq!(bounds(&class), vec![('a', 'z'), ('0', '9'), ('_', '_')]);
        assert!(!class.is_negated());
    }

    #[test]
    fn leading_and_trailing_dash_are_literal() {
        let class = CharClass::parse("-a-c-").expect("class should parse");
        assert_eq!(bounds(&class), vec![('-', '-'), ('a', 'c'), ('-', '-')]);
    }

    #[test]
    fn escaped_dash_is_not_a_range_operator() {
        let class = CharClass::parse("a\\-z").expect("class should parse");
        assert_eq!(bounds(&class), vec![('a', 'a'), ('-', '-'), ('z', 'z')]);
    }

    #[test]
    fn rejects_reversed_range() {
        let err = CharClass::parse("z-a").expect_err("reversed range should fail");
        assert_eq!(
            err,
            ConfigError::ReversedRange {
                spec: "z-a".to_string(),
                start: 'z',
                end: 'a',
            }
        );
    }

    #[test]
    fn rejects_empty_and_dangling_escape() {
        assert!(matches!(
            CharClass::parse(""),
            Err(ConfigError::EmptyClass { .. })
        ));
        assert!(matches!(
            CharClass::parse("ab\\"),
            Err(ConfigError::DanglingEscape { .. })
        ));
        assert!(matches!(
            CharClass::from_ranges(std::iter::empty::<(char, char)>()),
            Err(ConfigError::EmptyClass { .. })
        ));
    }

    #[test]
    fn negation_flips_membership() {
        let class = CharClass::parse("0-9").expect("class should parse");
        assert!(class.matches('5'));
        let negated = class.negate();
        assert!(negated.is_negated());
        assert!(!negated.matches('5'));
        assert!(negated.matches('x'));
    }
}
