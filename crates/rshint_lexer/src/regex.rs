//! Regular expression literals.
//!
//! The pattern is not compiled, it is only checked for constructs which are easy to get wrong,
//! such as unescaped metacharacters, bad quantifier bounds or runs of spaces.

use crate::{
    identifier::is_id_part,
    source::{is_line_terminator, is_unsafe},
    Issue, Lexer, Position, RegexFlags, Token, TokenFlags, TokenKind, TokenValue,
};
use smol_str::SmolStr;

// Letters which may follow a backslash
const ESCAPABLE_LETTERS: &str = "bBcdDfknpPrsStuvwWx";

fn found(chr: Option<char>) -> SmolStr {
    match chr {
        Some(chr) if !is_line_terminator(chr) => chr.to_string().into(),
        _ => SmolStr::new(""),
    }
}

impl Lexer<'_> {
    pub(crate) fn read_regex(&mut self, start: usize, position: Position) -> Token {
        self.bump();
        if self.source.peek() == Some('=') {
            self.report(Issue::RegexConfusedWithAssign, position);
        }

        let body_start = self.source.offset();
        let mut depth = 0_usize;
        let mut quantifiable = false;

        let closed = loop {
            let chr = match self.source.peek() {
                Some(chr) if !is_line_terminator(chr) => chr,
                _ => break false,
            };
            let at = self.source.position();

            match chr {
                '/' => break true,
                '\\' => {
                    self.read_regex_escape();
                    quantifiable = true;
                }
                '(' => {
                    self.bump();
                    depth += 1;
                    self.read_group_kind();
                    quantifiable = false;
                }
                '|' => {
                    self.bump();
                    quantifiable = false;
                }
                ')' => {
                    self.bump();
                    if depth == 0 {
                        self.report(Issue::Unescaped(')'), at);
                    } else {
                        depth -= 1;
                    }
                    quantifiable = true;
                }
                ' ' => {
                    let spaces = self.eat_while(|c| c == ' ');
                    if spaces > 1 {
                        self.report(Issue::RegexSpaces(spaces), at);
                    }
                    quantifiable = true;
                }
                '[' => {
                    self.read_regex_class();
                    quantifiable = true;
                }
                ']' | '}' | '?' | '*' | '+' | '{' => {
                    self.bump();
                    self.report(Issue::Unescaped(chr), at);
                    quantifiable = false;
                }
                '^' => {
                    self.bump();
                    if quantifiable {
                        self.report(Issue::Unescaped('^'), at);
                    }
                    quantifiable = false;
                }
                _ => {
                    if is_unsafe(chr) {
                        self.report(Issue::RegexControlCharacter, at);
                    }
                    self.bump();
                    quantifiable = true;
                }
            }

            if quantifiable {
                self.read_quantifier();
            }
        };

        let pattern = self.source.slice(body_start, self.source.offset());
        if !closed {
            self.report(Issue::UnclosedRegex, position);
            let value = TokenValue::Regex {
                pattern: pattern.into(),
                flags: RegexFlags::empty(),
            };
            let flags = TokenFlags::UNCLOSED | TokenFlags::MALFORMED;
            return self.token(TokenKind::RegExpLiteral, start, position, value, flags);
        }

        let closing = self.source.position();
        self.bump();
        if depth > 0 {
            self.report(Issue::UnterminatedGroups(depth), closing);
        }

        let regex_flags = self.read_regex_flags();
        if matches!(self.source.peek(), Some('/') | Some('*')) {
            self.report(Issue::ConfusingRegex, position);
        }

        let value = TokenValue::Regex {
            pattern: pattern.into(),
            flags: regex_flags,
        };
        self.token(
            TokenKind::RegExpLiteral,
            start,
            position,
            value,
            TokenFlags::empty(),
        )
    }

    fn read_regex_flags(&mut self) -> RegexFlags {
        let mut flags = RegexFlags::empty();
        while let Some(chr) = self.source.peek() {
            if !is_id_part(chr) {
                break;
            }
            let at = self.source.position();
            self.bump();

            match RegexFlags::from_char(chr) {
                Some(flag) if !flags.contains(flag) => flags |= flag,
                _ => self.report(Issue::InvalidRegexFlag(chr), at),
            }
        }
        flags
    }

    // Check the char after `(`, a `?` must introduce a known group kind
    fn read_group_kind(&mut self) {
        if self.source.peek() != Some('?') {
            return;
        }
        self.bump();

        match self.source.peek() {
            Some(':') | Some('=') | Some('!') => {
                self.bump();
            }
            Some('<') => {
                self.bump();
                if matches!(self.source.peek(), Some('=') | Some('!')) {
                    self.bump();
                }
            }
            other => {
                let at = self.source.position();
                self.report(
                    Issue::Expected {
                        expected: ':',
                        found: found(other),
                    },
                    at,
                );
            }
        }
    }

    /// Read an escape in a pattern and return the escaped char.
    fn read_regex_escape(&mut self) -> Option<char> {
        self.bump();
        let chr = match self.source.peek() {
            Some(chr) if !is_line_terminator(chr) => chr,
            _ => return None,
        };

        let at = self.source.position();
        if is_unsafe(chr) {
            self.report(Issue::RegexControlCharacter, at);
        } else if chr == '<' || (chr.is_ascii_alphabetic() && !ESCAPABLE_LETTERS.contains(chr)) {
            self.report(Issue::RegexUnexpectedEscape(chr), at);
        }
        self.bump();
        Some(chr)
    }

    fn read_quantifier(&mut self) {
        match self.source.peek() {
            Some('?') | Some('+') | Some('*') => {
                self.bump();
                if self.source.peek() == Some('?') {
                    self.bump();
                }
            }
            Some('{') => self.read_quantifier_bounds(),
            _ => {}
        }
    }

    fn read_quantifier_bounds(&mut self) {
        let open = self.source.position();
        self.bump();

        match self.source.peek() {
            Some(chr) if chr.is_ascii_digit() => {}
            other => {
                let at = self.source.position();
                self.report(Issue::ExpectedNumber(found(other)), at);
                return;
            }
        }

        let low = self.read_bound();
        let mut high = Some(low);
        if self.source.peek() == Some(',') {
            self.bump();
            high = match self.source.peek() {
                Some(chr) if chr.is_ascii_digit() => Some(self.read_bound()),
                _ => None,
            };
        }

        if self.source.peek() == Some('}') {
            self.bump();
        } else {
            let at = self.source.position();
            let other = self.source.peek();
            self.report(
                Issue::Expected {
                    expected: '}',
                    found: found(other),
                },
                at,
            );
            self.skip_to_quantifier_end();
        }

        if self.source.peek() == Some('?') {
            self.bump();
        }
        if let Some(high) = high {
            if low > high {
                self.report(Issue::QuantifierBounds { low, high }, open);
            }
        }
    }

    fn read_bound(&mut self) -> u64 {
        let mut value = 0_u64;
        while let Some(digit) = self.source.peek().and_then(|c| c.to_digit(10)) {
            self.bump();
            value = value.saturating_mul(10).saturating_add(u64::from(digit));
        }
        value
    }

    // Skip the rest of a broken quantifier up to and including its `}`
    fn skip_to_quantifier_end(&mut self) {
        while let Some(chr) = self.source.peek() {
            match chr {
                '}' => {
                    self.bump();
                    return;
                }
                '/' => return,
                '\\' => {
                    self.read_regex_escape();
                }
                c if is_line_terminator(c) => return,
                _ => {
                    self.bump();
                }
            }
        }
    }

    /// Read a character class starting at its `[`.
    ///
    /// A `-` is fine at the start of a class, between the two ends of a range and right after a
    /// range. Anywhere else it is likely a range which was not meant to be one.
    fn read_regex_class(&mut self) {
        let open = self.source.position();
        self.bump();

        match self.source.peek() {
            Some('^') => {
                let caret = self.source.position();
                self.bump();
                if self.source.peek() == Some(']') {
                    self.report(Issue::Unescaped('^'), caret);
                }
            }
            Some(']') => self.report(Issue::EmptyClass, open),
            _ => {}
        }

        let mut literal = false;
        let mut in_range = false;
        let mut first = true;

        while let Some(chr) = self.source.peek() {
            if is_line_terminator(chr) {
                return;
            }
            let at = self.source.position();

            match chr {
                ']' => {
                    self.bump();
                    if in_range {
                        self.report(Issue::Unescaped('-'), at);
                    }
                    return;
                }
                '-' => {
                    self.bump();
                    if literal && !in_range {
                        literal = false;
                        in_range = true;
                    } else if in_range {
                        in_range = false;
                    } else if self.source.peek() == Some(']') {
                        in_range = true;
                    } else {
                        if !first {
                            self.report(Issue::Unescaped('-'), at);
                        }
                        literal = true;
                    }
                }
                '\\' => {
                    let escaped = self.read_regex_escape();
                    if escaped.map_or(false, |c| "wsdWSD".contains(c)) {
                        if in_range {
                            self.report(Issue::Unescaped('-'), at);
                            in_range = false;
                        }
                        literal = false;
                    } else if in_range {
                        in_range = false;
                    } else {
                        literal = true;
                    }
                }
                _ => {
                    if matches!(chr, '[' | '^' | '/') {
                        self.report(Issue::Unescaped(chr), at);
                    } else if is_unsafe(chr) {
                        self.report(Issue::RegexControlCharacter, at);
                    }
                    self.bump();
                    if in_range {
                        in_range = false;
                    } else {
                        literal = true;
                    }
                }
            }
            first = false;
        }
    }
}
