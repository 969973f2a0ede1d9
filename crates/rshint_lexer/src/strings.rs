use crate::{
    decode::{self, Escape, EscapeContext},
    source::is_line_terminator,
    Issue, Lexer, Position, Token, TokenFlags, TokenKind, TokenValue,
};

const SCRIPT_SCHEMES: [&str; 6] = [
    "javascript",
    "jscript",
    "ecmascript",
    "vbscript",
    "mocha",
    "livescript",
];

/// Whether a string value is a url which runs code, e.g. `javascript:void(0)`.
pub fn is_script_url(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    SCRIPT_SCHEMES.iter().any(|scheme| {
        lower
            .strip_prefix(scheme)
            .map_or(false, |rest| rest.trim_start().starts_with(':'))
    })
}

impl<'src> Lexer<'src> {
    pub(crate) fn read_string(&mut self, quote: char, start: usize, position: Position) -> Token {
        let context = if self.options.json_mode {
            EscapeContext::Json
        } else {
            EscapeContext::Script
        };
        if self.options.json_mode && quote == '\'' {
            self.report(Issue::SingleQuotedString, position);
        }

        self.bump();
        let mut value = String::new();
        let mut flags = TokenFlags::empty();
        // where the body starts on the current line, control char messages quote the text since
        let mut line_start = self.source.offset();

        loop {
            match self.source.peek() {
                Some(chr) if chr == quote => {
                    self.bump();
                    break;
                }
                None => {
                    self.report(Issue::UnclosedString, position);
                    flags |= TokenFlags::UNCLOSED | TokenFlags::MALFORMED;
                    break;
                }
                Some(chr) if is_line_terminator(chr) => {
                    self.report(Issue::UnclosedString, position);
                    flags |= TokenFlags::UNCLOSED | TokenFlags::MALFORMED;
                    break;
                }
                Some('\\') => {
                    let escape = self.source.position();
                    if self.read_escape(&mut value, context, quote) {
                        let issue = match (self.options.multistr, self.options.json_mode) {
                            (false, _) => Some(Issue::EolEscapement),
                            (true, true) => Some(Issue::AvoidEolEscapement),
                            (true, false) => None,
                        };
                        if let Some(issue) = issue {
                            self.report(issue, escape);
                        }
                        line_start = self.source.offset();
                    }
                }
                Some(chr) => {
                    if (chr as u32) < 0x20 && chr != '\t' {
                        let text = self.source.slice(line_start, self.source.offset());
                        let at = self.source.position();
                        self.report(Issue::ControlCharacterInString(text.into()), at);
                    }
                    self.bump();
                    value.push(chr);
                }
            }
        }

        if !self.options.scripturl && is_script_url(&value) {
            self.report(Issue::ScriptUrl, position);
        }
        self.token(
            TokenKind::StringLiteral,
            start,
            position,
            TokenValue::Str(value),
            flags,
        )
    }

    /// Read the escape sequence at the current backslash and push its decoded value.
    ///
    /// Returns `true` if the escape was a line continuation, which decodes to nothing.
    /// `quote` is the delimiter of the enclosing literal.
    pub(crate) fn read_escape(
        &mut self,
        value: &mut String,
        context: EscapeContext,
        quote: char,
    ) -> bool {
        let position = self.source.position();
        self.bump();

        let chr = match self.source.peek() {
            Some(chr) => chr,
            None => return false,
        };
        if is_line_terminator(chr) {
            self.bump();
            if chr == '\r' && self.source.peek() == Some('\n') {
                self.bump();
            }
            return true;
        }

        if let Some(issue) = decode::context_issue(chr, context) {
            self.report(issue, position);
        } else if decode::is_unnecessary_quote_escape(chr, quote, context) {
            self.report(Issue::UnnecessaryEscapement, position);
        }

        match decode::escape(chr, context) {
            Some(Escape::Char(decoded)) => {
                self.bump();
                value.push(decoded);
            }
            Some(escape) => {
                self.bump();
                let digits = match escape {
                    Escape::Hex => self.take_hex(2),
                    _ => self.take_unicode_digits(),
                };
                match digits.and_then(decode::decode_hex) {
                    Some(decoded) => {
                        if decode::is_unnecessary_escape(decoded as u32) {
                            self.report(Issue::UnnecessaryEscapement, position);
                        }
                        value.push(decoded);
                    }
                    None => {
                        self.report(Issue::BadEscapement, position);
                        value.push('\\');
                        value.push(chr);
                    }
                }
            }
            None => {
                self.report(Issue::BadEscapement, position);
                self.bump();
                value.push('\\');
                value.push(chr);
            }
        }
        false
    }

    /// Consume exactly `count` hex digits, nothing is consumed if there are fewer.
    pub(crate) fn take_hex(&mut self, count: usize) -> Option<&'src str> {
        let rest = self.source.rest();
        let len = rest
            .chars()
            .take(count)
            .take_while(|c| c.is_ascii_hexdigit())
            .count();
        if len != count {
            return None;
        }

        let start = self.source.offset();
        for _ in 0..count {
            self.bump();
        }
        Some(self.source.slice(start, self.source.offset()))
    }

    /// Consume the digits of a `\u` escape, either `XXXX` or `{X...}`.
    pub(crate) fn take_unicode_digits(&mut self) -> Option<&'src str> {
        if self.source.peek() != Some('{') {
            return self.take_hex(4);
        }

        let rest = self.source.rest();
        let digits = rest[1..].chars().take_while(|c| c.is_ascii_hexdigit()).count();
        if digits == 0 || digits > 6 || rest[1 + digits..].chars().next() != Some('}') {
            return None;
        }

        self.bump();
        let hex = self.take_hex(digits);
        self.bump();
        hex
    }
}
