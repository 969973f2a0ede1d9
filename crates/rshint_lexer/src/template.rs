use crate::{
    decode::EscapeContext, source::is_line_terminator, Issue, Lexer, Position, Token, TokenFlags,
    TokenKind, TokenValue,
};

impl Lexer<'_> {
    /// Read a whole template literal, substitutions included, as a single token.
    pub(crate) fn read_template(&mut self, start: usize, position: Position) -> Token {
        self.bump();
        let body_start = self.source.offset();

        let (body_end, flags) = if self.skip_template_body() {
            (self.source.offset() - 1, TokenFlags::empty())
        } else {
            self.report(Issue::UnclosedTemplate, position);
            (
                self.source.offset(),
                TokenFlags::UNCLOSED | TokenFlags::MALFORMED,
            )
        };

        let value = TokenValue::Template(self.source.slice(body_start, body_end).to_string());
        self.token(TokenKind::TemplateLiteral, start, position, value, flags)
    }

    // Returns `false` if the file ends before the closing backtick
    fn skip_template_body(&mut self) -> bool {
        let mut decoded = String::new();
        loop {
            match self.source.peek() {
                None => return false,
                Some('`') => {
                    self.bump();
                    return true;
                }
                Some('\\') => {
                    self.read_escape(&mut decoded, EscapeContext::Template, '`');
                }
                Some('$') if self.source.peek_nth(1) == Some('{') => {
                    self.bump();
                    self.bump();
                    if !self.skip_substitution() {
                        return false;
                    }
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
    }

    // Skip a `${ ... }` up to and including its closing brace
    fn skip_substitution(&mut self) -> bool {
        let mut depth = 1_usize;
        loop {
            match self.source.peek() {
                None => return false,
                Some('{') => {
                    self.bump();
                    depth += 1;
                }
                Some('}') => {
                    self.bump();
                    depth -= 1;
                    if depth == 0 {
                        return true;
                    }
                }
                Some('`') => {
                    self.bump();
                    if !self.skip_template_body() {
                        return false;
                    }
                }
                Some(quote) if quote == '"' || quote == '\'' => {
                    self.bump();
                    self.skip_quoted(quote);
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
    }

    // Strings inside of substitutions are only skipped, they were not written as tokens
    fn skip_quoted(&mut self, quote: char) {
        while let Some(chr) = self.source.peek() {
            if is_line_terminator(chr) {
                return;
            }
            self.bump();
            if chr == quote {
                return;
            }
            if chr == '\\' && self.source.peek().map_or(false, |c| !is_line_terminator(c)) {
                self.bump();
            }
        }
    }
}
