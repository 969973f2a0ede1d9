use crate::{decode, identifier::is_id_start, Issue, Lexer, Position, Token, TokenFlags, TokenKind, TokenValue};

impl Lexer<'_> {
    /// Read a numeric literal starting at a digit or at a `.` followed by a digit.
    ///
    /// `0x`, `0b` and `0o` literals take the digits of their radix only.
    pub(crate) fn read_number(&mut self, start: usize, position: Position) -> Token {
        let mut flags = TokenFlags::empty();
        let radix = match (self.source.peek(), self.source.peek_nth(1)) {
            (Some('0'), Some('x')) | (Some('0'), Some('X')) => Some(16),
            (Some('0'), Some('b')) | (Some('0'), Some('B')) => Some(2),
            (Some('0'), Some('o')) | (Some('0'), Some('O')) => Some(8),
            _ => None,
        };

        if let Some(radix) = radix {
            self.bump();
            self.bump();
            self.eat_while(|c| c.is_digit(radix));
        } else {
            self.eat_while(|c| c.is_ascii_digit());
            if self.source.peek() == Some('.') {
                self.bump();
                self.eat_while(|c| c.is_ascii_digit());
            }
            self.read_exponent();
        }

        let raw = self.source.slice(start, self.source.offset());
        let value = decode::decode_number(raw);

        if radix.is_some() {
            if radix == Some(16) && self.options.json_mode {
                self.report(Issue::AvoidHexNumber(raw.into()), position);
            }
        } else {
            let bytes = raw.as_bytes();
            if bytes.len() > 1 && bytes[0] == b'0' && bytes[1].is_ascii_digit() {
                self.report(Issue::LeadingZeros(raw.into()), position);
            }
            if bytes[0] == b'.' {
                self.report(Issue::LeadingDecimalPoint(raw.into()), position);
            }
            if raw.ends_with('.') {
                self.report(Issue::TrailingDecimalPoint(raw.into()), position);
            }
        }

        if !value.is_finite() {
            self.report(Issue::BadNumber(raw.into()), position);
            flags |= TokenFlags::MALFORMED;
        }

        if self
            .source
            .peek()
            .map_or(false, |c| is_id_start(c) || c == '\\')
        {
            self.report(Issue::MissingSpaceAfterNumber(raw.into()), position);
        }

        self.token(
            TokenKind::NumericLiteral,
            start,
            position,
            TokenValue::Number(value),
            flags,
        )
    }

    // The `e` is only part of the number if at least one digit follows it
    fn read_exponent(&mut self) {
        if !matches!(self.source.peek(), Some('e') | Some('E')) {
            return;
        }

        let digit_at = match self.source.peek_nth(1) {
            Some('+') | Some('-') => 2,
            _ => 1,
        };
        if self
            .source
            .peek_nth(digit_at)
            .map_or(false, |c| c.is_ascii_digit())
        {
            for _ in 0..digit_at {
                self.bump();
            }
            self.eat_while(|c| c.is_ascii_digit());
        }
    }
}
