use crate::{
    source::is_line_terminator, CommentStyle, Directive, Issue, Lexer, Position, Token, TokenFlags,
    TokenKind, TokenValue,
};

impl Lexer<'_> {
    /// Read a `//` or `/*` comment.
    ///
    /// Block comments do not nest in JavaScript, the depth counted here only exists so that
    /// accidental nesting is reported. A `*/` closes the comment once every `/*` seen inside
    /// of it was matched.
    pub(crate) fn read_comment(&mut self, start: usize, position: Position) -> Token {
        self.bump();
        let block = self.bump() == Some('*');
        let text_start = self.source.offset();

        if !block {
            self.eat_while(|c| !is_line_terminator(c));
            let text = self.source.slice(text_start, self.source.offset());
            return self.comment_token(start, position, CommentStyle::Line, text, TokenFlags::empty());
        }

        let mut depth = 1_usize;
        let mut flags = TokenFlags::empty();
        let text_end = loop {
            let rest = self.source.rest();
            if rest.is_empty() {
                let eof = self.source.position();
                self.report(Issue::UnclosedComment, eof);
                flags |= TokenFlags::UNCLOSED;
                break self.source.offset();
            }

            if rest.starts_with("/*") {
                let nested = self.source.position();
                self.report(Issue::NestedComment, nested);
                depth += 1;
                self.bump();
                self.bump();
            } else if rest.starts_with("*/") {
                let end = self.source.offset();
                if depth > 1 {
                    let unbegun = self.source.position();
                    self.report(Issue::UnbegunComment, unbegun);
                    depth -= 1;
                    self.bump();
                    self.bump();
                } else {
                    self.bump();
                    self.bump();
                    break end;
                }
            } else {
                self.bump();
            }
        };

        let text = self.source.slice(text_start, text_end);
        self.comment_token(start, position, CommentStyle::Block, text, flags)
    }

    fn comment_token(
        &self,
        start: usize,
        position: Position,
        style: CommentStyle,
        text: &str,
        flags: TokenFlags,
    ) -> Token {
        let directive = match style {
            CommentStyle::Block => Directive::from_comment_body(text),
            CommentStyle::Line => None,
        };
        let value = TokenValue::Comment {
            style,
            text: text.to_string(),
            directive,
        };
        self.token(TokenKind::Comment, start, position, value, flags)
    }
}
