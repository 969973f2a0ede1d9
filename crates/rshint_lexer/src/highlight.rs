use crate::{LexOptions, Lexer, Token, TokenKind};
use ansi_term::{Color, Style};

fn style(token: &Token) -> Style {
    if token.is_malformed() {
        return Color::Red.underline();
    }

    match token.kind {
        TokenKind::Keyword => Color::Purple.bold(),
        TokenKind::NumericLiteral => Color::Yellow.normal(),
        TokenKind::StringLiteral | TokenKind::TemplateLiteral => Color::Green.normal(),
        TokenKind::RegExpLiteral => Color::Cyan.normal(),
        TokenKind::Comment => Color::Fixed(8).italic(),
        TokenKind::Identifier | TokenKind::Punctuator | TokenKind::Eof => Style::new(),
    }
}

/// Color a source text with ANSI escapes, the text between tokens is kept as is.
pub fn highlight(source: &str) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    let mut last = 0;

    for token in Lexer::new(source, &LexOptions::default()).with_comments() {
        out.push_str(&source[last..token.range.start]);
        out.push_str(&style(&token).paint(token.raw.as_str()).to_string());
        last = token.range.end;
    }
    out.push_str(&source[last..]);
    out
}

/// Highlight the source if stdout is a terminal, otherwise return it unchanged.
pub fn highlight_for_stdout(source: &str) -> String {
    if atty::is(atty::Stream::Stdout) {
        highlight(source)
    } else {
        source.to_string()
    }
}
