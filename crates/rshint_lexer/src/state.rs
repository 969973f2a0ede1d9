use crate::token::{Token, TokenKind};
use log::trace;
use once_cell::sync::Lazy;
use smol_str::SmolStr;
use std::collections::HashSet;
use std::iter::FromIterator;

/// Keywords after which an expression has ended, so a following `/` divides.
static VALUE_KEYWORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from_iter(vec!["this", "null", "true", "false", "super"]));

/// Context the scanner carries from one significant token to the next.
///
/// Whitespace and comments never update the context.
#[derive(Debug, Clone, Default)]
pub struct ScanContext {
    /// The kind and text of the last significant token.
    pub prev: Option<(TokenKind, SmolStr)>,
    /// A line terminator was crossed since the last significant token.
    pub had_linebreak: bool,
    /// The currently open `{`, `[` and `(`, innermost last.
    brackets: Vec<char>,
}

impl ScanContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, token: &Token) {
        if token.kind == TokenKind::Punctuator {
            match token.raw.as_str() {
                "{" => self.brackets.push('{'),
                "[" => self.brackets.push('['),
                "(" => self.brackets.push('('),
                "}" | "]" | ")" => {
                    self.brackets.pop();
                }
                _ => {}
            }
        }

        self.prev = Some((token.kind, token.raw.clone()));
        self.had_linebreak = false;
        trace!(
            "Updating state: prev: {:?} | regex_allowed: {} | brackets: {:?}",
            self.prev,
            self.regex_allowed(),
            self.brackets
        );
    }

    /// Whether a `/` starts a regex literal rather than a division.
    pub fn regex_allowed(&self) -> bool {
        match &self.prev {
            None => true,
            Some((kind, raw)) => match kind {
                TokenKind::Identifier
                | TokenKind::NumericLiteral
                | TokenKind::StringLiteral
                | TokenKind::RegExpLiteral
                | TokenKind::TemplateLiteral => false,
                TokenKind::Keyword => !VALUE_KEYWORDS.contains(raw.as_str()),
                TokenKind::Punctuator => !matches!(raw.as_str(), ")" | "]" | "++" | "--"),
                TokenKind::Comment | TokenKind::Eof => true,
            },
        }
    }

    /// Whether the previous token was a member access dot.
    pub fn after_dot(&self) -> bool {
        self.prev_is_punct(".") || self.prev_is_punct("?.")
    }

    /// Whether the next token sits where an object literal expects a key.
    pub fn in_object_key_position(&self) -> bool {
        self.brackets.last() == Some(&'{') && (self.prev_is_punct("{") || self.prev_is_punct(","))
    }

    fn prev_is_punct(&self, punct: &str) -> bool {
        matches!(&self.prev, Some((TokenKind::Punctuator, raw)) if raw == punct)
    }
}
