use crate::{decode, Issue, Lexer, Position, Token, TokenFlags, TokenKind, TokenValue};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::iter::FromIterator;
use unicode_xid::UnicodeXID;

static KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from_iter(vec![
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "implements",
        "import",
        "in",
        "instanceof",
        "interface",
        "let",
        "new",
        "null",
        "package",
        "private",
        "protected",
        "public",
        "return",
        "static",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
    ])
});

/// Whether a word is reserved, the literals `null`, `true` and `false` included.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word)
}

pub(crate) fn is_id_start(chr: char) -> bool {
    chr == '$' || chr == '_' || chr.is_xid_start()
}

pub(crate) fn is_id_part(chr: char) -> bool {
    chr == '$' || chr == '_' || chr == '\u{200c}' || chr == '\u{200d}' || chr.is_xid_continue()
}

impl Lexer<'_> {
    pub(crate) fn read_identifier(&mut self, start: usize, position: Position) -> Token {
        let mut name = String::new();
        let mut flags = TokenFlags::empty();

        loop {
            match self.source.peek() {
                Some('\\') if self.source.peek_nth(1) == Some('u') => {
                    let escape = self.source.position();
                    self.bump();
                    self.bump();
                    let first = name.is_empty();
                    match self.take_unicode_digits().and_then(decode::decode_hex) {
                        Some(chr) if (first && is_id_start(chr)) || (!first && is_id_part(chr)) => {
                            name.push(chr)
                        }
                        _ => {
                            self.report(Issue::BadEscapement, escape);
                            flags |= TokenFlags::MALFORMED;
                        }
                    }
                }
                Some(chr) if is_id_part(chr) => {
                    self.bump();
                    name.push(chr);
                }
                _ => break,
            }
        }

        let kind = if is_keyword(&name) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.check_name(&name, position);

        self.token(kind, start, position, TokenValue::Name(name.into()), flags)
    }

    fn check_name(&mut self, name: &str, position: Position) {
        // `obj.hasOwnProperty(key)` is how the property is meant to be used
        if name == "hasOwnProperty" && !self.state.after_dot() {
            self.report(Issue::HasOwnProperty, position);
        }
        if name == "__proto__" && !self.options.proto {
            self.report(Issue::ProtoProperty, position);
        }
        if name == "__iterator__" && !self.options.iterator {
            self.report(Issue::IteratorProperty, position);
        }
        if self.options.json_mode && self.state.in_object_key_position() {
            self.report(Issue::BarewordKey(name.into()), position);
        }
    }
}
