use bitflags::bitflags;
use rshint_errors::Position;
use smol_str::SmolStr;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Keyword,
    Punctuator,
    NumericLiteral,
    StringLiteral,
    RegExpLiteral,
    TemplateLiteral,
    Comment,
    Eof,
}

impl TokenKind {
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::NumericLiteral
                | TokenKind::StringLiteral
                | TokenKind::RegExpLiteral
                | TokenKind::TemplateLiteral
        )
    }
}

bitflags! {
    pub struct TokenFlags: u8 {
        /// A line terminator appeared between this token and the previous one.
        const PRECEDED_BY_NEWLINE = 0b0000_0001;
        /// The token failed a lexical rule but was produced anyway.
        const MALFORMED = 0b0000_0010;
        /// A string, comment, regex or template which was cut off by the end of a line or the file.
        const UNCLOSED = 0b0000_0100;
    }
}

bitflags! {
    pub struct RegexFlags: u8 {
        const G = 0b0000_0001;
        const I = 0b0000_0010;
        const M = 0b0000_0100;
        const S = 0b0000_1000;
        const U = 0b0001_0000;
        const Y = 0b0010_0000;
    }
}

impl RegexFlags {
    pub fn from_char(chr: char) -> Option<Self> {
        Some(match chr {
            'g' => Self::G,
            'i' => Self::I,
            'm' => Self::M,
            's' => Self::S,
            'u' => Self::U,
            'y' => Self::Y,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentStyle {
    Line,
    Block,
}

/// Block comments which configure the linter, e.g. `/*jshint maxlen: 80 */`.
///
/// The lexer only recognizes them, interpreting their body is up to the rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Jshint,
    Jslint,
    Global,
    Members,
    Exported,
}

impl Directive {
    /// Recognize a directive from the text following `/*`.
    pub fn from_comment_body(body: &str) -> Option<Self> {
        let word_end = body
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or_else(|| body.len());

        Some(match &body[..word_end] {
            "jshint" => Directive::Jshint,
            "jslint" => Directive::Jslint,
            "global" | "globals" => Directive::Global,
            "members" | "member" => Directive::Members,
            "exported" => Directive::Exported,
            _ => return None,
        })
    }
}

/// The decoded value of a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// Identifiers, keywords and punctuators.
    Name(SmolStr),
    Number(f64),
    /// The string with all escapes resolved.
    Str(String),
    Regex {
        pattern: SmolStr,
        flags: RegexFlags,
    },
    /// The raw text between the backticks.
    Template(String),
    Comment {
        style: CommentStyle,
        /// The text without the comment delimiters.
        text: String,
        directive: Option<Directive>,
    },
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact source text of the token.
    pub raw: SmolStr,
    pub value: TokenValue,
    pub start: Position,
    pub end: Position,
    /// The byte range of the token in the source.
    pub range: Range<usize>,
    pub flags: TokenFlags,
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    pub fn is_malformed(&self) -> bool {
        self.flags.contains(TokenFlags::MALFORMED)
    }

    pub fn is_unclosed(&self) -> bool {
        self.flags.contains(TokenFlags::UNCLOSED)
    }

    pub fn preceded_by_newline(&self) -> bool {
        self.flags.contains(TokenFlags::PRECEDED_BY_NEWLINE)
    }

    /// Whether this is the punctuator `punct`.
    pub fn is_punct(&self, punct: &str) -> bool {
        self.kind == TokenKind::Punctuator && self.raw == punct
    }

    pub fn number(&self) -> Option<f64> {
        match self.value {
            TokenValue::Number(num) => Some(num),
            _ => None,
        }
    }

    pub fn string(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Str(string) => Some(string),
            _ => None,
        }
    }
}
