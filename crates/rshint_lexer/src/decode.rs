//! Pure decoding and validation of escape sequences and numeric literals.
//!
//! Nothing in here knows about the scanner's state, the sub-scanners look rules up in
//! the tables below and report what they are told to report.

use crate::issue::Issue;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// What a `\c` escape in a string or template means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// The escape decodes to a single char.
    Char(char),
    /// `\x`, followed by exactly 2 hex digits.
    Hex,
    /// `\u`, followed by 4 hex digits or a braced code point.
    Unicode,
}

/// The kind of literal an escape appears in, each one carries its own extra rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EscapeContext {
    Script,
    Json,
    Template,
}

static ESCAPES: Lazy<HashMap<char, Escape>> = Lazy::new(|| {
    vec![
        ('n', Escape::Char('\n')),
        ('r', Escape::Char('\r')),
        ('t', Escape::Char('\t')),
        ('b', Escape::Char('\u{8}')),
        ('f', Escape::Char('\u{c}')),
        ('v', Escape::Char('\u{b}')),
        ('0', Escape::Char('\0')),
        ('\\', Escape::Char('\\')),
        ('\'', Escape::Char('\'')),
        ('"', Escape::Char('"')),
        ('/', Escape::Char('/')),
        ('x', Escape::Hex),
        ('u', Escape::Unicode),
    ]
    .into_iter()
    .collect()
});

// Escapes which are valid but discouraged in a context
static CONTEXT_ISSUES: Lazy<HashMap<(EscapeContext, char), Issue>> = Lazy::new(|| {
    vec![
        ((EscapeContext::Json, 'v'), Issue::AvoidVerticalTabEscape),
        ((EscapeContext::Json, 'x'), Issue::AvoidHexEscape),
        ((EscapeContext::Json, '\''), Issue::AvoidSingleQuoteEscape),
    ]
    .into_iter()
    .collect()
});

/// Look up the escape `\chr`, `None` means the escape is not valid.
pub fn escape(chr: char, context: EscapeContext) -> Option<Escape> {
    match (context, chr) {
        (EscapeContext::Template, '`') | (EscapeContext::Template, '$') => Some(Escape::Char(chr)),
        _ => ESCAPES.get(&chr).copied(),
    }
}

/// The extra issue a context attaches to an otherwise valid escape.
pub fn context_issue(chr: char, context: EscapeContext) -> Option<Issue> {
    CONTEXT_ISSUES.get(&(context, chr)).cloned()
}

/// Whether escaping this code point is pointless because it is printable ascii which
/// could have been written directly.
pub fn is_unnecessary_escape(code: u32) -> bool {
    (32..=126).contains(&code) && !matches!(code, 34 | 39 | 92)
}

/// Whether `\chr` escapes the quote a string is not delimited by, e.g. `\'` in `"it\'s"`.
///
/// JSON reports `\'` through its own rule and templates may escape either quote.
pub fn is_unnecessary_quote_escape(chr: char, quote: char, context: EscapeContext) -> bool {
    context == EscapeContext::Script && matches!(chr, '\'' | '"') && chr != quote
}

/// Decode a run of hex digits, `None` if a digit is invalid or the value is not a char.
pub fn decode_hex(digits: &str) -> Option<char> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16)
        .ok()
        .and_then(std::char::from_u32)
}

/// The grammar a numeric literal was scanned with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberForm {
    Decimal,
    Hex,
    /// `0b`, ES2015.
    Binary,
    /// `0o`, ES2015.
    Octal,
    /// A leading `0` followed by more digits, e.g. `0755`.
    LegacyOctal,
}

/// Classify a numeric literal which the number scanner already validated.
pub fn number_form(raw: &str) -> NumberForm {
    let bytes = raw.as_bytes();
    match bytes {
        [b'0', b'x', ..] | [b'0', b'X', ..] => NumberForm::Hex,
        [b'0', b'b', ..] | [b'0', b'B', ..] => NumberForm::Binary,
        [b'0', b'o', ..] | [b'0', b'O', ..] => NumberForm::Octal,
        [b'0', rest @ ..]
            if !rest.is_empty() && rest.iter().all(|b| (b'0'..=b'7').contains(b)) =>
        {
            NumberForm::LegacyOctal
        }
        _ => NumberForm::Decimal,
    }
}

/// Decode a numeric literal into its value.
///
/// Values which overflow decode to infinity, it is up to the caller to report them.
pub fn decode_number(raw: &str) -> f64 {
    match number_form(raw) {
        NumberForm::Hex => parse_radix(&raw[2..], 16),
        NumberForm::Binary => parse_radix(&raw[2..], 2),
        NumberForm::Octal => parse_radix(&raw[2..], 8),
        NumberForm::LegacyOctal => parse_radix(&raw[1..], 8),
        NumberForm::Decimal => parse_decimal(raw),
    }
}

fn parse_radix(digits: &str, radix: u8) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    lexical::parse_radix::<f64, _>(digits.as_bytes(), radix).unwrap_or(f64::INFINITY)
}

// lexical wants both an integer and a fraction part around a `.`, js allows either to be empty
fn parse_decimal(raw: &str) -> f64 {
    let (mantissa, exponent) = match raw.find(|c| c == 'e' || c == 'E') {
        Some(idx) => (&raw[..idx], Some(&raw[idx + 1..])),
        None => (raw, None),
    };
    let (int, fraction) = match mantissa.find('.') {
        Some(idx) => (&mantissa[..idx], &mantissa[idx + 1..]),
        None => (mantissa, ""),
    };

    let mut normalized = String::with_capacity(raw.len() + 2);
    normalized.push_str(if int.is_empty() { "0" } else { int });
    if !fraction.is_empty() {
        normalized.push('.');
        normalized.push_str(fraction);
    }
    if let Some(exponent) = exponent {
        normalized.push('e');
        normalized.push_str(exponent);
    }

    lexical::parse::<f64, _>(normalized.as_bytes()).unwrap_or(f64::INFINITY)
}
