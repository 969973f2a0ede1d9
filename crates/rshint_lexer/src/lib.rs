//! A lookup table based JavaScript lexer which yields tokens along with every lexical defect of a source.
//!
//! The lexer never stops at an error. Unterminated strings, regexes, comments and templates end at the
//! end of their line or of the file and scanning carries on, so one pass reports all lexical issues.
//! Tokens which broke a rule are still produced and flagged as [`TokenFlags::MALFORMED`].
//!
//! Diagnostics are collected in a sink owned by the [`Lexer`] and handed out ordered by position
//! with [`Lexer::finish`], or all at once with [`lex`].
//!
//! Basic ANSI syntax highlighting is also offered through the `highlight` feature.

mod comments;
pub mod decode;
#[cfg(feature = "highlight")]
mod highlight;
mod identifier;
mod issue;
mod numbers;
mod options;
mod regex;
pub mod source;
mod state;
mod strings;
mod template;
mod tests;
mod token;

#[cfg(feature = "highlight")]
pub use highlight::*;
pub use identifier::is_keyword;
pub use issue::Issue;
pub use options::{ConfigError, LexOptions};
pub use rshint_errors::{Diagnostic, Diagnostics, Position, Severity};
pub use token::{CommentStyle, Directive, RegexFlags, Token, TokenFlags, TokenKind, TokenValue};

use log::{debug, trace};
use source::{classify, is_unsafe, CharClass, Source};
use state::ScanContext;

/// A lexer over a single source text.
///
/// The lexer is an [`Iterator`] over the significant tokens of the source, ending with exactly one
/// [`TokenKind::Eof`] token. Comments are skipped unless asked for with [`Lexer::with_comments`].
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    source: Source<'src>,
    options: LexOptions,
    state: ScanContext,
    diagnostics: Diagnostics,
    with_comments: bool,
    checked_lines: usize,
    returned_eof: bool,
}

impl<'src> Lexer<'src> {
    /// Make a new lexer, a leading BOM and a shebang line are skipped right away.
    pub fn new(source: &'src str, options: &LexOptions) -> Self {
        Self {
            source: Source::new(source),
            options: options.clone(),
            state: ScanContext::new(),
            diagnostics: Diagnostics::new(),
            with_comments: false,
            checked_lines: 0,
            returned_eof: false,
        }
    }

    /// Yield comments as [`TokenKind::Comment`] tokens instead of skipping them.
    pub fn with_comments(mut self) -> Self {
        self.with_comments = true;
        self
    }

    pub fn options(&self) -> &LexOptions {
        &self.options
    }

    /// The skipped shebang line, if the source had one.
    pub fn shebang(&self) -> Option<&'src str> {
        self.source.shebang()
    }

    /// The diagnostics found so far, in the order they were found.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Consume the lexer, returning its diagnostics ordered by position.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics.into_sorted()
    }

    fn report(&mut self, issue: Issue, position: Position) {
        trace!("{}: {}", position, issue);
        self.diagnostics.push(issue.into_diagnostic(position));
    }

    // Advance past the next char, every char the lexer consumes goes through here
    fn bump(&mut self) -> Option<char> {
        let position = self.source.position();
        let chr = self.source.bump()?;

        if is_unsafe(chr) {
            self.report(Issue::UnsafeCharacter, position);
        }
        if self.source.position().line != position.line {
            self.state.had_linebreak = true;
            self.check_line(position.line);
        }
        Some(chr)
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while self.source.peek().map_or(false, &pred) {
            self.bump();
            count += 1;
        }
        count
    }

    // Checks which apply to a whole line, run once the lexer leaves the line
    fn check_line(&mut self, line: usize) {
        if line <= self.checked_lines {
            return;
        }
        self.checked_lines = line;

        let text = match self.source.line(line) {
            Some(text) => text,
            None => return,
        };

        if let Some(maxlen) = self.options.maxlen {
            if text.chars().count() > maxlen {
                self.report(Issue::LineTooLong, Position::new(line, maxlen + 1));
            }
        }

        if self.options.trailing {
            let trimmed = text.trim_end_matches(|c| c == ' ' || c == '\t');
            if trimmed.len() != text.len() {
                let column = trimmed.chars().count() + 1;
                self.report(Issue::TrailingWhitespace, Position::new(line, column));
            }
        }

        if let Some(column) = mixed_indentation(text, self.options.smarttabs) {
            self.report(Issue::MixedSpacesAndTabs, Position::new(line, column));
        }
    }

    // Skip whitespace, line breaks, unsafe chars and stray comment ends
    fn skip_trivia(&mut self) {
        while let Some(chr) = self.source.peek() {
            match classify(chr) {
                CharClass::Printable if self.source.rest().starts_with("*/") => {
                    let position = self.source.position();
                    self.report(Issue::UnbegunComment, position);
                    self.bump();
                    self.bump();
                }
                CharClass::Printable => return,
                _ => {
                    self.bump();
                }
            }
        }
    }

    fn token(
        &self,
        kind: TokenKind,
        start: usize,
        position: Position,
        value: TokenValue,
        flags: TokenFlags,
    ) -> Token {
        let end = self.source.offset();
        Token {
            kind,
            raw: self.source.slice(start, end).into(),
            value,
            start: position,
            end: self.source.position(),
            range: start..end,
            flags,
        }
    }

    fn eof_token(&self) -> Token {
        let position = self.source.position();
        let offset = self.source.offset();
        self.token(
            TokenKind::Eof,
            offset,
            position,
            TokenValue::None,
            TokenFlags::empty(),
        )
    }

    // Consume the longest of `candidates` the source continues with, at least one char
    fn punct(&mut self, start: usize, position: Position, candidates: &[&str]) -> Token {
        let rest = self.source.rest();
        let len = candidates
            .iter()
            .find(|punct| rest.starts_with(*punct))
            .map_or(1, |punct| punct.chars().count());

        for _ in 0..len {
            self.bump();
        }
        let name = self.source.slice(start, self.source.offset());
        self.token(
            TokenKind::Punctuator,
            start,
            position,
            TokenValue::Name(name.into()),
            TokenFlags::empty(),
        )
    }

    fn unexpected(&mut self, start: usize, position: Position, report: bool) -> Token {
        if let Some(chr) = self.bump() {
            if report {
                self.report(Issue::UnexpectedCharacter(chr), position);
            }
        }
        let name = self.source.slice(start, self.source.offset());
        self.token(
            TokenKind::Punctuator,
            start,
            position,
            TokenValue::Name(name.into()),
            TokenFlags::MALFORMED,
        )
    }

    /// Lex the next token, the lexer must not be at the end of the file or at trivia.
    fn lex_token(&mut self) -> Token {
        let start = self.source.offset();
        let position = self.source.position();
        let chr = match self.source.peek() {
            Some(chr) => chr,
            None => return self.eof_token(),
        };

        let dispatched = if chr.is_ascii() {
            DISPATCHER[chr as usize]
        } else {
            UNI
        };

        match dispatched {
            EXL => self.punct(start, position, &["!==", "!="]),
            QOT => self.read_string(chr, start, position),
            HSH => self.unexpected(start, position, false),
            IDT => self.read_identifier(start, position),
            PRC => self.punct(start, position, &["%="]),
            AMP => self.punct(start, position, &["&&=", "&&", "&="]),
            MUL => self.punct(start, position, &["**=", "**", "*="]),
            PLS => self.punct(start, position, &["++", "+="]),
            MIN => self.punct(start, position, &["--", "-="]),
            PRD => {
                if self.source.peek_nth(1).map_or(false, |c| c.is_ascii_digit()) {
                    self.read_number(start, position)
                } else {
                    self.punct(start, position, &["..."])
                }
            }
            SLH => match self.source.peek_nth(1) {
                Some('/') | Some('*') => self.read_comment(start, position),
                _ if self.state.regex_allowed() => self.read_regex(start, position),
                _ => self.punct(start, position, &["/="]),
            },
            DIG => self.read_number(start, position),
            LSS => self.punct(start, position, &["<<=", "<<", "<="]),
            EQL => self.punct(start, position, &["===", "==", "=>"]),
            MOR => self.punct(start, position, &[">>>=", ">>>", ">>=", ">>", ">="]),
            QST => {
                // `a?.5:b` is a conditional, not an optional chain
                if self.source.rest().starts_with("?.")
                    && self.source.peek_nth(2).map_or(false, |c| c.is_ascii_digit())
                {
                    self.punct(start, position, &[])
                } else {
                    self.punct(start, position, &["??=", "??", "?."])
                }
            }
            CRT => self.punct(start, position, &["^="]),
            PIP => self.punct(start, position, &["||=", "||", "|="]),
            PNO | PNC | BTO | BTC | BEO | BEC | COM | COL | SEM | TLD => {
                self.punct(start, position, &[])
            }
            TPL => self.read_template(start, position),
            BSL if self.source.peek_nth(1) == Some('u') => self.read_identifier(start, position),
            UNI if identifier::is_id_start(chr) => self.read_identifier(start, position),
            BSL | UNI | ERR => self.unexpected(start, position, true),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.skip_trivia();

            if self.source.is_eof() {
                if self.returned_eof {
                    return None;
                }
                self.returned_eof = true;
                let line = self.source.position().line;
                self.check_line(line);

                let mut token = self.eof_token();
                if self.state.had_linebreak {
                    token.flags |= TokenFlags::PRECEDED_BY_NEWLINE;
                }
                debug!(
                    "Reached the end of the source at {} with {} diagnostics",
                    token.start,
                    self.diagnostics.len()
                );
                return Some(token);
            }

            let mut token = self.lex_token();
            if self.state.had_linebreak {
                token.flags |= TokenFlags::PRECEDED_BY_NEWLINE;
            }

            if token.kind == TokenKind::Comment {
                if self.with_comments {
                    return Some(token);
                }
                continue;
            }

            self.state.update(&token);
            return Some(token);
        }
    }
}

/// The result of a whole lexing pass.
#[derive(Debug, Clone)]
pub struct Lexed {
    /// The significant tokens of the source, ending with the EOF token.
    pub tokens: Vec<Token>,
    /// The diagnostics of the pass, ordered by position.
    pub diagnostics: Vec<Diagnostic>,
}

impl Lexed {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

/// Lex a whole source text.
pub fn lex(source: &str, options: &LexOptions) -> Lexed {
    let mut lexer = Lexer::new(source, options);
    debug!("Lexing {} bytes with {:?}", source.len(), options);

    let tokens = lexer.by_ref().collect::<Vec<_>>();
    let diagnostics = lexer.finish();
    Lexed {
        tokens,
        diagnostics,
    }
}

// The column of the first space and tab mixed in the indentation of a line
fn mixed_indentation(line: &str, smarttabs: bool) -> Option<usize> {
    let rest = line.trim_start_matches(|c| c == ' ' || c == '\t');
    let indent = &line[..line.len() - rest.len()];

    if let Some(idx) = indent.find(" \t") {
        return Some(idx + 1);
    }
    if smarttabs {
        return None;
    }
    // spaces after tabs are fine when they align the ` *` of a block comment
    match indent.find("\t ") {
        Some(idx) if !line[idx + 2..].trim_start_matches(' ').starts_with('*') => Some(idx + 1),
        _ => None,
    }
}

// Every handler an ascii char could be dispatched to, anything else is `UNI`
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
enum Dispatch {
    ERR,
    EXL,
    QOT,
    HSH,
    IDT,
    PRC,
    AMP,
    PNO,
    PNC,
    MUL,
    PLS,
    COM,
    MIN,
    PRD,
    SLH,
    DIG,
    COL,
    SEM,
    LSS,
    EQL,
    MOR,
    QST,
    BTO,
    BSL,
    BTC,
    CRT,
    TPL,
    BEO,
    PIP,
    BEC,
    TLD,
    UNI,
}
use Dispatch::*;

// Whitespace and control chars never reach the dispatcher, they are trivia
static DISPATCHER: [Dispatch; 128] = [
    //   0    1    2    3    4    5    6    7    8    9    A    B    C    D    E    F   //
    ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, // 0
    ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, ERR, // 1
    ERR, EXL, QOT, HSH, IDT, PRC, AMP, QOT, PNO, PNC, MUL, PLS, COM, MIN, PRD, SLH, // 2
    DIG, DIG, DIG, DIG, DIG, DIG, DIG, DIG, DIG, DIG, COL, SEM, LSS, EQL, MOR, QST, // 3
    HSH, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, // 4
    IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, BTO, BSL, BTC, CRT, IDT, // 5
    TPL, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, // 6
    IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, IDT, BEO, PIP, BEC, TLD, ERR, // 7
];
