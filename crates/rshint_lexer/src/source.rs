//! The source buffer a lexing pass reads from.

use rshint_errors::{file::line_starts, Position};

/// The class of a single source character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Printable,
    Whitespace,
    LineTerminator,
    /// Control and formatting characters which render invisibly or differently across editors.
    Unsafe,
    Bom,
}

/// Classify a character. A BOM is only reported as [`CharClass::Bom`] here, the buffer
/// decides whether it sits at the start of the file.
pub fn classify(chr: char) -> CharClass {
    match chr {
        '\n' | '\r' => CharClass::LineTerminator,
        '\t' | ' ' => CharClass::Whitespace,
        '\u{feff}' => CharClass::Bom,
        c if is_unsafe(c) => CharClass::Unsafe,
        '\u{00a0}' | '\u{1680}' | '\u{2000}'..='\u{200a}' | '\u{205f}' | '\u{3000}' => {
            CharClass::Whitespace
        }
        _ => CharClass::Printable,
    }
}

/// Whether a char is one of the unsafe characters. Tab, LF and CR are never unsafe.
pub fn is_unsafe(chr: char) -> bool {
    matches!(chr,
        '\u{0000}'..='\u{0008}'
        | '\u{000b}'..='\u{000c}'
        | '\u{000e}'..='\u{001f}'
        | '\u{007f}'..='\u{009f}'
        | '\u{00ad}'
        | '\u{0600}'..='\u{0604}'
        | '\u{070f}'
        | '\u{17b4}'
        | '\u{17b5}'
        | '\u{200c}'..='\u{200f}'
        | '\u{2028}'..='\u{202f}'
        | '\u{2060}'..='\u{206f}'
        | '\u{feff}'
        | '\u{fff0}'..='\u{ffff}'
    )
}

pub fn is_line_terminator(chr: char) -> bool {
    chr == '\n' || chr == '\r'
}

/// A cursor over a fully materialized source text which tracks lines and columns.
#[derive(Debug, Clone)]
pub struct Source<'src> {
    text: &'src str,
    cur: usize,
    line: usize,
    column: usize,
    line_starts: Vec<usize>,
    shebang: Option<&'src str>,
}

impl<'src> Source<'src> {
    /// Make a new buffer, skipping a leading BOM and a shebang line.
    pub fn new(text: &'src str) -> Self {
        let mut source = Self {
            text,
            cur: 0,
            line: 1,
            column: 1,
            line_starts: line_starts(text).collect(),
            shebang: None,
        };

        if source.peek() == Some('\u{feff}') {
            source.cur += '\u{feff}'.len_utf8();
        }
        if source.rest().starts_with("#!") {
            let start = source.cur;
            while source.peek().map_or(false, |c| !is_line_terminator(c)) {
                source.bump();
            }
            source.shebang = Some(&text[start..source.cur]);
        }
        source
    }

    pub fn text(&self) -> &'src str {
        self.text
    }

    /// The skipped shebang line, if the source had one.
    pub fn shebang(&self) -> Option<&'src str> {
        self.shebang
    }

    /// The unread rest of the source.
    pub fn rest(&self) -> &'src str {
        &self.text[self.cur..]
    }

    pub fn offset(&self) -> usize {
        self.cur
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn is_eof(&self) -> bool {
        self.cur >= self.text.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Look `n` chars ahead of the cursor, `peek_nth(0)` is `peek()`.
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    pub fn at_line_start(&self) -> bool {
        self.column == 1
    }

    /// Whether the cursor sits on a line terminator or the end of the file.
    pub fn at_line_end(&self) -> bool {
        self.peek().map_or(true, is_line_terminator)
    }

    /// Advance past the next char and return it.
    pub fn bump(&mut self) -> Option<char> {
        let chr = self.peek()?;
        self.cur += chr.len_utf8();

        match chr {
            '\r' if self.peek() == Some('\n') => self.column += 1,
            '\n' | '\r' => {
                self.line += 1;
                self.column = 1;
            }
            _ => self.column += 1,
        }
        Some(chr)
    }

    pub fn slice(&self, start: usize, end: usize) -> &'src str {
        &self.text[start..end]
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// The full text of the 1-based line `n`, without its terminator.
    pub fn line(&self, n: usize) -> Option<&'src str> {
        let start = *self.line_starts.get(n.checked_sub(1)?)?;
        let end = self
            .line_starts
            .get(n)
            .copied()
            .unwrap_or_else(|| self.text.len());
        Some(self.text[start..end].trim_end_matches(|c| c == '\n' || c == '\r'))
    }
}
