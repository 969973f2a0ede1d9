use serde::Serialize;
use std::fmt;

/// A 1-based line and column inside of a source text.
///
/// Columns count unicode scalar values, not bytes. Positions order by line first and
/// column second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Computes the byte indices of every line start.
///
/// `\r\n`, `\r` and `\n` all end a line.
pub fn line_starts(source: &str) -> impl '_ + Iterator<Item = usize> {
    let bytes = source.as_bytes();
    std::iter::once(0).chain(
        bytes
            .iter()
            .enumerate()
            .filter_map(move |(idx, byte)| match byte {
                b'\n' => Some(idx + 1),
                b'\r' if bytes.get(idx + 1) != Some(&b'\n') => Some(idx + 1),
                _ => None,
            }),
    )
}
