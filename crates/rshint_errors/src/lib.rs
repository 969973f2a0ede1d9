//! Diagnostics for the rshint lexical front end.
//!
//! A [`Diagnostic`] is a positioned, templated message. A lexing pass owns exactly one
//! [`Diagnostics`] sink, which only ever grows while the pass runs and is handed to the
//! reporter once the pass is over.

pub mod file;

mod diagnostic;

pub use diagnostic::{Diagnostic, Diagnostics};
pub use file::Position;

use serde::Serialize;
use std::fmt;

/// Types of severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    /// A malformed construct, the token it belongs to is still produced.
    Error,
    /// Style or robustness problems.
    Warning,
}

impl Severity {
    pub fn is_error(self) -> bool {
        self == Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}
