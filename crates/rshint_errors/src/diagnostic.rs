use crate::{file::Position, Severity};
use serde::Serialize;
use smol_str::SmolStr;
use std::fmt;

/// A diagnostic message that can give information
/// like errors or warnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub position: Position,
    pub severity: Severity,
    /// A stable, machine readable name for the message template.
    pub code: SmolStr,
    /// The rendered message, reporters and tests match on its exact wording.
    pub message: SmolStr,
}

impl Diagnostic {
    pub fn new(
        position: Position,
        severity: Severity,
        code: impl Into<SmolStr>,
        message: impl Into<SmolStr>,
    ) -> Self {
        Self {
            position,
            severity,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn error(position: Position, code: impl Into<SmolStr>, message: impl Into<SmolStr>) -> Self {
        Self::new(position, Severity::Error, code, message)
    }

    pub fn warning(
        position: Position,
        code: impl Into<SmolStr>,
        message: impl Into<SmolStr>,
    ) -> Self {
        Self::new(position, Severity::Warning, code, message)
    }

    pub fn line(&self) -> usize {
        self.position.line
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}[{}]: {}",
            self.position, self.severity, self.code, self.message
        )
    }
}

/// The append-only diagnostics sink of a single lexing pass.
///
/// Diagnostics are recorded in the order they are found. [`Diagnostics::into_sorted`]
/// yields them ordered by position, keeping the discovery order of diagnostics which
/// share a position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether any [`Severity::Error`] diagnostic was recorded.
    pub fn has_errors(&self) -> bool {
        self.items.iter().any(|d| d.severity.is_error())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn into_sorted(mut self) -> Vec<Diagnostic> {
        self.items.sort_by_key(|d| d.position);
        self.items
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
        self.items.extend(iter)
    }
}
