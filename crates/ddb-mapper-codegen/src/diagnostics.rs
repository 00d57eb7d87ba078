//! Per-declaration diagnostics collected during a generation pass.

use crate::declaration::SourceLocation;
use crate::error::{DiscoveryError, SchemaValidationError};
use std::fmt;
use thiserror::Error;

/// What went wrong for a declaration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    SchemaValidation(#[from] SchemaValidationError),
}

/// A declaration that was skipped, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Qualified name of the declaration.
    pub declaration: String,
    pub location: SourceLocation,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(
        declaration: impl Into<String>,
        location: SourceLocation,
        kind: impl Into<DiagnosticKind>,
    ) -> Self {
        Self {
            declaration: declaration.into(),
            location,
            kind: kind.into(),
        }
    }

    pub fn is_discovery(&self) -> bool {
        matches!(self.kind, DiagnosticKind::Discovery(_))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.kind)
    }
}

/// Append-only diagnostics sink owned by a generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and log it.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(
            declaration = %diagnostic.declaration,
            location = %diagnostic.location,
            "{}",
            diagnostic.kind
        );
        self.entries.push(diagnostic);
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in diagnostics {
            self.push(diagnostic);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    /// Diagnostics recorded for one declaration.
    pub fn for_declaration<'a>(
        &'a self,
        declaration: &'a str,
    ) -> impl Iterator<Item = &'a Diagnostic> + 'a {
        self.entries
            .iter()
            .filter(move |d| d.declaration == declaration)
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

/// Collects without logging, for diagnostics that were already reported.
impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
