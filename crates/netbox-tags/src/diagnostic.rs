// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! User facing diagnostics accumulated while an operation keeps going.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}

/// A single message reported back to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
}

impl Diagnostic {
    pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.summary, self.detail)
    }
}

/// Ordered collection of diagnostics, in the order they were raised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when at least one diagnostic should block the surrounding operation.
    pub fn has_error(&self) -> bool {
        self.0.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.0
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_display() {
        let diagnostic = Diagnostic::warning("Error retrieving tag a", "API Error");
        assert_eq!(diagnostic.severity, Severity::Warning);
        assert_eq!(
            diagnostic.to_string(),
            "WARNING: Error retrieving tag a: API Error"
        );
    }

    #[test]
    fn test_warnings_do_not_block() {
        let mut diagnostics = Diagnostics::new();
        assert!(diagnostics.is_empty());

        diagnostics.push(Diagnostic::warning("one", "first"));
        diagnostics.push(Diagnostic::warning("two", "second"));
        assert_eq!(diagnostics.len(), 2);
        assert!(!diagnostics.has_error());

        diagnostics.push(Diagnostic::error("three", "third"));
        assert!(diagnostics.has_error());
    }

    #[test]
    fn test_order_is_preserved() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.extend([
            Diagnostic::warning("b", "b"),
            Diagnostic::warning("a", "a"),
        ]);
        let summaries: Vec<_> = diagnostics.iter().map(|d| d.summary.as_str()).collect();
        assert_eq!(summaries, vec!["b", "a"]);
    }

    #[test]
    fn test_serialize() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(Diagnostic::warning("s", "d"));
        let json = serde_json::to_string(&diagnostics).unwrap();
        assert_eq!(
            json,
            r#"[{"severity":"warning","summary":"s","detail":"d"}]"#
        );
    }
}
