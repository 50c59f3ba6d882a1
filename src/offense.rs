//! Offense types produced by the rules.
//!
//! An offense is self-contained: target node, source span, category, and a
//! human-readable message. Offenses are created during one analysis pass and
//! consumed by the reporting harness; they are never mutated afterwards.

use crate::ast::{NodeId, Span, SyntaxTree};

/// Severity level of an offense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Offense category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OffenseKind {
    MissingDecoration,
    Multiline,
    Concatenation,
    Interpolation,
    PercentFormat,
}

impl OffenseKind {
    /// Structural offenses defeat translation outright; a missing decorator
    /// is mechanical debt.
    pub fn severity(self) -> Severity {
        match self {
            OffenseKind::MissingDecoration => Severity::Warning,
            OffenseKind::Multiline
            | OffenseKind::Concatenation
            | OffenseKind::Interpolation
            | OffenseKind::PercentFormat => Severity::Error,
        }
    }
}

impl std::fmt::Display for OffenseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OffenseKind::MissingDecoration => write!(f, "missing-decoration"),
            OffenseKind::Multiline => write!(f, "multiline"),
            OffenseKind::Concatenation => write!(f, "concatenation"),
            OffenseKind::Interpolation => write!(f, "interpolation"),
            OffenseKind::PercentFormat => write!(f, "percent-format"),
        }
    }
}

/// A single finding against one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offense {
    pub node: NodeId,
    pub span: Span,
    pub kind: OffenseKind,
    pub message: String,
}

impl Offense {
    pub fn new(
        tree: &SyntaxTree,
        node: NodeId,
        kind: OffenseKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            node,
            span: tree.span(node),
            kind,
            message: message.into(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}
