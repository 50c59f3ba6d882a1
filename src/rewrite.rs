//! Rewrite planner: the minimal safe wrap-in-decorator fix.
//!
//! The planner only ever fixes one shape: a bare, single-line, undecorated
//! string literal, wrapped by inserting the decorator's call-open text before
//! the literal and a closing parenthesis after it. Multiline, concatenated
//! and interpolated messages need human judgment (usually a rewrite into a
//! parameterized template), so the planner returns no plan for them.
//!
//! Edit anchors are byte offsets into the *original* source buffer and the
//! edits of one plan never overlap, so the host's substitution engine can
//! apply them in any order against the original text.

use crate::ast::{NodeKind, Span, SyntaxTree};
use crate::decorators::DecoratorSet;
use crate::detectors;
use crate::offense::{Offense, OffenseKind};

/// A single text edit anchored to a span of the original source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub anchor: Span,
    pub op: EditOp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    /// Insert text immediately before the anchor span.
    InsertBefore(String),
    /// Insert text immediately after the anchor span.
    InsertAfter(String),
    /// Replace the anchor span with new text.
    Replace(String),
}

/// Ordered, non-overlapping edits implementing one fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPlan {
    pub edits: Vec<Edit>,
}

impl EditPlan {
    /// Reference applier, used by tests and simple harnesses. Edits are
    /// resolved against the original buffer and applied back-to-front so
    /// earlier offsets stay valid. Anchors must be byte offsets into
    /// `source` on character boundaries; an edit whose anchor is not (a
    /// stale or mismatched lowering) is skipped rather than raising.
    pub fn apply(&self, source: &str) -> String {
        let mut resolved: Vec<(usize, usize, &str)> = self
            .edits
            .iter()
            .map(|edit| match &edit.op {
                EditOp::InsertBefore(text) => (edit.anchor.start, edit.anchor.start, text.as_str()),
                EditOp::InsertAfter(text) => (edit.anchor.end, edit.anchor.end, text.as_str()),
                EditOp::Replace(text) => (edit.anchor.start, edit.anchor.end, text.as_str()),
            })
            .filter(|&(start, end, _)| {
                start <= end && source.is_char_boundary(start) && source.is_char_boundary(end)
            })
            .collect();
        resolved.sort_by_key(|&(start, end, _)| (start, end));

        let mut result = source.to_string();
        for &(start, end, text) in resolved.iter().rev() {
            result.replace_range(start..end, text);
        }
        result
    }
}

/// Plans fixes for offenses, when a safe mechanical rewrite exists.
#[derive(Debug)]
pub struct RewritePlanner<'a> {
    set: &'a DecoratorSet,
}

impl<'a> RewritePlanner<'a> {
    pub fn new(set: &'a DecoratorSet) -> Self {
        Self { set }
    }

    /// Two insertions wrapping the literal in the family's preferred
    /// decorator, or `None` when no safe fix exists.
    pub fn plan(&self, tree: &SyntaxTree, offense: &Offense) -> Option<EditPlan> {
        if offense.kind != OffenseKind::MissingDecoration {
            return None;
        }
        if !matches!(tree.kind(offense.node), NodeKind::StringLiteral { .. }) {
            return None;
        }
        if detectors::node_is_multiline(tree, offense.node) {
            return None;
        }

        let anchor = tree.span(offense.node);
        Some(EditPlan {
            edits: vec![
                Edit {
                    anchor,
                    op: EditOp::InsertBefore(format!("{}(", self.set.preferred_decorator())),
                },
                Edit {
                    anchor,
                    op: EditOp::InsertAfter(")".to_string()),
                },
            ],
        })
    }
}
