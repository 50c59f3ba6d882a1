//! Offense detector predicates.
//!
//! Each detector is a pure function over a candidate node's subtree. A node
//! lacking a capability (no callee, no text content) simply never matches;
//! detectors return false instead of failing on malformed input.

use std::sync::LazyLock;

use regex::Regex;

use crate::ast::{NodeId, NodeKind, SyntaxTree};

/// sprintf-style directive: optional flag, width and precision digits,
/// then one of the recognized format letters.
static PERCENT_FORMAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%[-+]?[0-9]*(\.[0-9]*)?[bBdiouxXeEfgGaAcps]")
        .expect("percent format pattern is valid")
});

/// Literal `#{...}` marker left inside string content.
static INTERPOLATION_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\{[^}]+\}").expect("interpolation marker pattern is valid"));

/// True when the subtree contains any string or composite-string literal.
pub fn contains_string(tree: &SyntaxTree, node: NodeId) -> bool {
    tree.subtree(node).any(|id| {
        matches!(
            tree.kind(id),
            NodeKind::StringLiteral { .. } | NodeKind::CompositeString
        )
    })
}

/// Concatenation offense: a `+` operator somewhere in the subtree *and* a
/// string literal among the subtree's nodes. Both are required; adding
/// non-strings is fine.
pub fn concatenation(tree: &SyntaxTree, node: NodeId) -> bool {
    let has_plus = tree
        .subtree(node)
        .any(|id| matches!(tree.kind(id), NodeKind::BinaryOp { operator } if operator == "+"));
    has_plus && contains_string(tree, node)
}

/// Whether the node's source covers more than one line, preferring the
/// host's own verdict and falling back to scanning subtree literal content
/// for line terminators.
pub fn node_is_multiline(tree: &SyntaxTree, node: NodeId) -> bool {
    if let Some(flag) = tree.multiline_hint(node) {
        return flag;
    }
    tree.subtree(node).any(|id| {
        tree.string_value(id)
            .is_some_and(|text| text.contains('\n') || text.contains('\r'))
    })
}

/// Multiline offense: the node spans more than one line and carries string
/// content.
pub fn multiline(tree: &SyntaxTree, node: NodeId) -> bool {
    node_is_multiline(tree, node) && contains_string(tree, node)
}

/// Structural interpolation: the subtree contains a composite string with
/// at least one non-literal segment, i.e. an embedded expression the
/// translator would never see.
pub fn structural_interpolation(tree: &SyntaxTree, node: NodeId) -> bool {
    tree.subtree(node).any(|id| {
        matches!(tree.kind(id), NodeKind::CompositeString)
            && tree
                .children(id)
                .iter()
                .any(|&seg| !matches!(tree.kind(seg), NodeKind::StringLiteral { .. }))
    })
}

/// Content-level interpolation: some literal in the subtree still carries a
/// raw `#{...}` marker in its text.
pub fn interpolation_marker(tree: &SyntaxTree, node: NodeId) -> bool {
    any_literal_content(tree, node, |text| INTERPOLATION_MARKER_RE.is_match(text))
}

/// Percent-format offense: some literal in the subtree contains a
/// sprintf-style directive. Named placeholders (`%{detail}`) do not match.
pub fn percent_format(tree: &SyntaxTree, node: NodeId) -> bool {
    any_literal_content(tree, node, |text| PERCENT_FORMAT_RE.is_match(text))
}

fn any_literal_content(
    tree: &SyntaxTree,
    node: NodeId,
    predicate: impl Fn(&str) -> bool,
) -> bool {
    tree.subtree(node)
        .any(|id| tree.string_value(id).is_some_and(&predicate))
}
