//! Decoration walker: is a node already wrapped by a translation call?
//!
//! The descendant search is deliberately permissive: a decorator anywhere in
//! the subtree silences the rule, trading false negatives for fewer false
//! positives on composite expressions whose sub-calls are already decorated.
//! Ancestor checks only ever look at the direct parent, except for the
//! bounded `Type.new(...)` unwrap used by the ignore-exceptions option.

use crate::ast::{NodeId, NodeKind, SyntaxTree};
use crate::decorators::DecoratorSet;

/// Depth cap for the constructor unwrap in [`within_raised_call`].
/// Constructors do not nest indefinitely in practice; anything deeper is
/// treated as not ignorable.
pub const MAX_CONSTRUCTOR_UNWRAP: usize = 32;

/// Depth-first "exists a decorated node" search over `node` and its
/// descendants.
pub fn already_decorated(tree: &SyntaxTree, set: &DecoratorSet, node: NodeId) -> bool {
    if let Some(callee) = tree.callee_name(node)
        && set.is_decorator(callee, tree.receiver_name(node))
    {
        return true;
    }
    tree.children(node)
        .iter()
        .any(|&child| already_decorated(tree, set, child))
}

/// True when the node's direct parent is a recognized decorator call.
pub fn parent_is_decorator(tree: &SyntaxTree, set: &DecoratorSet, node: NodeId) -> bool {
    match tree.parent(node) {
        Some(parent) => match tree.callee_name(parent) {
            Some(callee) => set.is_decorator(callee, tree.receiver_name(parent)),
            None => false,
        },
        None => false,
    }
}

/// True when the node is used as an index/subscript key
/// (`container["key"]`): such strings are lookup keys, never prose.
pub fn parent_is_indexer(tree: &SyntaxTree, node: NodeId) -> bool {
    match tree.parent(node) {
        Some(parent) => matches!(tree.kind(parent), NodeKind::ArrayAccess),
        None => false,
    }
}

/// True when the node is the message of a raise-like call, unwrapping
/// through `Type.new(...)` constructor wrappers (an exception instantiated
/// manually is still considered "raised").
pub fn within_raised_call(tree: &SyntaxTree, set: &DecoratorSet, node: NodeId) -> bool {
    let mut current = node;
    for _ in 0..MAX_CONSTRUCTOR_UNWRAP {
        let Some(parent) = tree.parent(current) else {
            return false;
        };
        match tree.callee_name(parent) {
            Some(name) if set.is_message_function(name) => return true,
            Some("new") => current = parent,
            _ => return false,
        }
    }
    false
}
