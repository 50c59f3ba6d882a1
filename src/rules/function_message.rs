//! Rule: messages to raise-like calls must be decorated.
//!
//! Fires on calls whose callee is one of the message-raising functions
//! (`raise`, `fail`). The message argument is the first argument, or the
//! second when the first is a constant (exception type) reference. The
//! detectors run in a fixed order and only the first match is reported, so
//! each offending call yields exactly one offense.

use crate::ast::{NodeId, NodeKind};
use crate::detectors;
use crate::offense::{Offense, OffenseKind};
use crate::rules::{Rule, RuleContext};
use crate::walker;

#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionMessageRule;

impl Rule for FunctionMessageRule {
    fn check(&self, ctx: &RuleContext<'_>, node: NodeId, offenses: &mut Vec<Offense>) {
        let tree = ctx.tree;
        let Some(callee) = tree.callee_name(node) else {
            return;
        };
        if !ctx.decorators.is_message_function(callee) {
            return;
        }

        let args = tree.arguments(node);
        if args.is_empty() {
            return;
        }

        // `raise ErrorType, "message"` selects the second argument.
        let constant_with_message =
            matches!(tree.kind(args[0]), NodeKind::ConstantRef { .. }) && args.len() > 1;
        if !constant_with_message && !detectors::contains_string(tree, args[0]) {
            return;
        }
        let message = if constant_with_message { args[1] } else { args[0] };

        if walker::already_decorated(tree, ctx.decorators, node) {
            // Decoration does not excuse concatenation: a concatenated
            // message defeats translation either way.
            if !ctx.config.tolerate_concatenation && detectors::concatenation(tree, message) {
                offenses.push(Offense::new(
                    tree,
                    message,
                    OffenseKind::Concatenation,
                    format!("'{callee}' function, message should not be a concatenated string"),
                ));
            }
            return;
        }

        // First match wins.
        let (kind, text) = if matches!(tree.kind(message), NodeKind::StringLiteral { .. })
            && !detectors::node_is_multiline(tree, message)
        {
            (
                OffenseKind::MissingDecoration,
                format!(
                    "'{callee}' function, message string should be decorated \
                     (use a decorator around the message)"
                ),
            )
        } else if detectors::multiline(tree, message) {
            (
                OffenseKind::Multiline,
                format!("'{callee}' function, message should not be a multi-line string"),
            )
        } else if detectors::concatenation(tree, message) {
            (
                OffenseKind::Concatenation,
                format!("'{callee}' function, message should not be a concatenated string"),
            )
        } else if detectors::structural_interpolation(tree, message) {
            (
                OffenseKind::Interpolation,
                format!("'{callee}' function, message should use correctly formatted interpolation"),
            )
        } else {
            (
                OffenseKind::MissingDecoration,
                format!("'{callee}' function, message should be decorated"),
            )
        };

        offenses.push(Offense::new(tree, message, kind, text));
    }
}
