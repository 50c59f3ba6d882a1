//! Rules: strings inside a decorator call must carry no inline formatting.
//!
//! Once a string is decorated, embedded `#{...}` interpolation and
//! sprintf-style `%` directives are translation anti-patterns: translators
//! see a moving target and positional directives cannot be reordered. The
//! fix is a named placeholder (`%{detail}`) supplied outside the decorator,
//! which neither rule objects to.
//!
//! Both rules scan every argument of the decorator call (concatenations and
//! nested structures included) but report a single offense against the
//! first argument's span.

use crate::ast::NodeId;
use crate::detectors;
use crate::offense::{Offense, OffenseKind};
use crate::rules::{Rule, RuleContext};

/// No `#{...}` interpolation inside decorated strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecoratedInterpolationRule;

impl Rule for DecoratedInterpolationRule {
    fn check(&self, ctx: &RuleContext<'_>, node: NodeId, offenses: &mut Vec<Offense>) {
        let Some(args) = decorator_arguments(ctx, node) else {
            return;
        };

        let offends = args.iter().any(|&arg| {
            detectors::structural_interpolation(ctx.tree, arg)
                || detectors::interpolation_marker(ctx.tree, arg)
        });
        if offends {
            let callee = ctx.tree.callee_name(node).unwrap_or_default();
            offenses.push(Offense::new(
                ctx.tree,
                args[0],
                OffenseKind::Interpolation,
                format!(
                    "'{callee}' function, {} should not contain #{{}} formatting",
                    ctx.decorators.argument_noun()
                ),
            ));
        }
    }
}

/// No sprintf-style directives inside decorated strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecoratedPercentRule;

impl Rule for DecoratedPercentRule {
    fn check(&self, ctx: &RuleContext<'_>, node: NodeId, offenses: &mut Vec<Offense>) {
        let Some(args) = decorator_arguments(ctx, node) else {
            return;
        };

        if args.iter().any(|&arg| detectors::percent_format(ctx.tree, arg)) {
            let callee = ctx.tree.callee_name(node).unwrap_or_default();
            offenses.push(Offense::new(
                ctx.tree,
                args[0],
                OffenseKind::PercentFormat,
                format!(
                    "'{callee}' function, {} should not contain sprintf style formatting (ie %s)",
                    ctx.decorators.argument_noun()
                ),
            ));
        }
    }
}

/// The argument list when `node` is a recognized decorator call with at
/// least one argument, `None` otherwise.
fn decorator_arguments<'a>(ctx: &RuleContext<'a>, node: NodeId) -> Option<&'a [NodeId]> {
    let callee = ctx.tree.callee_name(node)?;
    if !ctx
        .decorators
        .is_decorator(callee, ctx.tree.receiver_name(node))
    {
        return None;
    }
    let args = ctx.tree.arguments(node);
    if args.is_empty() { None } else { Some(args) }
}

#[cfg(test)]
mod tests {
    use crate::ast::{NodeId, NodeKind, Span, SyntaxTree};
    use crate::config::RuleConfig;
    use crate::decorators::Family;
    use crate::offense::OffenseKind;
    use crate::rules::Analyzer;

    fn span() -> Span {
        Span::new(0, 0)
    }

    fn gettext() -> Analyzer {
        Analyzer::new(RuleConfig::for_family(Family::Gettext)).unwrap()
    }

    fn rails() -> Analyzer {
        Analyzer::new(RuleConfig::for_family(Family::Rails)).unwrap()
    }

    fn decorated_literal(decorator: &str, text: &str) -> (SyntaxTree, NodeId) {
        let mut tree = SyntaxTree::new();
        let lit = tree.leaf(NodeKind::string(text), Span::new(3, 3 + text.len() + 2));
        tree.add(NodeKind::call(decorator), span(), vec![lit]);
        (tree, lit)
    }

    #[test]
    fn test_percent_directive_in_each_decorator() {
        for decorator in ["_", "n_", "N_"] {
            let (tree, lit) = decorated_literal(decorator, "a %s string");
            let offenses = gettext().analyze(&tree);
            assert_eq!(offenses.len(), 1, "{decorator} should report");
            assert_eq!(offenses[0].node, lit);
            assert_eq!(offenses[0].kind, OffenseKind::PercentFormat);
            assert!(offenses[0]
                .message
                .contains("should not contain sprintf style formatting"));
        }
    }

    #[test]
    fn test_percent_directive_for_every_format_letter() {
        for letter in [
            'b', 'B', 'd', 'i', 'o', 'u', 'x', 'X', 'e', 'E', 'f', 'g', 'G', 'a', 'A', 'c', 'p',
            's',
        ] {
            let (tree, _) = decorated_literal("_", &format!("a %{letter} string"));
            let offenses = gettext().analyze(&tree);
            assert_eq!(offenses.len(), 1, "%{letter} should report");
            assert_eq!(offenses[0].kind, OffenseKind::PercentFormat);
        }
    }

    #[test]
    fn test_named_placeholders_are_accepted() {
        let (tree, _) =
            decorated_literal("_", "could not change to group %{group}: %{detail}");
        assert!(gettext().analyze(&tree).is_empty());
    }

    #[test]
    fn test_degenerate_directive_is_accepted() {
        let (tree, _) = decorated_literal("_", "a %-5.2.s thing s string");
        assert!(gettext().analyze(&tree).is_empty());
    }

    #[test]
    fn test_undecorated_percent_string_is_not_this_rules_business() {
        // thing("a %s that is not decorated")
        let mut tree = SyntaxTree::new();
        let lit = tree.leaf(NodeKind::string("a %s that is not decorated"), span());
        tree.add(NodeKind::call("thing"), span(), vec![lit]);

        let offenses = gettext().analyze(&tree);
        // The bare-sentence rule may still claim the literal, but never as
        // a percent-format offense.
        assert!(offenses.iter().all(|o| o.kind != OffenseKind::PercentFormat));
    }

    #[test]
    fn test_percent_in_concatenated_argument() {
        // _("a-string" + "second-string-with-%d")
        let mut tree = SyntaxTree::new();
        let a = tree.leaf(NodeKind::string("a-string"), span());
        let b = tree.leaf(NodeKind::string("second-string-with-%d"), span());
        let plus = tree.add(NodeKind::binary_op("+"), span(), vec![a, b]);
        tree.add(NodeKind::call("_"), span(), vec![plus]);

        let offenses = gettext().analyze(&tree);
        assert_eq!(offenses.len(), 1);
        assert_eq!(offenses[0].kind, OffenseKind::PercentFormat);
        assert_eq!(offenses[0].node, plus);
    }

    #[test]
    fn test_interpolation_marker_in_decorated_string() {
        // decorate("a #{x}"), marker kept in content by the host.
        let (tree, lit) = decorated_literal("_", "a #{x}");
        let offenses = gettext().analyze(&tree);
        assert_eq!(offenses.len(), 1);
        assert_eq!(offenses[0].node, lit);
        assert_eq!(offenses[0].kind, OffenseKind::Interpolation);
        assert!(offenses[0].message.contains("should not contain #{} formatting"));
    }

    #[test]
    fn test_structural_interpolation_in_decorated_string() {
        // t("status.#{status_string}") lowered to a composite argument.
        let mut tree = SyntaxTree::new();
        let head = tree.leaf(NodeKind::string("status."), span());
        let dynamic = tree.leaf(NodeKind::Other, span());
        let composite = tree.add(NodeKind::CompositeString, span(), vec![head, dynamic]);
        tree.add(NodeKind::call("t"), span(), vec![composite]);

        let offenses = rails().analyze(&tree);
        assert_eq!(offenses.len(), 1);
        assert_eq!(offenses[0].kind, OffenseKind::Interpolation);
        assert!(offenses[0]
            .message
            .contains("message key string should not contain #{} formatting"));
    }

    #[test]
    fn test_clean_decorated_strings_are_accepted() {
        for text in ["a string", "status.accepted"] {
            let (tree, _) = decorated_literal("t", text);
            assert!(rails().analyze(&tree).is_empty(), "{text:?} should pass");
        }
    }

    #[test]
    fn test_interpolation_reports_against_first_argument() {
        // t("status.ok", note: "see #{x}") reports on the first argument.
        let mut tree = SyntaxTree::new();
        let first = tree.leaf(NodeKind::string("status.ok"), span());
        let second = tree.leaf(NodeKind::string("see #{x}"), span());
        let _call = tree.add(NodeKind::call("t"), span(), vec![first, second]);

        let offenses = rails().analyze(&tree);
        assert_eq!(offenses.len(), 1);
        assert_eq!(offenses[0].node, first);
        assert_eq!(offenses[0].kind, OffenseKind::Interpolation);
    }

    #[test]
    fn test_foreign_receiver_is_not_a_decorator() {
        // SomeOtherMod.t("a #{x}") is not this rule's concern.
        let mut tree = SyntaxTree::new();
        let lit = tree.leaf(NodeKind::string("a #{x}"), span());
        tree.add(NodeKind::method_call("SomeOtherMod", "t"), span(), vec![lit]);

        let offenses = rails().analyze(&tree);
        assert!(offenses.iter().all(|o| o.kind != OffenseKind::Interpolation));
    }
}
