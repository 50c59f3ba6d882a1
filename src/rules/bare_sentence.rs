//! Rule: sentence-like literals must be decorated, wherever they appear.
//!
//! Fires directly on string and composite-string nodes whose text looks
//! like prose (per the configured sentence heuristic), unless the literal
//! is a decorator argument, an index/subscript key, or (with the
//! ignore-exceptions option) the message of a raise-like call. Unlike the
//! function-message rule this one has no precedence chain: every qualifying
//! literal is reported.

use crate::ast::{NodeId, NodeKind};
use crate::offense::{Offense, OffenseKind};
use crate::rules::{Rule, RuleContext};
use crate::walker;

#[derive(Debug, Clone, Copy, Default)]
pub struct BareSentenceRule;

impl Rule for BareSentenceRule {
    fn check(&self, ctx: &RuleContext<'_>, node: NodeId, offenses: &mut Vec<Offense>) {
        let tree = ctx.tree;

        let is_sentence = match tree.kind(node) {
            NodeKind::StringLiteral { value } => {
                // Segments of a composite are reported through the
                // composite itself.
                if let Some(parent) = tree.parent(node)
                    && matches!(tree.kind(parent), NodeKind::CompositeString)
                {
                    return;
                }
                value
                    .as_deref()
                    .is_some_and(|text| ctx.sentences.looks_like_sentence(text))
            }
            // A composite is flagged when any of its literal segments looks
            // like a sentence; dynamic segments are never classified.
            NodeKind::CompositeString => tree.children(node).iter().any(|&segment| {
                tree.string_value(segment)
                    .is_some_and(|text| ctx.sentences.looks_like_sentence(text))
            }),
            _ => return,
        };
        if !is_sentence {
            return;
        }

        if walker::parent_is_decorator(tree, ctx.decorators, node) {
            return;
        }
        if walker::parent_is_indexer(tree, node) {
            return;
        }
        if ctx.config.ignore_exceptions && walker::within_raised_call(tree, ctx.decorators, node) {
            return;
        }

        offenses.push(Offense::new(
            tree,
            node,
            OffenseKind::MissingDecoration,
            "decorator is missing around sentence",
        ));
    }
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

    fn rails() -> Analyzer {
        Analyzer::new(RuleConfig::for_family(Family::Rails)).unwrap()
    }

    fn rails_ignoring_exceptions() -> Analyzer {
        let mut config = RuleConfig::for_family(Family::Rails);
        config.ignore_exceptions = true;
        Analyzer::new(config).unwrap()
    }

    fn standalone_literal(text: &str) -> (SyntaxTree, NodeId) {
        let mut tree = SyntaxTree::new();
        let lit = tree.leaf(NodeKind::string(text), span());
        (tree, lit)
    }

    #[test]
    fn test_bare_sentence_is_reported() {
        let (tree, lit) = standalone_literal("A sentence that is not decorated.");
        let offenses = rails().analyze(&tree);
        assert_eq!(offenses.len(), 1);
        assert_eq!(offenses[0].node, lit);
        assert_eq!(offenses[0].kind, OffenseKind::MissingDecoration);
        assert_eq!(offenses[0].message, "decorator is missing around sentence");
    }

    #[test]
    fn test_sentence_argument_to_ordinary_call_is_reported() {
        // thing("A sentence that is not decorated.")
        let mut tree = SyntaxTree::new();
        let lit = tree.leaf(NodeKind::string("A sentence that is not decorated."), span());
        tree.add(NodeKind::call("thing"), span(), vec![lit]);

        assert_eq!(rails().analyze(&tree).len(), 1);
    }

    #[test]
    fn test_non_sentences_are_ignored() {
        for text in ["keyword", "status.accepted", "result is good"] {
            let (tree, _) = standalone_literal(text);
            assert!(rails().analyze(&tree).is_empty(), "{text:?} should not report");
        }
    }

    #[test]
    fn test_non_utf8_literal_is_ignored() {
        let mut tree = SyntaxTree::new();
        tree.leaf(NodeKind::string_from_bytes(b"\xfd\xff A sentence. \xfd"), span());
        assert!(rails().analyze(&tree).is_empty());
    }

    #[test]
    fn test_decorated_sentence_is_accepted() {
        for decorator in ["t", "t!", "translate", "translate!"] {
            let mut tree = SyntaxTree::new();
            let lit = tree.leaf(NodeKind::string("A sentence that is decorated."), span());
            tree.add(NodeKind::call(decorator), span(), vec![lit]);
            assert!(rails().analyze(&tree).is_empty(), "{decorator} should decorate");
        }
    }

    #[test]
    fn test_i18n_receiver_is_accepted() {
        let mut tree = SyntaxTree::new();
        let lit = tree.leaf(NodeKind::string("A sentence that is decorated."), span());
        tree.add(NodeKind::method_call("I18n", "t"), span(), vec![lit]);
        assert!(rails().analyze(&tree).is_empty());
    }

    #[test]
    fn test_foreign_receiver_is_reported() {
        // SomeOtherMod.t('Some sentence like text.')
        let mut tree = SyntaxTree::new();
        let lit = tree.leaf(NodeKind::string("Some sentence like text."), span());
        tree.add(NodeKind::method_call("SomeOtherMod", "t"), span(), vec![lit]);

        let offenses = rails().analyze(&tree);
        assert_eq!(offenses.len(), 1);
        assert_eq!(offenses[0].node, lit);
    }

    #[test]
    fn test_index_key_is_never_reported() {
        // container["Some Key."]
        let mut tree = SyntaxTree::new();
        let container = tree.leaf(NodeKind::Other, span());
        let key = tree.leaf(NodeKind::string("Some Key."), span());
        tree.add(NodeKind::ArrayAccess, span(), vec![container, key]);

        assert!(rails().analyze(&tree).is_empty());
    }

    #[test]
    fn test_composite_with_sentence_segment_is_reported() {
        // "A sentence line one.\n" + dynamic tail, as one composite
        let mut tree = SyntaxTree::new();
        let head = tree.leaf(NodeKind::string("A sentence line one.\n"), span());
        let tail = tree.leaf(NodeKind::Other, span());
        let composite = tree.add(NodeKind::CompositeString, span(), vec![head, tail]);

        let offenses = rails().analyze(&tree);
        assert_eq!(offenses.len(), 1);
        assert_eq!(offenses[0].node, composite);
    }

    #[test]
    fn test_composite_segments_are_not_reported_individually() {
        let mut tree = SyntaxTree::new();
        let a = tree.leaf(NodeKind::string("A sentence line one."), span());
        let b = tree.leaf(NodeKind::string("A sentence line two."), span());
        let composite = tree.add(NodeKind::CompositeString, span(), vec![a, b]);

        let offenses = rails().analyze(&tree);
        assert_eq!(offenses.len(), 1);
        assert_eq!(offenses[0].node, composite);
    }

    #[test]
    fn test_decorated_composite_is_accepted() {
        let mut tree = SyntaxTree::new();
        let head = tree.leaf(NodeKind::string("A sentence line one.\n"), span());
        let tail = tree.leaf(NodeKind::string("line two"), span());
        let composite = tree.add(NodeKind::CompositeString, span(), vec![head, tail]);
        tree.add(NodeKind::call("t"), span(), vec![composite]);

        assert!(rails().analyze(&tree).is_empty());
    }

    #[test]
    fn test_dynamic_segments_are_never_classified() {
        // The dynamic part may well contain prose-looking text upstream;
        // only literal segments count.
        let mut tree = SyntaxTree::new();
        let head = tree.leaf(NodeKind::string("status."), span());
        let tail = tree.leaf(NodeKind::Other, span());
        tree.add(NodeKind::CompositeString, span(), vec![head, tail]);

        assert!(rails().analyze(&tree).is_empty());
    }

    #[test]
    fn test_ignore_exceptions_defers_raised_sentences() {
        for function in ["raise", "fail"] {
            // raise "A sentence that is not decorated." is left to the
            // function-message rule.
            let mut tree = SyntaxTree::new();
            let lit = tree.leaf(NodeKind::string("A sentence that is not decorated."), span());
            tree.add(NodeKind::call(function), span(), vec![lit]);

            let offenses = rails_ignoring_exceptions().analyze(&tree);
            assert_eq!(offenses.len(), 1);
            assert_eq!(offenses[0].node, lit);
            assert!(offenses[0].message.starts_with(&format!("'{function}' function")));
        }
    }

    #[test]
    fn test_ignore_exceptions_defers_constructed_exception() {
        // raise StandardError.new("A sentence that is not decorated.")
        let mut tree = SyntaxTree::new();
        let lit = tree.leaf(NodeKind::string("A sentence that is not decorated."), span());
        let ctor = tree.add(NodeKind::method_call("StandardError", "new"), span(), vec![lit]);
        tree.add(NodeKind::call("raise"), span(), vec![ctor]);

        let offenses = rails_ignoring_exceptions().analyze(&tree);
        assert_eq!(offenses.len(), 1);
        assert_eq!(offenses[0].node, ctor);
        assert!(offenses
            .iter()
            .all(|o| o.message != "decorator is missing around sentence"));
    }

    #[test]
    fn test_custom_regexp_overrides_sentence_heuristic() {
        let mut config = RuleConfig::for_family(Family::Rails);
        config.regexp = Some("^only-this-text$".to_string());
        let analyzer = Analyzer::new(config).unwrap();

        let (tree, _) = standalone_literal("only-this-text");
        assert_eq!(analyzer.analyze(&tree).len(), 1);

        let (tree, _) = standalone_literal("Any other string is fine now.");
        assert!(analyzer.analyze(&tree).is_empty());
    }

    #[test]
    fn test_gettext_family_flags_fragments() {
        let analyzer = Analyzer::new(RuleConfig::for_family(Family::Gettext)).unwrap();
        let (tree, _) = standalone_literal("a string");
        assert_eq!(analyzer.analyze(&tree).len(), 1);
    }
}
