//! Lint rules and the tree-walk driver.
//!
//! Each rule is a pure predicate over one node plus its neighborhood; the
//! [`Analyzer`] offers every node of a tree to every rule, depth-first, and
//! accumulates offenses. At most one primary offense is kept per target
//! node, so overlapping rules do not produce duplicate reports.
//!
//! ## Module Structure
//!
//! - `function_message`: messages to raise-like calls must be decorated
//! - `bare_sentence`: sentence-like literals outside any call context
//! - `decorated_formatting`: no interpolation or sprintf directives inside
//!   already-decorated strings

pub mod bare_sentence;
pub mod decorated_formatting;
pub mod function_message;

use std::collections::HashSet;

use anyhow::Result;
use enum_dispatch::enum_dispatch;

use crate::ast::{NodeId, SyntaxTree};
use crate::config::RuleConfig;
use crate::decorators::DecoratorSet;
use crate::offense::Offense;
use crate::rewrite::{EditPlan, RewritePlanner};
use crate::sentence::SentenceClassifier;

pub use bare_sentence::BareSentenceRule;
pub use decorated_formatting::{DecoratedInterpolationRule, DecoratedPercentRule};
pub use function_message::FunctionMessageRule;

/// Everything a rule may consult while checking one node.
pub struct RuleContext<'a> {
    pub tree: &'a SyntaxTree,
    pub decorators: &'a DecoratorSet,
    pub sentences: &'a SentenceClassifier,
    pub config: &'a RuleConfig,
}

/// A single lint rule.
#[enum_dispatch]
pub trait Rule {
    /// Inspect `node` and append any offenses found.
    fn check(&self, ctx: &RuleContext<'_>, node: NodeId, offenses: &mut Vec<Offense>);
}

/// The rule set, dispatched without boxing.
#[enum_dispatch(Rule)]
#[derive(Debug, Clone)]
pub enum AnyRule {
    FunctionMessage(FunctionMessageRule),
    BareSentence(BareSentenceRule),
    DecoratedInterpolation(DecoratedInterpolationRule),
    DecoratedPercent(DecoratedPercentRule),
}

/// One configured analysis pass: immutable after construction, reusable
/// across any number of trees (and so safe to share across threads if the
/// host parallelizes per file).
pub struct Analyzer {
    config: RuleConfig,
    decorators: DecoratorSet,
    sentences: SentenceClassifier,
    rules: Vec<AnyRule>,
}

impl Analyzer {
    /// Build an analyzer with the full rule set for the configured family.
    /// Fails only on an invalid custom sentence regexp.
    pub fn new(config: RuleConfig) -> Result<Self> {
        let decorators = DecoratorSet::for_family(config.family);
        let sentences = SentenceClassifier::from_config(
            config.sentence_type(&decorators),
            config.regexp.as_deref(),
        )?;
        Ok(Self {
            config,
            decorators,
            sentences,
            rules: vec![
                FunctionMessageRule.into(),
                BareSentenceRule.into(),
                DecoratedInterpolationRule.into(),
                DecoratedPercentRule.into(),
            ],
        })
    }

    pub fn decorators(&self) -> &DecoratorSet {
        &self.decorators
    }

    /// Run every rule over every node of the tree. Pure: no state survives
    /// the call, and any tree (however malformed its lowering) yields an
    /// offense list rather than an error.
    pub fn analyze(&self, tree: &SyntaxTree) -> Vec<Offense> {
        let ctx = RuleContext {
            tree,
            decorators: &self.decorators,
            sentences: &self.sentences,
            config: &self.config,
        };

        let mut offenses = Vec::new();
        for root in tree.roots() {
            for node in tree.subtree(root) {
                for rule in &self.rules {
                    rule.check(&ctx, node, &mut offenses);
                }
            }
        }

        // One primary offense per target node; the walk visits parents
        // before children, so a call-level rule wins over a literal-level
        // rule aimed at the same node.
        let mut seen: HashSet<NodeId> = HashSet::new();
        offenses.retain(|offense| seen.insert(offense.node));
        offenses
    }

    /// Plan the mechanical fix for an offense, when one exists.
    pub fn plan_fix(&self, tree: &SyntaxTree, offense: &Offense) -> Option<EditPlan> {
        RewritePlanner::new(&self.decorators).plan(tree, offense)
    }
}
