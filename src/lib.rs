//! decorlint - untranslated-string lint engine
//!
//! decorlint scans a syntax tree for string literals that should pass
//! through a translation wrapper ("decorator") and reports precise,
//! categorized offenses: missing decoration, concatenated or multi-line
//! messages, embedded interpolation, and sprintf-style directives inside
//! already-decorated strings. For the one mechanically safe case (a bare,
//! single-line, undecorated literal) it plans a wrap-in-decorator edit
//! that is idempotent under re-analysis.
//!
//! The host toolchain owns everything around the core: it parses source
//! into the [`ast::SyntaxTree`] lowering, loads a [`config::RuleConfig`],
//! runs [`rules::Analyzer::analyze`] per tree, renders the offenses, and
//! applies any [`rewrite::EditPlan`] to the original source buffer.
//!
//! ## Module Structure
//!
//! - `ast`: syntax-node data model and capability queries
//! - `config`: rule configuration record
//! - `decorators`: per-family decorator registries
//! - `detectors`: offense predicates over subtrees
//! - `offense`: offense types for reporting
//! - `rewrite`: edit planning for auto-fixes
//! - `rules`: the lint rules and the analyzer driver
//! - `sentence`: sentence-likeness heuristic
//! - `walker`: decoration ancestry/descendant walks

pub mod ast;
pub mod config;
pub mod decorators;
pub mod detectors;
pub mod offense;
pub mod rewrite;
pub mod rules;
pub mod sentence;
pub mod walker;

pub use ast::{NodeId, NodeKind, Span, SyntaxTree};
pub use config::RuleConfig;
pub use decorators::{DecoratorSet, Family};
pub use offense::{Offense, OffenseKind, Severity};
pub use rewrite::{Edit, EditOp, EditPlan, RewritePlanner};
pub use rules::Analyzer;
pub use sentence::{SentenceClassifier, SentenceType};
