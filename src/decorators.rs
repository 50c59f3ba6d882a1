//! Decorator registry: which function names count as translation wrappers.
//!
//! One immutable [`DecoratorSet`] per convention family, built once at
//! startup and shared read-only by every rule. There is no mutable global
//! state; a set is plain data.

use serde::{Deserialize, Serialize};

use crate::sentence::SentenceType;

/// Translation-wrapper convention family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// GetText-style decorators: `_`, `n_`, `N_`.
    #[default]
    Gettext,
    /// Rails-style decorators: `t`, `t!`, `translate`, `translate!`.
    Rails,
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Family::Gettext => write!(f, "gettext"),
            Family::Rails => write!(f, "rails"),
        }
    }
}

const GETTEXT_DECORATORS: &[&str] = &["_", "n_", "N_"];
const RAILS_DECORATORS: &[&str] = &["t", "t!", "translate", "translate!"];

/// Functions whose argument is a user-facing message (exception raising).
const MESSAGE_FUNCTIONS: &[&str] = &["raise", "fail"];

/// Receivers that still count as the translation framework for the Rails
/// family. An implicit receiver is always accepted; `SomeOtherMod.t` is not.
const RAILS_RECEIVERS: &[&str] = &["I18n"];

/// Immutable per-family lookup tables.
#[derive(Debug, Clone)]
pub struct DecoratorSet {
    family: Family,
    decorators: &'static [&'static str],
    message_functions: &'static [&'static str],
    /// `None` means the receiver is not inspected (GetText); `Some` lists
    /// the explicit receivers accepted in addition to an implicit one.
    allowed_receivers: Option<&'static [&'static str]>,
    preferred_decorator: &'static str,
}

impl DecoratorSet {
    pub fn for_family(family: Family) -> Self {
        match family {
            Family::Gettext => Self {
                family,
                decorators: GETTEXT_DECORATORS,
                message_functions: MESSAGE_FUNCTIONS,
                allowed_receivers: None,
                preferred_decorator: "_",
            },
            Family::Rails => Self {
                family,
                decorators: RAILS_DECORATORS,
                message_functions: MESSAGE_FUNCTIONS,
                allowed_receivers: Some(RAILS_RECEIVERS),
                preferred_decorator: "t",
            },
        }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn decorators(&self) -> &[&str] {
        self.decorators
    }

    /// True when `callee` (with the given explicit receiver, if any) is a
    /// recognized translation wrapper.
    pub fn is_decorator(&self, callee: &str, receiver: Option<&str>) -> bool {
        if !self.decorators.contains(&callee) {
            return false;
        }
        match (self.allowed_receivers, receiver) {
            // Receiver not inspected for this family.
            (None, _) => true,
            // Implicit receiver is assumed correct.
            (Some(_), None) => true,
            (Some(allowed), Some(name)) => allowed.contains(&name),
        }
    }

    pub fn is_message_function(&self, callee: &str) -> bool {
        self.message_functions.contains(&callee)
    }

    /// Decorator used when planning a wrap-in-call fix.
    pub fn preferred_decorator(&self) -> &str {
        self.preferred_decorator
    }

    /// Sentence strictness applied when the configuration does not pick one.
    /// The GetText convention historically flags any multi-word string; the
    /// Rails convention only flags full sentences.
    pub fn default_sentence_type(&self) -> SentenceType {
        match self.family {
            Family::Gettext => SentenceType::Fragment,
            Family::Rails => SentenceType::Sentence,
        }
    }

    /// Noun used in formatting diagnostics: Rails decorators take lookup
    /// keys, GetText decorators take the message text itself.
    pub fn argument_noun(&self) -> &'static str {
        match self.family {
            Family::Gettext => "message string",
            Family::Rails => "message key string",
        }
    }
}
