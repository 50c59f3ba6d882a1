//! Rule configuration record.
//!
//! The core does not locate or read configuration files; the host loader
//! hands it one `RuleConfig` per rule instance. Unknown sentence-type values
//! degrade to the family default instead of failing the run.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::decorators::Family;
use crate::sentence::SentenceType;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleConfig {
    /// Active decorator convention family.
    #[serde(default)]
    pub family: Family,
    /// Sentence strictness. `None` (or an unrecognized value) means the
    /// family's default applies.
    #[serde(
        default,
        alias = "EnforcedSentenceType",
        deserialize_with = "sentence_type_opt",
        serialize_with = "sentence_type_ser"
    )]
    pub enforced_sentence_type: Option<SentenceType>,
    /// Custom sentence regex; takes precedence over the strictness mode.
    #[serde(default, alias = "Regexp")]
    pub regexp: Option<String>,
    /// Skip bare sentences that are messages to raise-like calls.
    #[serde(default, alias = "IgnoreExceptions")]
    pub ignore_exceptions: bool,
    /// Suppress concatenation reports for messages that are already
    /// decorated. Off by default: concatenation defeats translation even
    /// inside a decorator.
    #[serde(default, alias = "TolerateConcatenation")]
    pub tolerate_concatenation: bool,
}

impl RuleConfig {
    pub fn for_family(family: Family) -> Self {
        Self {
            family,
            ..Self::default()
        }
    }

    /// Strictness in effect once the family default is applied.
    pub fn sentence_type(&self, set: &crate::decorators::DecoratorSet) -> SentenceType {
        self.enforced_sentence_type
            .unwrap_or_else(|| set.default_sentence_type())
    }
}

fn sentence_type_opt<'de, D>(deserializer: D) -> Result<Option<SentenceType>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(SentenceType::parse))
}

fn sentence_type_ser<S>(value: &Option<SentenceType>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(sentence_type) => serializer.serialize_some(&sentence_type.to_string()),
        None => serializer.serialize_none(),
    }
}

pub fn default_config_json() -> Result<String> {
    serde_json::to_string_pretty(&RuleConfig::default())
        .context("Failed to generate default config.")
}
