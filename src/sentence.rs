//! Sentence detector: does a string's text look like natural-language prose?
//!
//! This is a deliberately lightweight regex heuristic, not NLP. Three
//! strictness modes are available, plus a custom-regex override. Ruby-style
//! line anchors are reproduced with `(?m)` so that any one line of a
//! multi-line literal can qualify the whole literal.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

/// Starts with a capitalized word, contains interior whitespace, ends in
/// terminal punctuation.
const SENTENCE_PATTERN: &str = r"(?m)^\s*\p{Lu}\p{Alphabetic}*[ \t]+.*[.!?]$";
/// Either begins with a capitalized word and has a space, or ends in
/// terminal punctuation.
const FRAGMENTED_SENTENCE_PATTERN: &str =
    r"(?m)^\s*(\p{Lu}\p{Alphabetic}*[ \t]+.*)|(\p{Alphabetic}*[ \t]+.*[.!?])$";
/// Any run of letters followed by whitespace and more text.
const FRAGMENT_PATTERN: &str = r"(?m)^\s*\p{Alphabetic}*[ \t]+.*$";

static SENTENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SENTENCE_PATTERN).expect("sentence pattern is valid"));
static FRAGMENTED_SENTENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(FRAGMENTED_SENTENCE_PATTERN).expect("fragmented sentence pattern is valid")
});
static FRAGMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(FRAGMENT_PATTERN).expect("fragment pattern is valid"));

/// Strictness of the sentence heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SentenceType {
    #[default]
    Sentence,
    FragmentedSentence,
    Fragment,
}

impl SentenceType {
    /// Parse a configuration value. Returns `None` for unrecognized values
    /// so the caller can fall back to its default instead of failing the
    /// run.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "sentence" => Some(SentenceType::Sentence),
            "fragmented_sentence" => Some(SentenceType::FragmentedSentence),
            "fragment" => Some(SentenceType::Fragment),
            _ => None,
        }
    }

    fn regex(self) -> &'static Regex {
        match self {
            SentenceType::Sentence => &SENTENCE_RE,
            SentenceType::FragmentedSentence => &FRAGMENTED_SENTENCE_RE,
            SentenceType::Fragment => &FRAGMENT_RE,
        }
    }
}

impl std::fmt::Display for SentenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentenceType::Sentence => write!(f, "sentence"),
            SentenceType::FragmentedSentence => write!(f, "fragmented_sentence"),
            SentenceType::Fragment => write!(f, "fragment"),
        }
    }
}

/// Compiled sentence heuristic. Built once per analyzer, read-only after.
#[derive(Debug, Clone)]
pub struct SentenceClassifier {
    regex: Regex,
}

impl SentenceClassifier {
    pub fn new(sentence_type: SentenceType) -> Self {
        Self {
            regex: sentence_type.regex().clone(),
        }
    }

    /// Build from a strictness mode plus an optional custom override regex,
    /// which takes precedence when present. An invalid override is a
    /// configuration error surfaced at construction time.
    pub fn from_config(sentence_type: SentenceType, custom: Option<&str>) -> Result<Self> {
        match custom {
            Some(pattern) => {
                let regex = Regex::new(pattern)
                    .with_context(|| format!("Invalid sentence regexp: \"{pattern}\""))?;
                Ok(Self { regex })
            }
            None => Ok(Self::new(sentence_type)),
        }
    }

    /// True when `text` looks like translatable prose. One trailing line
    /// terminator is trimmed before matching.
    pub fn looks_like_sentence(&self, text: &str) -> bool {
        self.regex.is_match(chomp(text))
    }
}

/// Remove at most one trailing line terminator, like Ruby's `String#chomp`.
fn chomp(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .or_else(|| text.strip_suffix('\r'))
        .unwrap_or(text)
}
