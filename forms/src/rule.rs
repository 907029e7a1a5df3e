//! Validation rule kinds and their predicates.
//!
//! TRADE-OFFS
//! ==========
//! The email check is a fixed shape match, not RFC 5322. It rejects some
//! valid addresses (four-letter TLDs, `+` tags) and accepts some invalid
//! ones. Existing accounts were registered against this exact shape, so it
//! must not be loosened silently.

#[cfg(test)]
#[path = "rule_test.rs"]
mod rule_test;

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// `\w` is ASCII-only here (`unicode(false)`), i.e. `[A-Za-z0-9_]`.
const EMAIL_PATTERN: &str = r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(EMAIL_PATTERN)
        .unicode(false)
        .build()
        .expect("email pattern is a valid constant")
});

/// The closed set of rule kinds a field can be checked against.
///
/// `Regex`, `MinLength` and `MaxLength` are accepted but not evaluated yet;
/// they always pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleKind {
    /// Fails on the empty string. Whitespace counts as content.
    Required,
    /// Fails unless the value has the conservative `local@domain.tld` shape.
    Email,
    /// Declared pattern rule. Currently a no-op.
    Regex(String),
    /// Declared minimum length rule. Currently a no-op.
    MinLength(usize),
    /// Declared maximum length rule. Currently a no-op.
    MaxLength(usize),
}

impl RuleKind {
    /// Whether `value` fails this kind's predicate.
    #[must_use]
    pub fn fails(&self, value: &str) -> bool {
        match self {
            Self::Required => value.is_empty(),
            Self::Email => !is_email_shape(value),
            Self::Regex(_) | Self::MinLength(_) | Self::MaxLength(_) => false,
        }
    }
}

/// A rule kind paired with the message shown when it fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationRule {
    pub kind: RuleKind,
    pub message: String,
}

impl ValidationRule {
    pub fn new(kind: RuleKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn required(message: impl Into<String>) -> Self {
        Self::new(RuleKind::Required, message)
    }

    pub fn email(message: impl Into<String>) -> Self {
        Self::new(RuleKind::Email, message)
    }

    pub fn regex(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(RuleKind::Regex(pattern.into()), message)
    }

    pub fn min_length(len: usize, message: impl Into<String>) -> Self {
        Self::new(RuleKind::MinLength(len), message)
    }

    pub fn max_length(len: usize, message: impl Into<String>) -> Self {
        Self::new(RuleKind::MaxLength(len), message)
    }

    #[must_use]
    pub fn fails(&self, value: &str) -> bool {
        self.kind.fails(value)
    }
}

/// Message of the first rule in `rules` that `value` fails, if any.
///
/// Rules after the first failure are not evaluated.
#[must_use]
pub fn first_failure<'a>(rules: &'a [ValidationRule], value: &str) -> Option<&'a str> {
    rules
        .iter()
        .find(|rule| rule.fails(value))
        .map(|rule| rule.message.as_str())
}

/// Whether `value` matches the email shape accepted by the auth forms.
#[must_use]
pub fn is_email_shape(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}
