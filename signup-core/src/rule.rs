//! Declarative validation rules.
//!
//! A [`Rule`] is a (predicate, message) pair and a [`RuleSet`] is an
//! ordered chain of them. Chains are data, not branching code: each rule
//! is independently constructible and testable, and the chain's order is
//! the priority order for which failure message surfaces.

use std::fmt;

use regex::Regex;

use crate::field::{FieldId, FormRecord};
use crate::outcome::FieldOutcome;

/// Type alias for rule predicate closures.
///
/// The record parameter is optional context for rules that need another
/// field's value; value-only rules ignore it.
type Predicate = Box<dyn Fn(&str, Option<&FormRecord>) -> bool + Send + Sync>;

/// A single check applied to one field's value.
///
/// The predicate is pure and total; the message is the static text shown
/// when it returns false.
pub struct Rule {
    check: Predicate,
    message: String,
}

impl Rule {
    /// Rule from a predicate that sees the full record context.
    pub fn new<F>(check: F, message: impl Into<String>) -> Self
    where
        F: Fn(&str, Option<&FormRecord>) -> bool + Send + Sync + 'static,
    {
        Self {
            check: Box::new(check),
            message: message.into(),
        }
    }

    /// Rule from a predicate over the value alone.
    pub fn value<F>(check: F, message: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::new(move |v, _| check(v), message)
    }

    /// Require the value to be non-empty after trimming.
    pub fn required(message: impl Into<String>) -> Self {
        Self::value(|v| !v.trim().is_empty(), message)
    }

    /// Require a minimum character count on the trimmed value.
    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Self::value(move |v| v.trim().chars().count() >= min, message)
    }

    /// Require the trimmed value to match a regex pattern.
    pub fn pattern(pattern: &str, message: impl Into<String>) -> Self {
        let re = Regex::new(pattern).expect("Invalid regex pattern");
        Self::value(move |v| re.is_match(v.trim()), message)
    }

    /// Require a `local@domain.tld`-shaped address on the trimmed value.
    pub fn email(message: impl Into<String>) -> Self {
        Self::pattern(r"^[^\s@]+@[^\s@]+\.[^\s@]+$", message)
    }

    /// Require exact equality with another field's value.
    ///
    /// Comparison is character-for-character: no trimming, case-sensitive.
    /// Without record context the rule fails closed and reports its
    /// message rather than matching by default.
    pub fn matches_field(other: FieldId, message: impl Into<String>) -> Self {
        Self::new(
            move |v, record| record.is_some_and(|r| v == r.value(other)),
            message,
        )
    }

    /// Apply the predicate to a value with optional record context.
    pub fn check(&self, value: &str, record: Option<&FormRecord>) -> bool {
        (self.check)(value, record)
    }

    /// The message shown when the predicate fails.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("message", &self.message).finish()
    }
}

/// An ordered rule chain for one field.
///
/// Evaluation walks the chain in definition order and stops at the first
/// failure, so the surfaced message is always the highest-priority one.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Creates a rule set from an ordered list of rules.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Number of rules in the chain.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the chain has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate the chain against `value`, stopping at the first failure.
    ///
    /// An empty chain is vacuously valid.
    pub fn evaluate(&self, value: &str, record: Option<&FormRecord>) -> FieldOutcome {
        for rule in &self.rules {
            if !rule.check(value, record) {
                return FieldOutcome::Invalid(rule.message().to_string());
            }
        }
        FieldOutcome::Valid
    }
}
