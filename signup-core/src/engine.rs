//! The validation engine and its registration rule catalog.

use crate::field::{FieldId, FormRecord};
use crate::outcome::{FieldOutcome, FormOutcome};
use crate::rule::{Rule, RuleSet};

/// Type alias for the injected email-uniqueness predicate.
///
/// Returns true when the address is already registered.
type RegisteredEmails = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Characters the password catalog accepts as "special".
const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Evaluates the registration rule catalog against form snapshots.
///
/// The engine owns one ordered [`RuleSet`] per field, fixed at
/// construction. It performs no I/O and holds no mutable state: both
/// evaluation operations are pure functions of the supplied record.
pub struct ValidationEngine {
    rules: Vec<(FieldId, RuleSet)>,
}

impl ValidationEngine {
    /// Engine with the standard registration catalog.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Engine with the standard catalog plus the email-uniqueness rule.
    ///
    /// `is_registered` is supplied by the caller (typically a lookup into
    /// a durable registry of accepted addresses) and returns true when
    /// the address has already been registered. The engine itself never
    /// touches storage, so it stays constructible and testable without
    /// any environment.
    pub fn with_registered_emails<F>(is_registered: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::build(Some(Box::new(is_registered)))
    }

    fn build(is_registered: Option<RegisteredEmails>) -> Self {
        let mut email_rules = vec![
            Rule::required("Email is required"),
            Rule::email("Please enter a valid email address"),
        ];
        if let Some(is_registered) = is_registered {
            email_rules.push(Rule::value(
                move |v| !is_registered(v),
                "This email is already registered",
            ));
        }

        let rules = vec![
            (
                FieldId::Name,
                RuleSet::new(vec![
                    Rule::required("Name is required"),
                    Rule::min_length(2, "Name must be at least 2 characters long"),
                    Rule::pattern("^[A-Za-z ]+$", "Name can only contain letters and spaces"),
                ]),
            ),
            (FieldId::Email, RuleSet::new(email_rules)),
            (
                FieldId::Password,
                RuleSet::new(vec![
                    // Unlike name and email, the password pair is checked
                    // without trimming: whitespace is significant.
                    Rule::value(|v| !v.is_empty(), "Password is required"),
                    Rule::value(
                        |v| v.chars().count() >= 8,
                        "Password must be at least 8 characters long",
                    ),
                    Rule::value(
                        |v| v.chars().any(|c| c.is_ascii_uppercase()),
                        "Password must contain at least one uppercase letter",
                    ),
                    Rule::value(
                        |v| v.chars().any(|c| c.is_ascii_lowercase()),
                        "Password must contain at least one lowercase letter",
                    ),
                    Rule::value(
                        |v| v.chars().any(|c| c.is_ascii_digit()),
                        "Password must contain at least one number",
                    ),
                    Rule::value(
                        |v| v.chars().any(|c| SPECIAL_CHARS.contains(c)),
                        "Password must contain at least one special character",
                    ),
                ]),
            ),
            (
                FieldId::ConfirmPassword,
                RuleSet::new(vec![
                    Rule::value(|v| !v.is_empty(), "Please confirm your password"),
                    Rule::matches_field(FieldId::Password, "Passwords do not match"),
                ]),
            ),
        ];

        Self { rules }
    }

    fn rule_set(&self, field: FieldId) -> Option<&RuleSet> {
        self.rules
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, rules)| rules)
    }

    /// Evaluate one field's rule chain against a full snapshot.
    ///
    /// The whole record is required even when only one field is being
    /// checked, because cross-field rules read their sibling's value.
    /// The chain short-circuits: the outcome carries the first failing
    /// rule's message and later rules are not evaluated.
    pub fn evaluate_field(&self, field: FieldId, record: &FormRecord) -> FieldOutcome {
        match self.rule_set(field) {
            Some(rules) => rules.evaluate(record.value(field), Some(record)),
            None => FieldOutcome::Valid,
        }
    }

    /// Evaluate every field, in [`FieldId::ALL`] order.
    ///
    /// Later fields are still evaluated after an earlier one fails, so
    /// the caller can surface all error indicators at once. The aggregate
    /// result is valid only when every field is.
    pub fn evaluate_all(&self, record: &FormRecord) -> FormOutcome {
        FormOutcome::new(
            FieldId::ALL
                .iter()
                .map(|&field| (field, self.evaluate_field(field, record)))
                .collect(),
        )
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}
