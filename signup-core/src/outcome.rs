//! Evaluation outcomes for single fields and for the whole form.

use crate::field::FieldId;

/// Result of evaluating one field's rule chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldOutcome {
    /// Every rule in the chain passed.
    #[default]
    Valid,
    /// The message of the first failing rule; later rules in the chain
    /// were not evaluated.
    Invalid(String),
}

impl FieldOutcome {
    /// Whether the field passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Whether the field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// The failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(message) => Some(message),
        }
    }
}

static VALID: FieldOutcome = FieldOutcome::Valid;

/// Per-field outcomes for a whole-form evaluation, in field order.
///
/// Keeps every field's result rather than just the first failure, so the
/// caller can render all error indicators at once. The aggregate
/// [`FormOutcome::is_valid`] gates submission.
#[derive(Debug, Clone)]
pub struct FormOutcome {
    outcomes: Vec<(FieldId, FieldOutcome)>,
}

impl FormOutcome {
    pub(crate) fn new(outcomes: Vec<(FieldId, FieldOutcome)>) -> Self {
        Self { outcomes }
    }

    /// True only if every field's outcome is valid.
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(|(_, outcome)| outcome.is_valid())
    }

    /// The outcome for one field.
    pub fn field(&self, field: FieldId) -> &FieldOutcome {
        self.outcomes
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, outcome)| outcome)
            .unwrap_or(&VALID)
    }

    /// All per-field outcomes, in field order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &FieldOutcome)> {
        self.outcomes.iter().map(|(field, outcome)| (*field, outcome))
    }

    /// The failing fields and their messages, in field order.
    pub fn errors(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.iter()
            .filter_map(|(field, outcome)| outcome.message().map(|m| (field, m)))
    }

    /// The first failing field and its message, if any.
    pub fn first_error(&self) -> Option<(FieldId, &str)> {
        self.errors().next()
    }
}
