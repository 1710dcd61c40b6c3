//! Shared-handle state for one visible form field.

use std::sync::{Arc, RwLock};

use signup_core::FieldOutcome;

/// Visual validation state for a field's control and message region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VisualState {
    /// No validation has run since the last edit.
    #[default]
    Neutral,
    /// The last validation passed.
    Success,
    /// The last validation failed with this message.
    Error(String),
}

/// Internal state for a field binding.
#[derive(Debug, Default)]
struct BindingInner {
    /// Current text value.
    value: String,
    /// Visual success/error state.
    visual: VisualState,
    /// Whether the displayed value is masked (password fields).
    masked: bool,
}

/// Reactive state for one form field.
///
/// Cheap to clone; clones share the same underlying state, which lets the
/// deferred reset task address the same fields the event handlers do.
/// Editing the value clears any error markup without re-running
/// validation.
#[derive(Debug, Clone, Default)]
pub struct FieldBinding {
    inner: Arc<RwLock<BindingInner>>,
}

impl FieldBinding {
    /// Create a new empty binding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a binding whose displayed value is masked.
    pub fn masked() -> Self {
        Self {
            inner: Arc::new(RwLock::new(BindingInner {
                masked: true,
                ..Default::default()
            })),
        }
    }

    // -------------------------------------------------------------------
    // Value
    // -------------------------------------------------------------------

    /// The current raw text value. Validation always sees this, masked or
    /// not.
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Replace the text value and clear any error markup.
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
            guard.visual = VisualState::Neutral;
        }
    }

    /// Whether the value is empty.
    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.value.is_empty())
            .unwrap_or(true)
    }

    // -------------------------------------------------------------------
    // Visual state
    // -------------------------------------------------------------------

    /// The current visual state.
    pub fn visual(&self) -> VisualState {
        self.inner
            .read()
            .map(|guard| guard.visual.clone())
            .unwrap_or_default()
    }

    /// The current error message, if any.
    pub fn error(&self) -> Option<String> {
        match self.visual() {
            VisualState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Apply a validation outcome to the visual state.
    pub fn apply(&self, outcome: &FieldOutcome) {
        if let Ok(mut guard) = self.inner.write() {
            guard.visual = match outcome {
                FieldOutcome::Valid => VisualState::Success,
                FieldOutcome::Invalid(message) => VisualState::Error(message.clone()),
            };
        }
    }

    /// Clear the value and visual state.
    pub fn reset(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value.clear();
            guard.visual = VisualState::Neutral;
        }
    }

    // -------------------------------------------------------------------
    // Masking (presentational only)
    // -------------------------------------------------------------------

    /// Whether the displayed value is currently masked.
    pub fn is_masked(&self) -> bool {
        self.inner.read().map(|guard| guard.masked).unwrap_or(false)
    }

    /// Reveal the raw value (hold-to-show).
    pub fn reveal(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.masked = false;
        }
    }

    /// Re-mask the displayed value.
    pub fn mask(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.masked = true;
        }
    }

    /// The value as it should be displayed: one bullet per character when
    /// masked, the raw text otherwise.
    pub fn display_value(&self) -> String {
        self.inner
            .read()
            .map(|guard| {
                if guard.masked {
                    "\u{2022}".repeat(guard.value.chars().count())
                } else {
                    guard.value.clone()
                }
            })
            .unwrap_or_default()
    }
}
