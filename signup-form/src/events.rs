//! Interaction events forwarded to the form.

use signup_core::FieldId;

/// A discrete interaction event from the host surface.
///
/// Events arrive one at a time and are mapped onto engine operations and
/// visual-state updates by [`RegistrationForm::handle`].
///
/// [`RegistrationForm::handle`]: crate::RegistrationForm::handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The user edited a field's text.
    Input(FieldId, String),
    /// Focus left a field.
    Blur(FieldId),
    /// The form was submitted.
    Submit,
}
