//! Field identifiers and form snapshots.

use std::fmt;

/// Identifier for one of the registration form's fields.
///
/// The set is closed: the engine is built for exactly these four fields,
/// and [`FieldId::ALL`] fixes their evaluation and display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldId {
    /// All fields, in evaluation order.
    pub const ALL: [FieldId; 4] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Password,
        FieldId::ConfirmPassword,
    ];

    /// Stable snake_case name, for logging and error reporting.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirm_password",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable snapshot of every field's current value.
///
/// Always fully populated by construction, so [`FormRecord::value`] is
/// total. Callers build a fresh record from live values before each
/// evaluation call; cross-field rules (confirm password) read their
/// sibling's value out of the same snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormRecord {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormRecord {
    /// Creates a snapshot from the four current field values.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Returns the value for `field`.
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm_password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_is_fixed() {
        assert_eq!(
            FieldId::ALL,
            [
                FieldId::Name,
                FieldId::Email,
                FieldId::Password,
                FieldId::ConfirmPassword,
            ]
        );
    }

    #[test]
    fn test_record_lookup_is_total() {
        let record = FormRecord::new("a", "b", "c", "d");
        let values: Vec<&str> = FieldId::ALL.iter().map(|&f| record.value(f)).collect();
        assert_eq!(values, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_field_display() {
        assert_eq!(FieldId::ConfirmPassword.to_string(), "confirm_password");
    }
}
