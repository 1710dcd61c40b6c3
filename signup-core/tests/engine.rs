//! Behavioral tests for the registration rule catalog.

use signup_core::{FieldId, FieldOutcome, FormRecord, ValidationEngine};

fn valid_record() -> FormRecord {
    FormRecord::new("Ada Lovelace", "ada@example.com", "Abc12345!", "Abc12345!")
}

fn invalid(message: &str) -> FieldOutcome {
    FieldOutcome::Invalid(message.to_string())
}

#[test]
fn test_fully_valid_record_passes_every_field() {
    let engine = ValidationEngine::new();
    let record = valid_record();

    for field in FieldId::ALL {
        let outcome = engine.evaluate_field(field, &record);
        assert!(outcome.is_valid(), "{field} unexpectedly invalid");
        assert_eq!(outcome.message(), None);
    }
    assert!(engine.evaluate_all(&record).is_valid());
}

#[test]
fn test_first_failing_rule_wins_even_when_later_rules_also_fail() {
    let engine = ValidationEngine::new();
    // "7" fails both the length rule and the letters-and-spaces rule;
    // only the earlier length message may surface.
    let record = FormRecord::new("7", "ada@example.com", "Abc12345!", "Abc12345!");
    assert_eq!(
        engine.evaluate_field(FieldId::Name, &record),
        invalid("Name must be at least 2 characters long")
    );
}

#[test]
fn test_aggregate_fails_without_masking_other_fields() {
    let engine = ValidationEngine::new();
    let record = FormRecord::new("", "ada@example.com", "Abc12345!", "Abc12345!");

    let outcome = engine.evaluate_all(&record);
    assert!(!outcome.is_valid());
    assert_eq!(outcome.field(FieldId::Name), &invalid("Name is required"));

    // A failing field never short-circuits evaluation of its siblings.
    assert!(outcome.field(FieldId::Email).is_valid());
    assert!(outcome.field(FieldId::Password).is_valid());
    assert!(outcome.field(FieldId::ConfirmPassword).is_valid());
    assert!(engine.evaluate_field(FieldId::Email, &record).is_valid());
}

#[test]
fn test_confirm_password_is_case_and_whitespace_sensitive() {
    let engine = ValidationEngine::new();

    let mismatch = FormRecord::new("Ada", "ada@example.com", "Abc12345!", "abc12345!");
    assert_eq!(
        engine.evaluate_field(FieldId::ConfirmPassword, &mismatch),
        invalid("Passwords do not match")
    );

    let padded = FormRecord::new("Ada", "ada@example.com", "Abc12345!", "Abc12345! ");
    assert_eq!(
        engine.evaluate_field(FieldId::ConfirmPassword, &padded),
        invalid("Passwords do not match")
    );

    let exact = valid_record();
    assert!(
        engine
            .evaluate_field(FieldId::ConfirmPassword, &exact)
            .is_valid()
    );
}

#[test]
fn test_name_boundaries() {
    let engine = ValidationEngine::new();
    let record = |name: &str| FormRecord::new(name, "ada@example.com", "Abc12345!", "Abc12345!");

    assert!(engine.evaluate_field(FieldId::Name, &record("Al")).is_valid());
    assert_eq!(
        engine.evaluate_field(FieldId::Name, &record("A")),
        invalid("Name must be at least 2 characters long")
    );
    assert_eq!(
        engine.evaluate_field(FieldId::Name, &record("Anna3")),
        invalid("Name can only contain letters and spaces")
    );
}

#[test]
fn test_password_character_class_ladder() {
    let engine = ValidationEngine::new();
    let record = |pw: &str| FormRecord::new("Ada", "ada@example.com", pw, pw);
    let check = |pw: &str| engine.evaluate_field(FieldId::Password, &record(pw));

    assert_eq!(check(""), invalid("Password is required"));
    assert_eq!(
        check("Pass1!"),
        invalid("Password must be at least 8 characters long")
    );
    assert_eq!(
        check("password"),
        invalid("Password must contain at least one uppercase letter")
    );
    assert_eq!(
        check("PASSWORD"),
        invalid("Password must contain at least one lowercase letter")
    );
    assert_eq!(
        check("Password"),
        invalid("Password must contain at least one number")
    );
    assert_eq!(
        check("Password1"),
        invalid("Password must contain at least one special character")
    );
    assert!(check("Password1!").is_valid());
}

#[test]
fn test_email_required_precedes_format() {
    let engine = ValidationEngine::new();
    let record = |email: &str| FormRecord::new("Ada", email, "Abc12345!", "Abc12345!");

    assert!(engine.evaluate_field(FieldId::Email, &record("a@b.com")).is_valid());
    assert_eq!(
        engine.evaluate_field(FieldId::Email, &record("a@b")),
        invalid("Please enter a valid email address")
    );
    assert_eq!(
        engine.evaluate_field(FieldId::Email, &record("")),
        invalid("Email is required")
    );
    assert_eq!(
        engine.evaluate_field(FieldId::Email, &record("   ")),
        invalid("Email is required")
    );
    assert_eq!(
        engine.evaluate_field(FieldId::Email, &record("a b@c.com")),
        invalid("Please enter a valid email address")
    );
}

#[test]
fn test_injected_uniqueness_rule_runs_after_format() {
    let engine =
        ValidationEngine::with_registered_emails(|email| email.eq_ignore_ascii_case("x@y.com"));
    let record = |email: &str| FormRecord::new("Ada", email, "Abc12345!", "Abc12345!");

    assert_eq!(
        engine.evaluate_field(FieldId::Email, &record("X@Y.com")),
        invalid("This email is already registered")
    );
    assert!(engine.evaluate_field(FieldId::Email, &record("new@y.com")).is_valid());

    // Format failures outrank the uniqueness rule.
    assert_eq!(
        engine.evaluate_field(FieldId::Email, &record("x@y")),
        invalid("Please enter a valid email address")
    );
}

#[test]
fn test_whitespace_password_is_not_reported_as_missing() {
    let engine = ValidationEngine::new();
    let record = FormRecord::new("Ada", "ada@example.com", "        ", "        ");
    // Eight spaces pass the presence and length rules and fall through to
    // the character-class ladder.
    assert_eq!(
        engine.evaluate_field(FieldId::Password, &record),
        invalid("Password must contain at least one uppercase letter")
    );
}
