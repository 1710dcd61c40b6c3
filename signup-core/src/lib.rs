//! Rule-based validation engine for a registration form.
//!
//! The engine owns a fixed catalog of per-field rule chains and evaluates
//! them against immutable [`FormRecord`] snapshots. Each chain is ordered:
//! the first failing rule's message is the one surfaced, and later rules
//! in that chain are not evaluated. Whole-form evaluation never skips
//! fields, so callers can light up every error indicator at once.
//!
//! The engine is pure: no I/O, no interior mutability, no environment.
//! State-dependent checks (the optional email-uniqueness rule) are
//! injected as predicates at construction time.
//!
//! # Example
//!
//! ```
//! use signup_core::{FieldId, FormRecord, ValidationEngine};
//!
//! let engine = ValidationEngine::new();
//! let record = FormRecord::new("Ada Lovelace", "ada@example.com", "Secret1!", "Secret1!");
//!
//! assert!(engine.evaluate_all(&record).is_valid());
//! assert!(engine.evaluate_field(FieldId::Name, &record).is_valid());
//! ```

pub mod engine;
pub mod field;
pub mod outcome;
pub mod rule;

pub use engine::ValidationEngine;
pub use field::{FieldId, FormRecord};
pub use outcome::{FieldOutcome, FormOutcome};
pub use rule::{Rule, RuleSet};
