//! Form adapter around the `signup-core` validation engine.
//!
//! Translates discrete interaction events (input, blur, submit) into
//! engine calls and per-field visual state, owns the durable
//! accepted-email registry backing the optional uniqueness rule, and
//! schedules the cancellable post-success reset. Rendering is left to the
//! host surface: this crate exposes field values, visual states, and the
//! welcome message for it to draw.

pub mod binding;
pub mod events;
pub mod form;
pub mod paths;
pub mod registry;
pub mod reset;

pub use binding::{FieldBinding, VisualState};
pub use events::FormEvent;
pub use form::{RESET_DELAY, RegistrationForm};
pub use registry::{EmailRegistry, RegistryError};
pub use reset::ResetTask;
