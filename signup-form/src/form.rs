//! The registration form: field state, event dispatch, and the
//! post-success reset.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use log::{info, warn};
use signup_core::{FieldId, FormRecord, ValidationEngine};

use crate::binding::FieldBinding;
use crate::events::FormEvent;
use crate::registry::{EmailRegistry, RegistryError};
use crate::reset::ResetTask;

/// Delay between a successful submission and the automatic form reset.
pub const RESET_DELAY: Duration = Duration::from_millis(3000);

/// State and event dispatch for the registration form.
///
/// Owns one [`FieldBinding`] per field, the validation engine (wired to
/// the email registry when one is supplied), the post-success welcome
/// message, and the pending deferred reset. All mutation goes through
/// [`RegistrationForm::handle`]; the engine itself stays pure.
pub struct RegistrationForm {
    engine: ValidationEngine,
    name: FieldBinding,
    email: FieldBinding,
    password: FieldBinding,
    confirm_password: FieldBinding,
    registry: Option<Arc<RwLock<EmailRegistry>>>,
    welcome: Arc<RwLock<Option<String>>>,
    reset: ResetTask,
    reset_delay: Duration,
}

impl RegistrationForm {
    /// Form without the email-uniqueness rule.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Form with the uniqueness rule backed by `registry`.
    ///
    /// The engine gets a lookup closure over a shared handle to the
    /// registry; accepted submissions are written back through the same
    /// handle, so a second submission of the same address is rejected.
    pub fn with_registry(registry: EmailRegistry) -> Self {
        Self::build(Some(Arc::new(RwLock::new(registry))))
    }

    /// Form backed by the registry at its default platform location.
    ///
    /// Returns `Ok(None)` when the platform data directory cannot be
    /// determined.
    pub fn with_default_registry() -> Result<Option<Self>, RegistryError> {
        match crate::paths::registry_file() {
            Some(path) => Ok(Some(Self::with_registry(EmailRegistry::load(path)?))),
            None => Ok(None),
        }
    }

    fn build(registry: Option<Arc<RwLock<EmailRegistry>>>) -> Self {
        let engine = match &registry {
            Some(registry) => {
                let lookup = Arc::clone(registry);
                ValidationEngine::with_registered_emails(move |email| {
                    lookup.read().map(|r| r.contains(email)).unwrap_or(false)
                })
            }
            None => ValidationEngine::new(),
        };

        Self {
            engine,
            name: FieldBinding::new(),
            email: FieldBinding::new(),
            password: FieldBinding::masked(),
            confirm_password: FieldBinding::masked(),
            registry,
            welcome: Arc::new(RwLock::new(None)),
            reset: ResetTask::new(),
            reset_delay: RESET_DELAY,
        }
    }

    /// Override the post-success reset delay.
    pub fn set_reset_delay(&mut self, delay: Duration) {
        self.reset_delay = delay;
    }

    /// Shared handle to one field's state.
    pub fn field(&self, field: FieldId) -> &FieldBinding {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Welcome message shown after a successful submission.
    pub fn welcome(&self) -> Option<String> {
        self.welcome
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Whether a post-success reset is still pending.
    pub fn reset_pending(&self) -> bool {
        self.reset.is_pending()
    }

    /// Atomic snapshot of all four live values.
    ///
    /// Built fresh before every evaluation call, so cross-field rules see
    /// the same values the per-field rules do.
    pub fn snapshot(&self) -> FormRecord {
        FormRecord::new(
            self.name.value(),
            self.email.value(),
            self.password.value(),
            self.confirm_password.value(),
        )
    }

    /// Dispatch one interaction event.
    ///
    /// | event | effect |
    /// |---|---|
    /// | `Input` | update the value, clear the field's error, cancel a pending reset |
    /// | `Blur` | validate that one field and update its visual state |
    /// | `Submit` | cancel a pending reset, validate everything, run the success path on a fully valid form |
    ///
    /// Must be called from within a tokio runtime: `Submit` may schedule
    /// the deferred reset.
    pub fn handle(&self, event: FormEvent) {
        match event {
            FormEvent::Input(field, value) => {
                // An edit invalidates a pending post-success reset.
                self.reset.cancel();
                self.field(field).set_value(value);
            }
            FormEvent::Blur(field) => {
                let record = self.snapshot();
                let outcome = self.engine.evaluate_field(field, &record);
                self.field(field).apply(&outcome);
            }
            FormEvent::Submit => {
                self.reset.cancel();
                self.submit();
            }
        }
    }

    fn submit(&self) {
        let record = self.snapshot();
        let outcome = self.engine.evaluate_all(&record);
        for (field, field_outcome) in outcome.iter() {
            self.field(field).apply(field_outcome);
        }
        if !outcome.is_valid() {
            return;
        }

        let name = record.name.trim().to_string();
        if let Ok(mut guard) = self.welcome.write() {
            *guard = Some(format!("Welcome, {name}!"));
        }
        info!("registration accepted for {name}");

        // A persistence failure must not take back an accepted submission.
        if let Some(registry) = &self.registry
            && let Ok(mut guard) = registry.write()
            && let Err(err) = guard.insert(&record.email)
        {
            warn!("failed to persist accepted email: {err}");
        }

        self.schedule_reset();
    }

    fn schedule_reset(&self) {
        let fields = [
            self.name.clone(),
            self.email.clone(),
            self.password.clone(),
            self.confirm_password.clone(),
        ];
        let welcome = Arc::clone(&self.welcome);
        self.reset.schedule(self.reset_delay, move || {
            for field in &fields {
                field.reset();
            }
            if let Ok(mut guard) = welcome.write() {
                *guard = None;
            }
        });
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}
