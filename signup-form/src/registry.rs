//! Durable registry of previously accepted email addresses.

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or persisting the registry file.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Reading or writing the registry file failed.
    #[error("registry io error: {0}")]
    Io(#[from] std::io::Error),
    /// The registry file exists but is not valid JSON.
    #[error("registry file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// On-disk document format for the registry.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RegistryFile {
    emails: BTreeSet<String>,
}

/// Case-insensitive set of accepted email addresses.
///
/// Addresses are normalized (trimmed, lowercased) on the way in, so
/// membership checks are case-insensitive by construction. With a backing
/// path configured, every accepted insert is written straight through to
/// disk; the single-threaded event model means there are no concurrent
/// writers.
#[derive(Debug, Default)]
pub struct EmailRegistry {
    path: Option<PathBuf>,
    emails: BTreeSet<String>,
}

impl EmailRegistry {
    /// Registry with no backing file.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load the registry from `path`.
    ///
    /// A missing file is not an error: it yields an empty registry that
    /// will create the file on first insert.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, RegistryError> {
        let path = path.into();
        let emails = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str::<RegistryFile>(&contents)?.emails,
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeSet::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path: Some(path),
            emails,
        })
    }

    fn normalize(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// Whether `email` has already been accepted (case-insensitive).
    pub fn contains(&self, email: &str) -> bool {
        self.emails.contains(&Self::normalize(email))
    }

    /// Record an accepted address, persisting when a backing file is
    /// configured. Returns false if the address was already present.
    pub fn insert(&mut self, email: &str) -> Result<bool, RegistryError> {
        let added = self.emails.insert(Self::normalize(email));
        if added {
            self.save()?;
        }
        Ok(added)
    }

    /// Number of registered addresses.
    pub fn len(&self) -> usize {
        self.emails.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }

    /// The backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn save(&self) -> Result<(), RegistryError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = RegistryFile {
            emails: self.emails.clone(),
        };
        fs::write(path, serde_json::to_string_pretty(&file)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_registry_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("signup-registry-{}-{name}.json", std::process::id()))
    }

    #[test]
    fn test_membership_is_case_insensitive() {
        let mut registry = EmailRegistry::in_memory();
        registry.insert("Ada@Example.com").unwrap();

        assert!(registry.contains("ada@example.com"));
        assert!(registry.contains("ADA@EXAMPLE.COM"));
        assert!(registry.contains("  ada@example.com  "));
        assert!(!registry.contains("other@example.com"));
    }

    #[test]
    fn test_insert_deduplicates() {
        let mut registry = EmailRegistry::in_memory();
        assert!(registry.insert("a@b.com").unwrap());
        assert!(!registry.insert("A@B.COM").unwrap());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_missing_file_loads_as_empty() {
        let path = temp_registry_path("missing");
        let _ = fs::remove_file(&path);

        let registry = EmailRegistry::load(&path).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.path(), Some(path.as_path()));
    }

    #[test]
    fn test_round_trips_through_the_file() {
        let path = temp_registry_path("roundtrip");
        let _ = fs::remove_file(&path);

        let mut registry = EmailRegistry::load(&path).unwrap();
        registry.insert("Ada@Example.com").unwrap();
        registry.insert("grace@example.com").unwrap();

        let reloaded = EmailRegistry::load(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded.contains("ADA@example.com"));
        assert!(reloaded.contains("grace@example.com"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_is_a_parse_error() {
        let path = temp_registry_path("corrupt");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            EmailRegistry::load(&path),
            Err(RegistryError::Parse(_))
        ));

        let _ = fs::remove_file(&path);
    }
}
