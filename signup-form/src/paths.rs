//! Platform-specific locations for persisted form state.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "signup";
const APPLICATION: &str = "signup";

/// Get project directories, or None if the home directory cannot be
/// determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the data directory for persistent form state.
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Get the default location of the accepted-email registry file.
pub fn registry_file() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("registered_emails.json"))
}
