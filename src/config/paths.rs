//! Path management for famplan
//!
//! Resolves where the settings file lives. Budget state is deliberately
//! ephemeral, so the only thing on disk is configuration.
//!
//! ## Path Resolution Order
//!
//! 1. `FAMPLAN_CONFIG_DIR` environment variable (if set)
//! 2. Platform config directory via `directories`
//!    (e.g. `~/.config/famplan` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::PlannerError;

/// Manages all paths used by famplan
#[derive(Debug, Clone)]
pub struct PlannerPaths {
    /// Base directory for famplan configuration
    base_dir: PathBuf,
}

impl PlannerPaths {
    /// Create a new PlannerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, PlannerError> {
        let base_dir = if let Ok(custom) = std::env::var("FAMPLAN_CONFIG_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "famplan").ok_or_else(|| {
                PlannerError::Config("Could not determine a configuration directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create PlannerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base configuration directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the configuration directory exists
    pub fn ensure_directories(&self) -> Result<(), PlannerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PlannerError::Io(format!("Failed to create config directory: {}", e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("famplan");
        let paths = PlannerPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();
        assert!(nested.exists());
    }
}
