//! Path management for farmdesk
//!
//! ## Path Resolution Order
//!
//! 1. `FARMDESK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/farmdesk` or `~/.config/farmdesk`
//! 3. Windows: `%APPDATA%\farmdesk`

use std::path::PathBuf;

use crate::error::FarmdeskError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "FARMDESK_DATA_DIR";

/// Manages all paths used by farmdesk
#[derive(Debug, Clone)]
pub struct FarmdeskPaths {
    base_dir: PathBuf,
}

impl FarmdeskPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor a home directory is available.
    pub fn new() -> Result<Self, FarmdeskError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create FarmdeskPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/farmdesk/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the default seed file
    pub fn seed_file(&self) -> PathBuf {
        self.data_dir().join("seed.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), FarmdeskError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FarmdeskError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FarmdeskError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if farmdesk has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FarmdeskError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("farmdesk"));
    }

    let home = std::env::var("HOME")
        .map_err(|_| FarmdeskError::Config("Could not determine HOME directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join("farmdesk"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FarmdeskError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FarmdeskError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("farmdesk"))
}
