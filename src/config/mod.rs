//! Configuration module for farmdesk
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FarmdeskPaths;
pub use settings::Settings;
