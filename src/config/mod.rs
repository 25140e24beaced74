//! Configuration module for teller
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TellerPaths;
pub use settings::Settings;
