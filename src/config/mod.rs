//! Configuration module for contacts-cli
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ContactsPaths;
pub use settings::Settings;
