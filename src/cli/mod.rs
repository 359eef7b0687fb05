//! CLI command handlers
//!
//! This module contains the interactive assistant, bridging line input with
//! the service layer.

pub mod assistant;
pub mod commands;
pub mod parser;

pub use assistant::{Assistant, Reply};
pub use commands::{find_command, CommandAction, COMMANDS};
pub use parser::parse_input;
