//! Diagnostic logging
//!
//! Installs a `tracing` fmt subscriber writing to stderr so log lines never
//! mix with assistant output on stdout.

use tracing_subscriber::EnvFilter;

use crate::error::{ContactsError, ContactsResult};

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `directive`. Calling this again after a
/// subscriber is installed is a no-op.
pub fn init_logging(directive: &str) -> ContactsResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(directive)
            .map_err(|e| ContactsError::Config(format!("Invalid log directive '{}': {}", directive, e)))?,
    };

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_err()
    {
        tracing::debug!("logging already initialized");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        assert!(init_logging("debug").is_ok());
        assert!(init_logging("debug").is_ok());
    }

    #[test]
    fn test_invalid_directive_rejected() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert!(matches!(
            init_logging("contacts=notalevel"),
            Err(ContactsError::Config(_))
        ));
    }
}
