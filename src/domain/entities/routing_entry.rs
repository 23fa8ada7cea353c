//! Routing entry mapping a site's domain to its mail addresses.

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

/// A row of the routing table.
///
/// `host` is the lookup key (e.g. `example.com` or `localhost:8080`).
/// Mail for the site is sent *from* `sender` *to* `recipient`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingEntry {
    pub host: String,
    pub recipient: String,
    pub sender: String,
}

impl RoutingEntry {
    pub fn new(
        host: impl Into<String>,
        recipient: impl Into<String>,
        sender: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            recipient: recipient.into(),
            sender: sender.into(),
        }
    }

    /// Checks the entry before it is written to the routing table.
    ///
    /// The request path never calls this: entries are trusted once stored.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason for the first failing field.
    pub fn validate(&self) -> Result<(), String> {
        let host = self.host.trim();
        if host.is_empty() || host.len() > 255 {
            return Err("host must be between 1 and 255 characters".to_string());
        }
        if host.chars().any(char::is_whitespace) || host.contains('/') {
            return Err(format!("host '{}' must be a bare domain name", self.host));
        }
        if !self.recipient.validate_email() {
            return Err(format!("invalid recipient address '{}'", self.recipient));
        }
        if !self.sender.validate_email() {
            return Err(format!("invalid sender address '{}'", self.sender));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_entry() {
        let entry = RoutingEntry::new("example.com", "owner@example.com", "noreply@example.com");
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_host_with_port_is_valid() {
        let entry = RoutingEntry::new("localhost:8080", "owner@example.com", "noreply@example.com");
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_empty_host_rejected() {
        let entry = RoutingEntry::new("  ", "owner@example.com", "noreply@example.com");
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_url_as_host_rejected() {
        let entry = RoutingEntry::new(
            "https://example.com/",
            "owner@example.com",
            "noreply@example.com",
        );
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_bad_addresses_rejected() {
        let bad_recipient = RoutingEntry::new("example.com", "owner", "noreply@example.com");
        assert!(bad_recipient.validate().unwrap_err().contains("recipient"));

        let bad_sender = RoutingEntry::new("example.com", "owner@example.com", "not-an-email");
        assert!(bad_sender.validate().unwrap_err().contains("sender"));
    }
}
