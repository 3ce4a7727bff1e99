//! Record definitions
//!
//! A validated (address, command) pair. The only way to obtain a [`Record`]
//! is through the validating constructors, so an invalid record cannot exist.

use bytes::Bytes;
use serde::Serialize;

use crate::address;
use crate::bundle::{self, Bundle};
use crate::error::ValidationError;
use crate::protocol;

/// A validated instruction to send `command` to the device at `address`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    address: String,
    command: String,
}

impl Record {
    /// Build a record from raw host input
    ///
    /// Returns `None` when either input is absent or the pair is invalid.
    /// Use [`error_for`] to explain a rejection to a user.
    pub fn build(address: Option<&str>, command: Option<&str>) -> Option<Self> {
        let (Some(address), Some(command)) = (address, command) else {
            tracing::debug!("Record rejected: absent input");
            return None;
        };

        let candidate = Bundle::candidate(address, command);
        if !bundle::record_is_valid(Some(&candidate)) {
            tracing::debug!(address, "Record rejected");
            return None;
        }

        tracing::debug!(address, "Record built");
        Some(Self {
            address: address.to_owned(),
            command: command.to_owned(),
        })
    }

    /// Like [`Record::build`], but reports why the pair was rejected
    pub fn try_build(
        address: Option<&str>,
        command: Option<&str>,
    ) -> std::result::Result<Self, ValidationError> {
        Self::build(address, command).ok_or_else(|| {
            error_for(address, command).unwrap_or(ValidationError::AbsentInput)
        })
    }

    /// Device address or `%`-prefixed placeholder
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Command text, never empty
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Whether the address is deferred to host substitution
    pub fn is_placeholder(&self) -> bool {
        matches!(
            address::classify(&self.address),
            Some(address::AddressKind::Placeholder)
        )
    }

    /// One-line summary bounded to the default 60 characters
    pub fn summary(&self) -> String {
        protocol::render_summary(&self.address, &self.command, protocol::SUMMARY_MAX_LEN)
    }

    /// One-line summary bounded to `max_len` characters
    pub fn summary_with_limit(&self, max_len: usize) -> String {
        protocol::render_summary(&self.address, &self.command, max_len)
    }

    /// Bytes to transmit: command text followed by a carriage return
    pub fn payload(&self) -> Bytes {
        protocol::encode_payload(&self.command)
    }
}

impl TryFrom<&Bundle> for Record {
    type Error = ValidationError;

    fn try_from(bundle: &Bundle) -> std::result::Result<Self, Self::Error> {
        Self::try_build(bundle.address(), bundle.command())
    }
}

/// First rule the raw pair violates, or `None` if it can become a record
///
/// The address is checked before the command.
pub fn error_for(address: Option<&str>, command: Option<&str>) -> Option<ValidationError> {
    if !address::is_valid(address) {
        return Some(ValidationError::InvalidAddress);
    }
    match command {
        None | Some("") => Some(ValidationError::MissingOrEmptyCommand),
        Some(_) => None,
    }
}
