//! Bundle holder
//!
//! A loosely-typed string map as the host stores it, plus the validity check
//! that decides whether it carries a usable record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::address;
use crate::record::Record;

/// Namespace shared by every key this crate writes into a bundle
pub const KEY_PREFIX: &str = "io.btserial.action";

/// Key holding the device address
pub const KEY_ADDRESS: &str = "io.btserial.action.STRING_MAC";

/// Key holding the command text
pub const KEY_COMMAND: &str = "io.btserial.action.STRING_MSG";

/// Keys the host should run `%variable` substitution over before firing
pub const VARIABLE_REPLACE_KEYS: [&str; 2] = [KEY_ADDRESS, KEY_COMMAND];

/// String-keyed holder the host persists on our behalf
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    values: BTreeMap<String, String>,
}

impl Bundle {
    /// Create an empty bundle
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidate holder with both record keys set to raw, unexamined values
    pub(crate) fn candidate(address: &str, command: &str) -> Self {
        let mut bundle = Self::new();
        bundle.insert(KEY_ADDRESS, address);
        bundle.insert(KEY_COMMAND, command);
        bundle
    }

    /// Store a value, returning the previous one under that key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Device address, `None` when the key is absent
    pub fn address(&self) -> Option<&str> {
        self.get(KEY_ADDRESS)
    }

    /// Command text, `None` when the key is absent
    pub fn command(&self) -> Option<&str> {
        self.get(KEY_COMMAND)
    }
}

impl From<&Record> for Bundle {
    fn from(record: &Record) -> Self {
        Self::candidate(record.address(), record.command())
    }
}

/// Whether `bundle` carries a usable record
///
/// Missing keys are only logged; validity comes from the field checks.
pub fn record_is_valid(bundle: Option<&Bundle>) -> bool {
    let Some(bundle) = bundle else {
        tracing::warn!("Null bundle");
        return false;
    };

    for key in VARIABLE_REPLACE_KEYS {
        if !bundle.contains_key(key) {
            tracing::warn!(key, "Bundle missing key");
        }
    }

    if !address::is_valid(bundle.address()) {
        tracing::warn!(address = ?bundle.address(), "Invalid address");
        return false;
    }

    match bundle.command() {
        None => {
            tracing::warn!("Null command");
            false
        }
        Some("") => {
            tracing::warn!("Empty command");
            false
        }
        Some(_) => true,
    }
}
