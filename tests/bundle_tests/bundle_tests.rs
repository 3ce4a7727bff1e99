//! Tests for the host bundle holder
//!
//! These tests verify:
//! - Namespaced keys and accessors
//! - record_is_valid() across missing, empty and invalid fields

use btserial::bundle::{
    record_is_valid, Bundle, KEY_ADDRESS, KEY_COMMAND, KEY_PREFIX, VARIABLE_REPLACE_KEYS,
};

fn bundle_with(address: Option<&str>, command: Option<&str>) -> Bundle {
    let mut bundle = Bundle::new();
    if let Some(address) = address {
        bundle.insert(KEY_ADDRESS, address);
    }
    if let Some(command) = command {
        bundle.insert(KEY_COMMAND, command);
    }
    bundle
}

// =============================================================================
// Key Tests
// =============================================================================

#[test]
fn test_keys_are_namespaced() {
    assert!(KEY_ADDRESS.starts_with(KEY_PREFIX));
    assert!(KEY_COMMAND.starts_with(KEY_PREFIX));
    assert_ne!(KEY_ADDRESS, KEY_COMMAND);
}

#[test]
fn test_variable_replace_keys() {
    assert_eq!(VARIABLE_REPLACE_KEYS, [KEY_ADDRESS, KEY_COMMAND]);
}

#[test]
fn test_accessors_absent_keys() {
    let bundle = Bundle::new();
    assert!(bundle.is_empty());
    assert_eq!(bundle.address(), None);
    assert_eq!(bundle.command(), None);
}

#[test]
fn test_insert_replaces_value() {
    let mut bundle = Bundle::new();
    assert_eq!(bundle.insert(KEY_COMMAND, "a"), None);
    assert_eq!(bundle.insert(KEY_COMMAND, "b"), Some("a".to_string()));
    assert_eq!(bundle.command(), Some("b"));
    assert_eq!(bundle.remove(KEY_COMMAND), Some("b".to_string()));
    assert!(!bundle.contains_key(KEY_COMMAND));
}

// =============================================================================
// record_is_valid() Tests
// =============================================================================

#[test]
fn test_absent_bundle_invalid() {
    assert!(!record_is_valid(None));
}

#[test]
fn test_valid_bundle() {
    let bundle = bundle_with(Some("00:11:22:33:44:55"), Some("go"));
    assert!(record_is_valid(Some(&bundle)));
}

#[test]
fn test_valid_placeholder_bundle() {
    let bundle = bundle_with(Some("%DEVICE"), Some("%CMD"));
    assert!(record_is_valid(Some(&bundle)));
}

#[test]
fn test_missing_address_invalid() {
    let bundle = bundle_with(None, Some("go"));
    assert!(!record_is_valid(Some(&bundle)));
}

#[test]
fn test_missing_command_invalid() {
    let bundle = bundle_with(Some("00:11:22:33:44:55"), None);
    assert!(!record_is_valid(Some(&bundle)));
}

#[test]
fn test_empty_command_invalid() {
    let bundle = bundle_with(Some("00:11:22:33:44:55"), Some(""));
    assert!(!record_is_valid(Some(&bundle)));
}

#[test]
fn test_invalid_address_invalid() {
    let bundle = bundle_with(Some("00:11:22:33:44"), Some("go"));
    assert!(!record_is_valid(Some(&bundle)));
}

#[test]
fn test_unrelated_keys_ignored() {
    let mut bundle = bundle_with(Some("00-11-22-33-44-55"), Some("go"));
    bundle.insert("net.host.setting", "whatever");
    assert!(record_is_valid(Some(&bundle)));
}
