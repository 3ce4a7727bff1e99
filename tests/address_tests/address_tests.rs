//! Tests for device address validation
//!
//! These tests verify:
//! - Hardware addresses with uniform `:` or `-` separators
//! - Placeholder addresses bypass format checks
//! - Full-string matching (no leading/trailing text)

use btserial::address::{classify, is_valid, AddressKind, Separator, PLACEHOLDER_MARKER};

// =============================================================================
// Hardware Address Tests
// =============================================================================

#[test]
fn test_colon_separated_address() {
    assert!(is_valid(Some("00:11:22:33:44:55")));
}

#[test]
fn test_dash_separated_address() {
    assert!(is_valid(Some("00-11-22-33-44-55")));
}

#[test]
fn test_hex_digits_are_case_insensitive() {
    assert!(is_valid(Some("aa:bb:cc:dd:ee:ff")));
    assert!(is_valid(Some("AA:BB:CC:DD:EE:FF")));
    assert!(is_valid(Some("aA:Bb:cC:Dd:eE:Ff")));
}

#[test]
fn test_mixed_separators_rejected() {
    assert!(!is_valid(Some("aa:bb:cc:dd:ee-ff")));
    assert!(!is_valid(Some("aa-bb:cc-dd:ee-ff")));
}

#[test]
fn test_wrong_group_count_rejected() {
    assert!(!is_valid(Some("00:11:22:33:44")));
    assert!(!is_valid(Some("00:11:22:33:44:55:66")));
}

#[test]
fn test_non_hex_digits_rejected() {
    assert!(!is_valid(Some("00:11:22:33:44:GG")));
    assert!(!is_valid(Some("bad-mac")));
}

#[test]
fn test_partial_match_rejected() {
    assert!(!is_valid(Some(" 00:11:22:33:44:55")));
    assert!(!is_valid(Some("00:11:22:33:44:55 ")));
    assert!(!is_valid(Some("x00:11:22:33:44:55")));
    assert!(!is_valid(Some("00:11:22:33:44:55\n")));
}

#[test]
fn test_single_digit_groups_rejected() {
    assert!(!is_valid(Some("0:11:22:33:44:55")));
    assert!(!is_valid(Some("001122334455")));
}

// =============================================================================
// Placeholder and Absent Tests
// =============================================================================

#[test]
fn test_absent_address_rejected() {
    assert!(!is_valid(None));
}

#[test]
fn test_empty_address_rejected() {
    assert!(!is_valid(Some("")));
}

#[test]
fn test_placeholder_accepted_unconditionally() {
    assert!(is_valid(Some("%anything")));
    assert!(is_valid(Some("%")));
    assert!(is_valid(Some("%not a mac at all!")));
}

#[test]
fn test_marker_must_lead() {
    assert!(!is_valid(Some("mac%")));
    assert_eq!(PLACEHOLDER_MARKER, '%');
}

// =============================================================================
// Classification Tests
// =============================================================================

#[test]
fn test_classify_hardware_octets() {
    let kind = classify("0A:1b:22:33:FE:ff").unwrap();
    assert_eq!(
        kind,
        AddressKind::Hardware {
            octets: [0x0a, 0x1b, 0x22, 0x33, 0xfe, 0xff],
            separator: Separator::Colon,
        }
    );
}

#[test]
fn test_classify_dash_separator() {
    match classify("00-11-22-33-44-55") {
        Some(AddressKind::Hardware { separator, octets }) => {
            assert_eq!(separator, Separator::Dash);
            assert_eq!(octets, [0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
        }
        other => panic!("Expected hardware address, got {:?}", other),
    }
}

#[test]
fn test_classify_placeholder() {
    assert_eq!(classify("%BT_MAC"), Some(AddressKind::Placeholder));
}

#[test]
fn test_classify_invalid() {
    assert_eq!(classify("00:11:22:33:44:5"), None);
}
