//! Device address validation
//!
//! An address is either a placeholder (anything starting with `%`, resolved
//! later by the host's variable substitution) or a hardware address made of
//! six hex pairs separated uniformly by `:` or by `-`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Marker that makes an address a deferred substitution token
pub const PLACEHOLDER_MARKER: char = '%';

// The regex crate has no backreferences, so each separator gets its own arm.
static HARDWARE_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?:[0-9a-fA-F]{2}:){5}[0-9a-fA-F]{2}|(?:[0-9a-fA-F]{2}-){5}[0-9a-fA-F]{2})$")
        .expect("hardware address pattern is valid")
});

/// Separator used between the hex pairs of a hardware address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    Colon,
    Dash,
}

impl Separator {
    pub fn as_char(self) -> char {
        match self {
            Separator::Colon => ':',
            Separator::Dash => '-',
        }
    }
}

/// What kind of address a valid address string is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    /// `%`-prefixed token, passed through unchecked
    Placeholder,

    /// Six-octet hardware address
    Hardware {
        octets: [u8; 6],
        separator: Separator,
    },
}

/// Classify an address, or return `None` if it is not acceptable
pub fn classify(address: &str) -> Option<AddressKind> {
    if address.starts_with(PLACEHOLDER_MARKER) {
        return Some(AddressKind::Placeholder);
    }

    if !HARDWARE_ADDRESS.is_match(address) {
        return None;
    }

    // Pattern guarantees ASCII and a separator at byte 2
    let separator = match address.as_bytes()[2] {
        b':' => Separator::Colon,
        _ => Separator::Dash,
    };

    let mut octets = [0u8; 6];
    for (octet, pair) in octets.iter_mut().zip(address.split(separator.as_char())) {
        *octet = u8::from_str_radix(pair, 16).ok()?;
    }

    Some(AddressKind::Hardware { octets, separator })
}

/// Whether `address` is acceptable as a record address
///
/// `None` is never valid. Placeholders are valid whatever follows the marker.
pub fn is_valid(address: Option<&str>) -> bool {
    address.and_then(classify).is_some()
}
