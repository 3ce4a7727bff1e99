//! Bundle Module
//!
//! The host-side holder that carries a record between configuration time
//! and fire time, next to whatever unrelated data the host keeps in it.
//!
//! ## Keys
//! ```text
//! io.btserial.action.STRING_MAC   -> device address (or %placeholder)
//! io.btserial.action.STRING_MSG   -> command text
//! ```
//!
//! ## Blob Format
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────┐
//! │ CRC (4)  │ Len (4)  │   bincode(Bundle) payload   │
//! └──────────┴──────────┴─────────────────────────────┘
//! ```
//! CRC32 covers the payload only. Both integers are little-endian.

mod holder;
mod codec;

pub use holder::{
    record_is_valid, Bundle, KEY_ADDRESS, KEY_COMMAND, KEY_PREFIX, VARIABLE_REPLACE_KEYS,
};
pub use codec::{decode_bundle, encode_bundle, read_bundle, write_bundle, HEADER_SIZE, MAX_BUNDLE_SIZE};
