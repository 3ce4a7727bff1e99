//! Bundle codec
//!
//! Encoding and decoding of the persisted bundle blob.
//!
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────┐
//! │ CRC (4)  │ Len (4)  │   bincode(Bundle) payload   │
//! └──────────┴──────────┴─────────────────────────────┘
//! ```

use std::io::{Read, Write};

use crate::error::{BtSerialError, Result};
use super::Bundle;

/// Header size: 4 bytes CRC + 4 bytes length
pub const HEADER_SIZE: usize = 8;

/// Maximum payload size (1 MB)
pub const MAX_BUNDLE_SIZE: u32 = 1024 * 1024;

/// Encode a bundle to a self-checking blob
pub fn encode_bundle(bundle: &Bundle) -> Result<Vec<u8>> {
    let payload = bincode::serialize(bundle)?;

    if payload.len() > MAX_BUNDLE_SIZE as usize {
        return Err(BtSerialError::Serialization(format!(
            "Bundle too large: {} bytes (max {})",
            payload.len(),
            MAX_BUNDLE_SIZE
        )));
    }

    let crc = crc32fast::hash(&payload);

    let mut blob = Vec::with_capacity(HEADER_SIZE + payload.len());
    blob.extend_from_slice(&crc.to_le_bytes());
    blob.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    blob.extend_from_slice(&payload);

    tracing::debug!(bytes = blob.len(), keys = bundle.len(), "Encoded bundle");
    Ok(blob)
}

/// Decode a bundle from a blob produced by [`encode_bundle`]
///
/// Trailing bytes after the declared payload are rejected.
pub fn decode_bundle(bytes: &[u8]) -> Result<Bundle> {
    if bytes.len() < HEADER_SIZE {
        return Err(BtSerialError::Corruption(format!(
            "Incomplete header: expected {} bytes, got {}",
            HEADER_SIZE,
            bytes.len()
        )));
    }

    let stored_crc = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let payload_len = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);

    if payload_len > MAX_BUNDLE_SIZE {
        return Err(BtSerialError::Corruption(format!(
            "Payload too large: {} bytes (max {})",
            payload_len, MAX_BUNDLE_SIZE
        )));
    }

    let total_len = HEADER_SIZE + payload_len as usize;
    if bytes.len() != total_len {
        return Err(BtSerialError::Corruption(format!(
            "Length mismatch: expected {} bytes, got {}",
            total_len,
            bytes.len()
        )));
    }

    let payload = &bytes[HEADER_SIZE..];
    let computed_crc = crc32fast::hash(payload);
    if computed_crc != stored_crc {
        return Err(BtSerialError::Corruption(format!(
            "CRC mismatch: stored 0x{:08x}, computed 0x{:08x}",
            stored_crc, computed_crc
        )));
    }

    let bundle: Bundle = bincode::deserialize(payload)?;
    tracing::debug!(keys = bundle.len(), "Decoded bundle");
    Ok(bundle)
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read a complete bundle blob from a stream
pub fn read_bundle<R: Read>(reader: &mut R) -> Result<Bundle> {
    let mut header = [0u8; HEADER_SIZE];
    reader.read_exact(&mut header)?;

    let payload_len = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);
    if payload_len > MAX_BUNDLE_SIZE {
        return Err(BtSerialError::Corruption(format!(
            "Payload too large: {} bytes (max {})",
            payload_len, MAX_BUNDLE_SIZE
        )));
    }

    let mut blob = Vec::with_capacity(HEADER_SIZE + payload_len as usize);
    blob.extend_from_slice(&header);
    blob.resize(HEADER_SIZE + payload_len as usize, 0);
    reader.read_exact(&mut blob[HEADER_SIZE..])?;

    decode_bundle(&blob)
}

/// Write a bundle blob to a stream
pub fn write_bundle<W: Write>(writer: &mut W, bundle: &Bundle) -> Result<()> {
    let blob = encode_bundle(bundle)?;
    writer.write_all(&blob)?;
    writer.flush()?;
    Ok(())
}
