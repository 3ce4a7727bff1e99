//! Wire payload codec
//!
//! The payload is the command text followed by a single carriage return.

use std::io::Write;

use bytes::{BufMut, Bytes, BytesMut};

use crate::bundle::{self, Bundle};
use crate::error::Result;
use crate::record::Record;

/// Payload terminator
pub const TERMINATOR: &str = "\r";

/// Encode command text into the bytes sent over the serial link
pub fn encode_payload(command: &str) -> Bytes {
    let mut buf = BytesMut::with_capacity(command.len() + TERMINATOR.len());
    buf.put_slice(command.as_bytes());
    buf.put_slice(TERMINATOR.as_bytes());
    buf.freeze()
}

/// Payload for the record carried by `bundle`, or `None` if it is invalid
pub fn encode(bundle: Option<&Bundle>) -> Option<Bytes> {
    if !bundle::record_is_valid(bundle) {
        return None;
    }
    Some(encode_payload(bundle?.command()?))
}

/// Write a record's payload to a stream and flush it
pub fn write_payload<W: Write>(writer: &mut W, record: &Record) -> Result<()> {
    let payload = record.payload();
    writer.write_all(&payload)?;
    writer.flush()?;
    tracing::debug!(bytes = payload.len(), address = record.address(), "Wrote payload");
    Ok(())
}
