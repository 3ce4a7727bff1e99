//! Protocol Module
//!
//! Derives the two outputs of a record: the display summary and the bytes
//! sent over the serial link.
//!
//! ## Wire Payload
//! ```text
//! ┌─────────────────────────────┬──────────┐
//! │        Command text         │  CR (1)  │
//! └─────────────────────────────┴──────────┘
//! ```
//! No length prefix, no checksum. Text is UTF-8.
//!
//! ## Summary
//! ```text
//! <address> <- <command>\r
//! ```
//! At most 60 characters. Longer summaries keep their first 56 characters
//! followed by `...\r`.

mod summary;
mod codec;

pub use summary::{render_summary, summarize, ELLIPSIS, SUMMARY_MAX_LEN, SUMMARY_SEPARATOR};
pub use codec::{encode, encode_payload, write_payload, TERMINATOR};
