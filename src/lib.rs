//! # btserial
//!
//! Validation and encoding for "send this command to this Bluetooth device"
//! actions configured in a host automation tool:
//! - Address checks (hardware address or `%placeholder`)
//! - Immutable, validated records
//! - Bounded, CR-terminated display summaries
//! - CR-terminated wire payloads for the serial link
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Host (editor UI / action firing)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ raw (address, command) or Bundle
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Validator (address + record)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Record
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Summary   │          │   Payload   │
//!   │ (<= 60, CR) │          │ (cmd + CR)  │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use btserial::Record;
//!
//! let record = Record::build(Some("00:11:22:33:44:55"), Some("go")).unwrap();
//! assert_eq!(record.summary(), "00:11:22:33:44:55 <- go\r");
//! assert_eq!(&record.payload()[..], b"go\r");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod address;
pub mod bundle;
pub mod protocol;
pub mod record;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BtSerialError, Result, ValidationError};
pub use config::Config;
pub use bundle::{record_is_valid, Bundle};
pub use record::{error_for, Record};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of btserial
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
