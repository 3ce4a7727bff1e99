//! Record summary
//!
//! Bounded one-line rendering of a record for display by the host.

use crate::bundle::{self, Bundle};
use super::TERMINATOR;

/// Maximum rendered summary length, terminator included
pub const SUMMARY_MAX_LEN: usize = 60;

/// Marker appended to a truncated summary
pub const ELLIPSIS: &str = "...";

/// Text placed between the address and the command
pub const SUMMARY_SEPARATOR: &str = " <- ";

/// Render `<address> <- <command>\r`, bounded to `max_len` characters
///
/// When the text plus terminator exceeds `max_len`, the first
/// `max_len - 1 - 3` characters are kept and `...\r` appended. Counting is by
/// character and ignores word boundaries.
pub fn render_summary(address: &str, command: &str, max_len: usize) -> String {
    let mut text = String::with_capacity(
        address.len() + SUMMARY_SEPARATOR.len() + command.len() + TERMINATOR.len(),
    );
    text.push_str(address);
    text.push_str(SUMMARY_SEPARATOR);
    text.push_str(command);

    let terminator_len = TERMINATOR.chars().count();
    let length = text.chars().count() + terminator_len;

    if length > max_len {
        let keep = max_len
            .saturating_sub(terminator_len)
            .saturating_sub(ELLIPSIS.chars().count());
        if let Some((cut, _)) = text.char_indices().nth(keep) {
            text.truncate(cut);
        }
        text.push_str(ELLIPSIS);
    }

    text.push_str(TERMINATOR);
    text
}

/// Summary of the record carried by `bundle`, or `None` if it is invalid
pub fn summarize(bundle: Option<&Bundle>) -> Option<String> {
    if !bundle::record_is_valid(bundle) {
        return None;
    }
    let bundle = bundle?;
    Some(render_summary(bundle.address()?, bundle.command()?, SUMMARY_MAX_LEN))
}
