//! TELL/ASK section extraction.
//!
//! The core operates on two pre-extracted strings; this module is the input
//! collaborator that pulls them out of a raw problem file.

use crate::error::ParseError;

const TELL: &str = "TELL";
const ASK: &str = "ASK";

/// Splits raw problem text into the TELL clause list and the ASK query.
///
/// The clause list is everything between the `TELL` and `ASK` markers, with a
/// trailing clause separator stripped; the query is everything after `ASK`.
///
/// # Errors
///
/// Returns [`ParseError::MissingSections`] when either marker is absent or
/// they are out of order.
pub fn split_tell_ask(content: &str) -> Result<(String, String), ParseError> {
    let tell_start = content.find(TELL).ok_or(ParseError::MissingSections)? + TELL.len();
    let ask_offset = content[tell_start..]
        .find(ASK)
        .ok_or(ParseError::MissingSections)?;
    let ask_start = tell_start + ask_offset + ASK.len();

    let tell = content[tell_start..tell_start + ask_offset].trim();
    let tell = tell.strip_suffix(';').unwrap_or(tell);
    let ask = content[ask_start..].trim();
    Ok((tell.to_string(), ask.to_string()))
}
