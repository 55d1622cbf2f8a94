//! Strict inline percent-decoding.
//!
//! A `%XX` escape is exactly three bytes; anything shorter or with a non-hex
//! digit fails the parse. The decoded byte is appended to the output buffer
//! verbatim and is never re-interpreted as a delimiter, so `%2F` inside a
//! path segment stays data.

use crate::character_sets::is_hex_digit;
use crate::error::{ParseError, Result};

fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        _ => b - b'A' + 10,
    }
}

/// Decode the escape starting at `at`, where `bytes[at]` is `%`.
///
/// Consumes the two following bytes; the caller advances its cursor by
/// three. Fails with [`ParseError::Syntax`] if fewer than two bytes remain
/// or either is not a hex digit.
pub fn decode_escape(bytes: &[u8], at: usize) -> Result<u8> {
    debug_assert_eq!(bytes.get(at), Some(&b'%'));
    if at + 2 >= bytes.len() {
        return Err(ParseError::Syntax);
    }
    let hi = bytes[at + 1];
    let lo = bytes[at + 2];
    if !is_hex_digit(hi) || !is_hex_digit(lo) {
        return Err(ParseError::Syntax);
    }
    Ok((hex_value(hi) << 4) | hex_value(lo))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_escape() {
        assert_eq!(decode_escape(b"%20", 0), Ok(b' '));
        assert_eq!(decode_escape(b"%2f", 0), Ok(b'/'));
        assert_eq!(decode_escape(b"%2F", 0), Ok(b'/'));
        assert_eq!(decode_escape(b"%ff", 0), Ok(0xff));
        assert_eq!(decode_escape(b"a%41b", 1), Ok(b'A'));
    }

    #[test]
    fn test_decode_escape_rejects_malformed() {
        // Truncated
        assert_eq!(decode_escape(b"%", 0), Err(ParseError::Syntax));
        assert_eq!(decode_escape(b"%2", 0), Err(ParseError::Syntax));
        // Non-hex digits
        assert_eq!(decode_escape(b"%2g", 0), Err(ParseError::Syntax));
        assert_eq!(decode_escape(b"%g2", 0), Err(ParseError::Syntax));
        assert_eq!(decode_escape(b"%%0", 0), Err(ParseError::Syntax));
    }
}
