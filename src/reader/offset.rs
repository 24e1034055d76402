// src/reader/offset.rs
use crate::error::{Result, TrxError};

/// Parse a header offset given as decimal or with a `0x`, `0o` or `0b` prefix.
///
/// Decimal offsets may not carry leading zeros, and digit separators are
/// not accepted.
///
/// ```
/// use trx_rs::reader::parse_offset;
///
/// assert_eq!(parse_offset("128").unwrap(), 128);
/// assert_eq!(parse_offset("0x80").unwrap(), 128);
/// assert!(parse_offset("-1").is_err());
/// ```
pub fn parse_offset(text: &str) -> Result<u64> {
    let trimmed = text.trim();
    let invalid = || TrxError::InvalidOffset(text.to_string());

    let (digits, radix) = match trimmed.get(..2) {
        Some("0x") | Some("0X") => (&trimmed[2..], 16),
        Some("0o") | Some("0O") => (&trimmed[2..], 8),
        Some("0b") | Some("0B") => (&trimmed[2..], 2),
        _ => (trimmed, 10),
    };

    // from_str_radix tolerates a leading '+', which an offset should not carry
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid());
    }

    // "010" is ambiguous between decimal and legacy octal
    if radix == 10 && digits.len() > 1 && digits.starts_with('0') {
        return Err(invalid());
    }

    u64::from_str_radix(digits, radix).map_err(|_| invalid())
}
