//! Integer literals as written in `char.def`.
//!
//! Accepts an optional sign, then a `0x`, `0X` or `#` prefix for hexadecimal,
//! a leading `0` for octal, or plain decimal digits.

use std::num::IntErrorKind;

use crate::error::FormatCause;

/// Largest valid Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Why a literal could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Not a number in any accepted notation.
    Malformed,
    /// Well-formed digits whose value does not fit in an `i64`.
    Overflow,
}

pub fn decode(literal: &str) -> Result<i64, DecodeError> {
    let (negative, unsigned) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };

    let (radix, digits) = if let Some(rest) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .or_else(|| unsigned.strip_prefix('#'))
    {
        (16, rest)
    } else if unsigned.len() > 1
        && let Some(rest) = unsigned.strip_prefix('0')
    {
        (8, rest)
    } else {
        (10, unsigned)
    };

    // from_str_radix would accept a second sign here
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(DecodeError::Malformed);
    }

    let magnitude = i64::from_str_radix(digits, radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => DecodeError::Overflow,
        _ => DecodeError::Malformed,
    })?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Decodes `literal` and checks that it names a Unicode code point.
pub fn code_point(literal: &str) -> Result<u32, FormatCause> {
    let out_of_range = || FormatCause::CodePointOutOfRange(literal.to_string());

    let value = decode(literal).map_err(|e| match e {
        DecodeError::Malformed => FormatCause::MalformedLiteral(literal.to_string()),
        DecodeError::Overflow => out_of_range(),
    })?;
    u32::try_from(value)
        .ok()
        .filter(|&cp| cp <= MAX_CODE_POINT)
        .ok_or_else(out_of_range)
}
