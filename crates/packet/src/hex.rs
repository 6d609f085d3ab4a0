//! Hex string parsing and formatting.
//!
//! Byte streams on the command line and in captures are written as hex
//! pairs, usually space-separated (`"de ad be ef"`). [`parse`] accepts
//! that form with or without separators; [`format`] produces it.

use core::fmt;

/// A hex string could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseHexError {
  /// A byte was left with only one hex digit.
  OddLength,
  /// A character was not a hex digit or a separator.
  InvalidDigit(char),
}

impl fmt::Display for ParseHexError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::OddLength => f.write_str("odd number of hex digits"),
      Self::InvalidDigit(c) => write!(f, "invalid hex digit {c:?}"),
    }
  }
}

impl core::error::Error for ParseHexError {}

/// Parse hex digits into bytes.
///
/// Whitespace and the common byte separators `:`, `-`, and `_` are
/// ignored wherever they appear.
///
/// # Example
///
/// ```
/// use packet::hex;
///
/// assert_eq!(hex::parse("de ad be ef").unwrap(), [0xDE, 0xAD, 0xBE, 0xEF]);
/// assert_eq!(hex::parse("DE:AD:BE:EF").unwrap(), [0xDE, 0xAD, 0xBE, 0xEF]);
/// assert_eq!(hex::parse("deadbeef").unwrap(), [0xDE, 0xAD, 0xBE, 0xEF]);
/// ```
pub fn parse(s: &str) -> Result<Vec<u8>, ParseHexError> {
  let mut out = Vec::new();
  let mut pending: Option<u8> = None;

  for c in s.chars() {
    if c.is_whitespace() || matches!(c, ':' | '-' | '_') {
      continue;
    }
    let digit = c.to_digit(16).ok_or(ParseHexError::InvalidDigit(c))? as u8;
    pending = match pending {
      None => Some(digit),
      Some(high) => {
        out.push((high << 4) | digit);
        None
      }
    };
  }

  if pending.is_some() {
    return Err(ParseHexError::OddLength);
  }
  Ok(out)
}

/// Format bytes as lowercase space-separated hex pairs.
#[must_use]
pub fn format(data: &[u8]) -> String {
  let mut out = String::with_capacity(data.len() * 3);
  for (i, byte) in data.iter().enumerate() {
    if i != 0 {
      out.push(' ');
    }
    out.push_str(&format!("{byte:02x}"));
  }
  out
}
