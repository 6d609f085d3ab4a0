//! Dibit (2-bit symbol) coding.
//!
//! Modems that carry 2 bits per symbol (QPSK and friends) transmit each
//! byte as 4 dibits, least significant pair first. [`split_bytes`] and
//! [`join_dibits`] convert between byte streams and symbol streams in
//! that order.

/// Split each byte into 4 dibits, LSB pair first.
///
/// # Example
///
/// ```
/// use packet::dibit::split_bytes;
///
/// assert_eq!(split_bytes(&[0xB9, 0xBE]), vec![1, 2, 3, 2, 2, 3, 3, 2]);
/// ```
#[must_use]
pub fn split_bytes(data: &[u8]) -> Vec<u8> {
  let mut out = Vec::with_capacity(data.len() * 4);
  for &byte in data {
    out.push(byte & 0b11);
    out.push((byte >> 2) & 0b11);
    out.push((byte >> 4) & 0b11);
    out.push(byte >> 6);
  }
  out
}

/// Reassemble bytes from a dibit stream produced by [`split_bytes`].
///
/// # Panics
///
/// Panics if the stream length is not a multiple of 4 or any symbol is
/// not a dibit (`>= 4`).
#[must_use]
pub fn join_dibits(symbols: &[u8]) -> Vec<u8> {
  assert!(symbols.len() % 4 == 0, "dibit stream length must be a multiple of 4");
  symbols
    .chunks_exact(4)
    .map(|quad| {
      let mut byte = 0u8;
      for (i, &sym) in quad.iter().enumerate() {
        assert!(sym < 4, "symbol is not a dibit");
        byte |= sym << (2 * i);
      }
      byte
    })
    .collect()
}
