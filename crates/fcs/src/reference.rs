//! Reference CRC-32 oracle.
//!
//! The standard reflected CRC-32 (init 0xFFFFFFFF, reflected input and
//! output, final XOR) as computed by zlib, gzip, and PNG. Processes one
//! bit at a time: obviously correct, audit-friendly, and const-evaluable
//! so check values are verified at build time.
//!
//! The oracle exists to cross-check the serial and parallel engines
//! through the convention layer; it is never the production path. Tests
//! additionally compare it against the external `crc-fast` crate.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::constants::POLYNOMIAL_REFLECTED;

/// Bitwise zlib-style CRC-32 of `data`.
///
/// # Example
///
/// ```
/// use fcs::reference;
///
/// assert_eq!(reference::crc32(b"123456789"), 0xCBF4_3926);
/// ```
#[must_use]
pub const fn crc32(data: &[u8]) -> u32 {
  let mut crc = !0u32;
  let mut i = 0;
  while i < data.len() {
    crc ^= data[i] as u32;
    let mut bit: u32 = 0;
    while bit < 8 {
      let mask = 0u32.wrapping_sub(crc & 1);
      crc = (crc >> 1) ^ (POLYNOMIAL_REFLECTED & mask);
      bit = bit.strict_add(1);
    }
    i = i.strict_add(1);
  }
  crc ^ !0
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

const _: () = assert!(crc32(b"123456789") == 0xCBF4_3926);
const _: () = assert!(crc32(&[]) == 0);
const _: () = assert!(crc32(&[0x00]) == 0xD202_EF8D);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::RESIDUE;

  #[test]
  fn check_value() {
    assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
  }

  #[test]
  fn empty() {
    assert_eq!(crc32(&[]), 0);
  }

  #[test]
  fn single_bytes() {
    assert_eq!(crc32(&[0x00]), 0xD202_EF8D);
    assert_eq!(crc32(&[0xFF]), 0xFF00_0000);
  }

  #[test]
  fn incremental_prefix_consistency() {
    // The oracle is whole-buffer, but a message extended by one byte
    // must never collide with itself.
    let data = b"The quick brown fox";
    let mut seen = std::vec::Vec::new();
    for split in 0..=data.len() {
      seen.push(crc32(&data[..split]));
    }
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), data.len() + 1);
  }

  #[test]
  fn self_check_residue() {
    // Appending a message's wire FCS (big-endian) yields the constant
    // check residue.
    let msg = b"residue check";
    let fcs = crate::bitops::reverse_byte_order(crc32(msg), 32);
    let mut frame = msg.to_vec();
    frame.extend_from_slice(&fcs.to_be_bytes());
    assert_eq!(crc32(&frame), RESIDUE);
  }
}
