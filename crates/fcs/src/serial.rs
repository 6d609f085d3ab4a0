//! Bit-serial CRC-32 engine.
//!
//! Simulates the 32-bit shift register of an MSB-first FCS generator:
//! each input bit is shifted into the low end of the register, and a set
//! 33rd bit triggers reduction by the full polynomial
//! [`POLY_FULL`](crate::constants::POLY_FULL). Unlike the reference
//! oracle, the register starts at 0 and data enters without the x^32
//! premultiply, so the register always holds the raw polynomial
//! remainder of the bits fed so far.
//!
//! This is intentionally slow (one shift per bit). It is the source of
//! truth the byte-parallel engine is derived from and verified against.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::constants::POLY_FULL;

/// The 4 flush bytes appended to a message of length `len`.
///
/// Flush byte `i` is `0xFF` exactly when `len + i < 4`, so a message
/// shorter than the register is topped up with ones before the all-zero
/// flush; a message of 4 or more bytes gets 4 zero bytes. This is not
/// the textbook "append 4 zero bytes" finalization: the 0xFF fill is
/// what lets the Invert convention behave like an all-ones initial
/// register even for messages shorter than 4 bytes, and the output
/// conventions depend on it exactly as written.
#[must_use]
pub const fn flush_pattern(len: usize) -> [u8; 4] {
  let mut flush = [0u8; 4];
  let mut i = 0;
  while i < 4 {
    if len + i < 4 {
      flush[i] = 0xFF;
    }
    i = i.strict_add(1);
  }
  flush
}

/// Shift one byte through the register, MSB first, reducing as bits
/// overflow into position 32.
const fn shift_byte(mut crc: u64, byte: u8) -> u64 {
  let mut bit: u32 = 0;
  while bit < 8 {
    crc = (crc << 1) | (((byte >> (7 - bit)) & 1) as u64);
    if crc >> 32 == 1 {
      crc ^= POLY_FULL;
    }
    bit = bit.strict_add(1);
  }
  crc
}

/// Bit-serial CRC-32 of `data` followed by its flush pattern.
///
/// # Example
///
/// ```
/// use fcs::serial;
///
/// // An empty message is all flush: four 0xFF bytes never overflow the
/// // register, so it simply fills with ones.
/// assert_eq!(serial::crc32(&[]), 0xFFFF_FFFF);
/// ```
#[must_use]
pub const fn crc32(data: &[u8]) -> u32 {
  let mut crc = 0u64;
  let mut i = 0;
  while i < data.len() {
    crc = shift_byte(crc, data[i]);
    i = i.strict_add(1);
  }

  let flush = flush_pattern(data.len());
  let mut i = 0;
  while i < 4 {
    crc = shift_byte(crc, flush[i]);
    i = i.strict_add(1);
  }

  crc as u32
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

const _: () = assert!(crc32(&[]) == 0xFFFF_FFFF);
const _: () = assert!(crc32(&[0x40, 0x40, 0xCC, 0xCC]) == 0xC318_6C47);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn flush_pattern_fills_missing_register_bytes() {
    assert_eq!(flush_pattern(0), [0xFF, 0xFF, 0xFF, 0xFF]);
    assert_eq!(flush_pattern(1), [0xFF, 0xFF, 0xFF, 0x00]);
    assert_eq!(flush_pattern(2), [0xFF, 0xFF, 0x00, 0x00]);
    assert_eq!(flush_pattern(3), [0xFF, 0x00, 0x00, 0x00]);
    assert_eq!(flush_pattern(4), [0x00; 4]);
    assert_eq!(flush_pattern(1000), [0x00; 4]);
  }

  #[test]
  fn register_stays_32_bit() {
    // 33rd-bit reductions must mask back into range immediately; an
    // all-ones message exercises the reduction on every step.
    let crc = crc32(&[0xFF; 64]);
    let _ = crc; // any panic (overflow checks are on) would have fired
  }

  #[test]
  fn known_values() {
    assert_eq!(crc32(&[]), 0xFFFF_FFFF);
    assert_eq!(crc32(&[0x00]), 0xFFFF_FF00);
    assert_eq!(crc32(&[0x40, 0x40, 0xCC, 0xCC]), 0xC318_6C47);
  }

  #[test]
  fn leading_zero_bits_are_significant_only_after_flush() {
    // A single zero byte and two zero bytes flush differently, so they
    // must not collide even though the register sees only zeros first.
    assert_ne!(crc32(&[0x00]), crc32(&[0x00, 0x00]));
  }
}
