//! Byte-parallel CRC-32 engine.
//!
//! Processes one full byte per step using 32 closed-form XOR equations
//! over the 32 register bits and the 8 incoming data bits: the
//! combinational logic an FCS generator would synthesize instead of
//! clocking the serial register 8 times.
//!
//! The equations are not transcribed. [`derive_step_masks`] applies the
//! serial single-bit update symbolically 8 times at compile time,
//! tracking for every output bit which of the 40 inputs it XORs
//! together. Transcription errors are impossible and the serial engine
//! stays the single source of truth.
//!
//! No flush bytes are applied here: [`crc32`] consumes exactly the bytes
//! it is given. Feed it `data || flush_pattern(data.len())` to match
//! [`crate::serial::crc32`] (see [`crate::Engine::Parallel`]).

// SAFETY: All array indexing uses bounded loop indices (0..32).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::constants::POLYNOMIAL;

/// Dependence-mask layout: bits 0..32 select register bits `c0..c31`,
/// bits 32..40 select data bits `d0..d7` (LSB-first).
type StepMasks = [u64; 32];

/// Unroll 8 serial shift-and-reduce steps symbolically.
///
/// `state[i]` is the XOR set that register bit `i` currently equals.
/// One serial step shifts every set up by one position, injects the
/// incoming data bit at position 0, and XORs the old bit-31 set into
/// every tap of the polynomial. Data bits enter MSB (`d7`) first.
const fn derive_step_masks() -> StepMasks {
  let mut state = [0u64; 32];
  let mut i = 0;
  while i < 32 {
    state[i] = 1u64 << i;
    i = i.strict_add(1);
  }

  let mut j = 8;
  while j > 0 {
    j -= 1; // d7 is shifted in first
    let top = state[31];
    let mut next = [0u64; 32];
    let mut i = 31;
    while i > 0 {
      next[i] = state[i - 1] ^ (if (POLYNOMIAL >> i) & 1 == 1 { top } else { 0 });
      i -= 1;
    }
    next[0] = (1u64 << (32 + j)) ^ (if POLYNOMIAL & 1 == 1 { top } else { 0 });
    state = next;
  }

  state
}

/// The 32 XOR equations of one byte step, as dependence masks.
const STEP_MASKS: StepMasks = derive_step_masks();

/// Advance the register by one input byte.
///
/// Each output bit is the XOR reduction (parity) of its mask applied to
/// the combined 40-bit input.
#[inline]
#[must_use]
pub const fn step(byte: u8, crc: u32) -> u32 {
  let bits = (crc as u64) | ((byte as u64) << 32);
  let mut next = 0u32;
  let mut i = 0;
  while i < 32 {
    next |= ((STEP_MASKS[i] & bits).count_ones() & 1) << i;
    i = i.strict_add(1);
  }
  next
}

/// Byte-parallel CRC-32 of `data`, starting from register 0.
///
/// # Example
///
/// ```
/// use fcs::{parallel, serial};
///
/// let msg = [0x40, 0x40, 0xCC, 0xCC];
/// let mut padded = msg.to_vec();
/// padded.extend_from_slice(&serial::flush_pattern(msg.len()));
/// assert_eq!(parallel::crc32(&padded), serial::crc32(&msg));
/// ```
#[must_use]
pub const fn crc32(data: &[u8]) -> u32 {
  let mut crc = 0u32;
  let mut i = 0;
  while i < data.len() {
    crc = step(data[i], crc);
    i = i.strict_add(1);
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

// Spot-check the derived equations:
//   c0'  = d0 ^ c24 ^ c30
//   c8'  = c0 ^ c24 ^ c25 ^ c27 ^ c28
//   c31' = c23 ^ c29
const _: () = assert!(STEP_MASKS[0] == 0x01_4100_0000);
const _: () = assert!(STEP_MASKS[8] == 0x00_1B00_0001);
const _: () = assert!(STEP_MASKS[31] == 0x00_2080_0000);

// An all-flush (empty) message must agree with the serial engine.
const _: () = assert!(crc32(&[0xFF, 0xFF, 0xFF, 0xFF]) == crate::serial::crc32(&[]));

#[cfg(test)]
mod tests {
  use super::*;
  use crate::serial;

  /// One serial bit-step applied 8 times, for direct comparison.
  fn serial_byte_step(byte: u8, crc: u32) -> u32 {
    let mut reg = crc as u64;
    for bit in 0..8 {
      reg = (reg << 1) | (((byte >> (7 - bit)) & 1) as u64);
      if reg >> 32 == 1 {
        reg ^= crate::constants::POLY_FULL;
      }
    }
    reg as u32
  }

  #[test]
  fn step_matches_eight_serial_steps() {
    let mut reg = 0xDEAD_BEEFu32;
    for byte in 0u8..=255 {
      assert_eq!(step(byte, reg), serial_byte_step(byte, reg), "byte {byte:#04x}");
      reg = step(byte, reg); // walk through varied register states
    }
  }

  #[test]
  fn every_mask_is_within_40_bits() {
    for (i, mask) in STEP_MASKS.iter().enumerate() {
      assert!(*mask < (1u64 << 40), "mask {i} out of range");
      assert_ne!(*mask, 0, "mask {i} empty");
    }
  }

  #[test]
  fn zero_register_zero_byte_is_fixed_point() {
    assert_eq!(step(0x00, 0), 0);
    assert_eq!(crc32(&[0x00; 8]), 0);
  }

  #[test]
  fn agrees_with_serial_over_flushed_messages() {
    let messages: [&[u8]; 6] = [
      &[],
      &[0x00],
      &[0xAB, 0xCD],
      &[0x01, 0x02, 0x03],
      &[0x40, 0x40, 0xCC, 0xCC],
      &[0xDE, 0xAD, 0xBE, 0xEF, 0x01],
    ];
    for msg in messages {
      let mut padded = msg.to_vec();
      padded.extend_from_slice(&serial::flush_pattern(msg.len()));
      assert_eq!(crc32(&padded), serial::crc32(msg), "message {msg:02x?}");
    }
  }
}
