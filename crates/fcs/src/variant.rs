//! Output conventions composed over the three engines.
//!
//! Four conventions are in circulation for this polynomial, differing in
//! initial-value handling, complement, and bit/byte order. Each is
//! defined strictly as a transform pipeline around the previous one, so
//! the composition laws hold by construction no matter which engine
//! computes the underlying division:
//!
//! | Convention | Input transform | Output transform |
//! |------------|-----------------|------------------|
//! | [`Vanilla`](Convention::Vanilla) | none | none |
//! | [`Invert`](Convention::Invert) | complement first 4 bytes | complement |
//! | [`BitReverseInvert`](Convention::BitReverseInvert) | + reverse bits per byte | + reverse 32 bits |
//! | [`BytewiseBitReverseInvert`](Convention::BytewiseBitReverseInvert) | — | + reverse byte order |
//!
//! `BitReverseInvert` is the value zlib reports; `BytewiseBitReverseInvert`
//! is the byte order that goes on the wire.

use alloc::vec::Vec;

use crate::{
  bitops::{complement, reverse_bits, reverse_byte_order},
  parallel, reference, serial,
};

// ─────────────────────────────────────────────────────────────────────────────
// Engines
// ─────────────────────────────────────────────────────────────────────────────

/// A CRC-32 computation strategy.
///
/// All three produce identical results under every [`Convention`]; the
/// serial and parallel engines are independent implementations and the
/// reference oracle is the external cross-check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Engine {
  /// Bit-serial shift register ([`serial::crc32`]).
  Serial,
  /// Byte-parallel XOR network ([`parallel::crc32`]) over the same
  /// flushed bit stream as the serial engine.
  Parallel,
  /// Trusted zlib-style implementation ([`reference::crc32`]),
  /// translated down to the vanilla convention.
  Reference,
}

impl Engine {
  /// All engines, in cross-check order.
  pub const ALL: [Engine; 3] = [Engine::Serial, Engine::Parallel, Engine::Reference];

  /// Short name for diagnostics.
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Engine::Serial => "serial",
      Engine::Parallel => "parallel",
      Engine::Reference => "reference",
    }
  }

  /// Raw polynomial-division CRC of `data` (the Vanilla convention).
  #[must_use]
  pub fn vanilla(self, data: &[u8]) -> u32 {
    match self {
      Engine::Serial => serial::crc32(data),
      Engine::Parallel => {
        let mut padded = Vec::with_capacity(data.len() + 4);
        padded.extend_from_slice(data);
        padded.extend_from_slice(&serial::flush_pattern(data.len()));
        parallel::crc32(&padded)
      }
      Engine::Reference => {
        // The oracle natively computes BitReverseInvert; unwind its
        // input/output transforms to reach the vanilla value.
        let unwound: Vec<u8> = data
          .iter()
          .enumerate()
          .map(|(i, &b)| if i < 4 { complement(b as u32, 8) as u8 } else { b })
          .map(|b| reverse_bits(b as u32, 8) as u8)
          .collect();
        complement(reverse_bits(reference::crc32(&unwound), 32), 32)
      }
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conventions
// ─────────────────────────────────────────────────────────────────────────────

/// One of the four output conventions.
///
/// Conventions are pure data: computing one allocates transformed input
/// as needed and leaves no state behind.
///
/// # Example
///
/// ```
/// use fcs::{Convention, Engine};
///
/// let msg = [0x40, 0x40, 0xCC, 0xCC];
/// let wire = Convention::BytewiseBitReverseInvert.compute(Engine::Serial, &msg);
/// assert_eq!(wire, 0x381C_573F);
///
/// // Every engine agrees, for every convention.
/// for engine in Engine::ALL {
///   assert_eq!(Convention::BytewiseBitReverseInvert.compute(engine, &msg), wire);
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Convention {
  /// Pure polynomial division; no complement, no reversal.
  Vanilla,
  /// First 4 input bytes complemented, result complemented. The form to
  /// append when building a frame.
  Invert,
  /// Invert, plus bit-reversed input bytes and a bit-reversed result.
  /// Matches zlib/gzip/PNG output.
  BitReverseInvert,
  /// BitReverseInvert with the result's byte order reversed: the order
  /// the 4 FCS octets are transmitted in.
  BytewiseBitReverseInvert,
}

impl Convention {
  /// All conventions, weakest transform first.
  pub const ALL: [Convention; 4] = [
    Convention::Vanilla,
    Convention::Invert,
    Convention::BitReverseInvert,
    Convention::BytewiseBitReverseInvert,
  ];

  /// Short name for diagnostics.
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Convention::Vanilla => "vanilla",
      Convention::Invert => "invert",
      Convention::BitReverseInvert => "bit-reverse-invert",
      Convention::BytewiseBitReverseInvert => "bytewise-bit-reverse-invert",
    }
  }

  /// CRC-32 of `data` under this convention, computed by `engine`.
  #[must_use]
  pub fn compute(self, engine: Engine, data: &[u8]) -> u32 {
    match self {
      Convention::Vanilla => engine.vanilla(data),
      Convention::Invert => {
        let transformed = complement_leading(data);
        complement(Convention::Vanilla.compute(engine, &transformed), 32)
      }
      Convention::BitReverseInvert => {
        let transformed: Vec<u8> = data.iter().map(|&b| reverse_bits(b as u32, 8) as u8).collect();
        reverse_bits(Convention::Invert.compute(engine, &transformed), 32)
      }
      Convention::BytewiseBitReverseInvert => {
        reverse_byte_order(Convention::BitReverseInvert.compute(engine, data), 32)
      }
    }
  }
}

/// Complement the first `min(4, len)` bytes of a message.
fn complement_leading(data: &[u8]) -> Vec<u8> {
  data
    .iter()
    .enumerate()
    .map(|(i, &b)| if i < 4 { complement(b as u32, 8) as u8 } else { b })
    .collect()
}
