//! CRC-32 (IEEE 802.3) polynomial constants.
//!
//! Polynomial: 0x04C11DB7 (reflected: 0xEDB88320)
//! Used by: Ethernet FCS, gzip, PNG, zip, zlib

/// CRC-32 generator polynomial in normal (MSB-first) form.
pub const POLYNOMIAL: u32 = 0x04C1_1DB7;

/// CRC-32 polynomial with the explicit x^32 term.
///
/// The serial engine works on a 33-bit intermediate, so the reduction
/// must clear bit 32 as well as apply the low 32 polynomial taps.
pub const POLY_FULL: u64 = 0x1_04C1_1DB7;

/// CRC-32 polynomial in reflected (bit-reversed) form, for LSB-first
/// processing in the reference oracle.
pub const POLYNOMIAL_REFLECTED: u32 = 0xEDB8_8320;

/// CRC-32 check residue: the oracle's CRC of any message with its
/// big-endian wire FCS appended.
pub const RESIDUE: u32 = 0x2144_DF1C;

/// The same residue as seen inside an MSB-first receiver register
/// (`reverse_bits(complement(RESIDUE, 32), 32)`), quoted in most
/// Ethernet references as the FCS "magic number".
pub const RESIDUE_REGISTER: u32 = 0xC704_DD7B;

#[cfg(test)]
mod tests {
  use super::*;
  use crate::bitops::{complement, reverse_bits};

  #[test]
  fn reflected_form() {
    assert_eq!(reverse_bits(POLYNOMIAL, 32), POLYNOMIAL_REFLECTED);
  }

  #[test]
  fn residue_forms_agree() {
    assert_eq!(reverse_bits(complement(RESIDUE, 32), 32), RESIDUE_REGISTER);
  }
}
