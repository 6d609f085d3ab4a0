//! Width-explicit bit and byte transforms.
//!
//! Every operation takes the word's bit width as an explicit parameter:
//! a zero-valued word has no usable "natural" width, so inferring one is
//! a caller error here rather than a fallback. All functions are total
//! over their declared width and fail fast (via `assert!`) when the word
//! does not fit it.
//!
//! These are the building blocks of the output conventions in
//! [`crate::Convention`]: bit reversal within a word, bit reversal within
//! each byte, byte-order reversal, and fixed-width complement.

/// All-ones mask for a width in `1..=32`.
const fn width_mask(width: u32) -> u32 {
  if width == 32 {
    u32::MAX
  } else {
    (1u32 << width) - 1
  }
}

/// Width must be in `1..=32` and the word must be representable in it.
const fn check_word(word: u32, width: u32) {
  assert!(width >= 1 && width <= 32, "width must be in 1..=32");
  assert!(word & width_mask(width) == word, "word does not fit declared width");
}

/// Reverse the bits of a `width`-bit word end-to-end.
///
/// Bit `i` of the result equals bit `width - 1 - i` of the input.
///
/// # Example
///
/// ```
/// use fcs::bitops::reverse_bits;
///
/// assert_eq!(reverse_bits(0b1101, 4), 0b1011);
/// assert_eq!(reverse_bits(0x04C1_1DB7, 32), 0xEDB8_8320);
/// ```
#[must_use]
pub const fn reverse_bits(word: u32, width: u32) -> u32 {
  check_word(word, width);
  let mut rev = 0u32;
  let mut i = 0;
  while i < width {
    rev = (rev << 1) | ((word >> i) & 1);
    i = i.strict_add(1);
  }
  rev
}

/// Reverse the bits within each byte of a word, keeping byte order.
///
/// The word is treated as `ceil(width / 8)` bytes (minimum 1); a width
/// that is not a byte multiple still reverses whole 8-bit bytes, so the
/// result of a partial top byte may occupy its full 8 bits.
#[must_use]
pub const fn reverse_bits_per_byte(word: u32, width: u32) -> u32 {
  check_word(word, width);
  let num_bytes = width.div_ceil(8);
  let mut rev = 0u32;
  let mut i = 0;
  while i < num_bytes {
    let byte = (word >> (i * 8)) & 0xFF;
    rev |= reverse_bits(byte, 8) << (i * 8);
    i = i.strict_add(1);
  }
  rev
}

/// Reverse the byte order of a `width`-bit word.
///
/// The most significant byte becomes the least significant; bit order
/// within each byte is untouched. Byte count is `ceil(width / 8)`,
/// minimum 1.
///
/// # Example
///
/// ```
/// use fcs::bitops::reverse_byte_order;
///
/// assert_eq!(reverse_byte_order(0x1234_5678, 32), 0x7856_3412);
/// assert_eq!(reverse_byte_order(0x12, 8), 0x12);
/// ```
#[must_use]
pub const fn reverse_byte_order(word: u32, width: u32) -> u32 {
  check_word(word, width);
  let num_bytes = width.div_ceil(8);
  let mut rev = 0u32;
  let mut i = 0;
  while i < num_bytes {
    rev = (rev << 8) | ((word >> (i * 8)) & 0xFF);
    i = i.strict_add(1);
  }
  rev
}

/// Bitwise complement within a declared width: `(1 << width) - 1 - word`.
///
/// # Example
///
/// ```
/// use fcs::bitops::complement;
///
/// assert_eq!(complement(0x00, 8), 0xFF);
/// assert_eq!(complement(0x0F, 4), 0x00);
/// ```
#[must_use]
pub const fn complement(word: u32, width: u32) -> u32 {
  check_word(word, width);
  word ^ width_mask(width)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reverse_bits_known_values() {
    assert_eq!(reverse_bits(0b1, 1), 0b1);
    assert_eq!(reverse_bits(0b1, 8), 0b1000_0000);
    assert_eq!(reverse_bits(0xA5, 8), 0xA5); // palindrome
    assert_eq!(reverse_bits(0x01, 32), 0x8000_0000);
  }

  #[test]
  fn reverse_bits_is_involution() {
    for width in [1u32, 4, 8, 16, 24, 32] {
      for word in [0u32, 1, 0x5, 0xA, (1u64 << width) as u32 >> 1] {
        let word = word & if width == 32 { u32::MAX } else { (1 << width) - 1 };
        assert_eq!(reverse_bits(reverse_bits(word, width), width), word);
      }
    }
  }

  #[test]
  fn reverse_bits_per_byte_known_values() {
    // 0xB9 = 1011_1001 -> 1001_1101 = 0x9D, per byte independently.
    assert_eq!(reverse_bits_per_byte(0xB9, 8), 0x9D);
    assert_eq!(reverse_bits_per_byte(0xB9BE, 16), 0x9D7D);
    // Byte order is untouched even though every byte is reversed.
    assert_eq!(reverse_bits_per_byte(0x0180_0000, 32), 0x8001_0000);
  }

  #[test]
  fn reverse_byte_order_known_values() {
    assert_eq!(reverse_byte_order(0xAABB, 16), 0xBBAA);
    assert_eq!(reverse_byte_order(0x0000_00FF, 32), 0xFF00_0000);
  }

  #[test]
  fn reverse_byte_order_is_involution() {
    for word in [0u32, 1, 0xDEAD_BEEF, 0x0102_0304, u32::MAX] {
      assert_eq!(reverse_byte_order(reverse_byte_order(word, 32), 32), word);
    }
    for word in [0u32, 0x12, 0xABCD] {
      assert_eq!(reverse_byte_order(reverse_byte_order(word, 16), 16), word);
    }
  }

  #[test]
  fn complement_known_values() {
    assert_eq!(complement(0, 1), 1);
    assert_eq!(complement(0, 32), u32::MAX);
    assert_eq!(complement(0x5555_5555, 32), 0xAAAA_AAAA);
    assert_eq!(complement(complement(0x42, 8), 8), 0x42);
  }

  #[test]
  #[should_panic(expected = "word does not fit declared width")]
  fn oversized_word_panics() {
    let _ = reverse_bits(0x100, 8);
  }

  #[test]
  #[should_panic(expected = "width must be in 1..=32")]
  fn zero_width_panics() {
    let _ = complement(0, 0);
  }
}
