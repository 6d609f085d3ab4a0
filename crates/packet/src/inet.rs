//! Internet ones-complement checksum (RFC 1071).
//!
//! The 16-bit header checksum used by IPv4, ICMP, UDP, and TCP: sum the
//! data as big-endian 16-bit words in ones-complement arithmetic and
//! complement the result. An odd trailing byte is padded with a zero low
//! byte.

// SAFETY: All indexing is into `chunks_exact(2)` slices of length 2.
#![allow(clippy::indexing_slicing)]

/// Ones-complement checksum of `data`.
///
/// Verification uses the usual identity: a buffer with its correct
/// checksum stored in place sums to all-ones, so checksumming it yields
/// zero.
///
/// # Example
///
/// ```
/// use packet::inet;
///
/// assert_eq!(inet::checksum(&[]), 0xFFFF);
/// assert_eq!(inet::checksum(&[0x12, 0x34, 0x56]), 0x97CB);
/// ```
#[must_use]
pub fn checksum(data: &[u8]) -> u16 {
  let mut sum: u32 = 0;
  let mut chunks = data.chunks_exact(2);
  for pair in &mut chunks {
    sum += u32::from(u16::from_be_bytes([pair[0], pair[1]]));
  }
  if let Some(&last) = chunks.remainder().first() {
    sum += u32::from(last) << 8;
  }

  // End-around carry: fold until the sum fits 16 bits. Two folds always
  // suffice, but the loop states the actual invariant.
  while sum >> 16 != 0 {
    sum = (sum & 0xFFFF) + (sum >> 16);
  }

  !(sum as u16)
}
