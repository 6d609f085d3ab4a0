use crc_fast::CrcAlgorithm;
use proptest::prelude::*;

use fcs::{bitops::reverse_byte_order, reference, serial, Convention, Engine};

// Both engines shift one bit at a time, so keep inputs modest.
proptest! {
  #[test]
  fn engines_agree_under_every_convention(data in proptest::collection::vec(any::<u8>(), 0..=256)) {
    for convention in Convention::ALL {
      let expected = convention.compute(Engine::Serial, &data);
      prop_assert_eq!(convention.compute(Engine::Parallel, &data), expected);
      prop_assert_eq!(convention.compute(Engine::Reference, &data), expected);
    }
  }

  #[test]
  fn oracle_matches_crc_fast_rust(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let ours = reference::crc32(&data);
    let external = crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, &data) as u32;
    prop_assert_eq!(ours, external);
  }

  #[test]
  fn bit_reverse_invert_matches_crc_fast_rust(data in proptest::collection::vec(any::<u8>(), 0..=256)) {
    let ours = Convention::BitReverseInvert.compute(Engine::Parallel, &data);
    let external = crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, &data) as u32;
    prop_assert_eq!(ours, external);
  }

  #[test]
  fn wire_form_is_byte_reversed_oracle(data in proptest::collection::vec(any::<u8>(), 0..=256)) {
    let wire = Convention::BytewiseBitReverseInvert.compute(Engine::Serial, &data);
    prop_assert_eq!(wire, reverse_byte_order(reference::crc32(&data), 32));
  }

  #[test]
  fn parallel_over_flushed_input_is_serial(data in proptest::collection::vec(any::<u8>(), 0..=256)) {
    let mut padded = data.clone();
    padded.extend_from_slice(&serial::flush_pattern(data.len()));
    prop_assert_eq!(fcs::parallel::crc32(&padded), serial::crc32(&data));
  }
}
