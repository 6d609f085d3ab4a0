//! The four output conventions across all three engines.
//!
//! Run with: `cargo run --example conventions -p fcs`

use fcs::{reference, Convention, Engine, RESIDUE};

fn main() {
  println!("=== CRC-32 Conventions ===\n");

  let data = b"123456789";
  convention_table(data);
  wire_frame_check(data);
}

/// Every convention, computed by every engine; rows must agree.
fn convention_table(data: &[u8]) {
  println!("--- Convention x Engine ({} bytes) ---\n", data.len());

  for convention in Convention::ALL {
    print!("{:28}", convention.name());
    for engine in Engine::ALL {
      let crc = convention.compute(engine, data);
      print!(" 0x{crc:08X}");
    }
    println!();

    let expected = convention.compute(Engine::Serial, data);
    for engine in Engine::ALL {
      assert_eq!(convention.compute(engine, data), expected);
    }
  }

  // BitReverseInvert is the zlib value.
  assert_eq!(Convention::BitReverseInvert.compute(Engine::Serial, data), reference::crc32(data));

  println!();
}

/// Append the wire-order FCS and verify the receiver-side residue.
fn wire_frame_check(data: &[u8]) {
  println!("--- Wire Frame ---\n");

  let fcs = Convention::BytewiseBitReverseInvert.compute(Engine::Parallel, data);
  println!("Wire FCS:  0x{fcs:08X}");

  let mut frame = data.to_vec();
  frame.extend_from_slice(&fcs.to_be_bytes());

  let residue = reference::crc32(&frame);
  println!("Residue:   0x{residue:08X}");
  assert_eq!(residue, RESIDUE);
  println!("Verified: frame leaves the constant check residue");
}
