//! CRC-32 frame check sequence engines and output conventions.
//!
//! Two independent engines compute the Ethernet CRC-32 polynomial
//! (0x04C11DB7) the way FCS hardware does: a bit-serial shift register
//! ([`serial`]) and a byte-parallel XOR network ([`parallel`]) whose 32
//! equations are derived from the serial update at compile time. A
//! zlib-style oracle ([`reference`]) cross-checks both.
//!
//! On top of the raw division, [`Convention`] composes the four output
//! conventions seen in practice:
//!
//! | Convention | Matches |
//! |------------|---------|
//! | `Vanilla` | raw polynomial remainder |
//! | `Invert` | remainder with complemented lead-in and output |
//! | `BitReverseInvert` | zlib / gzip / PNG `crc32()` |
//! | `BytewiseBitReverseInvert` | FCS octets in wire order |
//!
//! # Example
//!
//! ```
//! use fcs::{Convention, Engine};
//!
//! let data = b"123456789";
//! let crc = Convention::BitReverseInvert.compute(Engine::Parallel, data);
//! assert_eq!(crc, 0xCBF4_3926);
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. The convention layer allocates and
//! needs the `alloc` feature; the engines themselves are allocation-free
//! `const fn`s:
//!
//! ```toml
//! [dependencies]
//! fcs = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod bitops;
mod constants;
pub mod parallel;
pub mod reference;
pub mod serial;

#[cfg(feature = "alloc")]
mod variant;

pub use constants::{POLYNOMIAL, POLYNOMIAL_REFLECTED, POLY_FULL, RESIDUE, RESIDUE_REGISTER};
#[cfg(feature = "alloc")]
pub use variant::{Convention, Engine};
