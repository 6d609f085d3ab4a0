//! Frame-level helpers around the [`fcs`] CRC-32 engines.
//!
//! Everything here operates on the byte streams that surround an FCS in
//! practice:
//!
//! - [`inet`]: the 16-bit internet ones-complement checksum carried in
//!   IPv4/UDP/ICMP headers inside the frame.
//! - [`dibit`]: 2-bit symbol coding for modems that transmit a byte as
//!   4 dibits.
//! - [`hex`]: hex string parsing and formatting for captures and the
//!   command line.
//!
//! The `fcs-calc` binary ties them together: it takes a hex payload and
//! prints its CRC-32 under every convention, its internet checksum, and
//! its dibit stream.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]

pub mod dibit;
pub mod hex;
pub mod inet;
