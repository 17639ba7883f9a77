//! Error-detection codecs shown next to the routing demos
//!
//! - `crc`: modulo-2 division, CRC generation and checking, bit flips
//! - `hamming`: even-parity Hamming encoding and single-bit correction
//!
//! Bit strings are plain `0`/`1` text, as typed into the classroom tool.

pub mod crc;
pub mod hamming;

use crate::error::Result;

/// Parse a non-empty `0`/`1` string into bits
pub(crate) fn parse_bits(context: &str, input: &str) -> Result<Vec<u8>> {
    if input.is_empty() {
        crate::bail_invalid!(context, "(empty)");
    }
    input
        .chars()
        .map(|c| match c {
            '0' => Ok(0),
            '1' => Ok(1),
            _ => Err(crate::error::NetlabError::invalid_value(context, input)),
        })
        .collect()
}

pub(crate) fn render_bits(bits: &[u8]) -> String {
    bits.iter().map(|bit| if *bit == 1 { '1' } else { '0' }).collect()
}
