use serde::Serialize;

use crate::coding::{parse_bits, render_bits};
use crate::error::Result;

fn parse_generator(generator: &str) -> Result<Vec<u8>> {
    let bits = parse_bits("generator", generator)?;
    if bits.len() < 2 || bits[0] != 1 {
        crate::bail_invalid!("generator (must start with 1 and have at least 2 bits)", generator);
    }
    Ok(bits)
}

/// Modulo-2 long division of `dividend` followed by `generator.len() - 1`
/// zero bits
fn divide(dividend: &[u8], generator: &[u8]) -> Vec<u8> {
    let width = generator.len() - 1;
    let mut bits = dividend.to_vec();
    bits.resize(dividend.len() + width, 0);

    for i in 0..dividend.len() {
        if bits[i] == 1 {
            for (j, g) in generator.iter().enumerate() {
                bits[i + j] ^= g;
            }
        }
    }

    bits.split_off(dividend.len())
}

/// CRC remainder of `frame` under `generator`
pub fn remainder(frame: &str, generator: &str) -> Result<String> {
    let frame = parse_bits("frame", frame)?;
    let generator = parse_generator(generator)?;
    Ok(render_bits(&divide(&frame, &generator)))
}

/// `frame` with its CRC appended
pub fn codeword(frame: &str, generator: &str) -> Result<String> {
    Ok(format!("{}{}", frame, remainder(frame, generator)?))
}

/// Whether a received codeword divides to an all-zero remainder
pub fn check(codeword: &str, generator: &str) -> Result<bool> {
    Ok(remainder(codeword, generator)?.bytes().all(|b| b == b'0'))
}

/// Flip the bit at 0-based `index`
pub fn flip_bit(frame: &str, index: usize) -> Result<String> {
    let mut bits = parse_bits("frame", frame)?;
    let Some(bit) = bits.get_mut(index) else {
        crate::bail_invalid!(
            &format!("bit index (frame has {} bits)", frame.len()),
            index
        );
    };
    *bit ^= 1;
    Ok(render_bits(&bits))
}

/// One simulated transmission: CRC computed on the sent frame, optional
/// single-bit error on the received frame, check remainder of what arrived
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transmission {
    pub frame: String,
    pub generator: String,
    pub crc: String,
    pub received: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flipped: Option<usize>,
    /// Remainder of the received frame plus CRC
    pub remainder: String,
    /// True when the remainder is all zeros
    pub valid: bool,
}

pub fn transmit(frame: &str, generator: &str, flip: Option<usize>) -> Result<Transmission> {
    let crc = remainder(frame, generator)?;
    let received = match flip {
        Some(index) => flip_bit(frame, index)?,
        None => frame.to_string(),
    };
    let check_remainder = remainder(&format!("{}{}", received, crc), generator)?;
    let valid = check_remainder.bytes().all(|b| b == b'0');

    tracing::debug!(frame, generator, crc = %crc, valid, "crc transmission");

    Ok(Transmission {
        frame: frame.to_string(),
        generator: generator.to_string(),
        crc,
        received,
        flipped: flip,
        remainder: check_remainder,
        valid,
    })
}
