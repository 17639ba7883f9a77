use serde::Serialize;

use crate::coding::{parse_bits, render_bits};
use crate::error::Result;

/// Smallest `r` with `2^r >= n + r + 1`
pub fn parity_bit_count(data_len: usize) -> usize {
    let mut r = 0;
    while (1usize << r) < data_len + r + 1 {
        r += 1;
    }
    r
}

fn is_parity_position(position: usize) -> bool {
    position.is_power_of_two()
}

/// Encode `data` with even parity bits at the power-of-two positions
/// (1-based) and data bits everywhere else
pub fn encode(data: &str) -> Result<String> {
    let data = parse_bits("data", data)?;
    let r = parity_bit_count(data.len());
    let len = data.len() + r;

    let mut word = vec![0u8; len];
    let mut source = data.iter();
    for position in 1..=len {
        if !is_parity_position(position) {
            word[position - 1] = source.next().copied().unwrap_or(0);
        }
    }

    for i in 0..r {
        let parity = 1usize << i;
        let value = (1..=len)
            .filter(|position| position & parity != 0)
            .fold(0, |acc, position| acc ^ word[position - 1]);
        word[parity - 1] = value;
    }

    Ok(render_bits(&word))
}

fn syndrome_of(bits: &[u8]) -> usize {
    bits.iter()
        .enumerate()
        .filter(|(_, bit)| **bit == 1)
        .fold(0, |acc, (index, _)| acc ^ (index + 1))
}

/// 1-based position of a single flipped bit, or 0 when parity checks pass
pub fn syndrome(codeword: &str) -> Result<usize> {
    Ok(syndrome_of(&parse_bits("codeword", codeword)?))
}

/// Data bits of a codeword (everything off the parity positions)
pub fn extract_data(codeword: &str) -> Result<String> {
    let bits = parse_bits("codeword", codeword)?;
    Ok(data_bits(&bits))
}

fn data_bits(bits: &[u8]) -> String {
    let data: Vec<u8> = bits
        .iter()
        .enumerate()
        .filter(|(index, _)| !is_parity_position(index + 1))
        .map(|(_, bit)| *bit)
        .collect();
    render_bits(&data)
}

/// Outcome of checking a received codeword
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Correction {
    pub received: String,
    pub corrected: String,
    pub data: String,
    /// 1-based position that was flipped back, if any
    pub error_position: Option<usize>,
}

/// Fix at most one flipped bit. A syndrome past the end of the word means
/// more than one bit is wrong and is rejected.
pub fn correct(codeword: &str) -> Result<Correction> {
    let mut bits = parse_bits("codeword", codeword)?;
    let position = syndrome_of(&bits);

    let error_position = match position {
        0 => None,
        p if p <= bits.len() => {
            bits[p - 1] ^= 1;
            Some(p)
        }
        p => crate::bail_invalid!(
            &format!("codeword (syndrome {} exceeds length {})", p, bits.len()),
            codeword
        ),
    };

    tracing::debug!(codeword, ?error_position, "hamming correction");

    Ok(Correction {
        received: codeword.to_string(),
        corrected: render_bits(&bits),
        data: data_bits(&bits),
        error_position,
    })
}
