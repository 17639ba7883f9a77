//! Error-detection command arguments

use clap::Args;

/// Arguments for the crc command.
#[derive(Args, Debug)]
pub struct CrcArgs {
    /// Frame bits, e.g. 1101011011
    pub frame: String,

    /// Generator polynomial bits, e.g. 10011
    pub generator: String,

    /// Flip this 0-based frame bit before checking
    #[arg(long)]
    pub flip: Option<usize>,
}

/// Arguments for the hamming command.
#[derive(Args, Debug)]
pub struct HammingArgs {
    /// Data bits to encode, or a codeword with --correct
    pub bits: String,

    /// Treat the input as a received codeword and fix a single-bit error
    #[arg(long)]
    pub correct: bool,
}
