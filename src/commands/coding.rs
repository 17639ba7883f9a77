//! `netlab crc` and `netlab hamming` commands

use crate::cli::Cli;
use crate::commands::render::print_json;
use netlab_core::coding::{crc, hamming};
use netlab_core::error::Result;
use serde::Serialize;

/// Execute the crc command
pub fn execute_crc(cli: &Cli, frame: &str, generator: &str, flip: Option<usize>) -> Result<()> {
    let transmission = crc::transmit(frame.trim(), generator.trim(), flip)?;

    crate::output_by_format!(cli.format,
        json => { print_json(&transmission)? },
        human => {
            println!("Frame:      {}", transmission.frame);
            println!("Generator:  {}", transmission.generator);
            println!("CRC:        {}", transmission.crc);
            println!("Sent:       {}{}", transmission.frame, transmission.crc);
            if let Some(index) = transmission.flipped {
                println!("Received:   {}{} (bit {} flipped)", transmission.received, transmission.crc, index);
            }
            println!("Remainder:  {}", transmission.remainder);
            println!(
                "Check:      {}",
                if transmission.valid { "ok" } else { "error detected" }
            );
        },
        records => {
            println!(
                "H netlab=1 records=1 mode=crc frame={} generator={} crc={} received={} remainder={} valid={}",
                transmission.frame,
                transmission.generator,
                transmission.crc,
                transmission.received,
                transmission.remainder,
                transmission.valid
            );
        }
    );
    Ok(())
}

#[derive(Debug, Serialize)]
struct Encoding<'a> {
    data: &'a str,
    parity_bits: usize,
    codeword: String,
}

/// Execute the hamming command: encode data bits, or with `correct` check
/// and repair a received codeword
pub fn execute_hamming(cli: &Cli, bits: &str, correct: bool) -> Result<()> {
    let bits = bits.trim();
    if correct {
        return output_correction(cli, &hamming::correct(bits)?);
    }

    let encoding = Encoding {
        data: bits,
        parity_bits: hamming::parity_bit_count(bits.len()),
        codeword: hamming::encode(bits)?,
    };

    crate::output_by_format!(cli.format,
        json => { print_json(&encoding)? },
        human => {
            if cli.quiet {
                println!("{}", encoding.codeword);
            } else {
                println!("Data:      {}", encoding.data);
                println!("Parity:    {} bits", encoding.parity_bits);
                println!("Codeword:  {}", encoding.codeword);
            }
        },
        records => {
            println!(
                "H netlab=1 records=1 mode=hamming data={} parity={} codeword={}",
                encoding.data, encoding.parity_bits, encoding.codeword
            );
        }
    );
    Ok(())
}

fn output_correction(cli: &Cli, correction: &hamming::Correction) -> Result<()> {
    crate::output_by_format!(cli.format,
        json => { print_json(correction)? },
        human => {
            println!("Received:   {}", correction.received);
            match correction.error_position {
                Some(position) => println!("Error at:   bit {}", position),
                None => println!("Error at:   none"),
            }
            println!("Corrected:  {}", correction.corrected);
            println!("Data:       {}", correction.data);
        },
        records => {
            println!(
                "H netlab=1 records=1 mode=hamming-correct received={} error={} corrected={} data={}",
                correction.received,
                correction
                    .error_position
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                correction.corrected,
                correction.data
            );
        }
    );
    Ok(())
}
