//! Main CLI commands enum

use clap::Subcommand;

pub mod coding;
pub mod graph;
pub mod meta;

pub use coding::{CrcArgs, HammingArgs};
pub use graph::{DijkstraArgs, DvArgs, GenerateArgs, PrimArgs};
pub use meta::ConfigCommands;

/// Top-level netlab commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shortest paths from a source node (Dijkstra)
    Dijkstra(DijkstraArgs),

    /// Minimum spanning tree from a start node (Prim)
    Prim(PrimArgs),

    /// Distance-vector routing tables
    Dv(DvArgs),

    /// Generate a graph of nodes laid out on a circle
    Generate(GenerateArgs),

    /// Compute and check a CRC over a bit frame
    Crc(CrcArgs),

    /// Hamming-encode data bits, or correct a received codeword
    Hamming(HammingArgs),

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}
