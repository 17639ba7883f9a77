//! `netlab generate` command - circular starter graphs

use crate::cli::Cli;
use netlab_core::config::LayoutConfig;
use netlab_core::error::Result;
use netlab_core::topology::{circular_layout, IdScheme};

const MIN_NODES: usize = 2;
const MAX_ALPHABETIC: usize = 26;
const MAX_NUMERIC: usize = 1000;

/// Execute the generate command
pub fn execute(cli: &Cli, count: usize, scheme: IdScheme, layout: &LayoutConfig) -> Result<()> {
    let max = match scheme {
        IdScheme::Alphabetic => MAX_ALPHABETIC,
        IdScheme::Numeric => MAX_NUMERIC,
    };
    if !(MIN_NODES..=max).contains(&count) {
        netlab_core::bail_usage!(format!(
            "--nodes must be between {} and {} for {} ids, got {}",
            MIN_NODES, max, scheme, count
        ));
    }

    let topology = circular_layout(count, scheme, layout);
    tracing::debug!(count, %scheme, "generated circular layout");

    // The generated graph is the product, so human mode prints it as JSON too
    crate::output_by_format!(cli.format,
        json => { println!("{}", topology.to_json_pretty()?) },
        human => { println!("{}", topology.to_json_pretty()?) },
        records => {
            println!(
                "H netlab=1 records=1 mode=generate scheme={} nodes={}",
                scheme,
                topology.node_count()
            );
            for node in &topology.nodes {
                println!("N {} x={:.3} y={:.3}", node.id, node.x, node.y);
            }
        }
    );
    Ok(())
}
