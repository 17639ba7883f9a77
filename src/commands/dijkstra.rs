//! `netlab dijkstra` command - shortest paths from a source
//!
//! With `--to` the run stops at the target and reports the path; without it
//! the whole shortest-path tree and distance table are reported. Human output
//! includes the per-extraction trace unless `--quiet`.

use crate::cli::Cli;
use crate::commands::render::{format_distances, format_list, format_set, or_dash, print_json};
use netlab_core::error::Result;
use netlab_core::format::join_display;
use netlab_core::graph::{dijkstra, ShortestPathResult};
use netlab_core::topology::{NodeId, Topology};

/// Execute the dijkstra command
pub fn execute(
    cli: &Cli,
    topology: &Topology,
    source: &NodeId,
    target: Option<&NodeId>,
) -> Result<()> {
    let result = dijkstra(topology, source, target)?;

    crate::output_by_format!(cli.format,
        json => { print_json(&result)? },
        human => { output_human(cli, &result) },
        records => { output_records(&result) }
    );
    Ok(())
}

fn output_human(cli: &Cli, result: &ShortestPathResult) {
    match &result.target {
        Some(target) if result.found => {
            println!(
                "Shortest path {} -> {}: {}",
                result.source,
                target,
                result
                    .path
                    .iter()
                    .map(NodeId::to_string)
                    .collect::<Vec<_>>()
                    .join(" -> ")
            );
            if let Some(total) = result.total_distance {
                println!("Total distance: {}", total);
            }
            if !result.path_edges.is_empty() {
                println!("Edges: {}", join_display(&result.path_edges));
            }
        }
        Some(target) => {
            println!("No path from {} to {}", result.source, target);
        }
        None => {
            println!("Distances from {}:", result.source);
            for (id, distance) in &result.distances {
                let via = result.previous.get(id).and_then(Option::as_ref);
                println!("  {:<6} {:>8}  via {}", id, distance, or_dash(via));
            }
        }
    }

    if cli.quiet {
        return;
    }

    println!();
    println!("Steps:");
    for step in &result.steps {
        println!(
            "  #{} current={} visited={} queue={}",
            step.iteration,
            step.current,
            format_set(&step.visited),
            format_list(&step.queue)
        );
        println!("     {}", format_distances(&step.distances));
    }
}

fn output_records(result: &ShortestPathResult) {
    println!(
        "H netlab=1 records=1 mode=dijkstra source={} target={} found={} distance={} steps={}",
        result.source,
        or_dash(result.target.as_ref()),
        result.found,
        result
            .total_distance
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string()),
        result.steps.len()
    );

    for edge in &result.path_edges {
        println!("E {} {} weight={}", edge.from, edge.to, edge.weight);
    }

    for (id, distance) in &result.distances {
        let via = result.previous.get(id).and_then(Option::as_ref);
        println!("D {} distance={} via={}", id, distance, or_dash(via));
    }

    for step in &result.steps {
        println!(
            "S {} current={} visited={} queue={}",
            step.iteration,
            step.current,
            crate::commands::render::records_list(&step.visited),
            crate::commands::render::records_list(&step.queue)
        );
    }
}
