//! `netlab prim` command - minimum spanning tree

use crate::cli::Cli;
use crate::commands::render::{format_edges, format_set, print_json, records_list};
use netlab_core::error::Result;
use netlab_core::graph::{prim, PrimAction, SpanningTreeResult};
use netlab_core::topology::{NodeId, Topology};

/// Execute the prim command
pub fn execute(cli: &Cli, topology: &Topology, start: &NodeId) -> Result<()> {
    let result = prim(topology, start)?;

    if !result.spanning {
        tracing::info!(
            reached = result.visited.len(),
            nodes = topology.node_count(),
            "graph is disconnected; tree covers the start component only"
        );
    }

    crate::output_by_format!(cli.format,
        json => { print_json(&result)? },
        human => { output_human(cli, topology, &result) },
        records => { output_records(&result) }
    );
    Ok(())
}

fn action_label(action: PrimAction) -> &'static str {
    match action {
        PrimAction::Kept => "kept",
        PrimAction::Skipped => "skipped",
    }
}

fn output_human(cli: &Cli, topology: &Topology, result: &SpanningTreeResult) {
    if result.spanning {
        println!("Minimum spanning tree from {}", result.start);
    } else {
        println!(
            "Spanning tree from {} covers {} of {} nodes (graph is disconnected)",
            result.start,
            result.visited.len(),
            topology.node_count()
        );
    }
    for edge in &result.edges {
        println!("  {}", edge);
    }
    println!("Total weight: {}", result.total_weight);

    if cli.quiet {
        return;
    }

    println!();
    println!("Steps:");
    for step in &result.steps {
        println!(
            "  #{} {:<7} {}  visited={}",
            step.iteration,
            action_label(step.action),
            step.edge,
            format_set(&step.visited)
        );
        println!("     tree={} candidates={}", format_edges(&step.tree), format_edges(&step.candidates));
    }
}

fn output_records(result: &SpanningTreeResult) {
    println!(
        "H netlab=1 records=1 mode=prim start={} edges={} weight={} spanning={} steps={}",
        result.start,
        result.edges.len(),
        result.total_weight,
        result.spanning,
        result.steps.len()
    );

    for edge in &result.edges {
        println!("E {} {} weight={}", edge.from, edge.to, edge.weight);
    }

    for step in &result.steps {
        println!(
            "S {} {} {} {} weight={} visited={}",
            step.iteration,
            action_label(step.action),
            step.edge.from,
            step.edge.to,
            step.edge.weight,
            records_list(&step.visited)
        );
    }
}
