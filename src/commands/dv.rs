//! `netlab dv` command - distance-vector routing tables
//!
//! Builds a base table per node and converges them, in one run or round by
//! round with `--watch`. Edits are then applied through the topology editor
//! in a fixed order (node removals, edge removals, edge additions, weight
//! changes), re-relaxing after each one.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::cli::parse::{EdgePair, WeightEdit};
use crate::cli::{Cli, OutputFormat};
use crate::commands::render::{or_dash, print_json};
use netlab_core::error::{NetlabError, Result};
use netlab_core::graph::{
    converge, handle_change, DvTrace, RoutingTable, RoutingTables, StabilizationDriver, Strategy,
};
use netlab_core::topology::{IdScheme, NodeId, Topology, TopologyChange, TopologyEditor};

/// Resolved dv settings (CLI flags over config)
#[derive(Debug, Clone)]
pub struct DvOptions {
    pub node: Option<NodeId>,
    pub strategy: Strategy,
    pub remove_nodes: Vec<NodeId>,
    pub remove_edges: Vec<EdgePair>,
    pub add_edges: Vec<WeightEdit>,
    pub set_weights: Vec<WeightEdit>,
    pub watch: bool,
    pub max_rounds: usize,
    pub interval_ms: u64,
}

/// Relaxation counts for one phase of the run
#[derive(Debug, Clone, Default, Serialize)]
struct PhaseSummary {
    relaxations: usize,
    changed: usize,
}

impl PhaseSummary {
    fn from_trace(trace: &DvTrace) -> Self {
        Self {
            relaxations: trace.steps.len(),
            changed: trace.changed_steps().count(),
        }
    }
}

#[derive(Debug, Serialize)]
struct EditReport {
    change: TopologyChange,
    #[serde(flatten)]
    summary: PhaseSummary,
}

#[derive(Debug, Serialize)]
struct WatchReport {
    rounds: usize,
    stable: bool,
}

#[derive(Debug, Serialize)]
struct DvReport<'a> {
    strategy: Strategy,
    convergence: PhaseSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    watch: Option<WatchReport>,
    edits: Vec<EditReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    node: Option<&'a NodeId>,
    tables: Vec<&'a RoutingTable>,
}

/// Execute the dv command
pub fn execute(cli: &Cli, topology: Topology, scheme: IdScheme, options: &DvOptions) -> Result<()> {
    topology.require_non_negative_weights()?;
    let mut editor = TopologyEditor::from_topology(topology, scheme);
    let pending: Rc<RefCell<Vec<TopologyChange>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&pending);
    editor.subscribe(move |_, change| sink.borrow_mut().push(change.clone()));

    let started = Instant::now();
    let mut tables = RoutingTables::build(editor.topology());

    let (convergence, watch) = if options.watch {
        let (settled, summary, report) = run_watch(cli, editor.topology(), tables, options)?;
        tables = settled;
        (summary, Some(report))
    } else {
        let trace = converge(editor.topology(), &mut tables, options.strategy);
        (PhaseSummary::from_trace(&trace), None)
    };
    netlab_core::trace_time!(started, "dv_converge", relaxations = convergence.relaxations);

    let mut edits = Vec::new();
    for id in &options.remove_nodes {
        editor.remove_node(id)?;
        edits.extend(drain_changes(&editor, &pending, &mut tables, options.strategy)?);
    }
    for pair in &options.remove_edges {
        editor.remove_edge(&pair.from, &pair.to)?;
        edits.extend(drain_changes(&editor, &pending, &mut tables, options.strategy)?);
    }
    for edit in &options.add_edges {
        editor.add_edge(&edit.from, &edit.to, edit.weight)?;
        edits.extend(drain_changes(&editor, &pending, &mut tables, options.strategy)?);
    }
    for edit in &options.set_weights {
        editor.set_edge_weight(&edit.from, &edit.to, edit.weight)?;
        edits.extend(drain_changes(&editor, &pending, &mut tables, options.strategy)?);
    }

    let selected: Vec<&RoutingTable> = match &options.node {
        Some(node) => vec![tables
            .get(node)
            .ok_or_else(|| NetlabError::not_found("routing table", node))?],
        None => tables.iter().map(|(_, table)| table).collect(),
    };

    let report = DvReport {
        strategy: options.strategy,
        convergence,
        watch,
        edits,
        node: options.node.as_ref(),
        tables: selected,
    };

    crate::output_by_format!(cli.format,
        json => { print_json(&report)? },
        human => { output_human(cli, &report) },
        records => { output_records(&report) }
    );
    Ok(())
}

/// Feed every change the editor reported since the last call to the tables
fn drain_changes(
    editor: &TopologyEditor,
    pending: &Rc<RefCell<Vec<TopologyChange>>>,
    tables: &mut RoutingTables,
    strategy: Strategy,
) -> Result<Vec<EditReport>> {
    let changes: Vec<TopologyChange> = pending.borrow_mut().drain(..).collect();
    let mut reports = Vec::with_capacity(changes.len());
    for change in changes {
        let trace = handle_change(editor.topology(), tables, &change, strategy)?;
        reports.push(EditReport {
            summary: PhaseSummary::from_trace(&trace),
            change,
        });
    }
    Ok(reports)
}

/// Tick the stabilization driver until stable, the round cap, or Ctrl-C
fn run_watch(
    cli: &Cli,
    topology: &Topology,
    tables: RoutingTables,
    options: &DvOptions,
) -> Result<(RoutingTables, PhaseSummary, WatchReport)> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);

    let _ = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    });

    let show_progress = cli.format == OutputFormat::Human && !cli.quiet;
    let mut driver = StabilizationDriver::new(topology.clone(), tables);
    let mut summary = PhaseSummary::default();

    while !driver.is_stable() && driver.rounds() < options.max_rounds {
        if interrupted.load(Ordering::SeqCst) {
            return Err(NetlabError::Interrupted);
        }

        let outcome = driver.step();
        let changed = outcome.steps.iter().filter(|step| step.changed).count();
        summary.relaxations += outcome.steps.len();
        summary.changed += changed;

        if show_progress {
            println!(
                "round {}: {} of {} tables changed",
                outcome.round,
                changed,
                outcome.steps.len()
            );
        }

        if !driver.is_stable() && options.interval_ms > 0 {
            thread::sleep(Duration::from_millis(options.interval_ms));
        }
    }

    if !driver.is_stable() {
        tracing::warn!(
            rounds = driver.rounds(),
            "routing tables did not stabilise within the round limit"
        );
    }

    let report = WatchReport {
        rounds: driver.rounds(),
        stable: driver.is_stable(),
    };
    Ok((driver.into_tables(), summary, report))
}

fn output_human(cli: &Cli, report: &DvReport) {
    if !cli.quiet {
        match &report.watch {
            Some(watch) if watch.stable => println!(
                "Stable after {} rounds ({} relaxations)",
                watch.rounds, report.convergence.relaxations
            ),
            Some(watch) => println!("Not stable after {} rounds", watch.rounds),
            None => println!(
                "Converged with {} strategy: {} relaxations, {} changed",
                report.strategy, report.convergence.relaxations, report.convergence.changed
            ),
        }
        for edit in &report.edits {
            println!(
                "After {}: {} relaxations, {} changed",
                edit.change, edit.summary.relaxations, edit.summary.changed
            );
        }
        println!();
    }

    for (i, table) in report.tables.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("Routing table for {}", table.node);
        println!("  {:<8} {:>10}  Next hop", "Dest", "Distance");
        for (dest, route) in &table.routes {
            println!(
                "  {:<8} {:>10}  {}",
                dest,
                route.distance,
                or_dash(route.next_hop.as_ref())
            );
        }
    }
}

fn output_records(report: &DvReport) {
    println!(
        "H netlab=1 records=1 mode=dv strategy={} tables={} relaxations={} changed={}",
        report.strategy,
        report.tables.len(),
        report.convergence.relaxations,
        report.convergence.changed
    );

    if let Some(watch) = &report.watch {
        println!("W rounds={} stable={}", watch.rounds, watch.stable);
    }

    for edit in &report.edits {
        println!(
            "X \"{}\" relaxations={} changed={}",
            edit.change, edit.summary.relaxations, edit.summary.changed
        );
    }

    for table in &report.tables {
        for (dest, route) in &table.routes {
            println!(
                "R {} {} distance={} next={}",
                table.node,
                dest,
                route.distance,
                or_dash(route.next_hop.as_ref())
            );
        }
    }
}
