use serde::Serialize;

use crate::graph::algos::distance_vector::relax::Relaxer;
use crate::graph::algos::distance_vector::table::RoutingTables;
use crate::graph::algos::distance_vector::DvStep;
use crate::topology::Topology;

/// Result of one driver tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundOutcome {
    /// 1-based round number
    pub round: usize,
    pub changed: bool,
    pub steps: Vec<DvStep>,
}

/// Step-until-stable driver for distance-vector tables.
///
/// Each [`step`](Self::step) runs one batch round over every node. Callers
/// poll [`is_stable`](Self::is_stable) between ticks; there is no
/// cancellation inside a round.
#[derive(Debug, Clone)]
pub struct StabilizationDriver {
    topology: Topology,
    tables: RoutingTables,
    round: usize,
    stable: bool,
}

impl StabilizationDriver {
    pub fn new(topology: Topology, tables: RoutingTables) -> Self {
        Self {
            topology,
            tables,
            round: 0,
            stable: false,
        }
    }

    pub fn step(&mut self) -> RoundOutcome {
        let mut relaxer = Relaxer::new(&self.topology, &mut self.tables);
        let changed = relaxer.batch_round();
        let steps = relaxer.steps;

        self.round += 1;
        self.stable = !changed;
        tracing::debug!(round = self.round, changed, "stabilization round");

        RoundOutcome {
            round: self.round,
            changed,
            steps,
        }
    }

    /// True once a round finished without changing any table
    pub fn is_stable(&self) -> bool {
        self.stable
    }

    /// Tick until stable or `max_rounds` rounds have run in this call
    pub fn run_until_stable(&mut self, max_rounds: usize) -> Vec<RoundOutcome> {
        let mut outcomes = Vec::new();
        while !self.stable && outcomes.len() < max_rounds {
            outcomes.push(self.step());
        }
        outcomes
    }

    pub fn rounds(&self) -> usize {
        self.round
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn tables(&self) -> &RoutingTables {
        &self.tables
    }

    pub fn into_tables(self) -> RoutingTables {
        self.tables
    }
}
