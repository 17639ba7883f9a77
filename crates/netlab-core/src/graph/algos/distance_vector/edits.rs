use crate::graph::algos::distance_vector::table::{Route, RoutingTable, RoutingTables};
use crate::graph::algos::shared::Cost;
use crate::topology::{AdjacencyMap, NodeId, Topology, TopologyChange};

/// Bring `tables` in line with an edit already applied to `topology`.
///
/// Only the tables of the edited nodes are touched, and within them only the
/// self entry and direct-neighbour entries. Multi-hop routes are left for
/// relaxation to correct; stale routes through a removed node persist until
/// a cheaper alternative is relaxed in.
pub fn apply_change(topology: &Topology, tables: &mut RoutingTables, change: &TopologyChange) {
    let adjacency = topology.adjacency();

    match change {
        TopologyChange::NodeAdded { id } => {
            for table in tables.tables_mut() {
                if !table.routes.contains_key(id) {
                    table.set(id.clone(), Route::unreachable());
                }
            }
            tables.insert(RoutingTable::base(topology, &adjacency, id));
        }
        TopologyChange::NodeRemoved { id } => {
            tables.remove(id);
        }
        TopologyChange::EdgeAdded { from, to, .. }
        | TopologyChange::WeightChanged { from, to, .. } => {
            resync(topology, &adjacency, tables, from);
            resync(topology, &adjacency, tables, to);
        }
        TopologyChange::EdgeRemoved { from, to } => {
            resync(topology, &adjacency, tables, from);
            resync(topology, &adjacency, tables, to);
            drop_direct_route(&adjacency, tables, from, to);
            drop_direct_route(&adjacency, tables, to, from);
        }
    }

    tracing::debug!(%change, tables = tables.len(), "routing tables adjusted");
}

/// Reset `node`'s self entry and its direct-neighbour entries from the
/// current link weights
fn resync(topology: &Topology, adjacency: &AdjacencyMap, tables: &mut RoutingTables, node: &NodeId) {
    if !topology.contains(node) {
        return;
    }
    tables.ensure(topology, adjacency, node);
    let Some(table) = tables.get_mut(node) else {
        return;
    };

    table.set(node.clone(), Route::via(Cost::ZERO, node.clone()));
    for neighbor in adjacency.neighbor_ids(node) {
        if let Some(weight) = adjacency.direct_weight(node, &neighbor) {
            table.set(neighbor.clone(), Route::via(Cost::new(weight), neighbor));
        }
    }
}

/// After a link is gone, forget `from`'s route to `to` if it used that link
fn drop_direct_route(
    adjacency: &AdjacencyMap,
    tables: &mut RoutingTables,
    from: &NodeId,
    to: &NodeId,
) {
    if adjacency.direct_weight(from, to).is_some() {
        return;
    }
    let Some(table) = tables.get_mut(from) else {
        return;
    };
    if table.next_hop(to) == Some(to) {
        table.set(to.clone(), Route::unreachable());
    }
}
