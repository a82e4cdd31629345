//! Simulation phases that make up one generation.
//!
//! The update loop for a single tick looks like:
//! 1. [`reroute_phase`] — guided nodes that are within reach of their
//!    target pick the next waypoint. Free nodes are skipped.
//! 2. [`proximity_phase`] — the proximity graph is rebuilt from the current
//!    positions; the caller records positions and edges at this point.
//! 3. [`motion_phase`] — every node moves by one tick.

use crate::{
    config::{EDGE_RADIUS, REACH_DISTANCE},
    error::{SimError, SimResult},
    field::Field,
    node::Motion,
    proximity::ProximityGraph,
    types::within_range,
};
use rand::Rng;

/// Replaces the target of every guided node that is within
/// [`REACH_DISTANCE`] of it (boundary included).
///
/// For such a node the target is replaced by a random neighbor of the
/// current target, repeatedly, until the target lies beyond the reach
/// distance. Before drawing, the transport graph is checked that every
/// waypoint the search can visit still leads beyond reach or to a dead end;
/// otherwise the search could run forever.
///
/// ### Parameters
/// - `field` - Field whose guided nodes are re-targeted; positions are not
///   touched.
/// - `rng` - Random source for the neighbor choices.
///
/// ### Errors
/// - [`SimError::RoutingTrap`] if the search could get stuck among waypoints
///   within reach.
/// - [`SimError::DeadEnd`] if the search arrives at a waypoint without
///   outgoing edges.
pub fn reroute_phase(field: &mut Field, rng: &mut impl Rng) -> SimResult<()> {
    let network = &field.network;

    for node in &mut field.nodes {
        let Motion::Guided { target, .. } = &mut node.motion else {
            continue;
        };

        let pos = node.pos;
        let near = |t: usize| within_range(pos, network.waypoints[t].pos, REACH_DISTANCE);
        if !near(*target) {
            continue;
        }
        if !network.reroute_terminates(pos, *target, REACH_DISTANCE) {
            return Err(SimError::RoutingTrap {
                node: node.id.clone(),
                waypoint: network.waypoints[*target].id.clone(),
            });
        }

        while near(*target) {
            *target = network.random_neighbor(*target, rng)?;
        }
    }
    Ok(())
}

/// Rebuilds `graph` for the current node positions using [`EDGE_RADIUS`].
pub fn proximity_phase(field: &Field, graph: &mut ProximityGraph) {
    graph.rebuild(&field.nodes, EDGE_RADIUS);
}

/// Moves every node of the field by one tick, in node order.
///
/// ### Errors
/// Propagates [`SimError::ZeroDistance`] from [`Field::advance`].
pub fn motion_phase(field: &mut Field, rng: &mut impl Rng) -> SimResult<()> {
    field.advance(rng)
}
