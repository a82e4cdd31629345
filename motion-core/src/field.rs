use crate::config::LINEAR_SPEED_RANGE;
use crate::error::{SimError, SimResult};
use crate::graph::TransportGraph;
use crate::motion::{free_step, guided_offset, random_velocity};
use crate::node::{Motion, Node};
use crate::types::Position;
use rand::Rng;

/// The simulation area together with every moving node.
///
/// `nodes` keeps creation order for the whole run; proximity edges are
/// enumerated in that order. `network` is empty unless the nodes are guided.
#[derive(Debug, Default)]
pub struct Field {
    pub width: i64,
    pub height: i64,
    pub nodes: Vec<Node>,
    pub network: TransportGraph,
}

fn random_coord(extent: i64, rng: &mut impl Rng) -> i64 {
    if extent > 0 {
        rng.random_range(0..extent)
    } else {
        0
    }
}

impl Field {
    pub fn new(width: i64, height: i64) -> Self {
        Self {
            width,
            height,
            nodes: Vec::new(),
            network: TransportGraph::new(width, height),
        }
    }

    /// Creates `count` free nodes at random positions in `[0, width) x [0, height)`
    /// with random velocities.
    pub fn random_free(width: i64, height: i64, count: usize, rng: &mut impl Rng) -> Self {
        let mut field = Self::new(width, height);
        field.nodes = (0..count)
            .map(|i| {
                let x = random_coord(width, rng);
                let y = random_coord(height, rng);
                let velocity = random_velocity(rng);
                Node::free(Node::label(i), Position::new(x, y), velocity)
            })
            .collect();
        field
    }

    /// Creates `count` guided nodes on `network`.
    ///
    /// Each node starts on a random waypoint, heads for a random neighbor of
    /// it and gets a random linear speed.
    ///
    /// ### Errors
    /// - [`SimError::EmptyGraph`] if `count > 0` and there are no waypoints.
    /// - [`SimError::DeadEnd`] if a chosen start waypoint has no outgoing edges.
    pub fn random_guided(
        network: TransportGraph,
        count: usize,
        rng: &mut impl Rng,
    ) -> SimResult<Self> {
        let mut nodes = Vec::with_capacity(count);
        for i in 0..count {
            let start = network.random_waypoint(rng)?;
            let target = network.random_neighbor(start, rng)?;
            let linear_speed = rng.random_range(LINEAR_SPEED_RANGE);
            nodes.push(Node::guided(
                Node::label(i),
                network.waypoints[start].pos,
                target,
                linear_speed,
            ));
        }

        Ok(Self {
            width: network.width,
            height: network.height,
            nodes,
            network,
        })
    }

    /// Moves every node by one tick, in node order.
    ///
    /// ### Errors
    /// [`SimError::ZeroDistance`] if a guided node sits exactly on its target.
    pub fn advance(&mut self, rng: &mut impl Rng) -> SimResult<()> {
        for node in &mut self.nodes {
            match &mut node.motion {
                Motion::Free { velocity } => free_step(&mut node.pos, velocity, self.width, rng),
                Motion::Guided {
                    target,
                    linear_speed,
                } => {
                    let goal = self.network.waypoints[*target].pos;
                    let offset = guided_offset(node.pos, goal, *linear_speed)
                        .ok_or_else(|| SimError::ZeroDistance(node.id.clone()))?;
                    node.pos += offset;
                }
            }
        }
        Ok(())
    }
}
