//! Trace assembly for both motion models.
//!
//! A run builds its [`Field`] once, then for every generation:
//! re-routes guided nodes, records positions and proximity edges, and moves
//! the nodes (see [`crate::phases`]).

use crate::{
    config::{BrownianConfig, TransportConfig},
    error::SimResult,
    field::Field,
    graph::TransportGraph,
    phases,
    proximity::ProximityGraph,
    trace::{Generation, Trace},
};
use rand::Rng;
use tracing::{debug, info};

/// Generates a random-walk trace on a `width x height` field.
pub fn generate_brownian(cfg: &BrownianConfig, rng: &mut impl Rng) -> SimResult<Trace> {
    info!(
        width = cfg.width,
        height = cfg.height,
        nodes = cfg.node_count,
        generations = cfg.generation_count,
        "generating random-walk trace"
    );

    let mut field = Field::random_free(
        i64::from(cfg.width),
        i64::from(cfg.height),
        cfg.node_count as usize,
        rng,
    );
    run_generations(&mut field, cfg.generation_count, rng)
}

/// Generates a trace of nodes travelling along `network`.
///
/// ### Errors
/// Fails if the nodes cannot be placed on the network or a node gets stuck
/// while picking its next waypoint (see [`phases::reroute_phase`]).
pub fn generate_transport(
    network: TransportGraph,
    cfg: &TransportConfig,
    rng: &mut impl Rng,
) -> SimResult<Trace> {
    info!(
        waypoints = network.len(),
        nodes = cfg.node_count,
        generations = cfg.generation_count,
        "generating transport trace"
    );

    let mut field = Field::random_guided(network, cfg.node_count as usize, rng)?;
    run_generations(&mut field, cfg.generation_count, rng)
}

/// Runs `generation_count` ticks on `field` and collects one [`Generation`]
/// per tick, numbered from 1.
pub fn run_generations(
    field: &mut Field,
    generation_count: u32,
    rng: &mut impl Rng,
) -> SimResult<Trace> {
    let mut trace = Trace::new(field.width, field.height, generation_count);
    trace.generations.reserve(generation_count as usize);
    let mut graph = ProximityGraph::default();

    for n in 1..=generation_count {
        phases::reroute_phase(field, rng)?;
        phases::proximity_phase(field, &mut graph);

        let snapshot = Generation::capture(n, &field.nodes, &graph);
        debug!(
            generation = n,
            nodes = snapshot.nodes.len(),
            edges = snapshot.edges.len(),
            "generation recorded"
        );
        trace.generations.push(snapshot);

        phases::motion_phase(field, rng)?;
    }
    Ok(trace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::REACH_DISTANCE, error::SimError, node::Motion, rng::create_rng, types::Position,
    };

    fn brownian(width: u32, height: u32, nodes: u32, generations: u32) -> BrownianConfig {
        BrownianConfig {
            width,
            height,
            node_count: nodes,
            generation_count: generations,
        }
    }

    fn corridor() -> TransportGraph {
        let mut g = TransportGraph::new(400, 10);
        g.add_waypoint("west", Position::new(0, 0));
        g.add_waypoint("east", Position::new(300, 0));
        g.connect("west", "east");
        g.connect("east", "west");
        g
    }

    #[test]
    fn brownian_trace_has_one_generation_per_tick() {
        let mut rng = create_rng(8);
        let trace = generate_brownian(&brownian(100, 80, 4, 6), &mut rng).unwrap();

        assert_eq!((trace.width, trace.height, trace.generation_count), (100, 80, 6));
        assert_eq!(trace.generations.len(), 6);
        for (i, g) in trace.generations.iter().enumerate() {
            assert_eq!(g.n as usize, i + 1);
            let ids: Vec<&str> = g.nodes.iter().map(|n| n.id.as_str()).collect();
            assert_eq!(ids, ["n1", "n2", "n3", "n4"]);
        }
    }

    #[test]
    fn brownian_trace_is_reproducible_from_seed() {
        let cfg = brownian(200, 200, 10, 25);
        let a = generate_brownian(&cfg, &mut create_rng(77)).unwrap();
        let b = generate_brownian(&cfg, &mut create_rng(77)).unwrap();
        let c = generate_brownian(&cfg, &mut create_rng(78)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn zero_generations_give_empty_trace() {
        let mut rng = create_rng(8);
        let trace = generate_brownian(&brownian(10, 10, 3, 0), &mut rng).unwrap();
        assert!(trace.generations.is_empty());
    }

    #[test]
    fn brownian_moves_keep_speed_between_generations() {
        let mut rng = create_rng(21);
        let mut field = Field::random_free(150, 150, 8, &mut rng);

        for _ in 0..200 {
            let before: Vec<_> = field
                .nodes
                .iter()
                .map(|n| match n.motion {
                    Motion::Free { velocity } => (n.pos, velocity.length_squared()),
                    Motion::Guided { .. } => unreachable!(),
                })
                .collect();
            phases::motion_phase(&mut field, &mut rng).unwrap();
            for (node, (pos, speed2)) in field.nodes.iter().zip(before) {
                assert_eq!((node.pos - pos).length_squared(), speed2);
            }
        }
    }

    #[test]
    fn transport_node_approaches_target_until_within_reach() {
        let cfg = TransportConfig {
            node_count: 1,
            generation_count: 1000,
        };
        let network = corridor();
        let waypoints: Vec<Position> = network.waypoints.iter().map(|w| w.pos).collect();
        let trace = generate_transport(network, &cfg, &mut create_rng(5)).unwrap();

        let xs: Vec<i64> = trace.generations.iter().map(|g| g.nodes[0].x).collect();
        assert!(trace.generations.iter().all(|g| g.nodes[0].y == 0));

        // The node shuttles along the corridor; every reversal happens
        // within reach of one of the ends.
        let mut reversals = 0;
        for w in xs.windows(3) {
            let (a, b, c) = (w[0], w[1], w[2]);
            if (b - a).signum() != 0 && (c - b).signum() == -(b - a).signum() {
                reversals += 1;
                let near_end = waypoints
                    .iter()
                    .any(|p| (p.x - b).abs() <= REACH_DISTANCE);
                assert!(near_end, "reversal at x = {b}");
            }
        }
        assert!(reversals > 0);
    }

    #[test]
    fn transport_moves_by_linear_speed() {
        let cfg = TransportConfig {
            node_count: 5,
            generation_count: 60,
        };
        let trace = generate_transport(corridor(), &cfg, &mut create_rng(13)).unwrap();

        for pair in trace.generations.windows(2) {
            for (a, b) in pair[0].nodes.iter().zip(&pair[1].nodes) {
                let step = (b.x - a.x).abs();
                assert!((1..=19).contains(&step));
            }
        }
    }

    #[test]
    fn transport_reports_trap_on_tight_cluster() {
        let mut g = TransportGraph::new(100, 100);
        g.add_waypoint("A", Position::new(0, 0));
        g.add_waypoint("B", Position::new(10, 0));
        g.connect("A", "B");
        g.connect("B", "A");
        let cfg = TransportConfig {
            node_count: 1,
            generation_count: 5,
        };

        let result = generate_transport(g, &cfg, &mut create_rng(1));
        assert!(matches!(result, Err(SimError::RoutingTrap { .. })));
    }
}
