/// Maximum distance at which two nodes are connected in the proximity graph.
pub const EDGE_RADIUS: i64 = 75;

/// Distance at or below which a guided node picks its next waypoint.
pub const REACH_DISTANCE: i64 = 20;

/// Per-tick probability that a free node redraws its velocity.
pub const REDRAW_PROBABILITY: f64 = 0.01;

/// Half-open range of velocity components for free nodes: `[-10, 9]`.
pub const VELOCITY_RANGE: std::ops::Range<i64> = -10..10;

/// Half-open range of linear speeds for guided nodes: `[1, 19]`.
pub const LINEAR_SPEED_RANGE: std::ops::Range<i64> = 1..20;

/// Largest absolute coordinate accepted from an input document.
///
/// Keeps coordinate differences exact in `f64` and far from `i64` overflow
/// while guided nodes move between waypoints.
pub const COORDINATE_LIMIT: i64 = 1 << 52;

/// Parameters of a random-walk run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrownianConfig {
    pub width: u32,
    pub height: u32,
    pub node_count: u32,
    pub generation_count: u32,
}

/// Parameters of a run along a transport graph.
///
/// Field bounds come from the graph document itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransportConfig {
    pub node_count: u32,
    pub generation_count: u32,
}
