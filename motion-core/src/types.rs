use glam::I64Vec2;

/// Identifier for a moving node in a [`crate::field::Field`].
///
/// This is an index into `Field::nodes`, and is only meaningful within
/// the lifetime of a given `Field` instance.
pub type NodeId = usize;

/// Identifier for a waypoint in a [`crate::graph::TransportGraph`].
///
/// An index into `TransportGraph::waypoints`; the textual id read from the
/// input document is kept on the waypoint itself.
pub type WaypointId = usize;

/// Integer position on the field.
pub type Position = I64Vec2;

/// Squared Euclidean distance between `a` and `b`.
///
/// Computed on `u128` so it cannot overflow for any pair of `i64`
/// positions; the sum saturates at `u128::MAX`.
#[inline]
pub fn distance_squared(a: Position, b: Position) -> u128 {
    let dx = (i128::from(a.x) - i128::from(b.x)).unsigned_abs();
    let dy = (i128::from(a.y) - i128::from(b.y)).unsigned_abs();
    (dx * dx).saturating_add(dy * dy)
}

/// Returns `true` if `a` and `b` are at most `radius` apart.
///
/// The comparison is exact, the boundary included.
#[inline]
pub fn within_range(a: Position, b: Position, radius: i64) -> bool {
    let r = u128::from(radius.unsigned_abs());
    distance_squared(a, b) <= r * r
}
