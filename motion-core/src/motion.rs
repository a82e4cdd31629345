//! Per-tick movement rules for free and guided nodes.
//!
//! Both rules work on integer positions. Guided offsets are computed in
//! `f64` and rounded half away from zero (`f64::round`).

use crate::config::{REDRAW_PROBABILITY, VELOCITY_RANGE};
use crate::types::Position;
use rand::Rng;

/// Draws a velocity with both components uniform in [`VELOCITY_RANGE`].
///
/// The x component is drawn first.
pub fn random_velocity(rng: &mut impl Rng) -> Position {
    let x = rng.random_range(VELOCITY_RANGE);
    let y = rng.random_range(VELOCITY_RANGE);
    Position::new(x, y)
}

/// Advances a free node by one tick.
///
/// 1. If the next x would leave `[0, width]`, the x velocity is negated once
///    (no clamping).
/// 2. The y velocity is negated if `y + vy > y` or `vy < 0`.
/// 3. The (possibly flipped) velocity is added to the position.
/// 4. With probability [`REDRAW_PROBABILITY`] a fresh velocity is drawn.
///
/// Step 2 never looks at the field height, so any non-zero y velocity
/// changes sign on every tick and the vertical bound is not enforced.
pub fn free_step(pos: &mut Position, velocity: &mut Position, width: i64, rng: &mut impl Rng) {
    let next_x = pos.x + velocity.x;
    if next_x > width || next_x < 0 {
        velocity.x = -velocity.x;
    }
    if pos.y + velocity.y > pos.y || velocity.y < 0 {
        velocity.y = -velocity.y;
    }

    *pos += *velocity;

    if rng.random::<f64>() < REDRAW_PROBABILITY {
        *velocity = random_velocity(rng);
    }
}

/// Computes the offset a guided node moves by in one tick.
///
/// The offset points from `pos` to `target` and has length `linear_speed`
/// before rounding, so it may overshoot a target closer than the speed.
/// Returns `None` if `pos == target`, where the direction is undefined.
pub fn guided_offset(pos: Position, target: Position, linear_speed: i64) -> Option<Position> {
    if pos == target {
        return None;
    }

    let delta = target.as_dvec2() - pos.as_dvec2();
    let scale = linear_speed as f64 / delta.length();
    Some((delta * scale).round().as_i64vec2())
}
