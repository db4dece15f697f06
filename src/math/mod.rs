use bevy::math::Vec2;

/// Smallest capsule height above `2 * radius` the body is allowed to shrink to.
pub const MIN_CAPSULE_CLEARANCE: f32 = 0.01;

/// Moves `current` towards `target` by at most `max_delta`, never overshooting.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}

/// Scales `v` down onto the unit disk if it lies outside of it.
///
/// Unlike normalizing, inputs with a length below one (analog sticks) are kept as-is.
pub fn clamp_to_unit_disk(v: Vec2) -> Vec2 {
    v.clamp_length_max(1.0)
}

/// Linear interpolation with the factor clamped to `[0, 1]`.
pub fn lerp_clamped(from: Vec2, to: Vec2, t: f32) -> Vec2 {
    from.lerp(to, t.clamp(0.0, 1.0))
}
