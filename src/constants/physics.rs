/// Standard gravity, pointing down the world Y axis.
pub const EARTH_GRAVITATIONAL_ACCELERATION: f32 = -9.81;

/// Distance the host body keeps between its capsule and any surface it slides along.
pub const DEFAULT_SKIN_WIDTH: f32 = 0.02;

/// How far below the capsule the ground probe reaches.
pub const GROUND_PROBE_DISTANCE: f32 = 0.08;

/// Upper bound on collide-and-slide iterations per move.
pub const MAX_SLIDE_ITERATIONS: usize = 4;
