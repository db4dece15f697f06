use bevy::math::Vec2;
use bevy::prelude::{Component, Reflect};

/// One frame of sampled player input.
///
/// Edges (`jump`, `crouch`) are true only on the frame the key went down; `sprint` is true for
/// as long as the key is held. The host overwrites this once per frame before the character
/// ticks.
#[derive(Component, Reflect, Debug, Default, Clone, Copy, PartialEq)]
pub struct InputState {
    /// Strafe axis, positive to the right, in `[-1, 1]`.
    pub move_x: f32,
    /// Forward axis, positive forwards, in `[-1, 1]`.
    pub move_z: f32,
    pub look_dx: f32,
    pub look_dy: f32,
    pub jump: bool,
    pub sprint: bool,
    pub crouch: bool,
}

impl InputState {
    pub fn move_axes(&self) -> Vec2 {
        Vec2::new(self.move_x, self.move_z)
    }

    /// Drops everything sampled this frame, keeping nothing held.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
