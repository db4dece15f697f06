use bevy::prelude::{Component, Reflect};

use crate::constants::physics::EARTH_GRAVITATIONAL_ACCELERATION;

pub const WALK_SPEED: f32 = 5.0;
pub const SPRINT_SPEED: f32 = 8.0;
pub const CROUCH_SPEED: f32 = 2.0;
pub const JUMP_HEIGHT: f32 = 1.2;
pub const GRAVITY_MULTIPLIER: f32 = 3.0;
pub const AIR_CONTROL: f32 = 4.0;
pub const NORMAL_HEIGHT: f32 = 2.0;
pub const CROUCH_HEIGHT: f32 = 0.7;
pub const CROUCH_TRANSITION_RATE: f32 = 2.0;
pub const LOOK_SENSITIVITY: f32 = 0.1;
pub const PITCH_MIN: f32 = -89.0;
pub const PITCH_MAX: f32 = 89.0;
pub const STAND_CHECK_PADDING: f32 = 0.01;
pub const CAMERA_BASE_Y: f32 = 1.7;
pub const CAPSULE_RADIUS: f32 = 0.3;

/// Tuning of a single character, fixed for the lifetime of the character.
///
/// Angles (`pitch_min`, `pitch_max`) and the look sensitivity are expressed in degrees, so the
/// look delta is scaled into degrees per unit of input.
#[derive(Component, Reflect, Debug, Clone, PartialEq)]
pub struct CharacterConfig {
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub crouch_speed: f32,
    /// Apex height of a jump from standing still.
    pub jump_height: f32,
    /// Signed vertical acceleration. Negative values pull the character down.
    pub gravity: f32,
    pub gravity_multiplier: f32,
    /// Rate at which airborne momentum blends towards the desired velocity, per second.
    pub air_control: f32,
    pub crouch_height: f32,
    pub normal_height: f32,
    /// Height change per second while moving between stances.
    pub crouch_transition_rate: f32,
    pub look_sensitivity: f32,
    pub pitch_min: f32,
    pub pitch_max: f32,
    /// Extra inward padding of the stand-up query capsule, on top of the body's skin width.
    pub stand_check_padding: f32,
    /// Local height of the camera above the body's origin (its feet) while standing.
    pub camera_base_y: f32,
    /// Collision layers the stand-up check considers obstacles.
    pub stand_check_mask: u32,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            walk_speed: WALK_SPEED,
            sprint_speed: SPRINT_SPEED,
            crouch_speed: CROUCH_SPEED,
            jump_height: JUMP_HEIGHT,
            gravity: EARTH_GRAVITATIONAL_ACCELERATION,
            gravity_multiplier: GRAVITY_MULTIPLIER,
            air_control: AIR_CONTROL,
            crouch_height: CROUCH_HEIGHT,
            normal_height: NORMAL_HEIGHT,
            crouch_transition_rate: CROUCH_TRANSITION_RATE,
            look_sensitivity: LOOK_SENSITIVITY,
            pitch_min: PITCH_MIN,
            pitch_max: PITCH_MAX,
            stand_check_padding: STAND_CHECK_PADDING,
            camera_base_y: CAMERA_BASE_Y,
            stand_check_mask: u32::MAX,
        }
    }
}

impl CharacterConfig {
    /// Camera height the crouch transition settles at.
    pub fn crouched_camera_y(&self) -> f32 {
        self.camera_base_y - (self.normal_height - self.crouch_height)
    }

    /// Initial vertical velocity that lifts the character exactly `jump_height` under gravity.
    pub fn jump_velocity(&self) -> f32 {
        (2.0 * self.jump_height * self.gravity.abs() * self.gravity_multiplier).sqrt()
    }
}
