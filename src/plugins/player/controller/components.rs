use bevy::math::Vec2;
use bevy::prelude::Reflect;

use super::config::CharacterConfig;

/// Posture of the character. Only one is active at a time.
#[derive(Reflect, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stance {
    #[default]
    Standing,
    Crouching,
}

impl Stance {
    pub fn is_crouching(self) -> bool {
        self == Stance::Crouching
    }

    pub fn target_height(self, config: &CharacterConfig) -> f32 {
        match self {
            Stance::Standing => config.normal_height,
            Stance::Crouching => config.crouch_height,
        }
    }

    pub fn target_camera_y(self, config: &CharacterConfig) -> f32 {
        match self {
            Stance::Standing => config.camera_base_y,
            Stance::Crouching => config.crouched_camera_y(),
        }
    }
}

/// Coarse summary of what the character is doing this frame.
#[derive(Reflect, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementState {
    #[default]
    Walking,
    Sprinting,
    Crouching,
    Airborne,
}

impl MovementState {
    pub fn resolve(grounded: bool, stance: Stance, sprint: bool) -> Self {
        if !grounded {
            MovementState::Airborne
        } else if stance.is_crouching() {
            MovementState::Crouching
        } else if sprint {
            MovementState::Sprinting
        } else {
            MovementState::Walking
        }
    }
}

/// Everything the character mutates from frame to frame.
#[derive(Reflect, Debug, Clone, PartialEq)]
pub struct CharacterState {
    pub vertical_velocity: f32,
    /// Horizontal velocity in the world XZ plane, `x` mapping to X and `y` to Z.
    pub horizontal_momentum: Vec2,
    pub current_height: f32,
    pub stance: Stance,
    pub grounded: bool,
    /// Accumulated heading in degrees. Not wrapped.
    pub yaw: f32,
    /// Head tilt in degrees, always within the configured limits.
    pub pitch: f32,
    /// Local height of the camera above the body's origin.
    pub camera_offset_y: f32,
    pub movement_state: MovementState,
}

impl CharacterState {
    pub fn spawn(config: &CharacterConfig) -> Self {
        Self {
            vertical_velocity: 0.0,
            horizontal_momentum: Vec2::ZERO,
            current_height: config.normal_height,
            stance: Stance::Standing,
            grounded: false,
            yaw: 0.0,
            pitch: 0.0_f32.clamp(config.pitch_min, config.pitch_max),
            camera_offset_y: config.camera_base_y,
            movement_state: MovementState::Walking,
        }
    }
}

/// The speed the character moves at this frame. Crouching always wins over sprinting, whether
/// or not the character is grounded.
pub fn active_speed(config: &CharacterConfig, stance: Stance, sprint: bool) -> f32 {
    if stance.is_crouching() {
        config.crouch_speed
    } else if sprint {
        config.sprint_speed
    } else {
        config.walk_speed
    }
}
