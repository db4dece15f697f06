//! Engine-agnostic first-person character logic.
//!
//! The [`Character`] owns its configuration and state and advances both through
//! [`Character::tick`], once per frame. The physics body and camera it drives are reached
//! through the [`CharacterBody`] and [`CameraRig`] traits, so the same logic runs against avian3d
//! in the game and against in-memory stand-ins in tests.

pub mod body;
pub mod components;
pub mod config;
pub mod crouch;
pub mod input;
pub mod locomotion;
pub mod look;

#[cfg(test)]
pub(crate) mod mock;

use bevy::prelude::{Component, Reflect};
use log::trace;

pub use body::{CameraRig, CharacterBody, OverlapQuery, Overlaps};
pub use components::{active_speed, CharacterState, MovementState, Stance};
pub use config::CharacterConfig;
pub use crouch::CrouchStateMachine;
pub use input::InputState;
pub use locomotion::LocomotionController;
pub use look::LookController;

/// A first-person character: its tuning plus everything it carries between frames.
#[derive(Component, Reflect, Debug, Clone)]
pub struct Character {
    config: CharacterConfig,
    state: CharacterState,
}

impl Default for Character {
    fn default() -> Self {
        Self::new(CharacterConfig::default())
    }
}

impl Character {
    pub fn new(config: CharacterConfig) -> Self {
        let state = CharacterState::spawn(&config);
        Self { config, state }
    }

    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    pub fn stance(&self) -> Stance {
        self.state.stance
    }

    pub fn is_grounded(&self) -> bool {
        self.state.grounded
    }

    pub fn movement_state(&self) -> MovementState {
        self.state.movement_state
    }

    /// Advances the character by one frame of `dt` seconds.
    ///
    /// Stages run in a fixed order, each reading what the previous one committed: stance,
    /// jump, gravity, movement, look. A missing `body` or `camera` skips only the parts that
    /// need it.
    pub fn tick<B: CharacterBody, C: CameraRig>(
        &mut self,
        dt: f32,
        input: &InputState,
        mut body: Option<&mut B>,
        mut camera: Option<&mut C>,
    ) {
        let config = &self.config;
        let state = &mut self.state;

        if let Some(body) = body.as_deref() {
            state.grounded = body.is_grounded();
        }

        CrouchStateMachine::new(config, state).tick(
            dt,
            input.crouch,
            body.as_deref_mut(),
            camera.as_deref_mut(),
        );

        if input.jump && state.grounded {
            let mut crouch = CrouchStateMachine::new(config, state);
            if crouch.can_stand_up(body.as_deref()) {
                crouch.force_stand(body.as_deref_mut());
                LocomotionController::new(config, state).jump();
            }
        }

        let speed = active_speed(config, state.stance, input.sprint);
        let mut locomotion = LocomotionController::new(config, state);
        locomotion.apply_gravity(dt);
        locomotion.apply_movement(dt, input.move_axes(), speed, body.as_deref_mut());

        state.movement_state = MovementState::resolve(state.grounded, state.stance, input.sprint);

        LookController::new(config, state).tick(input.look_dx, input.look_dy, body, camera);

        trace!(
            "tick: dt={dt} state={:?} vertical_velocity={} height={}",
            state.movement_state,
            state.vertical_velocity,
            state.current_height
        );
    }
}
