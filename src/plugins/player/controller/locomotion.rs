use bevy::math::{Vec2, Vec3, Vec3Swizzles};
use log::{debug, trace};

use crate::math::{clamp_to_unit_disk, lerp_clamped};

use super::body::CharacterBody;
use super::components::CharacterState;
use super::config::CharacterConfig;

/// Vertical velocity a grounded character is held at, pressing it into the surface it stands on.
pub const GROUNDED_VERTICAL_VELOCITY: f32 = -1.0;

/// Movement input below this length counts as no input while airborne.
pub const AIR_INPUT_DEADZONE: f32 = 1e-3;

/// Integrates gravity, jumping and horizontal momentum, and issues the resulting move.
pub struct LocomotionController<'a> {
    config: &'a CharacterConfig,
    state: &'a mut CharacterState,
}

impl<'a> LocomotionController<'a> {
    pub fn new(config: &'a CharacterConfig, state: &'a mut CharacterState) -> Self {
        Self { config, state }
    }

    /// Launches the character upwards. Whether a jump is allowed is decided by the caller.
    pub fn jump(&mut self) {
        self.state.vertical_velocity = self.config.jump_velocity();
        debug!("jump: vertical velocity {}", self.state.vertical_velocity);
    }

    pub fn apply_gravity(&mut self, dt: f32) {
        if self.state.grounded && self.state.vertical_velocity <= 0.0 {
            self.state.vertical_velocity = GROUNDED_VERTICAL_VELOCITY;
        } else {
            self.state.vertical_velocity +=
                self.config.gravity * self.config.gravity_multiplier * dt;
        }
    }

    /// Updates the horizontal momentum from `input` and moves the body for this frame.
    ///
    /// `input` is in the body's local frame: `x` strafes right, `y` moves forwards.
    pub fn apply_movement<B: CharacterBody>(
        &mut self,
        dt: f32,
        input: Vec2,
        active_speed: f32,
        body: Option<&mut B>,
    ) {
        let facing = body.as_deref().map(|body| body.rotation()).unwrap_or_default();
        let local = clamp_to_unit_disk(input) * active_speed;
        let desired = (facing * Vec3::new(local.x, 0.0, -local.y)).xz();

        if self.state.grounded {
            self.state.horizontal_momentum = desired;
        } else if input.length() > AIR_INPUT_DEADZONE {
            self.state.horizontal_momentum = lerp_clamped(
                self.state.horizontal_momentum,
                desired,
                self.config.air_control * dt,
            );
        }

        let Some(body) = body else {
            return;
        };
        let momentum = self.state.horizontal_momentum;
        let velocity = Vec3::new(momentum.x, self.state.vertical_velocity, momentum.y);
        self.state.grounded = body.move_and_collide(velocity * dt);

        trace!(
            "move: velocity={velocity:?} grounded={}",
            self.state.grounded
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::player::controller::mock::MockBody;
    use approx::assert_relative_eq;

    #[test]
    fn grounded_velocity_is_reset_not_accumulated() {
        let config = CharacterConfig::default();
        let mut state = CharacterState::spawn(&config);
        state.grounded = true;
        state.vertical_velocity = 0.0;

        let mut locomotion = LocomotionController::new(&config, &mut state);
        locomotion.apply_gravity(0.1);
        locomotion.apply_gravity(0.1);

        assert_eq!(state.vertical_velocity, GROUNDED_VERTICAL_VELOCITY);
    }

    #[test]
    fn airborne_velocity_accumulates_gravity() {
        let config = CharacterConfig {
            gravity: -10.0,
            gravity_multiplier: 2.0,
            ..Default::default()
        };
        let mut state = CharacterState::spawn(&config);
        state.grounded = false;

        let mut locomotion = LocomotionController::new(&config, &mut state);
        for _ in 0..10 {
            locomotion.apply_gravity(0.1);
        }

        assert_relative_eq!(state.vertical_velocity, -20.0, epsilon = 1e-4);
    }

    #[test]
    fn rising_grounded_character_keeps_its_impulse() {
        let config = CharacterConfig::default();
        let mut state = CharacterState::spawn(&config);
        state.grounded = true;

        let mut locomotion = LocomotionController::new(&config, &mut state);
        locomotion.jump();
        locomotion.apply_gravity(0.01);

        let expected =
            config.jump_velocity() + config.gravity * config.gravity_multiplier * 0.01;
        assert_relative_eq!(state.vertical_velocity, expected, epsilon = 1e-5);
    }

    #[test]
    fn jump_impulse_reaches_configured_height() {
        let config = CharacterConfig {
            jump_height: 2.0,
            gravity: -9.81,
            gravity_multiplier: 3.0,
            ..Default::default()
        };
        let mut state = CharacterState::spawn(&config);

        LocomotionController::new(&config, &mut state).jump();

        assert_relative_eq!(
            state.vertical_velocity,
            (2.0_f32 * 2.0 * 9.81 * 3.0).sqrt(),
            epsilon = 1e-5
        );
    }

    #[test]
    fn grounded_momentum_follows_input_instantly() {
        let config = CharacterConfig::default();
        let mut state = CharacterState::spawn(&config);
        state.grounded = true;
        let mut body = MockBody::standing(&config);

        LocomotionController::new(&config, &mut state).apply_movement(
            0.1,
            Vec2::new(1.0, 1.0),
            5.0,
            Some(&mut body),
        );

        // Diagonal input is clamped to the unit disk; forward maps to -Z.
        let component = 5.0 * std::f32::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(state.horizontal_momentum.x, component, epsilon = 1e-5);
        assert_relative_eq!(state.horizontal_momentum.y, -component, epsilon = 1e-5);
        assert_relative_eq!(state.horizontal_momentum.length(), 5.0, epsilon = 1e-5);
    }

    #[test]
    fn movement_follows_body_facing() {
        let config = CharacterConfig::default();
        let mut state = CharacterState::spawn(&config);
        state.grounded = true;
        let mut body = MockBody::standing(&config);
        // Quarter turn to the right: forward now points along +X.
        body.rotation = bevy::math::Quat::from_rotation_y(-std::f32::consts::FRAC_PI_2);

        LocomotionController::new(&config, &mut state).apply_movement(
            0.1,
            Vec2::Y,
            4.0,
            Some(&mut body),
        );

        assert_relative_eq!(state.horizontal_momentum.x, 4.0, epsilon = 1e-5);
        assert_relative_eq!(state.horizontal_momentum.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn airborne_momentum_converges_monotonically() {
        let config = CharacterConfig {
            air_control: 4.0,
            ..Default::default()
        };
        let mut state = CharacterState::spawn(&config);
        let mut body = MockBody::falling(&config);
        let desired = Vec2::new(0.0, -5.0);

        let mut previous_gap = f32::INFINITY;
        for _ in 0..30 {
            LocomotionController::new(&config, &mut state).apply_movement(
                1.0 / 60.0,
                Vec2::Y,
                5.0,
                Some(&mut body),
            );
            let gap = (state.horizontal_momentum - desired).length();
            assert!(gap < previous_gap);
            previous_gap = gap;
        }
        assert!(!state.grounded);
    }

    #[test]
    fn airborne_without_input_keeps_momentum() {
        let config = CharacterConfig::default();
        let mut state = CharacterState::spawn(&config);
        state.horizontal_momentum = Vec2::new(3.0, 1.0);
        let mut body = MockBody::falling(&config);

        LocomotionController::new(&config, &mut state).apply_movement(
            0.1,
            Vec2::splat(AIR_INPUT_DEADZONE * 0.1),
            5.0,
            Some(&mut body),
        );

        assert_eq!(state.horizontal_momentum, Vec2::new(3.0, 1.0));
    }

    #[test]
    fn move_is_scaled_by_frame_time() {
        let config = CharacterConfig::default();
        let mut state = CharacterState::spawn(&config);
        state.horizontal_momentum = Vec2::new(2.0, 0.0);
        state.vertical_velocity = 4.0;
        let mut body = MockBody::falling(&config);

        LocomotionController::new(&config, &mut state).apply_movement(
            0.5,
            Vec2::ZERO,
            5.0,
            Some(&mut body),
        );

        let displacement = body.moves[0];
        assert_relative_eq!(displacement.x, 1.0);
        assert_relative_eq!(displacement.y, 2.0);
        assert_relative_eq!(displacement.z, 0.0);
    }

    #[test]
    fn missing_body_skips_the_move() {
        let config = CharacterConfig::default();
        let mut state = CharacterState::spawn(&config);
        state.grounded = true;

        LocomotionController::new(&config, &mut state).apply_movement::<MockBody>(
            0.1,
            Vec2::X,
            5.0,
            None,
        );

        assert!(state.grounded);
        assert_relative_eq!(state.horizontal_momentum.x, 5.0, epsilon = 1e-5);
    }
}
