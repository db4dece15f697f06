use bevy::math::Quat;

use super::body::{CameraRig, CharacterBody};
use super::components::CharacterState;
use super::config::CharacterConfig;

/// Turns look input into a heading for the body and a tilt for the camera.
pub struct LookController<'a> {
    config: &'a CharacterConfig,
    state: &'a mut CharacterState,
}

impl<'a> LookController<'a> {
    pub fn new(config: &'a CharacterConfig, state: &'a mut CharacterState) -> Self {
        Self { config, state }
    }

    pub fn tick<B: CharacterBody, C: CameraRig>(
        &mut self,
        look_dx: f32,
        look_dy: f32,
        body: Option<&mut B>,
        camera: Option<&mut C>,
    ) {
        let sensitivity = self.config.look_sensitivity;
        let turn = look_dx * sensitivity;
        self.state.yaw += turn;
        self.state.pitch = (self.state.pitch - look_dy * sensitivity)
            .clamp(self.config.pitch_min, self.config.pitch_max);

        // Positive pitch looks up, positive yaw turns right.
        if let Some(camera) = camera {
            camera.set_local_rotation(Quat::from_rotation_x(self.state.pitch.to_radians()));
        }
        // The body keeps whatever heading it had and is turned by this frame's delta only.
        if let Some(body) = body {
            body.set_rotation(Quat::from_rotation_y(-turn.to_radians()) * body.rotation());
        }
    }
}
