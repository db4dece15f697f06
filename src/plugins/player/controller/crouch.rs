use bevy::math::Vec3;
use log::{debug, trace};

use crate::math::{move_towards, MIN_CAPSULE_CLEARANCE};

use super::body::{CameraRig, CharacterBody};
use super::components::{CharacterState, Stance};
use super::config::CharacterConfig;

/// Toggles between standing and crouching and eases the capsule and camera between the two.
pub struct CrouchStateMachine<'a> {
    config: &'a CharacterConfig,
    state: &'a mut CharacterState,
}

impl<'a> CrouchStateMachine<'a> {
    pub fn new(config: &'a CharacterConfig, state: &'a mut CharacterState) -> Self {
        Self { config, state }
    }

    pub fn tick<B: CharacterBody, C: CameraRig>(
        &mut self,
        dt: f32,
        crouch_pressed: bool,
        mut body: Option<&mut B>,
        camera: Option<&mut C>,
    ) {
        if crouch_pressed {
            self.toggle(body.as_deref());
        }

        let min_height = body
            .as_deref()
            .map_or(0.0, |body| 2.0 * body.radius() + MIN_CAPSULE_CLEARANCE);
        let target_height = self.state.stance.target_height(self.config).max(min_height);
        let step = self.config.crouch_transition_rate * dt;

        let new_height = move_towards(self.state.current_height, target_height, step);
        self.resize(new_height, body.as_deref_mut());

        let camera_y = move_towards(
            self.state.camera_offset_y,
            self.state.stance.target_camera_y(self.config),
            step,
        );
        self.state.camera_offset_y = camera_y;
        if let Some(camera) = camera {
            camera.set_local_offset_y(camera_y);
        }

        trace!(
            "crouch: stance={:?} height={} camera_y={}",
            self.state.stance,
            self.state.current_height,
            camera_y
        );
    }

    /// Whether a full-height capsule would fit on the spot the character is standing on.
    ///
    /// Without a body to query there is nothing to collide with, so standing is allowed.
    pub fn can_stand_up<B: CharacterBody>(&self, body: Option<&B>) -> bool {
        let Some(body) = body else {
            return true;
        };

        let radius = body.radius();
        let padding = body.skin_width() + self.config.stand_check_padding;
        let bottom = body.bottom();
        let start = bottom + Vec3::Y * (radius + padding);
        let end = bottom + Vec3::Y * (self.config.normal_height - radius - padding);
        let end = if end.y < start.y { start } else { end };

        let blocked_by = body
            .overlap_capsule(start, end, radius, self.config.stand_check_mask)
            .into_iter()
            .find(|collider| !body.owns(*collider));

        match blocked_by {
            Some(collider) => {
                trace!("stand-up blocked by {collider:?}");
                false
            }
            None => true,
        }
    }

    /// Snaps the character straight back to standing height, skipping the transition.
    pub fn force_stand<B: CharacterBody>(&mut self, body: Option<&mut B>) {
        if self.state.stance == Stance::Standing {
            return;
        }
        debug!("forced stand");
        self.state.stance = Stance::Standing;
        self.resize(self.config.normal_height, body);
    }

    fn toggle<B: CharacterBody>(&mut self, body: Option<&B>) {
        match self.state.stance {
            Stance::Standing => {
                debug!("crouched");
                self.state.stance = Stance::Crouching;
            }
            Stance::Crouching if self.can_stand_up(body) => {
                debug!("uncrouched");
                self.state.stance = Stance::Standing;
            }
            Stance::Crouching => {
                debug!("not enough headroom to stand up");
            }
        }
    }

    /// Commits a new capsule height, keeping the capsule's base where it is.
    fn resize<B: CharacterBody>(&mut self, new_height: f32, body: Option<&mut B>) {
        let previous_height = self.state.current_height;
        if let Some(body) = body {
            let center = body.center();
            body.set_center(center - Vec3::Y * ((previous_height - new_height) * 0.5));
            body.set_height(new_height);
        }
        self.state.current_height = new_height;
    }
}
