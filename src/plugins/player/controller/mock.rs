//! In-memory stand-ins for the physics body and camera, used by the controller tests.

use bevy::math::{Quat, Vec3};

use super::body::{CameraRig, CharacterBody, OverlapQuery, Overlaps};
use super::config::CharacterConfig;

const OVERLAP_SAMPLES: usize = 32;

#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    pub id: u32,
    pub min: Vec3,
    pub max: Vec3,
    pub layers: u32,
}

impl Obstacle {
    fn distance_to(&self, point: Vec3) -> f32 {
        point.distance(point.clamp(self.min, self.max))
    }
}

/// A capsule above an optional infinite floor at `y = floor`.
///
/// Moves are applied verbatim except that the capsule cannot sink below the floor. Obstacles
/// only take part in overlap queries.
#[derive(Debug, Clone)]
pub struct MockBody {
    pub position: Vec3,
    pub center: Vec3,
    pub height: f32,
    pub radius: f32,
    pub skin_width: f32,
    pub rotation: Quat,
    pub grounded: bool,
    pub floor: Option<f32>,
    pub obstacles: Vec<Obstacle>,
    pub owned: Vec<u32>,
    pub moves: Vec<Vec3>,
}

impl MockBody {
    pub fn standing(config: &CharacterConfig) -> Self {
        Self {
            position: Vec3::ZERO,
            center: Vec3::Y * (config.normal_height * 0.5),
            height: config.normal_height,
            radius: 0.3,
            skin_width: 0.02,
            rotation: Quat::IDENTITY,
            grounded: true,
            floor: Some(0.0),
            obstacles: Vec::new(),
            owned: Vec::new(),
            moves: Vec::new(),
        }
    }

    /// A body with nothing underneath it.
    pub fn falling(config: &CharacterConfig) -> Self {
        Self {
            position: Vec3::Y * 100.0,
            grounded: false,
            floor: None,
            ..Self::standing(config)
        }
    }

    pub fn add_ceiling(&mut self, y: f32) {
        let id = self.obstacles.len() as u32 + 1;
        self.obstacles.push(Obstacle {
            id,
            min: Vec3::new(-50.0, y, -50.0),
            max: Vec3::new(50.0, y + 1.0, 50.0),
            layers: u32::MAX,
        });
    }

    pub fn add_owned_ceiling(&mut self, y: f32) {
        self.add_ceiling(y);
        let id = self.obstacles.len() as u32;
        self.owned.push(id);
    }
}

impl OverlapQuery for MockBody {
    type Collider = u32;

    fn overlap_capsule(
        &self,
        start: Vec3,
        end: Vec3,
        radius: f32,
        layer_mask: u32,
    ) -> Overlaps<u32> {
        self.obstacles
            .iter()
            .filter(|obstacle| obstacle.layers & layer_mask != 0)
            .filter(|obstacle| {
                (0..=OVERLAP_SAMPLES).any(|i| {
                    let point = start.lerp(end, i as f32 / OVERLAP_SAMPLES as f32);
                    obstacle.distance_to(point) < radius
                })
            })
            .map(|obstacle| obstacle.id)
            .collect()
    }
}

impl CharacterBody for MockBody {
    fn move_and_collide(&mut self, displacement: Vec3) -> bool {
        self.moves.push(displacement);
        self.position += displacement;
        self.grounded = match self.floor {
            Some(floor) => {
                let bottom = self.bottom().y;
                if bottom <= floor {
                    self.position.y += floor - bottom;
                    true
                } else {
                    false
                }
            }
            None => false,
        };
        self.grounded
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    fn center(&self) -> Vec3 {
        self.center
    }

    fn set_center(&mut self, center: Vec3) {
        self.center = center;
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn skin_width(&self) -> f32 {
        self.skin_width
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }

    fn owns(&self, collider: u32) -> bool {
        self.owned.contains(&collider)
    }
}

#[derive(Debug, Clone)]
pub struct MockCamera {
    pub offset_y: f32,
    pub rotation: Quat,
}

impl MockCamera {
    pub fn new(offset_y: f32) -> Self {
        Self {
            offset_y,
            rotation: Quat::IDENTITY,
        }
    }
}

impl CameraRig for MockCamera {
    fn set_local_offset_y(&mut self, y: f32) {
        self.offset_y = y;
    }

    fn set_local_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }
}
