use std::fmt::Debug;

use bevy::math::{Quat, Vec3};
use smallvec::SmallVec;

/// Colliders found by a single overlap query. Stand-up checks rarely hit more than a handful.
pub type Overlaps<C> = SmallVec<[C; 8]>;

/// Spatial queries against the collision world.
pub trait OverlapQuery {
    type Collider: Copy + Eq + Debug;

    /// All colliders on `layer_mask` intersecting the capsule whose hemisphere centers are
    /// `start` and `end`.
    fn overlap_capsule(
        &self,
        start: Vec3,
        end: Vec3,
        radius: f32,
        layer_mask: u32,
    ) -> Overlaps<Self::Collider>;
}

/// The physical capsule a character moves around in.
///
/// The body's origin sits at its feet; [`center`](Self::center) is the local offset of the
/// capsule's midpoint from that origin.
pub trait CharacterBody: OverlapQuery {
    /// Sweeps the capsule along `displacement`, resolving collisions on the way, and reports
    /// whether the body ended up on walkable ground.
    fn move_and_collide(&mut self, displacement: Vec3) -> bool;

    fn is_grounded(&self) -> bool;

    /// World position of the body's origin.
    fn position(&self) -> Vec3;

    fn height(&self) -> f32;

    fn set_height(&mut self, height: f32);

    fn center(&self) -> Vec3;

    fn set_center(&mut self, center: Vec3);

    fn radius(&self) -> f32;

    /// Contact margin the body keeps from surfaces.
    fn skin_width(&self) -> f32;

    fn rotation(&self) -> Quat;

    fn set_rotation(&mut self, rotation: Quat);

    /// Whether `collider` belongs to this character (its own capsule or one of its children).
    fn owns(&self, collider: Self::Collider) -> bool;

    /// Lowest point of the capsule in world space.
    fn bottom(&self) -> Vec3 {
        self.position() + self.center() - Vec3::Y * (self.height() * 0.5)
    }
}

/// The first-person camera attached to a character.
pub trait CameraRig {
    fn set_local_offset_y(&mut self, y: f32);

    fn set_local_rotation(&mut self, rotation: Quat);
}
