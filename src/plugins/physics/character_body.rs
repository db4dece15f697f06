use avian3d::{
    math::{AdjustPrecision, AsF32, Quaternion, Scalar},
    prelude::*,
};
use bevy::prelude::*;
use smallvec::SmallVec;

use crate::constants::physics::{DEFAULT_SKIN_WIDTH, GROUND_PROBE_DISTANCE, MAX_SLIDE_ITERATIONS};
use crate::plugins::player::controller::config::CAPSULE_RADIUS;
use crate::plugins::player::controller::{CharacterBody, CharacterConfig, OverlapQuery, Overlaps};

/// Dimensions of a character's capsule. The entity's origin sits at the capsule's base.
///
/// The collider itself lives on a [`BodyCollider`] child and is kept in sync with this component
/// by [`sync_body_colliders`].
#[derive(Component, Reflect, Debug, Clone, PartialEq)]
pub struct CapsuleBody {
    pub height: f32,
    pub radius: f32,
    /// Local offset of the capsule's midpoint from the entity's origin.
    pub center: Vec3,
    pub skin_width: f32,
    pub grounded: bool,
}

impl Default for CapsuleBody {
    fn default() -> Self {
        Self::standing(&CharacterConfig::default())
    }
}

impl CapsuleBody {
    pub fn standing(config: &CharacterConfig) -> Self {
        Self {
            height: config.normal_height,
            radius: CAPSULE_RADIUS,
            center: Vec3::Y * (config.normal_height * 0.5),
            skin_width: DEFAULT_SKIN_WIDTH,
            grounded: false,
        }
    }

    pub fn collider(&self) -> Collider {
        let length = (self.height - 2.0 * self.radius).max(0.0);
        Collider::capsule(self.radius.adjust_precision(), length.adjust_precision())
    }
}

/// Child entity carrying the character's collider.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
pub struct BodyCollider {
    height: f32,
}

impl BodyCollider {
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

/// The maximum angle a slope can have for a character to stand on it. Steeper surfaces do not
/// count as ground.
#[derive(Component, Reflect, Debug, Clone, Copy)]
pub struct MaxSlopeAngle(pub f32);

impl Default for MaxSlopeAngle {
    fn default() -> Self {
        Self(std::f32::consts::PI * 0.25)
    }
}

/// A kinematic capsule moved through avian's spatial queries.
///
/// Moves are swept with shape casts and slide along whatever they hit; the character's own
/// entity and its children are never hit.
pub struct AvianCharacterBody<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    owned: SmallVec<[Entity; 4]>,
    transform: &'a mut Transform,
    capsule: &'a mut CapsuleBody,
    max_slope: f32,
}

impl<'a, 'w, 's> AvianCharacterBody<'a, 'w, 's> {
    pub fn new(
        spatial_query: &'a SpatialQuery<'w, 's>,
        owned: SmallVec<[Entity; 4]>,
        transform: &'a mut Transform,
        capsule: &'a mut CapsuleBody,
        max_slope: f32,
    ) -> Self {
        Self {
            spatial_query,
            owned,
            transform,
            capsule,
            max_slope,
        }
    }

    fn filter(&self) -> SpatialQueryFilter {
        SpatialQueryFilter::from_excluded_entities(self.owned.iter().copied())
    }

    fn capsule_origin(&self) -> Vec3 {
        self.transform.translation + self.capsule.center
    }

    fn probe_ground(&self, shape: &Collider, filter: &SpatialQueryFilter) -> bool {
        let max_distance = self.capsule.skin_width + GROUND_PROBE_DISTANCE;
        let Some(hit) = self.spatial_query.cast_shape(
            shape,
            self.capsule_origin().adjust_precision(),
            Quaternion::IDENTITY,
            Dir3::NEG_Y,
            &ShapeCastConfig {
                max_distance: max_distance.adjust_precision(),
                ignore_origin_penetration: true,
                ..default()
            },
            filter,
        ) else {
            return false;
        };
        hit.normal1.f32().dot(Vec3::Y) >= self.max_slope.cos()
    }
}

impl OverlapQuery for AvianCharacterBody<'_, '_, '_> {
    type Collider = Entity;

    fn overlap_capsule(
        &self,
        start: Vec3,
        end: Vec3,
        radius: f32,
        layer_mask: u32,
    ) -> Overlaps<Entity> {
        let midpoint = (start + end) * 0.5;
        let shape = Collider::capsule_endpoints(
            radius.adjust_precision(),
            (start - midpoint).adjust_precision(),
            (end - midpoint).adjust_precision(),
        );
        self.spatial_query
            .shape_intersections(
                &shape,
                midpoint.adjust_precision(),
                Quaternion::IDENTITY,
                &SpatialQueryFilter::from_mask(LayerMask(layer_mask)),
            )
            .into_iter()
            .collect()
    }
}

impl CharacterBody for AvianCharacterBody<'_, '_, '_> {
    fn move_and_collide(&mut self, displacement: Vec3) -> bool {
        let shape = self.capsule.collider();
        let filter = self.filter();
        let skin_width = self.capsule.skin_width;

        let mut remaining = displacement;
        for _ in 0..MAX_SLIDE_ITERATIONS {
            let Ok((direction, distance)) = Dir3::new_and_length(remaining) else {
                break;
            };
            let hit = self.spatial_query.cast_shape(
                &shape,
                self.capsule_origin().adjust_precision(),
                Quaternion::IDENTITY,
                direction,
                &ShapeCastConfig {
                    max_distance: (distance + skin_width).adjust_precision(),
                    ignore_origin_penetration: true,
                    ..default()
                },
                &filter,
            );
            let Some(hit) = hit else {
                self.transform.translation += remaining;
                break;
            };

            let hit_distance: Scalar = hit.distance;
            let travel = (hit_distance as f32 - skin_width).clamp(0.0, distance);
            self.transform.translation += direction * travel;

            // Slide the rest of the way along the surface that stopped us.
            let normal = hit.normal1.f32().normalize_or_zero();
            let leftover = direction * (distance - travel);
            let into_surface = leftover.dot(normal);
            remaining = if into_surface < 0.0 {
                leftover - normal * into_surface
            } else {
                leftover
            };
        }

        self.capsule.grounded = self.probe_ground(&shape, &filter);
        self.capsule.grounded
    }

    fn is_grounded(&self) -> bool {
        self.capsule.grounded
    }

    fn position(&self) -> Vec3 {
        self.transform.translation
    }

    fn height(&self) -> f32 {
        self.capsule.height
    }

    fn set_height(&mut self, height: f32) {
        self.capsule.height = height;
    }

    fn center(&self) -> Vec3 {
        self.capsule.center
    }

    fn set_center(&mut self, center: Vec3) {
        self.capsule.center = center;
    }

    fn radius(&self) -> f32 {
        self.capsule.radius
    }

    fn skin_width(&self) -> f32 {
        self.capsule.skin_width
    }

    fn rotation(&self) -> Quat {
        self.transform.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.transform.rotation = rotation;
    }

    fn owns(&self, collider: Entity) -> bool {
        self.owned.contains(&collider)
    }
}

/// Rebuilds the collider of every [`BodyCollider`] whose owner changed shape this frame.
pub fn sync_body_colliders(
    bodies: Query<(&CapsuleBody, &Children), Changed<CapsuleBody>>,
    mut colliders: Query<(&mut BodyCollider, &mut Transform, &mut Collider)>,
) {
    for (capsule, children) in bodies.iter() {
        let mut iter = colliders.iter_many_mut(children.iter());
        while let Some((mut body_collider, mut transform, mut collider)) = iter.fetch_next() {
            if transform.translation != capsule.center {
                transform.translation = capsule.center;
            }
            if body_collider.height != capsule.height {
                body_collider.height = capsule.height;
                *collider = capsule.collider();
            }
        }
    }
}
