use bevy::prelude::*;

use super::controller::CameraRig;

/// Marks the first-person camera parented to a [`Player`](super::Player).
#[derive(Component, Default, Debug)]
pub struct PlayerCamera;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigError {
    #[error("character {0} has no camera attached")]
    MissingCamera(Entity),
    #[error("character {0} has more than one camera attached")]
    AmbiguousCamera(Entity),
}

/// Finds the single [`PlayerCamera`] among `owner`'s children.
pub fn find_camera<F: bevy::ecs::query::QueryFilter>(
    owner: Entity,
    children: Option<&Children>,
    cameras: &Query<&mut Transform, F>,
) -> Result<Entity, RigError> {
    let mut found = children
        .into_iter()
        .flat_map(|children| children.iter().copied())
        .filter(|child| cameras.contains(*child));

    let camera = found.next().ok_or(RigError::MissingCamera(owner))?;
    if found.next().is_some() {
        return Err(RigError::AmbiguousCamera(owner));
    }
    Ok(camera)
}

/// Drives a camera through its local [`Transform`].
pub struct TransformRig<'a>(pub &'a mut Transform);

impl CameraRig for TransformRig<'_> {
    fn set_local_offset_y(&mut self, y: f32) {
        self.0.translation.y = y;
    }

    fn set_local_rotation(&mut self, rotation: Quat) {
        self.0.rotation = rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    fn lookup(world: &mut World, owner: Entity) -> Result<Entity, RigError> {
        world
            .run_system_once(
                move |children: Query<&Children>,
                      cameras: Query<&mut Transform, With<PlayerCamera>>| {
                    find_camera(owner, children.get(owner).ok(), &cameras)
                },
            )
            .expect("lookup system runs")
    }

    #[test]
    fn finds_the_only_camera() {
        let mut world = World::new();
        let camera = world.spawn((PlayerCamera, Transform::default())).id();
        let other = world.spawn(Transform::default()).id();
        let owner = world.spawn_empty().add_children(&[other, camera]).id();

        assert_eq!(lookup(&mut world, owner), Ok(camera));
    }

    #[test]
    fn reports_missing_and_ambiguous_cameras() {
        let mut world = World::new();
        let lonely = world.spawn_empty().id();
        assert_eq!(
            lookup(&mut world, lonely),
            Err(RigError::MissingCamera(lonely))
        );

        let first = world.spawn((PlayerCamera, Transform::default())).id();
        let second = world.spawn((PlayerCamera, Transform::default())).id();
        let crowded = world.spawn_empty().add_children(&[first, second]).id();
        assert_eq!(
            lookup(&mut world, crowded),
            Err(RigError::AmbiguousCamera(crowded))
        );
    }

    #[test]
    fn rig_writes_local_transform() {
        let mut transform = Transform::from_xyz(0.0, 1.7, 0.0);
        let mut rig = TransformRig(&mut transform);
        rig.set_local_offset_y(0.4);
        rig.set_local_rotation(Quat::from_rotation_x(0.5));

        assert_eq!(transform.translation.y, 0.4);
        assert_eq!(transform.rotation, Quat::from_rotation_x(0.5));
    }
}
