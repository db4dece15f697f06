pub mod controller;
pub mod controls;
pub mod rig;

use avian3d::prelude::{RigidBody, SpatialQuery};
use bevy::ecs::component::ComponentId;
use bevy::ecs::world::DeferredWorld;
use bevy::prelude::*;
use bevy::utils::HashSet;
use smallvec::{smallvec, SmallVec};

use crate::plugins::physics::{
    character_body::sync_body_colliders, AvianCharacterBody, BodyCollider, CapsuleBody,
    MaxSlopeAngle,
};
use controller::{Character, CharacterConfig, InputState};
use controls::{capture_cursor, gather_player_input, grab_ungrab_mouse};
use rig::{find_camera, PlayerCamera, TransformRig};

/// A first-person player. Spawning one builds its capsule collider and camera as children.
#[derive(Component, Default)]
#[require(
    Transform,
    Visibility,
    InputState,
    MaxSlopeAngle,
    CharacterConfig,
    RigidBody(|| RigidBody::Kinematic),
    Name(|| Name::new("Player"))
)]
#[component(on_add = on_add_player)]
pub struct Player;

fn on_add_player(mut world: DeferredWorld, entity: Entity, _id: ComponentId) {
    let config = world
        .get::<CharacterConfig>(entity)
        .cloned()
        .unwrap_or_default();
    let capsule = CapsuleBody::standing(&config);
    let collider = (
        BodyCollider::new(capsule.height),
        capsule.collider(),
        Transform::from_translation(capsule.center),
        Name::new("Player Collider"),
    );
    let camera = (
        PlayerCamera,
        Camera3d::default(),
        Transform::from_xyz(0.0, config.camera_base_y, 0.0),
        Name::new("Player Camera"),
    );

    world
        .commands()
        .entity(entity)
        .insert((Character::new(config), capsule))
        .with_children(|parent| {
            parent.spawn(collider);
            parent.spawn(camera);
        });
}

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Character>()
            .register_type::<CharacterConfig>()
            .register_type::<InputState>()
            .add_systems(Startup, capture_cursor)
            .add_systems(
                Update,
                (
                    grab_ungrab_mouse,
                    (gather_player_input, tick_characters, sync_body_colliders).chain(),
                ),
            );
    }
}

/// Advances every player by one frame against the physics world.
#[allow(clippy::type_complexity)]
fn tick_characters(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut characters: Query<
        (
            Entity,
            &mut Character,
            &mut InputState,
            &mut Transform,
            &mut CapsuleBody,
            &MaxSlopeAngle,
            Option<&Children>,
        ),
        With<Player>,
    >,
    mut cameras: Query<&mut Transform, (With<PlayerCamera>, Without<Player>)>,
    mut reported: Local<HashSet<Entity>>,
) {
    let dt = time.delta_secs();
    for (entity, mut character, mut input, mut transform, mut capsule, max_slope, children) in
        characters.iter_mut()
    {
        let camera = match find_camera(entity, children, &cameras) {
            Ok(camera) => Some(camera),
            Err(error) => {
                if reported.insert(entity) {
                    debug!("{error}; ticking without a camera");
                }
                None
            }
        };

        let mut owned: SmallVec<[Entity; 4]> = smallvec![entity];
        owned.extend(children.into_iter().flat_map(|children| children.iter().copied()));

        let mut body = AvianCharacterBody::new(
            &spatial_query,
            owned,
            &mut *transform,
            &mut *capsule,
            max_slope.0,
        );
        let mut camera_transform = camera.and_then(|camera| cameras.get_mut(camera).ok());
        let mut rig = camera_transform.as_deref_mut().map(TransformRig);

        character.tick(dt, &input, Some(&mut body), rig.as_mut());
        input.clear();
    }
}

