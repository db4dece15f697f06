pub mod constants;
pub mod keybinds;
pub mod math;
pub mod plugins;

#[cfg(debug_assertions)]
pub mod debug;

use avian3d::{
    math::{AdjustPrecision, Vector},
    prelude::{Collider, RigidBody},
};
use bevy::prelude::*;

use crate::plugins::player::Player;
use crate::plugins::{PhysicsPlugin, PlayerPlugin};

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::linear_rgb(0.45, 0.6, 0.8)))
            .insert_resource(AmbientLight {
                color: Color::WHITE,
                brightness: 400.0,
            })
            .add_plugins((PhysicsPlugin, PlayerPlugin))
            .add_systems(Startup, setup);

        #[cfg(debug_assertions)]
        {
            use debug::DebugPlugin;
            app.add_plugins(DebugPlugin);
        }
    }
}

/// A static box in the test course, positioned by its centre.
struct Block {
    name: &'static str,
    size: Vec3,
    center: Vec3,
    color: Color,
}

const BLOCKS: [Block; 5] = [
    // Low enough that only a crouched player fits underneath.
    Block {
        name: "Overhang",
        size: Vec3::new(4.0, 0.4, 6.0),
        center: Vec3::new(0.0, 1.4, -8.0),
        color: Color::srgb(0.55, 0.35, 0.3),
    },
    Block {
        name: "Overhang Left Post",
        size: Vec3::new(0.4, 1.2, 6.0),
        center: Vec3::new(-2.2, 0.6, -8.0),
        color: Color::srgb(0.55, 0.35, 0.3),
    },
    Block {
        name: "Overhang Right Post",
        size: Vec3::new(0.4, 1.2, 6.0),
        center: Vec3::new(2.2, 0.6, -8.0),
        color: Color::srgb(0.55, 0.35, 0.3),
    },
    Block {
        name: "Crate",
        size: Vec3::splat(1.0),
        center: Vec3::new(4.0, 0.5, -3.0),
        color: Color::srgb(0.7, 0.55, 0.3),
    },
    Block {
        name: "Tall Crate",
        size: Vec3::new(1.5, 1.1, 1.5),
        center: Vec3::new(-4.0, 0.55, -2.0),
        color: Color::srgb(0.7, 0.55, 0.3),
    },
];

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Name::new("Ground"),
        RigidBody::Static,
        Collider::half_space(Vector::Y),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(80.0, 80.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.35, 0.45, 0.35))),
        Transform::default(),
    ));

    for block in BLOCKS {
        commands.spawn((
            Name::new(block.name),
            RigidBody::Static,
            Collider::cuboid(
                block.size.x.adjust_precision(),
                block.size.y.adjust_precision(),
                block.size.z.adjust_precision(),
            ),
            Mesh3d(meshes.add(Cuboid::from_size(block.size))),
            MeshMaterial3d(materials.add(block.color)),
            Transform::from_translation(block.center),
        ));
    }

    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(8.0, 16.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((Player, Transform::from_xyz(0.0, 0.1, 0.0)));
}
