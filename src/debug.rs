use bevy::{
    color::palettes::css::{GOLD, LIME, RED},
    diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin},
    pbr::wireframe::{WireframeConfig, WireframePlugin},
    prelude::*,
};
use bevy_inspector_egui::quick::WorldInspectorPlugin;

use crate::keybinds::{TOGGLE_BODY_GIZMOS, TOGGLE_WIREFRAME};
use crate::plugins::physics::CapsuleBody;
use crate::plugins::player::controller::{Character, Stance};

#[derive(Resource, Debug)]
pub struct ShowBodyGizmos(pub bool);

impl Default for ShowBodyGizmos {
    fn default() -> Self {
        Self(true)
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(WireframeConfig {
            global: false,
            default_color: Color::WHITE.darker(0.4),
        })
        .init_resource::<ShowBodyGizmos>()
        .add_plugins((
            FrameTimeDiagnosticsPlugin,
            LogDiagnosticsPlugin::default(),
            WireframePlugin,
            WorldInspectorPlugin::default(),
        ))
        .add_systems(
            Update,
            (
                toggle_wireframe.run_if(resource_changed::<ButtonInput<KeyCode>>),
                draw_character_bodies.run_if(|show: Res<ShowBodyGizmos>| show.0),
            ),
        );
    }
}

fn toggle_wireframe(
    mut wireframe_config: ResMut<WireframeConfig>,
    mut show_bodies: ResMut<ShowBodyGizmos>,
    keyboard: Res<ButtonInput<KeyCode>>,
) {
    if keyboard.just_pressed(TOGGLE_WIREFRAME) {
        wireframe_config.global = !wireframe_config.global;
    }
    if keyboard.just_pressed(TOGGLE_BODY_GIZMOS) {
        show_bodies.0 = !show_bodies.0;
    }
}

/// Outlines each character's capsule: green standing, gold crouching, red in the air.
fn draw_character_bodies(
    mut gizmos: Gizmos,
    characters: Query<(&Character, &CapsuleBody, &GlobalTransform)>,
) {
    for (character, capsule, transform) in characters.iter() {
        let color = match (character.is_grounded(), character.stance()) {
            (false, _) => RED,
            (true, Stance::Crouching) => GOLD,
            (true, Stance::Standing) => LIME,
        };
        let (_, rotation, translation) = transform.to_scale_rotation_translation();
        let length = (capsule.height - 2.0 * capsule.radius).max(0.0);
        gizmos.primitive_3d(
            &Capsule3d::new(capsule.radius, length),
            Isometry3d::new(translation + rotation * capsule.center, rotation),
            color,
        );
    }
}
