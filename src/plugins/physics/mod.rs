use avian3d::PhysicsPlugins;
use bevy::app::{App, Plugin};

pub mod character_body;

pub use character_body::{AvianCharacterBody, BodyCollider, CapsuleBody, MaxSlopeAngle};

pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PhysicsPlugins::default())
            .register_type::<CapsuleBody>()
            .register_type::<BodyCollider>()
            .register_type::<MaxSlopeAngle>();
    }
}
