pub mod physics;
pub mod player;

pub use {physics::PhysicsPlugin, player::PlayerPlugin};
