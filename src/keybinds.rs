use bevy::prelude::KeyCode;

pub const MOVE_FORWARD: [KeyCode; 2] = [KeyCode::KeyW, KeyCode::ArrowUp];
pub const MOVE_BACK: [KeyCode; 2] = [KeyCode::KeyS, KeyCode::ArrowDown];
pub const MOVE_LEFT: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
pub const MOVE_RIGHT: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
pub const JUMP: [KeyCode; 1] = [KeyCode::Space];
pub const SPRINT: [KeyCode; 1] = [KeyCode::ShiftLeft];
pub const CROUCH: [KeyCode; 2] = [KeyCode::ControlLeft, KeyCode::KeyC];

#[cfg(debug_assertions)]
pub const TOGGLE_WIREFRAME: KeyCode = KeyCode::F1;
#[cfg(debug_assertions)]
pub const TOGGLE_BODY_GIZMOS: KeyCode = KeyCode::F2;
