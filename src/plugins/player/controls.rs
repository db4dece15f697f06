use bevy::{
    input::mouse::MouseMotion,
    prelude::*,
    window::{CursorGrabMode, PrimaryWindow},
};

use crate::keybinds::{CROUCH, JUMP, MOVE_BACK, MOVE_FORWARD, MOVE_LEFT, MOVE_RIGHT, SPRINT};
use crate::plugins::player::controller::InputState;

/// Look delta produced by a fully deflected right stick, per frame.
const GAMEPAD_LOOK_SCALE: f32 = 12.0;

/// Samples keyboard, mouse and gamepad into every [`InputState`].
///
/// Mouse look is only read while the cursor is captured by the window.
pub fn gather_player_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut mouse_motion: EventReader<MouseMotion>,
    gamepads: Query<&Gamepad>,
    primary_window_query: Query<&Window, With<PrimaryWindow>>,
    mut query: Query<&mut InputState>,
) {
    let mouse_controls_camera = primary_window_query
        .get_single()
        .map_or(false, |w| !w.cursor_options.visible);
    let mut look = if mouse_controls_camera {
        mouse_motion.read().map(|event| event.delta).sum()
    } else {
        mouse_motion.clear();
        Vec2::ZERO
    };

    let horizontal = keyboard.any_pressed(MOVE_RIGHT) as i8 - keyboard.any_pressed(MOVE_LEFT) as i8;
    let vertical = keyboard.any_pressed(MOVE_FORWARD) as i8 - keyboard.any_pressed(MOVE_BACK) as i8;
    let mut direction = Vec2::new(horizontal as f32, vertical as f32);

    let mut jump = keyboard.any_just_pressed(JUMP);
    let mut sprint = keyboard.any_pressed(SPRINT);
    let mut crouch = keyboard.any_just_pressed(CROUCH);

    for gamepad in gamepads.iter() {
        if let (Some(x), Some(y)) = (
            gamepad.get(GamepadAxis::LeftStickX),
            gamepad.get(GamepadAxis::LeftStickY),
        ) {
            direction += Vec2::new(x, y);
        }
        if let (Some(x), Some(y)) = (
            gamepad.get(GamepadAxis::RightStickX),
            gamepad.get(GamepadAxis::RightStickY),
        ) {
            look += Vec2::new(x, -y) * GAMEPAD_LOOK_SCALE;
        }

        jump |= gamepad.just_pressed(GamepadButton::South);
        sprint |= gamepad.pressed(GamepadButton::LeftThumb);
        crouch |= gamepad.just_pressed(GamepadButton::East);
    }

    let direction = direction.clamp_length_max(1.0);
    for mut input in query.iter_mut() {
        *input = InputState {
            move_x: direction.x,
            move_z: direction.y,
            look_dx: look.x,
            look_dy: look.y,
            jump,
            sprint,
            crouch,
        };
    }
}

pub fn capture_cursor(mut primary_window_query: Query<&mut Window, With<PrimaryWindow>>) {
    let Ok(mut window) = primary_window_query.get_single_mut() else {
        return;
    };
    window.cursor_options.grab_mode = CursorGrabMode::Locked;
    window.cursor_options.visible = false;
}

pub fn grab_ungrab_mouse(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut primary_window_query: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Ok(mut window) = primary_window_query.get_single_mut() else {
        return;
    };
    if window.cursor_options.visible {
        if mouse_buttons.just_pressed(MouseButton::Left) {
            window.cursor_options.grab_mode = CursorGrabMode::Locked;
            window.cursor_options.visible = false;
        }
    } else if keyboard.just_released(KeyCode::Escape) {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
}
