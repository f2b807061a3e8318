//! Locomotion domain: input sampling for movement, look, and jump.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::locomotion::LocomotionInput;

/// Stick deflection below this is treated as centered.
const STICK_DEAD_ZONE: f32 = 0.2;

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut input: ResMut<LocomotionInput>,
) {
    // Move axis: WASD (+y = forward)
    let mut move_axis = Vec2::ZERO;
    if keyboard.pressed(KeyCode::KeyA) {
        move_axis.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        move_axis.x += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        move_axis.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) {
        move_axis.y += 1.0;
    }

    // Look axis: arrow keys
    let mut look_axis = Vec2::ZERO;
    if keyboard.pressed(KeyCode::ArrowLeft) {
        look_axis.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowRight) {
        look_axis.x += 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowDown) {
        look_axis.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowUp) {
        look_axis.y += 1.0;
    }

    let mut jump_edge =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);

    // Gamepad sticks take over when deflected past the dead zone
    for gamepad in &gamepads {
        let left = gamepad.left_stick();
        if left.length() > STICK_DEAD_ZONE {
            move_axis = left;
        }
        let right = gamepad.right_stick();
        if right.length() > STICK_DEAD_ZONE {
            look_axis = right;
        }
        jump_edge |= gamepad.just_pressed(GamepadButton::South);
    }

    input.move_axis = move_axis.clamp_length_max(1.0);
    input.look_axis = look_axis.clamp_length_max(1.0);

    // Keep the last known pointer position when the cursor leaves the window
    if let Ok(window) = windows.single()
        && let Some(pointer) = window.cursor_position()
    {
        input.pointer = pointer;
    }

    // Latched until the integrator consumes it
    if jump_edge {
        input.jump_pressed = true;
    }
}
