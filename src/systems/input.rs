//! Input systems.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! writes the results into [`crate::resources::input::InputState`].

use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;

use crate::resources::input::InputState;

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(mut input: ResMut<InputState>, rl: NonSendMut<raylib::RaylibHandle>) {
    let is_key_down = |key: KeyboardKey| rl.is_key_down(key);
    let is_key_pressed = |key: KeyboardKey| rl.is_key_pressed(key);
    let is_key_released = |key: KeyboardKey| rl.is_key_released(key);

    let InputState {
        move_forward,
        move_backward,
        move_left,
        move_right,
    } = &mut *input;

    for state in [move_forward, move_backward, move_left, move_right] {
        state.active = is_key_down(state.key_binding);
        state.just_pressed = is_key_pressed(state.key_binding);
        state.just_released = is_key_released(state.key_binding);
    }
}
