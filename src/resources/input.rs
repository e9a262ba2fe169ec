//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the demo cares about and exposes it
//! to systems via the [`InputState`] resource. Defaults use WASD for
//! movement. Replaces ambient global key maps: the resource is owned by the
//! world and rewritten once per frame by the input system.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Boolean key state with an associated keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Resource capturing the per-frame keyboard state relevant to movement.
///
/// Forward/backward/left/right map to W/S/A/D by default. No debouncing or
/// repeat suppression: `active` mirrors the raw held state each frame.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub move_forward: BoolState,
    pub move_backward: BoolState,
    pub move_left: BoolState,
    pub move_right: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            move_forward: BoolState::bound_to(KeyboardKey::KEY_W),
            move_backward: BoolState::bound_to(KeyboardKey::KEY_S),
            move_left: BoolState::bound_to(KeyboardKey::KEY_A),
            move_right: BoolState::bound_to(KeyboardKey::KEY_D),
        }
    }
}
