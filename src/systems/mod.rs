//! Engine systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering.
//!
//! Submodules overview
//! - [`assetloader`] – drain loader messages and finish model loads
//! - [`camerafollow`] – move the scene camera with the tracked entity
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`inputaccelerationcontroller`] – translate input state into acceleration
//! - [`movement`] – integrate acceleration, velocity, position, and heading
//! - [`render`] – draw the scene using Raylib's 3D mode
//! - [`time`] – update simulation time and delta

pub mod assetloader;
pub mod camerafollow;
pub mod input;
pub mod inputaccelerationcontroller;
pub mod movement;
pub mod render;
pub mod time;
