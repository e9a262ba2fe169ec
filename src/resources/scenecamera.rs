//! Shared 3D camera resource.
//!
//! Wraps raylib's [`raylib::prelude::Camera3D`] so that systems can agree on
//! a single view transform. The camera follow system moves it in lockstep
//! with the tracked entity.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Camera3D;

/// ECS resource that holds the active 3D camera parameters.
///
/// Inserted during setup, read by the render system, and mutated by the
/// camera follow system.
#[derive(Resource, Clone, Copy)]
pub struct SceneCamera(pub Camera3D);
