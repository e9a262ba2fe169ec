use bevy_ecs::prelude::Component;

/// Marker for the entity the scene camera trails.
///
/// The camera follow system adds the entity's per-frame velocity to the
/// camera position, so whatever offset the camera starts with is kept for
/// the rest of the session.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct CameraFollow;
