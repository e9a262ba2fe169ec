//! Camera follow system.

use bevy_ecs::prelude::*;

use crate::components::camerafollow::CameraFollow;
use crate::components::modelslot::ModelSlot;
use crate::components::rigidbody::RigidBody;
use crate::resources::scenecamera::SceneCamera;

/// Move the scene camera by the tracked entity's per-frame velocity.
///
/// Must run after [`movement`](crate::systems::movement::movement) so the
/// camera sees the same damped velocity that was just applied to the
/// entity's position. The camera's initial offset from the entity is never
/// recomputed, only carried along.
pub fn camera_follow(
    query: Query<(&RigidBody, Option<&ModelSlot>), With<CameraFollow>>,
    mut camera: ResMut<SceneCamera>,
) {
    for (rigidbody, slot) in query.iter() {
        if let Some(slot) = slot {
            if !slot.is_ready() {
                continue;
            }
        }
        camera.0.position += rigidbody.velocity;
    }
}
