//! Movement integration system.
//!
//! Applies the per-frame state transition for every kinematic body:
//! acceleration into velocity, component-wise clamp, damping, and (once the
//! entity's model is loaded) position and heading updates. Damping is
//! unconditional and runs every frame, so sustained input settles the speed
//! below `max_speed` instead of reaching it.

use bevy_ecs::prelude::*;

use crate::components::heading::Heading;
use crate::components::modelslot::ModelSlot;
use crate::components::rigidbody::RigidBody;
use crate::components::worldposition::WorldPosition;

/// Squared speed below which the heading is left untouched, so near-zero
/// velocities do not snap the entity to an arbitrary direction.
pub const MIN_TURN_SPEED_SQ: f32 = 1e-7;

/// Integrate velocity and position for one frame.
///
/// Velocity always integrates, even while the entity's [`ModelSlot`] is
/// still `Pending` or `Failed`; position and heading only change once the
/// slot is `Ready`. Entities without a slot are always movable.
pub fn movement(
    mut query: Query<(
        &mut WorldPosition,
        &mut RigidBody,
        Option<&mut Heading>,
        Option<&ModelSlot>,
    )>,
) {
    for (mut position, mut rigidbody, heading, slot) in query.iter_mut() {
        let acceleration = rigidbody.acceleration;
        rigidbody.velocity += acceleration;
        rigidbody.clamp_velocity();
        let damping = rigidbody.damping;
        rigidbody.velocity = rigidbody.velocity.scale_by(damping);

        if let Some(slot) = slot {
            if !slot.is_ready() {
                continue;
            }
        }

        let velocity = rigidbody.velocity;
        position.pos += velocity;

        if let Some(mut heading) = heading {
            if velocity.dot(velocity) > MIN_TURN_SPEED_SQ {
                heading.yaw = Heading::yaw_towards(velocity);
            }
        }
    }
}
