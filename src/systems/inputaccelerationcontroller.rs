//! Acceleration-based input controller.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! applies directional accelerations to entities with an
//! [`AccelerationControlled`](crate::components::inputcontrolled::AccelerationControlled)
//! component. Acceleration is rebuilt from zero every invocation, so nothing
//! accumulates across frames and opposing keys cancel exactly.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector3;

use crate::components::inputcontrolled::AccelerationControlled;
use crate::components::rigidbody::RigidBody;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Update each controlled entity's `RigidBody` acceleration based on input.
///
/// When no input is pressed, acceleration stays zero and damping in the
/// movement system handles deceleration. Each pressed direction contributes
/// its configured vector scaled by the frame delta.
pub fn input_acceleration_controller(
    mut query: Query<(&AccelerationControlled, &mut RigidBody)>,
    input_state: Res<InputState>,
    time: Res<WorldTime>,
) {
    for (accel_controlled, mut rigidbody) in query.iter_mut() {
        rigidbody.acceleration = Vector3::zero();

        if input_state.move_forward.active {
            rigidbody.acceleration += accel_controlled.forward_acceleration.scale_by(time.delta);
        }
        if input_state.move_backward.active {
            rigidbody.acceleration += accel_controlled.backward_acceleration.scale_by(time.delta);
        }
        if input_state.move_left.active {
            rigidbody.acceleration += accel_controlled.left_acceleration.scale_by(time.delta);
        }
        if input_state.move_right.active {
            rigidbody.acceleration += accel_controlled.right_acceleration.scale_by(time.delta);
        }
    }
}
