//! Input-driven acceleration component.
//!
//! [`AccelerationControlled`] describes how an entity accelerates in response
//! to the four directional inputs. The
//! [`input_acceleration_controller`](crate::systems::inputaccelerationcontroller::input_acceleration_controller)
//! system reads the shared input state and accumulates these vectors into the
//! entity's [`RigidBody`](super::rigidbody::RigidBody) acceleration.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

/// Per-direction acceleration applied while the matching key is held.
///
/// Each field stores the acceleration to accumulate (scaled by the frame
/// delta) when the corresponding directional input is active. Forward is
/// negative z, matching a camera placed down the +z axis.
#[derive(Component, Clone, Copy, Debug)]
pub struct AccelerationControlled {
    /// Acceleration while the forward key is held.
    pub forward_acceleration: Vector3,
    /// Acceleration while the backward key is held.
    pub backward_acceleration: Vector3,
    /// Acceleration while the left key is held.
    pub left_acceleration: Vector3,
    /// Acceleration while the right key is held.
    pub right_acceleration: Vector3,
}

impl AccelerationControlled {
    /// Create a controller with explicit per-direction vectors.
    pub fn new(forward: Vector3, backward: Vector3, left: Vector3, right: Vector3) -> Self {
        Self {
            forward_acceleration: forward,
            backward_acceleration: backward,
            left_acceleration: left,
            right_acceleration: right,
        }
    }

    /// Create a controller with a uniform `rate` along the ground axes:
    /// forward/backward on ∓z, left/right on ∓x.
    pub fn from_rate(rate: f32) -> Self {
        Self {
            forward_acceleration: Vector3::new(0.0, 0.0, -rate),
            backward_acceleration: Vector3::new(0.0, 0.0, rate),
            left_acceleration: Vector3::new(-rate, 0.0, 0.0),
            right_acceleration: Vector3::new(rate, 0.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_from_rate_axes_and_signs() {
        let ac = AccelerationControlled::from_rate(0.75);
        assert!(approx_eq(ac.forward_acceleration.z, -0.75));
        assert!(approx_eq(ac.backward_acceleration.z, 0.75));
        assert!(approx_eq(ac.left_acceleration.x, -0.75));
        assert!(approx_eq(ac.right_acceleration.x, 0.75));
        // Nothing accelerates vertically.
        assert!(approx_eq(ac.forward_acceleration.y, 0.0));
        assert!(approx_eq(ac.left_acceleration.y, 0.0));
    }

    #[test]
    fn test_opposing_directions_sum_to_zero() {
        let ac = AccelerationControlled::from_rate(0.75);
        let fb = ac.forward_acceleration + ac.backward_acceleration;
        let lr = ac.left_acceleration + ac.right_acceleration;
        assert!(approx_eq(fb.z, 0.0));
        assert!(approx_eq(lr.x, 0.0));
    }
}
