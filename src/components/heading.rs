//! Yaw heading component.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

/// Rotation of an entity around the +Y axis, in radians. Zero faces +Z.
///
/// The movement system points the heading along the direction of travel
/// whenever the entity is moving faster than a small threshold.
#[derive(Component, Clone, Copy, Debug)]
pub struct Heading {
    pub yaw: f32,
}

impl Heading {
    pub fn new(yaw: f32) -> Self {
        Self { yaw }
    }

    /// Yaw that faces along `direction` projected onto the ground plane.
    pub fn yaw_towards(direction: Vector3) -> f32 {
        direction.x.atan2(direction.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_yaw_towards_positive_z_is_zero() {
        assert!(approx_eq(Heading::yaw_towards(Vector3::new(0.0, 0.0, 1.0)), 0.0));
    }

    #[test]
    fn test_yaw_towards_positive_x_is_quarter_turn() {
        assert!(approx_eq(
            Heading::yaw_towards(Vector3::new(1.0, 0.0, 0.0)),
            FRAC_PI_2
        ));
    }

    #[test]
    fn test_yaw_towards_negative_z_is_half_turn() {
        assert!(approx_eq(
            Heading::yaw_towards(Vector3::new(0.0, 0.0, -1.0)).abs(),
            PI
        ));
    }

    #[test]
    fn test_yaw_ignores_vertical_component() {
        let flat = Heading::yaw_towards(Vector3::new(1.0, 0.0, 1.0));
        let raised = Heading::yaw_towards(Vector3::new(1.0, 5.0, 1.0));
        assert!(approx_eq(flat, raised));
    }
}
