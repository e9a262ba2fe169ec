//! Kinematic body component.
//!
//! The [`RigidBody`] component stores an entity's velocity, the acceleration
//! accumulated during the current frame, and the clamp/damping parameters the
//! movement system applies. Acceleration is an accumulator that input systems
//! rebuild from zero every frame; it is never carried over between frames.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

/// Kinematic body storing velocity, per-frame acceleration, and tuning.
///
/// Updated by input systems (acceleration) and consumed by the movement
/// system to update [`WorldPosition`](super::worldposition::WorldPosition).
///
/// # Fields
/// - `velocity` - Current velocity in world units per frame
/// - `acceleration` - Acceleration accumulated this frame
/// - `max_speed` - Symmetric component-wise clamp applied after integration
/// - `damping` - Multiplicative velocity decay applied every frame
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    /// Current velocity in world units per frame.
    pub velocity: Vector3,
    /// Acceleration accumulated this frame. Rebuilt from zero each frame.
    pub acceleration: Vector3,
    /// Each velocity component is clamped to `[-max_speed, max_speed]`.
    pub max_speed: f32,
    /// Velocity decay factor applied every frame (1.0 = no decay).
    pub damping: f32,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody at rest with no clamp and no damping.
    pub fn new() -> Self {
        Self {
            velocity: Vector3::zero(),
            acceleration: Vector3::zero(),
            max_speed: f32::INFINITY,
            damping: 1.0,
        }
    }

    /// Create a RigidBody with movement parameters configured.
    ///
    /// # Arguments
    /// * `max_speed` - Component-wise velocity clamp bound
    /// * `damping` - Per-frame multiplicative decay (0.9 = 10% loss per frame)
    pub fn with_physics(max_speed: f32, damping: f32) -> Self {
        Self {
            velocity: Vector3::zero(),
            acceleration: Vector3::zero(),
            max_speed,
            damping,
        }
    }

    /// Clamp each velocity component independently to `[-max_speed, max_speed]`.
    pub fn clamp_velocity(&mut self) {
        let limit = self.max_speed;
        self.velocity.x = self.velocity.x.clamp(-limit, limit);
        self.velocity.y = self.velocity.y.clamp(-limit, limit);
        self.velocity.z = self.velocity.z.clamp(-limit, limit);
    }

    /// Squared magnitude of the current velocity.
    pub fn speed_sq(&self) -> f32 {
        self.velocity.dot(self.velocity)
    }
}
