//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the scene. Components define data such as position, movement state, input
//! response, and model load status.
//!
//! Submodules overview:
//! - [`camerafollow`] – marker for the entity the scene camera trails
//! - [`heading`] – yaw orientation around the vertical axis
//! - [`inputcontrolled`] – input-driven acceleration intent
//! - [`modelslot`] – load state of the model backing an entity
//! - [`rigidbody`] – kinematic body storing velocity and acceleration
//! - [`worldposition`] – world-space position of an entity

pub mod camerafollow;
pub mod heading;
pub mod inputcontrolled;
pub mod modelslot;
pub mod rigidbody;
pub mod worldposition;
