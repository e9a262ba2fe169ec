//! Scene setup.
//!
//! Spawns the controlled character and places the scene camera. The camera
//! starts above and behind the character's spawn point; the camera follow
//! system carries that offset along for the rest of the session.

use bevy_ecs::prelude::*;
use raylib::prelude::*;
use std::f32::consts::PI;

use crate::components::camerafollow::CameraFollow;
use crate::components::heading::Heading;
use crate::components::inputcontrolled::AccelerationControlled;
use crate::components::modelslot::ModelSlot;
use crate::components::rigidbody::RigidBody;
use crate::components::worldposition::WorldPosition;
use crate::resources::gameconfig::GameConfig;
use crate::resources::scenecamera::SceneCamera;

/// Store key for the controlled character's model.
pub const PLAYER_MODEL_KEY: &str = "player";

const CAMERA_POSITION: Vector3 = Vector3 {
    x: 0.0,
    y: 10.0,
    z: 35.0,
};
const CAMERA_FOVY: f32 = 60.0;

/// Insert the scene camera and spawn the controlled character.
///
/// The character spawns at the origin with its [`ModelSlot`] pending; it
/// stays in place until the asset loader delivers the model.
pub fn setup(world: &mut World, config: &GameConfig) {
    let camera = Camera3D::perspective(
        CAMERA_POSITION,
        Vector3::zero(),
        Vector3::new(0.0, 1.0, 0.0),
        CAMERA_FOVY,
    );
    world.insert_resource(SceneCamera(camera));

    world.spawn((
        WorldPosition::new(0.0, 0.0, 0.0),
        RigidBody::with_physics(config.max_speed, config.damping),
        AccelerationControlled::from_rate(config.accel_rate),
        Heading::new(PI), // spawn facing the camera
        ModelSlot::pending(PLAYER_MODEL_KEY),
        CameraFollow,
    ));
}
