//! Scene tick integration tests for input acceleration, movement integration,
//! heading, and camera follow.

use bevy_ecs::prelude::*;
use raylib::prelude::*;
use std::f32::consts::{FRAC_PI_2, PI};

use foxdragon::components::camerafollow::CameraFollow;
use foxdragon::components::heading::Heading;
use foxdragon::components::inputcontrolled::AccelerationControlled;
use foxdragon::components::modelslot::ModelSlot;
use foxdragon::components::rigidbody::RigidBody;
use foxdragon::components::worldposition::WorldPosition;
use foxdragon::resources::input::InputState;
use foxdragon::resources::scenecamera::SceneCamera;
use foxdragon::resources::worldtime::WorldTime;
use foxdragon::systems::camerafollow::camera_follow;
use foxdragon::systems::inputaccelerationcontroller::input_acceleration_controller;
use foxdragon::systems::movement::movement;

const EPSILON: f32 = 1e-6;

const ACCEL_RATE: f32 = 0.75;
const MAX_SPEED: f32 = 0.1;
const DAMPING: f32 = 0.9;

const CAMERA_START: Vector3 = Vector3 {
    x: 0.0,
    y: 10.0,
    z: 35.0,
};

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta,
        time_scale: 1.0,
        frame_count: 0,
    });
    world.insert_resource(InputState::default());
    world.insert_resource(SceneCamera(Camera3D::perspective(
        CAMERA_START,
        Vector3::zero(),
        Vector3::new(0.0, 1.0, 0.0),
        60.0,
    )));
    world
}

fn spawn_player(world: &mut World, slot: ModelSlot) -> Entity {
    world
        .spawn((
            WorldPosition::new(0.0, 0.0, 0.0),
            RigidBody::with_physics(MAX_SPEED, DAMPING),
            AccelerationControlled::from_rate(ACCEL_RATE),
            Heading::new(PI),
            slot,
            CameraFollow,
        ))
        .id()
}

/// One full frame: acceleration from input, integration, camera follow.
fn tick_frame(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((input_acceleration_controller, movement, camera_follow).chain());
    schedule.run(world);
}

fn camera_position(world: &World) -> Vector3 {
    world.resource::<SceneCamera>().0.position
}

#[test]
fn acceleration_sign_matches_net_key_pressure() {
    let mut world = make_world(1.0);
    let player = spawn_player(&mut world, ModelSlot::pending("player"));

    {
        let mut input = world.resource_mut::<InputState>();
        input.move_forward.active = true;
        input.move_right.active = true;
    }
    tick_frame(&mut world);

    let rb = world.get::<RigidBody>(player).unwrap();
    assert!(rb.acceleration.z < 0.0);
    assert!(rb.acceleration.x > 0.0);
    assert!(approx_eq(rb.acceleration.z, -0.75));
    assert!(approx_eq(rb.acceleration.x, 0.75));
}

#[test]
fn opposing_keys_cancel_exactly() {
    let mut world = make_world(1.0);
    let player = spawn_player(&mut world, ModelSlot::pending("player"));

    {
        let mut input = world.resource_mut::<InputState>();
        input.move_forward.active = true;
        input.move_backward.active = true;
        input.move_left.active = true;
        input.move_right.active = true;
    }
    tick_frame(&mut world);

    let rb = world.get::<RigidBody>(player).unwrap();
    assert!(approx_eq(rb.acceleration.x, 0.0));
    assert!(approx_eq(rb.acceleration.z, 0.0));
    assert!(approx_eq(rb.velocity.x, 0.0));
    assert!(approx_eq(rb.velocity.z, 0.0));
}

#[test]
fn acceleration_is_rebuilt_from_scratch_each_frame() {
    let mut world = make_world(1.0);
    let player = spawn_player(&mut world, ModelSlot::pending("player"));

    world.resource_mut::<InputState>().move_forward.active = true;
    tick_frame(&mut world);
    world.resource_mut::<InputState>().move_forward.active = false;
    tick_frame(&mut world);

    let rb = world.get::<RigidBody>(player).unwrap();
    assert!(approx_eq(rb.acceleration.x, 0.0));
    assert!(approx_eq(rb.acceleration.y, 0.0));
    assert!(approx_eq(rb.acceleration.z, 0.0));
}

#[test]
fn forward_key_scenario_clamps_then_damps() {
    // {w}, delta 1.0, v0 = 0: a = (0,0,-0.75), v clamps to -0.1, damps to -0.09.
    let mut world = make_world(1.0);
    let mut slot = ModelSlot::pending("player");
    slot.mark_ready();
    let player = spawn_player(&mut world, slot);

    world.resource_mut::<InputState>().move_forward.active = true;
    tick_frame(&mut world);

    let rb = world.get::<RigidBody>(player).unwrap();
    let pos = world.get::<WorldPosition>(player).unwrap();
    assert!(approx_eq(rb.velocity.z, -0.09));
    assert!(approx_eq(rb.velocity.x, 0.0));
    assert!(approx_eq(pos.pos.z, -0.09));
}

#[test]
fn coasting_scenario_damps_without_input() {
    // {}, delta 1.0, v0 = (0.1, 0, 0): unchanged by integration, damps to 0.09.
    let mut world = make_world(1.0);
    let mut slot = ModelSlot::pending("player");
    slot.mark_ready();
    let player = spawn_player(&mut world, slot);
    world.get_mut::<RigidBody>(player).unwrap().velocity = Vector3::new(0.1, 0.0, 0.0);

    tick_frame(&mut world);

    let rb = world.get::<RigidBody>(player).unwrap();
    let pos = world.get::<WorldPosition>(player).unwrap();
    assert!(approx_eq(rb.velocity.x, 0.09));
    assert!(approx_eq(pos.pos.x, 0.09));
}

#[test]
fn velocity_component_never_exceeds_max_speed() {
    let mut world = make_world(1.0);
    let player = spawn_player(&mut world, ModelSlot::pending("player"));

    {
        let mut input = world.resource_mut::<InputState>();
        input.move_forward.active = true;
        input.move_right.active = true;
    }
    for _ in 0..200 {
        tick_frame(&mut world);
        let rb = world.get::<RigidBody>(player).unwrap();
        assert!(rb.velocity.x.abs() <= MAX_SPEED + EPSILON);
        assert!(rb.velocity.z.abs() <= MAX_SPEED + EPSILON);
    }
}

#[test]
fn held_key_settles_below_max_speed() {
    // Damping applies every frame, including while accelerating, so the
    // sustained speed is max_speed * damping rather than max_speed.
    let mut world = make_world(1.0);
    let mut slot = ModelSlot::pending("player");
    slot.mark_ready();
    let player = spawn_player(&mut world, slot);

    world.resource_mut::<InputState>().move_forward.active = true;
    for _ in 0..50 {
        tick_frame(&mut world);
    }

    let rb = world.get::<RigidBody>(player).unwrap();
    assert!(approx_eq(rb.velocity.z, -MAX_SPEED * DAMPING));
}

#[test]
fn velocity_decays_geometrically_without_input() {
    let mut world = make_world(1.0);
    let player = spawn_player(&mut world, ModelSlot::pending("player"));
    world.get_mut::<RigidBody>(player).unwrap().velocity = Vector3::new(0.1, 0.0, 0.0);

    let mut previous = 0.1f32;
    for _ in 0..100 {
        tick_frame(&mut world);
        let speed = world.get::<RigidBody>(player).unwrap().velocity.x;
        assert!(speed < previous);
        assert!(approx_eq(speed, previous * DAMPING));
        previous = speed;
    }
    assert!(previous.abs() < 1e-5);
}

#[test]
fn pending_model_freezes_position_and_camera() {
    let mut world = make_world(1.0);
    let player = spawn_player(&mut world, ModelSlot::pending("player"));

    world.resource_mut::<InputState>().move_forward.active = true;
    for _ in 0..10 {
        tick_frame(&mut world);
    }

    let rb = world.get::<RigidBody>(player).unwrap();
    let pos = world.get::<WorldPosition>(player).unwrap();
    let camera = camera_position(&world);
    // Velocity keeps integrating; position and camera wait for the model.
    assert!(rb.velocity.z < 0.0);
    assert!(approx_eq(pos.pos.z, 0.0));
    assert!(approx_eq(camera.z, CAMERA_START.z));
    assert!(approx_eq(camera.y, CAMERA_START.y));
}

#[test]
fn failed_model_keeps_entity_inert_forever() {
    let mut world = make_world(1.0);
    let mut slot = ModelSlot::pending("player");
    slot.mark_failed();
    let player = spawn_player(&mut world, slot);

    world.resource_mut::<InputState>().move_forward.active = true;
    for _ in 0..25 {
        tick_frame(&mut world);
    }

    let pos = world.get::<WorldPosition>(player).unwrap();
    assert!(approx_eq(pos.pos.z, 0.0));
    assert!(approx_eq(camera_position(&world).z, CAMERA_START.z));
}

#[test]
fn ready_model_moves_position_and_camera_in_lockstep() {
    let mut world = make_world(1.0);
    let mut slot = ModelSlot::pending("player");
    slot.mark_ready();
    let player = spawn_player(&mut world, slot);

    world.resource_mut::<InputState>().move_forward.active = true;
    for _ in 0..20 {
        tick_frame(&mut world);
    }

    let pos = world.get::<WorldPosition>(player).unwrap().pos;
    let camera = camera_position(&world);
    assert!(pos.z < 0.0);
    // The camera keeps its initial offset from the body.
    assert!((camera.x - pos.x - CAMERA_START.x).abs() < 1e-3);
    assert!((camera.y - pos.y - CAMERA_START.y).abs() < 1e-3);
    assert!((camera.z - pos.z - CAMERA_START.z).abs() < 1e-3);
}

#[test]
fn diagonal_input_clamps_each_component_independently() {
    let mut world = make_world(1.0);
    let mut slot = ModelSlot::pending("player");
    slot.mark_ready();
    let player = spawn_player(&mut world, slot);

    {
        let mut input = world.resource_mut::<InputState>();
        input.move_forward.active = true;
        input.move_right.active = true;
    }
    tick_frame(&mut world);

    let rb = world.get::<RigidBody>(player).unwrap();
    assert!(approx_eq(rb.velocity.x, 0.09));
    assert!(approx_eq(rb.velocity.z, -0.09));
}

#[test]
fn heading_faces_direction_of_travel() {
    let mut world = make_world(1.0);
    let mut slot = ModelSlot::pending("player");
    slot.mark_ready();
    let player = spawn_player(&mut world, slot);
    world.get_mut::<RigidBody>(player).unwrap().velocity = Vector3::new(0.1, 0.0, 0.0);

    tick_frame(&mut world);

    let heading = world.get::<Heading>(player).unwrap();
    assert!(approx_eq(heading.yaw, FRAC_PI_2));
}

#[test]
fn heading_unchanged_below_turn_threshold() {
    let mut world = make_world(1.0);
    let mut slot = ModelSlot::pending("player");
    slot.mark_ready();
    let player = spawn_player(&mut world, slot);
    world.get_mut::<RigidBody>(player).unwrap().velocity = Vector3::new(1e-5, 0.0, 0.0);

    tick_frame(&mut world);

    let heading = world.get::<Heading>(player).unwrap();
    assert!(approx_eq(heading.yaw, PI));
}

#[test]
fn heading_unchanged_while_model_pending() {
    let mut world = make_world(1.0);
    let player = spawn_player(&mut world, ModelSlot::pending("player"));

    world.resource_mut::<InputState>().move_forward.active = true;
    for _ in 0..5 {
        tick_frame(&mut world);
    }

    let heading = world.get::<Heading>(player).unwrap();
    assert!(approx_eq(heading.yaw, PI));
}

#[test]
fn entities_without_model_slot_always_move() {
    let mut world = make_world(1.0);
    let entity = world
        .spawn((WorldPosition::new(0.0, 0.0, 0.0), {
            let mut rb = RigidBody::with_physics(MAX_SPEED, DAMPING);
            rb.velocity = Vector3::new(0.1, 0.0, 0.0);
            rb
        }))
        .id();

    tick_frame(&mut world);

    let pos = world.get::<WorldPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 0.09));
}
