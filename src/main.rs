//! Fox Dragon main entry point.
//!
//! A small 3D scene demo written in Rust using:
//! - **raylib** for windowing and rendering
//! - **bevy_ecs** for entity-component-system architecture
//!
//! A glTF character is driven with WASD: held keys accumulate acceleration,
//! velocity is clamped component-wise and damped every frame, and the camera
//! trails the character at a fixed offset.
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (position, rigid body, heading, model slot)
//! - [`events`] – Event types (model load completion)
//! - [`game`] – Scene setup (camera placement, character spawn)
//! - [`resources`] – ECS resources (input, config, time, camera, model store)
//! - [`systems`] – ECS systems (input, acceleration, movement, camera, render)
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, ECS world, and resources
//! 2. Spawn the asset loader thread for the character model
//! 3. Run the main loop:
//!    - Update input and time
//!    - Drain loader messages, finish model loads
//!    - Accumulate acceleration, integrate movement, follow with the camera
//!    - Render the scene
//! 4. Join the loader thread on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use crate::events::modelload::observe_model_load;
use crate::resources::assetloader::{AssetRequest, setup_asset_loader, shutdown_asset_loader};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::modelstore::ModelStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::assetloader::poll_asset_messages;
use crate::systems::camerafollow::camera_follow;
use crate::systems::input::update_input_state;
use crate::systems::inputaccelerationcontroller::input_acceleration_controller;
use crate::systems::movement::movement;
use crate::systems::render::render_system;
use crate::systems::time::update_world_time;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Fox Dragon scene demo
#[derive(Parser)]
#[command(
    version,
    about = "A small 3D scene demo: a WASD-driven character with a trailing camera."
)]
struct Cli {
    /// Path to the INI configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the character model path from the configuration file.
    #[arg(long, value_name = "PATH")]
    model: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Configuration ---------------
    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::warn!("Using default configuration: {}", e);
    }
    if let Some(model) = cli.model {
        config.player_model = model;
    }

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Fox Dragon")
        .build();
    rl.set_target_fps(config.target_fps);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(InputState::default());
    world.insert_non_send_resource(ModelStore::new());

    // The loader thread reads the model file; poll_asset_messages finishes
    // the load on this thread where the GL context lives.
    setup_asset_loader(
        &mut world,
        vec![AssetRequest::new(
            game::PLAYER_MODEL_KEY,
            config.player_model.clone(),
        )],
    );

    game::setup(&mut world, &config);
    world.insert_resource(config);

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.add_observer(observe_model_load);
    world.flush();

    // --------------- Schedule ---------------
    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(poll_asset_messages);
    update.add_systems(input_acceleration_controller.after(update_input_state));
    update.add_systems(movement.after(input_acceleration_controller));
    update.add_systems(camera_follow.after(movement));
    update.add_systems(render_system.after(camera_follow));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }

    shutdown_asset_loader(&mut world);
}
