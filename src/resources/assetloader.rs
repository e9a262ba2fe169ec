//! ECS resources that bridge the main thread with the asset loader thread.
//!
//! Use [`setup_asset_loader`] once during initialization to spawn the loader
//! thread and insert the [`AssetBridge`] resource. The thread reads each
//! requested file from disk and reports over a channel; the main-thread
//! system [`poll_asset_messages`](crate::systems::assetloader::poll_asset_messages)
//! drains the channel and performs the GPU-side load, which needs the GL
//! context. Call [`shutdown_asset_loader`] during teardown to join the
//! thread.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::debug;
use std::path::PathBuf;

/// A file the loader thread should fetch.
#[derive(Debug, Clone)]
pub struct AssetRequest {
    /// Store key the loaded model will live under.
    pub key: String,
    /// Path of the model file on disk.
    pub path: PathBuf,
}

impl AssetRequest {
    pub fn new(key: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            key: key.into(),
            path: path.into(),
        }
    }
}

/// Result of one load attempt (loader thread -> ECS).
#[derive(Debug, Clone)]
pub enum AssetMessage {
    /// The file was read successfully; the main thread still has to upload
    /// it to the GPU.
    ModelRead { key: String, path: PathBuf },
    /// The file could not be read. Reported once, never retried.
    ModelFailed { key: String, error: String },
}

/// Shared bridge between the ECS world and the asset loader thread.
#[derive(Resource)]
pub struct AssetBridge {
    /// Receiver for [`AssetMessage`] results (loader thread -> ECS).
    pub rx_msg: Receiver<AssetMessage>,
    /// Join handle for the background loader thread.
    pub handle: std::thread::JoinHandle<()>,
}

/// Spawn the loader thread and register the bridge resource.
pub fn setup_asset_loader(world: &mut World, requests: Vec<AssetRequest>) {
    let (tx_msg, rx_msg) = unbounded::<AssetMessage>();

    let handle = std::thread::spawn(move || loader_thread(requests, tx_msg));

    world.insert_resource(AssetBridge { rx_msg, handle });
}

/// Join the loader thread and remove the bridge resource.
///
/// The thread exits on its own once every request has been answered, so the
/// join does not block indefinitely.
pub fn shutdown_asset_loader(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<AssetBridge>() {
        let _ = bridge.handle.join();
    }
}

fn loader_thread(requests: Vec<AssetRequest>, tx_msg: Sender<AssetMessage>) {
    for request in requests {
        debug!("reading asset {:?} as '{}'", request.path, request.key);
        let message = match std::fs::read(&request.path) {
            Ok(bytes) if bytes.is_empty() => AssetMessage::ModelFailed {
                key: request.key,
                error: format!("{}: file is empty", request.path.display()),
            },
            Ok(_) => AssetMessage::ModelRead {
                key: request.key,
                path: request.path,
            },
            Err(e) => AssetMessage::ModelFailed {
                key: request.key,
                error: format!("{}: {}", request.path.display(), e),
            },
        };
        if tx_msg.send(message).is_err() {
            // Receiver dropped; the world is shutting down.
            return;
        }
    }
}
