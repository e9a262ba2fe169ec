//! Main-thread side of the asset loader bridge.
//!
//! The loader thread only reads files from disk; raylib models own GPU state
//! and must be created where the GL context lives. This system drains the
//! bridge channel, performs the actual model load, flips every
//! [`ModelSlot`](crate::components::modelslot::ModelSlot) waiting on the
//! key, and triggers a [`ModelLoadEvent`].

use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::*;

use crate::components::modelslot::ModelSlot;
use crate::events::modelload::ModelLoadEvent;
use crate::resources::assetloader::{AssetBridge, AssetMessage};
use crate::resources::modelstore::ModelStore;

/// Drain loader messages and finish model loads on the main thread.
pub fn poll_asset_messages(
    bridge: Option<Res<AssetBridge>>,
    mut rl: NonSendMut<RaylibHandle>,
    thread: NonSend<RaylibThread>,
    mut store: NonSendMut<ModelStore>,
    mut slots: Query<&mut ModelSlot>,
    mut commands: Commands,
) {
    let Some(bridge) = bridge else {
        return;
    };

    while let Ok(message) = bridge.rx_msg.try_recv() {
        match message {
            AssetMessage::ModelRead { key, path } => {
                match rl.load_model(&thread, &path.to_string_lossy()) {
                    Ok(model) => {
                        debug!("model '{}' uploaded from {:?}", key, path);
                        store.insert(key.clone(), model);
                        resolve_slots(&mut slots, &key, true);
                        commands.trigger(ModelLoadEvent { key, success: true });
                    }
                    Err(error) => {
                        debug!("raylib rejected model '{}': {}", key, error);
                        resolve_slots(&mut slots, &key, false);
                        commands.trigger(ModelLoadEvent {
                            key,
                            success: false,
                        });
                    }
                }
            }
            AssetMessage::ModelFailed { key, error } => {
                debug!("loader thread failed on '{}': {}", key, error);
                resolve_slots(&mut slots, &key, false);
                commands.trigger(ModelLoadEvent {
                    key,
                    success: false,
                });
            }
        }
    }
}

/// Flip every pending slot waiting for `key`. Slots already resolved are
/// left alone; the load happens at most once per key.
fn resolve_slots(slots: &mut Query<&mut ModelSlot>, key: &str, success: bool) {
    for mut slot in slots.iter_mut() {
        if slot.key() == key && slot.is_pending() {
            if success {
                slot.mark_ready();
            } else {
                slot.mark_failed();
            }
        }
    }
}
