//! Model load completion event and observer.
//!
//! The asset poll system triggers a [`ModelLoadEvent`] once per load attempt
//! after it has updated the matching [`ModelSlot`](crate::components::modelslot::ModelSlot)s.
//! The observer in this module logs the outcome. Failure is fire-and-forget:
//! the slot stays `Failed`, the scene keeps rendering without the model, and
//! movement for that entity never activates.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{error, info};

/// Fired after a model load attempt has been resolved on the main thread.
#[derive(Event, Debug, Clone)]
pub struct ModelLoadEvent {
    /// Model-store key the attempt was for.
    pub key: String,
    /// Whether the model is now in the store.
    pub success: bool,
}

/// Observer that logs model load outcomes.
pub fn observe_model_load(trigger: On<ModelLoadEvent>) {
    let event = trigger.event();
    if event.success {
        info!("Model '{}' loaded", event.key);
    } else {
        error!("Model '{}' failed to load; entity stays inert", event.key);
    }
}
