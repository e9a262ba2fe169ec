//! Loadable model handle for an entity.
//!
//! Models arrive asynchronously from the asset loader thread. Until the slot
//! is `Ready` the movement system keeps integrating velocity but never
//! applies it to the entity's position. A failed load leaves the slot in
//! `Failed` permanently and the entity stays inert for the session.

use bevy_ecs::prelude::Component;

/// Load state of the model backing an entity.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub enum ModelSlot {
    /// Waiting for the asset loader to deliver the model.
    Pending { key: String },
    /// The model is in the store under `key`; the entity is controllable.
    Ready { key: String },
    /// The load failed. Never retried.
    Failed { key: String },
}

impl ModelSlot {
    /// Create a slot waiting for the model stored under `key`.
    pub fn pending(key: impl Into<String>) -> Self {
        ModelSlot::Pending { key: key.into() }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ModelSlot::Ready { .. })
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ModelSlot::Pending { .. })
    }

    /// The model-store key this slot refers to, in any state.
    pub fn key(&self) -> &str {
        match self {
            ModelSlot::Pending { key } | ModelSlot::Ready { key } | ModelSlot::Failed { key } => {
                key
            }
        }
    }

    /// Transition to `Ready`, keeping the key.
    pub fn mark_ready(&mut self) {
        *self = ModelSlot::Ready {
            key: self.key().to_string(),
        };
    }

    /// Transition to `Failed`, keeping the key.
    pub fn mark_failed(&mut self) {
        *self = ModelSlot::Failed {
            key: self.key().to_string(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_slot_reports_key() {
        let slot = ModelSlot::pending("player");
        assert!(slot.is_pending());
        assert!(!slot.is_ready());
        assert_eq!(slot.key(), "player");
    }

    #[test]
    fn test_mark_ready_keeps_key() {
        let mut slot = ModelSlot::pending("player");
        slot.mark_ready();
        assert!(slot.is_ready());
        assert_eq!(slot.key(), "player");
    }

    #[test]
    fn test_mark_failed_keeps_key() {
        let mut slot = ModelSlot::pending("player");
        slot.mark_failed();
        assert!(!slot.is_ready());
        assert!(!slot.is_pending());
        assert_eq!(slot.key(), "player");
    }
}
