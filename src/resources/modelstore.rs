//! Loaded 3D model store.

use raylib::prelude::Model;
use rustc_hash::FxHashMap;

/// Store of loaded raylib models keyed by name.
///
/// Models own GPU resources, so the store must stay on the main thread
/// (insert it with `insert_non_send_resource`).
pub struct ModelStore {
    map: FxHashMap<String, Model>,
}

impl Default for ModelStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelStore {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Insert or replace the model stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, model: Model) {
        self.map.insert(key.into(), model);
    }

    pub fn get(&self, key: &str) -> Option<&Model> {
        self.map.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }
}
