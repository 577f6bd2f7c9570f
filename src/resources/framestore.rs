//! Frame set registry.
//!
//! Texture keys are the asset paths themselves; the [`Screen`] collaborator
//! loads and caches the images. This store only groups keys into named
//! [`FrameSet`]s so several entities can share one read-only sequence.
//!
//! [`Screen`]: crate::render::Screen

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

/// Shared, immutable sequence of texture keys.
pub type FrameSet = Arc<[Arc<str>]>;

/// Central registry of frame sets keyed by string IDs.
#[derive(Resource, Default)]
pub struct FrameStore {
    pub sets: FxHashMap<String, FrameSet>,
}

impl FrameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `count` numbered frames `"{dir}/0.png" .. "{dir}/{count-1}.png"`
    /// under `key` and return the shared set.
    pub fn insert_numbered(&mut self, key: impl Into<String>, dir: &str, count: usize) -> FrameSet {
        let set: FrameSet = (0..count)
            .map(|i| Arc::<str>::from(format!("{dir}/{i}.png")))
            .collect();
        self.sets.insert(key.into(), set.clone());
        set
    }

    pub fn get(&self, key: &str) -> Option<FrameSet> {
        self.sets.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_frames_are_shared() {
        let mut store = FrameStore::new();
        let set = store.insert_numbered("fireball", "artwork/spells/fireball", 4);
        assert_eq!(set.len(), 4);
        assert_eq!(&*set[3], "artwork/spells/fireball/3.png");
        let again = store.get("fireball").unwrap();
        assert!(Arc::ptr_eq(&set, &again));
        assert!(store.get("missing").is_none());
    }
}
