//! Ordered, name-keyed store of tracked resources
//!
//! Arrival order is the pixel order: index 0 is the longest tracked entry that is
//! still present. Mutators only mark transitions; entries are physically removed
//! by the render pass that flashes their removal.

use alloc::{string::ToString, vec::Vec};

use embassy_time::Instant;
use log::debug;

use crate::resource::{Resource, ResourceState};

#[derive(Debug, Default, Clone)]
pub struct ResourceRegistry {
    entries: Vec<Resource>,
}

impl ResourceRegistry {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Start tracking `name`, or update it in place if it is already tracked
    ///
    /// Always returns `true`: a render pass is warranted either way.
    pub fn add(&mut self, name: &str, color: &str, now: Instant) -> bool {
        if self.position(name).is_some() {
            self.update(name, color, now);
            if let Some(entry) = self.get_mut(name)
                && entry.state == ResourceState::Deleted
            {
                // Re-added before the removal was rendered
                entry.state = ResourceState::Updated;
            }
            return true;
        }
        self.entries
            .push(Resource::new(name.to_string(), color.to_string(), now));
        debug!("{name} added ({} tracked)", self.entries.len());
        true
    }

    /// Change the color of a tracked entry
    ///
    /// Returns `false` when `name` is unknown or the color is unchanged. Unknown
    /// names are never tracked implicitly.
    pub fn update(&mut self, name: &str, color: &str, now: Instant) -> bool {
        let Some(entry) = self.get_mut(name) else {
            debug!("{name} not found, update ignored");
            return false;
        };
        entry.last_seen = Some(now);
        if entry.color == color {
            return false;
        }
        entry.color = color.to_string();
        entry.state = ResourceState::Updated;
        debug!("{name} updated to {color}");
        true
    }

    /// Mark a tracked entry for removal
    pub fn delete(&mut self, name: &str) -> bool {
        let Some(entry) = self.get_mut(name) else {
            debug!("{name} not found, delete ignored");
            return false;
        };
        entry.state = ResourceState::Deleted;
        debug!("{name} marked for removal");
        true
    }

    /// Mark every entry last seen before `cutoff` for removal
    ///
    /// Returns the number of entries that were marked.
    pub fn evict_stale(&mut self, cutoff: Instant) -> usize {
        let mut evicted = 0;
        for entry in &mut self.entries {
            if entry.state != ResourceState::Deleted && entry.is_stale(cutoff) {
                debug!("{} is stale, evicting", entry.name());
                entry.state = ResourceState::Deleted;
                evicted += 1;
            }
        }
        evicted
    }

    /// Check if any entry was last seen before `cutoff`
    pub fn has_stale(&self, cutoff: Instant) -> bool {
        self.entries.iter().any(|entry| entry.is_stale(cutoff))
    }

    pub fn get(&self, name: &str) -> Option<&Resource> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name() == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in pixel order
    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.entries.iter()
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Resource> {
        self.entries.iter_mut().find(|entry| entry.name() == name)
    }

    pub(crate) fn at_mut(&mut self, index: usize) -> Option<&mut Resource> {
        self.entries.get_mut(index)
    }

    pub(crate) fn remove(&mut self, index: usize) -> Resource {
        self.entries.remove(index)
    }
}
