use alloc::string::String;

use embassy_time::Instant;

/// Pending transition of a tracked resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceState {
    /// Tracked for the first time, not drawn yet
    Added,
    /// Color changed since the last render pass
    Updated,
    /// Gone from the cluster, removed by the next render pass
    Deleted,
    /// Drawn and up to date
    Unchanged,
}

/// A named entity mirrored onto the strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    name: String,
    pub(crate) color: String,
    pub(crate) state: ResourceState,
    pub(crate) last_seen: Option<Instant>,
    /// Whether the last render pass drew this entry on a pixel
    pub(crate) visible: bool,
}

impl Resource {
    pub(crate) fn new(name: String, color: String, now: Instant) -> Self {
        Self {
            name,
            color,
            state: ResourceState::Added,
            last_seen: Some(now),
            visible: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub const fn state(&self) -> ResourceState {
        self.state
    }

    pub const fn last_seen(&self) -> Option<Instant> {
        self.last_seen
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Check if the entry was last seen before `cutoff`
    pub fn is_stale(&self, cutoff: Instant) -> bool {
        self.last_seen.is_some_and(|seen| seen < cutoff)
    }
}
