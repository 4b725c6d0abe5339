//! Notifications delivered by the watches
//!
//! Everything kind specific (how a pod or a node is keyed and which color it
//! shows) lives behind [`ResourceKind`], so one [`WatchHandler`] serves every
//! watched kind and feeds the same controller.

use alloc::string::String;

use log::debug;

use crate::channel::{EventSender, TrySendError};

/// Name-keyed change notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceEvent {
    Add { name: String, color: String },
    Update { name: String, color: String },
    Delete { name: String },
}

impl ResourceEvent {
    pub fn name(&self) -> &str {
        match self {
            Self::Add { name, .. } | Self::Update { name, .. } | Self::Delete { name } => name,
        }
    }
}

/// Kind-specific part of a watch
pub trait ResourceKind {
    /// Object delivered by the watch
    type Object;

    /// Human readable kind, used in logs
    fn kind(&self) -> &'static str;

    /// Unique key of the object
    fn key(&self, object: &Self::Object) -> String;

    /// Opaque color the object should be shown with
    fn color(&self, object: &Self::Object) -> String;
}

/// Turns typed watch callbacks into [`ResourceEvent`]s
#[derive(Debug, Clone)]
pub struct WatchHandler<K> {
    kind: K,
}

impl<K: ResourceKind> WatchHandler<K> {
    pub const fn new(kind: K) -> Self {
        Self { kind }
    }

    pub const fn kind(&self) -> &K {
        &self.kind
    }

    pub fn on_add(&self, object: &K::Object) -> ResourceEvent {
        ResourceEvent::Add {
            name: self.kind.key(object),
            color: self.kind.color(object),
        }
    }

    /// Only the new state of the object matters.
    pub fn on_update(&self, _old: &K::Object, new: &K::Object) -> ResourceEvent {
        ResourceEvent::Update {
            name: self.kind.key(new),
            color: self.kind.color(new),
        }
    }

    pub fn on_delete(&self, object: &K::Object) -> ResourceEvent {
        ResourceEvent::Delete {
            name: self.kind.key(object),
        }
    }

    /// Queue an event for the consumer, handing it back if the queue is full
    pub fn forward<const SIZE: usize>(
        &self,
        sender: &EventSender<'_, SIZE>,
        event: ResourceEvent,
    ) -> Result<(), TrySendError> {
        debug!("{} event for {}", self.kind.kind(), event.name());
        sender.try_send(event)
    }
}
