//! Bounded event queue shared by several watches.
//!
//! Watches for different resource kinds push into the same queue; a single
//! consumer drains it, so at most one render pass touches the strip at a time.
//! The queue also counts the events it had to turn away, so the consumer can
//! report lost notifications when it stops.

use core::cell::RefCell;

use critical_section::Mutex;
use displaydoc::Display;
use heapless::Deque;
use log::warn;

use crate::event::ResourceEvent;

/// The queue is full; the rejected event is handed back.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct TrySendError(pub ResourceEvent);

/// No event is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub struct TryReceiveError;

struct Pending<const SIZE: usize> {
    events: Deque<ResourceEvent, SIZE>,
    rejected: usize,
}

/// Event queue guarded by a critical section
pub struct EventChannel<const SIZE: usize> {
    pending: Mutex<RefCell<Pending<SIZE>>>,
}

impl<const SIZE: usize> EventChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(RefCell::new(Pending {
                events: Deque::new(),
                rejected: 0,
            })),
        }
    }

    /// Handle for a watch; every watch gets its own copy.
    pub const fn sender(&self) -> EventSender<'_, SIZE> {
        EventSender { channel: self }
    }

    /// Handle for the single consumer.
    pub const fn receiver(&self) -> EventReceiver<'_, SIZE> {
        EventReceiver { channel: self }
    }

    /// Queue an event behind everything already pending.
    pub fn try_send(&self, event: ResourceEvent) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut pending = self.pending.borrow(cs).borrow_mut();
            pending.events.push_back(event).map_err(|event| {
                pending.rejected += 1;
                warn!(
                    "event for {} rejected, {SIZE} events already pending",
                    event.name()
                );
                TrySendError(event)
            })
        })
    }

    /// Take the oldest pending event.
    pub fn try_receive(&self) -> Result<ResourceEvent, TryReceiveError> {
        critical_section::with(|cs| {
            let mut pending = self.pending.borrow(cs).borrow_mut();
            pending.events.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.pending.borrow(cs).borrow().events.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of events turned away because the queue was full.
    pub fn rejected(&self) -> usize {
        critical_section::with(|cs| self.pending.borrow(cs).borrow().rejected)
    }
}

impl<const SIZE: usize> Default for EventChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A watch's handle on an [`EventChannel`].
#[derive(Clone, Copy)]
pub struct EventSender<'a, const SIZE: usize> {
    channel: &'a EventChannel<SIZE>,
}

impl<const SIZE: usize> EventSender<'_, SIZE> {
    pub fn try_send(&self, event: ResourceEvent) -> Result<(), TrySendError> {
        self.channel.try_send(event)
    }
}

/// The consumer's handle on an [`EventChannel`].
#[derive(Clone, Copy)]
pub struct EventReceiver<'a, const SIZE: usize> {
    channel: &'a EventChannel<SIZE>,
}

impl<const SIZE: usize> EventReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Result<ResourceEvent, TryReceiveError> {
        self.channel.try_receive()
    }

    pub fn rejected(&self) -> usize {
        self.channel.rejected()
    }
}
