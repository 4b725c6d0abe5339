use core::sync::atomic::{AtomicBool, Ordering};

/// Stop request shared between the signal handler and the event loop
///
/// The event loop checks it between events, so a render pass that is already
/// running always completes.
#[derive(Debug, Default)]
pub struct StopSignal {
    stopped: AtomicBool,
}

impl StopSignal {
    pub const fn new() -> Self {
        Self {
            stopped: AtomicBool::new(false),
        }
    }

    /// Ask the event loop to stop after the current event
    pub fn request_stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    pub fn is_stop_requested(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }
}
