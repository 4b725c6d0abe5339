//! Event handling and strip lifecycle
//!
//! Every notification is applied synchronously: the registry is mutated and, if
//! it reports a change, the full render pass runs (blocking flashes included)
//! before the next notification is looked at. Flash order therefore always
//! matches arrival order.

use embassy_time::{Duration, Instant, block_for};
use log::{debug, info, trace, warn};

use crate::color::OFF;
use crate::config::{ConfigError, ReconcilerConfig};
use crate::display::{DisplayAdapter, PIXEL_COUNT};
use crate::channel::EventReceiver;
use crate::event::ResourceEvent;
use crate::reconciler::{Reconciler, RenderSummary};
use crate::registry::ResourceRegistry;
use crate::signal::StopSignal;

/// Default pause of the event loop when no events are pending
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Owns the registry and the strip; the single consumer of notifications
pub struct Controller<D: DisplayAdapter> {
    registry: ResourceRegistry,
    reconciler: Reconciler,
    display: D,
}

impl<D: DisplayAdapter> Controller<D> {
    pub fn new(display: D, config: ReconcilerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            registry: ResourceRegistry::new(),
            reconciler: Reconciler::new(config),
            display,
        })
    }

    pub fn add(&mut self, name: &str, color: &str, now: Instant) -> Result<bool, D::Error> {
        let changed = self.registry.add(name, color, now);
        self.render_if(changed, now)
    }

    pub fn update(&mut self, name: &str, color: &str, now: Instant) -> Result<bool, D::Error> {
        let changed = self.registry.update(name, color, now);
        self.render_if(changed, now)
    }

    pub fn delete(&mut self, name: &str, now: Instant) -> Result<bool, D::Error> {
        let changed = self.registry.delete(name);
        self.render_if(changed, now)
    }

    /// Apply a single notification
    ///
    /// Returns whether the registry changed.
    pub fn handle(&mut self, event: &ResourceEvent, now: Instant) -> Result<bool, D::Error> {
        let (changed, verb) = match event {
            ResourceEvent::Add { name, color } => (self.add(name, color, now)?, "added"),
            ResourceEvent::Update { name, color } => (self.update(name, color, now)?, "updated"),
            ResourceEvent::Delete { name } => (self.delete(name, now)?, "deleted"),
        };
        if changed {
            info!("{} {verb} ({} tracked)", event.name(), self.registry.len());
        }
        Ok(changed)
    }

    /// Apply every queued notification in arrival order
    ///
    /// Returns the number of notifications applied.
    pub fn process_pending<const SIZE: usize>(
        &mut self,
        events: &EventReceiver<'_, SIZE>,
        now: Instant,
    ) -> Result<usize, D::Error> {
        let mut processed = 0;
        while let Ok(event) = events.try_receive() {
            self.handle(&event, now)?;
            processed += 1;
        }
        Ok(processed)
    }

    /// Run a render pass regardless of pending changes
    pub fn render(&mut self, now: Instant) -> Result<RenderSummary, D::Error> {
        let summary = self
            .reconciler
            .render(&mut self.registry, &mut self.display, now)?;
        if summary.has_transitions() {
            debug!("render pass: {summary:?}, {} tracked", self.registry.len());
        } else {
            trace!("refresh pass, {} tracked", self.registry.len());
        }
        Ok(summary)
    }

    /// Render only if some entry went stale since it was last seen
    pub fn sweep(&mut self, now: Instant) -> Result<Option<RenderSummary>, D::Error> {
        let Some(cutoff) = self.reconciler.stale_cutoff(now) else {
            return Ok(None);
        };
        if !self.registry.has_stale(cutoff) {
            return Ok(None);
        }
        self.render(now).map(Some)
    }

    /// Flash every pixel once with the startup color and leave the strip dark
    pub fn greet(&mut self) -> Result<(), D::Error> {
        let config = self.reconciler.config();
        for index in 0..PIXEL_COUNT {
            self.display.flash(
                index,
                &config.palette.startup,
                config.brightness,
                1,
                config.flash.interval,
            )?;
        }
        for index in 0..PIXEL_COUNT {
            self.display.set(index, OFF, 0.0)?;
        }
        self.display.show()
    }

    /// Consume queued notifications until `stop` is requested, then clean up
    ///
    /// The stop request is checked between notifications only, so an in-flight
    /// render pass always completes. Returns the display after cleanup.
    pub fn run<const SIZE: usize>(
        mut self,
        events: &EventReceiver<'_, SIZE>,
        stop: &StopSignal,
        poll_interval: Duration,
    ) -> Result<D, D::Error> {
        info!("Starting the Blinkt controller");
        while !stop.is_stop_requested() {
            let now = Instant::now();
            if let Ok(event) = events.try_receive() {
                self.handle(&event, now)?;
            } else {
                self.sweep(now)?;
                block_for(poll_interval);
            }
        }
        let rejected = events.rejected();
        if rejected > 0 {
            warn!("{rejected} events were rejected by the full queue");
        }
        self.shutdown()
    }

    /// Play the cleanup cue and release the display
    ///
    /// Consuming the controller guarantees cleanup happens once and nothing
    /// renders afterwards.
    pub fn shutdown(mut self) -> Result<D, D::Error> {
        info!("Stopping the Blinkt controller");
        let config = self.reconciler.config();
        self.display.cleanup(&config.palette.shutdown, config.brightness)?;
        Ok(self.display)
    }

    pub const fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    pub const fn config(&self) -> &ReconcilerConfig {
        self.reconciler.config()
    }

    pub const fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    fn render_if(&mut self, changed: bool, now: Instant) -> Result<bool, D::Error> {
        if changed {
            self.render(now)?;
        }
        Ok(changed)
    }
}
