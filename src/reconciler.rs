//! Render pass
//!
//! Sweeps the registry in pixel order and turns pending transitions into display
//! calls. Deleted entries are removed during the sweep, so every later entry moves
//! one pixel down and may enter the visible window within the same pass.

use embassy_time::Instant;
use log::trace;

use crate::color::OFF;
use crate::config::ReconcilerConfig;
use crate::display::{DisplayAdapter, PIXEL_COUNT};
use crate::registry::ResourceRegistry;
use crate::resource::ResourceState;

/// What a single render pass did
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    /// Entries marked for removal by the staleness check
    pub evicted: usize,
    /// Flash cues played
    pub flashed: usize,
    /// Entries removed from the registry
    pub removed: usize,
    /// Entries that entered the visible window
    pub promoted: usize,
    /// Pixels lit at the end of the pass
    pub lit: usize,
}

impl RenderSummary {
    /// Check if the pass changed anything beyond refreshing pixels
    pub const fn has_transitions(&self) -> bool {
        self.flashed > 0 || self.removed > 0
    }
}

pub struct Reconciler {
    config: ReconcilerConfig,
}

impl Reconciler {
    pub const fn new(config: ReconcilerConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &ReconcilerConfig {
        &self.config
    }

    /// Instant before which unseen entries are stale, if eviction is enabled
    pub fn stale_cutoff(&self, now: Instant) -> Option<Instant> {
        let age = self.config.stale_after()?;
        now.checked_sub(age)
    }

    /// Bring the display in line with the registry
    ///
    /// Display failures abort the pass and are returned as is: a partly written
    /// frame cannot be repaired in place.
    pub fn render<D: DisplayAdapter>(
        &self,
        registry: &mut ResourceRegistry,
        display: &mut D,
        now: Instant,
    ) -> Result<RenderSummary, D::Error> {
        let mut summary = RenderSummary::default();
        if let Some(cutoff) = self.stale_cutoff(now) {
            summary.evicted = registry.evict_stale(cutoff);
        }

        let brightness = self.config.brightness;
        let flash = self.config.flash;
        let palette = &self.config.palette;

        let mut index = 0;
        while let Some(entry) = registry.at_mut(index) {
            let visible = index < PIXEL_COUNT;
            let state = entry.state;
            match state {
                ResourceState::Added | ResourceState::Updated => {
                    if visible {
                        let cue = if state == ResourceState::Added {
                            &palette.added
                        } else {
                            &palette.updated
                        };
                        trace!("pixel {index}: {} changed to {}", entry.name(), entry.color);
                        display.flash(index, cue, brightness, flash.repeat, flash.interval)?;
                        display.set(index, &entry.color, brightness)?;
                        summary.flashed += 1;
                    }
                    entry.state = ResourceState::Unchanged;
                    entry.visible = visible;
                    index += 1;
                }
                ResourceState::Deleted => {
                    if visible {
                        display.flash(
                            index,
                            &palette.removed,
                            brightness,
                            flash.repeat,
                            flash.interval,
                        )?;
                        summary.flashed += 1;
                    }
                    // The next entry shifts into this slot; re-read it without advancing.
                    let removed = registry.remove(index);
                    trace!("pixel {index}: {} removed", removed.name());
                    summary.removed += 1;
                }
                ResourceState::Unchanged => {
                    if visible {
                        if !entry.visible {
                            trace!("pixel {index}: {} promoted", entry.name());
                            display.flash(
                                index,
                                &palette.added,
                                brightness,
                                flash.repeat,
                                flash.interval,
                            )?;
                            summary.flashed += 1;
                            summary.promoted += 1;
                        }
                        display.set(index, &entry.color, brightness)?;
                    }
                    entry.visible = visible;
                    index += 1;
                }
            }
        }

        summary.lit = registry.len().min(PIXEL_COUNT);
        for index in summary.lit..PIXEL_COUNT {
            display.set(index, OFF, 0.0)?;
        }
        display.show()?;

        Ok(summary)
    }
}
