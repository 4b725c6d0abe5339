//! Reconciler configuration
//!
//! Values only: reading them from the environment or flags is up to the embedding
//! binary.

use alloc::string::{String, ToString};

use displaydoc::Display;
use embassy_time::Duration;

use crate::color::{BLUE, GREEN, RED};

/// Default brightness applied to every lit pixel
pub const DEFAULT_BRIGHTNESS: f32 = 0.2;

/// Entries unseen for this many resync periods are evicted.
pub const STALE_AFTER_PERIODS: u32 = 3;

/// Errors reported by [`ReconcilerConfig::validate`].
#[derive(Clone, Copy, PartialEq, Eq, Display, Debug)]
pub enum ConfigError {
    /// Brightness must be within the [0, 1] range.
    BrightnessOutOfRange,
    /// Resync period must be longer than zero.
    ZeroResyncPeriod,
    /// Resync period is too long to derive an eviction age from.
    ResyncPeriodTooLong,
}

/// Timings of the flash cue that precedes every pixel transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashTimings {
    /// How many times the pixel is toggled on and off
    pub repeat: u8,
    /// Delay between toggles
    pub interval: Duration,
}

impl Default for FlashTimings {
    fn default() -> Self {
        Self {
            repeat: 2,
            interval: Duration::from_millis(50),
        }
    }
}

/// Cue colors used by the render pass and the strip lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Flashed before a new entry is drawn, or when an entry enters the window
    pub added: String,
    /// Flashed before an entry is redrawn with a new color
    pub updated: String,
    /// Flashed on the pixel of a removed entry
    pub removed: String,
    /// Flashed over the whole strip on cleanup
    pub shutdown: String,
    /// Flashed over the whole strip by the startup greeting
    pub startup: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            added: GREEN.to_string(),
            updated: BLUE.to_string(),
            removed: RED.to_string(),
            shutdown: RED.to_string(),
            startup: BLUE.to_string(),
        }
    }
}

/// Configuration for the reconciler
#[derive(Debug, Clone, PartialEq)]
pub struct ReconcilerConfig {
    /// Brightness of every lit pixel, within `[0, 1]`
    pub brightness: f32,
    /// Resync period of the watches; enables stale entry eviction when set
    pub resync_period: Option<Duration>,
    pub flash: FlashTimings,
    pub palette: Palette,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            resync_period: None,
            flash: FlashTimings::default(),
            palette: Palette::default(),
        }
    }
}

impl ReconcilerConfig {
    /// Create a configuration with the given brightness and default cues
    pub fn with_brightness(brightness: f32) -> Self {
        Self {
            brightness,
            ..Self::default()
        }
    }

    /// Enable stale entry eviction based on the watch resync period
    #[must_use]
    pub fn with_resync_period(mut self, period: Duration) -> Self {
        self.resync_period = Some(period);
        self
    }

    /// Check that the values can drive a strip
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.brightness) {
            return Err(ConfigError::BrightnessOutOfRange);
        }
        if self.resync_period == Some(Duration::from_ticks(0)) {
            return Err(ConfigError::ZeroResyncPeriod);
        }
        if self.resync_period.is_some() && self.stale_after().is_none() {
            return Err(ConfigError::ResyncPeriodTooLong);
        }
        Ok(())
    }

    /// Age after which an unseen entry is considered stale.
    ///
    /// `None` when no resync period is set or the age does not fit in a
    /// [`Duration`]; eviction is disabled in both cases.
    pub fn stale_after(&self) -> Option<Duration> {
        self.resync_period
            .and_then(|period| period.checked_mul(STALE_AFTER_PERIODS))
    }
}
