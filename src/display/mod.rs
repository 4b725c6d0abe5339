//! Display capability driven by the render pass
//!
//! The reconciler talks to the strip only through [`DisplayAdapter`]:
//! [`FrameDisplay`] drives real pixels through an [`OutputDriver`](crate::OutputDriver),
//! [`RecordingDisplay`] keeps the call sequence for dry runs and tests.

mod frame;
mod recording;

use embassy_time::Duration;

pub use frame::{DEFAULT_CLEANUP_INTERVAL, DisplayError, FrameDisplay};
pub use recording::{DisplayCall, RecordingDisplay};

/// Number of addressable pixels on the strip
pub const PIXEL_COUNT: usize = 8;

/// Addressable strip of [`PIXEL_COUNT`] pixels
///
/// Colors are opaque strings handed over untouched from the event source; only the
/// adapter gives them meaning.
pub trait DisplayAdapter {
    type Error: core::fmt::Debug;

    /// Buffer a pixel value without flushing it to the hardware
    fn set(&mut self, index: usize, color: &str, brightness: f32) -> Result<(), Self::Error>;

    /// Toggle a pixel on and off `repeat` times, `interval` apart, leaving it off
    ///
    /// Blocks for the whole animation. The caller sets the final value afterwards.
    fn flash(
        &mut self,
        index: usize,
        color: &str,
        brightness: f32,
        repeat: u8,
        interval: Duration,
    ) -> Result<(), Self::Error>;

    /// Flush the buffered frame to the hardware
    fn show(&mut self) -> Result<(), Self::Error>;

    /// Flash every pixel once with `color` and power the strip off
    fn cleanup(&mut self, color: &str, brightness: f32) -> Result<(), Self::Error>;
}
