#![no_std]

extern crate alloc;

pub mod channel;
pub mod color;
pub mod config;
pub mod controller;
pub mod display;
pub mod event;
pub mod math8;
pub mod reconciler;
pub mod registry;
pub mod resource;
pub mod signal;

pub use config::{ConfigError, FlashTimings, Palette, ReconcilerConfig};
pub use controller::Controller;
pub use display::{
    DisplayAdapter, DisplayCall, DisplayError, FrameDisplay, PIXEL_COUNT, RecordingDisplay,
};
pub use channel::{EventChannel, EventReceiver, EventSender};
pub use event::{ResourceEvent, ResourceKind, WatchHandler};
pub use reconciler::{Reconciler, RenderSummary};
pub use registry::ResourceRegistry;
pub use resource::{Resource, ResourceState};
pub use signal::StopSignal;

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// [`FrameDisplay`] is generic over this trait.
pub trait OutputDriver {
    type Error;

    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error>;
}
