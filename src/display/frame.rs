use displaydoc::Display;
use embassy_time::{Duration, block_for};
use log::trace;

use super::{DisplayAdapter, PIXEL_COUNT};
use crate::OutputDriver;
use crate::color::{Rgb, parse_hex, scale_color};
use crate::math8::brightness_level;

/// How long the cleanup flash stays lit
pub const DEFAULT_CLEANUP_INTERVAL: Duration = Duration::from_millis(50);

/// Errors raised by [`FrameDisplay`]
#[derive(Clone, Copy, PartialEq, Eq, Display, Debug)]
pub enum DisplayError<E> {
    /// Pixel {index} is outside of the strip.
    PixelOutOfRange { index: usize },
    /// The color is not a `RRGGBB` hex value.
    InvalidColor,
    /// The output driver failed to write the frame.
    Driver(E),
}

/// Frame-buffered display over an [`OutputDriver`]
///
/// `set` only touches the buffer; `flash`, `show` and `cleanup` write whole
/// frames to the driver.
pub struct FrameDisplay<D: OutputDriver> {
    driver: D,
    frame: [Rgb; PIXEL_COUNT],
    cleanup_interval: Duration,
}

impl<D: OutputDriver> FrameDisplay<D> {
    /// Create a display with a dark frame buffer
    pub fn new(driver: D) -> Self {
        Self::with_cleanup_interval(driver, DEFAULT_CLEANUP_INTERVAL)
    }

    pub fn with_cleanup_interval(driver: D, cleanup_interval: Duration) -> Self {
        Self {
            driver,
            frame: [Rgb::default(); PIXEL_COUNT],
            cleanup_interval,
        }
    }

    /// Buffered frame, as it will be written by the next `show`
    pub fn frame(&self) -> &[Rgb; PIXEL_COUNT] {
        &self.frame
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Release the output driver
    pub fn into_driver(self) -> D {
        self.driver
    }

    fn write(&mut self) -> Result<(), DisplayError<D::Error>> {
        self.driver.write(&self.frame).map_err(DisplayError::Driver)
    }
}

fn pixel_color<E>(color: &str, brightness: f32) -> Result<Rgb, DisplayError<E>> {
    let rgb = parse_hex(color).ok_or(DisplayError::InvalidColor)?;
    Ok(scale_color(rgb, brightness_level(brightness)))
}

fn check_index<E>(index: usize) -> Result<(), DisplayError<E>> {
    if index < PIXEL_COUNT {
        Ok(())
    } else {
        Err(DisplayError::PixelOutOfRange { index })
    }
}

impl<D: OutputDriver> DisplayAdapter for FrameDisplay<D>
where
    D::Error: core::fmt::Debug,
{
    type Error = DisplayError<D::Error>;

    fn set(&mut self, index: usize, color: &str, brightness: f32) -> Result<(), Self::Error> {
        check_index(index)?;
        self.frame[index] = pixel_color(color, brightness)?;
        trace!("pixel {index} set to {color}");
        Ok(())
    }

    fn flash(
        &mut self,
        index: usize,
        color: &str,
        brightness: f32,
        repeat: u8,
        interval: Duration,
    ) -> Result<(), Self::Error> {
        check_index(index)?;
        let lit = pixel_color(color, brightness)?;
        trace!("pixel {index} flashing {color} x{repeat}");
        for _ in 0..repeat {
            self.frame[index] = lit;
            self.write()?;
            block_for(interval);
            self.frame[index] = Rgb::default();
            self.write()?;
            block_for(interval);
        }
        self.frame[index] = Rgb::default();
        Ok(())
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        self.write()
    }

    fn cleanup(&mut self, color: &str, brightness: f32) -> Result<(), Self::Error> {
        let lit = pixel_color(color, brightness)?;
        self.frame = [lit; PIXEL_COUNT];
        self.write()?;
        block_for(self.cleanup_interval);
        self.frame = [Rgb::default(); PIXEL_COUNT];
        self.write()
    }
}
