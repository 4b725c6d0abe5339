use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::convert::Infallible;

use embassy_time::Duration;

use super::DisplayAdapter;

/// A single call received by a [`RecordingDisplay`]
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCall {
    Set {
        index: usize,
        color: String,
        brightness: f32,
    },
    Flash {
        index: usize,
        color: String,
        brightness: f32,
        repeat: u8,
        interval: Duration,
    },
    Show,
    Cleanup {
        color: String,
        brightness: f32,
    },
}

impl DisplayCall {
    pub const fn is_flash(&self) -> bool {
        matches!(self, Self::Flash { .. })
    }

    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set { .. })
    }
}

/// Display that records every call instead of driving pixels
#[derive(Debug, Default, Clone)]
pub struct RecordingDisplay {
    calls: Vec<DisplayCall>,
}

impl RecordingDisplay {
    pub const fn new() -> Self {
        Self { calls: Vec::new() }
    }

    /// All calls received so far, in order
    pub fn calls(&self) -> &[DisplayCall] {
        &self.calls
    }

    /// Drain the recorded calls
    pub fn take_calls(&mut self) -> Vec<DisplayCall> {
        core::mem::take(&mut self.calls)
    }

    pub fn flash_count(&self) -> usize {
        self.calls.iter().filter(|call| call.is_flash()).count()
    }

    pub fn cleanup_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DisplayCall::Cleanup { .. }))
            .count()
    }
}

impl DisplayAdapter for RecordingDisplay {
    type Error = Infallible;

    fn set(&mut self, index: usize, color: &str, brightness: f32) -> Result<(), Self::Error> {
        self.calls.push(DisplayCall::Set {
            index,
            color: color.to_string(),
            brightness,
        });
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
        self.calls.push(DisplayCall::Flash {
            index,
            color: color.to_string(),
            brightness,
            repeat,
            interval,
        });
        Ok(())
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        self.calls.push(DisplayCall::Show);
        Ok(())
    }

    fn cleanup(&mut self, color: &str, brightness: f32) -> Result<(), Self::Error> {
        self.calls.push(DisplayCall::Cleanup {
            color: color.to_string(),
            brightness,
        });
        Ok(())
    }
}
