//! Mock host display for testing.

use crate::controller::HostDisplay;
use crate::error::HostError;

/// A mock host display that records every call.
///
/// This allows testing code that depends on [`HostDisplay`] without a real
/// backlight device.
///
/// # Example
///
/// ```
/// use softlight_core::{LightController, MockDisplay};
///
/// let mut controller = LightController::new(MockDisplay::new());
/// controller.set_brightness(0.8);
/// assert_eq!(controller.host().last_brightness(), Some(0.8));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockDisplay {
    /// Every brightness value relayed to the host, in order.
    pub brightness_writes: Vec<f64>,
    /// Current keep-awake flag.
    pub keep_awake: bool,
}

impl MockDisplay {
    /// Create a mock with no recorded calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently relayed brightness, if any.
    pub fn last_brightness(&self) -> Option<f64> {
        self.brightness_writes.last().copied()
    }
}

impl HostDisplay for MockDisplay {
    fn set_brightness(&mut self, level: f64) -> Result<(), HostError> {
        self.brightness_writes.push(level);
        Ok(())
    }

    fn set_keep_awake(&mut self, enabled: bool) -> Result<(), HostError> {
        self.keep_awake = enabled;
        Ok(())
    }
}
