//! Linux sysfs backlight backend.

use crate::controller::HostDisplay;
use crate::error::HostError;
use crate::state::{MAX_BRIGHTNESS, MIN_BRIGHTNESS};

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

const SYSFS_BACKLIGHT_DIR: &str = "/sys/class/backlight";

/// A backlight device under `/sys/class/backlight`.
///
/// Relays the panel's `[0.1, 1.0]` brightness to the device's raw units.
/// Keep-awake is a no-op here: sysfs offers no idle inhibitor, and a
/// frontend continuously rendering keeps the session active anyway.
#[derive(Debug)]
pub struct SysfsBacklight {
    device: PathBuf,
    max_raw: u32,
}

impl SysfsBacklight {
    /// Use the first device found under `/sys/class/backlight`.
    ///
    /// # Errors
    ///
    /// - [`HostError::NoBacklight`] if no device directory exists
    /// - [`HostError::Parse`] if `max_brightness` is not an integer
    /// - [`HostError::Io`] if the class directory cannot be read
    pub fn discover() -> Result<Self, HostError> {
        Self::discover_in(Path::new(SYSFS_BACKLIGHT_DIR))
    }

    /// Like [`discover`](Self::discover), scanning a specific directory.
    pub fn discover_in(dir: &Path) -> Result<Self, HostError> {
        let device = fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .find(|path| path.join("max_brightness").is_file())
            .ok_or_else(|| HostError::NoBacklight(dir.display().to_string()))?;

        let max_raw = read_attr(&device.join("max_brightness"))?;
        info!(
            "using backlight device {} (max raw {})",
            device.display(),
            max_raw
        );
        Ok(Self { device, max_raw })
    }

    fn raw_for_level(&self, level: f64) -> u32 {
        let level = level.clamp(MIN_BRIGHTNESS, MAX_BRIGHTNESS);
        (level * f64::from(self.max_raw)).round() as u32
    }
}

fn read_attr(path: &Path) -> Result<u32, HostError> {
    let text = fs::read_to_string(path)?;
    text.trim().parse().map_err(|_| HostError::Parse {
        path: path.display().to_string(),
        value: text.trim().to_string(),
    })
}

impl HostDisplay for SysfsBacklight {
    fn set_brightness(&mut self, level: f64) -> Result<(), HostError> {
        let raw = self.raw_for_level(level);
        debug!("backlight {} <- {}", self.device.display(), raw);
        fs::write(self.device.join("brightness"), raw.to_string())?;
        Ok(())
    }

    fn set_keep_awake(&mut self, enabled: bool) -> Result<(), HostError> {
        debug!("keep-awake {} ignored by sysfs backend", enabled);
        Ok(())
    }
}
