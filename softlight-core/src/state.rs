//! Light state, gesture baseline and raw drag vector.

use crate::color::Rgb;
use crate::modes::LightMode;

/// Lowest brightness the panel will emit (never fully dark).
pub const MIN_BRIGHTNESS: f64 = 0.1;
/// Highest brightness the panel will emit.
pub const MAX_BRIGHTNESS: f64 = 1.0;
/// Warmest color-ratio value.
pub const MIN_COLOR_RATIO: f64 = -1.0;
/// Strongest (neutral white) color-ratio value.
pub const MAX_COLOR_RATIO: f64 = 1.0;

/// The light panel's output state.
///
/// Both fields are always inside their ranges; every mutation path goes
/// through [`LightState::clamped`].
/// Use [`LightController::state`](crate::LightController::state) to obtain
/// the current value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightState {
    /// Normalized display luminance, `[0.1, 1.0]`.
    pub brightness: f64,
    /// Signed blend parameter, `[-1.0, 1.0]`; negative is warmer.
    pub color_ratio: f64,
}

impl Default for LightState {
    /// 60% brightness, neutral white. The panel deliberately does not start
    /// at full brightness.
    fn default() -> Self {
        Self {
            brightness: 0.6,
            color_ratio: 0.0,
        }
    }
}

impl LightState {
    /// Build a state with both fields clamped to their ranges.
    pub fn clamped(brightness: f64, color_ratio: f64) -> Self {
        Self {
            brightness: brightness.clamp(MIN_BRIGHTNESS, MAX_BRIGHTNESS),
            color_ratio: color_ratio.clamp(MIN_COLOR_RATIO, MAX_COLOR_RATIO),
        }
    }

    /// Brightness as an integer percentage for the status line.
    pub fn brightness_percent(&self) -> u8 {
        (self.brightness * 100.0).round() as u8
    }

    /// The emitted color for the current ratio.
    pub fn color(&self) -> Rgb {
        Rgb::for_ratio(self.color_ratio)
    }

    /// The mode band the current ratio falls into.
    pub fn mode(&self) -> LightMode {
        LightMode::for_ratio(self.color_ratio)
    }

    /// The bottom status readout, e.g. `mode: neutral  brightness: 60%`.
    pub fn status_line(&self) -> String {
        format!(
            "mode: {}  brightness: {}%",
            self.mode(),
            self.brightness_percent()
        )
    }
}

/// Snapshot of [`LightState`] taken when a gesture begins.
///
/// Drag deltas are applied relative to this snapshot, so a new gesture never
/// jumps the output. Replaced at gesture end with the post-gesture state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureBaseline {
    /// Brightness when the gesture started.
    pub brightness: f64,
    /// Color ratio when the gesture started.
    pub color_ratio: f64,
}

impl From<LightState> for GestureBaseline {
    fn from(state: LightState) -> Self {
        Self {
            brightness: state.brightness,
            color_ratio: state.color_ratio,
        }
    }
}

/// Raw in-progress drag translation, in view units.
///
/// Kept for UI feedback only; the semantic state lives in [`LightState`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragVector {
    /// Horizontal translation since gesture start.
    pub x: f64,
    /// Vertical translation since gesture start.
    pub y: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_enforces_ranges() {
        let state = LightState::clamped(5.0, -3.0);
        assert_eq!(state.brightness, MAX_BRIGHTNESS);
        assert_eq!(state.color_ratio, MIN_COLOR_RATIO);

        let state = LightState::clamped(0.0, 3.0);
        assert_eq!(state.brightness, MIN_BRIGHTNESS);
        assert_eq!(state.color_ratio, MAX_COLOR_RATIO);

        let state = LightState::clamped(0.5, 0.25);
        assert_eq!(state.brightness, 0.5);
        assert_eq!(state.color_ratio, 0.25);
    }

    #[test]
    fn default_state_is_mid_brightness_neutral() {
        let state = LightState::default();
        assert_eq!(state.brightness, 0.6);
        assert_eq!(state.color_ratio, 0.0);
        assert_eq!(state.brightness_percent(), 60);
    }

    #[test]
    fn status_line_formats_mode_and_percent() {
        let state = LightState::default();
        assert_eq!(state.status_line(), "mode: neutral  brightness: 60%");
    }

    #[test]
    fn baseline_snapshots_state() {
        let state = LightState::clamped(0.8, -0.4);
        let baseline = GestureBaseline::from(state);
        assert_eq!(baseline.brightness, 0.8);
        assert_eq!(baseline.color_ratio, -0.4);
    }
}
