//! Core logic for a screen soft-light panel.
//!
//! The display itself becomes an adjustable light source: drag vertically to
//! change brightness, drag horizontally to blend the emitted color between
//! neutral white and a warm tone. A transient instructional overlay
//! auto-hides after three seconds and toggles on tap.
//!
//! This crate holds all of the state and arithmetic; it knows nothing about
//! any UI framework. A frontend feeds gesture translations in, polls the
//! overlay deadline, and renders the derived color, mode label and
//! brightness percentage. Host-specific output (a real backlight, a
//! keep-awake inhibit) sits behind the [`HostDisplay`] trait.
//!
//! # Example
//!
//! ```
//! use softlight_core::{LightController, LightMode, MockDisplay};
//!
//! let mut controller = LightController::new(MockDisplay::new());
//!
//! // Drag: half the view width to the right, half the height down.
//! controller.begin_gesture();
//! controller.update_gesture(400.0, 300.0, 800.0, 600.0);
//! controller.end_gesture();
//!
//! let state = controller.state();
//! assert_eq!(state.color_ratio, 1.0);
//! assert_eq!(state.mode(), LightMode::MaxStrong);
//!
//! // Brightness went down and was relayed to the host.
//! assert_eq!(controller.host().last_brightness(), Some(state.brightness));
//! ```
//!
//! # Testing
//!
//! Use [`MockDisplay`] to test code that depends on [`HostDisplay`] without
//! a real device:
//!
//! ```
//! use softlight_core::{LightController, MockDisplay};
//!
//! let mut controller = LightController::new(MockDisplay::new());
//! controller.set_brightness(0.75);
//! assert_eq!(controller.host().last_brightness(), Some(0.75));
//! ```

#![warn(missing_docs)]

#[cfg(target_os = "linux")]
mod backlight;
mod color;
mod controller;
mod error;
mod mock;
mod modes;
mod overlay;
mod state;

// Re-export public API
#[cfg(target_os = "linux")]
pub use backlight::SysfsBacklight;
pub use color::Rgb;
pub use controller::{
    BRIGHTNESS_GAIN, COLOR_RATIO_GAIN, HostDisplay, LightChange, LightController, NoopDisplay,
};
pub use error::HostError;
pub use mock::MockDisplay;
pub use modes::LightMode;
pub use overlay::{AUTO_HIDE_DELAY, Overlay};
pub use state::{
    DragVector, GestureBaseline, LightState, MAX_BRIGHTNESS, MAX_COLOR_RATIO, MIN_BRIGHTNESS,
    MIN_COLOR_RATIO,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    #[test]
    fn vertical_drag_half_height_saturates_brightness() {
        let mut controller = LightController::new(MockDisplay::new());
        controller.begin_gesture();
        controller.update_gesture(0.0, -300.0, 800.0, 600.0);

        // 0.6 + 0.5 * 1.2 = 1.2, clamped to 1.0.
        assert_eq!(controller.state().brightness, 1.0);
        assert_eq!(controller.state().color_ratio, 0.0);
    }

    #[test]
    fn horizontal_drag_half_width_saturates_ratio() {
        let mut controller = LightController::new(MockDisplay::new());
        controller.begin_gesture();
        controller.update_gesture(400.0, 0.0, 800.0, 600.0);

        let state = controller.state();
        assert_eq!(state.color_ratio, 1.0);
        assert_eq!(state.color(), Rgb::WHITE);
        assert_eq!(state.mode().label(), "max strong light");
    }

    #[test]
    fn baseline_round_trip_is_identity() {
        let mut controller = LightController::new(MockDisplay::new());
        controller.begin_gesture();
        controller.update_gesture(120.0, -80.0, 800.0, 600.0);
        controller.end_gesture();
        let settled = controller.state();

        controller.begin_gesture();
        controller.update_gesture(0.0, 0.0, 800.0, 600.0);
        assert_eq!(controller.state(), settled);
    }

    #[test]
    fn updates_are_relative_to_the_baseline_not_path_dependent() {
        let mut controller = LightController::new(MockDisplay::new());
        controller.begin_gesture();
        controller.update_gesture(50.0, -40.0, 800.0, 600.0);
        controller.update_gesture(200.0, -150.0, 800.0, 600.0);
        let direct = controller.state();

        let mut replay = LightController::new(MockDisplay::new());
        replay.begin_gesture();
        replay.update_gesture(200.0, -150.0, 800.0, 600.0);
        assert_eq!(replay.state(), direct);
    }

    #[test]
    fn zero_view_dimensions_skip_the_axis() {
        let mut controller = LightController::new(MockDisplay::new());
        let before = controller.state();

        controller.begin_gesture();
        controller.update_gesture(500.0, -500.0, 0.0, 0.0);
        assert_eq!(controller.state(), before);

        // Only the width is known: brightness untouched, ratio moves.
        controller.update_gesture(400.0, -500.0, 800.0, 0.0);
        assert_eq!(controller.state().brightness, before.brightness);
        assert_eq!(controller.state().color_ratio, 1.0);
    }

    #[test]
    fn brightness_changes_are_relayed_to_the_host() {
        let mut controller = LightController::new(MockDisplay::new());
        controller.begin_gesture();
        controller.update_gesture(0.0, -60.0, 800.0, 600.0);
        controller.end_gesture();

        let brightness = controller.state().brightness;
        assert_eq!(controller.host().last_brightness(), Some(brightness));
    }

    #[test]
    fn activate_pushes_brightness_and_keep_awake() {
        let mut controller = LightController::new(MockDisplay::new());
        controller.activate(Instant::now());

        assert!(controller.host().keep_awake);
        assert_eq!(controller.host().last_brightness(), Some(0.6));

        controller.deactivate();
        assert!(!controller.host().keep_awake);
    }

    #[test]
    fn overlay_auto_hides_three_seconds_after_activation() {
        let t0 = Instant::now();
        let mut controller = LightController::new(MockDisplay::new());
        controller.activate(t0);

        assert!(controller.overlay().is_visible());
        assert!(!controller.tick(t0 + Duration::from_secs(2)));
        assert!(controller.tick(t0 + Duration::from_secs(3)));
        assert!(!controller.overlay().is_visible());
    }

    #[test]
    fn starting_a_gesture_dismisses_the_overlay() {
        let t0 = Instant::now();
        let mut controller = LightController::new(MockDisplay::new());
        controller.activate(t0);

        controller.begin_gesture();
        assert!(!controller.overlay().is_visible());
        assert!(!controller.overlay().auto_hide_pending());

        // Re-shown by tap: the cancelled deadline must not hide it again.
        controller.toggle_overlay();
        assert!(controller.overlay().is_visible());
        assert!(!controller.tick(t0 + Duration::from_secs(10)));
        assert!(controller.overlay().is_visible());
    }

    #[test]
    fn subscribers_see_state_and_overlay_changes() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut controller = LightController::new(MockDisplay::new());
        controller.subscribe(move |change| sink.lock().unwrap().push(change));

        controller.set_brightness(0.9);
        controller.toggle_overlay();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(matches!(seen[0], LightChange::State(s) if s.brightness == 0.9));
        assert_eq!(seen[1], LightChange::Overlay(false));
    }

    #[test]
    fn explicit_dismissal_notifies_once() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut controller = LightController::new(MockDisplay::new());
        controller.subscribe(move |change| sink.lock().unwrap().push(change));

        controller.dismiss_overlay();
        controller.dismiss_overlay();

        assert_eq!(*seen.lock().unwrap(), vec![LightChange::Overlay(false)]);
        assert!(!controller.overlay().is_visible());
    }

    #[test]
    fn programmatic_sets_resync_the_baseline() {
        let mut controller = LightController::new(MockDisplay::new());
        controller.set_brightness(0.3);
        controller.set_color_ratio(-0.5);

        controller.begin_gesture();
        controller.update_gesture(0.0, 0.0, 800.0, 600.0);
        assert_eq!(controller.state(), LightState::clamped(0.3, -0.5));
    }

    #[test]
    fn drag_vector_tracks_and_resets() {
        let mut controller = LightController::new(MockDisplay::new());
        controller.begin_gesture();
        controller.update_gesture(30.0, -20.0, 800.0, 600.0);
        assert_eq!(controller.drag(), DragVector { x: 30.0, y: -20.0 });

        controller.end_gesture();
        assert_eq!(controller.drag(), DragVector::default());
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn brightness_always_stays_in_range(
                start in MIN_BRIGHTNESS..=MAX_BRIGHTNESS,
                ty in -1e6f64..1e6,
                vh in 1.0f64..1e4,
            ) {
                let mut controller = LightController::with_state(
                    LightState::clamped(start, 0.0),
                    MockDisplay::new(),
                );
                controller.begin_gesture();
                controller.update_gesture(0.0, ty, 800.0, vh);
                let brightness = controller.state().brightness;
                prop_assert!((MIN_BRIGHTNESS..=MAX_BRIGHTNESS).contains(&brightness));
            }

            #[test]
            fn color_ratio_always_stays_in_range(
                start in MIN_COLOR_RATIO..=MAX_COLOR_RATIO,
                tx in -1e6f64..1e6,
                vw in 1.0f64..1e4,
            ) {
                let mut controller = LightController::with_state(
                    LightState::clamped(0.6, start),
                    MockDisplay::new(),
                );
                controller.begin_gesture();
                controller.update_gesture(tx, 0.0, vw, 600.0);
                let ratio = controller.state().color_ratio;
                prop_assert!((MIN_COLOR_RATIO..=MAX_COLOR_RATIO).contains(&ratio));
            }

            #[test]
            fn derived_color_channels_stay_in_unit_interval(
                ratio in MIN_COLOR_RATIO..=MAX_COLOR_RATIO,
            ) {
                let color = Rgb::for_ratio(ratio);
                prop_assert_eq!(color.red, 1.0);
                prop_assert_eq!(color.green, 1.0);
                prop_assert!((0.7..=1.0).contains(&color.blue));
            }
        }
    }
}
