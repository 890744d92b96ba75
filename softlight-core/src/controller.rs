//! The light controller: gesture mapping, overlay lifecycle and host relay.

use crate::error::HostError;
use crate::overlay::Overlay;
use crate::state::{DragVector, GestureBaseline, LightState};

use log::{debug, warn};
use std::time::Instant;

/// Vertical drag gain. A full-height swipe overshoots the brightness range
/// slightly so the extremes are reachable without dragging edge to edge.
pub const BRIGHTNESS_GAIN: f64 = 1.2;
/// Horizontal drag gain. Half the view width spans a full color-ratio unit.
pub const COLOR_RATIO_GAIN: f64 = 2.0;

// =============================================================================
// Host Display Trait
// =============================================================================

/// Seam between the controller and the host display.
///
/// Implementations relay brightness to whatever actually emits light and
/// keep the display from idling while the panel is up. Calls are
/// fire-and-forget from the controller's perspective: failures are logged
/// and never retried.
pub trait HostDisplay: Send {
    /// Relay a brightness level in `[0.1, 1.0]` to the host display.
    fn set_brightness(&mut self, level: f64) -> Result<(), HostError>;

    /// Enable or disable the host's keep-awake / idle-timer inhibit.
    fn set_keep_awake(&mut self, enabled: bool) -> Result<(), HostError>;
}

impl<T: HostDisplay + ?Sized> HostDisplay for Box<T> {
    fn set_brightness(&mut self, level: f64) -> Result<(), HostError> {
        (**self).set_brightness(level)
    }

    fn set_keep_awake(&mut self, enabled: bool) -> Result<(), HostError> {
        (**self).set_keep_awake(enabled)
    }
}

/// Host for frontends with no controllable display; every call succeeds and
/// does nothing. The rendered fill then carries the luminance on its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDisplay;

impl HostDisplay for NoopDisplay {
    fn set_brightness(&mut self, _level: f64) -> Result<(), HostError> {
        Ok(())
    }

    fn set_keep_awake(&mut self, _enabled: bool) -> Result<(), HostError> {
        Ok(())
    }
}

// =============================================================================
// Change Notification
// =============================================================================

/// Change notification delivered to subscribers.
///
/// The controller mutates state and emits one of these; a presentation
/// layer re-renders in response without the core knowing the UI framework.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightChange {
    /// Brightness or color ratio changed.
    State(LightState),
    /// The instructional overlay was shown (`true`) or hidden (`false`).
    Overlay(bool),
}

type Subscriber = Box<dyn FnMut(LightChange) + Send>;

// =============================================================================
// LightController
// =============================================================================

/// Turns drag gestures into bounded light output.
///
/// Vertical drags change brightness, horizontal drags blend the color
/// between neutral white and a warm tone. Deltas are relative to a baseline
/// snapshot taken at gesture start, so consecutive gestures never jump.
///
/// All mutation happens on the caller's event loop; the controller holds no
/// threads and no locks. The overlay auto-hide is an explicit deadline the
/// frontend polls via [`tick`](Self::tick).
///
/// # Example
///
/// ```
/// use softlight_core::{LightController, MockDisplay};
///
/// let mut controller = LightController::new(MockDisplay::new());
/// controller.begin_gesture();
/// // Drag half the view height upward: brightness clamps at 1.0.
/// controller.update_gesture(0.0, -300.0, 800.0, 600.0);
/// assert_eq!(controller.state().brightness, 1.0);
/// controller.end_gesture();
/// ```
pub struct LightController<H> {
    state: LightState,
    baseline: GestureBaseline,
    drag: DragVector,
    overlay: Overlay,
    host: H,
    subscribers: Vec<Subscriber>,
}

impl<H: HostDisplay> LightController<H> {
    /// Create a controller at the default state (60% brightness, neutral).
    pub fn new(host: H) -> Self {
        Self::with_state(LightState::default(), host)
    }

    /// Create a controller at a custom initial state.
    pub fn with_state(state: LightState, host: H) -> Self {
        Self {
            state,
            baseline: state.into(),
            drag: DragVector::default(),
            overlay: Overlay::new(),
            host,
            subscribers: Vec::new(),
        }
    }

    /// The current light state.
    pub fn state(&self) -> LightState {
        self.state
    }

    /// The instructional overlay.
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// The raw in-progress drag translation.
    pub fn drag(&self) -> DragVector {
        self.drag
    }

    /// The host display backend.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host display backend.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The bottom status readout for the current state.
    pub fn status_line(&self) -> String {
        self.state.status_line()
    }

    /// Register a change subscriber.
    pub fn subscribe(&mut self, subscriber: impl FnMut(LightChange) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Start a drag gesture: snapshot the current state as the baseline and
    /// dismiss the overlay if it is showing.
    pub fn begin_gesture(&mut self) {
        self.baseline = self.state.into();
        if self.overlay.dismiss() {
            debug!("overlay dismissed by gesture");
            self.notify(LightChange::Overlay(false));
        }
    }

    /// Apply an in-progress drag translation.
    ///
    /// The result is a pure function of the baseline and the translation:
    /// calling this repeatedly with the same inputs is idempotent. A zero
    /// view dimension skips the corresponding axis rather than dividing by
    /// zero.
    pub fn update_gesture(
        &mut self,
        translation_x: f64,
        translation_y: f64,
        view_width: f64,
        view_height: f64,
    ) {
        let mut brightness = self.state.brightness;
        let mut color_ratio = self.state.color_ratio;

        if view_height != 0.0 {
            let vertical_fraction = -translation_y / view_height;
            brightness = self.baseline.brightness + vertical_fraction * BRIGHTNESS_GAIN;
        }
        if view_width != 0.0 {
            let horizontal_fraction = translation_x / view_width;
            color_ratio = self.baseline.color_ratio + horizontal_fraction * COLOR_RATIO_GAIN;
        }

        self.drag = DragVector {
            x: translation_x,
            y: translation_y,
        };
        self.apply(LightState::clamped(brightness, color_ratio));
    }

    /// Finish a drag gesture: the current state becomes the next baseline
    /// and the raw drag vector resets.
    pub fn end_gesture(&mut self) {
        self.baseline = self.state.into();
        self.drag = DragVector::default();
    }

    /// Show or hide the instructional overlay (tap).
    pub fn toggle_overlay(&mut self) {
        self.overlay.toggle();
        self.notify(LightChange::Overlay(self.overlay.is_visible()));
    }

    /// Hide the instructional overlay explicitly.
    pub fn dismiss_overlay(&mut self) {
        if self.overlay.dismiss() {
            self.notify(LightChange::Overlay(false));
        }
    }

    /// Poll the overlay auto-hide deadline. Returns whether the overlay was
    /// hidden by this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.overlay.tick(now) {
            debug!("overlay auto-hidden");
            self.notify(LightChange::Overlay(false));
            true
        } else {
            false
        }
    }

    /// Bring the panel up: keep-awake on, current brightness pushed to the
    /// host, overlay auto-hide armed relative to `now`.
    pub fn activate(&mut self, now: Instant) {
        debug!("panel up, brightness {}", self.state.brightness);
        if let Err(e) = self.host.set_keep_awake(true) {
            warn!("failed to enable keep-awake: {e}");
        }
        self.push_brightness();
        self.overlay.schedule_auto_hide(now);
    }

    /// Take the panel down: keep-awake off.
    pub fn deactivate(&mut self) {
        debug!("panel down");
        if let Err(e) = self.host.set_keep_awake(false) {
            warn!("failed to disable keep-awake: {e}");
        }
    }

    /// Programmatic brightness set; clamped, and the baseline resyncs so a
    /// following gesture is relative to the new value.
    pub fn set_brightness(&mut self, value: f64) {
        self.apply(LightState::clamped(value, self.state.color_ratio));
        self.baseline = self.state.into();
    }

    /// Programmatic color-ratio set; clamped, baseline resyncs.
    pub fn set_color_ratio(&mut self, value: f64) {
        self.apply(LightState::clamped(self.state.brightness, value));
        self.baseline = self.state.into();
    }

    fn apply(&mut self, next: LightState) {
        if next == self.state {
            return;
        }
        let brightness_changed = next.brightness != self.state.brightness;
        self.state = next;
        if brightness_changed {
            self.push_brightness();
        }
        self.notify(LightChange::State(self.state));
    }

    /// Relay brightness to the host. Fire-and-forget: a failure is logged
    /// and the panel keeps rendering.
    fn push_brightness(&mut self) {
        if let Err(e) = self.host.set_brightness(self.state.brightness) {
            warn!("host brightness write failed: {e}");
        }
    }

    fn notify(&mut self, change: LightChange) {
        for subscriber in &mut self.subscribers {
            subscriber(change);
        }
    }
}
