//! Instructional overlay lifecycle.
//!
//! The overlay starts visible, auto-hides once after a short delay, and
//! toggles on tap. The auto-hide is a cancellable deadline polled by the
//! frontend's tick; any manual dismissal or toggle cancels it explicitly.

use std::time::{Duration, Instant};

/// Delay before the overlay hides itself after being scheduled.
pub const AUTO_HIDE_DELAY: Duration = Duration::from_secs(3);

/// Visibility of the instructional overlay plus its one-shot auto-hide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    visible: bool,
    auto_hide_at: Option<Instant>,
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new()
    }
}

impl Overlay {
    /// A visible overlay with no auto-hide armed yet.
    pub fn new() -> Self {
        Self {
            visible: true,
            auto_hide_at: None,
        }
    }

    /// Whether the overlay is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether an auto-hide deadline is armed.
    pub fn auto_hide_pending(&self) -> bool {
        self.auto_hide_at.is_some()
    }

    /// Arm the one-shot auto-hide relative to `now`.
    pub fn schedule_auto_hide(&mut self, now: Instant) {
        self.auto_hide_at = Some(now + AUTO_HIDE_DELAY);
    }

    /// Poll the auto-hide deadline.
    ///
    /// Hides the overlay when the deadline has passed and it is still
    /// visible. Returns whether visibility changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.auto_hide_at {
            Some(deadline) if now >= deadline => {
                self.auto_hide_at = None;
                if self.visible {
                    self.visible = false;
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    /// Flip visibility; cancels any pending auto-hide.
    pub fn toggle(&mut self) {
        self.auto_hide_at = None;
        self.visible = !self.visible;
    }

    /// Hide the overlay; cancels any pending auto-hide.
    ///
    /// Returns whether visibility changed.
    pub fn dismiss(&mut self) -> bool {
        self.auto_hide_at = None;
        if self.visible {
            self.visible = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_visible_without_deadline() {
        let overlay = Overlay::new();
        assert!(overlay.is_visible());
        assert!(!overlay.auto_hide_pending());
    }

    #[test]
    fn auto_hide_fires_at_deadline() {
        let t0 = Instant::now();
        let mut overlay = Overlay::new();
        overlay.schedule_auto_hide(t0);

        assert!(!overlay.tick(t0 + Duration::from_secs(2)));
        assert!(overlay.is_visible());

        assert!(overlay.tick(t0 + AUTO_HIDE_DELAY));
        assert!(!overlay.is_visible());
        assert!(!overlay.auto_hide_pending());
    }

    #[test]
    fn manual_dismiss_cancels_the_deadline() {
        let t0 = Instant::now();
        let mut overlay = Overlay::new();
        overlay.schedule_auto_hide(t0);

        assert!(overlay.dismiss());
        assert!(!overlay.auto_hide_pending());

        // A late tick must not touch visibility again.
        assert!(!overlay.tick(t0 + Duration::from_secs(10)));
    }

    #[test]
    fn toggle_cancels_and_flips() {
        let t0 = Instant::now();
        let mut overlay = Overlay::new();
        overlay.schedule_auto_hide(t0);

        overlay.toggle();
        assert!(!overlay.is_visible());
        assert!(!overlay.auto_hide_pending());

        overlay.toggle();
        assert!(overlay.is_visible());

        // Re-shown after cancellation: the old deadline stays dead.
        assert!(!overlay.tick(t0 + Duration::from_secs(10)));
        assert!(overlay.is_visible());
    }

    #[test]
    fn dismissing_a_hidden_overlay_is_a_noop() {
        let mut overlay = Overlay::new();
        assert!(overlay.dismiss());
        assert!(!overlay.dismiss());
    }
}
