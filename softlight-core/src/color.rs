//! Warm-blend color model.
//!
//! The horizontal drag only ever blends from neutral white toward a fixed
//! warm tint by pulling the blue channel down. This is deliberately not a
//! color-temperature model.

/// Blue-channel drop at the warmest setting.
const WARM_BLUE_DROP: f64 = 0.3;

/// An RGB color with unit-interval channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red channel, `[0.0, 1.0]`.
    pub red: f64,
    /// Green channel, `[0.0, 1.0]`.
    pub green: f64,
    /// Blue channel, `[0.0, 1.0]`.
    pub blue: f64,
}

impl Rgb {
    /// Neutral white.
    pub const WHITE: Rgb = Rgb {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
    };

    /// The emitted color for a color ratio.
    ///
    /// Negative ratios blend toward warm by reducing blue; non-negative
    /// ratios are pure white.
    ///
    /// ```
    /// use softlight_core::Rgb;
    ///
    /// assert_eq!(Rgb::for_ratio(-1.0).blue, 0.7);
    /// assert_eq!(Rgb::for_ratio(0.5), Rgb::WHITE);
    /// ```
    pub fn for_ratio(ratio: f64) -> Self {
        if ratio < 0.0 {
            Rgb {
                red: 1.0,
                green: 1.0,
                blue: 1.0 - ratio.abs() * WARM_BLUE_DROP,
            }
        } else {
            Self::WHITE
        }
    }

    /// Darken all channels by a brightness factor.
    ///
    /// Frontends without a controllable backlight render the luminance into
    /// the fill itself.
    pub fn scaled(self, brightness: f64) -> Self {
        let brightness = brightness.clamp(0.0, 1.0);
        Rgb {
            red: self.red * brightness,
            green: self.green * brightness,
            blue: self.blue * brightness,
        }
    }
}
