//! Light mode banding.

use std::fmt;

/// Named band the color ratio falls into, shown in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightMode {
    /// Ratio below -0.7.
    DeepSoft,
    /// Ratio in [-0.7, -0.3).
    Soft,
    /// Ratio in [-0.3, 0.3).
    Neutral,
    /// Ratio in [0.3, 0.7).
    Strong,
    /// Ratio at or above 0.7.
    MaxStrong,
}

impl LightMode {
    /// The band for a color ratio.
    ///
    /// Bands are evaluated left to right with the first match winning, so
    /// every boundary belongs to the band on its right.
    pub fn for_ratio(ratio: f64) -> Self {
        if ratio < -0.7 {
            LightMode::DeepSoft
        } else if ratio < -0.3 {
            LightMode::Soft
        } else if ratio < 0.3 {
            LightMode::Neutral
        } else if ratio < 0.7 {
            LightMode::Strong
        } else {
            LightMode::MaxStrong
        }
    }

    /// Human-readable label for the status line.
    pub fn label(self) -> &'static str {
        match self {
            LightMode::DeepSoft => "deep soft light",
            LightMode::Soft => "soft light",
            LightMode::Neutral => "neutral",
            LightMode::Strong => "strong light",
            LightMode::MaxStrong => "max strong light",
        }
    }
}

impl fmt::Display for LightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banding_matches_labels() {
        assert_eq!(LightMode::for_ratio(-0.8).label(), "deep soft light");
        assert_eq!(LightMode::for_ratio(-0.5).label(), "soft light");
        assert_eq!(LightMode::for_ratio(0.0).label(), "neutral");
        assert_eq!(LightMode::for_ratio(0.5).label(), "strong light");
        assert_eq!(LightMode::for_ratio(0.9).label(), "max strong light");
    }

    #[test]
    fn boundaries_belong_to_the_right_band() {
        assert_eq!(LightMode::for_ratio(-0.7), LightMode::Soft);
        assert_eq!(LightMode::for_ratio(-0.3), LightMode::Neutral);
        assert_eq!(LightMode::for_ratio(0.3), LightMode::Strong);
        assert_eq!(LightMode::for_ratio(0.7), LightMode::MaxStrong);
    }

    #[test]
    fn extremes_hit_the_outer_bands() {
        assert_eq!(LightMode::for_ratio(-1.0), LightMode::DeepSoft);
        assert_eq!(LightMode::for_ratio(1.0), LightMode::MaxStrong);
    }
}
