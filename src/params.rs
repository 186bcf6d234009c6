//! Resampling quality hint.
//!
//! [`ResampleQuality`] trades speed for visual smoothness when scaling. It
//! affects fidelity and cost, never correctness: every quality produces the
//! same output dimensions. The convenience entry points default to
//! [`ResampleQuality::Low`].

use image::imageops::FilterType;

/// Interpolation quality for the scale step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResampleQuality {
    /// Fast bilinear interpolation. The default for thumbnails.
    Low,
    /// Catmull-Rom cubic interpolation.
    Medium,
    /// Lanczos3 — slowest, sharpest.
    High,
}

impl ResampleQuality {
    /// The `image` crate filter implementing this quality level.
    pub fn filter(self) -> FilterType {
        match self {
            ResampleQuality::Low => FilterType::Triangle,
            ResampleQuality::Medium => FilterType::CatmullRom,
            ResampleQuality::High => FilterType::Lanczos3,
        }
    }
}

impl Default for ResampleQuality {
    fn default() -> Self {
        ResampleQuality::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_low() {
        assert_eq!(ResampleQuality::default(), ResampleQuality::Low);
    }

    #[test]
    fn filter_mapping() {
        assert_eq!(ResampleQuality::Low.filter(), FilterType::Triangle);
        assert_eq!(ResampleQuality::Medium.filter(), FilterType::CatmullRom);
        assert_eq!(ResampleQuality::High.filter(), FilterType::Lanczos3);
    }
}
