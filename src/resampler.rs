//! Pixel resampling behind a trait.
//!
//! The counterpart seam to [`Decoder`](crate::decoder::Decoder): the
//! generator computes target dimensions, the resampler produces the pixels.
//! Resampling is infallible — dimensions are validated before it runs.

use crate::params::ResampleQuality;
use image::DynamicImage;

/// Trait for scaling a raster to exact target dimensions.
pub trait Resampler {
    fn resample(
        &self,
        image: &DynamicImage,
        width: u32,
        height: u32,
        quality: ResampleQuality,
    ) -> DynamicImage;
}

/// Production resampler using `image::imageops`.
pub struct RustResampler;

impl RustResampler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustResampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Resampler for RustResampler {
    fn resample(
        &self,
        image: &DynamicImage,
        width: u32,
        height: u32,
        quality: ResampleQuality,
    ) -> DynamicImage {
        // resize_exact: the caller already computed aspect-correct dimensions
        image.resize_exact(width, height, quality.filter())
    }
}
