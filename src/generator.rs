//! The scale-and-normalize transform and its entry points.
//!
//! Four input shapes — asset, file path, encoded bytes, decoded image —
//! converge on one body: validate the side bound, compute scaled
//! dimensions, resample, correct orientation. The three source-shaped
//! entries obtain an [`OrientedImage`] from the decoder first.
//!
//! Everything here is synchronous and blocking: decode and resample run on
//! the calling thread and their cost grows with source size, so keep these
//! calls off latency-sensitive threads. Each call owns its intermediate
//! buffers; concurrent calls need no external synchronization.

use crate::asset::Asset;
use crate::calculations::scaled_dimensions;
use crate::decoder::{Decoder, OrientedImage, RustDecoder};
use crate::error::ThumbnailError;
use crate::orientation;
use crate::params::ResampleQuality;
use crate::resampler::{Resampler, RustResampler};
use image::DynamicImage;
use std::path::Path;

/// Result type for thumbnail operations.
pub type Result<T> = std::result::Result<T, ThumbnailError>;

/// The core transform: shrink to the side bound, then make upright.
///
/// The longer side of the result equals exactly `side`; the shorter side is
/// rounded proportionally. The returned image carries no orientation
/// metadata — its pixels already read top-left to bottom-right.
///
/// `side` must be positive and must not exceed the source's longer side
/// (shrinking only; upscaling behavior is deliberately not defined).
pub fn generate(
    resampler: &impl Resampler,
    source: &OrientedImage,
    side: u32,
    quality: ResampleQuality,
) -> Result<DynamicImage> {
    // Work in the upright frame the caller sees; quarter-turn tags swap
    // axes relative to the raw pixel buffer.
    let raw = (source.image.width(), source.image.height());
    let (width, height) = orientation::upright_dimensions(source.orientation, raw);
    let longer = width.max(height);
    if side == 0 || side > longer {
        return Err(ThumbnailError::InvalidSide { side, longer });
    }

    // Scale in the upright frame, then map back to raw axes for the
    // resampler — the same swap in reverse.
    let scaled = scaled_dimensions((width, height), side);
    let (out_w, out_h) = orientation::upright_dimensions(source.orientation, scaled);
    // Resample the raw pixels first — the correction then runs on the
    // small raster, not the full-size source.
    let thumb = resampler.resample(&source.image, out_w, out_h, quality);
    Ok(orientation::make_upright(thumb, source.orientation))
}

/// Decode a file, then run the core transform.
pub fn generate_from_path(
    decoder: &impl Decoder,
    resampler: &impl Resampler,
    path: &Path,
    side: u32,
    quality: ResampleQuality,
) -> Result<DynamicImage> {
    let decoded = decoder.decode_path(path)?;
    generate(resampler, &decoded, side, quality)
}

/// Decode an in-memory buffer, then run the core transform.
pub fn generate_from_bytes(
    decoder: &impl Decoder,
    resampler: &impl Resampler,
    bytes: &[u8],
    side: u32,
    quality: ResampleQuality,
) -> Result<DynamicImage> {
    let decoded = decoder.decode_bytes(bytes)?;
    generate(resampler, &decoded, side, quality)
}

/// Read an asset's encoded bytes, then run the core transform.
pub fn generate_from_asset(
    decoder: &impl Decoder,
    resampler: &impl Resampler,
    asset: &dyn Asset,
    side: u32,
    quality: ResampleQuality,
) -> Result<DynamicImage> {
    let bytes = asset.encoded_bytes().map_err(ThumbnailError::Io)?;
    generate_from_bytes(decoder, resampler, &bytes, side, quality)
}

/// Thumbnail an asset at default (low) quality.
pub fn thumbnail_for_asset(asset: &dyn Asset, side: u32) -> Result<DynamicImage> {
    generate_from_asset(
        &RustDecoder::new(),
        &RustResampler::new(),
        asset,
        side,
        ResampleQuality::default(),
    )
}

/// Thumbnail an image file at default (low) quality.
pub fn thumbnail_for_file(path: &Path, side: u32) -> Result<DynamicImage> {
    generate_from_path(
        &RustDecoder::new(),
        &RustResampler::new(),
        path,
        side,
        ResampleQuality::default(),
    )
}

/// Thumbnail an encoded byte buffer at default (low) quality.
pub fn thumbnail_for_bytes(bytes: &[u8], side: u32) -> Result<DynamicImage> {
    generate_from_bytes(
        &RustDecoder::new(),
        &RustResampler::new(),
        bytes,
        side,
        ResampleQuality::default(),
    )
}

/// Thumbnail an already-decoded image at default (low) quality.
pub fn thumbnail_for_image(source: &OrientedImage, side: u32) -> Result<DynamicImage> {
    thumbnail_for_image_with_quality(source, side, ResampleQuality::default())
}

/// Thumbnail an already-decoded image with an explicit quality hint.
pub fn thumbnail_for_image_with_quality(
    source: &OrientedImage,
    side: u32,
    quality: ResampleQuality,
) -> Result<DynamicImage> {
    generate(&RustResampler::new(), source, side, quality)
}
