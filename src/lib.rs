//! # quickthumb
//!
//! Synchronous generation of downscaled, upright thumbnails from an asset
//! handle, a file path, raw encoded bytes, or an already-decoded image.
//! The longer side of the result never exceeds the caller's pixel bound,
//! and EXIF orientation is applied during generation — downstream consumers
//! never reason about rotation metadata.
//!
//! ```no_run
//! # fn main() -> Result<(), quickthumb::ThumbnailError> {
//! let thumb = quickthumb::thumbnail_for_file("photos/dawn.jpg".as_ref(), 400)?;
//! assert_eq!(thumb.width().max(thumb.height()), 400);
//! # Ok(())
//! # }
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`generator`] | The core scale-and-normalize transform and the four entry points |
//! | [`decoder`] | [`Decoder`] trait + pure-Rust production decoder (JPEG, PNG, TIFF, WebP) |
//! | [`resampler`] | [`Resampler`] trait + production resampler |
//! | [`orientation`] | EXIF orientation mapping and upright correction |
//! | [`calculations`] | Pure dimension math for the max-side bound |
//! | [`params`] | [`ResampleQuality`] hint |
//! | [`asset`] | [`Asset`] trait abstracting photo-library style handles |
//! | [`error`] | [`ThumbnailError`] |
//!
//! # Design Decisions
//!
//! ## Strictly Synchronous
//!
//! Every entry point blocks the calling thread until the thumbnail exists
//! or the call fails. There is no cancellation, timeout, or progress
//! reporting, and decode/resample cost grows with source size — call from a
//! background thread, not a latency-sensitive one. Calls are independent
//! and share no mutable state, so concurrent use needs no coordination.
//!
//! ## Shrinking Only
//!
//! The side bound must not exceed the source's longer side. Upscale
//! behavior is deliberately undefined by the contract, so out-of-range
//! bounds are rejected as [`ThumbnailError::InvalidSide`] instead of being
//! given an accidental meaning.
//!
//! ## Traits at the Seams
//!
//! Decode and resample are the two platform-sized dependencies, so each
//! sits behind a trait with the `image` crate implementation as the
//! production default. The transform logic is exercised in tests with
//! recording fakes and never touches a real codec.

pub mod asset;
pub mod calculations;
pub mod decoder;
pub mod error;
pub mod generator;
pub mod orientation;
pub mod params;
pub mod resampler;

pub use asset::{Asset, FileAsset};
pub use decoder::{Decoder, OrientedImage, RustDecoder};
pub use error::ThumbnailError;
pub use generator::{
    thumbnail_for_asset, thumbnail_for_bytes, thumbnail_for_file, thumbnail_for_image,
    thumbnail_for_image_with_quality,
};
pub use orientation::Orientation;
pub use params::ResampleQuality;
pub use resampler::{Resampler, RustResampler};
