//! Image decoding behind a trait.
//!
//! The [`Decoder`] trait defines the two ways a source becomes a raster:
//! from a file path or from an in-memory byte buffer. Both return an
//! [`OrientedImage`] — the decoded pixels plus the EXIF orientation the
//! decoder found — so the generator can correct rotation itself.
//!
//! The production implementation is [`RustDecoder`], pure Rust via the
//! `image` crate. Compiled-in formats: JPEG, PNG, TIFF, WebP.

use crate::error::ThumbnailError;
use crate::orientation::Orientation;
use image::{DynamicImage, ImageDecoder, ImageReader};
use std::io::{BufRead, Cursor, Seek};
use std::path::Path;

/// A decoded raster paired with its orientation metadata.
///
/// This is the "image handle" of the contract: created fresh per call,
/// owned by the caller, never retained by the generator.
pub struct OrientedImage {
    pub image: DynamicImage,
    pub orientation: Orientation,
}

impl OrientedImage {
    /// Wrap an image that is already upright (EXIF 1).
    pub fn upright(image: DynamicImage) -> Self {
        Self {
            image,
            orientation: Orientation::NoTransforms,
        }
    }
}

/// Trait for image decoders.
///
/// Split out as a seam so the transform logic in `generator` is testable
/// with a recording fake — see [`tests::MockDecoder`].
///
/// Error split: a source that cannot be read at all (missing file, failing
/// asset store) surfaces as [`ThumbnailError::Io`]; bytes that were read
/// but cannot be interpreted as an image surface as
/// [`ThumbnailError::Decode`].
pub trait Decoder {
    /// Open and decode a file.
    fn decode_path(&self, path: &Path) -> Result<OrientedImage, ThumbnailError>;

    /// Decode an in-memory encoded buffer, sniffing the format.
    fn decode_bytes(&self, bytes: &[u8]) -> Result<OrientedImage, ThumbnailError>;
}

/// Pure Rust decoder using the `image` crate.
pub struct RustDecoder;

impl RustDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the decoder and pull the EXIF orientation before the pixels.
fn decode_reader<R: BufRead + Seek>(
    reader: ImageReader<R>,
) -> Result<OrientedImage, image::ImageError> {
    let mut decoder = reader.into_decoder()?;
    let orientation = decoder.orientation().unwrap_or(Orientation::NoTransforms);
    let image = DynamicImage::from_decoder(decoder)?;
    Ok(OrientedImage { image, orientation })
}

impl Decoder for RustDecoder {
    fn decode_path(&self, path: &Path) -> Result<OrientedImage, ThumbnailError> {
        let reader = ImageReader::open(path)
            .map_err(ThumbnailError::Io)?
            .with_guessed_format()
            .map_err(ThumbnailError::Io)?;
        decode_reader(reader).map_err(|e| {
            ThumbnailError::Decode(format!("failed to decode {}: {e}", path.display()))
        })
    }

    fn decode_bytes(&self, bytes: &[u8]) -> Result<OrientedImage, ThumbnailError> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| ThumbnailError::Decode(format!("unrecognized image data: {e}")))?;
        decode_reader(reader)
            .map_err(|e| ThumbnailError::Decode(format!("failed to decode image data: {e}")))
    }
}
