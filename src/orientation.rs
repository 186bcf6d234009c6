//! EXIF orientation normalization.
//!
//! Decoders report orientation as an EXIF tag (1–8): a rotation in 90°
//! increments, optionally combined with a mirror. The `image` crate models
//! this as [`Orientation`]; this module adds the pure helpers the generator
//! needs — does a tag swap the axes, what do the upright dimensions look
//! like — plus the pixel-level correction itself.
//!
//! ```text
//!     EXIF 1: upright      EXIF 3: rotated 180°
//!     EXIF 6: needs 90° CW EXIF 8: needs 270° CW
//!     EXIF 2/4/5/7: mirrored variants
//! ```

use image::DynamicImage;
pub use image::metadata::Orientation;

/// Whether correcting this orientation swaps width and height.
///
/// True for the four tags involving a 90° or 270° rotation.
pub fn swaps_axes(orientation: Orientation) -> bool {
    matches!(
        orientation,
        Orientation::Rotate90
            | Orientation::Rotate270
            | Orientation::Rotate90FlipH
            | Orientation::Rotate270FlipH
    )
}

/// Dimensions of the raster after upright correction.
pub fn upright_dimensions(orientation: Orientation, (width, height): (u32, u32)) -> (u32, u32) {
    if swaps_axes(orientation) {
        (height, width)
    } else {
        (width, height)
    }
}

/// Rotate/mirror raw pixel data into upright orientation.
///
/// The returned image needs no further rotation for correct display; it
/// carries no residual orientation metadata.
pub fn make_upright(mut image: DynamicImage, orientation: Orientation) -> DynamicImage {
    image.apply_orientation(orientation);
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn exif_tags_round_trip() {
        for tag in 1..=8u8 {
            let orientation = Orientation::from_exif(tag).unwrap();
            assert_eq!(orientation.to_exif(), tag);
        }
        assert!(Orientation::from_exif(0).is_none());
        assert!(Orientation::from_exif(9).is_none());
    }

    #[test]
    fn rotated_tags_swap_axes() {
        // EXIF 5, 6, 7, 8 involve a quarter turn
        for tag in [5, 6, 7, 8] {
            assert!(swaps_axes(Orientation::from_exif(tag).unwrap()), "tag {tag}");
        }
        // EXIF 1, 2, 3, 4 preserve axes
        for tag in [1, 2, 3, 4] {
            assert!(!swaps_axes(Orientation::from_exif(tag).unwrap()), "tag {tag}");
        }
    }

    #[test]
    fn upright_dimensions_swap_for_quarter_turns() {
        assert_eq!(upright_dimensions(Orientation::Rotate90, (3000, 4000)), (4000, 3000));
        assert_eq!(upright_dimensions(Orientation::NoTransforms, (3000, 4000)), (3000, 4000));
        assert_eq!(upright_dimensions(Orientation::Rotate180, (3000, 4000)), (3000, 4000));
    }

    /// 2x1 strip: [red][blue]
    fn strip() -> DynamicImage {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(1, 0, Rgb([0, 0, 255]));
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn identity_leaves_pixels_alone() {
        let upright = make_upright(strip(), Orientation::NoTransforms);
        let px = upright.to_rgb8();
        assert_eq!(px.get_pixel(0, 0), &Rgb([255, 0, 0]));
        assert_eq!(px.get_pixel(1, 0), &Rgb([0, 0, 255]));
    }

    #[test]
    fn quarter_turn_moves_pixels_and_swaps_dims() {
        // Rotate90 correction is a clockwise quarter turn: the left pixel
        // ends up on top.
        let upright = make_upright(strip(), Orientation::Rotate90);
        assert_eq!((upright.width(), upright.height()), (1, 2));
        let px = upright.to_rgb8();
        assert_eq!(px.get_pixel(0, 0), &Rgb([255, 0, 0]));
        assert_eq!(px.get_pixel(0, 1), &Rgb([0, 0, 255]));
    }

    #[test]
    fn half_turn_reverses_strip() {
        let upright = make_upright(strip(), Orientation::Rotate180);
        assert_eq!((upright.width(), upright.height()), (2, 1));
        let px = upright.to_rgb8();
        assert_eq!(px.get_pixel(0, 0), &Rgb([0, 0, 255]));
        assert_eq!(px.get_pixel(1, 0), &Rgb([255, 0, 0]));
    }

    #[test]
    fn mirror_reverses_strip() {
        let upright = make_upright(strip(), Orientation::FlipHorizontal);
        let px = upright.to_rgb8();
        assert_eq!(px.get_pixel(0, 0), &Rgb([0, 0, 255]));
        assert_eq!(px.get_pixel(1, 0), &Rgb([255, 0, 0]));
    }
}
