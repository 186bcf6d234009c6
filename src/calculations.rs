//! Pure calculation functions for thumbnail dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate output dimensions for a maximum-side bound.
///
/// The longer side becomes exactly `side`; the shorter side scales by the
/// same ratio, rounded to the nearest pixel (never below 1).
///
/// Precondition: `0 < side <= max(width, height)`. Callers validate before
/// calling — see `generator`.
///
/// # Examples
/// ```
/// # use quickthumb::calculations::scaled_dimensions;
/// // 4000x3000 landscape bounded to 400 → 400x300
/// assert_eq!(scaled_dimensions((4000, 3000), 400), (400, 300));
///
/// // 3000x4000 portrait bounded to 300 → 225x300
/// assert_eq!(scaled_dimensions((3000, 4000), 300), (225, 300));
/// ```
pub fn scaled_dimensions(source: (u32, u32), side: u32) -> (u32, u32) {
    let (width, height) = source;

    if width >= height {
        // Landscape or square: width is the longer side
        let h = (height as f64 * side as f64 / width as f64).round() as u32;
        (side, h.max(1))
    } else {
        // Portrait: height is the longer side
        let w = (width as f64 * side as f64 / height as f64).round() as u32;
        (w.max(1), side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_pins_width() {
        assert_eq!(scaled_dimensions((4000, 3000), 400), (400, 300));
    }

    #[test]
    fn portrait_pins_height() {
        assert_eq!(scaled_dimensions((3000, 4000), 300), (225, 300));
    }

    #[test]
    fn square_stays_square() {
        assert_eq!(scaled_dimensions((2000, 2000), 150), (150, 150));
    }

    #[test]
    fn side_equal_to_longer_is_identity() {
        assert_eq!(scaled_dimensions((800, 600), 800), (800, 600));
    }

    #[test]
    fn shorter_side_rounds_to_nearest() {
        // 2000 * 1000 / 3000 = 666.66... → 667
        assert_eq!(scaled_dimensions((3000, 2000), 1000), (1000, 667));
        // 2000 * 500 / 3000 = 333.33... → 333
        assert_eq!(scaled_dimensions((3000, 2000), 500), (500, 333));
    }

    #[test]
    fn extreme_aspect_never_collapses_to_zero() {
        // 1 * 100 / 10000 = 0.01 → would round to 0, clamped to 1
        assert_eq!(scaled_dimensions((10000, 1), 100), (100, 1));
        assert_eq!(scaled_dimensions((1, 10000), 100), (1, 100));
    }

    #[test]
    fn one_pixel_bound() {
        assert_eq!(scaled_dimensions((640, 480), 1), (1, 1));
    }
}
