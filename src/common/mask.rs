use image::{GrayImage, Luma, RgbaImage};
use imageproc::{
    drawing::{draw_filled_circle_mut, draw_filled_rect_mut},
    rect::Rect,
};

use super::{
    error::{QRError, QRResult},
    geometry::f64_to_px,
};

// Rounded rectangle mask
//------------------------------------------------------------------------------

const OPAQUE: Luma<u8> = Luma([255]);

/// Alpha mask of a `w`x`h` rectangle with corners rounded by `r` pixels.
/// The radius is clamped to half the shorter side.
pub fn rounded_rect_mask(w: u32, h: u32, r: u32) -> GrayImage {
    let mut mask = GrayImage::new(w, h);
    if w == 0 || h == 0 {
        return mask;
    }

    let r = r.min(w.min(h) / 2);
    if r == 0 {
        mask.pixels_mut().for_each(|p| *p = OPAQUE);
        return mask;
    }

    // Cross made of two bands, leaving the four corner squares empty
    if w > 2 * r {
        draw_filled_rect_mut(&mut mask, Rect::at(r as i32, 0).of_size(w - 2 * r, h), OPAQUE);
    }
    if h > 2 * r {
        draw_filled_rect_mut(&mut mask, Rect::at(0, r as i32).of_size(w, h - 2 * r), OPAQUE);
    }

    let (ri, right, bottom) = (r as i32, (w - 1 - r) as i32, (h - 1 - r) as i32);
    for center in [(ri, ri), (right, ri), (ri, bottom), (right, bottom)] {
        draw_filled_circle_mut(&mut mask, center, ri, OPAQUE);
    }

    mask
}

/// Copy of `logo` whose pixels outside the rounded rectangle are transparent.
pub fn round_corners(logo: &RgbaImage, radius: f64) -> QRResult<RgbaImage> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(QRError::InvalidCornerRadius(radius));
    }
    let r = f64_to_px(radius).ok_or(QRError::InvalidCornerRadius(radius))?;

    let (w, h) = logo.dimensions();
    let mask = rounded_rect_mask(w, h, r);

    let mut rounded = logo.clone();
    rounded.pixels_mut().zip(mask.pixels()).for_each(|(px, m)| {
        px[3] = ((px[3] as u16 * m[0] as u16) / 255) as u8;
    });
    Ok(rounded)
}

#[cfg(test)]
mod mask_tests {
    use image::{Rgba, RgbaImage};
    use test_case::test_case;

    use super::{round_corners, rounded_rect_mask};
    use crate::common::error::QRError;

    #[test]
    fn test_square_mask_is_opaque() {
        let mask = rounded_rect_mask(8, 5, 0);
        assert!(mask.pixels().all(|p| p[0] == 255));
    }

    #[test]
    fn test_rounded_mask_corners() {
        let mask = rounded_rect_mask(40, 30, 10);
        for (x, y) in [(0, 0), (39, 0), (0, 29), (39, 29)] {
            assert_eq!(mask.get_pixel(x, y)[0], 0, "Corner {x},{y} should be clear");
        }
        for (x, y) in [(20, 0), (0, 15), (39, 15), (20, 29), (20, 15), (10, 10)] {
            assert_eq!(mask.get_pixel(x, y)[0], 255, "Pixel {x},{y} should be opaque");
        }
    }

    #[test]
    fn test_radius_clamped_to_half_side() {
        let mask = rounded_rect_mask(20, 20, 500);
        assert_eq!(mask.get_pixel(0, 0)[0], 0);
        assert_eq!(mask.get_pixel(10, 10)[0], 255);
        assert_eq!(mask.get_pixel(10, 0)[0], 255);
    }

    #[test]
    fn test_round_corners_keeps_color() {
        let logo = RgbaImage::from_pixel(24, 24, Rgba([200, 10, 10, 255]));
        let rounded = round_corners(&logo, 6.0).unwrap();
        assert_eq!(rounded.get_pixel(0, 0)[3], 0);
        assert_eq!(*rounded.get_pixel(12, 12), Rgba([200, 10, 10, 255]));
        assert_eq!(rounded.get_pixel(0, 0).0[..3], [200, 10, 10]);
    }

    #[test]
    fn test_round_corners_scales_existing_alpha() {
        let logo = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 128]));
        let rounded = round_corners(&logo, 0.0).unwrap();
        assert_eq!(rounded, logo);
    }

    #[test_case(-1.0)]
    #[test_case(f64::NAN)]
    #[test_case(f64::INFINITY)]
    fn test_round_corners_invalid_radius(radius: f64) {
        let logo = RgbaImage::new(4, 4);
        let err = round_corners(&logo, radius).unwrap_err();
        assert!(matches!(err, QRError::InvalidCornerRadius(_)));
    }
}
