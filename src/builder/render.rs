use image::{DynamicImage, GrayImage, RgbaImage};
use tracing::debug;

use super::matrix::ModuleMatrix;
use crate::common::{
    error::QRResult,
    geometry::{Scale, Size},
};

// Render
//------------------------------------------------------------------------------

/// Grayscale symbol stretched to fit `bounds` with a single whole-pixel scale factor.
///
/// Resampling is nearest neighbour only and every module becomes an equal square block.
/// Smoothing or uneven module widths break detection.
pub fn render_gray(matrix: ModuleMatrix, bounds: Size) -> QRResult<(GrayImage, Scale)> {
    let scale = Scale::fit(matrix.native_extent(), bounds)?;
    debug!(factor = scale.factor, native = scale.native, extent = scale.extent, "Scaling symbol");

    let native = matrix.rasterize();
    let (w, h) = scale.dimensions();
    if (w, h) == native.dimensions() {
        return Ok((native, scale));
    }

    let module_sz = scale.module_size();
    let canvas = GrayImage::from_fn(w, h, |x, y| *native.get_pixel(x / module_sz, y / module_sz));
    Ok((canvas, scale))
}

/// Opaque RGBA copy of a grayscale symbol.
pub fn materialize(gray: GrayImage) -> RgbaImage {
    DynamicImage::ImageLuma8(gray).into_rgba8()
}
