use image::{
    imageops::{self, FilterType},
    RgbaImage,
};
use tracing::{debug, warn};

use crate::common::{
    error::{QRError, QRResult},
    geometry::{centered_origin, Size},
    mask::round_corners,
    metadata::MAX_LOGO_COVERAGE,
};

// Logo
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct LogoSpec {
    pub image: RgbaImage,
    pub size: Size,
    pub corner_radius: Option<f64>,
}

impl LogoSpec {
    /// Logo drawn at the image's own dimensions with square corners.
    pub fn new(image: RgbaImage) -> Self {
        let size = Size::from(image.dimensions());
        Self { image, size, corner_radius: None }
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    /// Resampled and optionally rounded logo, ready to be drawn over a `canvas` sized symbol.
    pub(crate) fn prepare(&self, canvas: (u32, u32)) -> QRResult<RgbaImage> {
        let (w, h) = self.size.to_pixels()?;
        if w > canvas.0 || h > canvas.1 {
            return Err(QRError::LogoTooLarge { width: self.size.width, height: self.size.height });
        }

        let coverage = Size::from((w, h)).area() / Size::from(canvas).area();
        if coverage > MAX_LOGO_COVERAGE {
            return Err(QRError::LogoTooLarge { width: self.size.width, height: self.size.height });
        }

        // Logo pixels never touch the module grid, so smooth resampling is fine here
        let logo = match (w, h) == self.image.dimensions() {
            true => self.image.clone(),
            false => imageops::resize(&self.image, w, h, FilterType::CatmullRom),
        };

        let logo = match self.corner_radius {
            Some(r) if r != 0.0 => round_corners(&logo, r).unwrap_or_else(|err| {
                warn!(%err, "Failed to round logo corners, using square logo");
                logo
            }),
            _ => logo,
        };

        debug!(w, h, coverage, "Prepared logo");
        Ok(logo)
    }
}

/// Draws the logo centered over the symbol with source-over alpha blending.
pub fn composite(canvas: &mut RgbaImage, logo: &LogoSpec) -> QRResult<()> {
    let logo = logo.prepare(canvas.dimensions())?;
    let (x, y) = centered_origin(canvas.dimensions(), logo.dimensions());
    imageops::overlay(canvas, &logo, x, y);

    debug!(x, y, "Composited logo");
    Ok(())
}
