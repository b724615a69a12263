use num_traits::ToPrimitive;

use super::error::{QRError, QRResult};

// Absorbs float error when a product should land exactly on an integer
const EPSILON: f64 = 1e-9;

// Size
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn is_positive(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn validate(self) -> QRResult<Self> {
        match self.is_positive() {
            true => Ok(self),
            false => Err(self.invalid()),
        }
    }

    /// Whole pixel dimensions, rounded down.
    pub fn to_pixels(self) -> QRResult<(u32, u32)> {
        let w = f64_to_px(self.width).ok_or(self.invalid())?;
        let h = f64_to_px(self.height).ok_or(self.invalid())?;
        match w > 0 && h > 0 {
            true => Ok((w, h)),
            false => Err(self.invalid()),
        }
    }

    fn invalid(&self) -> QRError {
        QRError::InvalidGeometry { width: self.width, height: self.height }
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width as f64, height as f64)
    }
}

pub fn f64_to_px(num: f64) -> Option<u32> {
    (num + EPSILON).floor().to_u32()
}

// Scale
//------------------------------------------------------------------------------

/// Uniform scale mapping a square native extent into the requested bounds.
///
/// `factor` is always a whole number of pixels per module.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Scale {
    pub factor: f64,
    pub native: u32,
    pub extent: u32,
}

impl Scale {
    /// Picks the smaller axis ratio, rounded down to whole pixels, so every module is the
    /// same square block and the result stays in bounds.
    /// Fails if the request would shrink the symbol below one pixel per module.
    pub fn fit(native: u32, bounds: Size) -> QRResult<Self> {
        let bounds = bounds.validate()?;
        debug_assert!(native > 0, "Native extent must be positive");

        let n = native as f64;
        let invalid = QRError::InvalidGeometry { width: bounds.width, height: bounds.height };
        let ratio = (bounds.width / n).min(bounds.height / n);
        let module_sz = f64_to_px(ratio).ok_or_else(|| invalid.clone())?;
        if module_sz == 0 {
            return Err(invalid);
        }

        let extent = native.checked_mul(module_sz).ok_or(invalid)?;
        Ok(Self { factor: module_sz as f64, native, extent })
    }

    /// Side of one module in pixels.
    pub fn module_size(&self) -> u32 {
        self.extent / self.native
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.extent, self.extent)
    }
}

/// Top left corner that centers `inner` within `outer`.
pub fn centered_origin(outer: (u32, u32), inner: (u32, u32)) -> (i64, i64) {
    let x = (outer.0 as i64 - inner.0 as i64) / 2;
    let y = (outer.1 as i64 - inner.1 as i64) / 2;
    (x, y)
}
