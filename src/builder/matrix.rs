use image::{GrayImage, Luma};
use qrcode::{Color, QrCode};

use crate::common::{
    error::QRResult,
    metadata::{ECLevel, QUIET_ZONE},
};

pub(crate) const DARK: Luma<u8> = Luma([0]);
pub(crate) const LIGHT: Luma<u8> = Luma([255]);

// Module matrix
//------------------------------------------------------------------------------

/// Monochrome module grid of a single symbol, row major, `true` for dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    modules: Vec<bool>,
    width: usize,
    version: i16,
}

impl ModuleMatrix {
    pub fn generate(data: &[u8], ecl: ECLevel) -> QRResult<Self> {
        let code = QrCode::with_error_correction_level(data, ecl.into())?;
        let width = code.width();
        let version = match code.version() {
            qrcode::Version::Normal(v) | qrcode::Version::Micro(v) => v,
        };
        let modules = code.to_colors().into_iter().map(|c| c == Color::Dark).collect();
        Ok(Self { modules, width, version })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn version(&self) -> i16 {
        self.version
    }

    pub fn is_dark(&self, r: usize, c: usize) -> bool {
        debug_assert!(r < self.width && c < self.width, "Module {r},{c} out of bounds");
        self.modules[r * self.width + c]
    }

    pub fn count_dark_modules(&self) -> usize {
        self.modules.iter().filter(|m| **m).count()
    }

    /// Side of the symbol including both quiet zones, one pixel per module.
    pub fn native_extent(&self) -> u32 {
        (self.width + 2 * QUIET_ZONE) as u32
    }

    /// Paints the grid at one pixel per module, quiet zone included.
    pub fn rasterize(self) -> GrayImage {
        let sz = self.native_extent();
        let qz = QUIET_ZONE as u32;
        let w = self.width as u32;

        GrayImage::from_fn(sz, sz, |x, y| {
            let inside = (qz..qz + w).contains(&x) && (qz..qz + w).contains(&y);
            match inside && self.is_dark((y - qz) as usize, (x - qz) as usize) {
                true => DARK,
                false => LIGHT,
            }
        })
    }
}

#[cfg(test)]
mod matrix_tests {
    use test_case::test_case;

    use super::{ModuleMatrix, DARK, LIGHT};
    use crate::common::{
        error::QRError,
        metadata::{ECLevel, QUIET_ZONE},
    };

    #[test_case("OK", ECLevel::H, 1)]
    #[test_case("Hello, world!", ECLevel::H, 2)]
    #[test_case("https://example.com", ECLevel::H, 3)]
    #[test_case("Hello, world!", ECLevel::L, 1)]
    fn test_generate_version(data: &str, ecl: ECLevel, exp_ver: i16) {
        let matrix = ModuleMatrix::generate(data.as_bytes(), ecl).unwrap();
        assert_eq!(matrix.version(), exp_ver);
        assert_eq!(matrix.width(), 17 + 4 * exp_ver as usize);
    }

    #[test]
    fn test_capacity_overflow() {
        let data = "1234567890".repeat(306);
        let err = ModuleMatrix::generate(data.as_bytes(), ECLevel::H).unwrap_err();
        assert!(matches!(err, QRError::UnencodableContent(_)));
    }

    #[test]
    fn test_finder_corners() {
        let matrix = ModuleMatrix::generate(b"OK", ECLevel::H).unwrap();
        let w = matrix.width();
        for (r, c) in [(0, 0), (0, w - 1), (w - 1, 0), (3, 3), (3, w - 4), (w - 4, 3)] {
            assert!(matrix.is_dark(r, c), "Finder module {r},{c} should be dark");
        }
        assert!(!matrix.is_dark(1, 1));
        assert!(!matrix.is_dark(7, 7));
    }

    #[test]
    fn test_rasterize() {
        let matrix = ModuleMatrix::generate(b"OK", ECLevel::H).unwrap();
        let w = matrix.width();
        let dark = matrix.count_dark_modules();
        let exp = matrix.clone();

        let img = matrix.rasterize();
        let qz = QUIET_ZONE as u32;
        assert_eq!(img.dimensions(), (exp.native_extent(), exp.native_extent()));
        assert_eq!(img.pixels().filter(|p| **p == DARK).count(), dark);
        assert_eq!(*img.get_pixel(0, 0), LIGHT);
        assert_eq!(*img.get_pixel(qz, qz), DARK);

        for r in 0..w {
            for c in 0..w {
                let px = *img.get_pixel(c as u32 + qz, r as u32 + qz);
                assert_eq!(px == DARK, exp.is_dark(r, c));
            }
        }
    }
}
