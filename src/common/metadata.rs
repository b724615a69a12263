use std::fmt::{Display, Formatter};

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum ECLevel {
    L = 0,
    M = 1,
    Q = 2,
    #[default]
    H = 3,
}

impl ECLevel {
    /// Approximate share of codewords that can be restored.
    pub fn recovery(self) -> f64 {
        match self {
            Self::L => 0.07,
            Self::M => 0.15,
            Self::Q => 0.25,
            Self::H => 0.30,
        }
    }
}

impl From<ECLevel> for qrcode::EcLevel {
    fn from(ecl: ECLevel) -> Self {
        match ecl {
            ECLevel::L => qrcode::EcLevel::L,
            ECLevel::M => qrcode::EcLevel::M,
            ECLevel::Q => qrcode::EcLevel::Q,
            ECLevel::H => qrcode::EcLevel::H,
        }
    }
}

impl Display for ECLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

// Global constants
//------------------------------------------------------------------------------

/// Every branded symbol is generated at the highest level so a logo can sit on top.
pub const ENCODE_EC_LEVEL: ECLevel = ECLevel::H;

/// Light border around the symbol, in modules.
pub const QUIET_ZONE: usize = 4;

/// Largest share of the bitmap a logo may cover.
///
/// This is an upper bound, not a readability guarantee. A solid logo hides every module
/// beneath it, and past roughly 10% of the area the damage can exceed what level H
/// restores for short payloads.
pub const MAX_LOGO_COVERAGE: f64 = 0.3;
