use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Clone)]
pub enum QRError {
    // QR builder
    #[error("Empty data")]
    EmptyData,

    #[error("Invalid geometry: {width}x{height}")]
    InvalidGeometry { width: f64, height: f64 },

    #[error("Unencodable content: {0}")]
    UnencodableContent(String),

    #[error("Content cannot be represented in {charset}")]
    EncodingError { charset: &'static str },

    #[error("Logo too large: {width}x{height}")]
    LogoTooLarge { width: f64, height: f64 },

    #[error("Invalid corner radius: {0}")]
    InvalidCornerRadius(f64),

    // QR reader
    #[error("Symbol not found")]
    NoSymbolDetected,
}

pub type QRResult<T> = Result<T, QRError>;

impl From<qrcode::types::QrError> for QRError {
    fn from(err: qrcode::types::QrError) -> Self {
        match err {
            qrcode::types::QrError::DataTooLong => Self::UnencodableContent(
                "Data exceeds symbol capacity at the requested ec level".to_string(),
            ),
            other => Self::UnencodableContent(other.to_string()),
        }
    }
}
