mod logo;
mod matrix;
mod render;

pub use logo::LogoSpec;
pub(crate) use matrix::ModuleMatrix;

use encoding_rs::{Encoding, UTF_8};
use image::RgbaImage;
use tracing::debug;

use crate::common::{
    charset::encode_content,
    error::{QRError, QRResult},
    geometry::Size,
    metadata::ENCODE_EC_LEVEL,
};

// Encode request
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct EncodeRequest {
    pub content: String,
    pub output_size: Size,
    pub logo: Option<LogoSpec>,
    pub charset: &'static Encoding,
}

impl EncodeRequest {
    pub fn new(content: impl Into<String>, output_size: impl Into<Size>) -> Self {
        Self { content: content.into(), output_size: output_size.into(), logo: None, charset: UTF_8 }
    }
}

/// Renders the request into an opaque RGBA symbol, with the logo drawn on top if present.
///
/// The bitmap is square with a side of `native * scale`, where `scale` is the largest whole
/// number of pixels per module that fits `output_size`. It can be smaller than `output_size`
/// on both axes.
///
/// The logo is centered on that rendered bitmap rather than on `output_size`, so it stays
/// over the symbol's center whatever the requested aspect ratio.
pub fn encode(req: &EncodeRequest) -> QRResult<RgbaImage> {
    if req.content.is_empty() {
        return Err(QRError::EmptyData);
    }
    let bounds = req.output_size.validate()?;

    debug!(len = req.content.len(), charset = req.charset.name(), "Encoding content");
    let data = encode_content(&req.content, req.charset)?;

    let matrix = ModuleMatrix::generate(&data, ENCODE_EC_LEVEL)?;
    debug!(
        version = matrix.version(),
        width = matrix.width(),
        dark = matrix.count_dark_modules(),
        "Generated module matrix"
    );

    let (gray, _) = render::render_gray(matrix, bounds)?;
    let mut img = render::materialize(gray);

    if let Some(logo) = &req.logo {
        logo::composite(&mut img, logo)?;
    }

    debug!(w = img.width(), h = img.height(), "Encoded symbol");
    Ok(img)
}

// Builder
//------------------------------------------------------------------------------

pub struct QRBuilder<'a> {
    content: &'a str,
    output_size: Size,
    logo: Option<LogoSpec>,
    charset: &'static Encoding,
}

impl<'a> QRBuilder<'a> {
    pub fn new(content: &'a str) -> Self {
        Self { content, output_size: Size::square(256.0), logo: None, charset: UTF_8 }
    }

    pub fn content(&mut self, content: &'a str) -> &mut Self {
        self.content = content;
        self
    }

    pub fn size(&mut self, width: f64, height: f64) -> &mut Self {
        self.output_size = Size::new(width, height);
        self
    }

    pub fn logo(&mut self, logo: LogoSpec) -> &mut Self {
        self.logo = Some(logo);
        self
    }

    pub fn unset_logo(&mut self) -> &mut Self {
        self.logo = None;
        self
    }

    pub fn charset(&mut self, charset: &'static Encoding) -> &mut Self {
        self.charset = charset;
        self
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Size: {}x{}, Ec level: {}, Charset: {}, Logo: {} }}",
            self.output_size.width,
            self.output_size.height,
            ENCODE_EC_LEVEL,
            self.charset.name(),
            self.logo.is_some()
        )
    }

    pub fn request(&self) -> EncodeRequest {
        EncodeRequest {
            content: self.content.to_string(),
            output_size: self.output_size,
            logo: self.logo.clone(),
            charset: self.charset,
        }
    }

    pub fn build(&self) -> QRResult<RgbaImage> {
        debug!("Building QR {}", self.metadata());
        encode(&self.request())
    }
}


#[cfg(test)]
mod builder_tests {
    use encoding_rs::WINDOWS_1252;
    use image::{Rgba, RgbaImage};
    use test_case::test_case;

    use super::{encode, EncodeRequest, LogoSpec, QRBuilder};
    use crate::common::error::QRError;

    #[test_case(0.0, 0.0)]
    #[test_case(-64.0, 64.0)]
    #[test_case(64.0, -1.0)]
    #[test_case(f64::NAN, 64.0)]
    #[test_case(10.0, 10.0; "below native extent")]
    fn test_invalid_geometry(w: f64, h: f64) {
        let err = QRBuilder::new("Hello").size(w, h).build().unwrap_err();
        assert!(matches!(err, QRError::InvalidGeometry { .. }));
    }

    #[test]
    fn test_empty_data() {
        let err = QRBuilder::new("").build().unwrap_err();
        assert_eq!(err, QRError::EmptyData);
    }

    #[test]
    fn test_data_overflow() {
        let data = "1234567890".repeat(306);
        let err = QRBuilder::new(&data).size(2000.0, 2000.0).build().unwrap_err();
        assert!(matches!(err, QRError::UnencodableContent(_)));
    }

    #[test]
    fn test_unmappable_charset() {
        let err = QRBuilder::new("日本").charset(WINDOWS_1252).build().unwrap_err();
        assert_eq!(err, QRError::EncodingError { charset: "windows-1252" });
    }

    #[test_case(64.0, 64.0, 58)]
    #[test_case(200.0, 90.0, 87)]
    #[test_case(90.5, 200.0, 87)]
    #[test_case(87.0, 87.0, 87)]
    fn test_square_output(w: f64, h: f64, exp_side: u32) {
        let img = QRBuilder::new("Hello").size(w, h).build().unwrap();
        assert_eq!(img.dimensions(), (exp_side, exp_side));
    }

    #[test]
    fn test_unbranded_is_pure_monochrome() {
        let img = QRBuilder::new("https://example.com").size(250.0, 250.0).build().unwrap();
        let black = Rgba([0, 0, 0, 255]);
        let white = Rgba([255, 255, 255, 255]);
        assert!(img.pixels().all(|p| *p == black || *p == white));
        assert!(img.pixels().any(|p| *p == black));
    }

    #[test]
    fn test_deterministic() {
        let logo = LogoSpec::new(RgbaImage::from_pixel(30, 30, Rgba([10, 80, 200, 255])))
            .corner_radius(8.0);
        let mut req = EncodeRequest::new("Determinism", (300.0, 300.0));
        req.logo = Some(logo);

        assert_eq!(encode(&req).unwrap(), encode(&req).unwrap());
    }

    #[test]
    fn test_logo_too_large() {
        let logo = LogoSpec::new(RgbaImage::new(8, 8)).size(150.0, 150.0);
        let err = QRBuilder::new("Hello").size(200.0, 200.0).logo(logo).build().unwrap_err();
        assert!(matches!(err, QRError::LogoTooLarge { .. }));
    }
}
