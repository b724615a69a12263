mod prepare;

pub use prepare::to_luma;

use encoding_rs::{Encoding, UTF_8};
use image::DynamicImage;
use rqrr::PreparedImage;
use tracing::{debug, trace, warn};

use crate::common::{
    charset::decode_payload,
    error::{QRError, QRResult},
};

// Decoded code
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedCode {
    /// Empty if the symbol was located but its payload could not be read.
    pub message: String,
    /// Corners of the symbol in image coordinates.
    pub bounds: [(i32, i32); 4],
}

// Reader
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QRReader {
    charset: &'static Encoding,
}

impl Default for QRReader {
    fn default() -> Self {
        Self { charset: UTF_8 }
    }
}

impl QRReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Charset used to turn payload bytes into text.
    pub fn charset(mut self, charset: &'static Encoding) -> Self {
        self.charset = charset;
        self
    }

    /// Every symbol found in the image, in detector scan order.
    /// An image without symbols yields an empty list.
    pub fn read(&self, img: &DynamicImage) -> Vec<DecodedCode> {
        let gray = to_luma(img);
        let (w, h) = gray.dimensions();
        let mut prepared = PreparedImage::prepare_from_greyscale(w as usize, h as usize, |x, y| {
            gray.get_pixel(x as u32, y as u32)[0]
        });

        let grids = prepared.detect_grids();
        debug!(count = grids.len(), "Detected grids");

        grids
            .iter()
            .map(|g| {
                let bounds = g.bounds.map(|p| (p.x, p.y));
                let mut payload = Vec::new();
                let message = match g.decode_to(&mut payload) {
                    Ok(meta) => {
                        trace!(version = meta.version.0, "Decoded grid");
                        decode_payload(&payload, self.charset).unwrap_or_else(|| {
                            warn!(charset = self.charset.name(), "Payload is not valid text");
                            String::new()
                        })
                    }
                    Err(err) => {
                        warn!(?err, ?bounds, "Failed to decode grid");
                        String::new()
                    }
                };
                DecodedCode { message, bounds }
            })
            .collect()
    }

    /// First decoded message, if any symbol was found.
    pub fn read_first(&self, img: &DynamicImage) -> Option<String> {
        self.read(img).into_iter().next().map(|c| c.message)
    }

    pub fn read_first_checked(&self, img: &DynamicImage) -> QRResult<String> {
        self.read_first(img).ok_or(QRError::NoSymbolDetected)
    }
}

pub fn decode(img: &DynamicImage) -> Vec<DecodedCode> {
    QRReader::default().read(img)
}

pub fn decode_first(img: &DynamicImage) -> Option<String> {
    QRReader::default().read_first(img)
}
