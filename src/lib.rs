//! # qrbrand
//!
//! Renders crisp, optionally logo-branded QR code bitmaps and reads QR codes back from images.
//!
//! ## Features
//!
//! - **Sharp output**: The module grid is scaled with nearest neighbour sampling only, using one
//!   whole-pixel scale factor for both axes, so module edges never blur
//! - **Logo branding**: Symbols are always generated at error correction level H, so a centered
//!   logo, optionally with rounded corners, can cover part of the symbol
//! - **Multi symbol reading**: Every QR code found in an image is returned
//! - **Charsets**: Content can be serialized in any charset `encoding_rs` can encode into
//!
//! ## Quick Start
//!
//! ### Generating a QR code
//!
//! ```rust
//! use qrbrand::QRBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = QRBuilder::new("Hello, World!").size(256.0, 256.0).build()?;
//! assert_eq!(img.width(), img.height());
//! # Ok(())
//! # }
//! ```
//!
//! ### Adding a logo
//!
//! ```rust
//! use image::{Rgba, RgbaImage};
//! use qrbrand::{LogoSpec, QRBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let logo = LogoSpec::new(RgbaImage::from_pixel(64, 64, Rgba([20, 120, 220, 255])))
//!     .size(60.0, 60.0)
//!     .corner_radius(12.0);
//!
//! let img = QRBuilder::new("https://example.com").size(400.0, 400.0).logo(logo).build()?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Reading QR codes
//!
//! ```rust
//! use image::DynamicImage;
//! use qrbrand::{decode, QRBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = QRBuilder::new("Hello, World!").size(256.0, 256.0).build()?;
//!
//! let codes = decode(&DynamicImage::ImageRgba8(img));
//! assert_eq!(codes[0].message, "Hello, World!");
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub(crate) mod common;
pub mod reader;

pub use builder::{encode, EncodeRequest, LogoSpec, QRBuilder};
pub use common::error::{QRError, QRResult};
pub use common::geometry::{Scale, Size};
pub use common::mask::{round_corners, rounded_rect_mask};
pub use common::metadata::{ECLevel, ENCODE_EC_LEVEL, MAX_LOGO_COVERAGE, QUIET_ZONE};
pub use reader::{decode, decode_first, DecodedCode, QRReader};
