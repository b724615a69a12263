use image::{DynamicImage, Rgba, RgbaImage};
use qrbrand::{decode, LogoSpec, QRBuilder};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let data = std::env::args().nth(1).unwrap_or_else(|| "https://example.com".to_string());

    let logo = LogoSpec::new(RgbaImage::from_pixel(64, 64, Rgba([20, 120, 220, 255])))
        .size(72.0, 72.0)
        .corner_radius(14.0);

    let img = QRBuilder::new(&data).size(400.0, 400.0).logo(logo).build()?;
    img.save("branded_qr.png")?;

    for code in decode(&DynamicImage::ImageRgba8(img)) {
        println!("Decoded: {}", code.message);
    }

    Ok(())
}
