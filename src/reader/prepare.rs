use image::{DynamicImage, GrayImage, Luma};

// Prepare
//------------------------------------------------------------------------------

/// Luma of the image flattened over white, so transparent areas read as quiet zone.
pub fn to_luma(img: &DynamicImage) -> GrayImage {
    if !img.color().has_alpha() {
        return img.to_luma8();
    }

    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    GrayImage::from_fn(w, h, |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let a = a as u32;
        let over_white = |c: u8| ((c as u32 * a + 255 * (255 - a)) / 255) as u8;
        Luma([luma(over_white(r), over_white(g), over_white(b))])
    })
}

// Rec. 709 weights, same as the image crate's own conversion
fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((2126 * r as u32 + 7152 * g as u32 + 722 * b as u32) / 10000) as u8
}
