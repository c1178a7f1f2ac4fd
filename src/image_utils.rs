use std::path::Path;

use eframe::egui;
use image::DynamicImage;

pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "bmp", "gif", "webp", "tiff", "tif", "ico",
];

pub fn is_supported_image(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|s| s.to_ascii_lowercase()),
        Some(ref ext) if SUPPORTED_EXTENSIONS.contains(&ext.as_str())
    )
}

pub fn to_color_image(img: &DynamicImage) -> egui::ColorImage {
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let pixels = rgba.into_raw();
    egui::ColorImage::from_rgba_unmultiplied(size, &pixels)
}

/// A decoded bitmap ready for display.
///
/// `width` and `height` are the source's native pixel dimensions and are what
/// all measurements run against. `color_image` is the texture copy, which may
/// be downscaled for very large sources.
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub color_image: egui::ColorImage,
}
