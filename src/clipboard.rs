use std::path::PathBuf;

use image::RgbaImage;
use log::debug;

use crate::image_utils;

/// What a paste produced: decoded pixels, or a path that still needs the
/// regular load path.
pub enum PastedImage {
    Pixels(RgbaImage),
    File(PathBuf),
}

/// Reads the first image-shaped thing off the system clipboard: raw pixel
/// data first, then text naming an existing image file. Anything else is
/// ignored, matching a paste of non-image content being a no-op.
pub fn read_image() -> Option<PastedImage> {
    if let Ok(mut clip) = arboard::Clipboard::new() {
        if let Ok(data) = clip.get_image() {
            match RgbaImage::from_raw(
                data.width as u32,
                data.height as u32,
                data.bytes.into_owned(),
            ) {
                Some(pixels) => return Some(PastedImage::Pixels(pixels)),
                None => debug!("clipboard image had a malformed pixel buffer"),
            }
        }
    }

    if let Ok(mut clip) = arboard::Clipboard::new() {
        if let Ok(text) = clip.get_text() {
            let path = PathBuf::from(text.trim());
            if path.is_file() && image_utils::is_supported_image(&path) {
                return Some(PastedImage::File(path));
            }
        }
    }

    None
}
