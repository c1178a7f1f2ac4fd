use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use image::{DynamicImage, Rgba, RgbaImage};
use pixelruler::app::loader::{LoadResult, Loader};

pub fn solid_image(width: u32, height: u32, color: [u8; 4]) -> DynamicImage {
    let pixel = Rgba(color);
    let buffer = RgbaImage::from_pixel(width, height, pixel);
    DynamicImage::ImageRgba8(buffer)
}

pub fn write_image(path: impl Into<PathBuf>, image: &DynamicImage) {
    image
        .save(path.into())
        .expect("failed to write image to disk");
}

/// Polls the loader until `count` results arrived or the timeout elapsed.
pub fn wait_for_results(loader: &mut Loader, count: usize, timeout: Duration) -> Vec<LoadResult> {
    let deadline = Instant::now() + timeout;
    let mut results = Vec::new();
    while results.len() < count {
        results.extend(loader.poll());
        if Instant::now() > deadline {
            panic!(
                "loader produced {} of {} results before timeout",
                results.len(),
                count
            );
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    results
}
