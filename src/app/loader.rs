use std::{
    path::{Path, PathBuf},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Instant,
};

use fast_image_resize::images::Image;
use fast_image_resize::{PixelType, ResizeOptions, Resizer};
use image::{DynamicImage, RgbaImage};
use log::{debug, warn};
use thiserror::Error;
use zune_jpeg::JpegDecoder;

use crate::image_utils::{to_color_image, DecodedImage};

/// Textures larger than this get a downscaled copy; native dimensions are
/// reported unchanged so measurements stay exact.
pub const MAX_TEXTURE_WIDTH: u32 = 3840;
pub const MAX_TEXTURE_HEIGHT: u32 = 2160;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{0} is not a supported image file")]
    UnsupportedType(String),
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

pub enum LoadSource {
    Path(PathBuf),
    Pixels(RgbaImage),
}

pub struct LoadRequest {
    pub generation: u64,
    pub source: LoadSource,
}

pub struct LoadResult {
    pub generation: u64,
    pub outcome: Result<DecodedImage, LoadError>,
}

/// Decodes images on a worker thread. Requests and results carry the load
/// generation; the app drops results whose generation was superseded.
pub struct Loader {
    result_rx: Receiver<LoadResult>,
    request_tx: Sender<LoadRequest>,
    pub loading_active: bool,
}

impl Loader {
    pub fn new() -> Self {
        let (request_tx, request_rx) = mpsc::channel::<LoadRequest>();
        let (result_tx, result_rx) = mpsc::channel();

        thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                let started = Instant::now();
                let outcome = decode_request(request.source);
                if let Ok(decoded) = &outcome {
                    debug!(
                        "decoded {}x{} image in {:?}",
                        decoded.width,
                        decoded.height,
                        started.elapsed()
                    );
                }
                let sent = result_tx.send(LoadResult {
                    generation: request.generation,
                    outcome,
                });
                if sent.is_err() {
                    break;
                }
            }
        });

        Self {
            result_rx,
            request_tx,
            loading_active: false,
        }
    }

    pub fn request(&mut self, request: LoadRequest) {
        self.loading_active = true;
        let _ = self.request_tx.send(request);
    }

    /// Drains finished decodes without blocking.
    pub fn poll(&mut self) -> Vec<LoadResult> {
        let mut completed = Vec::new();
        while let Ok(result) = self.result_rx.try_recv() {
            completed.push(result);
        }
        completed
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_request(source: LoadSource) -> Result<DecodedImage, LoadError> {
    let image = match source {
        LoadSource::Path(path) => {
            let bytes = std::fs::read(&path).map_err(|source| LoadError::Read {
                path: path.clone(),
                source,
            })?;
            decode_bytes(&path, &bytes)?
        }
        LoadSource::Pixels(pixels) => DynamicImage::ImageRgba8(pixels),
    };

    let (width, height) = (image.width(), image.height());
    let image = downscale_for_texture(image);
    Ok(DecodedImage {
        width,
        height,
        color_image: to_color_image(&image),
    })
}

fn decode_bytes(path: &Path, bytes: &[u8]) -> Result<DynamicImage, LoadError> {
    let is_jpeg = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.eq_ignore_ascii_case("jpg") || s.eq_ignore_ascii_case("jpeg"))
        .unwrap_or(false);

    if is_jpeg {
        // Fast path for the common case; anything it cannot represent falls
        // through to the generic decoder.
        let mut decoder = JpegDecoder::new(bytes);
        match decoder.decode() {
            Ok(pixels) => {
                if let Some(info) = decoder.info() {
                    if let Some(rgb) =
                        image::RgbImage::from_raw(info.width as u32, info.height as u32, pixels)
                    {
                        return Ok(DynamicImage::ImageRgb8(rgb));
                    }
                }
                warn!(
                    "jpeg fast path produced an unusable buffer for {}, retrying generically",
                    path.display()
                );
            }
            Err(err) => {
                warn!("jpeg fast path failed for {}: {err}", path.display());
            }
        }
    }

    image::load_from_memory(bytes).map_err(LoadError::from)
}

/// Caps the texture copy at 4K. Falls back to the unscaled image if the
/// resizer rejects the buffer.
fn downscale_for_texture(image: DynamicImage) -> DynamicImage {
    if image.width() <= MAX_TEXTURE_WIDTH && image.height() <= MAX_TEXTURE_HEIGHT {
        return image;
    }

    let ratio = image.width() as f64 / image.height() as f64;
    let (new_w, new_h) = if ratio > f64::from(MAX_TEXTURE_WIDTH) / f64::from(MAX_TEXTURE_HEIGHT) {
        (
            MAX_TEXTURE_WIDTH,
            ((f64::from(MAX_TEXTURE_WIDTH) / ratio) as u32).max(1),
        )
    } else {
        (
            ((f64::from(MAX_TEXTURE_HEIGHT) * ratio) as u32).max(1),
            MAX_TEXTURE_HEIGHT,
        )
    };

    let rgba = image.to_rgba8();
    let src = match Image::from_vec_u8(rgba.width(), rgba.height(), rgba.into_raw(), PixelType::U8x4)
    {
        Ok(src) => src,
        Err(err) => {
            warn!("texture downscale skipped: {err}");
            return image;
        }
    };
    let mut dst = Image::new(new_w, new_h, PixelType::U8x4);
    if let Err(err) = Resizer::new().resize(&src, &mut dst, &ResizeOptions::default()) {
        warn!("texture downscale skipped: {err}");
        return image;
    }
    match RgbaImage::from_raw(new_w, new_h, dst.into_vec()) {
        Some(resized) => DynamicImage::ImageRgba8(resized),
        None => image,
    }
}
