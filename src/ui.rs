use eframe::egui::{self, Pos2, Rect, Vec2};

use crate::units::{self, Unit};

/// Geometry of the image as currently displayed inside the canvas panel.
///
/// `image_size` is the native pixel size of the bitmap; `image_rect` is where
/// it is drawn on screen after fit-to-panel scaling. Measurements happen in
/// native pixel coordinates, so pointer positions go through
/// [`ImageMetrics::screen_to_image`] and overlay rectangles come back through
/// [`ImageMetrics::to_screen`].
pub struct ImageMetrics {
    pub image_rect: Rect,
    pub image_size: Vec2,
    pub scale: f32,
}

impl ImageMetrics {
    pub fn new(canvas: Rect, image_size: Vec2) -> Self {
        let (display, scale) = fit_within(image_size, canvas.size());
        let offset = (canvas.size() - display) * 0.5;
        let image_rect = Rect::from_min_size(canvas.min + offset, display);
        Self {
            image_rect,
            image_size,
            scale,
        }
    }

    /// Maps a screen position to image pixel coordinates, clamped to the
    /// image bounds. Positions outside the displayed rect land on its edge.
    pub fn screen_to_image(&self, pos: Pos2) -> Pos2 {
        let rel = pos - self.image_rect.min;
        egui::pos2(
            (rel.x / self.scale).clamp(0.0, self.image_size.x),
            (rel.y / self.scale).clamp(0.0, self.image_size.y),
        )
    }

    /// Maps a rectangle in image pixel coordinates back to screen space.
    pub fn to_screen(&self, rect: Rect) -> Rect {
        let min = egui::pos2(
            self.image_rect.min.x + rect.min.x * self.scale,
            self.image_rect.min.y + rect.min.y * self.scale,
        );
        let max = egui::pos2(
            self.image_rect.min.x + rect.max.x * self.scale,
            self.image_rect.min.y + rect.max.y * self.scale,
        );
        Rect::from_min_max(min, max)
    }
}

pub fn fit_within(image_size: Vec2, available: Vec2) -> (Vec2, f32) {
    let safe_size = egui::vec2(image_size.x.max(1.0), image_size.y.max(1.0));
    let scale = (available.x / safe_size.x)
        .min(available.y / safe_size.y)
        .max(0.01);
    (safe_size * scale, scale)
}

pub struct KeyboardState {
    pub open: bool,
    pub paste: bool,
    pub reset: bool,
}

/// The seven text outputs of the readout panel. Blank strings render as
/// empty lines, matching the cleared state.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Readouts {
    pub original_px: String,
    pub original_cm: String,
    pub original_in: String,
    pub selected_px: String,
    pub selected_percent: String,
    pub selected_cm: String,
    pub selected_in: String,
}

/// Recomputed on every repaint from the current image, selection, and DPI
/// text. Everything stays blank until an image is published.
pub fn compute_readouts(
    image_size: Option<(u32, u32)>,
    selection: Option<(f32, f32)>,
    dpi_text: &str,
) -> Readouts {
    let mut out = Readouts::default();
    let Some((width, height)) = image_size else {
        return out;
    };
    let (width, height) = (f64::from(width), f64::from(height));
    let dpi = units::parse_dpi(dpi_text);

    out.original_px = units::format_pixels(width, height);
    out.original_cm = units::format_physical(Unit::Cm, width, height, &dpi);
    out.original_in = units::format_physical(Unit::In, width, height, &dpi);

    if let Some((sel_width, sel_height)) = selection {
        let (sel_width, sel_height) = (f64::from(sel_width.abs()), f64::from(sel_height.abs()));
        out.selected_px = units::format_pixels(sel_width, sel_height);
        out.selected_percent = units::format_percent(sel_width, sel_height, width, height);
        out.selected_cm = units::format_physical(Unit::Cm, sel_width, sel_height, &dpi);
        out.selected_in = units::format_physical(Unit::In, sel_width, sel_height, &dpi);
    }
    out
}
