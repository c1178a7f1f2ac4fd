use eframe::egui::{self, Color32, Pos2, Rect, Vec2};

use crate::{
    selection::{DragState, Selection},
    ui::ImageMetrics,
};

const OVERLAY_STROKE_WIDTH: f32 = 1.5;
const OVERLAY_COLOR: Color32 = Color32::from_rgba_premultiplied(217, 0, 0, 217);

/// The four phases of the selection gesture loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// No image; pointer input is ignored.
    Idle,
    /// Image shown, nothing selected, no drag in progress.
    Ready,
    /// Pointer held down over the image.
    Dragging(DragState),
    /// A committed selection from a finished drag.
    Selected(Selection),
}

/// The interaction loop over the render surface.
///
/// All transitions are driven by three pointer events plus `reset` and
/// `image_loaded`; the overlay rectangle, readout dimensions, and
/// instruction line are pure functions of the current phase.
pub struct Canvas {
    pub phase: Phase,
}

impl Canvas {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn image_loaded(&mut self) {
        self.phase = Phase::Ready;
    }

    pub fn pointer_down(&mut self, pos: Pos2) {
        let prior = match &self.phase {
            Phase::Idle => return,
            Phase::Selected(selection) => Some(*selection),
            Phase::Ready | Phase::Dragging(_) => None,
        };
        self.phase = Phase::Dragging(DragState::new(pos, prior));
    }

    pub fn pointer_moved(&mut self, pos: Pos2) {
        if let Phase::Dragging(drag) = &mut self.phase {
            drag.current = pos;
            if drag.exceeds_click_threshold() {
                // The old readouts go away as soon as this becomes a real
                // drag; the stroked rectangle follows on the next repaint.
                drag.prior = None;
            }
        }
    }

    pub fn pointer_up(&mut self, bounds: Vec2) {
        if let Phase::Dragging(drag) = &self.phase {
            if drag.is_click() {
                self.phase = Phase::Ready;
            } else {
                self.phase =
                    Phase::Selected(Selection::from_points(drag.start, drag.current, bounds));
            }
        }
    }

    /// Instruction line shown above the readouts.
    pub fn instruction(&self) -> &'static str {
        match self.phase {
            Phase::Idle => "Upload, paste, or drag & drop an image to begin.",
            Phase::Ready => "Click and drag to select. Click image to clear selection.",
            Phase::Dragging(_) => "Release mouse to finalize selection.",
            Phase::Selected(_) => "Selection complete. Drag again or click image to clear.",
        }
    }

    /// The rectangle to stroke this repaint, in image coordinates.
    ///
    /// While a drag is still click-sized and carries a prior selection,
    /// nothing is stroked at all; once the drag outgrows a click the drag
    /// rectangle takes over.
    pub fn overlay_rect(&self) -> Option<Rect> {
        match &self.phase {
            Phase::Dragging(drag) => {
                if drag.prior.is_some() {
                    return None;
                }
                let rect = drag.rect();
                (rect.width() > 0.0 && rect.height() > 0.0).then_some(rect)
            }
            Phase::Selected(selection) => selection.is_drawable().then_some(selection.rect),
            Phase::Idle | Phase::Ready => None,
        }
    }

    /// Dimensions for the selection readouts, if any: the carried prior
    /// selection while a drag is still click-sized, the live drag extent
    /// during a real drag, or the finalized selection.
    pub fn readout_dims(&self) -> Option<(f32, f32)> {
        match &self.phase {
            Phase::Dragging(drag) => {
                if let Some(prior) = &drag.prior {
                    return Some(prior.dims());
                }
                let extent = drag.extent();
                (extent.x > 0.0 || extent.y > 0.0).then_some((extent.x, extent.y))
            }
            Phase::Selected(selection) => Some(selection.dims()),
            Phase::Idle | Phase::Ready => None,
        }
    }

    /// Feeds an egui drag response into the state machine, translating
    /// pointer positions to clamped image coordinates.
    pub fn handle_pointer(&mut self, response: &egui::Response, metrics: &ImageMetrics) {
        if response.drag_started() {
            if let Some(pointer) = response.interact_pointer_pos() {
                self.pointer_down(metrics.screen_to_image(pointer));
            }
        } else if response.dragged() {
            if let Some(pointer) = response.interact_pointer_pos() {
                self.pointer_moved(metrics.screen_to_image(pointer));
            }
        }
        if response.drag_stopped() {
            self.pointer_up(metrics.image_size);
        }
    }

    pub fn draw(&self, painter: &egui::Painter, metrics: &ImageMetrics) {
        if let Some(rect) = self.overlay_rect() {
            painter.rect_stroke(
                metrics.to_screen(rect),
                0.0,
                (OVERLAY_STROKE_WIDTH, OVERLAY_COLOR),
            );
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
