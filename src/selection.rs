use eframe::egui::{self, Pos2, Rect, Vec2};

/// Gestures whose extent stays within this many surface pixels in both axes
/// count as a click, which clears the selection instead of making one.
pub const CLICK_THRESHOLD: f32 = 5.0;

/// A committed selection rectangle in render-surface pixel coordinates.
///
/// The rectangle's min corner is the top-left of the drag and its extent is
/// non-negative. One axis may be zero (a drag along a line); such a
/// selection is measured but never stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub rect: Rect,
}

impl Selection {
    pub fn from_points(a: Pos2, b: Pos2, bounds: Vec2) -> Self {
        let min = egui::pos2(
            a.x.min(b.x).clamp(0.0, bounds.x),
            a.y.min(b.y).clamp(0.0, bounds.y),
        );
        let max = egui::pos2(
            a.x.max(b.x).clamp(0.0, bounds.x),
            a.y.max(b.y).clamp(0.0, bounds.y),
        );
        Self {
            rect: Rect::from_min_max(min, max),
        }
    }

    pub fn dims(&self) -> (f32, f32) {
        (self.rect.width(), self.rect.height())
    }

    /// Whether there is an area worth stroking.
    pub fn is_drawable(&self) -> bool {
        self.rect.width() > 0.0 && self.rect.height() > 0.0
    }
}

/// Transient state of a pointer drag over the render surface.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub start: Pos2,
    pub current: Pos2,
    /// Selection that was committed before this drag began. Kept so its
    /// readouts stay visible until the drag outgrows a click, then dropped.
    pub prior: Option<Selection>,
}

impl DragState {
    pub fn new(start: Pos2, prior: Option<Selection>) -> Self {
        Self {
            start,
            current: start,
            prior,
        }
    }

    pub fn extent(&self) -> Vec2 {
        (self.current - self.start).abs()
    }

    /// True once the drag has grown past the click threshold in either axis.
    pub fn exceeds_click_threshold(&self) -> bool {
        let extent = self.extent();
        extent.x > CLICK_THRESHOLD || extent.y > CLICK_THRESHOLD
    }

    pub fn is_click(&self) -> bool {
        !self.exceeds_click_threshold()
    }

    pub fn rect(&self) -> Rect {
        Rect::from_two_pos(self.start, self.current)
    }
}
