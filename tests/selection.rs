use eframe::egui::{self, Vec2};
use pixelruler::selection::*;

#[test]
fn from_points_clamps_to_bounds() {
    let bounds = Vec2::new(100.0, 80.0);
    let selection = Selection::from_points(egui::pos2(-10.0, -20.0), egui::pos2(120.0, 90.0), bounds);
    assert_eq!(selection.rect.min, egui::pos2(0.0, 0.0));
    assert_eq!(selection.rect.max, egui::pos2(100.0, 80.0));
}

#[test]
fn from_points_orders_corners_from_any_direction() {
    let bounds = Vec2::new(200.0, 100.0);
    let selection = Selection::from_points(egui::pos2(110.0, 60.0), egui::pos2(10.0, 10.0), bounds);
    assert_eq!(selection.rect.min, egui::pos2(10.0, 10.0));
    assert_eq!(selection.dims(), (100.0, 50.0));
}

#[test]
fn zero_axis_selection_is_measured_but_not_drawable() {
    let bounds = Vec2::new(200.0, 100.0);
    let selection = Selection::from_points(egui::pos2(10.0, 40.0), egui::pos2(60.0, 40.0), bounds);
    assert_eq!(selection.dims(), (50.0, 0.0));
    assert!(!selection.is_drawable());
}

#[test]
fn click_threshold_requires_both_axes_within_bound() {
    let mut drag = DragState::new(egui::pos2(10.0, 10.0), None);
    drag.current = egui::pos2(12.0, 11.0);
    assert!(drag.is_click());

    // Exactly at the threshold still counts as a click.
    drag.current = egui::pos2(15.0, 15.0);
    assert!(drag.is_click());

    // One axis past the threshold is enough for a real drag.
    drag.current = egui::pos2(16.0, 11.0);
    assert!(drag.exceeds_click_threshold());
}

#[test]
fn extent_is_absolute() {
    let mut drag = DragState::new(egui::pos2(50.0, 50.0), None);
    drag.current = egui::pos2(20.0, 80.0);
    assert_eq!(drag.extent(), Vec2::new(30.0, 30.0));
}
