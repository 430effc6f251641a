use remora_core::geom::point;
use remora_core::model::{
    Alignment, Bounds, CornerOffsets, PanelBounds, PlacementOptions, PlacementRequest, Position,
    WindowSize, XSide, YSide,
};
use remora_core::position_coords;

/// A 60x30 anchor at (100, 100) with a 60x20 panel and 10px gaps, in a 1000x800 window.
fn request(position: Position, alignment: Alignment) -> PlacementRequest {
    PlacementRequest {
        anchor: Bounds::new(100.0, 160.0, 130.0, 100.0),
        panel: PanelBounds {
            top: 0.0,
            right: 60.0,
            bottom: 20.0,
            left: 0.0,
            offset_x: 10.0,
            offset_y: 10.0,
        },
        options: PlacementOptions::new(position, alignment),
        corner_offsets: CornerOffsets::default(),
        container: Bounds::new(0.0, 1000.0, 800.0, 0.0),
        window: WindowSize {
            width: 1000.0,
            height: 800.0,
        },
    }
}

#[test]
fn above_center_measures_from_the_bottom_edge() {
    let req = request(Position::Above, Alignment::Center);
    let coords = position_coords(&req, req.options);

    // y = 800 - 100 + 10; x centers the 60px panel over the 60px anchor.
    assert_eq!(coords.y, 710.0);
    assert_eq!(coords.y_side, YSide::Bottom);
    assert_eq!(coords.x, 100.0);
    assert_eq!(coords.x_side, XSide::Left);
}

#[test]
fn above_start_measures_x_from_the_right_edge() {
    let req = request(Position::Above, Alignment::Start);
    let coords = position_coords(&req, req.options);

    // x = 1000 - 100 + 10, pinned to the right edge so the panel stays flush with the
    // anchor's left edge.
    assert_eq!(coords.x, 910.0);
    assert_eq!(coords.x_side, XSide::Right);
    assert_eq!(coords.y, 710.0);
}

#[test]
fn above_end_aligns_to_the_anchor_far_edge() {
    let req = request(Position::Above, Alignment::End);
    let coords = position_coords(&req, req.options);

    assert_eq!(coords.x, 170.0);
    assert_eq!(coords.x_side, XSide::Left);
}

#[test]
fn below_measures_from_the_top_edge() {
    let req = request(Position::Below, Alignment::Center);
    let coords = position_coords(&req, req.options);

    assert_eq!(coords.y, 140.0);
    assert_eq!(coords.y_side, YSide::Top);
    assert_eq!(coords.x, 100.0);
}

#[test]
fn before_center_measures_x_from_the_right_edge() {
    let req = request(Position::Before, Alignment::Center);
    let coords = position_coords(&req, req.options);

    assert_eq!(coords.x, 910.0);
    assert_eq!(coords.x_side, XSide::Right);
    // y centers the 20px panel over the 30px anchor.
    assert_eq!(coords.y, 105.0);
    assert_eq!(coords.y_side, YSide::Top);
}

#[test]
fn after_start_measures_y_from_the_bottom_edge() {
    let req = request(Position::After, Alignment::Start);
    let coords = position_coords(&req, req.options);

    assert_eq!(coords.x, 170.0);
    assert_eq!(coords.x_side, XSide::Left);
    assert_eq!(coords.y, 710.0);
    assert_eq!(coords.y_side, YSide::Bottom);
}

#[test]
fn after_end_aligns_to_the_anchor_bottom() {
    let req = request(Position::After, Alignment::End);
    let coords = position_coords(&req, req.options);

    assert_eq!(coords.y, 140.0);
    assert_eq!(coords.y_side, YSide::Top);
}

#[test]
fn corner_offset_is_subtracted_for_corner_alignments() {
    let mut req = request(Position::Above, Alignment::End);
    req.corner_offsets.top_right = point(5.0, 3.0);

    let coords = position_coords(&req, req.options);

    assert_eq!(coords.x, 165.0);
    assert_eq!(coords.y, 707.0);
}

#[test]
fn center_alignment_ignores_corner_offsets() {
    let mut req = request(Position::Above, Alignment::Center);
    req.corner_offsets.top_left = point(5.0, 3.0);
    req.corner_offsets.top_right = point(5.0, 3.0);

    let coords = position_coords(&req, req.options);

    assert_eq!(coords.x, 100.0);
    assert_eq!(coords.y, 710.0);
}
