use remora_core::model::{Alignment, Bounds, PanelBounds, PlacementOptions, Position};
use remora_core::spacers_bounds;

/// A 60x20 panel with 10px gaps on both axes.
fn panel() -> PanelBounds {
    PanelBounds {
        top: 0.0,
        right: 60.0,
        bottom: 20.0,
        left: 0.0,
        offset_x: 10.0,
        offset_y: 10.0,
    }
}

fn options(position: Position, alignment: Alignment) -> PlacementOptions {
    PlacementOptions::new(position, alignment)
}

#[test]
fn above_center_spans_the_gap_below_the_panel() {
    let spacers = spacers_bounds(&panel(), options(Position::Above, Alignment::Center));

    assert_eq!(spacers.before, None);
    assert_eq!(
        spacers.after,
        Some(Bounds::new(20.0, 0.0, -10.0, 0.0))
    );
}

#[test]
fn below_center_spans_the_gap_above_the_panel() {
    let spacers = spacers_bounds(&panel(), options(Position::Below, Alignment::Center));

    assert_eq!(
        spacers.before,
        Some(Bounds::new(-10.0, 0.0, 20.0, 0.0))
    );
    assert_eq!(spacers.after, None);
}

#[test]
fn before_center_spans_the_gap_after_the_panel() {
    let spacers = spacers_bounds(&panel(), options(Position::Before, Alignment::Center));

    assert_eq!(
        spacers.before,
        Some(Bounds::new(0.0, -10.0, 0.0, 60.0))
    );
    assert_eq!(spacers.after, None);
}

#[test]
fn after_center_spans_the_gap_before_the_panel() {
    let spacers = spacers_bounds(&panel(), options(Position::After, Alignment::Center));

    assert_eq!(
        spacers.before,
        Some(Bounds::new(0.0, 60.0, 0.0, -10.0))
    );
    assert_eq!(spacers.after, None);
}

#[test]
fn above_start_bevels_around_the_top_left_corner() {
    let spacers = spacers_bounds(&panel(), options(Position::Above, Alignment::Start));

    assert_eq!(
        spacers.before,
        Some(Bounds::new(20.0, -10.0, -25.0, 45.0))
    );
    assert_eq!(
        spacers.after,
        Some(Bounds::new(5.0, -25.0, -10.0, 60.0))
    );
}

#[test]
fn above_end_bevels_around_the_top_right_corner() {
    let spacers = spacers_bounds(&panel(), options(Position::Above, Alignment::End));

    assert_eq!(
        spacers.before,
        Some(Bounds::new(5.0, 60.0, -10.0, -25.0))
    );
    assert_eq!(
        spacers.after,
        Some(Bounds::new(20.0, 45.0, -25.0, -10.0))
    );
}

#[test]
fn below_start_bevels_around_the_bottom_left_corner() {
    let spacers = spacers_bounds(&panel(), options(Position::Below, Alignment::Start));

    assert_eq!(
        spacers.before,
        Some(Bounds::new(-25.0, -10.0, 20.0, 45.0))
    );
    assert_eq!(
        spacers.after,
        Some(Bounds::new(-10.0, -25.0, 5.0, 60.0))
    );
}

#[test]
fn below_end_bevels_around_the_bottom_right_corner() {
    let spacers = spacers_bounds(&panel(), options(Position::Below, Alignment::End));

    assert_eq!(
        spacers.before,
        Some(Bounds::new(-10.0, 60.0, 5.0, -25.0))
    );
    assert_eq!(
        spacers.after,
        Some(Bounds::new(-25.0, 45.0, 20.0, -10.0))
    );
}

#[test]
fn side_positions_share_the_corner_tables() {
    // before/start and above/start both resolve to the top-left corner table.
    let from_before = spacers_bounds(&panel(), options(Position::Before, Alignment::Start));
    let from_above = spacers_bounds(&panel(), options(Position::Above, Alignment::Start));

    assert_eq!(from_before, from_above);
}
