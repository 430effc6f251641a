use remora_core::corner_offsets;
use remora_core::geom::point;
use remora_core::model::{Bounds, ElementRadii};

fn anchor_100x40() -> Bounds {
    Bounds::new(0.0, 100.0, 40.0, 0.0)
}

#[test]
fn zero_radius_produces_zero_offsets() {
    let offsets = corner_offsets(&ElementRadii::uniform("0px"), &anchor_100x40()).unwrap();

    assert_eq!(offsets.top_left, point(0.0, 0.0));
    assert_eq!(offsets.top_right, point(0.0, 0.0));
    assert_eq!(offsets.bottom_left, point(0.0, 0.0));
    assert_eq!(offsets.bottom_right, point(0.0, 0.0));
}

#[test]
fn pixel_radius_uses_the_45_degree_sagitta() {
    // 10 - 10 * cos(45°) = 2.9289..., rounded to 2 decimals on both axes.
    let offsets = corner_offsets(&ElementRadii::uniform("10px"), &anchor_100x40()).unwrap();

    assert_eq!(offsets.top_left, point(2.93, 2.93));
}

#[test]
fn percent_radius_resolves_against_the_anchor_box() {
    // 50% over a 100x40 box: rx = 50, ry = 20 before the 45° correction.
    let offsets = corner_offsets(&ElementRadii::uniform("50%"), &anchor_100x40()).unwrap();

    // rx - rx * cos(45°) = 14.6446..., ry - ry * sin(45°) = 5.8578...
    assert_eq!(offsets.top_right, point(14.64, 5.86));
}

#[test]
fn corners_resolve_independently() {
    let radii = ElementRadii {
        top_left: "10px".to_string(),
        top_right: "0px".to_string(),
        bottom_left: "50%".to_string(),
        bottom_right: "0px".to_string(),
    };

    let offsets = corner_offsets(&radii, &anchor_100x40()).unwrap();

    assert_eq!(offsets.top_left, point(2.93, 2.93));
    assert_eq!(offsets.top_right, point(0.0, 0.0));
    assert_eq!(offsets.bottom_left, point(14.64, 5.86));
    assert_eq!(offsets.bottom_right, point(0.0, 0.0));
}

#[test]
fn malformed_radius_is_an_error() {
    let radii = ElementRadii::uniform("circle");

    assert!(corner_offsets(&radii, &anchor_100x40()).is_err());
}
