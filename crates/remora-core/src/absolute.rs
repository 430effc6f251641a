//! Best-effort clamped placement for when no `(position, alignment)` pair fits.

use crate::model::{
    Alignment, Bounds, Coords, PlacementOptions, PlacementRequest, Position, XSide, YSide,
};
use crate::search::CONTAINER_INSETS;

/// Pins the panel to the container when the placement search is exhausted.
///
/// `container` is the already-inset container the search ran against. The panel defaults
/// to above-center of the anchor; the horizontal coordinate is clamped to the nearest
/// container edge (or centered in the container when the panel is wider than it), and a
/// vertical overflow past the container's top flips the panel below the container's top
/// edge instead of above the anchor.
///
/// The returned options are always `{above, center}` regardless of the geometry actually
/// used. Known quirk, kept for parity with the upstream engine; renderers only use the
/// options for the transform origin, where above-center is an acceptable default.
pub fn absolute_coords(req: &PlacementRequest, container: &Bounds) -> Coords {
    let mut container = *container;

    if container.top < 0.0 {
        container.top = CONTAINER_INSETS;
    }

    if container.left < 0.0 {
        container.left = CONTAINER_INSETS;
    }

    if container.bottom > req.window.height {
        container.bottom = req.window.height - CONTAINER_INSETS;
    }

    if container.right > req.window.width {
        container.right = req.window.width - CONTAINER_INSETS;
    }

    let panel_width = req.panel.width();

    let mut x = req.anchor.left + (req.anchor.width() - panel_width) / 2.0;
    let mut y = req.window.height - req.anchor.top + req.panel.offset_y;
    let mut x_side = XSide::Left;
    let mut y_side = YSide::Bottom;

    if panel_width >= container.width() {
        x = if req.panel.left <= 0.0 {
            0.0
        } else {
            container.left + (container.width() - panel_width) / 2.0
        };
    } else if x < container.left {
        x = container.left;

        x_side = XSide::Left;
    } else if x + panel_width > container.right {
        x = req.window.width - container.right;

        x_side = XSide::Right;
    }

    if req.window.height - y - req.panel.height() < container.top {
        y = container.top;

        y_side = YSide::Top;
    }

    Coords {
        x,
        y,
        x_side,
        y_side,
        options: PlacementOptions {
            position: Position::Above,
            alignment: Alignment::Center,
        },
    }
}
