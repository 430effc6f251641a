//! Fit evaluation for one placement candidate.

use crate::model::{
    Bounds, Coords, FitReport, Overflow, PanelBounds, Position, WindowSize, XSide, YSide,
};

/// Checks whether `coords` keeps the panel inside `container`.
///
/// `position` always names the primary placement axis (perpendicular to the anchor edge)
/// and `alignment` the secondary one, so for `before`/`after` the horizontal and vertical
/// verdicts swap dimensions. This routes each failure to the search dimension that can
/// actually fix it.
pub fn evaluate_fit(
    coords: &Coords,
    panel: &PanelBounds,
    container: &Bounds,
    window: WindowSize,
) -> FitReport {
    let bounds = bounds_from_coords(panel, coords, window);

    let fits_left = bounds.left >= container.left;
    let fits_right = bounds.right <= container.right;
    let fits_top = bounds.top >= container.top;
    let fits_bottom = bounds.bottom <= container.bottom;

    let mut report = FitReport {
        position: fits_top && fits_bottom,
        alignment: fits_left && fits_right,
        overflow: Overflow {
            top: fits_top,
            right: fits_right,
            bottom: fits_bottom,
            left: fits_left,
        },
    };

    if coords.options.position == Position::Before || coords.options.position == Position::After {
        report.position = fits_left && fits_right;
        report.alignment = fits_top && fits_bottom;
    }

    report
}

/// Reconstructs the panel's absolute screen bounds from the edge-relative coordinate pair,
/// inverting the `right`/`bottom` measurement against the window dimensions.
pub fn bounds_from_coords(panel: &PanelBounds, coords: &Coords, window: WindowSize) -> Bounds {
    let mut bounds = Bounds {
        top: coords.y,
        right: coords.x + panel.width(),
        bottom: coords.y + panel.height(),
        left: coords.x,
    };

    if coords.x_side == XSide::Right {
        bounds.right = window.width - coords.x;
        bounds.left = window.width - coords.x - panel.width();
    }

    if coords.y_side == YSide::Bottom {
        bounds.top = window.height - coords.y - panel.height();
        bounds.bottom = window.height - coords.y;
    }

    bounds
}
