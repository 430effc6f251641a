//! Raw candidate coordinates for a `(position, alignment)` pair.
//!
//! Coordinates come out edge-relative: `above` and `start`-aligned placements measure from
//! the far window edge (`bottom`/`right`) so the renderer can pin the panel to the edge that
//! keeps it attached to the anchor while its content grows.

use crate::model::{
    Alignment, Coords, Corner, CornerOffsets, PlacementOptions, PlacementRequest, Position, XSide,
    YSide,
};

/// Computes the candidate coordinates for `options`, including the alignment-based
/// corner-offset correction.
pub fn position_coords(req: &PlacementRequest, options: PlacementOptions) -> Coords {
    match options.position {
        Position::Above => above_coords(req, options),
        Position::After => after_coords(req, options),
        Position::Below => below_coords(req, options),
        Position::Before => before_coords(req, options),
    }
}

fn above_coords(req: &PlacementRequest, options: PlacementOptions) -> Coords {
    let x = align_horizontally(req, options.alignment);
    let y = req.window.height - req.anchor.top + req.panel.offset_y;

    let x_side = if options.alignment == Alignment::Start {
        XSide::Right
    } else {
        XSide::Left
    };

    adjust_coords(
        Coords {
            x,
            y,
            x_side,
            y_side: YSide::Bottom,
            options,
        },
        &req.corner_offsets,
    )
}

fn below_coords(req: &PlacementRequest, options: PlacementOptions) -> Coords {
    let x = align_horizontally(req, options.alignment);
    let y = req.anchor.bottom + req.panel.offset_y;

    let x_side = if options.alignment == Alignment::Start {
        XSide::Right
    } else {
        XSide::Left
    };

    adjust_coords(
        Coords {
            x,
            y,
            x_side,
            y_side: YSide::Top,
            options,
        },
        &req.corner_offsets,
    )
}

fn before_coords(req: &PlacementRequest, options: PlacementOptions) -> Coords {
    let x = req.window.width - req.anchor.left + req.panel.offset_x;
    let y = align_vertically(req, options.alignment);

    let y_side = if options.alignment == Alignment::Start {
        YSide::Bottom
    } else {
        YSide::Top
    };

    adjust_coords(
        Coords {
            x,
            y,
            x_side: XSide::Right,
            y_side,
            options,
        },
        &req.corner_offsets,
    )
}

fn after_coords(req: &PlacementRequest, options: PlacementOptions) -> Coords {
    let x = req.anchor.right + req.panel.offset_x;
    let y = align_vertically(req, options.alignment);

    let y_side = if options.alignment == Alignment::Start {
        YSide::Bottom
    } else {
        YSide::Top
    };

    adjust_coords(
        Coords {
            x,
            y,
            x_side: XSide::Left,
            y_side,
            options,
        },
        &req.corner_offsets,
    )
}

/// Offset along the horizontal axis for `above`/`below` placements. `start` measures from
/// the right window edge so the panel's left edge sits flush with the anchor's left edge.
fn align_horizontally(req: &PlacementRequest, alignment: Alignment) -> f64 {
    match alignment {
        Alignment::Start => req.window.width - req.anchor.left + req.panel.offset_x,
        Alignment::Center => {
            req.anchor.left + (req.anchor.width() - req.panel.width()) / 2.0
        }
        Alignment::End => req.anchor.right + req.panel.offset_x,
    }
}

/// Offset along the vertical axis for `before`/`after` placements; same edge semantics as
/// [`align_horizontally`].
fn align_vertically(req: &PlacementRequest, alignment: Alignment) -> f64 {
    match alignment {
        Alignment::Start => req.window.height - req.anchor.top + req.panel.offset_y,
        Alignment::Center => {
            req.anchor.top + (req.anchor.height() - req.panel.height()) / 2.0
        }
        Alignment::End => req.anchor.bottom + req.panel.offset_y,
    }
}

/// Pulls a non-center alignment point inward past the anchor's rounded corner.
fn adjust_coords(mut coords: Coords, corner_offsets: &CornerOffsets) -> Coords {
    if let Some(corner) = Corner::from_options(coords.options.position, coords.options.alignment) {
        let offset = corner_offsets.get(corner);

        coords.x -= offset.x;
        coords.y -= offset.y;
    }

    coords
}
