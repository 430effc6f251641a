//! Bounded backtracking search over the placement option space.

use crate::absolute::absolute_coords;
use crate::fit::evaluate_fit;
use crate::model::{
    Alignment, Bounds, Coords, FitReport, PlacementOptions, PlacementRequest, Position,
};
use crate::options::OptionSpace;
use crate::position::position_coords;

/// Fixed pixel margin kept between the container edge and any placed element.
pub const CONTAINER_INSETS: f64 = 10.0;

/// Resolves a placement request end to end.
///
/// Returns `None` when the anchor does not intersect the container at all (the panel
/// should not be rendered); otherwise always yields usable coordinates, falling back to
/// a clamped absolute placement when no `(position, alignment)` pair fits.
pub fn resolve(req: &PlacementRequest) -> Option<Coords> {
    if !is_visible(&req.anchor, &req.container) {
        return None;
    }

    Some(available_coords(req))
}

/// True iff the anchor's bounds intersect the container on both axes.
pub fn is_visible(anchor: &Bounds, container: &Bounds) -> bool {
    if container.top > anchor.bottom {
        return false;
    }

    if container.bottom < anchor.top {
        return false;
    }

    if container.left > anchor.right {
        return false;
    }

    if container.right < anchor.left {
        return false;
    }

    true
}

/// Searches the 4×3 option space for the first fitting coordinates, starting from the
/// caller's preferred pair. Exhaustion delegates to the absolute fallback; the search
/// itself never iterates more than the finite cross product of options.
pub fn available_coords(req: &PlacementRequest) -> Coords {
    let mut space = OptionSpace::new();
    let container = inset_container(&req.container);
    let mut options = req.options;

    loop {
        let coords = position_coords(req, options);
        let fit = evaluate_fit(&coords, &req.panel, &container, req.window);

        if fit.position && fit.alignment {
            return coords;
        }

        if space.x_alignment().is_empty() && space.y_alignment().is_empty() {
            break;
        }

        if !fit.position {
            tracing::debug!(?options.position, "placement overflows on its primary axis");
            space.exclude_position(options.position);
        }

        if !fit.alignment {
            tracing::debug!(
                ?options.position,
                ?options.alignment,
                "placement overflows on its alignment axis"
            );
            space.exclude_alignment(options.position, options.alignment);
        }

        options = match next_options(options, &fit, &space) {
            Some(next) => next,
            None => break,
        };

        if space.positions_remaining() == 0 {
            break;
        }
    }

    tracing::debug!("option space exhausted, using absolute fallback placement");

    absolute_coords(req, &container)
}

/// Shrinks the container by the fixed inset on all sides.
fn inset_container(container: &Bounds) -> Bounds {
    Bounds {
        top: container.top + CONTAINER_INSETS,
        right: container.right - CONTAINER_INSETS,
        bottom: container.bottom - CONTAINER_INSETS,
        left: container.left + CONTAINER_INSETS,
    }
}

/// The next candidate pair after a failure.
///
/// A position failure flips to the opposite position, pivoting to the perpendicular axis
/// when the opposite is already eliminated; alignment carries over unchanged. An
/// alignment-only failure advances along the current axis with the position unchanged.
fn next_options(
    options: PlacementOptions,
    fit: &FitReport,
    space: &OptionSpace,
) -> Option<PlacementOptions> {
    if !fit.position {
        let mut position = opposite_position(options.position);

        if !space.has_position(position) {
            position = swap_axis(position);
        }

        return Some(PlacementOptions {
            position,
            alignment: options.alignment,
        });
    }

    let alignment = next_alignment(options.alignment, space.axis(options.position))?;

    Some(PlacementOptions {
        position: options.position,
        alignment,
    })
}

const fn opposite_position(position: Position) -> Position {
    match position {
        Position::Above => Position::Below,
        Position::Below => Position::Above,
        Position::Before => Position::After,
        Position::After => Position::Before,
    }
}

const fn swap_axis(position: Position) -> Position {
    match position {
        Position::Above | Position::Below => Position::Before,
        Position::Before | Position::After => Position::Above,
    }
}

/// `start`/`end` collapse to `center`; from `center`, the first remaining side alignment
/// wins. `None` means the current axis is spent.
fn next_alignment(
    alignment: Alignment,
    available: &rustc_hash::FxHashSet<Alignment>,
) -> Option<Alignment> {
    if alignment == Alignment::Start || alignment == Alignment::End {
        return Some(Alignment::Center);
    }

    if available.contains(&Alignment::Start) {
        return Some(Alignment::Start);
    }

    if available.contains(&Alignment::End) {
        return Some(Alignment::End);
    }

    None
}
