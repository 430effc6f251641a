//! Connector spacer geometry.
//!
//! Spacers are the invisible filler shapes bridging the gap between anchor and panel so
//! the pointer can travel across without the panel losing hover. Center alignments get a
//! single rectangle spanning the full gap; corner alignments get a pair of bevelled
//! rectangles that bend around the anchor's rounded corner instead of crossing it.
//!
//! All rectangles are edge offsets relative to the panel, negative values extending past
//! the panel's own box into the gap.

use crate::model::{
    Alignment, Bounds, Corner, PanelBounds, PlacementOptions, Position, SpacersBounds,
};

/// Diagonal cut of the bevelled corner rectangles, in pixels. Fixed design parameter.
const SPACER_BEVEL: f64 = 15.0;

/// Computes the spacer rectangles for a resolved placement.
pub fn spacers_bounds(panel: &PanelBounds, options: PlacementOptions) -> SpacersBounds {
    match options.position {
        Position::Above => above_spacers(panel, options),
        Position::Below => below_spacers(panel, options),
        Position::Before => before_spacers(panel, options),
        Position::After => after_spacers(panel, options),
    }
}

fn above_spacers(panel: &PanelBounds, options: PlacementOptions) -> SpacersBounds {
    if options.alignment == Alignment::Center {
        return SpacersBounds {
            before: None,
            after: Some(Bounds {
                top: panel.height(),
                bottom: -panel.offset_y,
                right: 0.0,
                left: 0.0,
            }),
        };
    }

    corner_spacers(panel, options)
}

fn below_spacers(panel: &PanelBounds, options: PlacementOptions) -> SpacersBounds {
    if options.alignment == Alignment::Center {
        return SpacersBounds {
            before: Some(Bounds {
                top: -panel.offset_y,
                bottom: panel.height(),
                right: 0.0,
                left: 0.0,
            }),
            after: None,
        };
    }

    corner_spacers(panel, options)
}

fn before_spacers(panel: &PanelBounds, options: PlacementOptions) -> SpacersBounds {
    if options.alignment == Alignment::Center {
        return SpacersBounds {
            before: Some(Bounds {
                top: 0.0,
                bottom: 0.0,
                right: -panel.offset_x,
                left: panel.width(),
            }),
            after: None,
        };
    }

    corner_spacers(panel, options)
}

fn after_spacers(panel: &PanelBounds, options: PlacementOptions) -> SpacersBounds {
    if options.alignment == Alignment::Center {
        return SpacersBounds {
            before: Some(Bounds {
                top: 0.0,
                bottom: 0.0,
                right: panel.width(),
                left: -panel.offset_x,
            }),
            after: None,
        };
    }

    corner_spacers(panel, options)
}

fn corner_spacers(panel: &PanelBounds, options: PlacementOptions) -> SpacersBounds {
    // Non-center alignments always map to a corner.
    let Some(corner) = Corner::from_options(options.position, options.alignment) else {
        return SpacersBounds::default();
    };

    match corner {
        Corner::TopLeft => top_left_spacers(panel),
        Corner::TopRight => top_right_spacers(panel),
        Corner::BottomLeft => bottom_left_spacers(panel),
        Corner::BottomRight => bottom_right_spacers(panel),
    }
}

fn top_left_spacers(panel: &PanelBounds) -> SpacersBounds {
    SpacersBounds {
        before: Some(Bounds {
            top: panel.height(),
            bottom: -(panel.offset_y + SPACER_BEVEL),
            right: -panel.offset_x,
            left: panel.width() - SPACER_BEVEL,
        }),
        after: Some(Bounds {
            top: panel.height() - SPACER_BEVEL,
            bottom: -panel.offset_y,
            right: -(panel.offset_x + SPACER_BEVEL),
            left: panel.width(),
        }),
    }
}

fn top_right_spacers(panel: &PanelBounds) -> SpacersBounds {
    SpacersBounds {
        before: Some(Bounds {
            top: panel.height() - SPACER_BEVEL,
            bottom: -panel.offset_y,
            right: panel.width(),
            left: -(panel.offset_x + SPACER_BEVEL),
        }),
        after: Some(Bounds {
            top: panel.height(),
            bottom: -(panel.offset_y + SPACER_BEVEL),
            right: panel.width() - SPACER_BEVEL,
            left: -panel.offset_x,
        }),
    }
}

fn bottom_left_spacers(panel: &PanelBounds) -> SpacersBounds {
    SpacersBounds {
        before: Some(Bounds {
            top: -(panel.offset_y + SPACER_BEVEL),
            bottom: panel.height(),
            right: -panel.offset_x,
            left: panel.width() - SPACER_BEVEL,
        }),
        after: Some(Bounds {
            top: -panel.offset_y,
            bottom: panel.height() - SPACER_BEVEL,
            right: -(panel.offset_x + SPACER_BEVEL),
            left: panel.width(),
        }),
    }
}

fn bottom_right_spacers(panel: &PanelBounds) -> SpacersBounds {
    SpacersBounds {
        before: Some(Bounds {
            top: -panel.offset_y,
            bottom: panel.height() - SPACER_BEVEL,
            right: panel.width(),
            left: -(panel.offset_x + SPACER_BEVEL),
        }),
        after: Some(Bounds {
            top: -(panel.offset_y + SPACER_BEVEL),
            bottom: panel.height(),
            right: panel.width() - SPACER_BEVEL,
            left: -panel.offset_x,
        }),
    }
}
