//! Core placement types.
//!
//! These are intentionally lightweight and `Clone`-friendly to support deterministic tests and
//! parity-oriented porting from the upstream JS engine. All of them are also the wire shapes of
//! the request/response messages in the `remora` facade, hence the serde derives.

use serde::{Deserialize, Serialize};

use crate::geom::Point;

/// Side of the anchor the panel is placed on (the primary placement axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Above,
    Below,
    Before,
    After,
}

/// Placement along the axis perpendicular to [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Start,
    Center,
    End,
}

/// A corner identity shared by the anchor and the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// The corner a non-center `(position, alignment)` pair aligns to.
    ///
    /// `Center` alignment has no corner: the panel is centered over the anchor's
    /// midpoint and no corner correction applies.
    pub fn from_options(position: Position, alignment: Alignment) -> Option<Self> {
        match (position, alignment) {
            (Position::Above, Alignment::Start) => Some(Self::TopLeft),
            (Position::Above, Alignment::End) => Some(Self::TopRight),
            (Position::Before, Alignment::Start) => Some(Self::TopLeft),
            (Position::Before, Alignment::End) => Some(Self::BottomLeft),
            (Position::Below, Alignment::Start) => Some(Self::BottomLeft),
            (Position::Below, Alignment::End) => Some(Self::BottomRight),
            (Position::After, Alignment::Start) => Some(Self::TopRight),
            (Position::After, Alignment::End) => Some(Self::BottomRight),
            (_, Alignment::Center) => None,
        }
    }
}

/// Which window edge a horizontal coordinate is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XSide {
    Left,
    Right,
}

/// Which window edge a vertical coordinate is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YSide {
    Top,
    Bottom,
}

/// Edge offsets of an element in viewport pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Bounds {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Measured panel bounds plus the fixed anchor-to-panel gap on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PanelBounds {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl PanelBounds {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: f64,
    pub height: f64,
}

/// Per-corner `(x, y)` corrections for rounded anchor corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerOffsets {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
}

impl Default for CornerOffsets {
    fn default() -> Self {
        let zero = crate::geom::point(0.0, 0.0);
        Self {
            top_left: zero,
            top_right: zero,
            bottom_left: zero,
            bottom_right: zero,
        }
    }
}

impl CornerOffsets {
    pub fn get(&self, corner: Corner) -> Point {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomLeft => self.bottom_left,
            Corner::BottomRight => self.bottom_right,
        }
    }
}

/// Per-corner border-radius strings as read from computed style (e.g. `"4px"`, `"50%"`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementRadii {
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
}

impl ElementRadii {
    /// All four corners set to the same radius string.
    pub fn uniform(radius: &str) -> Self {
        Self {
            top_left: radius.to_string(),
            top_right: radius.to_string(),
            bottom_left: radius.to_string(),
            bottom_right: radius.to_string(),
        }
    }

    pub fn get(&self, corner: Corner) -> &str {
        match corner {
            Corner::TopLeft => &self.top_left,
            Corner::TopRight => &self.top_right,
            Corner::BottomLeft => &self.bottom_left,
            Corner::BottomRight => &self.bottom_right,
        }
    }
}

/// The candidate `(position, alignment)` pair under evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementOptions {
    pub position: Position,
    pub alignment: Alignment,
}

impl PlacementOptions {
    pub fn new(position: Position, alignment: Alignment) -> Self {
        Self {
            position,
            alignment,
        }
    }

    /// CSS `transform-origin` keyword pair for show/hide animations growing out of the anchor.
    pub fn transform_origin(self) -> &'static str {
        if self.alignment == Alignment::Start || self.position == Position::Before {
            return "right center";
        }

        if self.alignment == Alignment::End || self.position == Position::After {
            return "left center";
        }

        if self.position == Position::Above {
            return "bottom center";
        }

        "top center"
    }
}

/// A resolved placement.
///
/// `x` and `y` are offsets from the window edge named by `x_side`/`y_side`, not absolute
/// coordinates. A renderer applies them directly as `style.left`/`style.right` and
/// `style.top`/`style.bottom` without further translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub x: f64,
    pub y: f64,
    pub x_side: XSide,
    pub y_side: YSide,
    pub options: PlacementOptions,
}

/// Per-edge containment flags versus the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Overflow {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

/// Outcome of a fit evaluation for one candidate.
///
/// `position` tracks containment on the primary placement axis and `alignment` on the
/// secondary axis, so a failure routes to the matching search dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitReport {
    pub position: bool,
    pub alignment: bool,
    pub overflow: Overflow,
}

/// Connector spacer rectangles, each expressed as edge offsets relative to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpacersBounds {
    pub before: Option<Bounds>,
    pub after: Option<Bounds>,
}

/// Everything a single placement request needs. Self-contained and side-effect-free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementRequest {
    /// Bounds of the element the panel attaches to.
    pub anchor: Bounds,
    /// Measured panel bounds plus the anchor-to-panel gap.
    pub panel: PanelBounds,
    /// The caller's preferred starting pair.
    pub options: PlacementOptions,
    /// Corner corrections for the anchor's rounded corners.
    pub corner_offsets: CornerOffsets,
    /// Bounds the panel must stay inside.
    pub container: Bounds,
    /// Viewport dimensions used for edge-relative measurement.
    pub window: WindowSize,
}
