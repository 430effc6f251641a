#![forbid(unsafe_code)]

//! Headless adaptive placement engine for anchored floating panels (tooltips).
//!
//! Given the anchor's bounds, the measured panel bounds and a bounded container,
//! the engine searches the finite `(position, alignment)` option space for the
//! first pair whose resolved coordinates fit inside the container, falling back
//! to a clamped absolute placement when no pair fits. It also derives the
//! auxiliary geometry a renderer needs to attach the panel seamlessly: per-corner
//! offsets for rounded anchors and connector "spacer" rectangles.
//!
//! Design goals:
//! - pure, deterministic geometry (no DOM, no timers, no rendering)
//! - coordinates stay edge-relative (`left`/`right` + `top`/`bottom` pairs) so a
//!   renderer can apply them directly as style offsets without translation

pub mod absolute;
pub mod config;
pub mod corner_offsets;
pub mod error;
pub mod fit;
pub mod geom;
pub mod model;
pub mod options;
pub mod position;
pub mod search;
pub mod spacers;
pub mod units;

pub use absolute::absolute_coords;
pub use config::PlacementConfig;
pub use corner_offsets::corner_offsets;
pub use error::{Error, Result};
pub use fit::evaluate_fit;
pub use model::{
    Alignment, Bounds, Coords, Corner, CornerOffsets, ElementRadii, FitReport, Overflow,
    PanelBounds, PlacementOptions, PlacementRequest, Position, SpacersBounds, WindowSize, XSide,
    YSide,
};
pub use options::OptionSpace;
pub use position::position_coords;
pub use search::{CONTAINER_INSETS, available_coords, is_visible, resolve};
pub use spacers::spacers_bounds;
pub use units::{LengthUnit, LengthValue, parse_length};
