//! Request/response message pairs.
//!
//! Wire-compatible with the upstream engine's worker protocol: an internally tagged
//! `type` discriminant, an opaque `id` the caller correlates on, and a typed `data`
//! payload per operation.

use serde::{Deserialize, Serialize};

use remora_core::{
    Bounds, Coords, CornerOffsets, ElementRadii, PanelBounds, PlacementOptions, PlacementRequest,
    SpacersBounds,
};

/// Payload of a spacer-bounds request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacersRequest {
    pub panel: PanelBounds,
    pub options: PlacementOptions,
}

/// Payload of a corner-offsets request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CornerOffsetsRequest {
    pub radii: ElementRadii,
    pub bounds: Bounds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    #[serde(rename = "GET_AVAILABLE_COORDS")]
    AvailableCoords { id: String, data: PlacementRequest },
    #[serde(rename = "GET_SPACERS_BOUNDS")]
    SpacersBounds { id: String, data: SpacersRequest },
    #[serde(rename = "GET_CORNER_OFFSETS")]
    CornerOffsets { id: String, data: CornerOffsetsRequest },
}

impl Request {
    pub fn id(&self) -> &str {
        match self {
            Self::AvailableCoords { id, .. }
            | Self::SpacersBounds { id, .. }
            | Self::CornerOffsets { id, .. } => id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Response {
    /// `data` is `None` when the anchor is entirely outside the container and the panel
    /// should not be rendered.
    #[serde(rename = "GET_AVAILABLE_COORDS")]
    AvailableCoords { id: String, data: Option<Coords> },
    #[serde(rename = "GET_SPACERS_BOUNDS")]
    SpacersBounds { id: String, data: SpacersBounds },
    #[serde(rename = "GET_CORNER_OFFSETS")]
    CornerOffsets { id: String, data: CornerOffsets },
}

impl Response {
    pub fn id(&self) -> &str {
        match self {
            Self::AvailableCoords { id, .. }
            | Self::SpacersBounds { id, .. }
            | Self::CornerOffsets { id, .. } => id,
        }
    }
}
