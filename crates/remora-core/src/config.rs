//! Default placement configuration.

use serde::{Deserialize, Serialize};

use crate::model::{Alignment, PlacementOptions, Position};

/// Geometry-relevant placement defaults: the preferred starting pair and the fixed
/// anchor-to-panel gap on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementConfig {
    pub position: Position,
    pub alignment: Alignment,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            position: Position::Above,
            alignment: Alignment::Center,
            offset_x: 10.0,
            offset_y: 10.0,
        }
    }
}

impl PlacementConfig {
    pub fn options(&self) -> PlacementOptions {
        PlacementOptions {
            position: self.position,
            alignment: self.alignment,
        }
    }
}
