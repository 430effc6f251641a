//! Corner-offset computation for rounded anchors.
//!
//! A perfectly square alignment point sitting exactly on a rounded corner would visually
//! overlap the curve. Each offset pulls the alignment point inward by the curve's sagitta
//! at the fixed 45° reference angle, which looks correct for typical small-to-medium radii
//! on both circular and elliptical corners.

use std::f64::consts::FRAC_PI_4;

use crate::error::Result;
use crate::geom::{Point, point};
use crate::model::{Bounds, CornerOffsets, ElementRadii};
use crate::units::{LengthUnit, parse_length};

/// Resolves the anchor's four corner-radius strings into per-corner pixel corrections.
///
/// Fails only on a malformed radius string, which is a caller-contract violation
/// (computed style always matches the expected pattern).
pub fn corner_offsets(radii: &ElementRadii, bounds: &Bounds) -> Result<CornerOffsets> {
    Ok(CornerOffsets {
        top_left: offsets(bounds, &radii.top_left)?,
        top_right: offsets(bounds, &radii.top_right)?,
        bottom_left: offsets(bounds, &radii.bottom_left)?,
        bottom_right: offsets(bounds, &radii.bottom_right)?,
    })
}

fn offsets(bounds: &Bounds, css_value: &str) -> Result<Point> {
    let (rx, ry) = pixel_radii(bounds, css_value)?;

    let x = rx - rx * FRAC_PI_4.cos();
    let y = ry - ry * FRAC_PI_4.sin();

    Ok(point(round2(x), round2(y)))
}

/// Resolves a radius string to `(rx, ry)` pixel radii. Percentages resolve against the
/// anchor box width and height respectively; every other unit is already pixel-equivalent.
fn pixel_radii(bounds: &Bounds, css_value: &str) -> Result<(f64, f64)> {
    let length = parse_length(css_value)?;

    if length.unit == LengthUnit::Percent {
        let fraction = length.value / 100.0;
        return Ok((bounds.width() * fraction, bounds.height() * fraction));
    }

    Ok((length.value, length.value))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
