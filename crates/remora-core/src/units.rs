//! CSS length parsing.
//!
//! All real call sites receive resolved pixel-equivalent values from computed style, so
//! non-percentage units pass their numeric value through unchanged; only `%` needs a
//! reference box to resolve against (see `corner_offsets`).

use regex::Regex;

use crate::error::{Error, Result};

/// Unit of a parsed CSS length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Px,
    Em,
    Rem,
    Vh,
    Vw,
    In,
    Cm,
    Mm,
    Pt,
    Percent,
}

/// A parsed `<number><unit>` CSS length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthValue {
    pub value: f64,
    pub unit: LengthUnit,
}

/// Parses a CSS length like `"4px"` or `"50%"`.
///
/// Negative values and bare numbers are rejected; computed style never produces them for
/// border radii.
pub fn parse_length(css_value: &str) -> Result<LengthValue> {
    let re = Regex::new(r"^(\d+(?:\.\d+)?)(px|em|rem|vh|vw|in|cm|mm|pt|%)$").unwrap();

    let caps = re.captures(css_value).ok_or_else(|| Error::InvalidLength {
        value: css_value.to_string(),
    })?;

    let value: f64 = caps[1].parse().map_err(|_| Error::InvalidLength {
        value: css_value.to_string(),
    })?;

    let unit = match &caps[2] {
        "px" => LengthUnit::Px,
        "em" => LengthUnit::Em,
        "rem" => LengthUnit::Rem,
        "vh" => LengthUnit::Vh,
        "vw" => LengthUnit::Vw,
        "in" => LengthUnit::In,
        "cm" => LengthUnit::Cm,
        "mm" => LengthUnit::Mm,
        "pt" => LengthUnit::Pt,
        _ => LengthUnit::Percent,
    };

    Ok(LengthValue { value, unit })
}
