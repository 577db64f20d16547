//! Unit conversion utilities
//!
//! Geometry is stored in screen pixels. Real-world sizes only appear at the
//! edges of the kernel (measurement display and tiled export), so the
//! conversion lives here and nowhere in the geometry primitives.
//!
//! Handles conversion between Metric (cm) and Imperial (inch) display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pixels per centimetre at 96 dpi.
pub const PX_PER_CM: f64 = 96.0 / 2.54;

/// Centimetres per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Convert a pixel distance to centimetres
#[inline]
pub fn px_to_cm(px: f64) -> f64 {
    px / PX_PER_CM
}

/// Convert centimetres to a pixel distance
#[inline]
pub fn cm_to_px(cm: f64) -> f64 {
    cm * PX_PER_CM
}

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (cm)
    #[default]
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "cm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Format a length for display
///
/// * `value_cm` - Value in centimetres
/// * `system` - Target measurement system
/// * `decimals` - Number of decimal places
pub fn format_length(value_cm: f64, system: MeasurementSystem, decimals: usize) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.*} cm", decimals, value_cm),
        MeasurementSystem::Imperial => format!("{:.*} in", decimals, value_cm / CM_PER_INCH),
    }
}
