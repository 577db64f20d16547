//! Paper sizes and page setup for tiled printing.
//!
//! A [`PageSettings`] describes one physical sheet: its size, its
//! orientation and the margin kept blank on every side. The area left after
//! subtracting margins is the "safe" area that one tile of the pattern fills.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TilingError;
use crate::units::cm_to_px;

/// Standard paper sizes (portrait dimensions in centimetres)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    A0,
    A1,
    A2,
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    /// Arbitrary sheet, for plotters and roll paper
    Custom { width_cm: f64, height_cm: f64 },
}

impl PaperSize {
    /// Portrait width and height in centimetres.
    pub fn dimensions_cm(&self) -> (f64, f64) {
        match *self {
            Self::A0 => (84.1, 118.9),
            Self::A1 => (59.4, 84.1),
            Self::A2 => (42.0, 59.4),
            Self::A3 => (29.7, 42.0),
            Self::A4 => (21.0, 29.7),
            Self::A5 => (14.8, 21.0),
            Self::Letter => (21.59, 27.94),
            Self::Legal => (21.59, 35.56),
            Self::Tabloid => (27.94, 43.18),
            Self::Custom {
                width_cm,
                height_cm,
            } => (width_cm, height_cm),
        }
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A0 => write!(f, "A0"),
            Self::A1 => write!(f, "A1"),
            Self::A2 => write!(f, "A2"),
            Self::A3 => write!(f, "A3"),
            Self::A4 => write!(f, "A4"),
            Self::A5 => write!(f, "A5"),
            Self::Letter => write!(f, "Letter"),
            Self::Legal => write!(f, "Legal"),
            Self::Tabloid => write!(f, "Tabloid"),
            Self::Custom {
                width_cm,
                height_cm,
            } => write!(f, "{}x{} cm", width_cm, height_cm),
        }
    }
}

/// Sheet orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Page setup consumed by the tiler
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSettings {
    pub paper: PaperSize,
    #[serde(default)]
    pub orientation: Orientation,
    /// Blank margin on every side, in centimetres
    #[serde(default = "default_margin_cm")]
    pub margin_cm: f64,
    /// Emit tiles that contain no figure (keeps the assembly grid complete)
    #[serde(default)]
    pub include_blank_pages: bool,
}

fn default_margin_cm() -> f64 {
    1.0
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            paper: PaperSize::A4,
            orientation: Orientation::Portrait,
            margin_cm: default_margin_cm(),
            include_blank_pages: false,
        }
    }
}

impl PageSettings {
    pub fn new(paper: PaperSize, orientation: Orientation, margin_cm: f64) -> Self {
        Self {
            paper,
            orientation,
            margin_cm,
            include_blank_pages: false,
        }
    }

    pub fn with_blank_pages(mut self, include: bool) -> Self {
        self.include_blank_pages = include;
        self
    }

    /// Sheet width and height in centimetres with orientation applied.
    pub fn page_size_cm(&self) -> (f64, f64) {
        let (w, h) = self.paper.dimensions_cm();
        match self.orientation {
            Orientation::Portrait => (w.min(h), w.max(h)),
            Orientation::Landscape => (w.max(h), w.min(h)),
        }
    }

    /// Printable width and height in centimetres.
    ///
    /// Fails when the margins leave no positive area.
    pub fn safe_size_cm(&self) -> Result<(f64, f64), TilingError> {
        let (w, h) = self.page_size_cm();
        let safe_w = w - 2.0 * self.margin_cm;
        let safe_h = h - 2.0 * self.margin_cm;
        if !(safe_w > 0.0 && safe_h > 0.0) {
            return Err(TilingError::EmptyPrintableArea {
                width_cm: w,
                height_cm: h,
                margin_cm: self.margin_cm,
            });
        }
        Ok((safe_w, safe_h))
    }

    /// Printable width and height in pixels.
    pub fn safe_size_px(&self) -> Result<(f64, f64), TilingError> {
        let (w, h) = self.safe_size_cm()?;
        Ok((cm_to_px(w), cm_to_px(h)))
    }
}
