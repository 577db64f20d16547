//! # PatternKit Core
//!
//! Core types and utilities shared by every PatternKit crate.
//! Provides the error taxonomy, the pixel/real-world unit conversion and the
//! paper and page setup used for tiled printing.

pub mod error;
pub mod page;
pub mod units;

pub use error::{ConfigError, Error, ModelError, Result, TilingError};
pub use page::{Orientation, PageSettings, PaperSize};
pub use units::{cm_to_px, format_length, px_to_cm, MeasurementSystem, PX_PER_CM};
