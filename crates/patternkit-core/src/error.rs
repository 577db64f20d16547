//! Error handling for PatternKit
//!
//! Provides error types for the layers of the kernel:
//! - Model errors (an operation addressed a figure, node or edge that is not there)
//! - Tiling errors (page setup leaves nothing to print on)
//! - Configuration errors (invalid settings values)
//!
//! Degenerate geometry (zero-length vectors, collinear points, targets the
//! length solver cannot bracket) is never an error: those cases resolve to
//! documented fallback values at the call site.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Model error type
///
/// Raised when an operation addresses an entity by id and the entity is
/// missing or its references are broken.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// No figure with this id exists in the set
    #[error("Unknown figure: {figure_id}")]
    UnknownFigure {
        /// The id that was looked up.
        figure_id: String,
    },

    /// The figure has no node with this id
    #[error("Figure {figure_id} has no node {node_id}")]
    UnknownNode {
        /// The figure that was searched.
        figure_id: String,
        /// The missing node id.
        node_id: String,
    },

    /// The figure has no edge with this id
    #[error("Figure {figure_id} has no edge {edge_id}")]
    UnknownEdge {
        /// The figure that was searched.
        figure_id: String,
        /// The missing edge id.
        edge_id: String,
    },

    /// An edge references a node that does not exist in its figure
    #[error("Edge {edge_id} of figure {figure_id} references missing node {node_id}")]
    DanglingEdge {
        /// The figure owning the edge.
        figure_id: String,
        /// The broken edge.
        edge_id: String,
        /// The node id the edge points at.
        node_id: String,
    },
}

/// Tiling error type
///
/// The kernel failures that stop an export entirely: the page setup leaves no
/// printable area, or the pattern would need an unprintable number of pages.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TilingError {
    /// Margins consume the whole sheet
    #[error("No printable area: page {width_cm}x{height_cm} cm with {margin_cm} cm margins")]
    EmptyPrintableArea {
        /// Page width in centimetres (orientation applied).
        width_cm: f64,
        /// Page height in centimetres (orientation applied).
        height_cm: f64,
        /// Margin on every side in centimetres.
        margin_cm: f64,
    },

    /// Figures are spread so far apart that the plan exceeds the page limit
    #[error("Pattern needs {pages} pages, more than the limit of {limit}")]
    TooManyPages {
        /// Pages the plan would hold.
        pages: usize,
        /// The page limit.
        limit: usize,
    },
}

/// Configuration error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A value is outside its valid range
    #[error("Value out of range for '{key}': {value}")]
    ValueOutOfRange {
        /// The setting key.
        key: String,
        /// The rejected value, formatted.
        value: String,
    },

    /// The configuration file format is not supported
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// The page setup leaves nothing to print on
    #[error(transparent)]
    Tiling(#[from] TilingError),
}

/// Main error type for PatternKit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Model error
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Tiling error
    #[error(transparent)]
    Tiling(#[from] TilingError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check if this is a model error
    pub fn is_model_error(&self) -> bool {
        matches!(self, Error::Model(_))
    }

    /// Check if this error stops an export (page setup problems)
    pub fn is_page_setup_error(&self) -> bool {
        matches!(
            self,
            Error::Tiling(_) | Error::Config(ConfigError::Tiling(_))
        )
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
