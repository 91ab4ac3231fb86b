use thiserror::Error;

use crate::api::types::ControllerId;

/// Errors surfaced by construction and configuration.
/// The per-tick pipeline itself never fails once inputs are validated.
#[derive(Debug, Error)]
pub enum ArenaError {
    /// A box was built with zero, negative or non-finite extents.
    #[error("invalid box geometry: {width} x {height}")]
    InvalidGeometry { width: f32, height: f32 },
    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// The configuration JSON could not be parsed.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    /// An entity referenced a controller that was never registered.
    #[error("unknown controller {0:?}")]
    UnknownController(ControllerId),
}
