//! Error types for chain setup and routing
//!
//! Everything here is a configuration or topology bug. Gesture anomalies
//! (over-scroll, zero widths, cancelled drags) are absorbed by clamping
//! and never surface as errors.

use thiserror::Error;

use crate::panel::LayerNumber;

pub type Result<T> = std::result::Result<T, PanelError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    #[error("layer {0} is already registered")]
    DuplicateLayer(LayerNumber),

    #[error("layer {0} is not part of the chain")]
    UnknownLayer(LayerNumber),

    #[error("invalid geometry: {field} must not be negative (got {value})")]
    InvalidGeometry { field: &'static str, value: i32 },

    #[error("layer {layer} cannot link to child {child}: layer numbers must be dense from 1")]
    NonContiguousLayer {
        layer: LayerNumber,
        child: LayerNumber,
    },

    #[error("layer {0} is the chain terminus and has nothing to reveal")]
    TerminalLayer(LayerNumber),

    #[error("slide duration must be positive (got {0} ms)")]
    InvalidDuration(u32),

    #[error("a chain needs a slidable layer and a terminus (got {0} panel widths)")]
    TooFewPanels(usize),
}

impl PanelError {
    /// Build an `InvalidGeometry` error if `value` is negative
    pub(crate) fn check_non_negative(field: &'static str, value: i32) -> Result<()> {
        if value < 0 {
            Err(PanelError::InvalidGeometry { field, value })
        } else {
            Ok(())
        }
    }
}
