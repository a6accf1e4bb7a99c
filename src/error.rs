// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for fit and caption computations.

use thiserror::Error;

/// Errors reported by the geometry layer.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FitError {
    /// A width or height is zero, negative, NaN or infinite.
    #[error("invalid dimension {name}: {value} (must be positive and finite)")]
    InvalidDimension { name: &'static str, value: f64 },

    /// A relative caption coordinate is outside `[0, 1]` or not finite.
    #[error("invalid fraction {name}: {value} (must be within 0..=1)")]
    InvalidFraction { name: &'static str, value: f64 },

    /// The top caption would not sit above the bottom caption.
    #[error("top caption ({top}) must be above bottom caption ({bottom})")]
    CaptionOrder { top: f64, bottom: f64 },
}

/// Check that a dimension is usable as a divisor and as an extent.
pub(crate) fn require_dimension(name: &'static str, value: f64) -> Result<f64, FitError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FitError::InvalidDimension { name, value })
    }
}
