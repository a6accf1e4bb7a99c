// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Caption text anchors.
//!
//! Captions are drawn center-aligned at fixed fractions of the surface,
//! independent of where the fitted image ends up.

use crate::error::{require_dimension, FitError};
use crate::models::dimensions::Surface;
use serde::{Deserialize, Serialize};

/// Relative placement and styling of the top and bottom captions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CaptionLayout {
    /// Horizontal anchor shared by both captions, as a fraction of width.
    pub horizontal: f64,
    /// Baseline of the top caption, as a fraction of height.
    pub top: f64,
    /// Baseline of the bottom caption, as a fraction of height.
    pub bottom: f64,
    pub font_size_px: f64,
    pub font_family: String,
    /// Text fill color, any CSS color string.
    pub fill: String,
}

impl Default for CaptionLayout {
    fn default() -> Self {
        Self {
            horizontal: 0.5,
            top: 0.14,
            bottom: 0.95,
            font_size_px: 50.0,
            font_family: "Impact".to_string(),
            fill: "white".to_string(),
        }
    }
}

/// A point in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

/// Resolved caption positions for a concrete surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaptionAnchors {
    pub top: Anchor,
    pub bottom: Anchor,
}

impl CaptionLayout {
    /// Check fractions, ordering and font size.
    pub fn validate(&self) -> Result<(), FitError> {
        require_fraction("captions.horizontal", self.horizontal)?;
        require_fraction("captions.top", self.top)?;
        require_fraction("captions.bottom", self.bottom)?;
        if self.top >= self.bottom {
            return Err(FitError::CaptionOrder {
                top: self.top,
                bottom: self.bottom,
            });
        }
        require_dimension("captions.font-size-px", self.font_size_px)?;
        Ok(())
    }

    /// Resolve the caption anchors on `surface`.
    pub fn anchors(&self, surface: &Surface) -> Result<CaptionAnchors, FitError> {
        let width = require_dimension("surface.width", surface.width)?;
        let height = require_dimension("surface.height", surface.height)?;
        self.validate()?;

        let x = width * self.horizontal;
        Ok(CaptionAnchors {
            top: Anchor { x, y: height * self.top },
            bottom: Anchor { x, y: height * self.bottom },
        })
    }
}

fn require_fraction(name: &'static str, value: f64) -> Result<f64, FitError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(FitError::InvalidFraction { name, value })
    }
}
