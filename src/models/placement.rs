// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Fitted image placement.
//!
//! A [`Placement`] is the rectangle, in surface coordinates with the origin
//! at the top-left, at which a fitted image is drawn.

use super::dimensions::{Image, Surface};
use serde::{Deserialize, Serialize};

/// Offsets closer to zero than this are treated as zero.
const AXIS_EPSILON: f64 = 1e-9;

/// The axis along which leftover space was split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CenteringAxis {
    /// Image spans the full height; bars left and right.
    Horizontal,
    /// Image spans the full width; bars top and bottom.
    Vertical,
    /// Exact aspect match, no bars.
    None,
}

/// Size and top-left offset of a fitted image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub width: f64,
    pub height: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Placement {
    /// X coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.offset_x + self.width
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.offset_y + self.height
    }

    /// Uniform scale factor from the image's natural size to this placement.
    pub fn scale(&self, image: &Image) -> f64 {
        self.width / image.width
    }

    /// Which axis carries the letterbox bars.
    pub fn centering_axis(&self) -> CenteringAxis {
        if self.offset_x > AXIS_EPSILON {
            CenteringAxis::Horizontal
        } else if self.offset_y > AXIS_EPSILON {
            CenteringAxis::Vertical
        } else {
            CenteringAxis::None
        }
    }

    /// Check that the rectangle lies inside the surface, allowing `eps` slack.
    pub fn fits_within(&self, surface: &Surface, eps: f64) -> bool {
        self.offset_x >= -eps
            && self.offset_y >= -eps
            && self.right() <= surface.width + eps
            && self.bottom() <= surface.height + eps
    }
}
