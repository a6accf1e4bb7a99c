// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Input dimensions for fitting.
//!
//! This module defines the drawing surface and the source image size, both
//! plain value records measured in pixels.

use serde::{Deserialize, Serialize};

/// The fixed display area an image is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

impl Surface {
    /// Create a surface with the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

impl Default for Surface {
    /// The square meme canvas.
    fn default() -> Self {
        Self::new(400.0, 400.0)
    }
}

/// Natural pixel size of a source image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub width: f64,
    pub height: f64,
}

impl Image {
    /// Create an image size record.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Create an image size from decoded pixel dimensions.
    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self::new(f64::from(width), f64::from(height))
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// Parse a `WIDTHxHEIGHT` string such as `640x480`.
pub fn parse_size(s: &str) -> Result<(f64, f64), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
    let width: f64 = w
        .trim()
        .parse()
        .map_err(|_| format!("invalid width '{}'", w))?;
    let height: f64 = h
        .trim()
        .parse()
        .map_err(|_| format!("invalid height '{}'", h))?;
    Ok((width, height))
}
