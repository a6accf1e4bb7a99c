// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Layout report.
//!
//! This module bundles the inputs and computed geometry for one image so
//! the drawing layer (or a person) can consume them in a single document.

use super::dimensions::{Image, Surface};
use super::placement::{CenteringAxis, Placement};
use crate::config::Config;
use crate::error::FitError;
use crate::util::captions::CaptionAnchors;
use crate::util::geometry::compute_fit;
use serde::{Deserialize, Serialize};

/// Complete layout for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_file: Option<String>,
    pub surface: Surface,
    pub image: Image,
    pub placement: Placement,
    /// Uniform scale from natural image size to `placement`.
    pub scale: f64,
    pub centering_axis: CenteringAxis,
    pub background: String,
    pub captions: CaptionAnchors,
    pub caption_fill: String,
}

impl LayoutReport {
    /// Fit `image` into the configured surface and resolve caption anchors.
    pub fn build(config: &Config, image: Image, media_file: Option<String>) -> Result<Self, FitError> {
        let placement = compute_fit(config.surface, image)?;
        let captions = config.captions.anchors(&config.surface)?;
        Ok(Self {
            media_file,
            surface: config.surface,
            image,
            placement,
            scale: placement.scale(&image),
            centering_axis: placement.centering_axis(),
            background: config.background.clone(),
            captions,
            caption_fill: config.captions.fill.clone(),
        })
    }
}
