// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media file probing.
//!
//! Only the image header is read; pixels are never decoded here.

use crate::models::dimensions::Image;
use anyhow::{Context, Result};
use std::path::Path;

/// Read the natural pixel size of an image file.
pub fn probe_image(path: &Path) -> Result<Image> {
    let (width, height) = image::image_dimensions(path)
        .with_context(|| format!("failed to read image header from {}", path.display()))?;
    log::debug!("Probed image {} ({}x{})", path.display(), width, height);
    Ok(Image::from_pixels(width, height))
}
