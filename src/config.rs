// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Runtime configuration.
//!
//! Configuration is read from an optional YAML file. Every key has a
//! default, so an empty file is a valid configuration:
//!
//! ```yaml
//! surface:
//!   width: 600
//!   height: 400
//! background: "#202020"
//! captions:
//!   top: 0.12
//!   font-size-px: 40
//! ```

use crate::error::require_dimension;
use crate::models::dimensions::Surface;
use crate::util::captions::CaptionLayout;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Surface size, letterbox color and caption policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub surface: Surface,
    /// Color painted behind the fitted image, visible as the bars.
    pub background: String,
    pub captions: CaptionLayout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface: Surface::default(),
            background: "black".to_string(),
            captions: CaptionLayout::default(),
        }
    }
}

impl Config {
    /// Parse a configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_yaml_str(&yaml).with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Parse a configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document deserializes to null rather than an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Validate invariants that serde defaults cannot express.
    pub fn validated(self) -> Result<Self> {
        require_dimension("surface.width", self.surface.width)?;
        require_dimension("surface.height", self.surface.height)?;
        self.captions
            .validate()
            .context("invalid caption configuration")?;
        Ok(self)
    }
}
