// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Layout report serialization and deserialization.
//!
//! This module handles exporting and importing layout reports in YAML
//! and JSON formats.

use crate::models::report::LayoutReport;
use anyhow::{bail, Result};
use std::path::Path;

/// Render a report as YAML.
pub fn to_yaml_string(report: &LayoutReport) -> Result<String> {
    Ok(serde_yaml::to_string(report)?)
}

/// Render a report as pretty-printed JSON.
pub fn to_json_string(report: &LayoutReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Export a report to YAML format.
pub fn export_yaml(report: &LayoutReport, path: &Path) -> Result<()> {
    std::fs::write(path, to_yaml_string(report)?)?;
    Ok(())
}

/// Export a report to JSON format.
pub fn export_json(report: &LayoutReport, path: &Path) -> Result<()> {
    std::fs::write(path, to_json_string(report)?)?;
    Ok(())
}

/// Export a report, picking the format from the file extension.
pub fn export_report(report: &LayoutReport, path: &Path) -> Result<()> {
    let extension = path.extension().and_then(|s| s.to_str());
    match extension {
        Some("yaml") | Some("yml") => export_yaml(report, path),
        Some("json") => export_json(report, path),
        _ => bail!("Unsupported file extension: {:?}", extension),
    }
}

/// Import a report from YAML format.
pub fn import_yaml(path: &Path) -> Result<LayoutReport> {
    let yaml = std::fs::read_to_string(path)?;
    let report = serde_yaml::from_str(&yaml)?;
    Ok(report)
}

/// Import a report from JSON format.
pub fn import_json(path: &Path) -> Result<LayoutReport> {
    let json = std::fs::read_to_string(path)?;
    let report = serde_json::from_str(&json)?;
    Ok(report)
}
