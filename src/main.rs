// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! memefit command line front end.
//!
//! Probes an image (or takes its size on the command line), fits it into
//! the configured canvas and prints the resulting layout.

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use memefit::config::Config;
use memefit::io::{media, serialization};
use memefit::models::dimensions::{parse_size, Image, Surface};
use memefit::models::report::LayoutReport;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

/// Fit an image into a meme canvas and report the layout.
#[derive(Debug, Parser)]
#[command(name = "memefit", version, about)]
struct Cli {
    /// Image file to probe for its natural size
    #[arg(value_name = "IMAGE", required_unless_present = "image_size", conflicts_with = "image_size")]
    image: Option<PathBuf>,

    /// Natural image size instead of a file, e.g. 800x400
    #[arg(long, value_name = "WxH", value_parser = parse_size)]
    image_size: Option<(f64, f64)>,

    /// Path to YAML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the configured canvas size, e.g. 400x300
    #[arg(long, value_name = "WxH", value_parser = parse_size)]
    surface: Option<(f64, f64)>,

    /// Output format for stdout
    #[arg(short, long, value_enum, default_value = "yaml")]
    format: Format,

    /// Write the report to a file instead (format from extension)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    // RUST_LOG takes precedence when set
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::from_yaml_file(path)?,
        None => Config::default(),
    };
    if let Some((width, height)) = cli.surface {
        config.surface = Surface::new(width, height);
    }
    let config = config.validated()?;
    log::info!("Canvas {}x{}", config.surface.width, config.surface.height);

    let (image, media_file) = match (&cli.image, cli.image_size) {
        (Some(path), _) => (media::probe_image(path)?, Some(path.display().to_string())),
        (None, Some((width, height))) => (Image::new(width, height), None),
        (None, None) => return Err(anyhow!("either IMAGE or --image-size is required")),
    };

    let report = LayoutReport::build(&config, image, media_file).context("failed to compute layout")?;
    log::info!(
        "Placed image at ({}, {}) size {}x{} (scale {:.4})",
        report.placement.offset_x,
        report.placement.offset_y,
        report.placement.width,
        report.placement.height,
        report.scale
    );

    match &cli.output {
        Some(path) => {
            serialization::export_report(&report, path)?;
            log::info!("Exported layout to {}", path.display());
        }
        None => {
            let text = match cli.format {
                Format::Yaml => serialization::to_yaml_string(&report)?,
                Format::Json => serialization::to_json_string(&report)?,
            };
            println!("{}", text.trim_end());
        }
    }

    Ok(())
}
