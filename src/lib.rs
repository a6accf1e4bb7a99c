// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! memefit - letterbox fitting for meme canvases
//!
//! Computes where a source image is drawn inside a fixed canvas so that it
//! keeps its aspect ratio and is centered, plus the anchors for the top and
//! bottom caption text.

pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod util;

pub use error::FitError;
pub use models::dimensions::{Image, Surface};
pub use models::placement::{CenteringAxis, Placement};
pub use util::geometry::compute_fit;
