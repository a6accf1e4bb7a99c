// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometry helpers: image fitting and caption placement.

pub mod captions;
pub mod geometry;
