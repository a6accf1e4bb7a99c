// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: input dimensions, fitted placement and layout reports.

pub mod dimensions;
pub mod placement;
pub mod report;
