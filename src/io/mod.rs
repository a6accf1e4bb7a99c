// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for image files and layout reports.

pub mod media;
pub mod serialization;
