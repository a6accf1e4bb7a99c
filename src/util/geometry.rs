// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Letterbox fitting.
//!
//! This module maps a source image into a fixed surface so that it is as
//! large as possible without distortion, centered on whichever axis has
//! room to spare.

use crate::error::{require_dimension, FitError};
use crate::models::dimensions::{Image, Surface};
use crate::models::placement::Placement;

/// Compute where and how large to draw `image` inside `surface`.
///
/// The image keeps its aspect ratio and touches the surface on at least one
/// axis. Images relatively taller than the surface fill its height and are
/// centered horizontally; all others, including an exact aspect match, fill
/// its width and are centered vertically.
///
/// Every dimension must be positive and finite, otherwise
/// [`FitError::InvalidDimension`] names the offending field.
pub fn compute_fit(surface: Surface, image: Image) -> Result<Placement, FitError> {
    let surface_w = require_dimension("surface.width", surface.width)?;
    let surface_h = require_dimension("surface.height", surface.height)?;
    let image_w = require_dimension("image.width", image.width)?;
    let image_h = require_dimension("image.height", image.height)?;

    let image_aspect = image.aspect_ratio();
    let surface_aspect = surface.aspect_ratio();

    // Clamps absorb rounding near the branch boundary.
    let placement = if image_aspect < surface_aspect {
        // Image is taller - fit to height
        let width = (surface_h * image_aspect).min(surface_w);
        Placement {
            width,
            height: surface_h,
            offset_x: (surface_w - width) / 2.0,
            offset_y: 0.0,
        }
    } else {
        // Image is wider - fit to width
        let height = if image_aspect == surface_aspect {
            surface_h
        } else {
            (surface_w / image_aspect).min(surface_h)
        };
        Placement {
            width: surface_w,
            height,
            offset_x: 0.0,
            offset_y: (surface_h - height) / 2.0,
        }
    };

    log::trace!(
        "fit {}x{} into {}x{} -> {:?}",
        image_w,
        image_h,
        surface_w,
        surface_h,
        placement
    );

    Ok(placement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::placement::CenteringAxis;

    fn assert_placement(actual: Placement, expected: (f64, f64, f64, f64)) {
        let (w, h, x, y) = expected;
        assert!((actual.width - w).abs() < 1e-9, "width mismatch: {:?} vs {:?}", actual, expected);
        assert!((actual.height - h).abs() < 1e-9, "height mismatch: {:?} vs {:?}", actual, expected);
        assert!((actual.offset_x - x).abs() < 1e-9, "x mismatch: {:?} vs {:?}", actual, expected);
        assert!((actual.offset_y - y).abs() < 1e-9, "y mismatch: {:?} vs {:?}", actual, expected);
    }

    fn sample_sizes() -> Vec<f64> {
        vec![1.0, 3.0, 7.5, 99.0, 100.0, 101.0, 333.0, 480.0, 640.0, 1080.0, 1920.0, 4032.0, 1e6]
    }

    #[test]
    fn test_landscape_image() {
        let p = compute_fit(Surface::new(400.0, 300.0), Image::new(800.0, 400.0)).unwrap();
        assert_placement(p, (400.0, 200.0, 0.0, 50.0));
    }

    #[test]
    fn test_portrait_image() {
        let p = compute_fit(Surface::new(400.0, 300.0), Image::new(100.0, 400.0)).unwrap();
        assert_placement(p, (75.0, 300.0, 162.5, 0.0));
    }

    #[test]
    fn test_square_image_on_square_surface() {
        let p = compute_fit(Surface::new(500.0, 500.0), Image::new(200.0, 200.0)).unwrap();
        assert_placement(p, (500.0, 500.0, 0.0, 0.0));
        assert_eq!(p.centering_axis(), CenteringAxis::None);
    }

    #[test]
    fn test_exact_aspect_match() {
        let p = compute_fit(Surface::new(640.0, 480.0), Image::new(640.0, 480.0)).unwrap();
        assert_eq!(p, Placement { width: 640.0, height: 480.0, offset_x: 0.0, offset_y: 0.0 });
    }

    #[test]
    fn test_scaled_aspect_match_has_no_bars() {
        let p = compute_fit(Surface::new(1920.0, 1080.0), Image::new(1280.0, 720.0)).unwrap();
        assert_eq!(p.centering_axis(), CenteringAxis::None);
        assert!(p.fits_within(&Surface::new(1920.0, 1080.0), 0.0));
    }

    #[test]
    fn test_matching_aspects_have_zero_offsets() {
        // 5 / (5 / 29) rounds to just below 29
        for (sw, sh, iw, ih) in [(5.0, 29.0, 10.0, 58.0), (3.0, 59.0, 3.0, 59.0), (49.0, 3.0, 98.0, 6.0), (1280.0, 720.0, 16.0, 9.0)] {
            let p = compute_fit(Surface::new(sw, sh), Image::new(iw, ih)).unwrap();
            assert_eq!(p, Placement { width: sw, height: sh, offset_x: 0.0, offset_y: 0.0 });
        }
    }

    #[test]
    fn test_wide_image_taller_than_wide_surface() {
        // 10:9 is landscape but relatively taller than 4:3
        let p = compute_fit(Surface::new(400.0, 300.0), Image::new(1000.0, 900.0)).unwrap();
        assert_placement(p, (1000.0 / 3.0, 300.0, 100.0 / 3.0, 0.0));
    }

    #[test]
    fn test_square_image_on_wide_surface() {
        let p = compute_fit(Surface::new(1920.0, 1080.0), Image::new(1000.0, 1000.0)).unwrap();
        assert_placement(p, (1080.0, 1080.0, 420.0, 0.0));
    }

    #[test]
    fn test_square_image_on_tall_surface() {
        let p = compute_fit(Surface::new(300.0, 400.0), Image::new(50.0, 50.0)).unwrap();
        assert_placement(p, (300.0, 300.0, 0.0, 50.0));
    }

    #[test]
    fn test_rejects_zero_width() {
        let err = compute_fit(Surface::new(400.0, 300.0), Image::new(0.0, 100.0)).unwrap_err();
        assert_eq!(err, FitError::InvalidDimension { name: "image.width", value: 0.0 });
    }

    #[test]
    fn test_rejects_each_invalid_field() {
        let ok = 100.0;
        let cases = [
            (Surface::new(-1.0, ok), Image::new(ok, ok), "surface.width"),
            (Surface::new(ok, f64::INFINITY), Image::new(ok, ok), "surface.height"),
            (Surface::new(ok, ok), Image::new(f64::NAN, ok), "image.width"),
            (Surface::new(ok, ok), Image::new(ok, 0.0), "image.height"),
        ];
        for (surface, image, field) in cases {
            match compute_fit(surface, image) {
                Err(FitError::InvalidDimension { name, .. }) => assert_eq!(name, field),
                other => panic!("expected InvalidDimension for {}, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_invariants_over_grid() {
        let sizes = sample_sizes();
        for &sw in &sizes {
            for &sh in &sizes {
                let surface = Surface::new(sw, sh);
                for &iw in &sizes {
                    for &ih in &sizes {
                        let image = Image::new(iw, ih);
                        let p = compute_fit(surface, image).unwrap();

                        // containment
                        assert!(p.offset_x >= 0.0 && p.offset_y >= 0.0, "{:?} {:?} {:?}", surface, image, p);
                        let eps = 1e-9 * sw.max(sh);
                        assert!(p.fits_within(&surface, eps), "{:?} {:?} {:?}", surface, image, p);

                        // aspect preservation
                        let expected = iw / ih;
                        let actual = p.width / p.height;
                        assert!(
                            ((actual - expected) / expected).abs() < 1e-9,
                            "aspect {} vs {} for {:?} {:?}",
                            actual,
                            expected,
                            surface,
                            image
                        );

                        // maximality: one axis spans the surface
                        assert!(p.width == sw || p.height == sh, "{:?} {:?} {:?}", surface, image, p);

                        // centering: one offset is zero, the other splits the slack
                        if p.width == sw {
                            assert_eq!(p.offset_x, 0.0);
                            assert_eq!(p.offset_y, (sh - p.height) / 2.0);
                        } else {
                            assert_eq!(p.offset_y, 0.0);
                            assert_eq!(p.offset_x, (sw - p.width) / 2.0);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_invariants_at_extreme_magnitudes() {
        // Aspect ratios stay representable; the dimensions themselves do not multiply safely.
        let cases = [
            (Surface::new(1e-200, 1e-200), Image::new(1e-200, 1e-200)),
            (Surface::new(1e300, 1e300), Image::new(1e300, 1e10)),
            (Surface::new(1e300, 1e300), Image::new(1e-200, 1e-150)),
            (Surface::new(1e150, 1e-150), Image::new(1e-150, 1e-150)),
            (Surface::new(1e-150, 1e150), Image::new(1e300, 1e300)),
            (Surface::new(1e-150, 1e-200), Image::new(1e150, 1e150)),
            (Surface::new(1e150, 1e150), Image::new(1e-200, 1e-200)),
        ];
        for (surface, image) in cases {
            let p = compute_fit(surface, image).unwrap();

            assert!(p.width > 0.0 && p.height > 0.0, "{:?} {:?} {:?}", surface, image, p);
            assert!(p.offset_x >= 0.0 && p.offset_y >= 0.0, "{:?} {:?} {:?}", surface, image, p);
            let eps = 1e-9 * surface.width.max(surface.height);
            assert!(p.fits_within(&surface, eps), "{:?} {:?} {:?}", surface, image, p);
            assert!(p.width == surface.width || p.height == surface.height, "{:?} {:?} {:?}", surface, image, p);

            let expected = image.aspect_ratio();
            let actual = p.width / p.height;
            assert!(
                ((actual - expected) / expected).abs() < 1e-9,
                "aspect {} vs {} for {:?} {:?}",
                actual,
                expected,
                surface,
                image
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let surface = Surface::new(333.0, 101.0);
        let image = Image::new(7.5, 4032.0);
        let a = compute_fit(surface, image).unwrap();
        let b = compute_fit(surface, image).unwrap();
        assert_eq!(a.width.to_bits(), b.width.to_bits());
        assert_eq!(a.height.to_bits(), b.height.to_bits());
        assert_eq!(a.offset_x.to_bits(), b.offset_x.to_bits());
        assert_eq!(a.offset_y.to_bits(), b.offset_y.to_bits());
    }
}
