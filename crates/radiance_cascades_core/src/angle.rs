//! Angular sampling shared by every cascade level.
//!
//! Rays divide the full circle into `ray_count` equal bins and sample the center of each bin,
//! so no ray ever lies exactly on an axis and opposing rays never cancel.

use crate::{Point2, Point2d};

use std::f64::consts::TAU;

/// The angle in radians of ray `ray_index` out of `ray_count` evenly spaced rays.
///
/// The half-step offset centers each ray within its angular bin.
#[inline]
pub fn ray_angle(ray_index: u32, ray_count: u32) -> f64 {
    debug_assert!(ray_count > 0);

    TAU * (f64::from(ray_index) + 0.5) / f64::from(ray_count)
}

/// The unit direction vector for `angle` radians.
#[inline]
pub fn unit_vector(angle: f64) -> Point2d {
    Point2([angle.sin(), angle.cos()])
}

/// The index of the angular bin containing `angle`, the inverse of [`ray_angle`].
///
/// Angles outside `[0, 2π)` are wrapped into range first.
#[inline]
pub fn angular_index(angle: f64, ray_count: u32) -> u32 {
    debug_assert!(ray_count > 0);

    let revolutions = angle.rem_euclid(TAU) / TAU;

    // Rounding can land exactly on ray_count when the angle sits just below a full turn.
    ((revolutions * f64::from(ray_count)) as u32).min(ray_count - 1)
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod test {
    use super::*;

    use std::f64::consts::{FRAC_PI_4, PI, TAU};

    #[test]
    fn four_rays_sample_diagonals() {
        assert!((ray_angle(0, 4) - FRAC_PI_4).abs() < 1e-12);
        assert!((ray_angle(1, 4) - 3.0 * FRAC_PI_4).abs() < 1e-12);
        assert!((ray_angle(2, 4) - 5.0 * FRAC_PI_4).abs() < 1e-12);
        assert!((ray_angle(3, 4) - 7.0 * FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn first_diagonal_direction() {
        let dir = unit_vector(ray_angle(0, 4));
        let expected = 0.5f64.sqrt();

        assert!((dir.x() - expected).abs() < 1e-12);
        assert!((dir.y() - expected).abs() < 1e-12);
        assert!((dir.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn angular_index_inverts_ray_angle() {
        for &ray_count in [1, 2, 4, 7, 16, 256].iter() {
            for ray_index in 0..ray_count {
                assert_eq!(angular_index(ray_angle(ray_index, ray_count), ray_count), ray_index);
            }
        }
    }

    #[test]
    fn angles_wrap_into_range() {
        assert_eq!(angular_index(-FRAC_PI_4, 4), 3);
        assert_eq!(angular_index(TAU + FRAC_PI_4, 4), 0);
        assert_eq!(angular_index(TAU, 4), 0);
        assert_eq!(angular_index(3.0 * TAU + PI, 4), 2);
    }

    #[test]
    fn bin_boundaries_are_half_open() {
        // Angle 0 belongs to the first bin even though the bin centers are offset.
        assert_eq!(angular_index(0.0, 4), 0);
        // Just below a full turn still lands in the last bin.
        assert_eq!(angular_index(TAU - 1e-9, 4), 3);
    }
}
