#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A half-open annular band of radii `[inner, outer)` around a probe center.
///
/// Consecutive cascade levels share band endpoints exactly, the outer radius of one level
/// being the very same `f64` as the inner radius of the next. That makes the bands a true
/// partition: every radius below the outermost bound belongs to exactly one level, with no
/// gaps and no overlaps even after floating point rounding.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct RadialInterval {
    /// Distance from the probe center at which the band begins (inclusive).
    pub inner: f64,
    /// Distance from the probe center at which the band ends (exclusive).
    pub outer: f64,
}

impl RadialInterval {
    #[inline]
    pub fn new(inner: f64, outer: f64) -> Self {
        Self { inner, outer }
    }

    /// Returns `true` iff `radius` falls inside the band.
    #[inline]
    pub fn contains(&self, radius: f64) -> bool {
        self.inner <= radius && radius < self.outer
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.outer - self.inner
    }

    /// Returns `true` iff the band has no interior, as produced by levels that do not grow.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outer <= self.inner
    }
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

    #[test]
    fn contains_is_half_open() {
        let band = RadialInterval::new(16.0, 32.0);

        assert!(band.contains(16.0));
        assert!(band.contains(31.999));
        assert!(!band.contains(32.0));
        assert!(!band.contains(15.999));
    }

    #[test]
    fn degenerate_band_contains_nothing() {
        let band = RadialInterval::new(16.0, 16.0);

        assert!(band.is_empty());
        assert_eq!(band.width(), 0.0);
        assert!(!band.contains(16.0));
    }

    #[test]
    fn adjacent_bands_partition_their_union() {
        let lower = RadialInterval::new(0.0, 16.0);
        let upper = RadialInterval::new(16.0, 32.0);

        for &radius in [0.0, 8.0, 15.999, 16.0, 24.0, 31.999].iter() {
            assert_ne!(lower.contains(radius), upper.contains(radius));
        }
    }
}
