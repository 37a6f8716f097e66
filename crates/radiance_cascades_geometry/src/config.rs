use crate::error::InvalidConfig;

use radiance_cascades_core::{level_scale, scaled_count, RadialInterval};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The parameters that fully determine a cascade's geometry.
///
/// A config is plain data. Fill one in, hand it to [`Cascade::generate`](crate::Cascade::generate),
/// and keep it around: since generation is deterministic, comparing configs by value is all a
/// caller needs to decide whether previously generated geometry is stale.
///
/// Levels are indexed absolutely. `min_level` above zero skips the innermost levels without
/// moving the remaining intervals, which leaves the region near each probe center unclaimed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct CascadeConfig {
    /// The outer radius of the level 0 interval, in world units. Must be finite and positive.
    pub base_probe_radius: f64,
    /// Rays cast by each level 0 probe. Must be at least 1.
    pub base_ray_count: u32,
    /// Log2 of the per-level growth factor for both ray count and interval radius. Zero means
    /// every level repeats the level 0 geometry.
    pub branching_factor: u32,
    /// The first generated level, inclusive.
    pub min_level: u32,
    /// The last generated level, inclusive. Must be at least `min_level`.
    pub max_level: u32,
    /// Width of the probed domain `[0, domain_width)`, in world units.
    pub domain_width: f64,
    /// Height of the probed domain `[0, domain_height)`, in world units.
    pub domain_height: f64,
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            base_probe_radius: 16.0,
            base_ray_count: 4,
            branching_factor: 1,
            min_level: 0,
            max_level: 3,
            domain_width: 1024.0,
            domain_height: 1024.0,
        }
    }
}

impl CascadeConfig {
    /// Checks every field constraint, returning the first violation.
    ///
    /// [`Cascade::generate`](crate::Cascade::generate) calls this itself; it is public so
    /// interactive frontends can reject bad parameters before discarding working geometry.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if !self.base_probe_radius.is_finite() || self.base_probe_radius <= 0.0 {
            return Err(InvalidConfig::new(
                "base_probe_radius",
                format!("must be finite and positive, got {}", self.base_probe_radius),
            ));
        }
        if self.base_ray_count == 0 {
            return Err(InvalidConfig::new("base_ray_count", "must be at least 1"));
        }
        if self.min_level > self.max_level {
            return Err(InvalidConfig::new(
                "min_level",
                format!(
                    "must not exceed max_level, got {} > {}",
                    self.min_level, self.max_level
                ),
            ));
        }
        if !self.domain_width.is_finite() || self.domain_width < 0.0 {
            return Err(InvalidConfig::new(
                "domain_width",
                format!("must be finite and non-negative, got {}", self.domain_width),
            ));
        }
        if !self.domain_height.is_finite() || self.domain_height < 0.0 {
            return Err(InvalidConfig::new(
                "domain_height",
                format!("must be finite and non-negative, got {}", self.domain_height),
            ));
        }

        // Growth is monotonic, so checking the top level covers every generated level.
        if self.ray_count(self.max_level).is_none() {
            return Err(InvalidConfig::ray_count_overflow(self.max_level));
        }
        if !self.outer_radius(self.max_level).is_finite() {
            return Err(InvalidConfig::new(
                "max_level",
                format!("interval radius overflows f64 at level {}", self.max_level),
            ));
        }

        Ok(())
    }

    /// The number of levels a valid config generates.
    #[inline]
    pub fn num_levels(&self) -> u64 {
        u64::from(self.max_level - self.min_level) + 1
    }

    /// The geometric scale factor shared by every per-level quantity.
    #[inline]
    pub fn scale(&self, level: u32) -> f64 {
        level_scale(level, self.branching_factor)
    }

    /// The edge length of `level`'s probe grid cells, in world units.
    #[inline]
    pub fn probe_diameter(&self, level: u32) -> f64 {
        2.0 * self.base_probe_radius * self.scale(level)
    }

    /// Rays cast by each probe of `level`, or `None` on `u32` overflow.
    #[inline]
    pub fn ray_count(&self, level: u32) -> Option<u32> {
        scaled_count(self.base_ray_count, level, self.branching_factor)
    }

    /// The outer radius of `level`'s interval, in world units.
    #[inline]
    pub fn outer_radius(&self, level: u32) -> f64 {
        self.base_probe_radius * self.scale(level)
    }

    /// The inner radius of `level`'s interval, in world units.
    ///
    /// Level 0 reaches all the way back to the probe center. Every other level starts at the
    /// outer radius of the level below, computed by the identical expression so the shared
    /// endpoint is the same `f64` on both sides.
    #[inline]
    pub fn inner_radius(&self, level: u32) -> f64 {
        if level == 0 {
            0.0
        } else {
            self.outer_radius(level - 1)
        }
    }

    /// The radial interval owned by `level`.
    #[inline]
    pub fn interval(&self, level: u32) -> RadialInterval {
        RadialInterval::new(self.inner_radius(level), self.outer_radius(level))
    }

    /// A reasonable level count for the configured domain: enough levels that the probe grid
    /// of the last one collapses to about a single cell.
    pub fn suggested_level_count(&self) -> u32 {
        let diameter = self.probe_diameter(self.min_level);
        let cols = (self.domain_width / diameter).ceil();
        let rows = (self.domain_height / diameter).ceil();
        let min_dim = cols.min(rows);

        if min_dim <= 1.0 {
            1
        } else {
            min_dim.log2().ceil() as u32
        }
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
