use crate::{
    config::CascadeConfig,
    probe::ProbeGrid,
    ray::{LevelRays, ProbeRays},
    stats::LevelStats,
};

use radiance_cascades_core::{ray_angle, Point2, Point2d, RadialInterval};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The derived geometry of a single cascade level.
///
/// Each level owns three things, all scaled by `2^(index * branching_factor)` relative to
/// level 0: a probe grid twice as coarse per doubling, a ray fan twice as dense, and a radial
/// interval starting exactly where the previous level's ends.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Level {
    index: u32,
    ray_count: u32,
    interval: RadialInterval,
    grid: ProbeGrid,
}

impl Level {
    pub(crate) fn new(config: &CascadeConfig, index: u32, ray_count: u32) -> Self {
        Self {
            index,
            ray_count,
            interval: config.interval(index),
            grid: ProbeGrid::new(
                config.probe_diameter(index),
                Point2([config.domain_width, config.domain_height]),
            ),
        }
    }

    /// The absolute index of this level.
    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Rays cast by each probe of this level.
    #[inline]
    pub fn ray_count(&self) -> u32 {
        self.ray_count
    }

    /// The radial interval this level's rays sample.
    #[inline]
    pub fn interval(&self) -> RadialInterval {
        self.interval
    }

    /// The lattice of probes covering the domain at this level's spacing.
    #[inline]
    pub fn probe_grid(&self) -> &ProbeGrid {
        &self.grid
    }

    /// The edge length of this level's probe cells, in world units.
    #[inline]
    pub fn probe_diameter(&self) -> f64 {
        self.grid.cell_diameter()
    }

    /// The sampling angle of ray `ray_index` at this level's ray count.
    #[inline]
    pub fn ray_angle(&self, ray_index: u32) -> f64 {
        ray_angle(ray_index, self.ray_count)
    }

    /// The fan of rays a probe at `center` casts for this level.
    ///
    /// The center does not need to lie on this level's grid; interpolation and debug overlays
    /// both want fans at arbitrary positions.
    #[inline]
    pub fn probe_rays(&self, center: Point2d) -> ProbeRays {
        ProbeRays::new(center, self.ray_count, self.interval)
    }

    /// Every ray this level casts: one fan per probe, probes in row-major order.
    #[inline]
    pub fn rays(&self) -> LevelRays {
        LevelRays::new(*self.probe_grid(), self.ray_count, self.interval)
    }

    /// Probe and ray tallies for this level.
    pub fn stats(&self) -> LevelStats {
        let probe_count = self.grid.num_probes();

        LevelStats {
            level: self.index,
            grid_cols: self.grid.cols(),
            grid_rows: self.grid.rows(),
            probe_count,
            rays_per_probe: self.ray_count,
            ray_count: probe_count.saturating_mul(u64::from(self.ray_count)),
        }
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
