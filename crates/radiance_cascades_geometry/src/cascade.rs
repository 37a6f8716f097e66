use crate::{
    config::CascadeConfig,
    error::{InvalidConfig, QueryError},
    level::Level,
    ray::LevelRays,
    stats::CascadeStats,
};

use radiance_cascades_core::{angular_index, Point2d, RadialInterval};

use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A fully derived cascade: one [`Level`] per configured index.
///
/// All geometry is computed up front from the [`CascadeConfig`], after which the cascade is
/// immutable. Queries and ray iteration take `&self`, so a cascade can be shared across
/// threads freely. Regenerating from an equal config yields an equal cascade.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Cascade {
    config: CascadeConfig,
    levels: Vec<Level>,
}

impl Cascade {
    /// Derives every level of the configured cascade.
    ///
    /// Returns the first constraint violation if `config` is invalid. Generation never fails
    /// for a config that passed [`CascadeConfig::validate`].
    pub fn generate(config: CascadeConfig) -> Result<Self, InvalidConfig> {
        config.validate()?;

        let mut levels = Vec::with_capacity(config.num_levels() as usize);
        for index in config.min_level..=config.max_level {
            let ray_count = config
                .ray_count(index)
                .ok_or_else(|| InvalidConfig::ray_count_overflow(index))?;

            levels.push(Level::new(&config, index, ray_count));
        }

        debug!(
            "generated cascade levels {}..={} covering radii [{}, {})",
            config.min_level,
            config.max_level,
            config.inner_radius(config.min_level),
            config.outer_radius(config.max_level),
        );

        Ok(Self { config, levels })
    }

    /// The configuration this cascade was generated from.
    #[inline]
    pub fn config(&self) -> &CascadeConfig {
        &self.config
    }

    /// All generated levels in ascending index order.
    #[inline]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// The level with absolute index `index`, if it was generated.
    #[inline]
    pub fn level(&self, index: u32) -> Option<&Level> {
        index
            .checked_sub(self.config.min_level)
            .and_then(|i| self.levels.get(i as usize))
    }

    /// Iterates every ray of the level with absolute index `index`.
    #[inline]
    pub fn rays(&self, index: u32) -> Option<LevelRays> {
        self.level(index).map(Level::rays)
    }

    /// The union of all generated intervals, `[inner_limit, outer_limit)`.
    #[inline]
    pub fn claimed_radii(&self) -> RadialInterval {
        RadialInterval::new(
            self.config.inner_radius(self.config.min_level),
            self.config.outer_radius(self.config.max_level),
        )
    }

    /// The generated level whose interval contains `radius`, if any.
    ///
    /// Because consecutive intervals share endpoints exactly, each radius inside
    /// [`claimed_radii`](Self::claimed_radii) belongs to exactly one level.
    #[inline]
    pub fn level_for_radius(&self, radius: f64) -> Option<&Level> {
        self.levels
            .iter()
            .find(|level| level.interval().contains(radius))
    }

    /// Finds the level and angular bin that own a sample at `point`, a position relative to
    /// the probe center, arriving from `angle` radians.
    ///
    /// Both error variants are expected outcomes near the cascade bounds; see [`QueryError`].
    pub fn query_interval(
        &self,
        point: Point2d,
        angle: f64,
    ) -> Result<ClaimedInterval, QueryError> {
        let radius = point.norm();

        if let Some(level) = self.level_for_radius(radius) {
            trace!("query radius {} claimed by level {}", radius, level.index());

            return Ok(ClaimedInterval {
                level: level.index(),
                interval: level.interval(),
                ray_index: angular_index(angle, level.ray_count()),
            });
        }

        let claimed = self.claimed_radii();
        if radius < claimed.inner {
            Err(QueryError::UnclaimedRegion {
                radius,
                inner_limit: claimed.inner,
            })
        } else {
            Err(QueryError::OutOfRange {
                radius,
                outer_limit: claimed.outer,
            })
        }
    }

    /// Probe and ray tallies for every level.
    pub fn stats(&self) -> CascadeStats {
        CascadeStats::new(self.levels.iter().map(Level::stats).collect())
    }
}

/// A successful interval query: which level and angular bin own the sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClaimedInterval {
    /// The absolute index of the owning level.
    pub level: u32,
    /// The owning level's radial interval.
    pub interval: RadialInterval,
    /// The angular bin of the query angle at the owning level's ray count.
    pub ray_index: u32,
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
