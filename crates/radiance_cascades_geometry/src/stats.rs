#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Probe and ray tallies for one generated level.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct LevelStats {
    /// The absolute index of the tallied level.
    pub level: u32,
    pub grid_cols: i32,
    pub grid_rows: i32,
    pub probe_count: u64,
    pub rays_per_probe: u32,
    /// Total rays the level casts, `probe_count * rays_per_probe`.
    pub ray_count: u64,
}

/// Probe and ray tallies for a whole cascade.
///
/// The interesting figure is [`total_rays`](Self::total_rays): one radiance sample is stored
/// per ray, so this is the allocation size driver for any backing buffer.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct CascadeStats {
    levels: Vec<LevelStats>,
    total_rays: u64,
}

impl CascadeStats {
    pub(crate) fn new(levels: Vec<LevelStats>) -> Self {
        let total_rays = levels
            .iter()
            .fold(0u64, |sum, level| sum.saturating_add(level.ray_count));

        Self { levels, total_rays }
    }

    /// Per-level tallies in ascending level order.
    #[inline]
    pub fn levels(&self) -> &[LevelStats] {
        &self.levels
    }

    /// Total rays across every level.
    #[inline]
    pub fn total_rays(&self) -> u64 {
        self.total_rays
    }

    /// Bytes needed to store one `bytes_per_sample` sample for every ray in the cascade.
    #[inline]
    pub fn storage_bytes(&self, bytes_per_sample: u64) -> u64 {
        self.total_rays.saturating_mul(bytes_per_sample)
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
    use crate::cascade::Cascade;
    use crate::config::CascadeConfig;

    use pretty_assertions::assert_eq;

    fn flatland_config() -> CascadeConfig {
        CascadeConfig {
            base_probe_radius: 16.0,
            base_ray_count: 4,
            branching_factor: 1,
            min_level: 0,
            max_level: 3,
            domain_width: 1024.0,
            domain_height: 1024.0,
        }
    }

    #[test]
    fn tallies_match_the_flatland_grids() {
        let cascade = Cascade::generate(flatland_config()).unwrap();
        let stats = cascade.stats();

        for level in stats.levels() {
            test_print(&format!(
                "level {}: {} x {} probes, {} rays each\n",
                level.level, level.grid_cols, level.grid_rows, level.rays_per_probe
            ));
        }
        test_print(&format!("total rays = {}\n", stats.total_rays()));

        // Grids: 32x32, 16x16, 8x8, 4x4. Rays per probe: 4, 8, 16, 32.
        let per_level: Vec<_> = stats
            .levels()
            .iter()
            .map(|level| (level.grid_cols, level.rays_per_probe, level.ray_count))
            .collect();
        assert_eq!(
            per_level,
            vec![
                (32, 4, 32 * 32 * 4),
                (16, 8, 16 * 16 * 8),
                (8, 16, 8 * 8 * 16),
                (4, 32, 4 * 4 * 32),
            ]
        );

        assert_eq!(stats.total_rays(), 4096 + 2048 + 1024 + 512);
    }

    #[test]
    fn tallies_match_the_rays_actually_yielded() {
        let cascade = Cascade::generate(flatland_config()).unwrap();

        for level in cascade.levels() {
            let yielded = cascade.rays(level.index()).unwrap().count() as u64;
            assert_eq!(yielded, level.stats().ray_count);
        }
    }

    #[test]
    fn storage_sizing() {
        let cascade = Cascade::generate(flatland_config()).unwrap();
        let stats = cascade.stats();

        // Four f32 channels per radiance sample.
        assert_eq!(stats.storage_bytes(16), stats.total_rays() * 16);
    }

    fn test_print(message: &str) {
        use std::io::Write;

        std::io::stdout()
            .lock()
            .write_all(message.as_bytes())
            .unwrap();
    }
}
