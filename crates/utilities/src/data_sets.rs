use radiance_cascades_geometry::CascadeConfig;

// TODO: it would be nice if all crates could share this module, but it causes this issue:
// https://github.com/rust-lang/cargo/issues/6765

/// The canonical four-level flatland cascade: interval radii `[0, 16)`, `[16, 32)`,
/// `[32, 64)`, `[64, 128)` over a 1024 by 1024 domain.
pub fn flatland_config() -> CascadeConfig {
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
