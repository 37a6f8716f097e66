//! Per-level geometric scaling.
//!
//! Every per-level quantity of a cascade grows by the same factor, `2^(level *
//! branching_factor)`. Radii scale in floating point so that deep cascades degrade to
//! `f64::INFINITY` instead of shifting bits off the end of an integer; counts scale with
//! checked integer arithmetic so overflow is observable instead of silent.

/// The geometric scale factor `2^(level * branching_factor)` as an `f64`.
#[inline]
pub fn level_scale(level: u32, branching_factor: u32) -> f64 {
    let exponent = u64::from(level) * u64::from(branching_factor);

    2f64.powi(exponent.min(i32::MAX as u64) as i32)
}

/// Scales `count` by `2^(level * branching_factor)`, or `None` when the result does not fit
/// in a `u32`.
#[inline]
pub fn scaled_count(count: u32, level: u32, branching_factor: u32) -> Option<u32> {
    let steps = u64::from(level) * u64::from(branching_factor);
    if steps > u64::from(u32::MAX) {
        return None;
    }

    2u32.checked_pow(steps as u32)
        .and_then(|scale| count.checked_mul(scale))
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
