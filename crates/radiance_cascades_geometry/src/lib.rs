//! Cascade levels, probe grids, ray iterators, and interval queries for 2D radiance cascades.
//!
//! The entry point is [`Cascade::generate`], which derives every level of probe and ray
//! geometry from a [`CascadeConfig`]:
//!   - [`Level`]: one rung of the cascade, with its probe grid, ray count, and radial interval
//!   - [`ProbeGrid`]: the lattice of probe centers covering the domain at one level
//!   - [`LevelRays`] / [`ProbeRays`]: lazy iterators over the rays a level casts
//!   - [`Cascade::query_interval`]: which level and angular bin own a given sample
//!
//! Generation is pure arithmetic: the same configuration always yields bit-identical
//! geometry, so a cascade can be regenerated anywhere and compared by value.

pub mod cascade;
pub mod config;
pub mod error;
pub mod level;
pub mod probe;
pub mod ray;
pub mod segments;
pub mod stats;

pub use cascade::{Cascade, ClaimedInterval};
pub use config::CascadeConfig;
pub use error::{InvalidConfig, QueryError};
pub use level::Level;
pub use probe::{GridCells, GridProbes, Probe, ProbeGrid};
pub use ray::{LevelRays, ProbeRays, Ray};
pub use segments::{collect_line_segments, line_segment_bytes, LineSegment};
pub use stats::{CascadeStats, LevelStats};

pub mod prelude {
    pub use super::{
        collect_line_segments, line_segment_bytes, Cascade, CascadeConfig, CascadeStats,
        ClaimedInterval, InvalidConfig, Level, LevelRays, LevelStats, LineSegment, Probe,
        ProbeGrid, ProbeRays, QueryError, Ray,
    };
}
