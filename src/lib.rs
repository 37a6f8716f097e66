//! Deterministic probe and ray geometry for 2D radiance cascades.
//!
//! A cascade partitions the space around every light probe into nested radial intervals, with
//! each successive level owning fewer, farther probes that cast more, longer rays. This library
//! derives all of that geometry from a small set of parameters so renderers can place probes,
//! cast rays, and route samples without re-deriving any of the arithmetic.
//!
//! This library is organized into two crates:
//! - **core**: 2D points, angular sampling math, and radial intervals
//! - **geometry**: cascade configuration, levels, probe grids, ray iterators, and queries
//!
//! Everything here is pure arithmetic on immutable inputs. The same configuration always
//! produces bit-identical geometry, and every generated value can be shared freely across
//! threads.
//!
//! ```
//! use radiance_cascades::prelude::*;
//!
//! let cascade = Cascade::generate(CascadeConfig {
//!     base_probe_radius: 16.0,
//!     base_ray_count: 4,
//!     branching_factor: 1,
//!     min_level: 0,
//!     max_level: 3,
//!     domain_width: 1024.0,
//!     domain_height: 1024.0,
//! })
//! .unwrap();
//!
//! // Each level doubles its interval radius and its rays per probe.
//! let top = cascade.level(3).unwrap();
//! assert_eq!(top.ray_count(), 32);
//! assert_eq!(top.interval().outer, 128.0);
//! ```

pub use radiance_cascades_core as core;
pub use radiance_cascades_geometry as geometry;

pub mod prelude {
    pub use super::core::prelude::*;
    pub use super::geometry::prelude::*;
}
