//! The core data types for 2D radiance cascade probe geometry:
//! - `Point2`: a 2-dimensional point, most importantly `Point2i` and `Point2d`
//! - `RadialInterval`: the half-open annular band of radii owned by one cascade level
//! - angular sampling and per-level scaling math shared by every cascade structure

pub mod angle;
pub mod interval;
pub mod point2;
pub mod scaling;

pub use angle::{angular_index, ray_angle, unit_vector};
pub use interval::RadialInterval;
pub use point2::{Point2, Point2d, Point2f, Point2i};
pub use scaling::{level_scale, scaled_count};

pub use num;

pub mod prelude {
    pub use super::{
        angular_index, level_scale, ray_angle, scaled_count, unit_vector, Point2, Point2d,
        Point2f, Point2i, RadialInterval,
    };
}
