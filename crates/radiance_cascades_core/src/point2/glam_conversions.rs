use super::*;

use glam as gl;

impl From<gl::Vec2> for Point2f {
    #[inline]
    fn from(p: gl::Vec2) -> Self {
        Point2([p.x, p.y])
    }
}

impl From<Point2f> for gl::Vec2 {
    #[inline]
    fn from(p: Point2f) -> Self {
        gl::Vec2::new(p.x(), p.y())
    }
}

impl From<gl::DVec2> for Point2d {
    #[inline]
    fn from(p: gl::DVec2) -> Self {
        Point2([p.x, p.y])
    }
}

impl From<Point2d> for gl::DVec2 {
    #[inline]
    fn from(p: Point2d) -> Self {
        gl::DVec2::new(p.x(), p.y())
    }
}

impl From<gl::IVec2> for Point2i {
    #[inline]
    fn from(p: gl::IVec2) -> Self {
        Point2([p.x, p.y])
    }
}

impl From<Point2i> for gl::IVec2 {
    #[inline]
    fn from(p: Point2i) -> Self {
        gl::IVec2::new(p.x(), p.y())
    }
}
