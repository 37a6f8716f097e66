use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use num::Zero;
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "glam")]
mod glam_conversions;
#[cfg(feature = "mint")]
mod mint_conversions;

/// A 2-dimensional point, which is just a primitive array of scalars.
///
/// ```
/// use radiance_cascades_core::Point2;
///
/// let p1 = Point2([1, 2]);
/// let p2 = Point2([3, 4]);
///
/// assert_eq!(p1 + p2, Point2([4, 6]));
/// assert_eq!(p1 - p2, Point2([-2, -2]));
///
/// assert_eq!(p1 * 2, Point2([2, 4]));
/// ```
///
/// There is also a partial order defined on points which says that a point A is greater than a
/// point B if and only if all of the components of point A are greater than point B. This is
/// useful for easily checking if a point is inside of the half-open box between two other
/// points:
///
/// ```
/// use radiance_cascades_core::Point2;
///
/// let min = Point2([0.0, 0.0]);
/// let least_upper_bound = Point2([3.0, 3.0]);
///
/// let p = Point2([0.0, 1.5]);
/// assert!(min <= p && p < least_upper_bound);
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Point2<T>(pub [T; 2]);

/// A 2-dimensional point with scalar type `i32`.
pub type Point2i = Point2<i32>;
/// A 2-dimensional point with scalar type `f32`.
pub type Point2f = Point2<f32>;
/// A 2-dimensional point with scalar type `f64`.
pub type Point2d = Point2<f64>;

impl<T> Point2<T> {
    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        &mut self.0[0]
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        &mut self.0[1]
    }
}

impl<T> Point2<T>
where
    T: Copy,
{
    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }

    #[inline]
    pub fn yx(&self) -> Self {
        Point2([self.y(), self.x()])
    }

    #[inline]
    pub fn fill(value: T) -> Self {
        Point2([value; 2])
    }

    /// Returns the point after applying `f` component-wise.
    #[inline]
    pub fn map_components_unary(&self, f: impl Fn(T) -> T) -> Self {
        Point2([f(self.x()), f(self.y())])
    }

    /// Returns the point after applying `f` component-wise to both `self` and `other` in
    /// parallel.
    #[inline]
    pub fn map_components_binary(&self, other: &Self, f: impl Fn(T, T) -> T) -> Self {
        Point2([f(self.x(), other.x()), f(self.y(), other.y())])
    }
}

impl<T> Point2<T>
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    /// The vector dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x() * other.x() + self.y() * other.y()
    }
}

impl Point2f {
    #[inline]
    pub fn as_2i(&self) -> Point2i {
        Point2([self.x() as i32, self.y() as i32])
    }

    #[inline]
    pub fn as_2d(&self) -> Point2d {
        Point2([f64::from(self.x()), f64::from(self.y())])
    }
}

impl Point2d {
    #[inline]
    pub fn as_2i(&self) -> Point2i {
        Point2([self.x() as i32, self.y() as i32])
    }

    #[inline]
    pub fn as_2f(&self) -> Point2f {
        Point2([self.x() as f32, self.y() as f32])
    }
}

impl From<Point2i> for Point2f {
    #[inline]
    fn from(p: Point2i) -> Self {
        Point2([p.x() as f32, p.y() as f32])
    }
}

impl From<Point2i> for Point2d {
    #[inline]
    fn from(p: Point2i) -> Self {
        Point2([f64::from(p.x()), f64::from(p.y())])
    }
}

// This particular partial order allows us to say that a half-open box contains a point p iff p
// is GEQ the box minimum and LT the box least upper bound.
impl<T> PartialOrd for Point2<T>
where
    T: Copy + PartialOrd,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self < other {
            Some(Ordering::Less)
        } else if self > other {
            Some(Ordering::Greater)
        } else if self.x() == other.x() && self.y() == other.y() {
            Some(Ordering::Equal)
        } else {
            None
        }
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.x() < other.x() && self.y() < other.y()
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        self.x() > other.x() && self.y() > other.y()
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        self.x() <= other.x() && self.y() <= other.y()
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        self.x() >= other.x() && self.y() >= other.y()
    }
}

macro_rules! impl_componentwise_ops {
    ($t:ty, $scalar:ty) => {
        impl Add for $t {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                self.map_components_binary(&rhs, |c1, c2| c1 + c2)
            }
        }

        impl Sub for $t {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                self.map_components_binary(&rhs, |c1, c2| c1 - c2)
            }
        }

        impl AddAssign for $t {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl SubAssign for $t {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl Neg for $t {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                self.map_components_unary(|c| -c)
            }
        }

        impl Mul<$scalar> for $t {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: $scalar) -> Self {
                self.map_components_unary(|c| rhs * c)
            }
        }

        impl Mul<$t> for $scalar {
            type Output = $t;

            #[inline]
            fn mul(self, rhs: $t) -> $t {
                rhs * self
            }
        }

        impl Mul<Self> for $t {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                self.map_components_binary(&rhs, |c1, c2| c1 * c2)
            }
        }

        impl Zero for $t {
            #[inline]
            fn zero() -> Self {
                Self::ZERO
            }

            #[inline]
            fn is_zero(&self) -> bool {
                *self == Self::ZERO
            }
        }
    };
}

macro_rules! impl_float_ops {
    ($t:ty, $scalar:ty) => {
        impl $t {
            #[inline]
            pub fn round(&self) -> Self {
                self.map_components_unary(|c| c.round())
            }

            #[inline]
            pub fn floor(&self) -> Self {
                self.map_components_unary(|c| c.floor())
            }

            #[inline]
            pub fn ceil(&self) -> Self {
                self.map_components_unary(|c| c.ceil())
            }

            #[inline]
            pub fn fract(&self) -> Self {
                self.map_components_unary(|c| c.fract())
            }

            /// The square of the L2 (Euclidean) norm.
            #[inline]
            pub fn norm_squared(&self) -> $scalar {
                self.dot(self)
            }

            /// The L2 (Euclidean) norm.
            #[inline]
            pub fn norm(&self) -> $scalar {
                self.norm_squared().sqrt()
            }
        }

        impl Div<$scalar> for $t {
            type Output = Self;

            #[inline]
            fn div(self, rhs: $scalar) -> Self {
                self.map_components_unary(|c| c / rhs)
            }
        }

        impl Div<Self> for $t {
            type Output = Self;

            #[inline]
            fn div(self, rhs: Self) -> Self {
                self.map_components_binary(&rhs, |c1, c2| c1 / c2)
            }
        }
    };
}

macro_rules! impl_consts {
    ($t:ty, $zero:expr, $one:expr) => {
        impl $t {
            /// A point of all zeros.
            pub const ZERO: Self = Point2([$zero; 2]);
            /// A point of all ones.
            pub const ONES: Self = Point2([$one; 2]);
        }
    };
}

impl_componentwise_ops!(Point2i, i32);
impl_componentwise_ops!(Point2f, f32);
impl_componentwise_ops!(Point2d, f64);

impl_float_ops!(Point2f, f32);
impl_float_ops!(Point2d, f64);

impl_consts!(Point2i, 0, 1);
impl_consts!(Point2f, 0.0, 1.0);
impl_consts!(Point2d, 0.0, 1.0);

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn componentwise_arithmetic() {
        let p1 = Point2([1.0, -2.0]);
        let p2 = Point2([0.5, 4.0]);

        assert_eq!(p1 + p2, Point2([1.5, 2.0]));
        assert_eq!(p1 - p2, Point2([0.5, -6.0]));
        assert_eq!(p1 * 2.0, Point2([2.0, -4.0]));
        assert_eq!(2.0 * p1, Point2([2.0, -4.0]));
        assert_eq!(p2 / 2.0, Point2([0.25, 2.0]));
        assert_eq!(-p1, Point2([-1.0, 2.0]));
    }

    #[test]
    fn partial_order_is_containment() {
        let min = Point2([0.0, 0.0]);
        let lub = Point2([4.0, 4.0]);

        assert!(min <= Point2([0.0, 3.9]) && Point2([0.0, 3.9]) < lub);
        assert!(!(Point2([4.0, 1.0]) < lub));
        assert!(!(min <= Point2([-0.1, 1.0])));
    }

    #[test]
    fn norm_of_unit_diagonal() {
        let p: Point2d = Point2([1.0, 1.0]);

        assert_eq!(p.norm_squared(), 2.0);
        assert!((p.norm() - f64::sqrt(2.0)).abs() < 1e-12);
    }

    #[test]
    fn int_float_round_trips() {
        let p = Point2([3, -7]);

        assert_eq!(Point2d::from(p).as_2i(), p);
        assert_eq!(Point2f::from(p).as_2i(), p);
        assert_eq!(Point2d::from(p), Point2f::from(p).as_2d());
    }

    #[test]
    fn floor_and_ceil() {
        let p: Point2d = Point2([2.25, -0.75]);

        assert_eq!(p.floor(), Point2([2.0, -1.0]));
        assert_eq!(p.ceil(), Point2([3.0, -0.0]));
        assert_eq!(p.floor().as_2i(), Point2([2, -1]));
    }
}
