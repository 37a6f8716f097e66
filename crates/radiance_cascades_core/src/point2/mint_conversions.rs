use super::*;

impl<T> From<mint::Point2<T>> for Point2<T> {
    #[inline]
    fn from(p: mint::Point2<T>) -> Self {
        Point2([p.x, p.y])
    }
}

impl<T> From<Point2<T>> for mint::Point2<T>
where
    T: Clone,
{
    #[inline]
    fn from(p: Point2<T>) -> Self {
        mint::Point2::from_slice(&p.0)
    }
}

impl<T> From<mint::Vector2<T>> for Point2<T> {
    #[inline]
    fn from(p: mint::Vector2<T>) -> Self {
        Point2([p.x, p.y])
    }
}

impl<T> From<Point2<T>> for mint::Vector2<T>
where
    T: Clone,
{
    #[inline]
    fn from(p: Point2<T>) -> Self {
        mint::Vector2::from_slice(&p.0)
    }
}
