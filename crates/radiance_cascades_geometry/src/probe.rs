use radiance_cascades_core::{Point2, Point2d, Point2i};

use core::ops::Range;
use itertools::{iproduct, Product};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Locates probe cells and centers for one cascade level.
///
/// Cells tile the domain from the origin in steps of one probe diameter, and each probe sits
/// at the center of its cell. A partial cell at the far edge still gets a probe, so the grid
/// covers the whole domain even when the diameter does not divide it evenly.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct ProbeGrid {
    cell_diameter: f64,
    domain_shape: Point2d,
    cols: i32,
    rows: i32,
}

impl ProbeGrid {
    /// Lays a grid of `cell_diameter`-sized cells over `domain_shape`. `cell_diameter` must
    /// be positive and `domain_shape` non-negative.
    pub fn new(cell_diameter: f64, domain_shape: Point2d) -> Self {
        debug_assert!(cell_diameter > 0.0);
        debug_assert!(Point2d::ZERO <= domain_shape);

        let cells = (domain_shape / cell_diameter).ceil();

        Self {
            cell_diameter,
            domain_shape,
            cols: cells.x() as i32,
            rows: cells.y() as i32,
        }
    }

    /// The edge length of every cell, in world units.
    #[inline]
    pub fn cell_diameter(&self) -> f64 {
        self.cell_diameter
    }

    /// The shape of the covered domain, in world units.
    #[inline]
    pub fn domain_shape(&self) -> Point2d {
        self.domain_shape
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn num_probes(&self) -> u64 {
        self.cols as u64 * self.rows as u64
    }

    /// The world-space center of the probe in `cell`.
    #[inline]
    pub fn probe_center(&self, cell: Point2i) -> Point2d {
        Point2d::from(cell) * self.cell_diameter + Point2d::fill(0.5 * self.cell_diameter)
    }

    /// Returns `true` iff `point` lies inside the domain.
    #[inline]
    pub fn domain_contains(&self, point: Point2d) -> bool {
        Point2d::ZERO <= point && point < self.domain_shape
    }

    /// The cell containing `point`, or `None` for points outside the domain.
    #[inline]
    pub fn cell_containing(&self, point: Point2d) -> Option<Point2i> {
        if self.domain_contains(point) {
            Some((point / self.cell_diameter).floor().as_2i())
        } else {
            None
        }
    }

    /// Iterates all cell coordinates in row-major order.
    #[inline]
    pub fn cells(&self) -> GridCells {
        GridCells {
            // iproduct is opposite of row-major order.
            product_iter: iproduct!(0..self.rows, 0..self.cols),
        }
    }

    /// Iterates all probes in row-major cell order.
    #[inline]
    pub fn probes(&self) -> GridProbes {
        GridProbes {
            grid: *self,
            cells: self.cells(),
        }
    }
}

/// A probe's grid cell paired with its world-space center.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Probe {
    pub cell: Point2i,
    pub center: Point2d,
}

/// An iterator over all cells of a [`ProbeGrid`] in row-major order.
#[derive(Clone)]
pub struct GridCells {
    product_iter: Product<Range<i32>, Range<i32>>,
}

impl Iterator for GridCells {
    type Item = Point2i;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.product_iter.next().map(|(y, x)| Point2([x, y]))
    }
}

/// An iterator over all probes of a [`ProbeGrid`] in row-major order.
#[derive(Clone)]
pub struct GridProbes {
    grid: ProbeGrid,
    cells: GridCells,
}

impl Iterator for GridProbes {
    type Item = Probe;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cells.next().map(|cell| Probe {
            cell,
            center: self.grid.probe_center(cell),
        })
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
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn partial_edge_cells_are_kept() {
        let grid = ProbeGrid::new(8.0, Point2([17.0, 8.0]));

        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.num_probes(), 3);
    }

    #[test]
    fn zero_domain_has_no_cells() {
        let grid = ProbeGrid::new(8.0, Point2([0.0, 0.0]));

        assert_eq!(grid.num_probes(), 0);
        assert_eq!(grid.cells().count(), 0);
        assert_eq!(grid.probes().count(), 0);
    }

    #[test]
    fn cells_are_row_major() {
        let grid = ProbeGrid::new(10.0, Point2([30.0, 20.0]));

        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(
            cells,
            vec![
                Point2([0, 0]),
                Point2([1, 0]),
                Point2([2, 0]),
                Point2([0, 1]),
                Point2([1, 1]),
                Point2([2, 1]),
            ]
        );
    }

    #[test]
    fn probes_sit_at_cell_centers() {
        let grid = ProbeGrid::new(10.0, Point2([30.0, 20.0]));

        let centers: Vec<_> = grid.probes().map(|probe| probe.center).collect();
        assert_eq!(
            centers,
            vec![
                Point2([5.0, 5.0]),
                Point2([15.0, 5.0]),
                Point2([25.0, 5.0]),
                Point2([5.0, 15.0]),
                Point2([15.0, 15.0]),
                Point2([25.0, 15.0]),
            ]
        );
    }

    #[test]
    fn cell_lookup_is_the_iteration_inverse() {
        let grid = ProbeGrid::new(8.0, Point2([32.0, 24.0]));

        for probe in grid.probes() {
            assert_eq!(grid.cell_containing(probe.center), Some(probe.cell));
        }
    }

    #[test]
    fn points_outside_the_domain_have_no_cell() {
        let grid = ProbeGrid::new(8.0, Point2([16.0, 16.0]));

        assert_eq!(grid.cell_containing(Point2([-0.001, 4.0])), None);
        assert_eq!(grid.cell_containing(Point2([16.0, 4.0])), None);
        assert_eq!(grid.cell_containing(Point2([4.0, 16.0])), None);
        assert_eq!(grid.cell_containing(Point2([15.999, 15.999])), Some(Point2([1, 1])));
        assert_eq!(grid.cell_containing(Point2([0.0, 0.0])), Some(Point2([0, 0])));
    }

    #[test]
    fn partial_cell_probe_can_sit_outside_the_domain() {
        // The last column is only 1 unit wide, so its probe center overhangs the domain edge.
        let grid = ProbeGrid::new(8.0, Point2([17.0, 8.0]));

        let last = grid.probe_center(Point2([2, 0]));
        assert_eq!(last, Point2([20.0, 4.0]));
        assert!(!grid.domain_contains(last));
    }
}
