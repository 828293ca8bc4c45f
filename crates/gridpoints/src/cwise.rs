//! Tensor-product grids built from caller supplied per-axis values.

use smallvec::SmallVec;
use tracing::debug;

use crate::{
    error::{self, Error},
    grid::GridIterator,
    lattice::Lattice,
    mode::Cube,
    point::{Dim, Dynamic, Scalar},
};

/// Iterator over the Cartesian product of per-axis coordinate lists.
///
/// Axis `i` takes its values from `axes[i]`, in the order given; values are
/// looked up, never computed, so every coordinate is reproduced exactly.
/// The lists are borrowed for the lifetime of the iterator. Axis 0 varies
/// fastest.
///
/// ```
/// use gridpoints::CoordinateSamples;
///
/// let axes = vec![vec![0.0, 0.25, 1.0], vec![-1.0, 1.0]];
/// let grid = CoordinateSamples::<f64>::new(&axes)?;
/// assert_eq!(grid.num_points(), 6);
/// # Ok::<(), gridpoints::error::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct CoordinateSamples<'a, T: Scalar, A: AsRef<[T]> = Vec<T>, D: Dim = Dynamic> {
    /// Values per axis.
    axes: &'a [A],
    /// Indices into `axes` driving the walk.
    index: Lattice<i64, Cube, D>,
    /// Current point.
    cur: D::Coords<T>,
}

impl<'a, T: Scalar, A: AsRef<[T]>, D: Dim> CoordinateSamples<'a, T, A, D> {
    /// Walk the Cartesian product of `axes`.
    ///
    /// An empty axis list gives an empty walk. Returns an error if the
    /// number of axes differs from a fixed dimension.
    pub fn new(axes: &'a [A]) -> error::Result<Self> {
        let lengths = axes
            .iter()
            .map(|axis| {
                let len = axis.as_ref().len();
                i64::try_from(len).map_err(|_| Error::CountOverflow(len))
            })
            .collect::<error::Result<SmallVec<[i64; 8]>>>()?;
        let index = Lattice::<i64, Cube, D>::from_upper(&lengths, true)?;
        let mut grid = Self {
            axes,
            index,
            cur: D::filled(axes.len(), T::default()),
        };
        grid.update();
        debug!(
            axes = axes.len(),
            points = grid.num_points(),
            "coordinate-wise sampler created"
        );
        Ok(grid)
    }

    /// Restart the walk at the first point.
    pub fn reset(&mut self) {
        self.index.reset();
        self.update();
    }

    /// Whether the grid is positioned on a point.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.index.is_active()
    }

    /// The current point.
    #[inline]
    pub fn current(&self) -> &D::Coords<T> {
        &self.cur
    }

    /// Move to the next point; returns `false` once the walk is over.
    pub fn advance(&mut self) -> bool {
        if self.index.advance() {
            self.update();
            true
        } else {
            false
        }
    }

    /// Number of axes.
    pub fn dimension(&self) -> usize {
        self.axes.len()
    }

    /// The borrowed per-axis value lists.
    pub fn axes(&self) -> &'a [A] {
        self.axes
    }

    /// Per-axis position of the current point in its value list.
    pub fn tensor_index(&self) -> &D::Coords<i64> {
        self.index.current()
    }

    /// The lattice of list positions driving the walk.
    pub fn index_lattice(&self) -> &Lattice<i64, Cube, D> {
        &self.index
    }

    /// Total number of points, the product of the list lengths.
    pub fn num_points(&self) -> usize {
        self.index.num_points()
    }

    /// Length of each axis list.
    pub fn num_points_cwise(&self) -> D::Coords<usize> {
        self.index.num_points_cwise()
    }

    /// True if the current point uses the first value of `axis`.
    pub fn is_floor(&self, axis: usize) -> bool {
        self.index.is_floor(axis)
    }

    /// True if the current point uses the last value of `axis`.
    pub fn is_ceil(&self, axis: usize) -> bool {
        self.index.is_ceil(axis)
    }

    /// True if the current point uses a first or last value on some axis.
    pub fn is_boundary(&self) -> bool {
        self.index.is_boundary()
    }

    /// Look up the coordinates of the current lattice position.
    fn update(&mut self) {
        if !self.index.is_active() {
            return;
        }
        let positions = self.index.current().as_ref();
        for ((cur, axis), &pos) in self.cur.as_mut().iter_mut().zip(self.axes).zip(positions) {
            // Active positions are within [0, len) by construction.
            *cur = axis.as_ref()[pos as usize];
        }
    }
}

impl<T: Scalar, A: AsRef<[T]>, D: Dim> GridIterator for CoordinateSamples<'_, T, A, D> {
    type Point = D::Coords<T>;

    fn is_active(&self) -> bool {
        self.is_active()
    }

    fn current(&self) -> &Self::Point {
        self.current()
    }

    fn advance(&mut self) -> bool {
        self.advance()
    }

    fn reset(&mut self) {
        self.reset();
    }

    fn num_points(&self) -> usize {
        self.num_points()
    }

    fn dimension(&self) -> usize {
        self.dimension()
    }

    fn is_floor(&self, axis: usize) -> bool {
        self.is_floor(axis)
    }

    fn is_ceil(&self, axis: usize) -> bool {
        self.is_ceil(axis)
    }

    fn is_boundary(&self) -> bool {
        self.is_boundary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Const;

    #[test]
    fn cartesian_product() -> error::Result<()> {
        let axes = vec![vec![0.0, 0.1, 0.7], vec![-2.0, 5.5]];
        let grid = CoordinateSamples::<f64>::new(&axes)?;
        assert_eq!(grid.num_points(), 6);
        assert_eq!(grid.num_points_cwise().as_slice(), &[3, 2]);
        let pts: Vec<Vec<f64>> = grid.points().map(|p| p.to_vec()).collect();
        assert_eq!(
            pts,
            vec![
                vec![0.0, -2.0],
                vec![0.1, -2.0],
                vec![0.7, -2.0],
                vec![0.0, 5.5],
                vec![0.1, 5.5],
                vec![0.7, 5.5],
            ]
        );
        Ok(())
    }

    #[test]
    fn non_uniform_values_are_verbatim() -> error::Result<()> {
        let knots: [&[f64]; 3] = [&[0.0, 1.0 / 3.0, 0.9], &[0.3], &[1e-9, 2.0]];
        let mut grid = CoordinateSamples::<f64, &[f64], Const<3>>::new(&knots)?;
        let mut n = 0;
        while grid.is_active() {
            let idx = grid.tensor_index();
            for axis in 0..3 {
                let expected = knots[axis][idx[axis] as usize];
                assert_eq!(grid.current()[axis].to_bits(), expected.to_bits());
            }
            n += 1;
            grid.advance();
        }
        assert_eq!(n, 6);
        Ok(())
    }

    #[test]
    fn integer_values_and_flags() -> error::Result<()> {
        let axes = [vec![10u32, 20, 30]];
        let mut grid = CoordinateSamples::<u32>::new(&axes)?;
        assert!(grid.is_floor(0) && grid.is_boundary());
        grid.advance();
        assert_eq!(grid.current().as_slice(), &[20]);
        assert!(!grid.is_boundary());
        grid.advance();
        assert!(grid.is_ceil(0));
        assert!(!grid.advance());
        grid.reset();
        assert_eq!(grid.current().as_slice(), &[10]);
        Ok(())
    }

    #[test]
    fn empty_axis() -> error::Result<()> {
        let axes = vec![vec![1.0, 2.0], vec![]];
        let grid = CoordinateSamples::<f64>::new(&axes)?;
        assert!(!grid.is_active());
        assert_eq!(grid.num_points(), 0);
        Ok(())
    }

    #[test]
    fn fixed_dimension_mismatch() {
        let axes = vec![vec![1.0, 2.0]];
        assert!(CoordinateSamples::<f64, Vec<f64>, Const<2>>::new(&axes).is_err());
    }
}
