use std::{fmt::Debug, iter::FusedIterator};

/// A sequential walk over the points of a grid.
///
/// Implementors are positioned on their first point right after
/// construction. The usual loop is
///
/// ```
/// use gridpoints::{GridIterator, Lattice};
///
/// let mut grid = Lattice::<i64>::new(&[0, 0], &[2, 1], false)?;
/// let mut seen = 0;
/// while grid.is_active() {
///     let _point = grid.current();
///     seen += 1;
///     grid.advance();
/// }
/// assert_eq!(seen, grid.num_points());
/// # Ok::<(), gridpoints::error::Error>(())
/// ```
///
/// [`GridIterator::points`] adapts any grid into a standard iterator.
pub trait GridIterator {
    /// The point type produced by the walk.
    type Point: Clone + Debug;

    /// Whether the grid is positioned on a point.
    fn is_active(&self) -> bool;

    /// The current point. Meaningless once the grid is exhausted.
    fn current(&self) -> &Self::Point;

    /// Move to the next point; returns `false` once the walk is over.
    fn advance(&mut self) -> bool;

    /// Restart the walk from its first point.
    fn reset(&mut self);

    /// Total number of points the walk visits.
    fn num_points(&self) -> usize;

    /// Number of axes.
    fn dimension(&self) -> usize;

    /// True if coordinate `axis` is at its lower bound.
    fn is_floor(&self, axis: usize) -> bool;

    /// True if coordinate `axis` is at its upper bound.
    fn is_ceil(&self, axis: usize) -> bool;

    /// True if any coordinate is at one of its bounds.
    fn is_boundary(&self) -> bool {
        (0..self.dimension()).any(|axis| self.is_floor(axis) || self.is_ceil(axis))
    }

    /// Consume the grid into an iterator over owned points, starting at the
    /// current position.
    fn points(self) -> Points<Self>
    where
        Self: Sized,
    {
        Points {
            grid: self,
            started: false,
        }
    }
}

impl<G: GridIterator + ?Sized> GridIterator for Box<G> {
    type Point = G::Point;

    fn is_active(&self) -> bool {
        (**self).is_active()
    }

    fn current(&self) -> &Self::Point {
        (**self).current()
    }

    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    fn reset(&mut self) {
        (**self).reset();
    }

    fn num_points(&self) -> usize {
        (**self).num_points()
    }

    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn is_floor(&self, axis: usize) -> bool {
        (**self).is_floor(axis)
    }

    fn is_ceil(&self, axis: usize) -> bool {
        (**self).is_ceil(axis)
    }

    fn is_boundary(&self) -> bool {
        (**self).is_boundary()
    }
}

/// Standard iterator over the points of a [`GridIterator`].
#[derive(Debug, Clone)]
pub struct Points<G> {
    /// The wrapped grid.
    grid: G,
    /// Whether the current point has already been yielded.
    started: bool,
}

impl<G: GridIterator> Points<G> {
    /// Borrow the wrapped grid.
    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// Recover the wrapped grid.
    pub fn into_inner(self) -> G {
        self.grid
    }
}

impl<G: GridIterator> Iterator for Points<G> {
    type Item = G::Point;

    fn next(&mut self) -> Option<G::Point> {
        if self.started {
            self.grid.advance();
        } else {
            self.started = true;
        }
        self.grid.is_active().then(|| self.grid.current().clone())
    }
}

impl<G: GridIterator> FusedIterator for Points<G> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error, lattice::Lattice, mode::Vertex, point::DynPoint};

    #[test]
    fn points_adapter() -> error::Result<()> {
        let grid = Lattice::<i64, Vertex>::new(&[0, 0], &[1, 1], false)?;
        let mut points = grid.points();
        let all: Vec<Vec<i64>> = points.by_ref().map(|p| p.to_vec()).collect();
        assert_eq!(all, vec![vec![0, 0], vec![1, 0], vec![0, 1], vec![1, 1]]);
        assert_eq!(points.next(), None);
        assert!(!points.grid().is_active());

        let mut grid = points.into_inner();
        grid.reset();
        assert_eq!(grid.points().count(), 4);
        Ok(())
    }

    #[test]
    fn boxed_grid() -> error::Result<()> {
        let boxed: Box<dyn GridIterator<Point = DynPoint<i64>>> =
            Box::new(Lattice::<i64>::new(&[0], &[3], true)?);
        assert_eq!(boxed.num_points(), 3);
        assert_eq!(boxed.points().count(), 3);
        Ok(())
    }
}
