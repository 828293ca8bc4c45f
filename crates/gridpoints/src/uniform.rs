//! Uniformly spaced numeric samples of an N‑dimensional box.

use smallvec::SmallVec;
use tracing::debug;

use crate::{
    error::{self, Error},
    grid::GridIterator,
    lattice::Lattice,
    mode::{Cube, SampleMode},
    ops,
    point::{Dim, Dynamic, GridFloat, same_dimension},
    sampling::{SampleCount, counts_for_total},
};

/// Iterator over evenly spaced points of a closed box `[low, upp]`.
///
/// Enumeration order, floor/ceil status and point counts come from an
/// internal [`Lattice`] over the sample indices; this type only turns the
/// index of each axis into a coordinate. The first and last sample of every
/// axis are exactly `low[i]` and `upp[i]`.
#[derive(Debug, Clone)]
pub struct UniformSamples<T: GridFloat = f64, M: SampleMode = Cube, D: Dim = Dynamic> {
    /// Lower corner.
    low: D::Coords<T>,
    /// Upper corner.
    upp: D::Coords<T>,
    /// Spacing between neighbouring samples per axis.
    step: D::Coords<T>,
    /// Current sample.
    cur: D::Coords<T>,
    /// Whether `low <= upp` on every axis.
    ordered: bool,
    /// Sample indices driving the walk.
    index: Lattice<i64, M, D>,
}

impl<T: GridFloat, M: SampleMode, D: Dim> UniformSamples<T, M, D> {
    /// Sample `[low, upp]` with `counts[i]` samples along axis `i`.
    ///
    /// A count of zero on any axis gives an empty walk.
    pub fn with_counts(low: &[T], upp: &[T], counts: &[usize]) -> error::Result<Self> {
        same_dimension(low.len(), upp.len())?;
        same_dimension(low.len(), counts.len())?;
        let counts = counts
            .iter()
            .map(|&c| i64::try_from(c).map_err(|_| Error::CountOverflow(c)))
            .collect::<error::Result<SmallVec<[i64; 8]>>>()?;
        let index = Lattice::<i64, M, D>::from_upper(&counts, true)?;
        let low_c = D::coords_from(low)?;
        let mut samples = Self {
            upp: low_c.clone(),
            step: low_c.clone(),
            cur: low_c.clone(),
            low: low_c,
            ordered: false,
            index,
        };
        samples.reset_to(low, upp)?;
        debug!(
            mode = %M::MODE,
            counts = ?counts.as_slice(),
            points = samples.num_points(),
            "uniform sampler created"
        );
        Ok(samples)
    }

    /// Sample `[low, upp]` with roughly `total` points in all.
    ///
    /// See [`counts_for_total`] for how the points are spread over the
    /// axes; the actual number of points is usually larger than `total`.
    pub fn with_total(low: &[T], upp: &[T], total: usize) -> error::Result<Self> {
        same_dimension(low.len(), upp.len())?;
        Self::with_counts(low, upp, &counts_for_total(low, upp, total))
    }

    /// Sample `[low, upp]` according to a [`SampleCount`].
    pub fn new(low: &[T], upp: &[T], count: &SampleCount) -> error::Result<Self> {
        same_dimension(low.len(), upp.len())?;
        Self::with_counts(low, upp, &count.resolve(low, upp))
    }

    /// Move the samples to a new box, keeping the per-axis counts, and
    /// restart the walk.
    pub fn reset_to(&mut self, low: &[T], upp: &[T]) -> error::Result<()> {
        same_dimension(self.index.dimension(), low.len())?;
        same_dimension(low.len(), upp.len())?;
        self.low = D::coords_from(low)?;
        self.upp = D::coords_from(upp)?;
        self.ordered = low.iter().zip(upp).all(|(l, u)| l <= u);

        let counts = self.index.num_points_cwise();
        for ((step, (&l, &u)), &n) in self
            .step
            .as_mut()
            .iter_mut()
            .zip(low.iter().zip(upp))
            .zip(counts.as_ref())
        {
            *step = (u - l) / ops::to_float(n.saturating_sub(1).max(1));
        }
        self.reset();
        Ok(())
    }

    /// Restart the walk at the first sample.
    pub fn reset(&mut self) {
        self.cur.as_mut().copy_from_slice(self.low.as_ref());
        self.index.reset();
    }

    /// Whether the sampler is positioned on a point.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.ordered && self.index.is_active()
    }

    /// The current sample.
    #[inline]
    pub fn current(&self) -> &D::Coords<T> {
        &self.cur
    }

    /// Move to the next sample; returns `false` once the walk is over.
    pub fn advance(&mut self) -> bool {
        if !self.is_active() || !self.index.advance() {
            return false;
        }
        let tensor = self.index.current().as_ref();
        let low = self.low.as_ref();
        let upp = self.upp.as_ref();
        let step = self.step.as_ref();
        for (axis, cur) in self.cur.as_mut().iter_mut().enumerate() {
            // Bounds are copied, never computed, so the first and last
            // sample carry no rounding error.
            *cur = if self.index.is_floor(axis) {
                low[axis]
            } else if self.index.is_ceil(axis) {
                upp[axis]
            } else {
                low[axis] + ops::to_float::<T, _>(tensor[axis]) * step[axis]
            };
        }
        true
    }

    /// Number of axes.
    pub fn dimension(&self) -> usize {
        self.index.dimension()
    }

    /// Lower corner of the box.
    pub fn lower(&self) -> &D::Coords<T> {
        &self.low
    }

    /// Upper corner of the box.
    pub fn upper(&self) -> &D::Coords<T> {
        &self.upp
    }

    /// Spacing between neighbouring samples along each axis.
    pub fn step(&self) -> &D::Coords<T> {
        &self.step
    }

    /// Per-axis sample index of the current point.
    pub fn tensor_index(&self) -> &D::Coords<i64> {
        self.index.current()
    }

    /// The lattice of sample indices driving the walk.
    pub fn index_lattice(&self) -> &Lattice<i64, M, D> {
        &self.index
    }

    /// Total number of samples the walk visits.
    pub fn num_points(&self) -> usize {
        if self.ordered {
            self.index.num_points()
        } else {
            0
        }
    }

    /// Number of samples along each axis.
    pub fn num_points_cwise(&self) -> D::Coords<usize> {
        self.index.num_points_cwise()
    }

    /// True if the current sample is the first along `axis`.
    pub fn is_floor(&self, axis: usize) -> bool {
        self.index.is_floor(axis)
    }

    /// True if the current sample is the last along `axis`.
    pub fn is_ceil(&self, axis: usize) -> bool {
        self.index.is_ceil(axis)
    }

    /// True if the current sample lies on the boundary of the box.
    pub fn is_boundary(&self) -> bool {
        self.index.is_boundary()
    }
}

impl<T: GridFloat, M: SampleMode, D: Dim> GridIterator for UniformSamples<T, M, D> {
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
    use crate::{
        mode::{Boundary, Vertex},
        point::Const,
    };

    /// Drain a sampler into owned points.
    fn walk<T: GridFloat, M: SampleMode, D: Dim>(s: &mut UniformSamples<T, M, D>) -> Vec<Vec<T>> {
        let mut out = Vec::new();
        while s.is_active() {
            out.push(s.current().as_ref().to_vec());
            s.advance();
        }
        out
    }

    #[test]
    fn three_samples_on_unit_interval() -> error::Result<()> {
        let mut s = UniformSamples::<f64>::with_counts(&[0.0], &[1.0], &[3])?;
        assert_eq!(s.num_points(), 3);
        assert_eq!(walk(&mut s), vec![vec![0.0], vec![0.5], vec![1.0]]);
        Ok(())
    }

    #[test]
    fn endpoints_are_exact() -> error::Result<()> {
        let low = [0.1, -0.3];
        let upp = [0.7, 2.9];
        let mut s = UniformSamples::<f64, Cube, Const<2>>::with_counts(&low, &upp, &[7, 11])?;
        let pts = walk(&mut s);
        assert_eq!(pts.len(), 77);
        assert_eq!(pts[0], vec![0.1, -0.3]);
        assert_eq!(pts[6][0].to_bits(), 0.7f64.to_bits());
        assert_eq!(pts[76], vec![0.7, 2.9]);
        for p in &pts {
            assert!(p[0] >= low[0] && p[0] <= upp[0]);
            assert!(p[1] >= low[1] && p[1] <= upp[1]);
        }
        Ok(())
    }

    #[test]
    fn step_and_tensor_index() -> error::Result<()> {
        let mut s = UniformSamples::<f64>::with_counts(&[0.0, 0.0], &[2.0, 1.0], &[5, 1])?;
        assert_eq!(s.step().as_slice(), &[0.5, 1.0]);
        assert_eq!(s.num_points_cwise().as_slice(), &[5, 1]);
        s.advance();
        s.advance();
        assert_eq!(s.tensor_index().as_slice(), &[2, 0]);
        assert_eq!(s.current().as_slice(), &[1.0, 0.0]);
        assert!(s.is_floor(1) && s.is_ceil(1));
        assert!(s.is_boundary());
        Ok(())
    }

    #[test]
    fn vertex_and_boundary_modes() -> error::Result<()> {
        let mut v =
            UniformSamples::<f64, Vertex>::with_counts(&[0.0, 0.0], &[1.0, 2.0], &[4, 4])?;
        assert_eq!(v.num_points(), 4);
        assert_eq!(
            walk(&mut v),
            vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 2.0], vec![1.0, 2.0]]
        );

        let mut b =
            UniformSamples::<f32, Boundary>::with_counts(&[0.0, 0.0], &[3.0, 3.0], &[4, 4])?;
        assert_eq!(b.num_points(), 12);
        let pts = walk(&mut b);
        assert_eq!(pts.len(), 12);
        assert!(!pts.contains(&vec![1.0, 1.0]));
        Ok(())
    }

    #[test]
    fn approximate_total() -> error::Result<()> {
        let s = UniformSamples::<f64>::with_total(&[0.0, 0.0], &[4.0, 1.0], 40)?;
        assert!(s.num_points() >= 40);
        let n = s.num_points();
        assert_eq!(s.points().count(), n);

        let same =
            UniformSamples::<f64>::new(&[0.0, 0.0], &[4.0, 1.0], &SampleCount::Approximate(40))?;
        assert_eq!(same.num_points(), n);
        Ok(())
    }

    #[test]
    fn unreachable_total_is_an_error() {
        assert_eq!(
            UniformSamples::<f64>::with_total(&[0.0, 0.0], &[1e-300, 1.0], 100).err(),
            Some(Error::CountOverflow(usize::MAX))
        );
    }

    #[test]
    fn reset_to_new_box() -> error::Result<()> {
        let mut s = UniformSamples::<f64>::with_counts(&[0.0], &[1.0], &[3])?;
        let first = walk(&mut s);
        s.reset();
        assert_eq!(walk(&mut s), first);

        s.reset_to(&[10.0], &[14.0])?;
        assert_eq!(s.step().as_slice(), &[2.0]);
        assert_eq!(walk(&mut s), vec![vec![10.0], vec![12.0], vec![14.0]]);
        assert!(s.reset_to(&[0.0, 0.0], &[1.0, 1.0]).is_err());
        Ok(())
    }

    #[test]
    fn empty_and_inverted() -> error::Result<()> {
        let zero = UniformSamples::<f64>::with_counts(&[0.0, 0.0], &[1.0, 1.0], &[3, 0])?;
        assert!(!zero.is_active());
        assert_eq!(zero.num_points(), 0);

        let inverted = UniformSamples::<f64>::with_counts(&[1.0], &[0.0], &[3])?;
        assert!(!inverted.is_active());
        assert_eq!(inverted.num_points(), 0);

        assert!(UniformSamples::<f64>::with_counts(&[0.0], &[1.0], &[3, 3]).is_err());
        assert!(UniformSamples::<f64, Cube, Const<2>>::with_counts(&[0.0], &[1.0], &[3]).is_err());
        Ok(())
    }
}
