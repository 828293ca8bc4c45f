//! Integer lattice iteration over N‑dimensional boxes.
//!
//! [`Lattice`] walks the integer points of a box in lexicographic order
//! with axis 0 varying fastest. The mode parameter restricts the walk to the
//! boundary or to the corners of the box. The samplers in this crate drive
//! their enumeration order through a lattice.

use std::marker::PhantomData;

use tracing::trace;

use crate::{
    error,
    grid::GridIterator,
    mode::{Cube, GridMode, Mode},
    ops,
    point::{Dim, Dynamic, GridInt, same_dimension},
};

/// Iterator over the integer points of a closed box `[low, upp]`.
///
/// The iterator is positioned on its first point right after construction;
/// [`Lattice::advance`] moves to the next one and reports whether there was
/// one. Once exhausted, [`Lattice::is_active`] is `false` until a reset.
#[derive(Debug, Clone)]
pub struct Lattice<Z: GridInt = i64, M: Mode = Cube, D: Dim = Dynamic> {
    /// Lower corner, inclusive.
    low: D::Coords<Z>,
    /// Upper corner, inclusive.
    upp: D::Coords<Z>,
    /// Current point.
    cur: D::Coords<Z>,
    /// Whether the box holds at least one point.
    nonempty: bool,
    /// Whether `cur` is a valid point of the walk.
    active: bool,
    /// Enumeration mode.
    mode: PhantomData<M>,
}

impl<Z: GridInt, M: Mode, D: Dim> Lattice<Z, M, D> {
    /// Create a lattice over `[low, upp]`, or `[low, upp)` per axis if
    /// `open` is set.
    ///
    /// Returns an error if the corners have different lengths, or a length
    /// other than the fixed dimension. An empty box is not an error: the
    /// lattice starts out exhausted.
    pub fn new(low: &[Z], upp: &[Z], open: bool) -> error::Result<Self> {
        let (low, upp, nonempty) = closed_bounds::<Z, D>(low, upp, open)?;
        trace!(mode = %M::MODE, dimension = low.as_ref().len(), nonempty, "lattice created");
        Ok(Self {
            cur: low.clone(),
            low,
            upp,
            nonempty,
            active: nonempty,
            mode: PhantomData,
        })
    }

    /// Create a lattice starting at the origin and ending at `upp`.
    pub fn from_upper(upp: &[Z], open: bool) -> error::Result<Self> {
        let upp = D::coords_from(upp)?;
        let low = D::filled(upp.as_ref().len(), Z::zero());
        Self::new(low.as_ref(), upp.as_ref(), open)
    }

    /// Replace the bounds and restart the walk.
    pub fn reset_to(&mut self, low: &[Z], upp: &[Z], open: bool) -> error::Result<()> {
        let (low, upp, nonempty) = closed_bounds::<Z, D>(low, upp, open)?;
        trace!(mode = %M::MODE, dimension = low.as_ref().len(), nonempty, "lattice bounds reset");
        self.cur = low.clone();
        self.low = low;
        self.upp = upp;
        self.nonempty = nonempty;
        self.active = nonempty;
        Ok(())
    }

    /// Restart the walk over the current (closed) bounds.
    pub fn reset(&mut self) {
        self.cur.as_mut().copy_from_slice(self.low.as_ref());
        self.active = self.nonempty;
    }

    /// Whether the lattice is positioned on a point.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The current point. Meaningless once the lattice is exhausted.
    #[inline]
    pub fn current(&self) -> &D::Coords<Z> {
        &self.cur
    }

    /// Move to the next point of the walk.
    ///
    /// Returns `false`, and leaves the lattice exhausted, when there is no
    /// next point. Advancing an exhausted lattice does nothing.
    pub fn advance(&mut self) -> bool {
        if !self.active {
            return false;
        }
        let low = self.low.as_ref();
        let upp = self.upp.as_ref();
        let cur = self.cur.as_mut();
        self.active = match M::MODE {
            GridMode::Cube => step_cube(low, upp, cur),
            GridMode::Vertex => step_vertex(low, upp, cur),
            GridMode::Boundary => step_boundary(low, upp, cur),
            GridMode::Cwise => false,
        };
        self.active
    }

    /// Number of axes.
    #[inline]
    pub fn dimension(&self) -> usize {
        D::FIXED.unwrap_or_else(|| self.low.as_ref().len())
    }

    /// The first point of the walk.
    pub fn lower(&self) -> &D::Coords<Z> {
        &self.low
    }

    /// The closed upper corner of the box.
    pub fn upper(&self) -> &D::Coords<Z> {
        &self.upp
    }

    /// True if coordinate `axis` is at its lower bound.
    #[inline]
    pub fn is_floor(&self, axis: usize) -> bool {
        self.cur.as_ref()[axis] == self.low.as_ref()[axis]
    }

    /// True if coordinate `axis` is at its upper bound.
    #[inline]
    pub fn is_ceil(&self, axis: usize) -> bool {
        self.cur.as_ref()[axis] == self.upp.as_ref()[axis]
    }

    /// True if coordinate `axis` is one step below its upper bound.
    pub fn is_before_ceil(&self, axis: usize) -> bool {
        let cur = self.cur.as_ref()[axis];
        let upp = self.upp.as_ref()[axis];
        cur < upp && cur + Z::one() == upp
    }

    /// True if any coordinate is at one of its bounds.
    pub fn is_boundary(&self) -> bool {
        on_bound(self.low.as_ref(), self.upp.as_ref(), self.cur.as_ref())
    }

    /// Total number of points the walk visits.
    ///
    /// # Panics
    ///
    /// In [`GridMode::Cwise`] mode, which has no meaning for a bare lattice.
    pub fn num_points(&self) -> usize {
        if M::MODE == GridMode::Cwise {
            panic!("Lattice::num_points is not supported in cwise mode");
        }
        if !self.nonempty {
            return 0;
        }
        match M::MODE {
            GridMode::Boundary => {
                let interior = ops::product(self.extents().map(|e| e.saturating_sub(2)));
                ops::product(self.extents()).saturating_sub(interior)
            }
            GridMode::Vertex => ops::product(self.extents().map(|e| if e > 1 { 2 } else { 1 })),
            _ => ops::product(self.extents()),
        }
    }

    /// Number of integer values per axis of the box.
    pub fn num_points_cwise(&self) -> D::Coords<usize> {
        let mut counts = D::filled(self.dimension(), 0usize);
        for (count, extent) in counts.as_mut().iter_mut().zip(self.extents()) {
            *count = extent;
        }
        counts
    }

    /// Stride vector of the box.
    ///
    /// The dot product of `current() - lower()` with the strides is the
    /// lexicographic position of the current point in the full box.
    pub fn strides(&self) -> D::Coords<usize> {
        let extents = self.num_points_cwise();
        let mut strides = D::filled(self.dimension(), 0usize);
        ops::fill_strides(extents.as_ref(), strides.as_mut());
        strides
    }

    /// Lexicographic position of the current point in the full box.
    pub fn flat_index(&self) -> usize {
        let strides = self.strides();
        self.low
            .as_ref()
            .iter()
            .zip(self.cur.as_ref())
            .zip(strides.as_ref())
            .map(|((&low, &cur), &stride)| (ops::extent(low, cur) - 1).saturating_mul(stride))
            .fold(0, usize::saturating_add)
    }

    /// Per-axis number of integer values, in axis order.
    fn extents(&self) -> impl Iterator<Item = usize> + '_ {
        self.low
            .as_ref()
            .iter()
            .zip(self.upp.as_ref())
            .map(|(&low, &upp)| ops::extent(low, upp))
    }
}

impl<Z: GridInt, M: Mode, D: Dim> GridIterator for Lattice<Z, M, D> {
    type Point = D::Coords<Z>;

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

/// Validate the corners and normalise them to a closed box.
///
/// Returns the corners and whether the box holds any point.
fn closed_bounds<Z: GridInt, D: Dim>(
    low: &[Z],
    upp: &[Z],
    open: bool,
) -> error::Result<(D::Coords<Z>, D::Coords<Z>, bool)> {
    same_dimension(low.len(), upp.len())?;
    let lo = D::coords_from(low)?;
    let mut hi = D::coords_from(upp)?;
    let mut nonempty = !low.is_empty();
    for (h, l) in hi.as_mut().iter_mut().zip(low) {
        if open {
            match h.checked_sub(&Z::one()) {
                Some(v) => *h = v,
                None => nonempty = false,
            }
        }
        nonempty &= *l <= *h;
    }
    Ok((lo, hi, nonempty))
}

/// True if any coordinate of `cur` sits on its lower or upper bound.
fn on_bound<Z: GridInt>(low: &[Z], upp: &[Z], cur: &[Z]) -> bool {
    cur.iter()
        .zip(low)
        .zip(upp)
        .any(|((c, l), u)| c == l || c == u)
}

/// Odometer step: bump the first axis that is below its ceiling and reset
/// every axis before it.
#[inline]
fn step_cube<Z: GridInt>(low: &[Z], upp: &[Z], cur: &mut [Z]) -> bool {
    for ((c, &lo), &hi) in cur.iter_mut().zip(low).zip(upp) {
        if *c != hi {
            *c = *c + Z::one();
            return true;
        }
        *c = lo;
    }
    false
}

/// Odometer step that jumps straight from floor to ceiling.
#[inline]
fn step_vertex<Z: GridInt>(low: &[Z], upp: &[Z], cur: &mut [Z]) -> bool {
    for ((c, &lo), &hi) in cur.iter_mut().zip(low).zip(upp) {
        if *c != hi {
            *c = hi;
            return true;
        }
        *c = lo;
    }
    false
}

/// Odometer step that never lands strictly inside the box.
///
/// A carry into axis `k > 0` leaves axis 0 at its floor, so only a plain
/// step of axis 0 can reach an interior point. That happens exactly when
/// axis 0 leaves its floor while no other axis is on a bound; the interior
/// run is then skipped by jumping axis 0 to its ceiling.
#[inline]
fn step_boundary<Z: GridInt>(low: &[Z], upp: &[Z], cur: &mut [Z]) -> bool {
    for axis in 0..cur.len() {
        if cur[axis] == upp[axis] {
            cur[axis] = low[axis];
            continue;
        }
        let skip_interior =
            axis == 0 && cur[0] == low[0] && !on_bound(&low[1..], &upp[1..], &cur[1..]);
        cur[axis] = if skip_interior {
            upp[axis]
        } else {
            cur[axis] + Z::one()
        };
        return true;
    }
    false
}
