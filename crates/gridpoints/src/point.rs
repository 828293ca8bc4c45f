//! N‑dimensional point storage and the coordinate kinds grids work over.

use std::fmt::Debug;

use num_traits::{Float, PrimInt};
use smallvec::{SmallVec, smallvec};

use crate::error::{self, Error};

/// Anything that can sit in a coordinate slot.
pub trait Scalar: Copy + Debug + Default + PartialOrd + 'static {}

impl<T: Copy + Debug + Default + PartialOrd + 'static> Scalar for T {}

/// Integer coordinate kind, used by the lattice.
pub trait GridInt: Scalar + PrimInt {}

impl<T: Scalar + PrimInt> GridInt for T {}

/// Floating point coordinate kind, used by the samplers.
pub trait GridFloat: Scalar + Float {}

impl<T: Scalar + Float> GridFloat for T {}

/// Dimensionality of a grid.
///
/// [`Const`] fixes the number of axes at compile time and stores points as
/// arrays, so axis loops have a static bound. [`Dynamic`] decides it at
/// construction and stores points inline for up to eight axes.
pub trait Dim: Copy + Debug + Default + 'static {
    /// Storage for one point with coordinates of type `T`.
    type Coords<T: Scalar>: Clone + Debug + PartialEq + AsRef<[T]> + AsMut<[T]>;

    /// The fixed number of axes, if any.
    const FIXED: Option<usize>;

    /// Copy `values` into point storage, checking the axis count.
    fn coords_from<T: Scalar>(values: &[T]) -> error::Result<Self::Coords<T>>;

    /// A point with `len` axes, every coordinate set to `value`.
    ///
    /// `len` is ignored by fixed dimensions.
    fn filled<T: Scalar>(len: usize, value: T) -> Self::Coords<T>;
}

/// Fixed dimensionality of `N` axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Const<const N: usize>;

/// Dimensionality chosen at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dynamic;

impl<const N: usize> Dim for Const<N> {
    type Coords<T: Scalar> = [T; N];

    const FIXED: Option<usize> = Some(N);

    fn coords_from<T: Scalar>(values: &[T]) -> error::Result<Self::Coords<T>> {
        <[T; N]>::try_from(values).map_err(|_| Error::DimensionMismatch {
            expected: N,
            got: values.len(),
        })
    }

    fn filled<T: Scalar>(len: usize, value: T) -> Self::Coords<T> {
        debug_assert_eq!(len, N, "fixed dimension mismatch");
        [value; N]
    }
}

impl Dim for Dynamic {
    type Coords<T: Scalar> = SmallVec<[T; 8]>;

    const FIXED: Option<usize> = None;

    fn coords_from<T: Scalar>(values: &[T]) -> error::Result<Self::Coords<T>> {
        Ok(SmallVec::from_slice(values))
    }

    fn filled<T: Scalar>(len: usize, value: T) -> Self::Coords<T> {
        smallvec![value; len]
    }
}

/// A point of a grid with dimensionality `D`.
pub type Point<T, D> = <D as Dim>::Coords<T>;

/// A point with a runtime number of axes.
pub type DynPoint<T> = SmallVec<[T; 8]>;

/// Check that two coordinate slices describe the same number of axes.
pub(crate) fn same_dimension(expected: usize, got: usize) -> error::Result<()> {
    if expected == got {
        Ok(())
    } else {
        Err(Error::DimensionMismatch { expected, got })
    }
}
