//! Support operations for lattice counting and numeric conversion.

use num_traits::{NumCast, ToPrimitive};

use crate::point::{GridFloat, GridInt};

/// Number of integer points in the closed interval `[low, upp]`.
///
/// Inverted intervals have no points. Extents beyond `usize` saturate.
pub fn extent<Z: GridInt>(low: Z, upp: Z) -> usize {
    if upp < low {
        return 0;
    }
    upp.checked_sub(&low)
        .and_then(|span| span.to_usize())
        .and_then(|span| span.checked_add(1))
        .unwrap_or(usize::MAX)
}

/// Saturating product of a sequence of counts.
pub fn product(counts: impl IntoIterator<Item = usize>) -> usize {
    counts.into_iter().fold(1, usize::saturating_mul)
}

/// Stride vector for a box with the given per-axis extents.
///
/// `strides[0] == 1` and every further stride is the previous one times the
/// previous extent, so axis 0 varies fastest.
pub fn fill_strides(extents: &[usize], strides: &mut [usize]) {
    let mut acc = 1usize;
    for (stride, extent) in strides.iter_mut().zip(extents) {
        *stride = acc;
        acc = acc.saturating_mul(*extent);
    }
}

/// Convert a count or index to a float, saturating to infinity.
#[inline]
pub fn to_float<T: GridFloat, N: ToPrimitive>(n: N) -> T {
    <T as NumCast>::from(n).unwrap_or_else(T::infinity)
}
