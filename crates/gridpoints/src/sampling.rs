//! How many uniform samples to place along each axis.

use smallvec::SmallVec;
use tracing::debug;

use crate::{ops, point::GridFloat};

/// Sample count configuration for [`UniformSamples`](crate::UniformSamples).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleCount {
    /// Exact number of samples along each axis.
    PerAxis(SmallVec<[usize; 8]>),
    /// Approximate total number of samples, distributed over the axes by
    /// [`counts_for_total`].
    Approximate(usize),
}

impl SampleCount {
    /// Exact per-axis counts.
    pub fn per_axis(counts: &[usize]) -> Self {
        Self::PerAxis(SmallVec::from_slice(counts))
    }

    /// Resolve to per-axis counts for the box `[low, upp]`.
    pub fn resolve<T: GridFloat>(&self, low: &[T], upp: &[T]) -> SmallVec<[usize; 8]> {
        match self {
            Self::PerAxis(counts) => counts.clone(),
            Self::Approximate(total) => counts_for_total(low, upp, *total),
        }
    }
}

/// Distribute roughly `total` samples over the box `[low, upp]`.
///
/// Each axis gets `ceil(span_i / (h * w_i))` samples, where `w_i` is the
/// axis' share of the summed spans and `h = (prod(span) / total)^(1/dim)`
/// is the edge of an isotropic cell. The result is approximate: the product
/// of the counts is never below `total` for a box with positive spans, but
/// usually above it.
///
/// Axes with zero (or non-finite) span get a single sample and take no part
/// in the distribution. Every axis gets at least one sample. A count too
/// large for `usize` saturates to `usize::MAX`, which the sampler
/// constructors reject with [`Error::CountOverflow`](crate::error::Error).
pub fn counts_for_total<T: GridFloat>(low: &[T], upp: &[T], total: usize) -> SmallVec<[usize; 8]> {
    let spans: SmallVec<[T; 8]> = low.iter().zip(upp).map(|(&l, &u)| u - l).collect();
    let active = |s: &T| s.is_finite() && *s > T::zero();

    let live = spans.iter().filter(|s| active(*s)).count();
    let sum = spans
        .iter()
        .filter(|s| active(*s))
        .fold(T::zero(), |acc, &s| acc + s);
    let prod = spans
        .iter()
        .filter(|s| active(*s))
        .fold(T::one(), |acc, &s| acc * s);

    let counts: SmallVec<[usize; 8]> = if live == 0 {
        SmallVec::from_elem(1, spans.len())
    } else {
        let dim: T = ops::to_float(live);
        let h = (prod / ops::to_float(total)).powf(dim.recip());
        spans
            .iter()
            .map(|s| {
                if !active(s) {
                    return 1;
                }
                let weight = *s / sum;
                let n = (*s / (h * weight)).ceil();
                if n.is_nan() {
                    return 1;
                }
                n.to_usize().map_or(usize::MAX, |n| n.max(1))
            })
            .collect()
    };
    debug!(total, counts = ?counts.as_slice(), "derived per-axis sample counts");
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_covers_total() {
        for total in [1usize, 7, 50, 1000] {
            let counts = counts_for_total(&[0.0, -1.0, 2.0], &[3.0, 1.0, 2.5], total);
            assert_eq!(counts.len(), 3);
            assert!(counts.iter().all(|&c| c >= 1));
            assert!(
                ops::product(counts.iter().copied()) >= total,
                "{counts:?} for {total}"
            );
        }
    }

    #[test]
    fn degenerate_axes() {
        let counts = counts_for_total(&[0.0, 5.0], &[2.0, 5.0], 16);
        assert_eq!(counts[1], 1);
        assert!(counts[0] >= 16);

        let flat = counts_for_total(&[1.0f32, 1.0], &[1.0, 1.0], 16);
        assert_eq!(flat.as_slice(), &[1, 1]);

        let zero = counts_for_total(&[0.0], &[1.0], 0);
        assert_eq!(zero.as_slice(), &[1]);
    }

    #[test]
    fn anisotropic_box_saturates() {
        let counts = counts_for_total(&[0.0, 0.0], &[1e-300, 1.0], 100);
        assert_eq!(counts.as_slice(), &[usize::MAX, usize::MAX]);
    }

    #[test]
    fn resolve() {
        let exact = SampleCount::per_axis(&[3, 4]);
        assert_eq!(exact.resolve(&[0.0, 0.0], &[1.0, 1.0]).as_slice(), &[3, 4]);
        let approx = SampleCount::Approximate(9);
        assert!(approx.resolve(&[0.0], &[1.0])[0] >= 9);
    }
}
