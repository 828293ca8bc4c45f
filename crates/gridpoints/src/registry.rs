use crate::{
    error::{self, Error},
    grid::GridIterator,
    lattice::Lattice,
    mode::{Boundary, Cube, GridMode, Vertex},
    point::{DynPoint, Dynamic},
    sampling::SampleCount,
    uniform::UniformSamples,
};

/// A lattice with its mode chosen at runtime.
pub type DynLattice = Box<dyn GridIterator<Point = DynPoint<i64>>>;

/// A uniform sampler with its mode chosen at runtime.
pub type DynUniform = Box<dyn GridIterator<Point = DynPoint<f64>>>;

/// Build an integer lattice over `[low, upp]` (or `[low, upp)` if `open`)
/// walked in `mode`.
///
/// [`GridMode::Cwise`] has no integer lattice form and is rejected.
pub fn lattice(mode: GridMode, low: &[i64], upp: &[i64], open: bool) -> error::Result<DynLattice> {
    let grid: DynLattice = match mode {
        GridMode::Cube => Box::new(Lattice::<i64, Cube, Dynamic>::new(low, upp, open)?),
        GridMode::Boundary => Box::new(Lattice::<i64, Boundary, Dynamic>::new(low, upp, open)?),
        GridMode::Vertex => Box::new(Lattice::<i64, Vertex, Dynamic>::new(low, upp, open)?),
        GridMode::Cwise => {
            return Err(Error::UnsupportedMode {
                operation: "lattice",
                mode,
            });
        }
    };
    Ok(grid)
}

/// Build a uniform sampler over `[low, upp]` walked in `mode`.
///
/// [`GridMode::Cwise`] needs explicit coordinate lists and is rejected; use
/// [`CoordinateSamples`](crate::CoordinateSamples) instead.
pub fn uniform(
    mode: GridMode,
    low: &[f64],
    upp: &[f64],
    count: &SampleCount,
) -> error::Result<DynUniform> {
    let grid: DynUniform = match mode {
        GridMode::Cube => Box::new(UniformSamples::<f64, Cube, Dynamic>::new(low, upp, count)?),
        GridMode::Boundary => {
            Box::new(UniformSamples::<f64, Boundary, Dynamic>::new(low, upp, count)?)
        }
        GridMode::Vertex => Box::new(UniformSamples::<f64, Vertex, Dynamic>::new(low, upp, count)?),
        GridMode::Cwise => {
            return Err(Error::UnsupportedMode {
                operation: "uniform",
                mode,
            });
        }
    };
    Ok(grid)
}
