//! Iteration over the points of N‑dimensional boxes.
//!
//! Every grid in this crate is a single-pass, sequential walk in
//! lexicographic order with axis 0 varying fastest. Grids are specialised at
//! compile time along three independent axes:
//!
//! - coordinate kind: integer ([`Lattice`]) or floating point
//!   ([`UniformSamples`], [`CoordinateSamples`]);
//! - mode: [`Cube`], [`Boundary`], [`Vertex`] or coordinate-wise;
//! - dimension: fixed ([`Const`]) or chosen at runtime ([`Dynamic`]).
//!
//! All of them implement [`GridIterator`]. The [`registry`] builds boxed
//! grids when the mode is only known at runtime.
//!
//! ```
//! use gridpoints::{Boundary, GridIterator, Lattice};
//!
//! let grid = Lattice::<i64, Boundary>::new(&[0, 0], &[3, 3], false)?;
//! assert_eq!(grid.num_points(), 12);
//! assert!(grid.points().all(|p| p.contains(&0) || p.contains(&3)));
//! # Ok::<(), gridpoints::error::Error>(())
//! ```

/// Coordinate-wise grids over caller supplied axis values.
pub mod cwise;
/// Error types used across the crate.
pub mod error;
/// The `GridIterator` trait and its std iterator adapter.
mod grid;
/// Integer lattice iteration.
pub mod lattice;
/// Enumeration modes.
pub mod mode;
/// Internal counting and conversion helpers.
#[doc(hidden)]
pub mod ops;
/// N‑dimensional point storage and coordinate kinds.
pub mod point;
/// Runtime construction of boxed grids.
pub mod registry;
/// Sample count configuration.
pub mod sampling;
/// Uniformly spaced numeric samples.
pub mod uniform;

pub use crate::{
    cwise::CoordinateSamples,
    grid::{GridIterator, Points},
    lattice::Lattice,
    mode::{Boundary, Cube, Cwise, GridMode, Mode, SampleMode, Vertex},
    point::{Const, Dim, DynPoint, Dynamic, GridFloat, GridInt, Point, Scalar},
    sampling::SampleCount,
    uniform::UniformSamples,
};

/// Lattice over a fixed number of axes.
pub type FixedLattice<const N: usize, M = Cube> = Lattice<i64, M, Const<N>>;

/// Uniform sampler over a fixed number of axes.
pub type FixedSamples<const N: usize, M = Cube> = UniformSamples<f64, M, Const<N>>;

/// Construct a lattice by mode name, with bounds known only at runtime.
///
/// Returns an error if the name is unknown or names a mode without an
/// integer lattice form.
pub fn lattice_from_name(
    name: &str,
    low: &[i64],
    upp: &[i64],
    open: bool,
) -> error::Result<registry::DynLattice> {
    registry::lattice(name.parse()?, low, upp, open)
}
