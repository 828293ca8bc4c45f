//! Walk a boundary lattice, then sample a box uniformly and along
//! hand-picked knots.

use std::error::Error;

use gridpoints::{Boundary, CoordinateSamples, GridIterator, Lattice, SampleCount, UniformSamples};

fn main() -> Result<(), Box<dyn Error>> {
    // Boundary of a 4x3 integer box: the 2 interior points are skipped.
    let boundary = Lattice::<i64, Boundary>::new(&[0, 0], &[3, 2], false)?;
    println!("{} boundary points", boundary.num_points());
    for p in boundary.points() {
        println!("  {:?}", p.as_slice());
    }

    // Roughly 20 evenly spaced samples of [0, 2] x [0, 1].
    let count = SampleCount::Approximate(20);
    let uniform = UniformSamples::<f64>::new(&[0.0, 0.0], &[2.0, 1.0], &count)?;
    println!(
        "{} uniform samples, step {:?}",
        uniform.num_points(),
        uniform.step().as_slice()
    );

    // Non-uniform knots per axis.
    let knots = vec![vec![0.0, 0.1, 0.5, 1.0], vec![0.0, 1.0]];
    let mut grid = CoordinateSamples::<f64>::new(&knots)?;
    while grid.is_active() {
        println!("  {:?} at {:?}", grid.current().as_slice(), grid.tensor_index().as_slice());
        grid.advance();
    }

    Ok(())
}
