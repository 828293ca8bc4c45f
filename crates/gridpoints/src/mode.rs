//! Enumeration modes, both as runtime values and as type-level markers.

use std::{fmt, str::FromStr};

use crate::error::{self, Error};

/// Names accepted by [`GridMode::from_str`], in declaration order.
pub const MODE_NAMES: &[&str] = &["cube", "boundary", "vertex", "cwise"];

/// Which subset of a box a grid walks over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridMode {
    /// Every point of the box, lexicographically.
    Cube,
    /// Only points with at least one coordinate on a bound.
    Boundary,
    /// Only the corners of the box.
    Vertex,
    /// Points assembled from independent per-axis coordinate lists.
    Cwise,
}

impl GridMode {
    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Boundary => "boundary",
            Self::Vertex => "vertex",
            Self::Cwise => "cwise",
        }
    }
}

impl fmt::Display for GridMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GridMode {
    type Err = Error;

    fn from_str(s: &str) -> error::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cube" => Ok(Self::Cube),
            "boundary" | "bdr" => Ok(Self::Boundary),
            "vertex" => Ok(Self::Vertex),
            "cwise" => Ok(Self::Cwise),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}

/// Compile-time selection of a [`GridMode`].
///
/// Iterators match on [`Mode::MODE`], which is a constant for every
/// instantiation, so the unused arms are removed at compile time.
pub trait Mode: Copy + fmt::Debug + Default + 'static {
    /// The runtime mode this marker stands for.
    const MODE: GridMode;
}

/// Modes that the uniform sampler supports.
pub trait SampleMode: Mode {}

/// Marker for [`GridMode::Cube`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cube;

/// Marker for [`GridMode::Boundary`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Boundary;

/// Marker for [`GridMode::Vertex`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vertex;

/// Marker for [`GridMode::Cwise`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cwise;

impl Mode for Cube {
    const MODE: GridMode = GridMode::Cube;
}

impl Mode for Boundary {
    const MODE: GridMode = GridMode::Boundary;
}

impl Mode for Vertex {
    const MODE: GridMode = GridMode::Vertex;
}

impl Mode for Cwise {
    const MODE: GridMode = GridMode::Cwise;
}

impl SampleMode for Cube {}
impl SampleMode for Boundary {}
impl SampleMode for Vertex {}
