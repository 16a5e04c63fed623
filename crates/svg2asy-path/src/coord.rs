//! The [`CoordPair`] value type used for anchor and control points.

use std::fmt;
use std::ops::{Add, Index, Neg};

use thiserror::Error;

/// A coordinate sequence that did not contain exactly two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("coordinate must be exactly two comma-separated numbers")]
pub struct MalformedCoordinate;

/// An immutable 2-D point or offset over a numeric type.
///
/// Pairs are plain values: addition is component-wise and returns a fresh
/// pair, and nothing mutates in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordPair<T> {
    x: T,
    y: T,
}

impl<T> CoordPair<T> {
    /// Create a pair directly from its two components.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Build a pair from an iterator that must yield exactly two values.
    pub fn from_coords<I>(coords: I) -> Result<Self, MalformedCoordinate>
    where
        I: IntoIterator<Item = T>,
    {
        let mut coords = coords.into_iter();
        match (coords.next(), coords.next(), coords.next()) {
            (Some(x), Some(y), None) => Ok(Self { x, y }),
            _ => Err(MalformedCoordinate),
        }
    }
}

impl<T: Add<Output = T>> Add for CoordPair<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> Index<usize> for CoordPair<T> {
    type Output = T;

    /// Component 0 is x, component 1 is y. Any other index is a caller bug.
    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("coordinate index out of range: {index}"),
        }
    }
}

impl<T> fmt::Display for CoordPair<T>
where
    T: Copy + Neg<Output = T> + fmt::Display,
{
    /// Renders `(x, -y)`.
    ///
    /// The sign flip converts the SVG y axis (top to bottom) into the
    /// Asymptote y axis (bottom to top). It happens here and only here, so
    /// every point is flipped exactly once, at render time.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, -self.y)
    }
}
