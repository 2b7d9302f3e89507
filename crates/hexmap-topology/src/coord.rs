//! Hexagonal cell coordinates.
//!
//! Cells are stored and displayed in odd-q offset coordinates (q, r): `q` is
//! the column and `r` the row within that column, with every odd column
//! pushed down by half a row. Direction and distance math happens in cube
//! coordinates (x, y, z) on the plane x + y + z = 0, where every step is a
//! plain vector addition.
//!
//! The conversion between the two uses floor division on the column, so it
//! is a bijection over all integers, negative columns included. Column
//! parity never needs a separate lookup table.

use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{Error, Result};

/// A cell in odd-q offset coordinates.
///
/// Any pair of integers is a valid coordinate; whether the cell exists is a
/// question for [`crate::GridTopology::contains`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxialCoord {
    /// Column
    pub q: i64,
    /// Row within the column
    pub r: i64,
}

impl AxialCoord {
    /// Top-left cell of a bounded grid.
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    /// Create a new coordinate.
    pub const fn new(q: i64, r: i64) -> Self {
        Self { q, r }
    }

    /// Convert to cube form.
    #[inline]
    pub const fn to_cube(self) -> CubeCoord {
        to_cube(self.q, self.r)
    }

    /// Like [`AxialCoord::to_cube`], or `None` when a component leaves i64.
    pub fn checked_to_cube(self) -> Option<CubeCoord> {
        let y = self.r.checked_sub((self.q - (self.q & 1)) >> 1)?;
        let z = self.q.checked_add(y)?.checked_neg()?;
        Some(CubeCoord { x: self.q, y, z })
    }

    /// Number of single steps between two cells, ignoring grid bounds.
    pub fn distance(&self, other: &Self) -> u64 {
        self.to_cube().distance(&other.to_cube())
    }
}

impl From<(i64, i64)> for AxialCoord {
    fn from((q, r): (i64, i64)) -> Self {
        Self { q, r }
    }
}

impl From<AxialCoord> for (i64, i64) {
    fn from(coord: AxialCoord) -> Self {
        (coord.q, coord.r)
    }
}

impl From<CubeCoord> for AxialCoord {
    fn from(cube: CubeCoord) -> Self {
        cube.to_axial()
    }
}

impl TryFrom<&[i64]> for AxialCoord {
    type Error = Error;

    fn try_from(values: &[i64]) -> Result<Self> {
        match *values {
            [q, r] => Ok(Self { q, r }),
            _ => Err(Error::WrongArity {
                expected: "2",
                found: values.len(),
            }),
        }
    }
}

impl std::fmt::Display for AxialCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

/// A cell in cube coordinates.
///
/// The fields are private so that x + y + z = 0 holds for every value that
/// exists. Arithmetic between valid cubes stays on the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CubeCoord {
    x: i64,
    y: i64,
    z: i64,
}

/// The six unit directions, clockwise on screen starting from upper-right.
pub const CUBE_DIRECTIONS: [CubeCoord; 6] = [
    CubeCoord { x: 1, y: -1, z: 0 },  // Upper right
    CubeCoord { x: 1, y: 0, z: -1 },  // Lower right
    CubeCoord { x: 0, y: 1, z: -1 },  // Down
    CubeCoord { x: -1, y: 1, z: 0 },  // Lower left
    CubeCoord { x: -1, y: 0, z: 1 },  // Upper left
    CubeCoord { x: 0, y: -1, z: 1 },  // Up
];

impl CubeCoord {
    /// The cube origin, cell (0, 0).
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    /// Create a cube coordinate, checking the x + y + z = 0 invariant.
    pub fn new(x: i64, y: i64, z: i64) -> Result<Self> {
        if x as i128 + y as i128 + z as i128 != 0 {
            return Err(Error::BrokenCubeInvariant { x, y, z });
        }
        Ok(Self { x, y, z })
    }

    /// Create from two components, deriving z = -x - y.
    pub const fn from_xy(x: i64, y: i64) -> Self {
        Self { x, y, z: -x - y }
    }

    pub const fn x(&self) -> i64 {
        self.x
    }

    pub const fn y(&self) -> i64 {
        self.y
    }

    pub const fn z(&self) -> i64 {
        self.z
    }

    /// Convert back to odd-q offset form.
    #[inline]
    pub const fn to_axial(self) -> AxialCoord {
        to_axial(self.x, self.y, self.z)
    }

    /// Hexagonal distance between two cubes.
    ///
    /// max(|dx|, |dy|, |dz|), the number of single steps between the cells.
    pub fn distance(&self, other: &Self) -> u64 {
        // Any two i64 differ by at most u64::MAX
        let delta = |a: i64, b: i64| (a as i128 - b as i128).unsigned_abs() as u64;
        let dx = delta(self.x, other.x);
        let dy = delta(self.y, other.y);
        let dz = delta(self.z, other.z);
        dx.max(dy).max(dz)
    }

    /// Component-wise sum, or `None` on overflow.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(other.x)?,
            y: self.y.checked_add(other.y)?,
            z: self.z.checked_add(other.z)?,
        })
    }

    /// Scale by `factor`, or `None` on overflow.
    pub fn checked_scale(self, factor: i64) -> Option<Self> {
        Some(Self {
            x: self.x.checked_mul(factor)?,
            y: self.y.checked_mul(factor)?,
            z: self.z.checked_mul(factor)?,
        })
    }
}

impl Add for CubeCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for CubeCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Neg for CubeCoord {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Mul<i64> for CubeCoord {
    type Output = Self;

    #[inline]
    fn mul(self, factor: i64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }
}

impl From<AxialCoord> for CubeCoord {
    fn from(coord: AxialCoord) -> Self {
        coord.to_cube()
    }
}

impl TryFrom<&[i64]> for CubeCoord {
    type Error = Error;

    fn try_from(values: &[i64]) -> Result<Self> {
        match *values {
            [x, y] => Ok(Self::from_xy(x, y)),
            [x, y, z] => Self::new(x, y, z),
            _ => Err(Error::WrongArity {
                expected: "2 or 3",
                found: values.len(),
            }),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CubeCoord {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            x: i64,
            y: i64,
            z: i64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.x, raw.y, raw.z).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for CubeCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Odd-q offset to cube.
///
/// `q - (q & 1)` is always even, so the shift is an exact floor division
/// for negative columns too. Rows within 2^62 of the i64 limits can
/// overflow; [`AxialCoord::checked_to_cube`] reports that instead.
#[inline]
pub const fn to_cube(q: i64, r: i64) -> CubeCoord {
    let x = q;
    let y = r - ((q - (q & 1)) >> 1);
    CubeCoord { x, y, z: -x - y }
}

/// Cube to odd-q offset. Inverse of [`to_cube`].
///
/// For a cube on the plane the row is floor((y - z) / 2), which always fits
/// in i64.
#[inline]
pub const fn to_axial(x: i64, y: i64, _z: i64) -> AxialCoord {
    AxialCoord {
        q: x,
        r: y + ((x - (x & 1)) >> 1),
    }
}

/// A point between cell centers, in continuous cube space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractionalCube {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl FractionalCube {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Snap to the nearest cell.
    ///
    /// Rounding each component on its own can leave the plane, so the
    /// component with the largest rounding error is recomputed from the
    /// other two. Ties go to z, then y: x is only recomputed when its error
    /// is strictly the largest.
    pub fn round(self) -> CubeCoord {
        let mut rx = self.x.round();
        let mut ry = self.y.round();
        let mut rz = self.z.round();

        let dx = (self.x - rx).abs();
        let dy = (self.y - ry).abs();
        let dz = (self.z - rz).abs();

        if dx > dy && dx > dz {
            rx = -ry - rz;
        } else if dy > dz {
            ry = -rx - rz;
        } else {
            rz = -rx - ry;
        }

        CubeCoord {
            x: rx as i64,
            y: ry as i64,
            z: rz as i64,
        }
    }
}
