//! Per-axis boundary rules.
//!
//! Each axis of a grid resolves out-of-range values on its own:
//! - Wrap: `wrap` set and dimension > 0, value taken modulo the dimension
//! - Clamp: `wrap` unset and dimension > 0, value saturated to [0, dimension - 1]
//! - Unbounded: dimension <= 0, value passed through

/// How one axis treats values outside `[0, dimension)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Boundary {
    Wrap,
    Clamp,
    Unbounded,
}

impl Boundary {
    /// Pick the rule for an axis of the given size.
    pub const fn for_axis(dimension: i64, wrap: bool) -> Self {
        if dimension <= 0 {
            Self::Unbounded
        } else if wrap {
            Self::Wrap
        } else {
            Self::Clamp
        }
    }

    /// Resolve `value` on an axis of size `dimension`.
    #[inline]
    pub fn resolve(self, value: i64, dimension: i64) -> i64 {
        match self {
            Self::Wrap => value.rem_euclid(dimension),
            Self::Clamp => value.clamp(0, dimension - 1),
            Self::Unbounded => value,
        }
    }

    /// Whether every value on this axis maps to a cell without loss.
    pub const fn is_cyclic(self) -> bool {
        matches!(self, Self::Wrap | Self::Unbounded)
    }
}

/// Apply the boundary rule for an axis of size `dimension`.
///
/// Each axis is resolved on its own. [`crate::GridTopology::wrap_coordinate`]
/// also shifts the row when wrapping across an odd width flips column parity.
///
/// ```
/// use hexmap_topology::apply_boundary;
///
/// assert_eq!(apply_boundary(-1, 3, true), 2);   // wrap
/// assert_eq!(apply_boundary(-1, 3, false), 0);  // clamp
/// assert_eq!(apply_boundary(-1, 0, false), -1); // unbounded
/// ```
pub fn apply_boundary(value: i64, dimension: i64, wrap: bool) -> i64 {
    Boundary::for_axis(dimension, wrap).resolve(value, dimension)
}
