//! Error types for the coordinate engine.

use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building or querying a grid.
///
/// Pixel positions that resolve outside the grid are not errors; see
/// [`crate::PixelProjector::pixel_to_cell`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Tile circumradius must be positive and finite
    #[error("Invalid tile radius: {0}")]
    InvalidRadius(f64),

    /// Drawing surface cannot hold a single column or row of tiles
    #[error("Surface {width}x{height} is too small for tiles of radius {radius}")]
    SurfaceTooSmall { width: u32, height: u32, radius: f64 },

    /// Coordinate built from the wrong number of components
    #[error("Wrong number of coordinate components: expected {expected}, found {found}")]
    WrongArity { expected: &'static str, found: usize },

    /// Cube triple off the x + y + z = 0 plane
    #[error("Cube coordinate ({x}, {y}, {z}) does not sum to zero")]
    BrokenCubeInvariant { x: i64, y: i64, z: i64 },

    /// Neighbor/ring distance below zero
    #[error("Distance must be non-negative, got {0}")]
    NegativeDistance(i64),

    /// Cell arithmetic left the i64 range
    #[error("Coordinate arithmetic overflowed i64")]
    CoordinateOverflow,

    /// Unbounded ring too large to hold in memory
    #[error("Ring at distance {0} is too large to allocate")]
    RingTooLarge(i64),

    /// Unparseable configuration value
    #[error("Invalid config value for {key}: {value:?}")]
    InvalidConfig { key: &'static str, value: String },
}
