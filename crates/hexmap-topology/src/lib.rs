//! Hexmap Coordinate Engine
//!
//! Coordinate math for flat-topped hexagonal grids: converting between
//! pixels and cells, finding neighbors and rings, and resolving cells that
//! fall off the edge of a bounded grid.
//!
//! # Coordinate Systems
//!
//! Cells are addressed in odd-q offset coordinates ([`AxialCoord`]): column
//! `q`, row `r`, with odd columns shifted down half a row. Directional math
//! runs in cube coordinates ([`CubeCoord`]) where x + y + z = 0 and a step
//! is a vector addition.
//!
//! # Boundaries
//!
//! A [`GridTopology`] has a width, a height and a wrap flag. Each axis
//! independently wraps, clamps or is unbounded (see [`Boundary`]).
//!
//! # Pixels
//!
//! A [`PixelProjector`] lays the grid out on a drawing surface, hands out
//! tile centers and corners to draw, and resolves pointer positions back to
//! cells.
//!
//! ```
//! use hexmap_topology::{AxialCoord, PixelPoint, PixelProjector};
//!
//! let projector = PixelProjector::new(100, 100, 20.0)?;
//! let hovered = projector.pixel_to_cell(PixelPoint::new(20, 23));
//! assert_eq!(hovered, Some(AxialCoord::new(0, 0)));
//!
//! let ring = projector.topology().ring(AxialCoord::new(1, 0), 1)?;
//! assert_eq!(ring.len(), 5); // clipped at the top edge
//! # Ok::<(), hexmap_topology::Error>(())
//! ```

mod boundary;
mod config;
mod coord;
mod error;
mod layout;
mod topology;

pub use boundary::{apply_boundary, Boundary};
pub use config::{LayoutConfig, TopologyConfig};
pub use coord::{to_axial, to_cube, AxialCoord, CubeCoord, FractionalCube, CUBE_DIRECTIONS};
pub use error::{Error, Result};
pub use layout::{horizontal_spacing, vertical_spacing, HexTile, PixelPoint, PixelProjector, CORNERS};
pub use topology::{cells_in_ring, GridTopology, RING_START_DIRECTION};

/// Directions around a cell
pub const DIRECTION_COUNT: usize = 6;

// Every direction yields one corner
const _: () = assert!(CUBE_DIRECTIONS.len() == DIRECTION_COUNT && CORNERS == DIRECTION_COUNT);
