//! Incremental Highlighting
//!
//! Rendering layers that outline the cells around the pointer only need to
//! redraw what changed between two pointer positions. [`Highlight`] keeps
//! the previously highlighted cells and reports the difference when the
//! hovered cell moves.
//!
//! The coordinate engine stays stateless: every update asks
//! [`GridTopology`](hexmap_topology::GridTopology) for a fresh ring or
//! neighbor set and diffs it against the last one.
//!
//! ```
//! use hexmap_highlight::{Highlight, Shape};
//! use hexmap_topology::{AxialCoord, GridTopology};
//!
//! let grid = GridTopology::new(10, 10, false);
//! let mut highlight = Highlight::new(Shape::Ring, 1);
//!
//! let first = highlight.update(&grid, Some(AxialCoord::new(4, 4)))?;
//! assert_eq!(first.added.len(), 6);
//!
//! let second = highlight.update(&grid, Some(AxialCoord::new(4, 4)))?;
//! assert!(second.is_empty());
//! # Ok::<(), hexmap_topology::Error>(())
//! ```

mod highlight;

pub use highlight::{Highlight, HighlightDelta, Shape};
