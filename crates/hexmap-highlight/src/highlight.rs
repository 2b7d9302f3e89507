//! Highlight state and deltas.

use std::collections::HashSet;

use hexmap_topology::{AxialCoord, GridTopology, Result};
use tracing::trace;

/// Which cells around the hovered cell get highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Every cell exactly `distance` steps away, clockwise
    Ring,
    /// The six cells `distance` steps away along each direction
    Neighbors,
}

/// What changed between two highlight updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightDelta {
    /// Newly highlighted, in traversal order
    pub added: Vec<AxialCoord>,
    /// No longer highlighted, in the previous traversal order
    pub removed: Vec<AxialCoord>,
    /// Highlighted before and after, in traversal order
    pub kept: Vec<AxialCoord>,
}

impl HighlightDelta {
    /// True when nothing needs redrawing.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Cells currently highlighted around the hovered cell.
#[derive(Debug, Clone)]
pub struct Highlight {
    shape: Shape,
    distance: i64,
    origin: Option<AxialCoord>,
    cells: Vec<AxialCoord>,
}

impl Highlight {
    pub fn new(shape: Shape, distance: i64) -> Self {
        Self {
            shape,
            distance,
            origin: None,
            cells: Vec::new(),
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn distance(&self) -> i64 {
        self.distance
    }

    /// The hovered cell, if any.
    pub fn origin(&self) -> Option<AxialCoord> {
        self.origin
    }

    /// Highlighted cells in traversal order.
    pub fn cells(&self) -> &[AxialCoord] {
        &self.cells
    }

    /// Move the highlight to `origin`, or clear it when `origin` is `None`.
    ///
    /// Fails only when the configured distance is negative.
    pub fn update(
        &mut self,
        topology: &GridTopology,
        origin: Option<AxialCoord>,
    ) -> Result<HighlightDelta> {
        let next = match origin {
            Some(cell) => self.cells_around(topology, cell)?,
            None => Vec::new(),
        };

        let delta = diff(&self.cells, &next);
        trace!(
            origin = ?origin,
            added = delta.added.len(),
            removed = delta.removed.len(),
            "highlight updated"
        );

        self.origin = origin;
        self.cells = next;
        Ok(delta)
    }

    /// Drop the highlight entirely.
    pub fn clear(&mut self) -> HighlightDelta {
        self.origin = None;
        HighlightDelta {
            removed: std::mem::take(&mut self.cells),
            ..HighlightDelta::default()
        }
    }

    fn cells_around(&self, topology: &GridTopology, origin: AxialCoord) -> Result<Vec<AxialCoord>> {
        let mut cells = match self.shape {
            Shape::Ring => topology.ring(origin, self.distance)?,
            Shape::Neighbors => topology.neighbors(origin, self.distance)?,
        };

        // Small wrapping grids can reach the same cell twice
        let mut seen = HashSet::with_capacity(cells.len());
        cells.retain(|cell| seen.insert(*cell));
        Ok(cells)
    }
}

fn diff(previous: &[AxialCoord], next: &[AxialCoord]) -> HighlightDelta {
    let before: HashSet<_> = previous.iter().copied().collect();
    let after: HashSet<_> = next.iter().copied().collect();

    let (kept, added): (Vec<_>, Vec<_>) =
        next.iter().copied().partition(|cell| before.contains(cell));
    let removed = previous
        .iter()
        .filter(|cell| !after.contains(cell))
        .copied()
        .collect();

    HighlightDelta {
        added,
        removed,
        kept,
    }
}
