//! Grid bounds, neighbor lookup and ring enumeration.

use std::ops::Range;

use tracing::debug;

use crate::boundary::Boundary;
use crate::config::TopologyConfig;
use crate::coord::{AxialCoord, CubeCoord, CUBE_DIRECTIONS};
use crate::error::{Error, Result};

/// Index into [`CUBE_DIRECTIONS`] that rings start from (upper left).
pub const RING_START_DIRECTION: usize = 4;

/// Number of cells in a full ring at `distance`.
///
/// - Ring 0: 1 cell
/// - Ring n > 0: 6n cells, saturating at `u64::MAX`
#[inline]
pub const fn cells_in_ring(distance: u64) -> u64 {
    if distance == 0 {
        1
    } else {
        distance.saturating_mul(6)
    }
}

/// Immutable description of a grid's extent and edge behavior.
///
/// A dimension of zero (or below) leaves that axis unbounded. `wrap` only
/// matters on axes that have a positive size, so a grid can wrap
/// horizontally while being infinite vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridTopology {
    width: i64,
    height: i64,
    wrap: bool,
}

impl GridTopology {
    /// Create a topology. Non-positive dimensions are unbounded.
    pub fn new(width: i64, height: i64, wrap: bool) -> Self {
        let topology = Self { width, height, wrap };
        debug!(
            width,
            height,
            horizontal = ?topology.horizontal(),
            vertical = ?topology.vertical(),
            "grid topology created"
        );
        topology
    }

    /// A topology with no bounds on either axis.
    pub const fn unbounded() -> Self {
        Self {
            width: 0,
            height: 0,
            wrap: false,
        }
    }

    pub fn from_config(config: &TopologyConfig) -> Self {
        Self::new(config.width, config.height, config.wrap)
    }

    pub const fn width(&self) -> i64 {
        self.width
    }

    pub const fn height(&self) -> i64 {
        self.height
    }

    pub const fn wraps(&self) -> bool {
        self.wrap
    }

    /// Boundary rule for the column axis.
    pub const fn horizontal(&self) -> Boundary {
        Boundary::for_axis(self.width, self.wrap)
    }

    /// Boundary rule for the row axis.
    pub const fn vertical(&self) -> Boundary {
        Boundary::for_axis(self.height, self.wrap)
    }

    /// True when no axis clamps, so every coordinate resolves to a cell.
    pub const fn is_cyclic(&self) -> bool {
        self.horizontal().is_cyclic() && self.vertical().is_cyclic()
    }

    /// Whether the cell lies inside the grid.
    pub fn contains(&self, coord: AxialCoord) -> bool {
        (self.width <= 0 || (0..self.width).contains(&coord.q))
            && (self.height <= 0 || (0..self.height).contains(&coord.r))
    }

    /// Resolve a raw coordinate against both axes.
    ///
    /// When a column wraps across an odd width its parity flips, and with it
    /// the half-row shift of the odd-q layout. The row is then moved so the
    /// cell keeps its screen height, rounding downward. On an unbounded row
    /// axis that move saturates at `i64::MAX`.
    pub fn wrap_coordinate(&self, coord: AxialCoord) -> AxialCoord {
        let horizontal = self.horizontal();
        let vertical = self.vertical();
        let q = horizontal.resolve(coord.q, self.width);

        let mut r = vertical.resolve(coord.r, self.height);
        if horizontal == Boundary::Wrap && coord.q & 1 == 1 && q & 1 == 0 {
            r = vertical.resolve(r.saturating_add(1), self.height);
        }

        AxialCoord { q, r }
    }

    /// Cells `distance` steps away along each of the six directions.
    ///
    /// Order follows [`CUBE_DIRECTIONS`]. On a wrapping grid every neighbor is
    /// returned after wrapping; otherwise neighbors that fall off a clamped
    /// edge are dropped instead of being clamped onto an existing cell.
    ///
    /// Fails with [`Error::CoordinateOverflow`] when a neighbor does not fit
    /// in i64.
    pub fn neighbors(&self, coord: AxialCoord, distance: i64) -> Result<Vec<AxialCoord>> {
        check_distance(distance)?;

        let origin = coord.checked_to_cube().ok_or(Error::CoordinateOverflow)?;
        let mut neighbors = Vec::with_capacity(CUBE_DIRECTIONS.len());

        for direction in CUBE_DIRECTIONS {
            let raw = translate(origin, direction, distance)?.to_axial();
            let wrapped = self.wrap_coordinate(raw);
            if self.is_cyclic() || wrapped == raw {
                neighbors.push(wrapped);
            }
        }

        Ok(neighbors)
    }

    /// The six adjacent cells, see [`GridTopology::neighbors`].
    pub fn adjacent(&self, coord: AxialCoord) -> Vec<AxialCoord> {
        self.neighbors(coord, 1).unwrap_or_default()
    }

    /// Cells exactly `distance` steps from `coord`, walked clockwise.
    ///
    /// The walk starts `distance` steps toward the upper left and follows
    /// each direction in turn for `distance` steps. Cells outside the grid
    /// are skipped without wrapping, so a clipped ring keeps the relative
    /// order of the cells that remain.
    ///
    /// On a bounded axis only the part of each side that can cross the grid
    /// is walked, so large distances on small grids stay cheap. A full ring
    /// on an unbounded grid that cannot be allocated fails with
    /// [`Error::RingTooLarge`].
    pub fn ring(&self, coord: AxialCoord, distance: i64) -> Result<Vec<AxialCoord>> {
        check_distance(distance)?;

        if distance == 0 {
            return Ok(self.contains(coord).then_some(coord).into_iter().collect());
        }

        let mut cells = Vec::new();
        if self.width <= 0 && self.height <= 0 {
            let len = usize::try_from(cells_in_ring(distance.unsigned_abs())).unwrap_or(usize::MAX);
            cells
                .try_reserve_exact(len)
                .map_err(|_| Error::RingTooLarge(distance))?;
        }

        let origin = coord.checked_to_cube().ok_or(Error::CoordinateOverflow)?;
        let mut corner = translate(origin, CUBE_DIRECTIONS[RING_START_DIRECTION], distance)?;

        for direction in CUBE_DIRECTIONS {
            for step in self.side_steps(corner, direction, distance) {
                let cell = translate(corner, direction, step)?.to_axial();
                if self.contains(cell) {
                    cells.push(cell);
                }
            }
            corner = translate(corner, direction, distance)?;
        }

        Ok(cells)
    }

    /// Steps along one ring side, starting at `corner`, that may land inside
    /// the grid.
    ///
    /// Sides that change column move one column per step. The two vertical
    /// sides keep their column and move one row per step.
    fn side_steps(&self, corner: CubeCoord, direction: CubeCoord, length: i64) -> Range<i64> {
        let length = length as i128;
        let mut steps = 0..length;

        if direction.x() != 0 {
            if self.width > 0 {
                steps = overlap(steps, axis_window(corner.x(), direction.x(), self.width));
            }
        } else {
            let start = corner.to_axial();
            if self.width > 0 && !(0..self.width).contains(&start.q) {
                return 0..0;
            }
            if self.height > 0 {
                steps = overlap(steps, axis_window(start.r, direction.y(), self.height));
            }
        }

        let start = steps.start.clamp(0, length);
        let end = steps.end.clamp(start, length);
        start as i64..end as i64
    }

    /// Rings 0 through `radius` around `coord`, innermost first.
    pub fn spiral(&self, coord: AxialCoord, radius: i64) -> Result<Vec<AxialCoord>> {
        check_distance(radius)?;

        let mut cells = Vec::new();
        for distance in 0..=radius {
            cells.extend(self.ring(coord, distance)?);
        }
        Ok(cells)
    }
}

/// `from + direction * steps`, failing when the result leaves i64.
fn translate(from: CubeCoord, direction: CubeCoord, steps: i64) -> Result<CubeCoord> {
    direction
        .checked_scale(steps)
        .and_then(|offset| from.checked_add(offset))
        .ok_or(Error::CoordinateOverflow)
}

/// Steps `k` for which `start + k * unit` lies in `0..size`, with `unit` = ±1.
fn axis_window(start: i64, unit: i64, size: i64) -> Range<i128> {
    let (start, size) = (start as i128, size as i128);
    if unit > 0 {
        -start..size - start
    } else {
        start - size + 1..start + 1
    }
}

fn overlap(a: Range<i128>, b: Range<i128>) -> Range<i128> {
    a.start.max(b.start)..a.end.min(b.end)
}

fn check_distance(distance: i64) -> Result<()> {
    if distance < 0 {
        return Err(Error::NegativeDistance(distance));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cells(pairs: &[(i64, i64)]) -> Vec<AxialCoord> {
        pairs.iter().copied().map(AxialCoord::from).collect()
    }

    #[test]
    fn neighbors_infinite() {
        let grid = GridTopology::new(0, 0, false);
        assert_eq!(
            grid.neighbors(AxialCoord::ORIGIN, 1).unwrap(),
            cells(&[(1, -1), (1, 0), (0, 1), (-1, 0), (-1, -1), (0, -1)])
        );
    }

    #[test]
    fn neighbors_infinite_wrap() {
        // Wrapping has nothing to act on without dimensions
        let grid = GridTopology::new(0, 0, true);
        assert_eq!(
            grid.neighbors(AxialCoord::ORIGIN, 1).unwrap(),
            cells(&[(1, -1), (1, 0), (0, 1), (-1, 0), (-1, -1), (0, -1)])
        );
    }

    #[test]
    fn neighbors_clamp() {
        let grid = GridTopology::new(3, 3, false);
        assert_eq!(
            grid.neighbors(AxialCoord::ORIGIN, 1).unwrap(),
            cells(&[(1, 0), (0, 1)])
        );
    }

    #[test]
    fn neighbors_wrap() {
        let grid = GridTopology::new(3, 3, true);
        assert_eq!(
            grid.neighbors(AxialCoord::ORIGIN, 1).unwrap(),
            cells(&[(1, 2), (1, 0), (0, 1), (2, 1), (2, 0), (0, 2)])
        );
    }

    #[test]
    fn neighbors_wrap_even_width_keeps_rows() {
        let grid = GridTopology::new(4, 4, true);
        assert_eq!(
            grid.neighbors(AxialCoord::ORIGIN, 1).unwrap(),
            cells(&[(1, 3), (1, 0), (0, 1), (3, 0), (3, 3), (0, 3)])
        );
    }

    #[test]
    fn neighbors_clamp_horizontal_infinite_vertical() {
        let grid = GridTopology::new(3, 0, false);
        assert_eq!(
            grid.neighbors(AxialCoord::ORIGIN, 1).unwrap(),
            cells(&[(1, -1), (1, 0), (0, 1), (0, -1)])
        );
    }

    #[test]
    fn neighbors_distance() {
        let grid = GridTopology::unbounded();
        assert_eq!(
            grid.neighbors(AxialCoord::ORIGIN, 2).unwrap(),
            cells(&[(2, -1), (2, 1), (0, 2), (-2, 1), (-2, -1), (0, -2)])
        );
    }

    #[test]
    fn neighbors_of_odd_column() {
        let grid = GridTopology::unbounded();
        assert_eq!(
            grid.adjacent(AxialCoord::new(1, 0)),
            cells(&[(2, 0), (2, 1), (1, 1), (0, 1), (0, 0), (1, -1)])
        );
    }

    #[test]
    fn negative_distance_rejected() {
        let grid = GridTopology::unbounded();
        assert_eq!(
            grid.neighbors(AxialCoord::ORIGIN, -1),
            Err(Error::NegativeDistance(-1))
        );
        assert_eq!(
            grid.ring(AxialCoord::ORIGIN, -3),
            Err(Error::NegativeDistance(-3))
        );
        assert!(grid.spiral(AxialCoord::ORIGIN, -1).is_err());
    }

    #[test]
    fn neighbors_past_i64_fail() {
        for grid in [GridTopology::unbounded(), GridTopology::new(3, 3, false)] {
            assert_eq!(
                grid.neighbors(AxialCoord::new(1, 0), i64::MAX),
                Err(Error::CoordinateOverflow)
            );
        }
        assert_eq!(
            GridTopology::unbounded().neighbors(AxialCoord::new(i64::MAX, i64::MIN), 1),
            Err(Error::CoordinateOverflow)
        );
    }

    #[test]
    fn neighbors_at_i64_max_distance() {
        let neighbors = GridTopology::unbounded()
            .neighbors(AxialCoord::ORIGIN, i64::MAX)
            .unwrap();
        assert_eq!(neighbors.len(), 6);
        for cell in neighbors {
            assert_eq!(cell.distance(&AxialCoord::ORIGIN), i64::MAX as u64);
        }
    }

    #[test]
    fn contains_per_axis() {
        let grid = GridTopology::new(3, 0, false);
        assert!(grid.contains(AxialCoord::new(2, -100)));
        assert!(!grid.contains(AxialCoord::new(3, 0)));
        assert!(!grid.contains(AxialCoord::new(-1, 0)));

        let grid = GridTopology::new(3, 2, true);
        assert!(grid.contains(AxialCoord::new(2, 1)));
        assert!(!grid.contains(AxialCoord::new(2, 2)));
    }

    #[test]
    fn wrap_coordinate_modes() {
        let clamp = GridTopology::new(3, 3, false);
        assert_eq!(clamp.wrap_coordinate(AxialCoord::new(-2, 5)), AxialCoord::new(0, 2));

        let wrap = GridTopology::new(4, 3, true);
        assert_eq!(wrap.wrap_coordinate(AxialCoord::new(-1, 4)), AxialCoord::new(3, 1));
        assert_eq!(wrap.wrap_coordinate(AxialCoord::new(5, -1)), AxialCoord::new(1, 2));

        let mixed = GridTopology::new(5, 0, true);
        assert_eq!(mixed.horizontal(), Boundary::Wrap);
        assert_eq!(mixed.vertical(), Boundary::Unbounded);
        assert_eq!(mixed.wrap_coordinate(AxialCoord::new(6, -9)), AxialCoord::new(1, -9));
    }

    #[test]
    fn wrap_coordinate_row_shift_at_i64_max() {
        let wrap = GridTopology::new(3, 3, true);
        assert_eq!(wrap.wrap_coordinate(AxialCoord::new(3, i64::MAX)), AxialCoord::new(0, 2));

        let column_only = GridTopology::new(3, 0, true);
        assert_eq!(
            column_only.wrap_coordinate(AxialCoord::new(3, i64::MAX)),
            AxialCoord::new(0, i64::MAX)
        );
    }

    #[test]
    fn ring_zero_is_origin() {
        let grid = GridTopology::new(10, 10, false);
        assert_eq!(grid.ring(AxialCoord::new(4, 4), 0).unwrap(), cells(&[(4, 4)]));
        assert!(grid.ring(AxialCoord::new(40, 4), 0).unwrap().is_empty());
    }

    #[test]
    fn ring_full() {
        let grid = GridTopology::new(10, 10, false);
        assert_eq!(
            grid.ring(AxialCoord::new(4, 4), 1).unwrap(),
            cells(&[(3, 3), (4, 3), (5, 3), (5, 4), (4, 5), (3, 4)])
        );
    }

    #[test]
    fn ring_clipped() {
        let grid = GridTopology::new(7, 5, false);
        assert_eq!(
            grid.ring(AxialCoord::new(4, 4), 2).unwrap(),
            cells(&[(2, 3), (3, 2), (4, 2), (5, 2), (6, 3), (6, 4), (2, 4)])
        );
    }

    #[test]
    fn ring_ignores_wrap() {
        let grid = GridTopology::new(3, 3, true);
        let ring = grid.ring(AxialCoord::ORIGIN, 1).unwrap();
        assert_eq!(ring, cells(&[(1, 0), (0, 1)]));
    }

    #[test]
    fn ring_cells_at_exact_distance() {
        let grid = GridTopology::unbounded();
        let origin = AxialCoord::new(-3, 7);
        for distance in 1..6 {
            for cell in grid.ring(origin, distance).unwrap() {
                assert_eq!(cell.distance(&origin), distance as u64);
            }
        }
    }

    #[test]
    fn ring_far_outside_small_grid() {
        let grid = GridTopology::new(3, 3, false);
        assert!(grid.ring(AxialCoord::ORIGIN, 1 << 40).unwrap().is_empty());
        assert!(grid.ring(AxialCoord::ORIGIN, i64::MAX / 2).unwrap().is_empty());
        assert!(grid.ring(AxialCoord::ORIGIN, i64::MAX).unwrap().is_empty());
    }

    #[test]
    fn ring_large_distance_crosses_bounded_columns() {
        let grid = GridTopology::new(3, 0, false);
        let origin = AxialCoord::new(1, 0);
        let ring = grid.ring(origin, 1 << 40).unwrap();

        assert!(!ring.is_empty());
        assert!(ring.len() <= 12);
        for cell in ring {
            assert!(grid.contains(cell));
            assert_eq!(cell.distance(&origin), 1 << 40);
        }
    }

    #[test]
    fn unbounded_ring_too_large() {
        assert_eq!(
            GridTopology::unbounded().ring(AxialCoord::ORIGIN, i64::MAX / 2),
            Err(Error::RingTooLarge(i64::MAX / 2))
        );
    }

    #[test]
    fn spiral_concatenates_rings() {
        let grid = GridTopology::unbounded();
        let spiral = grid.spiral(AxialCoord::ORIGIN, 2).unwrap();
        assert_eq!(spiral.len(), 19); // 1 + 6 + 12
        assert_eq!(spiral[0], AxialCoord::ORIGIN);
        assert_eq!(&spiral[1..7], grid.ring(AxialCoord::ORIGIN, 1).unwrap().as_slice());
    }

    #[test]
    fn ring_size_formula() {
        assert_eq!(cells_in_ring(0), 1);
        assert_eq!(cells_in_ring(1), 6);
        assert_eq!(cells_in_ring(2), 12);
        assert_eq!(cells_in_ring(10), 60);
        assert_eq!(cells_in_ring(u64::MAX / 2), u64::MAX);
    }

    proptest! {
        #[test]
        fn full_neighbor_count_when_cyclic(
            q in -200i64..200,
            r in -200i64..200,
            width in 0i64..20,
            height in 0i64..20,
            distance in 0i64..5,
        ) {
            for grid in [GridTopology::new(width, height, true), GridTopology::new(0, 0, false)] {
                prop_assert_eq!(grid.neighbors(AxialCoord::new(q, r), distance).unwrap().len(), 6);
            }
        }

        #[test]
        fn clamp_drops_out_of_bounds(
            q in -2i64..12,
            r in -2i64..12,
            width in 1i64..10,
            height in 1i64..10,
            distance in 1i64..4,
        ) {
            let grid = GridTopology::new(width, height, false);
            let origin = AxialCoord::new(q, r);
            let neighbors = grid.neighbors(origin, distance).unwrap();
            prop_assert!(neighbors.len() <= 6);
            for cell in &neighbors {
                prop_assert!(grid.contains(*cell));
                prop_assert_eq!(cell.distance(&origin), distance as u64);
            }
        }

        #[test]
        fn unbounded_ring_size(q in -500i64..500, r in -500i64..500, distance in 0i64..30) {
            let ring = GridTopology::unbounded().ring(AxialCoord::new(q, r), distance).unwrap();
            prop_assert_eq!(ring.len() as u64, cells_in_ring(distance as u64));

            let mut sorted = ring.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), ring.len());
        }

        #[test]
        fn results_stay_on_cube_plane(
            q in -50i64..50,
            r in -50i64..50,
            width in 0i64..12,
            height in 0i64..12,
            wrap: bool,
            distance in 0i64..6,
        ) {
            let grid = GridTopology::new(width, height, wrap);
            let origin = AxialCoord::new(q, r);
            let mut found = grid.neighbors(origin, distance).unwrap();
            found.extend(grid.ring(origin, distance).unwrap());
            for cell in found {
                let cube = cell.to_cube();
                prop_assert_eq!(cube.x() + cube.y() + cube.z(), 0);
            }
        }

        #[test]
        fn clipped_ring_is_subsequence(
            q in -12i64..20,
            r in -12i64..20,
            width in 0i64..8,
            height in 0i64..8,
            distance in 1i64..24,
        ) {
            let origin = AxialCoord::new(q, r);
            let full = GridTopology::unbounded().ring(origin, distance).unwrap();
            let clipped = GridTopology::new(width, height, false).ring(origin, distance).unwrap();
            let expected: Vec<_> = full
                .into_iter()
                .filter(|c| width <= 0 || (0..width).contains(&c.q))
                .filter(|c| height <= 0 || (0..height).contains(&c.r))
                .collect();
            prop_assert_eq!(clipped, expected);
        }
    }
}
