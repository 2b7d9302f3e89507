//! Pixel layout of a flat-topped, odd-q hex grid.
//!
//! A [`PixelProjector`] fits as many whole tiles as possible onto a drawing
//! surface and centers the block. It maps cells to pixel centers and corner
//! polygons for drawing, and pointer positions back to cells.
//!
//! # Layout
//!
//! With circumradius `R` and inradius `r = R·√3/2`:
//! - columns are `1.5·R` apart
//! - rows are `2·r` apart
//! - odd columns sit `r` lower than even ones
//!
//! A block of `w` columns and `h` rows spans `R·(3w + 1)/2` by `r·(2h + 1)`
//! pixels.

use std::f64::consts::PI;

use tracing::{debug, trace, warn};

use crate::config::LayoutConfig;
use crate::coord::{AxialCoord, FractionalCube};
use crate::error::{Error, Result};
use crate::topology::GridTopology;

/// Corners per tile.
pub const CORNERS: usize = 6;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// An integer pixel position on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelPoint {
    pub x: i64,
    pub y: i64,
}

impl PixelPoint {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    fn rounded(x: f64, y: f64) -> Self {
        Self {
            x: x.round() as i64,
            y: y.round() as i64,
        }
    }
}

impl From<(i64, i64)> for PixelPoint {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// Drawable geometry of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexTile {
    pub coord: AxialCoord,
    pub center: PixelPoint,
    /// Vertices at 0°, 60°, ..., 300° from the center
    pub corners: [PixelPoint; CORNERS],
}

/// Horizontal distance between adjacent column centers.
pub fn horizontal_spacing(radius: f64) -> f64 {
    1.5 * radius
}

/// Vertical distance between adjacent row centers.
pub fn vertical_spacing(radius: f64) -> f64 {
    radius * SQRT_3
}

/// Maps between pixels and cells for one surface size and tile radius.
///
/// Fixed at construction; resizing the surface means building a new one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelProjector {
    radius: f64,
    inradius: f64,
    topology: GridTopology,
    x_offset: f64,
    y_offset: f64,
}

impl PixelProjector {
    /// Fit tiles of circumradius `radius` onto a `surface_width` by
    /// `surface_height` surface, with a non-wrapping topology.
    pub fn new(surface_width: u32, surface_height: u32, radius: f64) -> Result<Self> {
        Self::build(surface_width, surface_height, radius, false)
    }

    pub fn from_config(config: &LayoutConfig) -> Result<Self> {
        Self::build(
            config.surface_width,
            config.surface_height,
            config.tile_radius,
            config.wrap,
        )
    }

    fn build(surface_width: u32, surface_height: u32, radius: f64, wrap: bool) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            warn!(radius, "rejecting tile radius");
            return Err(Error::InvalidRadius(radius));
        }

        let inradius = radius * SQRT_3 / 2.0;
        let surface_w = f64::from(surface_width);
        let surface_h = f64::from(surface_height);

        let width = ((2.0 * surface_w - radius) / (3.0 * radius)).floor();
        let height = ((surface_h - inradius) / (2.0 * inradius)).floor();

        // A zero dimension would read as unbounded
        if width < 1.0 || height < 1.0 {
            warn!(surface_width, surface_height, radius, "surface holds no tiles");
            return Err(Error::SurfaceTooSmall {
                width: surface_width,
                height: surface_height,
                radius,
            });
        }

        let width_used = radius * (3.0 * width + 1.0) / 2.0;
        let height_used = inradius * (2.0 * height + 1.0);

        let projector = Self {
            radius,
            inradius,
            topology: GridTopology::new(width as i64, height as i64, wrap),
            x_offset: (surface_w - width_used) / 2.0,
            y_offset: (surface_h - height_used) / 2.0,
        };

        debug!(
            columns = width as i64,
            rows = height as i64,
            x_offset = projector.x_offset,
            y_offset = projector.y_offset,
            "pixel layout computed"
        );

        Ok(projector)
    }

    /// Circumradius: center to vertex.
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Inradius: center to edge midpoint.
    pub const fn inradius(&self) -> f64 {
        self.inradius
    }

    /// Columns that fit on the surface.
    pub const fn width(&self) -> i64 {
        self.topology.width()
    }

    /// Rows that fit on the surface.
    pub const fn height(&self) -> i64 {
        self.topology.height()
    }

    /// Left padding that centers the grid.
    pub const fn x_offset(&self) -> f64 {
        self.x_offset
    }

    /// Top padding that centers the grid.
    pub const fn y_offset(&self) -> f64 {
        self.y_offset
    }

    /// Bounds of the laid-out grid.
    pub const fn topology(&self) -> &GridTopology {
        &self.topology
    }

    /// Unrounded pixel center of a cell.
    pub fn cell_center_exact(&self, coord: AxialCoord) -> (f64, f64) {
        let q = coord.q as f64;
        let r = coord.r as f64;

        let x = self.x_offset + self.radius * (1.5 * q + 1.0);
        let mut y = self.y_offset + self.inradius * (2.0 * r + 1.0);
        if coord.q & 1 == 1 {
            y += self.inradius;
        }
        (x, y)
    }

    /// Pixel center of a cell, rounded for drawing.
    pub fn cell_center(&self, coord: AxialCoord) -> PixelPoint {
        let (x, y) = self.cell_center_exact(coord);
        PixelPoint::rounded(x, y)
    }

    /// The six vertices of a cell, clockwise on screen from the right.
    pub fn cell_corners(&self, coord: AxialCoord) -> [PixelPoint; CORNERS] {
        let (cx, cy) = self.cell_center_exact(coord);
        std::array::from_fn(|i| {
            let angle = PI / 3.0 * i as f64;
            PixelPoint::rounded(
                cx + self.radius * angle.cos(),
                cy + self.radius * angle.sin(),
            )
        })
    }

    /// Center and corners of a cell.
    pub fn tile(&self, coord: AxialCoord) -> HexTile {
        HexTile {
            coord,
            center: self.cell_center(coord),
            corners: self.cell_corners(coord),
        }
    }

    /// Every tile on the surface, column by column.
    pub fn tiles(&self) -> impl Iterator<Item = HexTile> + '_ {
        (0..self.width())
            .flat_map(move |q| (0..self.height()).map(move |r| AxialCoord::new(q, r)))
            .map(move |coord| self.tile(coord))
    }

    /// The cell under a pixel, or `None` when it falls outside the grid.
    ///
    /// The pixel is mapped to a fractional cube position relative to cell
    /// (0, 0) and snapped with [`FractionalCube::round`]; rounding in offset
    /// space would misplace points near cell edges.
    pub fn pixel_to_cell(&self, point: PixelPoint) -> Option<AxialCoord> {
        let dx = point.x as f64 - self.x_offset - self.radius;
        let dy = point.y as f64 - self.y_offset - self.inradius;

        let q = 2.0 / 3.0 * dx / self.radius;
        let r = (-1.0 / 3.0 * dx + SQRT_3 / 3.0 * dy) / self.radius;

        let cell = FractionalCube::new(q, r, -q - r).round().to_axial();
        let found = self.topology.contains(cell);
        trace!(x = point.x, y = point.y, %cell, found, "resolved pixel");
        found.then_some(cell)
    }
}
