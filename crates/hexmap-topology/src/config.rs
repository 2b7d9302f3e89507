//! Grid and layout configuration.
//!
//! Both configs read `HEXMAP_*` environment variables and fall back to
//! defaults for anything unset.

use std::str::FromStr;

use crate::error::{Error, Result};

/// Construction parameters for a [`crate::GridTopology`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TopologyConfig {
    /// Columns; 0 for an unbounded axis
    pub width: i64,

    /// Rows; 0 for an unbounded axis
    pub height: i64,

    /// Wrap bounded axes instead of clamping them
    pub wrap: bool,
}

impl TopologyConfig {
    /// Read `HEXMAP_GRID_WIDTH`, `HEXMAP_GRID_HEIGHT` and `HEXMAP_GRID_WRAP`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`TopologyConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            width: parse_var(&lookup, "HEXMAP_GRID_WIDTH", defaults.width)?,
            height: parse_var(&lookup, "HEXMAP_GRID_HEIGHT", defaults.height)?,
            wrap: parse_var(&lookup, "HEXMAP_GRID_WRAP", defaults.wrap)?,
        })
    }
}

/// Construction parameters for a [`crate::PixelProjector`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Drawing surface width in pixels
    pub surface_width: u32,

    /// Drawing surface height in pixels
    pub surface_height: u32,

    /// Center-to-vertex distance of each tile in pixels
    pub tile_radius: f64,

    /// Wrap the derived topology
    pub wrap: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            surface_width: 1600,
            surface_height: 900,
            tile_radius: 50.0,
            wrap: false,
        }
    }
}

impl LayoutConfig {
    /// Read `HEXMAP_SURFACE_WIDTH`, `HEXMAP_SURFACE_HEIGHT`,
    /// `HEXMAP_TILE_RADIUS` and `HEXMAP_SURFACE_WRAP`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`LayoutConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            surface_width: parse_var(&lookup, "HEXMAP_SURFACE_WIDTH", defaults.surface_width)?,
            surface_height: parse_var(&lookup, "HEXMAP_SURFACE_HEIGHT", defaults.surface_height)?,
            tile_radius: parse_var(&lookup, "HEXMAP_TILE_RADIUS", defaults.tile_radius)?,
            wrap: parse_var(&lookup, "HEXMAP_SURFACE_WRAP", defaults.wrap)?,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| Error::InvalidConfig { key, value }),
    }
}
