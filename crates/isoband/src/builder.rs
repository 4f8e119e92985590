//! Output buffer accumulation.
//!
//! Polygons arrive from the assembler as 3/4/5 vertex fans and are written
//! straight into flat position/index/color buffers. Vertices are not shared
//! across polygons so every band can carry its own flat color.

#![allow(clippy::cast_possible_truncation)]

use glam::{DVec3, Vec3};

use isoband_core::{BandConfig, ColorMap};

use crate::mesher::BandMesh;

/// Color substituted when a band value misses the lookup table.
pub const DEFAULT_COLOR: Vec3 = Vec3::ZERO;

/// Accumulates band polygons into shared output buffers.
///
/// Each worker owns one builder; [`MeshBuilder::append`] concatenates chunk
/// results in input-triangle order so parallel runs stay deterministic.
pub struct MeshBuilder<'a> {
    colormap: &'a ColorMap,
    min: f64,
    max: f64,
    reversed: bool,
    positions: Vec<DVec3>,
    indices: Vec<u32>,
    colors: Vec<Vec3>,
}

impl<'a> MeshBuilder<'a> {
    /// Creates an empty builder bound to a color map and value window.
    #[must_use]
    pub fn new(colormap: &'a ColorMap, cfg: &BandConfig) -> Self {
        Self {
            colormap,
            min: cfg.min,
            max: cfg.max,
            reversed: cfg.reversed,
            positions: Vec::new(),
            indices: Vec::new(),
            colors: Vec::new(),
        }
    }

    fn band_color(&self, iso: f64) -> Vec3 {
        self.colormap
            .color_at(iso, self.min, self.max, self.reversed)
            .unwrap_or(DEFAULT_COLOR)
    }

    /// Fan-triangulates a polygon around its first vertex and appends it
    /// with one flat color for all of its vertices.
    fn push_polygon(&mut self, points: &[DVec3], iso: f64) {
        let color = self.band_color(iso);
        let base = self.positions.len() as u32;
        for i in 1..points.len() as u32 - 1 {
            self.indices.extend_from_slice(&[base, base + i, base + i + 1]);
        }
        self.positions.extend_from_slice(points);
        self.colors
            .extend(std::iter::repeat(color).take(points.len()));
    }

    /// Appends a triangle band polygon.
    pub fn push_tri(&mut self, a: DVec3, b: DVec3, c: DVec3, iso: f64) {
        self.push_polygon(&[a, b, c], iso);
    }

    /// Appends a quad band polygon (two fan triangles).
    pub fn push_quad(&mut self, a: DVec3, b: DVec3, c: DVec3, d: DVec3, iso: f64) {
        self.push_polygon(&[a, b, c, d], iso);
    }

    /// Appends a pentagon band polygon (three fan triangles).
    pub fn push_penta(&mut self, a: DVec3, b: DVec3, c: DVec3, d: DVec3, e: DVec3, iso: f64) {
        self.push_polygon(&[a, b, c, d, e], iso);
    }

    /// Concatenates another builder's buffers after this one's, rebasing
    /// its indices.
    pub fn append(&mut self, other: MeshBuilder<'_>) {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.colors.extend_from_slice(&other.colors);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }

    /// Number of vertices accumulated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if nothing has been emitted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Finalizes the accumulated buffers into a [`BandMesh`].
    #[must_use]
    pub fn finish(self) -> BandMesh {
        debug_assert_eq!(self.positions.len(), self.colors.len());
        BandMesh {
            positions: self.positions,
            indices: self.indices,
            colors: self.colors,
        }
    }
}
