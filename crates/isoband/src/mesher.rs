//! The band mesher driver.
//!
//! Validates the input contract up front, normalizes the scalar field, then
//! runs the per-triangle classify → segment → assemble pipeline, serially for
//! small meshes and over rayon-chunked triangle ranges for large ones. Chunk
//! buffers are concatenated in input-triangle order, so the output is
//! byte-identical regardless of parallelism.

#![allow(clippy::cast_possible_truncation)]

use glam::{DVec3, UVec3, Vec3};
use rayon::prelude::*;

use isoband_core::{field, BandConfig, ColorMap, ColorMapRegistry, IsobandError, Result};

use crate::assemble::assemble;
use crate::builder::MeshBuilder;
use crate::classify::classify;
use crate::segment::{generate, IsoGrid};

/// Meshes with at least this many triangles take the parallel path.
pub const PAR_THRESHOLD: usize = 4096;

/// Triangles per parallel work chunk.
const PAR_CHUNK: usize = 1024;

/// The accumulated band mesh: flat-colored polygons covering every input
/// triangle, fan-triangulated.
///
/// Vertices are not deduplicated across polygons; `colors` runs parallel to
/// `positions` with one color repeated for all vertices of a polygon.
#[derive(Debug, Clone, Default)]
pub struct BandMesh {
    /// Emitted vertex positions, in emission order.
    pub positions: Vec<DVec3>,
    /// Triangle indices (every 3 consecutive indices form a triangle).
    pub indices: Vec<u32>,
    /// Per-vertex RGB colors in [0, 1], same length as `positions`.
    pub colors: Vec<Vec3>,
}

impl BandMesh {
    /// Returns the number of triangles in the mesh.
    #[must_use]
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Flat `[x, y, z, x, y, z, ...]` view of the positions.
    #[must_use]
    pub fn flat_positions(&self) -> &[f64] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Flat `[r, g, b, r, g, b, ...]` view of the colors.
    #[must_use]
    pub fn flat_colors(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Positions converted to flat `f32` triples for GPU vertex buffers.
    #[must_use]
    pub fn positions_f32(&self) -> Vec<f32> {
        self.flat_positions().iter().map(|&x| x as f32).collect()
    }

    /// Appends another band mesh, rebasing its indices.
    pub fn merge(&mut self, other: BandMesh) {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.colors.extend_from_slice(&other.colors);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }
}

/// Builds the filled iso-contour band mesh for one triangulated surface.
///
/// `positions` and `field` are aligned by vertex index; `triangles` is the
/// indexed triangle list. The field is min-max normalized over the whole
/// mesh before banding.
///
/// An empty input mesh, or a field producing no iso-crossings, yields a
/// valid empty mesh, not an error.
///
/// # Errors
/// Fails before producing any output if the configuration is invalid, the
/// color map name is unknown, the field length does not match the vertex
/// count, or a triangle references an out-of-range vertex.
pub fn generate_isobands(
    positions: &[DVec3],
    triangles: &[UVec3],
    field: &[f64],
    cfg: &BandConfig,
) -> Result<BandMesh> {
    generate_isobands_with(&ColorMapRegistry::new(), positions, triangles, field, cfg)
}

/// Like [`generate_isobands`], resolving the color map from a caller-owned
/// registry (useful when custom palettes are registered).
pub fn generate_isobands_with(
    registry: &ColorMapRegistry,
    positions: &[DVec3],
    triangles: &[UVec3],
    field: &[f64],
    cfg: &BandConfig,
) -> Result<BandMesh> {
    let colormap = validate(registry, positions, triangles, field, cfg)?;

    let normalized = field::normalize(field);
    let grid = IsoGrid::from_config(cfg);

    log::debug!(
        "banding {} triangles, {} bands over [{}, {}]",
        triangles.len(),
        cfg.band_count,
        cfg.min,
        cfg.max
    );

    let builder = if triangles.len() >= PAR_THRESHOLD {
        let chunks: Vec<MeshBuilder<'_>> = triangles
            .par_chunks(PAR_CHUNK)
            .map(|chunk| {
                let mut local = MeshBuilder::new(colormap, cfg);
                for tri in chunk {
                    mesh_triangle(positions, &normalized, *tri, &grid, cfg, &mut local);
                }
                local
            })
            .collect();

        let mut merged = MeshBuilder::new(colormap, cfg);
        for chunk in chunks {
            merged.append(chunk);
        }
        merged
    } else {
        let mut builder = MeshBuilder::new(colormap, cfg);
        for tri in triangles {
            mesh_triangle(positions, &normalized, *tri, &grid, cfg, &mut builder);
        }
        builder
    };

    let mesh = builder.finish();
    log::debug!(
        "emitted {} vertices, {} triangles",
        mesh.positions.len(),
        mesh.num_triangles()
    );
    Ok(mesh)
}

/// Builds one merged band mesh from several (positions, triangles, field)
/// surfaces sharing a configuration.
///
/// Each surface is normalized and banded independently; all inputs are
/// validated before any geometry is produced.
pub fn generate_isobands_grouped(
    surfaces: &[(&[DVec3], &[UVec3], &[f64])],
    cfg: &BandConfig,
) -> Result<BandMesh> {
    let registry = ColorMapRegistry::new();
    for (positions, triangles, field) in surfaces {
        validate(&registry, positions, triangles, field, cfg)?;
    }

    let mut merged = BandMesh::default();
    for (positions, triangles, field) in surfaces {
        let mesh = generate_isobands_with(&registry, positions, triangles, field, cfg)?;
        merged.merge(mesh);
    }
    Ok(merged)
}

/// Runs classify → segment → assemble for one input triangle.
fn mesh_triangle(
    positions: &[DVec3],
    field: &[f64],
    tri: UVec3,
    grid: &IsoGrid,
    cfg: &BandConfig,
    out: &mut MeshBuilder<'_>,
) {
    let [i0, i1, i2] = [tri.x as usize, tri.y as usize, tri.z as usize];
    let points = [positions[i0], positions[i1], positions[i2]];
    let values = [field[i0], field[i1], field[i2]];

    let Some(mut classified) = classify(points, values, cfg.min) else {
        log::trace!("skipping triangle {tri:?} with unorderable values");
        return;
    };
    let segments = generate(&mut classified, grid);
    assemble(&classified, &segments, out);
}

/// Checks the whole input contract; nothing is emitted if any part fails.
fn validate<'r>(
    registry: &'r ColorMapRegistry,
    positions: &[DVec3],
    triangles: &[UVec3],
    field: &[f64],
    cfg: &BandConfig,
) -> Result<&'r ColorMap> {
    cfg.validate()?;

    let colormap = registry
        .get(&cfg.lut)
        .ok_or_else(|| IsobandError::UnknownColorMap(cfg.lut.clone()))?;

    if field.len() != positions.len() {
        return Err(IsobandError::FieldSizeMismatch {
            expected: positions.len(),
            actual: field.len(),
        });
    }

    for tri in triangles {
        for index in [tri.x, tri.y, tri.z] {
            if index as usize >= positions.len() {
                return Err(IsobandError::IndexOutOfBounds {
                    index,
                    len: positions.len(),
                });
            }
        }
    }

    Ok(colormap)
}
