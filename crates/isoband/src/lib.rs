//! Filled iso-contour band meshing for triangulated surfaces.
//!
//! Given an indexed triangle mesh and a scalar field sampled at its vertices,
//! [`generate_isobands`] subdivides every triangle along evenly spaced
//! iso-levels and emits a new mesh in which each band between two levels is a
//! flat-colored polygon, colored from a lookup table.
//!
//! The pipeline per triangle:
//! 1. [`classify`](classify::classify) - relabel vertices into ascending
//!    scalar order, tracking winding parity
//! 2. [`segment::generate`] - interpolate one crossing segment per iso-level
//!    inside the configured window
//! 3. [`assemble`](assemble::assemble) - walk the segments and emit
//!    triangle/quad/pentagon band polygons
//! 4. [`MeshBuilder`] - fan-triangulate and accumulate flat buffers
//!
//! Triangles are independent, so large meshes are processed in parallel
//! ranges whose buffers are concatenated in input order.
//!
//! ```
//! use glam::{DVec3, UVec3};
//! use isoband::{generate_isobands, BandConfig};
//!
//! let positions = [
//!     DVec3::new(0.0, 0.0, 0.0),
//!     DVec3::new(1.0, 0.0, 0.0),
//!     DVec3::new(0.0, 1.0, 0.0),
//! ];
//! let triangles = [UVec3::new(0, 1, 2)];
//! let field = [0.0, 0.5, 1.0];
//!
//! let mesh = generate_isobands(&positions, &triangles, &field, &BandConfig::default()).unwrap();
//! assert!(!mesh.is_empty());
//! assert_eq!(mesh.colors.len(), mesh.positions.len());
//! ```

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod assemble;
pub mod builder;
pub mod classify;
pub mod mesher;
pub mod segment;

pub use builder::{MeshBuilder, DEFAULT_COLOR};
pub use classify::ClassifiedTri;
pub use mesher::{
    generate_isobands, generate_isobands_grouped, generate_isobands_with, BandMesh, PAR_THRESHOLD,
};
pub use segment::{IsoGrid, IsoSegment, MAX_SEGMENTS_PER_TRI};

// Re-export the core types callers need alongside the mesher
pub use isoband_core::{BandConfig, ColorMap, ColorMapRegistry, IsobandError, Result};

// Re-export glam types for convenience
pub use glam::{DVec3, UVec3, Vec3};
