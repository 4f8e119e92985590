//! Polygon assembly.
//!
//! Walks a triangle's segment list from the lowest to the highest iso-level
//! and emits one flat-colored polygon per band: a leading polygon touching
//! `p1`, a quad (or, once, a pentagon wrapping `p2`) per consecutive segment
//! pair, and a trailing polygon touching `p3`. Together they tile the
//! triangle exactly.
//!
//! Two mirrored traversals exist, chosen by the classifier's `reversed`
//! parity, differing only in the cyclic order vertices are pushed; this is
//! what preserves the input triangle's front-face orientation.

use crate::builder::MeshBuilder;
use crate::classify::ClassifiedTri;
use crate::segment::IsoSegment;

/// Emits the band polygons for one classified triangle.
pub fn assemble(tri: &ClassifiedTri, segments: &[IsoSegment], out: &mut MeshBuilder<'_>) {
    if tri.reversed {
        assemble_mirrored(tri, segments, out);
    } else {
        assemble_forward(tri, segments, out);
    }
}

/// Traversal for triangles whose relabeling kept the original winding.
fn assemble_forward(tri: &ClassifiedTri, segments: &[IsoSegment], out: &mut MeshBuilder<'_>) {
    let Some(first) = segments.first() else {
        out.push_tri(tri.p1, tri.p2, tri.p3, tri.baseline);
        return;
    };

    // Tracks whether the walk has already passed p2
    let mut bypass = false;

    let mut seg = first;
    if seg.iso < tri.v2 {
        out.push_tri(tri.p1, seg.a, seg.b, tri.baseline);
    } else {
        bypass = true;
        out.push_quad(tri.p1, tri.p2, seg.a, seg.b, tri.baseline);
    }

    for seg1 in &segments[1..] {
        if seg1.iso < tri.v2 || bypass {
            out.push_quad(seg.a, seg1.a, seg1.b, seg.b, seg.iso);
        } else {
            bypass = true;
            out.push_penta(tri.p2, seg1.a, seg1.b, seg.b, seg.a, seg.iso);
        }
        seg = seg1;
    }

    if bypass {
        out.push_tri(seg.a, tri.p3, seg.b, seg.iso);
    } else {
        out.push_quad(tri.p2, tri.p3, seg.b, seg.a, seg.iso);
    }
}

/// Mirror-image traversal for triangles whose relabeling flipped the winding.
fn assemble_mirrored(tri: &ClassifiedTri, segments: &[IsoSegment], out: &mut MeshBuilder<'_>) {
    let Some(first) = segments.first() else {
        out.push_tri(tri.p1, tri.p3, tri.p2, tri.baseline);
        return;
    };

    let mut bypass = false;

    let mut seg = first;
    if seg.iso < tri.v2 {
        out.push_tri(tri.p1, seg.b, seg.a, tri.baseline);
    } else {
        bypass = true;
        out.push_quad(tri.p1, seg.b, seg.a, tri.p2, tri.baseline);
    }

    for seg1 in &segments[1..] {
        if seg1.iso < tri.v2 {
            out.push_quad(seg.a, seg1.a, seg1.b, seg.b, seg.iso);
        } else if bypass {
            out.push_quad(seg.a, seg.b, seg1.b, seg1.a, seg.iso);
        } else {
            bypass = true;
            out.push_penta(tri.p2, seg.a, seg.b, seg1.b, seg1.a, seg.iso);
        }
        seg = seg1;
    }

    if bypass {
        out.push_tri(seg.a, seg.b, tri.p3, seg.iso);
    } else {
        out.push_quad(tri.p2, seg.a, seg.b, tri.p3, seg.iso);
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;
    use isoband_core::{BandConfig, ColorMapRegistry};

    use super::*;
    use crate::classify::classify;
    use crate::segment::{generate, IsoGrid};

    fn run(values: [f64; 3], band_count: u32) -> crate::mesher::BandMesh {
        let registry = ColorMapRegistry::new();
        let cfg = BandConfig {
            band_count,
            ..BandConfig::default()
        };
        let map = registry.get(&cfg.lut).unwrap();
        let mut out = MeshBuilder::new(map, &cfg);
        let points = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ];
        let mut tri = classify(points, values, cfg.min).unwrap();
        let grid = IsoGrid::from_config(&cfg);
        let segments = generate(&mut tri, &grid);
        assemble(&tri, &segments, &mut out);
        out.finish()
    }

    fn total_area(mesh: &crate::mesher::BandMesh) -> f64 {
        mesh.indices
            .chunks_exact(3)
            .map(|t| {
                let a = mesh.positions[t[0] as usize];
                let b = mesh.positions[t[1] as usize];
                let c = mesh.positions[t[2] as usize];
                (b - a).cross(c - a).length() * 0.5
            })
            .sum()
    }

    #[test]
    fn test_no_segments_emits_whole_triangle() {
        let mesh = run([0.32, 0.33, 0.34], 2);
        assert_eq!(mesh.num_triangles(), 1);
        assert!((total_area(&mesh) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_bands_tile_triangle_exactly() {
        for values in [
            [0.0, 0.5, 1.0],
            [0.05, 0.62, 0.93],
            [0.9, 0.1, 0.4],
            [0.21, 0.81, 0.47],
        ] {
            let mesh = run(values, 10);
            assert!(
                (total_area(&mesh) - 0.5).abs() < 1e-9,
                "area mismatch for {values:?}: {}",
                total_area(&mesh)
            );
        }
    }

    #[test]
    fn test_pentagon_emitted_when_pair_straddles_middle() {
        // Bands at 0.25/0.5/0.75; v2 = 0.6 sits between levels 2 and 3,
        // so one 5-gon (3 fan triangles) wraps p2
        let mesh = run([0.1, 0.6, 0.95], 4);
        // leading tri (1) + quad (2) + pentagon (3) + trailing tri (1)
        assert_eq!(mesh.num_triangles(), 7);
        assert!((total_area(&mesh) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_winding_consistent_across_bands() {
        let mesh = run([0.05, 0.62, 0.93], 10);
        let up = DVec3::Z;
        for t in mesh.indices.chunks_exact(3) {
            let a = mesh.positions[t[0] as usize];
            let b = mesh.positions[t[1] as usize];
            let c = mesh.positions[t[2] as usize];
            let n = (b - a).cross(c - a);
            if n.length() > 1e-12 {
                assert!(n.dot(up) > 0.0, "flipped sub-triangle");
            }
        }
    }

    #[test]
    fn test_reversed_classification_preserves_winding() {
        // These values make the classifier swap the upper pair (odd
        // permutation); output winding must still match the input
        let mesh = run([0.05, 0.93, 0.62], 10);
        let up = DVec3::Z;
        for t in mesh.indices.chunks_exact(3) {
            let a = mesh.positions[t[0] as usize];
            let b = mesh.positions[t[1] as usize];
            let c = mesh.positions[t[2] as usize];
            let n = (b - a).cross(c - a);
            if n.length() > 1e-12 {
                assert!(n.dot(up) > 0.0, "flipped sub-triangle");
            }
        }
    }
}
