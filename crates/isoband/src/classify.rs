//! Triangle classification by scalar value.
//!
//! Before iso-levels can be cut across a triangle, its three (position, value)
//! pairs are relabeled so `v1 <= v2 <= v3`. The `reversed` flag records
//! whether that relabeling was an odd permutation of the original vertex
//! cycle; the assembler uses it to pick the mirrored traversal that restores
//! the input winding.

use glam::DVec3;

/// A triangle relabeled into ascending scalar order.
#[derive(Debug, Clone, Copy)]
pub struct ClassifiedTri {
    /// Position of the lowest-valued vertex.
    pub p1: DVec3,
    /// Position of the middle vertex.
    pub p2: DVec3,
    /// Position of the highest-valued vertex.
    pub p3: DVec3,
    /// Lowest vertex value.
    pub v1: f64,
    /// Middle vertex value.
    pub v2: f64,
    /// Highest vertex value.
    pub v3: f64,
    /// True when the relabeling flipped the original winding.
    pub reversed: bool,
    /// Value coloring the region below the first iso-crossing.
    ///
    /// Seeded with the window minimum; the segment generator raises it to the
    /// highest iso-level at or below `v1`.
    pub baseline: f64,
}

/// Relabels a triangle's vertices into ascending value order.
///
/// The comparison chain is deliberately a fixed sequence of `<=` tests so
/// that ties (including fully degenerate constant triangles) break the same
/// way every time: the first vertex to satisfy each test wins. Downstream
/// code relies on that determinism for a unique per-triangle baseline.
///
/// Returns `None` if the values cannot be ordered (NaN in the field); such
/// triangles are skipped.
#[must_use]
pub fn classify(points: [DVec3; 3], values: [f64; 3], baseline: f64) -> Option<ClassifiedTri> {
    let [p1, p2, p3] = points;
    let [v1, v2, v3] = values;

    let (pts, vals, reversed) = if v1 <= v2 && v1 <= v3 {
        if v2 <= v3 {
            ([p1, p2, p3], [v1, v2, v3], false)
        } else {
            ([p1, p3, p2], [v1, v3, v2], true)
        }
    } else if v2 <= v1 && v2 <= v3 {
        if v1 <= v3 {
            ([p2, p1, p3], [v2, v1, v3], true)
        } else {
            ([p2, p3, p1], [v2, v3, v1], false)
        }
    } else if v3 <= v1 && v3 <= v2 {
        if v1 <= v2 {
            ([p3, p1, p2], [v3, v1, v2], false)
        } else {
            ([p3, p2, p1], [v3, v2, v1], true)
        }
    } else {
        // Unorderable values (NaN)
        return None;
    };

    Some(ClassifiedTri {
        p1: pts[0],
        p2: pts[1],
        p3: pts[2],
        v1: vals[0],
        v2: vals[1],
        v3: vals[2],
        reversed,
        baseline,
    })
}
