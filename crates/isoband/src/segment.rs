//! Iso-level crossing segments.
//!
//! For a classified triangle, enumerates the evenly spaced iso-levels that
//! cut across it and interpolates a 3D segment on the triangle's edges for
//! each. Segments come out in strictly increasing iso order by construction.

use glam::DVec3;

use isoband_core::BandConfig;

use crate::classify::ClassifiedTri;

/// Upper bound on iso-crossings generated for a single triangle.
///
/// A tunable work guard, not an algorithmic requirement: when the configured
/// spacing would put more levels than this inside a triangle's value range,
/// the spacing is coarsened for that triangle so work stays bounded.
pub const MAX_SEGMENTS_PER_TRI: usize = 100;

/// A single iso-level crossing of a triangle.
///
/// `a` and `b` lie on two of the triangle's edges; for levels below the
/// middle value the segment spans edges (p1,p2)-(p1,p3), above it
/// (p2,p3)-(p1,p3).
#[derive(Debug, Clone, Copy)]
pub struct IsoSegment {
    /// First endpoint.
    pub a: DVec3,
    /// Second endpoint (always on the p1-p3 edge).
    pub b: DVec3,
    /// The iso-level that produced this segment.
    pub iso: f64,
}

/// The iso-level ladder shared by all triangles of a run.
#[derive(Debug, Clone, Copy)]
pub struct IsoGrid {
    /// First iso-level, snapped to a multiple of `increment` from zero so
    /// band boundaries line up across triangles.
    pub begin: f64,
    /// Spacing between consecutive iso-levels.
    pub increment: f64,
    /// Upper bound of the value window.
    pub max: f64,
}

impl IsoGrid {
    /// Derives the ladder from a validated configuration.
    #[must_use]
    pub fn from_config(cfg: &BandConfig) -> Self {
        let increment = cfg.increment();
        let begin = if increment > 0.0 {
            increment * (cfg.min / increment).round()
        } else {
            cfg.min
        };
        Self {
            begin,
            increment,
            max: cfg.max,
        }
    }
}

/// Generates the crossing segments for one triangle.
///
/// Levels at or below `v1` do not cross the triangle; they only raise the
/// triangle's `baseline`, which later colors the region below the first
/// crossing. Returns segments in strictly increasing iso order.
pub fn generate(tri: &mut ClassifiedTri, grid: &IsoGrid) -> Vec<IsoSegment> {
    let mut segments = Vec::new();
    if grid.increment <= 0.0 {
        return segments;
    }

    let top = tri.v3.min(grid.max);
    let mut incr = grid.increment;
    #[allow(clippy::cast_precision_loss)]
    let cap = MAX_SEGMENTS_PER_TRI as f64;
    if (top - grid.begin) / incr > cap {
        incr = (top - grid.begin) / cap;
    }

    let mut d = grid.begin;
    while d < tri.v3 && d < grid.max {
        if d > tri.v1 {
            segments.push(cut(tri, d));
        } else {
            tri.baseline = d;
        }
        d += incr;
    }
    segments
}

/// Interpolates the segment where level `iso` crosses the triangle.
fn cut(tri: &ClassifiedTri, iso: f64) -> IsoSegment {
    if iso < tri.v2 {
        IsoSegment {
            a: edge_point(tri.p1, tri.p2, tri.v1, tri.v2, iso),
            b: edge_point(tri.p1, tri.p3, tri.v1, tri.v3, iso),
            iso,
        }
    } else {
        IsoSegment {
            a: edge_point(tri.p2, tri.p3, tri.v2, tri.v3, iso),
            b: edge_point(tri.p1, tri.p3, tri.v1, tri.v3, iso),
            iso,
        }
    }
}

/// Point on the edge (a, b) where the value crosses `iso`.
fn edge_point(a: DVec3, b: DVec3, va: f64, vb: f64, iso: f64) -> DVec3 {
    let w = 1.0 - (iso - va).abs() / (vb - va).abs();
    a * w + b * (1.0 - w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;

    fn tri(values: [f64; 3]) -> ClassifiedTri {
        let points = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ];
        classify(points, values, 0.0).unwrap()
    }

    fn grid(min: f64, max: f64, count: u32) -> IsoGrid {
        IsoGrid::from_config(&BandConfig {
            min,
            max,
            band_count: count,
            ..BandConfig::default()
        })
    }

    #[test]
    fn test_single_crossing_at_mid_value() {
        let mut t = tri([0.0, 0.5, 1.0]);
        let segments = generate(&mut t, &grid(0.0, 1.0, 2));
        assert_eq!(segments.len(), 1);
        assert!((segments[0].iso - 0.5).abs() < 1e-12);
        // Level 0 never crossed, it became the baseline
        assert!((t.baseline - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_segments_strictly_increasing() {
        let mut t = tri([0.05, 0.42, 0.97]);
        let segments = generate(&mut t, &grid(0.0, 1.0, 10));
        assert!(!segments.is_empty());
        for pair in segments.windows(2) {
            assert!(pair[0].iso < pair[1].iso);
        }
    }

    #[test]
    fn test_endpoints_interpolate_on_edges() {
        let mut t = tri([0.0, 1.0, 1.0]);
        let segments = generate(&mut t, &grid(0.0, 1.0, 4));
        // Levels 0.25, 0.5, 0.75 all sit below v2 (tie at 1.0), crossing
        // edges p1-p2 and p1-p3
        assert_eq!(segments.len(), 3);
        let s = segments[1];
        let expect_a = t.p1 * 0.5 + t.p2 * 0.5;
        let expect_b = t.p1 * 0.5 + t.p3 * 0.5;
        assert!((s.a - expect_a).length() < 1e-12);
        assert!((s.b - expect_b).length() < 1e-12);
    }

    #[test]
    fn test_constant_triangle_has_no_segments() {
        let mut t = tri([0.3, 0.3, 0.3]);
        let segments = generate(&mut t, &grid(0.0, 1.0, 10));
        assert!(segments.is_empty());
    }

    #[test]
    fn test_baseline_tracks_highest_sub_v1_level() {
        let mut t = tri([0.55, 0.7, 0.9]);
        let _ = generate(&mut t, &grid(0.0, 1.0, 10));
        // Levels 0.0 .. 0.5 are at or below v1; the last one wins
        assert!((t.baseline - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_window_clips_levels() {
        let mut t = tri([0.0, 0.5, 1.0]);
        let segments = generate(&mut t, &grid(0.0, 0.4, 4));
        // increment 0.1; levels 0.1, 0.2, 0.3 cross below the 0.4 ceiling
        assert_eq!(segments.len(), 3);
        assert!(segments.iter().all(|s| s.iso < 0.4));
    }

    #[test]
    fn test_begin_snaps_to_increment_multiples() {
        let g = grid(0.12, 1.0, 10);
        // increment 0.088, begin = 0.088 * round(0.12 / 0.088) = 0.088
        assert!((g.increment - 0.088).abs() < 1e-12);
        assert!((g.begin - 0.088).abs() < 1e-12);
    }

    #[test]
    fn test_segment_cap_coarsens_increment() {
        let mut t = tri([0.0, 0.5, 1.0]);
        let segments = generate(&mut t, &grid(0.0, 1.0, 1_000_000));
        assert!(segments.len() <= MAX_SEGMENTS_PER_TRI);
        // Still strictly increasing after coarsening
        for pair in segments.windows(2) {
            assert!(pair[0].iso < pair[1].iso);
        }
    }

    #[test]
    fn test_empty_window_produces_nothing() {
        let mut t = tri([0.0, 0.5, 1.0]);
        let segments = generate(&mut t, &grid(0.5, 0.5, 10));
        assert!(segments.is_empty());
    }
}
