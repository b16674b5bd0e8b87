// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Property-based tests for the incremental triangulation engine.
//!
//! For random point sets the result must be Delaunay, reference only caller
//! points, keep every triangle canonically oriented, share no edge among
//! more than two triangles, and cover every input point. Shallow convex
//! chains put every point on a nearly flat hull.

use ahash::AHashMap;
use drift_delaunay::geometry::CanonicalEdge;
use drift_delaunay::kernel::sort_vertices;
use drift_delaunay::operations::triangulation::validate;
use drift_delaunay::{Point2, triangulate};
use proptest::prelude::*;

fn finite_coordinate() -> impl Strategy<Value = f64> {
    (-100.0..100.0).prop_filter("must be finite", |x: &f64| x.is_finite())
}

fn point_set(max: usize) -> impl Strategy<Value = Vec<Point2<f64>>> {
    prop::collection::vec(
        (finite_coordinate(), finite_coordinate()).prop_map(|(x, y)| Point2::new(x, y)),
        3..=max,
    )
}

/// Points on a wide downward parabola with small jitter. All x are positive,
/// so no four points are cocircular before jitter.
fn flat_chain() -> impl Strategy<Value = Vec<Point2<f64>>> {
    (3usize..=20, 200.0..5000.0f64).prop_flat_map(|(n, radius)| {
        prop::collection::vec((-0.2..0.2f64, -1e-5..1e-5f64), n).prop_map(move |jitter| {
            jitter
                .iter()
                .enumerate()
                .map(|(i, &(jx, jy))| {
                    let x = 1.0 + i as f64 + jx;
                    Point2::new(x, -x * x / (2.0 * radius) + jy)
                })
                .collect()
        })
    })
}

proptest! {
    #[test]
    fn prop_no_sentinel_leakage(points in point_set(40)) {
        let tri = triangulate(&points).unwrap();
        for t in &tri {
            prop_assert!(t.vertices().iter().all(|&v| v < points.len()));
        }
    }

    #[test]
    fn prop_canonical_orientation_idempotent(points in point_set(40)) {
        let tri = triangulate(&points).unwrap();
        for t in &tri {
            prop_assert_eq!(sort_vertices(*t, &points), *t);
        }
    }

    #[test]
    fn prop_edges_shared_at_most_twice(points in point_set(40)) {
        let tri = triangulate(&points).unwrap();
        let mut uses: AHashMap<CanonicalEdge, usize> = AHashMap::default();
        for t in &tri {
            for e in t.edges() {
                *uses.entry(e).or_insert(0) += 1;
            }
        }
        prop_assert!(uses.values().all(|&n| n <= 2));
    }

    #[test]
    fn prop_delaunay_validity(points in point_set(30)) {
        let tri = triangulate(&points).unwrap();
        let report = validate(&points, &tri).unwrap();
        prop_assert!(report.is_delaunay(), "violations: {:?}", report.violations);
    }

    #[test]
    fn prop_every_point_covered(points in point_set(40)) {
        let tri = triangulate(&points).unwrap();
        let report = validate(&points, &tri).unwrap();
        prop_assert!(report.is_valid(), "violations: {:?}", report.violations);
        prop_assert_eq!(tri.used_vertices(), (0..points.len()).collect::<Vec<_>>());
    }

    #[test]
    fn prop_flat_chain_is_fully_triangulated(points in flat_chain()) {
        let tri = triangulate(&points).unwrap();
        let report = validate(&points, &tri).unwrap();
        prop_assert!(report.is_valid(), "violations: {:?}", report.violations);
        prop_assert_eq!(tri.used_vertices(), (0..points.len()).collect::<Vec<_>>());
        prop_assert_eq!(tri.len(), points.len() - 2);
    }
}
