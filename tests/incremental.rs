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

use drift_delaunay::operations::triangulation::{InsertionReport, validate};
use drift_delaunay::{
    Aabb2, Point2, SuperTriangle, TriangulationConfig, TriangulationError, Triangulator,
    triangulate_with,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn classic() -> TriangulationConfig<f64> {
    TriangulationConfig::default().with_super_triangle(SuperTriangle::classic())
}

fn unit_bounds() -> Aabb2<f64> {
    Aabb2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0))
}

#[test]
fn test_fresh_triangulator_holds_only_super_triangle() {
    let t = Triangulator::new(classic(), &unit_bounds());
    assert!(t.is_empty());
    assert_eq!(t.store().len(), 1);
    assert_eq!(t.super_vertices().len(), 3);
    assert!(t.triangulation().is_empty());
}

#[test]
fn test_first_insertion_splits_super_triangle() {
    let mut t = Triangulator::new(classic(), &unit_bounds());
    let (index, report) = t.insert_reporting(Point2::new(0.0, 0.0)).unwrap();
    assert_eq!(index, 0);
    assert_eq!(
        report,
        InsertionReport {
            invalidated: 1,
            created: 3
        }
    );
    assert_eq!(t.store().len(), 3);
    // every triangle still touches the supertriangle
    assert!(t.triangulation().is_empty());
}

#[test]
fn test_insert_outside_is_rejected_without_side_effects() {
    let mut t = Triangulator::new(classic(), &unit_bounds());
    t.insert(Point2::new(0.0, 0.0)).unwrap();
    let before = t.store().clone();
    assert_eq!(
        t.insert(Point2::new(0.0, 2000.0)).unwrap_err(),
        TriangulationError::OutsideSuperTriangle { index: 1 }
    );
    assert_eq!(
        t.insert(Point2::new(f64::INFINITY, 0.0)).unwrap_err(),
        TriangulationError::NonFiniteCoordinate { index: 1 }
    );
    assert_eq!(t.len(), 1);
    assert_eq!(t.store(), &before);
}

#[test]
fn test_hundred_and_first_point() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut points: Vec<Point2<f64>> = (0..100)
        .map(|_| Point2::new(rng.random_range(-25.0..25.0), rng.random_range(-25.0..25.0)))
        .collect();

    let mut live = Triangulator::new(classic(), &unit_bounds());
    live.extend(points.iter().copied()).unwrap();
    let before = live.triangulation();
    assert_eq!(before.point_count(), 100);

    let extra = Point2::new(1.5, -2.5);
    assert_eq!(live.insert(extra).unwrap(), 100);
    points.push(extra);

    let after = live.triangulation();
    assert_eq!(after.point_count(), 101);
    assert!(after.used_vertices().contains(&100));
    let report = validate(&points, &after).unwrap();
    assert!(report.is_delaunay(), "violations: {:?}", report.violations);

    // same supertriangle, same order: identical to a full rebuild
    let rebuilt = triangulate_with(&points, &classic()).unwrap();
    assert_eq!(after, rebuilt);
    assert_eq!(live.points(), points.as_slice());
}

#[test]
fn test_snapshot_leaves_store_live() {
    let mut t = Triangulator::new(TriangulationConfig::default(), &unit_bounds());
    t.extend([
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(0.0, 1.0),
    ])
    .unwrap();
    let raw = t.store().len();
    assert_eq!(t.triangulation().len(), 1);
    assert_eq!(t.store().len(), raw);

    t.insert(Point2::new(0.25, 0.25)).unwrap();
    let tri = t.clone().into_triangulation();
    assert_eq!(tri.len(), 3);
    assert_eq!(tri, t.triangulation());
}

#[test]
fn test_unbounded_accepts_points_far_outside_hint() {
    let mut t = Triangulator::new(TriangulationConfig::default(), &unit_bounds());
    assert!(t.encloses(&Point2::new(1e6, -1e6)));
    assert!(!t.encloses(&Point2::new(f64::INFINITY, 0.0)));

    let points = [
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(0.0, 1.0),
        Point2::new(500.0, 800.0),
        Point2::new(-300.0, 2.0),
    ];
    t.extend(points).unwrap();
    let tri = t.triangulation();
    let report = validate(&points[..], &tri).unwrap();
    assert!(report.is_valid(), "violations: {:?}", report.violations);
    assert_eq!(tri.used_vertices(), vec![0, 1, 2, 3, 4]);
}
