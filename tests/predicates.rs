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

use approx::assert_relative_eq;
use drift_delaunay::geometry::{Point2, Triangle};
use drift_delaunay::kernel::{
    F64Kernel, Kernel2, bbox, centroid, in_circle, in_circle_det, orient2d, sort_vertices,
};

fn reference_triangle() -> (Vec<Point2<f64>>, Triangle) {
    let vertices = vec![
        Point2::new(10.0, 0.0),
        Point2::new(-20.0, 0.0),
        Point2::new(0.0, 13.0),
    ];
    let t = sort_vertices(Triangle::new(0, 1, 2), &vertices);
    (vertices, t)
}

#[test]
fn test_sort_vertices_is_counter_clockwise() {
    let (v, t) = reference_triangle();
    assert_eq!(t, Triangle::new(0, 2, 1));
    assert!(orient2d(&v[t.a], &v[t.b], &v[t.c]) > 0.0);
}

#[test]
fn test_sort_vertices_idempotent() {
    let (v, t) = reference_triangle();
    assert_eq!(sort_vertices(t, &v), t);

    // any starting permutation lands on the same canonical triangle
    for start in [
        Triangle::new(1, 0, 2),
        Triangle::new(2, 1, 0),
        Triangle::new(1, 2, 0),
    ] {
        assert_eq!(sort_vertices(start, &v), t);
    }
}

#[test]
fn test_in_circle_classifies_reference_points() {
    let (v, t) = reference_triangle();
    let (a, b, c) = (&v[t.a], &v[t.b], &v[t.c]);

    for inside in [(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)] {
        let d = Point2::new(inside.0, inside.1);
        assert!(in_circle(a, b, c, &d), "{inside:?} should be inside");
    }
    for outside in [
        (100.0, 100.0),
        (100.0, -100.0),
        (-100.0, 100.0),
        (-100.0, -100.0),
    ] {
        let d = Point2::new(outside.0, outside.1);
        assert!(!in_circle(a, b, c, &d), "{outside:?} should be outside");
    }
}

#[test]
fn test_in_circle_winding_flips_sign() {
    let (v, t) = reference_triangle();
    let origin = Point2::new(0.0, 0.0);
    let ccw = in_circle_det(&v[t.a], &v[t.b], &v[t.c], &origin);
    let cw = in_circle_det(&v[t.a], &v[t.c], &v[t.b], &origin);
    assert!(ccw > 0.0);
    assert_relative_eq!(cw, -ccw);
    assert!(!in_circle(&v[t.a], &v[t.c], &v[t.b], &origin));
}

#[test]
fn test_in_circle_cocircular_is_not_inside() {
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(1.0, 0.0);
    let c = Point2::new(1.0, 1.0);
    let d = Point2::new(0.0, 1.0);
    assert_eq!(in_circle_det(&a, &b, &c, &d), 0.0);
    assert!(!in_circle(&a, &b, &c, &d));
}

#[test]
fn test_centroid_and_bbox() {
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(3.0, 0.0);
    let c = Point2::new(0.0, 6.0);
    let g = centroid(&a, &b, &c);
    assert_relative_eq!(g.x, 1.0);
    assert_relative_eq!(g.y, 2.0);

    assert_eq!(bbox(&[a, b, c]), Some((0.0, 0.0, 3.0, 6.0)));
    assert_eq!(bbox::<f64>(&[]), None);
}

#[test]
fn test_f64_kernel_matches_predicates() {
    let (v, t) = reference_triangle();
    let d = Point2::new(1.0, 1.0);
    assert!(F64Kernel::in_circle(&v[t.a], &v[t.b], &v[t.c], &d).unwrap());
    assert_eq!(
        F64Kernel::orient2d(&v[t.a], &v[t.b], &v[t.c]).unwrap(),
        std::cmp::Ordering::Greater
    );
}

#[cfg(feature = "exact")]
#[test]
fn test_bigrational_kernel_reference_points() {
    use drift_delaunay::kernel::BigRationalKernel;
    use std::cmp::Ordering;

    let (v, t) = reference_triangle();
    let (a, b, c) = (&v[t.a], &v[t.b], &v[t.c]);
    assert!(BigRationalKernel::in_circle(a, b, c, &Point2::new(0.0, 0.0)).unwrap());
    assert!(!BigRationalKernel::in_circle(a, b, c, &Point2::new(100.0, 100.0)).unwrap());
    assert_eq!(BigRationalKernel::orient2d(a, b, c).unwrap(), Ordering::Greater);
    assert_eq!(
        BigRationalKernel::orient2d(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 1.0),
            &Point2::new(2.0, 2.0)
        )
        .unwrap(),
        Ordering::Equal
    );
}

#[cfg(feature = "exact")]
#[test]
fn test_bigrational_kernel_rejects_nan() {
    use drift_delaunay::TriangulationError;
    use drift_delaunay::kernel::BigRationalKernel;

    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(1.0, 0.0);
    let c = Point2::new(0.0, 1.0);
    let err = BigRationalKernel::in_circle(&a, &b, &c, &Point2::new(f64::NAN, 0.0)).unwrap_err();
    assert!(matches!(err, TriangulationError::Unrepresentable { .. }));
}
