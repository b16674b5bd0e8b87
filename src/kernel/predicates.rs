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

use std::cmp::Ordering;

use num_traits::Float;

use crate::geometry::{Aabb2, Point2, Triangle};

/// In-circle determinant of `d` against the circle through `a`, `b`, `c`.
///
/// Each vertex is translated so `d` sits at the origin and the 3x3 lifted
/// determinant is expanded along the squared norms. Positive means `d` is
/// strictly inside when `a`, `b`, `c` run counter-clockwise; reversing the
/// winding flips the sign.
pub fn in_circle_det<T: Float>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>, d: &Point2<T>) -> T {
    let ax = a.x - d.x;
    let ay = a.y - d.y;
    let bx = b.x - d.x;
    let by = b.y - d.y;
    let cx = c.x - d.x;
    let cy = c.y - d.y;

    (ax * ax + ay * ay) * (bx * cy - cx * by) - (bx * bx + by * by) * (ax * cy - cx * ay)
        + (cx * cx + cy * cy) * (ax * by - bx * ay)
}

/// True iff `d` lies strictly inside the circumcircle of the counter-clockwise
/// triangle `a`, `b`, `c`, i.e. iff the determinant is strictly positive. No
/// tolerance: a cocircular `d` whose determinant evaluates to exactly zero
/// reports `false`, and rounding may push near-cocircular points either way.
#[inline]
pub fn in_circle<T: Float>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>, d: &Point2<T>) -> bool {
    in_circle_det(a, b, c, d) > T::zero()
}

/// [`in_circle`] for a triangle whose ids index `vertices`.
#[inline]
pub fn circumcircle_contains<T: Float>(t: Triangle, vertices: &[Point2<T>], d: &Point2<T>) -> bool {
    in_circle(&vertices[t.a], &vertices[t.b], &vertices[t.c], d)
}

/// Twice the signed area of `a`, `b`, `c` (CCW > 0, CW < 0, 0 if collinear).
pub fn orient2d<T: Float>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T {
    (*b - *a).cross(&(*c - *a))
}

pub fn centroid<T: Float>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> Point2<T> {
    let three = T::one() + T::one() + T::one();
    Point2::new((a.x + b.x + c.x) / three, (a.y + b.y + c.y) / three)
}

/// Puts a triangle in canonical orientation.
///
/// Vertices are ordered by descending `atan2(x - cx, y - cy)` around the
/// centroid. The swapped arguments measure the angle clockwise from +y, so
/// descending order walks the vertices counter-clockwise in the usual x-right,
/// y-up frame, which is the winding [`in_circle`] expects. Applying it twice
/// yields the same triangle.
pub fn sort_vertices<T: Float>(t: Triangle, vertices: &[Point2<T>]) -> Triangle {
    let g = centroid(&vertices[t.a], &vertices[t.b], &vertices[t.c]);
    let mut keyed = t.vertices().map(|v| {
        let p = &vertices[v];
        ((p.x - g.x).atan2(p.y - g.y), v)
    });
    keyed.sort_by(|l, r| r.0.partial_cmp(&l.0).unwrap_or(Ordering::Equal));
    Triangle::new(keyed[0].1, keyed[1].1, keyed[2].1)
}

/// Bounding box of a point set as `(minx, miny, maxx, maxy)`.
pub fn bbox<T: Float>(points: &[Point2<T>]) -> Option<(T, T, T, T)> {
    Aabb2::from_points(points).map(|bb| (bb.min.x, bb.min.y, bb.max.x, bb.max.y))
}
