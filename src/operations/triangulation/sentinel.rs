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

//! Supertriangle vertices pushed to infinity.
//!
//! A sentinel sits at `center + R * ray` and the predicates are evaluated in
//! the limit `R -> inf`. Every coordinate becomes a polynomial in `R`; the
//! sign of a determinant is the sign of its highest non-zero coefficient.
//! For a triangle with one sentinel this reduces to "the query point is on
//! the sentinel's side of the real edge", and with two sentinels to the side
//! of the line through the real vertex parallel to the sentinels' rays.
//! No real triangle can then have a sentinel inside its circumcircle, so
//! pruning never eats a hull triangle.

use std::cmp::Ordering;
use std::ops::{Add, Mul, Sub};

use num_traits::Float;

use crate::geometry::{Aabb2, Point2, Triangle, Vector2, VertexId};
use crate::numeric::lit;

/// Arena slots `0..3` hold the supertriangle; caller point `i` lives at
/// `i + SUPER_VERTEX_COUNT`.
pub const SUPER_VERTEX_COUNT: usize = 3;

pub const SQRT_3: f64 = 1.7320508075688772;

/// Distance of the finite anchors from the input, in input extents.
pub const ANCHOR_SCALE: f64 = 64.0;

#[inline]
pub fn is_sentinel(v: VertexId) -> bool {
    v < SUPER_VERTEX_COUNT
}

// coefficients of R^0..R^4
#[derive(Clone, Copy, Debug, PartialEq)]
struct Poly<T>([T; 5]);

impl<T: Float> Poly<T> {
    fn linear(c0: T, c1: T) -> Self {
        let mut k = [T::zero(); 5];
        k[0] = c0;
        k[1] = c1;
        Poly(k)
    }

    fn sign(&self) -> Ordering {
        for &k in self.0.iter().rev() {
            if k > T::zero() {
                return Ordering::Greater;
            }
            if k < T::zero() {
                return Ordering::Less;
            }
        }
        Ordering::Equal
    }
}

impl<T: Float> Add for Poly<T> {
    type Output = Poly<T>;
    fn add(self, rhs: Poly<T>) -> Poly<T> {
        let mut k = self.0;
        for (l, r) in k.iter_mut().zip(rhs.0) {
            *l = *l + r;
        }
        Poly(k)
    }
}

impl<T: Float> Sub for Poly<T> {
    type Output = Poly<T>;
    fn sub(self, rhs: Poly<T>) -> Poly<T> {
        let mut k = self.0;
        for (l, r) in k.iter_mut().zip(rhs.0) {
            *l = *l - r;
        }
        Poly(k)
    }
}

impl<T: Float> Mul for Poly<T> {
    type Output = Poly<T>;
    // only ever applied to operands whose degrees sum to at most 4
    fn mul(self, rhs: Poly<T>) -> Poly<T> {
        let mut k = [T::zero(); 5];
        for i in 0..5 {
            for j in 0..5 - i {
                k[i + j] = k[i + j] + self.0[i] * rhs.0[j];
            }
        }
        Poly(k)
    }
}

#[derive(Clone, Copy)]
struct Lifted<T> {
    x: Poly<T>,
    y: Poly<T>,
}

impl<T: Float> Lifted<T> {
    fn minus(self, o: Lifted<T>) -> Lifted<T> {
        Lifted {
            x: self.x - o.x,
            y: self.y - o.y,
        }
    }

    fn norm2(self) -> Poly<T> {
        self.x * self.x + self.y * self.y
    }

    fn cross(self, o: Lifted<T>) -> Poly<T> {
        self.x * o.y - self.y * o.x
    }
}

/// Center and ray directions of the three sentinels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SentinelFrame<T> {
    pub center: Point2<T>,
    pub rays: [Vector2<T>; 3],
}

impl<T: Float> SentinelFrame<T> {
    pub fn new(center: Point2<T>, rays: [Vector2<T>; 3]) -> Self {
        SentinelFrame { center, rays }
    }

    /// Equilateral layout around `bounds`: the finite anchors form a triangle
    /// whose inscribed circle has radius `ANCHOR_SCALE * extent + 1`.
    pub fn enclosing(bounds: &Aabb2<T>) -> Self {
        let r = lit::<T>(ANCHOR_SCALE) * bounds.extent() + T::one();
        let sqrt_3: T = lit(SQRT_3);
        let two = T::one() + T::one();
        SentinelFrame {
            center: bounds.center(),
            rays: [
                Vector2::new(T::zero(), two * r),
                Vector2::new(-sqrt_3 * r, -r),
                Vector2::new(sqrt_3 * r, -r),
            ],
        }
    }

    /// Finite stand-ins (`R = 1`) stored in the vertex arena. They only feed
    /// `sort_vertices`; containment never looks at them.
    pub fn anchors(&self) -> [Point2<T>; 3] {
        self.rays.map(|ray| self.center + ray)
    }

    /// Whether `d` is strictly inside the circumcircle of `t` once its
    /// sentinel vertices are sent to infinity. Works for either winding.
    pub fn circumcircle_contains(&self, t: Triangle, vertices: &[Point2<T>], d: &Point2<T>) -> bool {
        let [a, b, c] = t.vertices().map(|v| self.lift(v, vertices, d));
        let det = a.norm2() * b.cross(c) - b.norm2() * a.cross(c) + c.norm2() * a.cross(b);
        let orient = b.minus(a).cross(c.minus(a));
        matches!(
            (det.sign(), orient.sign()),
            (Ordering::Greater, Ordering::Greater) | (Ordering::Less, Ordering::Less)
        )
    }

    // vertex position relative to `d`
    fn lift(&self, v: VertexId, vertices: &[Point2<T>], d: &Point2<T>) -> Lifted<T> {
        if is_sentinel(v) {
            let o = self.center - *d;
            let ray = self.rays[v];
            Lifted {
                x: Poly::linear(o.x, ray.x),
                y: Poly::linear(o.y, ray.y),
            }
        } else {
            let o = vertices[v] - *d;
            Lifted {
                x: Poly::linear(o.x, T::zero()),
                y: Poly::linear(o.y, T::zero()),
            }
        }
    }
}
