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
use rug::Rational;

use crate::error::TriangulationError;
use crate::geometry::Point2;
use crate::kernel::kernel::Kernel2;

/// Kernel using rug::Rational (arbitrary-precision rationals backed by GMP).
///
/// Every finite float is a dyadic rational, so lifting is lossless and the
/// determinant signs are exact.
pub struct BigRationalKernel;

struct ExactPoint {
    x: Rational,
    y: Rational,
}

fn lift_scalar<T: Float>(v: T) -> Result<Rational, TriangulationError> {
    let f = v.to_f64().unwrap_or(f64::NAN);
    Rational::from_f64(f).ok_or(TriangulationError::Unrepresentable { value: f })
}

fn lift<T: Float>(p: &Point2<T>) -> Result<ExactPoint, TriangulationError> {
    Ok(ExactPoint {
        x: lift_scalar(p.x)?,
        y: lift_scalar(p.y)?,
    })
}

// (p - origin) as exact components
fn relative<T: Float>(
    p: &Point2<T>,
    origin: &ExactPoint,
) -> Result<(Rational, Rational), TriangulationError> {
    let q = lift(p)?;
    Ok((
        Rational::from(&q.x - &origin.x),
        Rational::from(&q.y - &origin.y),
    ))
}

fn cross(ux: &Rational, uy: &Rational, vx: &Rational, vy: &Rational) -> Rational {
    Rational::from(ux * vy) - Rational::from(uy * vx)
}

impl Kernel2 for BigRationalKernel {
    fn orient2d<T: Float>(
        a: &Point2<T>,
        b: &Point2<T>,
        c: &Point2<T>,
    ) -> Result<Ordering, TriangulationError> {
        let origin = lift(a)?;
        let (bx, by) = relative(b, &origin)?;
        let (cx, cy) = relative(c, &origin)?;
        Ok(cross(&bx, &by, &cx, &cy).cmp0())
    }

    fn in_circle<T: Float>(
        a: &Point2<T>,
        b: &Point2<T>,
        c: &Point2<T>,
        d: &Point2<T>,
    ) -> Result<bool, TriangulationError> {
        let origin = lift(d)?;
        let (ax, ay) = relative(a, &origin)?;
        let (bx, by) = relative(b, &origin)?;
        let (cx, cy) = relative(c, &origin)?;

        let la = Rational::from(&ax * &ax) + Rational::from(&ay * &ay);
        let lb = Rational::from(&bx * &bx) + Rational::from(&by * &by);
        let lc = Rational::from(&cx * &cx) + Rational::from(&cy * &cy);

        let det = la * cross(&bx, &by, &cx, &cy) - lb * cross(&ax, &ay, &cx, &cy)
            + lc * cross(&ax, &ay, &bx, &by);
        Ok(det.cmp0() == Ordering::Greater)
    }
}
